//! Calculation request validation and evaluation
//!
//! Validation runs as ordered gates that short-circuit on the first
//! failure: body shape, field presence, numeric typing, operation lookup.
//! The division-by-zero check belongs to evaluation, after all gates pass.

use serde::Serialize;
use serde_json::Value;

use crate::error::{CalcError, Result};
use crate::number::Number;
use crate::operation::Operation;

/// A validated calculation request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationRequest {
    pub a: Number,
    pub b: Number,
    pub operation: Operation,
}

/// The outcome of a calculation, echoing its inputs
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalculationResult {
    pub a: Number,
    pub b: Number,
    pub operation: Operation,
    pub result: Number,
}

impl CalculationRequest {
    /// Build a request from already-validated parts
    pub fn new(a: Number, b: Number, operation: Operation) -> Self {
        Self { a, b, operation }
    }

    /// Validate a decoded JSON body into a request
    pub fn from_json(body: &Value) -> Result<Self> {
        let fields = body.as_object().ok_or(CalcError::BodyRequired)?;

        // Presence gate: null counts as absent.
        let a = fields.get("a").filter(|v| !v.is_null());
        let b = fields.get("b").filter(|v| !v.is_null());
        let operation = fields.get("operation").filter(|v| !v.is_null());
        let (Some(a), Some(b), Some(operation)) = (a, b, operation) else {
            return Err(CalcError::MissingFields);
        };

        let a = Number::from_json(a).ok_or(CalcError::NonNumeric)?;
        let b = Number::from_json(b).ok_or(CalcError::NonNumeric)?;

        // A non-string operation value is reported as unknown, rendered
        // the way it appeared on the wire.
        let operation = match operation.as_str() {
            Some(name) => name.parse::<Operation>()?,
            None => return Err(CalcError::UnknownOperation(operation.to_string())),
        };

        Ok(Self { a, b, operation })
    }

    /// Evaluate the request into a result
    pub fn evaluate(&self) -> Result<CalculationResult> {
        let result = self.operation.apply(self.a, self.b)?;
        Ok(CalculationResult {
            a: self.a,
            b: self.b,
            operation: self.operation,
            result,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn valid_request_parses_and_evaluates() {
        let body = json!({"a": 10, "b": 5, "operation": "add"});
        let request = CalculationRequest::from_json(&body).unwrap();
        let result = request.evaluate().unwrap();
        assert_eq!(result.a, Number::Int(10));
        assert_eq!(result.b, Number::Int(5));
        assert_eq!(result.operation, Operation::Add);
        assert_eq!(result.result, Number::Int(15));
    }

    #[test]
    fn non_object_bodies_are_rejected() {
        for body in [json!(null), json!([1, 2]), json!("a=1"), json!(42)] {
            let err = CalculationRequest::from_json(&body).unwrap_err();
            assert_eq!(err, CalcError::BodyRequired);
        }
    }

    #[test]
    fn missing_fields_are_rejected() {
        let bodies = [
            json!({}),
            json!({"a": 10}),
            json!({"a": 10, "b": 5}),
            json!({"a": 10, "operation": "add"}),
            json!({"a": 10, "b": null, "operation": "add"}),
        ];
        for body in bodies {
            let err = CalculationRequest::from_json(&body).unwrap_err();
            assert_eq!(err, CalcError::MissingFields);
        }
    }

    #[test]
    fn presence_is_checked_before_typing() {
        // `a` is non-numeric AND `operation` is absent; the presence gate
        // fires first.
        let body = json!({"a": "abc", "b": 5});
        let err = CalculationRequest::from_json(&body).unwrap_err();
        assert_eq!(err, CalcError::MissingFields);
    }

    #[test]
    fn numeric_strings_are_rejected() {
        let body = json!({"a": "10", "b": 5, "operation": "add"});
        let err = CalculationRequest::from_json(&body).unwrap_err();
        assert_eq!(err, CalcError::NonNumeric);

        let body = json!({"a": 10, "b": true, "operation": "add"});
        let err = CalculationRequest::from_json(&body).unwrap_err();
        assert_eq!(err, CalcError::NonNumeric);
    }

    #[test]
    fn typing_is_checked_before_operation_lookup() {
        let body = json!({"a": "abc", "b": 5, "operation": "modulo"});
        let err = CalculationRequest::from_json(&body).unwrap_err();
        assert_eq!(err, CalcError::NonNumeric);
    }

    #[test]
    fn unknown_operations_carry_the_name() {
        let body = json!({"a": 10, "b": 5, "operation": "modulo"});
        let err = CalculationRequest::from_json(&body).unwrap_err();
        assert_eq!(err, CalcError::UnknownOperation("modulo".to_string()));
    }

    #[test]
    fn non_string_operations_are_unknown() {
        let body = json!({"a": 10, "b": 5, "operation": 7});
        let err = CalculationRequest::from_json(&body).unwrap_err();
        assert_eq!(err, CalcError::UnknownOperation("7".to_string()));
    }

    #[test]
    fn division_by_zero_fails_at_evaluation() {
        let body = json!({"a": 10, "b": 0, "operation": "divide"});
        let request = CalculationRequest::from_json(&body).unwrap();
        let err = request.evaluate().unwrap_err();
        assert_eq!(err, CalcError::DivisionByZero);
    }

    #[test]
    fn division_keeps_float_typing() {
        let body = json!({"a": 10, "b": 2, "operation": "divide"});
        let result = CalculationRequest::from_json(&body)
            .unwrap()
            .evaluate()
            .unwrap();
        assert_eq!(result.result, Number::Float(5.0));
    }

    #[test]
    fn result_serializes_with_echoed_inputs() {
        let body = json!({"a": 1.5, "b": 2.5, "operation": "add"});
        let result = CalculationRequest::from_json(&body)
            .unwrap()
            .evaluate()
            .unwrap();
        let wire = serde_json::to_value(result).unwrap();
        assert_eq!(
            wire,
            json!({"a": 1.5, "b": 2.5, "operation": "add", "result": 4.0})
        );
    }
}
