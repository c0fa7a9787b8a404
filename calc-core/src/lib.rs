//! Calc Core Library
//!
//! This crate provides the calculation engine for the calc-api demo service.
//! A decoded JSON body passes through an ordered validation pipeline into a
//! [`CalculationRequest`], which evaluates to a [`CalculationResult`] echoing
//! its inputs alongside the computed value.

pub mod error;
pub mod number;
pub mod operation;
pub mod request;

pub use error::{CalcError, Result};
pub use number::Number;
pub use operation::{Operation, SUPPORTED_OPERATIONS};
pub use request::{CalculationRequest, CalculationResult};
