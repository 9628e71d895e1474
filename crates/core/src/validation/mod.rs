//! Validation engine for ordered entities.
//!
//! Provides the event/result model and the generic validator, all pure
//! logic without database dependencies.

pub mod result;
pub mod validator;

pub use result::{Severity, Status, ValidationEvent, ValidationResult};
pub use validator::{FieldChecks, MovableValidator};
