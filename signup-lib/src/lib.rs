//! Registration form validation core
//!
//! Field rules, form snapshots, and an effect-producing validator that keeps
//! a submit control's enabled state consistent with per-field error state.
//! No visual-tree dependency: rule logic returns display effects for the
//! caller to apply.

pub mod debounce;
pub mod effect;
pub mod error;
pub mod field;
pub mod rules;
pub mod validator;

pub use debounce::{Debouncer, DEFAULT_DEBOUNCE_DELAY};
pub use effect::Effect;
pub use error::{ConfigError, FieldError};
pub use field::{FieldId, FormSnapshot};
pub use rules::{FieldRules, Rule};
pub use validator::{Validator, SUCCESS_MESSAGE};
