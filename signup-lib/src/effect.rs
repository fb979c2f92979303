use crate::error::FieldError;
use crate::field::FieldId;

/// A display change the caller must apply to the visual tree.
///
/// Rule evaluation never touches the tree itself; every validation pass
/// returns a list of these instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Remove the error annotation for a field, if one is shown.
    ClearError(FieldId),
    /// Show the error annotation for a field, replacing any existing one.
    ShowError(FieldError),
    /// Remove every error annotation.
    ClearAllErrors,
    /// Enable or disable the submit control.
    SetSubmitEnabled(bool),
    /// Show the success acknowledgment.
    ShowSuccess(String),
    /// Reset every field value and the terms flag.
    ResetForm,
}
