use chrono::Datelike;

use crate::effect::Effect;
use crate::error::FieldError;
use crate::field::{FieldId, FormSnapshot};
use crate::rules::FieldRules;

/// Success acknowledgment shown after a clean submit.
pub const SUCCESS_MESSAGE: &str = "Registration successful!";

/// Runs the configured rules against form snapshots and produces the
/// display effects that keep annotations and the submit control in sync.
#[derive(Debug, Clone)]
pub struct Validator {
    rules: FieldRules,
    current_year: i32,
}

impl Validator {
    pub fn new(rules: FieldRules) -> Self {
        Self {
            rules,
            current_year: chrono::Local::now().year(),
        }
    }

    /// Fix the year used by age rules. For tests.
    pub fn with_current_year(rules: FieldRules, current_year: i32) -> Self {
        Self {
            rules,
            current_year,
        }
    }

    pub fn rules(&self) -> &FieldRules {
        &self.rules
    }

    /// Field-level validation: clear the field's annotation, re-evaluate its
    /// rule, and recompute submit enablement.
    ///
    /// Re-validating the password also re-validates the confirmation when it
    /// already holds a value, so the match check never lags.
    pub fn validate_field(&self, field: FieldId, snapshot: &FormSnapshot) -> Vec<Effect> {
        let mut effects = Vec::new();
        self.revalidate_into(field, snapshot, &mut effects);

        if field == FieldId::Password && !snapshot.confirm_password.is_empty() {
            self.revalidate_into(FieldId::ConfirmPassword, snapshot, &mut effects);
        }

        effects.push(Effect::SetSubmitEnabled(self.is_form_valid(snapshot)));
        effects
    }

    fn revalidate_into(&self, field: FieldId, snapshot: &FormSnapshot, effects: &mut Vec<Effect>) {
        effects.push(Effect::ClearError(field));

        let failure = self
            .rules
            .rule(field)
            .and_then(|rule| rule.evaluate(field, snapshot, self.current_year));

        if let Some(message) = failure {
            log::debug!("[validate] {field}: {message}");
            effects.push(Effect::ShowError(FieldError::new(field, message)));
        }
    }

    /// Whether every rule currently passes. The submit control's enabled
    /// state is exactly this value at all times.
    pub fn is_form_valid(&self, snapshot: &FormSnapshot) -> bool {
        self.rules
            .iter()
            .all(|(field, rule)| rule.evaluate(*field, snapshot, self.current_year).is_none())
    }

    /// Recompute submit enablement after a terms checkbox change.
    pub fn terms_changed(&self, snapshot: &FormSnapshot) -> Vec<Effect> {
        vec![Effect::SetSubmitEnabled(self.is_form_valid(snapshot))]
    }

    /// Submission: clear all annotations, re-run every rule against current
    /// values independent of field-level state, and either report each
    /// failure or acknowledge success and reset the form.
    pub fn submit(&self, snapshot: &FormSnapshot) -> Vec<Effect> {
        let mut effects = vec![Effect::ClearAllErrors];
        let mut failed = false;

        for (field, rule) in self.rules.iter() {
            if let Some(message) = rule.evaluate(*field, snapshot, self.current_year) {
                failed = true;
                effects.push(Effect::ShowError(FieldError::new(*field, message)));
            }
        }

        if failed {
            log::debug!("[submit] rejected, form has invalid fields");
            return effects;
        }

        log::info!("[submit] accepted");
        effects.push(Effect::ShowSuccess(SUCCESS_MESSAGE.to_string()));
        effects.push(Effect::ResetForm);
        // A freshly reset form is not complete
        effects.push(Effect::SetSubmitEnabled(false));
        effects
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(FieldRules::registration())
    }
}
