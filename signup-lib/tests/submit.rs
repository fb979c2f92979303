use signup_lib::{Effect, FieldId, FieldRules, FormSnapshot, Validator, SUCCESS_MESSAGE};

const YEAR: i32 = 2026;

fn validator() -> Validator {
    Validator::with_current_year(FieldRules::registration(), YEAR)
}

fn valid_snapshot() -> FormSnapshot {
    FormSnapshot {
        full_name: "A B".to_string(),
        email: "x@y.com".to_string(),
        password: "Abcdef1!".to_string(),
        confirm_password: "Abcdef1!".to_string(),
        phone: String::new(),
        dob: format!("{}-03-01", YEAR - 20),
        terms_accepted: true,
    }
}

fn failing_fields(effects: &[Effect]) -> Vec<FieldId> {
    effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::ShowError(err) => Some(err.field),
            _ => None,
        })
        .collect()
}

#[test]
fn test_successful_submit_resets_and_disables() {
    let validator = validator();
    let effects = validator.submit(&valid_snapshot());

    // Clear-all first, defense against stale annotations
    assert_eq!(effects[0], Effect::ClearAllErrors);
    assert!(failing_fields(&effects).is_empty());
    assert_eq!(
        &effects[1..],
        &[
            Effect::ShowSuccess(SUCCESS_MESSAGE.to_string()),
            Effect::ResetForm,
            Effect::SetSubmitEnabled(false),
        ]
    );
}

#[test]
fn test_submit_collects_every_failure() {
    let validator = validator();
    let mut snapshot = valid_snapshot();
    snapshot.full_name = "A".to_string();
    snapshot.email = "nope".to_string();
    snapshot.phone = "12345".to_string();

    let effects = validator.submit(&snapshot);

    assert_eq!(effects[0], Effect::ClearAllErrors);
    assert_eq!(
        failing_fields(&effects),
        vec![FieldId::FullName, FieldId::Email, FieldId::Phone]
    );

    // No success, no reset, no enablement change on failure
    assert!(!effects.iter().any(|e| matches!(
        e,
        Effect::ShowSuccess(_) | Effect::ResetForm | Effect::SetSubmitEnabled(_)
    )));
}

#[test]
fn test_submit_blocked_by_short_password() {
    let validator = validator();
    let mut snapshot = valid_snapshot();
    snapshot.password = "abc".to_string();

    let effects = validator.submit(&snapshot);
    let fields = failing_fields(&effects);

    // Both the password and the now-mismatched confirmation are reported
    assert!(fields.contains(&FieldId::Password));
    assert!(fields.contains(&FieldId::ConfirmPassword));
    assert!(!effects.iter().any(|e| matches!(e, Effect::ShowSuccess(_))));
}

#[test]
fn test_submit_blocked_by_age_alone() {
    let validator = validator();
    let mut snapshot = valid_snapshot();
    snapshot.dob = format!("{}-03-01", YEAR - 17);

    let effects = validator.submit(&snapshot);
    assert_eq!(failing_fields(&effects), vec![FieldId::Dob]);
}

#[test]
fn test_submit_reruns_rules_independent_of_field_state() {
    let validator = validator();

    // An entirely untouched form: every required field fails at once
    let effects = validator.submit(&FormSnapshot::new());
    let fields = failing_fields(&effects);

    assert!(fields.contains(&FieldId::FullName));
    assert!(fields.contains(&FieldId::Email));
    assert!(fields.contains(&FieldId::Password));
    assert!(fields.contains(&FieldId::ConfirmPassword));
    assert!(fields.contains(&FieldId::Dob));
    assert!(fields.contains(&FieldId::Terms));
    // Optional phone is not among them
    assert!(!fields.contains(&FieldId::Phone));
}

#[test]
fn test_submit_checks_terms() {
    let validator = validator();
    let mut snapshot = valid_snapshot();
    snapshot.terms_accepted = false;

    let effects = validator.submit(&snapshot);
    assert_eq!(failing_fields(&effects), vec![FieldId::Terms]);
}
