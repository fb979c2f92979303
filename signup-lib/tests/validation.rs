use signup_lib::{Effect, FieldId, FieldRules, FormSnapshot, Rule, Validator};

const YEAR: i32 = 2026;

fn validator() -> Validator {
    Validator::with_current_year(FieldRules::registration(), YEAR)
}

/// A snapshot where every rule passes.
fn valid_snapshot() -> FormSnapshot {
    FormSnapshot {
        full_name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        password: "Abcdef1!".to_string(),
        confirm_password: "Abcdef1!".to_string(),
        phone: String::new(),
        dob: "2000-06-15".to_string(),
        terms_accepted: true,
    }
}

fn errors_for(effects: &[Effect], field: FieldId) -> Vec<&str> {
    effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::ShowError(err) if err.field == field => Some(err.message.as_str()),
            _ => None,
        })
        .collect()
}

// ============================================================================
// Individual Rules
// ============================================================================

#[test]
fn test_name_rule() {
    let rule = Rule::Name { min: 2 };
    let mut snapshot = FormSnapshot::new();

    snapshot.full_name = "A".to_string();
    assert!(rule.evaluate(FieldId::FullName, &snapshot, YEAR).is_some());

    // Whitespace doesn't count toward the minimum
    snapshot.full_name = " A  ".to_string();
    assert!(rule.evaluate(FieldId::FullName, &snapshot, YEAR).is_some());

    snapshot.full_name = "Al".to_string();
    assert!(rule.evaluate(FieldId::FullName, &snapshot, YEAR).is_none());
}

#[test]
fn test_email_rule() {
    let rule = Rule::Email;
    let mut snapshot = FormSnapshot::new();

    for bad in [
        "", "plain", "a@b", "@b.com", "a@", "a b@c.de", "a@b c.de", "a@.com", "a@com.", "a@@b.com",
    ] {
        snapshot.email = bad.to_string();
        assert!(
            rule.evaluate(FieldId::Email, &snapshot, YEAR).is_some(),
            "{bad:?} should be invalid"
        );
    }

    for good in ["a@b.cd", "first.last@sub.domain.org", "x@y.z"] {
        snapshot.email = good.to_string();
        assert!(
            rule.evaluate(FieldId::Email, &snapshot, YEAR).is_none(),
            "{good:?} should be valid"
        );
    }
}

#[test]
fn test_password_rule_reports_first_failing_requirement() {
    let rule = Rule::Password;
    let mut snapshot = FormSnapshot::new();

    let cases = [
        ("abc", "at least 8 characters"),
        ("abcdefg1!", "one uppercase letter"),
        ("ABCDEFG1!", "one lowercase letter"),
        ("Abcdefgh!", "one number"),
        ("Abcdefg1", "one special character"),
    ];
    for (value, fragment) in cases {
        snapshot.password = value.to_string();
        let message = rule
            .evaluate(FieldId::Password, &snapshot, YEAR)
            .unwrap_or_else(|| panic!("{value:?} should be invalid"));
        assert!(
            message.contains(fragment),
            "{value:?}: expected {fragment:?} in {message:?}"
        );
    }

    snapshot.password = "Abcdef1!".to_string();
    assert!(rule.evaluate(FieldId::Password, &snapshot, YEAR).is_none());
}

#[test]
fn test_confirm_password_rule() {
    let rule = Rule::MatchesPassword;
    let mut snapshot = FormSnapshot::new();
    snapshot.password = "Abcdef1!".to_string();

    // Empty confirmation is not a match
    snapshot.confirm_password = String::new();
    assert!(
        rule.evaluate(FieldId::ConfirmPassword, &snapshot, YEAR)
            .is_some()
    );

    snapshot.confirm_password = "different".to_string();
    assert_eq!(
        rule.evaluate(FieldId::ConfirmPassword, &snapshot, YEAR),
        Some("Passwords do not match".to_string())
    );

    snapshot.confirm_password = "Abcdef1!".to_string();
    assert!(
        rule.evaluate(FieldId::ConfirmPassword, &snapshot, YEAR)
            .is_none()
    );
}

#[test]
fn test_phone_rule_optional() {
    let rule = Rule::Phone { digits: 10 };
    let mut snapshot = FormSnapshot::new();

    // Optional: empty passes
    snapshot.phone = String::new();
    assert!(rule.evaluate(FieldId::Phone, &snapshot, YEAR).is_none());

    snapshot.phone = "12345".to_string();
    assert!(rule.evaluate(FieldId::Phone, &snapshot, YEAR).is_some());

    snapshot.phone = "123456789x".to_string();
    assert!(rule.evaluate(FieldId::Phone, &snapshot, YEAR).is_some());

    snapshot.phone = "0123456789".to_string();
    assert!(rule.evaluate(FieldId::Phone, &snapshot, YEAR).is_none());
}

#[test]
fn test_minimum_age_is_calendar_year_difference() {
    let rule = Rule::MinimumAge { years: 18 };
    let mut snapshot = FormSnapshot::new();

    // Age 17 by year difference
    snapshot.dob = format!("{}-06-15", YEAR - 17);
    assert_eq!(
        rule.evaluate(FieldId::Dob, &snapshot, YEAR),
        Some("You must be at least 18 years old".to_string())
    );

    // Year difference of exactly 18 passes even if the birthday is in
    // December and hasn't happened yet
    snapshot.dob = format!("{}-12-31", YEAR - 18);
    assert!(rule.evaluate(FieldId::Dob, &snapshot, YEAR).is_none());

    // Unparseable dates fail with a distinct message
    snapshot.dob = "not-a-date".to_string();
    assert_eq!(
        rule.evaluate(FieldId::Dob, &snapshot, YEAR),
        Some("Please enter a valid date of birth".to_string())
    );

    snapshot.dob = String::new();
    assert!(rule.evaluate(FieldId::Dob, &snapshot, YEAR).is_some());
}

#[test]
fn test_terms_rule() {
    let rule = Rule::Accepted;
    let mut snapshot = FormSnapshot::new();

    assert!(rule.evaluate(FieldId::Terms, &snapshot, YEAR).is_some());
    snapshot.terms_accepted = true;
    assert!(rule.evaluate(FieldId::Terms, &snapshot, YEAR).is_none());
}

// ============================================================================
// Aggregate Validity
// ============================================================================

#[test]
fn test_form_validity_equals_and_of_all_rules() {
    let validator = validator();
    let snapshot = valid_snapshot();

    // No drift: the aggregate matches per-rule evaluation for a matrix of
    // single-field mutations
    let mutations: Vec<Box<dyn Fn(&mut FormSnapshot)>> = vec![
        Box::new(|s| s.full_name = "A".to_string()),
        Box::new(|s| s.email = "nope".to_string()),
        Box::new(|s| s.password = "short".to_string()),
        Box::new(|s| s.confirm_password = "other".to_string()),
        Box::new(|s| s.phone = "123".to_string()),
        Box::new(|s| s.dob = format!("{}-01-01", YEAR - 10)),
        Box::new(|s| s.terms_accepted = false),
        Box::new(|_| {}),
    ];

    for mutate in &mutations {
        let mut mutated = snapshot.clone();
        mutate(&mut mutated);

        let expected = validator.rules().iter().all(|(field, rule)| {
            rule.evaluate(*field, &mutated, YEAR).is_none()
        });
        assert_eq!(validator.is_form_valid(&mutated), expected);
    }

    assert!(validator.is_form_valid(&snapshot));
}

#[test]
fn test_terms_change_recomputes_submit_state() {
    let validator = validator();
    let mut snapshot = valid_snapshot();

    assert_eq!(
        validator.terms_changed(&snapshot),
        vec![Effect::SetSubmitEnabled(true)]
    );

    snapshot.terms_accepted = false;
    assert_eq!(
        validator.terms_changed(&snapshot),
        vec![Effect::SetSubmitEnabled(false)]
    );
}

// ============================================================================
// Field-Level Validation
// ============================================================================

#[test]
fn test_validate_field_clears_before_showing() {
    let validator = validator();
    let mut snapshot = valid_snapshot();
    snapshot.email = "bad".to_string();

    let effects = validator.validate_field(FieldId::Email, &snapshot);

    // Clear first, then the new annotation, then the submit recompute
    assert_eq!(effects[0], Effect::ClearError(FieldId::Email));
    assert_eq!(errors_for(&effects, FieldId::Email).len(), 1);
    assert_eq!(effects.last(), Some(&Effect::SetSubmitEnabled(false)));
}

#[test]
fn test_validate_field_is_idempotent() {
    let validator = validator();
    let mut snapshot = valid_snapshot();
    snapshot.password = "abc".to_string();

    // Same input twice yields the same single annotation, not duplicates
    let first = validator.validate_field(FieldId::Password, &snapshot);
    let second = validator.validate_field(FieldId::Password, &snapshot);
    assert_eq!(first, second);
    assert_eq!(errors_for(&first, FieldId::Password).len(), 1);
}

#[test]
fn test_validate_password_revalidates_filled_confirmation() {
    let validator = validator();
    let mut snapshot = valid_snapshot();

    // Password changed after confirmation was filled
    snapshot.password = "Changed1!".to_string();
    let effects = validator.validate_field(FieldId::Password, &snapshot);

    assert!(effects.contains(&Effect::ClearError(FieldId::ConfirmPassword)));
    assert_eq!(
        errors_for(&effects, FieldId::ConfirmPassword),
        vec!["Passwords do not match"]
    );

    // Empty confirmation is left alone until the user touches it
    snapshot.confirm_password = String::new();
    let effects = validator.validate_field(FieldId::Password, &snapshot);
    assert!(!effects.contains(&Effect::ClearError(FieldId::ConfirmPassword)));
    assert!(errors_for(&effects, FieldId::ConfirmPassword).is_empty());
}

#[test]
fn test_validate_valid_field_only_clears() {
    let validator = validator();
    let snapshot = valid_snapshot();

    let effects = validator.validate_field(FieldId::Email, &snapshot);
    assert_eq!(
        effects,
        vec![
            Effect::ClearError(FieldId::Email),
            Effect::SetSubmitEnabled(true),
        ]
    );
}

// ============================================================================
// Rule Table Configuration
// ============================================================================

#[test]
fn test_rule_table_rejects_missing_and_duplicate_fields() {
    let err = FieldRules::new(vec![(FieldId::Email, Rule::Email)]).unwrap_err();
    assert!(err.to_string().contains("no rule configured"));

    let mut entries: Vec<_> = FieldRules::registration().iter().cloned().collect();
    entries.push((FieldId::Email, Rule::Email));
    let err = FieldRules::new(entries).unwrap_err();
    assert!(err.to_string().contains("duplicate rule"));
}

#[test]
fn test_rule_table_lookup() {
    let rules = FieldRules::registration();
    assert_eq!(rules.rule(FieldId::Phone), Some(&Rule::Phone { digits: 10 }));
    assert_eq!(rules.iter().count(), FieldId::ALL.len());
}
