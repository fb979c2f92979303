use chrono::{Datelike, NaiveDate};

use crate::error::ConfigError;
use crate::field::{FieldId, FormSnapshot};

/// Symbols the password rule accepts as special characters.
pub const PASSWORD_SYMBOLS: &str = "@$!%*?&";

/// The validity predicate attached to a field.
///
/// Evaluation is pure: given the current form snapshot it returns `None`
/// (valid) or the user-facing error message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Trimmed value must be at least `min` characters.
    Name { min: usize },
    /// Value must have a `local@domain.tld` shape.
    Email,
    /// Length >= 8 with upper, lower, digit, and one of [`PASSWORD_SYMBOLS`].
    Password,
    /// Value must be non-empty and equal to the password field.
    MatchesPassword,
    /// Optional: empty passes, otherwise exactly `digits` digits.
    Phone { digits: usize },
    /// Calendar-year difference between now and the birth year must be
    /// at least `years`. Not a full elapsed-age calculation.
    MinimumAge { years: i32 },
    /// Checkbox must be checked.
    Accepted,
}

impl Rule {
    /// Evaluate this rule for `field` against the current snapshot.
    /// Returns `None` when valid, or the error message to display.
    pub fn evaluate(
        &self,
        field: FieldId,
        snapshot: &FormSnapshot,
        current_year: i32,
    ) -> Option<String> {
        let value = snapshot.value(field);

        match self {
            Rule::Name { min } => {
                if value.trim().chars().count() < *min {
                    Some(format!("Name must be at least {min} characters long"))
                } else {
                    None
                }
            }

            Rule::Email => {
                if is_valid_email(value) {
                    None
                } else {
                    Some("Please enter a valid email address".to_string())
                }
            }

            Rule::Password => password_violation(value).map(str::to_string),

            Rule::MatchesPassword => {
                if value.is_empty() {
                    Some("Please confirm your password".to_string())
                } else if value != snapshot.password {
                    Some("Passwords do not match".to_string())
                } else {
                    None
                }
            }

            Rule::Phone { digits } => {
                if value.is_empty()
                    || (value.chars().count() == *digits
                        && value.chars().all(|c| c.is_ascii_digit()))
                {
                    None
                } else {
                    Some(format!("Please enter a valid {digits}-digit phone number"))
                }
            }

            Rule::MinimumAge { years } => match birth_year(value) {
                None => Some("Please enter a valid date of birth".to_string()),
                Some(birth) if current_year - birth < *years => {
                    Some(format!("You must be at least {years} years old"))
                }
                Some(_) => None,
            },

            Rule::Accepted => {
                if snapshot.terms_accepted {
                    None
                } else {
                    Some("You must accept the terms and conditions".to_string())
                }
            }
        }
    }
}

/// Checks the `local@domain.tld` shape: exactly one `@`, whitespace-free
/// segments, and a dot inside the domain with characters on both sides.
fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    let clean = |s: &str| !s.is_empty() && !s.chars().any(|c| c.is_whitespace() || c == '@');
    if !clean(local) || !clean(domain) {
        return false;
    }

    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// First failing password requirement, in the order length, uppercase,
/// lowercase, digit, symbol.
fn password_violation(value: &str) -> Option<&'static str> {
    if value.chars().count() < 8 {
        Some("Password must be at least 8 characters long")
    } else if !value.chars().any(|c| c.is_ascii_uppercase()) {
        Some("Password must contain at least one uppercase letter")
    } else if !value.chars().any(|c| c.is_ascii_lowercase()) {
        Some("Password must contain at least one lowercase letter")
    } else if !value.chars().any(|c| c.is_ascii_digit()) {
        Some("Password must contain at least one number")
    } else if !value.chars().any(|c| PASSWORD_SYMBOLS.contains(c)) {
        Some("Password must contain at least one special character (@$!%*?&)")
    } else {
        None
    }
}

fn birth_year(value: &str) -> Option<i32> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .ok()
        .map(|date| date.year())
}

/// Explicit configuration mapping field -> rule, passed into the validator.
#[derive(Debug, Clone)]
pub struct FieldRules {
    entries: Vec<(FieldId, Rule)>,
}

impl FieldRules {
    /// Build a rule table. Every field must appear exactly once.
    pub fn new(entries: Vec<(FieldId, Rule)>) -> Result<Self, ConfigError> {
        for field in FieldId::ALL {
            let count = entries.iter().filter(|(f, _)| *f == field).count();
            if count == 0 {
                return Err(ConfigError::MissingRule(field));
            }
            if count > 1 {
                return Err(ConfigError::DuplicateRule(field));
            }
        }
        Ok(Self { entries })
    }

    /// The standard registration form mapping.
    pub fn registration() -> Self {
        Self {
            entries: vec![
                (FieldId::FullName, Rule::Name { min: 2 }),
                (FieldId::Email, Rule::Email),
                (FieldId::Password, Rule::Password),
                (FieldId::ConfirmPassword, Rule::MatchesPassword),
                (FieldId::Phone, Rule::Phone { digits: 10 }),
                (FieldId::Dob, Rule::MinimumAge { years: 18 }),
                (FieldId::Terms, Rule::Accepted),
            ],
        }
    }

    pub fn rule(&self, field: FieldId) -> Option<&Rule> {
        self.entries
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, rule)| rule)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(FieldId, Rule)> {
        self.entries.iter()
    }
}

impl Default for FieldRules {
    fn default() -> Self {
        Self::registration()
    }
}
