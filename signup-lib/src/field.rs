/// A validated control on the registration form.
///
/// `as_str` values double as the element IDs in the visual tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    FullName,
    Email,
    Password,
    ConfirmPassword,
    Phone,
    Dob,
    Terms,
}

impl FieldId {
    /// All validated controls in form order.
    pub const ALL: [FieldId; 7] = [
        FieldId::FullName,
        FieldId::Email,
        FieldId::Password,
        FieldId::ConfirmPassword,
        FieldId::Phone,
        FieldId::Dob,
        FieldId::Terms,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldId::FullName => "fullname",
            FieldId::Email => "email",
            FieldId::Password => "password",
            FieldId::ConfirmPassword => "confirmPassword",
            FieldId::Phone => "phone",
            FieldId::Dob => "dob",
            FieldId::Terms => "terms",
        }
    }

    pub fn from_id(id: &str) -> Option<FieldId> {
        FieldId::ALL.into_iter().find(|field| field.as_str() == id)
    }

    /// Phone is the only optional field.
    pub fn required(&self) -> bool {
        !matches!(self, FieldId::Phone)
    }

    /// Whether this control holds free text (everything except the terms checkbox).
    pub fn is_text(&self) -> bool {
        !matches!(self, FieldId::Terms)
    }
}

impl std::fmt::Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current values of every field plus the terms acceptance flag.
///
/// Ephemeral: rebuilt from the live inputs on each check, never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub phone: String,
    pub dob: String,
    pub terms_accepted: bool,
}

impl FormSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value of a text field. The terms checkbox has no text value.
    pub fn value(&self, field: FieldId) -> &str {
        match field {
            FieldId::FullName => &self.full_name,
            FieldId::Email => &self.email,
            FieldId::Password => &self.password,
            FieldId::ConfirmPassword => &self.confirm_password,
            FieldId::Phone => &self.phone,
            FieldId::Dob => &self.dob,
            FieldId::Terms => "",
        }
    }

    pub fn set_value(&mut self, field: FieldId, value: impl Into<String>) {
        let value = value.into();
        match field {
            FieldId::FullName => self.full_name = value,
            FieldId::Email => self.email = value,
            FieldId::Password => self.password = value,
            FieldId::ConfirmPassword => self.confirm_password = value,
            FieldId::Phone => self.phone = value,
            FieldId::Dob => self.dob = value,
            FieldId::Terms => {}
        }
    }

    /// Clear every field value and the terms flag.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
