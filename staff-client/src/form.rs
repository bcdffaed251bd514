//! Employee form state and advisory validation
//!
//! These checks only give early feedback while typing. The server validates
//! every request on its own and stays authoritative.

use std::sync::LazyLock;

use regex::Regex;
use shared::FieldError;
use shared::models::{Employee, EmployeePayload, MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_POSITION_LEN};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Position,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Position];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Position => "position",
        }
    }
}

/// Check a single field value, returning the first failing rule's message
pub fn validate_field(field: Field, value: &str) -> Option<&'static str> {
    let too_long = |max: usize| value.chars().count() > max;
    match field {
        Field::Name if value.trim().is_empty() => Some("Name is required"),
        Field::Name if too_long(MAX_NAME_LEN) => Some("Name must be at most 100 characters"),
        Field::Email if value.trim().is_empty() => Some("Email is required"),
        Field::Email if !EMAIL_RE.is_match(value) => Some("Email must be valid"),
        Field::Email if too_long(MAX_EMAIL_LEN) => Some("Email must be at most 255 characters"),
        Field::Position if value.trim().is_empty() => Some("Position is required"),
        Field::Position if too_long(MAX_POSITION_LEN) => {
            Some("Position must be at most 50 characters")
        }
        _ => None,
    }
}

/// Editable form values for creating or editing an employee
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeForm {
    pub name: String,
    pub email: String,
    pub position: String,
}

impl EmployeeForm {
    /// Pre-filled form for editing an existing record
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            name: employee.name.clone(),
            email: employee.email.clone(),
            position: employee.position.clone(),
        }
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Position => &self.position,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Position => self.position = value,
        }
    }

    /// Every failing field, in form order
    pub fn errors(&self) -> Vec<FieldError> {
        Field::ALL
            .into_iter()
            .filter_map(|field| {
                validate_field(field, self.value(field))
                    .map(|message| FieldError::new(field.as_str(), message))
            })
            .collect()
    }

    /// Request body for submission, or the field errors blocking it
    pub fn to_payload(&self) -> Result<EmployeePayload, Vec<FieldError>> {
        let errors = self.errors();
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(EmployeePayload::new(
            self.name.clone(),
            self.email.clone(),
            self.position.clone(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_form_reports_all_fields() {
        let errors = EmployeeForm::default().errors();
        let messages: Vec<_> = errors.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(
            messages,
            vec!["Name is required", "Email is required", "Position is required"]
        );
    }

    #[test]
    fn test_email_pattern() {
        assert_eq!(validate_field(Field::Email, "alice@example.com"), None);
        assert_eq!(
            validate_field(Field::Email, "invalid-email"),
            Some("Email must be valid")
        );
        assert_eq!(
            validate_field(Field::Email, "a@b"),
            Some("Email must be valid")
        );
        assert_eq!(
            validate_field(Field::Email, " alice@example.com"),
            Some("Email must be valid")
        );
    }

    #[test]
    fn test_length_limits() {
        assert!(validate_field(Field::Name, &"a".repeat(100)).is_none());
        assert_eq!(
            validate_field(Field::Name, &"a".repeat(101)),
            Some("Name must be at most 100 characters")
        );
        assert_eq!(
            validate_field(Field::Position, &"p".repeat(51)),
            Some("Position must be at most 50 characters")
        );
    }

    #[test]
    fn test_to_payload() {
        let mut form = EmployeeForm::default();
        form.set(Field::Name, "Alice Johnson");
        form.set(Field::Email, "alice@example.com");
        assert_eq!(form.to_payload().unwrap_err().len(), 1);

        form.set(Field::Position, "Engineer");
        let payload = form.to_payload().unwrap();
        assert_eq!(payload.position.as_deref(), Some("Engineer"));
    }
}
