//! Request validation
//!
//! Turns raw request input into sanitized values. Every string is trimmed
//! before it is checked and only the trimmed value is returned. Each field
//! reports at most one error (the first rule it fails) and all failing fields
//! are reported together.

use serde::Deserialize;
use shared::models::{
    EmployeeCreate, EmployeePayload, EmployeeUpdate, MAX_EMAIL_LEN, MAX_NAME_LEN,
    MAX_POSITION_LEN,
};
use shared::FieldError;
use std::ops::RangeInclusive;
use validator::ValidateEmail;

/// Default page when `page` is absent
pub const DEFAULT_PAGE: u32 = 1;
/// Default page size when `limit` is absent
pub const DEFAULT_LIMIT: u32 = 100;
/// Largest accepted page size
pub const MAX_LIMIT: u32 = 1000;

struct FieldRule {
    field: &'static str,
    label: &'static str,
    max_len: usize,
    email: bool,
}

const NAME: FieldRule = FieldRule {
    field: "name",
    label: "Name",
    max_len: MAX_NAME_LEN,
    email: false,
};

const EMAIL: FieldRule = FieldRule {
    field: "email",
    label: "Email",
    max_len: MAX_EMAIL_LEN,
    email: true,
};

const POSITION: FieldRule = FieldRule {
    field: "position",
    label: "Position",
    max_len: MAX_POSITION_LEN,
    email: false,
};

#[derive(Clone, Copy)]
enum Mode {
    Create,
    Update,
}

impl FieldRule {
    /// `Ok(None)` only for an absent field in update mode
    fn check(&self, value: Option<&str>, mode: Mode) -> Result<Option<String>, FieldError> {
        let Some(raw) = value else {
            return match mode {
                Mode::Create => Err(self.missing(mode)),
                Mode::Update => Ok(None),
            };
        };

        let value = raw.trim();
        if value.is_empty() {
            return Err(self.missing(mode));
        }
        if self.email && !is_valid_email(value) {
            return Err(FieldError::new(self.field, "Email must be valid"));
        }
        if value.chars().count() > self.max_len {
            return Err(FieldError::new(
                self.field,
                format!("{} must be at most {} characters", self.label, self.max_len),
            ));
        }
        Ok(Some(value.to_string()))
    }

    fn missing(&self, mode: Mode) -> FieldError {
        let message = match mode {
            Mode::Create => format!("{} is required", self.label),
            Mode::Update => format!("{} cannot be empty", self.label),
        };
        FieldError::new(self.field, message)
    }
}

fn collect<T>(result: Result<Option<T>, FieldError>, errors: &mut Vec<FieldError>) -> Option<T> {
    match result {
        Ok(value) => value,
        Err(err) => {
            errors.push(err);
            None
        }
    }
}

/// Validate a create body: all three fields required
pub fn validate_create(payload: &EmployeePayload) -> Result<EmployeeCreate, Vec<FieldError>> {
    let mut errors = Vec::new();
    let name = collect(NAME.check(payload.name.as_deref(), Mode::Create), &mut errors);
    let email = collect(EMAIL.check(payload.email.as_deref(), Mode::Create), &mut errors);
    let position = collect(
        POSITION.check(payload.position.as_deref(), Mode::Create),
        &mut errors,
    );

    match (name, email, position) {
        (Some(name), Some(email), Some(position)) if errors.is_empty() => Ok(EmployeeCreate {
            name,
            email,
            position,
        }),
        _ => Err(errors),
    }
}

/// Validate an update body: every field optional, present ones must be valid
pub fn validate_update(payload: &EmployeePayload) -> Result<EmployeeUpdate, Vec<FieldError>> {
    let mut errors = Vec::new();
    let update = EmployeeUpdate {
        name: collect(NAME.check(payload.name.as_deref(), Mode::Update), &mut errors),
        email: collect(EMAIL.check(payload.email.as_deref(), Mode::Update), &mut errors),
        position: collect(
            POSITION.check(payload.position.as_deref(), Mode::Update),
            &mut errors,
        ),
    };

    if errors.is_empty() {
        Ok(update)
    } else {
        Err(errors)
    }
}

/// Email check: RFC syntax plus a dot in the domain
pub fn is_valid_email(value: &str) -> bool {
    value.validate_email()
        && value
            .rsplit_once('@')
            .is_some_and(|(_, domain)| domain.contains('.'))
}

/// Raw list query string, kept as text so bad numbers become field errors
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub name: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

/// Validated list query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub name: Option<String>,
    pub page: u32,
    pub limit: u32,
}

pub fn validate_list(params: &ListParams) -> Result<PageRequest, Vec<FieldError>> {
    let mut errors = Vec::new();
    let page = collect(
        parse_bounded(
            "page",
            params.page.as_deref(),
            DEFAULT_PAGE,
            1..=u32::MAX,
            "Page must be a positive integer",
        ),
        &mut errors,
    );
    let limit = collect(
        parse_bounded(
            "limit",
            params.limit.as_deref(),
            DEFAULT_LIMIT,
            1..=MAX_LIMIT,
            "Limit must be an integer between 1 and 1000",
        ),
        &mut errors,
    );

    match (page, limit) {
        (Some(page), Some(limit)) if errors.is_empty() => Ok(PageRequest {
            name: params
                .name
                .as_deref()
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .map(str::to_string),
            page,
            limit,
        }),
        _ => Err(errors),
    }
}

fn parse_bounded(
    field: &'static str,
    raw: Option<&str>,
    default: u32,
    range: RangeInclusive<u32>,
    message: &str,
) -> Result<Option<u32>, FieldError> {
    let raw = raw.map(str::trim).unwrap_or_default();
    if raw.is_empty() {
        return Ok(Some(default));
    }
    match raw.parse::<u32>() {
        Ok(value) if range.contains(&value) => Ok(Some(value)),
        _ => Err(FieldError::new(field, message)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages(errors: &[FieldError]) -> Vec<(&str, &str)> {
        errors
            .iter()
            .map(|e| (e.field.as_str(), e.message.as_str()))
            .collect()
    }

    #[test]
    fn test_create_trims_fields() {
        let payload = EmployeePayload::new("  Alice Johnson ", " alice@example.com", "Engineer  ");
        let created = validate_create(&payload).unwrap();
        assert_eq!(created.name, "Alice Johnson");
        assert_eq!(created.email, "alice@example.com");
        assert_eq!(created.position, "Engineer");
    }

    #[test]
    fn test_create_empty_body_reports_every_field() {
        let errors = validate_create(&EmployeePayload::default()).unwrap_err();
        assert_eq!(
            messages(&errors),
            vec![
                ("name", "Name is required"),
                ("email", "Email is required"),
                ("position", "Position is required"),
            ]
        );
    }

    #[test]
    fn test_create_whitespace_is_missing() {
        let payload = EmployeePayload::new("   ", "a@b.co", "Dev");
        let errors = validate_create(&payload).unwrap_err();
        assert_eq!(messages(&errors), vec![("name", "Name is required")]);
    }

    #[test]
    fn test_create_invalid_email() {
        for email in ["invalid-email", "a@b", "a@@b.com", "@example.com", "a b@c.com"] {
            let payload = EmployeePayload::new("Ann", email, "Dev");
            let errors = validate_create(&payload).unwrap_err();
            assert_eq!(
                messages(&errors),
                vec![("email", "Email must be valid")],
                "{email}"
            );
        }
    }

    #[test]
    fn test_create_length_limits() {
        let payload = EmployeePayload::new("a".repeat(101), "ann@example.com", "p".repeat(51));
        let errors = validate_create(&payload).unwrap_err();
        assert_eq!(
            messages(&errors),
            vec![
                ("name", "Name must be at most 100 characters"),
                ("position", "Position must be at most 50 characters"),
            ]
        );

        let payload = EmployeePayload::new("a".repeat(100), "ann@example.com", "p".repeat(50));
        assert!(validate_create(&payload).is_ok());
    }

    #[test]
    fn test_length_counts_characters() {
        // 100 multi-byte characters
        let payload = EmployeePayload::new("é".repeat(100), "ann@example.com", "Dev");
        assert!(validate_create(&payload).is_ok());
    }

    #[test]
    fn test_overlong_email() {
        let email = format!("{}@example.com", "a".repeat(250));
        let payload = EmployeePayload::new("Ann", email, "Dev");
        let errors = validate_create(&payload).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "email");
    }

    #[test]
    fn test_update_allows_partial() {
        let payload = EmployeePayload::default().with_position(" Senior Manager ");
        let update = validate_update(&payload).unwrap();
        assert_eq!(update.position.as_deref(), Some("Senior Manager"));
        assert_eq!(update.name, None);
        assert_eq!(update.email, None);

        assert!(validate_update(&EmployeePayload::default()).unwrap().is_empty());
    }

    #[test]
    fn test_update_rejects_empty_present_fields() {
        let payload = EmployeePayload::default()
            .with_name("")
            .with_email("not-an-email");
        let errors = validate_update(&payload).unwrap_err();
        assert_eq!(
            messages(&errors),
            vec![
                ("name", "Name cannot be empty"),
                ("email", "Email must be valid"),
            ]
        );
    }

    #[test]
    fn test_list_defaults() {
        let request = validate_list(&ListParams::default()).unwrap();
        assert_eq!(
            request,
            PageRequest {
                name: None,
                page: DEFAULT_PAGE,
                limit: DEFAULT_LIMIT,
            }
        );
    }

    #[test]
    fn test_list_params_parsed() {
        let params = ListParams {
            name: Some(" ali ".into()),
            page: Some("2".into()),
            limit: Some("25".into()),
        };
        let request = validate_list(&params).unwrap();
        assert_eq!(request.name.as_deref(), Some("ali"));
        assert_eq!(request.page, 2);
        assert_eq!(request.limit, 25);
    }

    #[test]
    fn test_list_params_out_of_range() {
        let params = ListParams {
            name: None,
            page: Some("0".into()),
            limit: Some("1001".into()),
        };
        let errors = validate_list(&params).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["page", "limit"]);

        let params = ListParams {
            name: None,
            page: Some("abc".into()),
            limit: Some("-5".into()),
        };
        assert_eq!(validate_list(&params).unwrap_err().len(), 2);
    }
}
