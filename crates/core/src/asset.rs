//! Asset domain model and field validation.
//!
//! Validation is an explicit step, decoupled from request binding: the
//! deserialized [`AssetInput`] is checked field by field and parsed into an
//! [`AssetDraft`], the fully-validated value the repository persists. A
//! payload that fails validation never reaches the database.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Minimum length (in characters) for an asset name.
pub const NAME_MIN_CHARS: usize = 2;

/// Maximum length (in characters) for an asset description.
pub const DESCRIPTION_MAX_CHARS: usize = 500;

/// Lifecycle status of an asset.
///
/// Persisted as the PostgreSQL enum `asset_status` and serialized on the wire
/// as its SCREAMING_SNAKE_CASE name. Unrecognized values are rejected at the
/// boundary by serde.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "asset_status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetStatus {
    Available,
    InUse,
    Maintenance,
    Disposed,
}

/// A single field-level validation violation.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Join per-field messages into the client-facing validation message.
pub fn joined_message(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.message)
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<Vec<FieldError>> for CoreError {
    fn from(errors: Vec<FieldError>) -> Self {
        CoreError::Validation(joined_message(&errors))
    }
}

/// Candidate asset fields as received from the client.
///
/// String fields default to empty and date/status fields to `None` when
/// missing, so an incomplete payload produces field-level validation messages
/// instead of a deserialization failure.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub serial_number: String,
    #[serde(default)]
    pub acquisition_date: Option<NaiveDate>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub status: Option<AssetStatus>,
    #[serde(default)]
    pub description: Option<String>,
}

/// A fully-validated asset payload, ready to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetDraft {
    pub name: String,
    pub serial_number: String,
    pub acquisition_date: NaiveDate,
    pub category: String,
    pub status: AssetStatus,
    pub description: Option<String>,
}

impl AssetInput {
    /// Validate all field constraints, collecting every violation.
    ///
    /// Returns the parsed [`AssetDraft`] on success, or the full list of
    /// field errors (never just the first) on failure.
    pub fn validate(self) -> Result<AssetDraft, Vec<FieldError>> {
        let mut errors = Vec::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.push(FieldError {
                field: "name",
                message: "asset name is required",
            });
        } else if name.chars().count() < NAME_MIN_CHARS {
            errors.push(FieldError {
                field: "name",
                message: "name must be at least 2 characters",
            });
        }

        let serial_number = self.serial_number.trim();
        if serial_number.is_empty() {
            errors.push(FieldError {
                field: "serialNumber",
                message: "serial number is required",
            });
        }

        if self.acquisition_date.is_none() {
            errors.push(FieldError {
                field: "acquisitionDate",
                message: "acquisition date is required",
            });
        }

        let category = self.category.trim();
        if category.is_empty() {
            errors.push(FieldError {
                field: "category",
                message: "category is required",
            });
        }

        if self.status.is_none() {
            errors.push(FieldError {
                field: "status",
                message: "status is required",
            });
        }

        if let Some(description) = &self.description {
            if description.chars().count() > DESCRIPTION_MAX_CHARS {
                errors.push(FieldError {
                    field: "description",
                    message: "description must not exceed 500 characters",
                });
            }
        }

        // Required checks above guarantee both fields are present when the
        // error list is empty.
        match (self.acquisition_date, self.status) {
            (Some(acquisition_date), Some(status)) if errors.is_empty() => Ok(AssetDraft {
                name: name.to_string(),
                serial_number: serial_number.to_string(),
                acquisition_date,
                category: category.to_string(),
                status,
                description: self.description,
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> AssetInput {
        AssetInput {
            name: "Laptop X1".to_string(),
            serial_number: "SN-001".to_string(),
            acquisition_date: NaiveDate::from_ymd_opt(2024, 1, 10),
            category: "Computer".to_string(),
            status: Some(AssetStatus::Available),
            description: Some(String::new()),
        }
    }

    #[test]
    fn valid_input_parses_to_draft() {
        let draft = valid_input().validate().unwrap();
        assert_eq!(draft.name, "Laptop X1");
        assert_eq!(draft.serial_number, "SN-001");
        assert_eq!(draft.status, AssetStatus::Available);
    }

    #[test]
    fn blank_name_is_required() {
        let mut input = valid_input();
        input.name = "   ".to_string();
        let errors = input.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "name");
        assert_eq!(errors[0].message, "asset name is required");
    }

    #[test]
    fn one_character_name_is_too_short() {
        let mut input = valid_input();
        input.name = "A".to_string();
        let errors = input.validate().unwrap_err();
        assert_eq!(errors[0].message, "name must be at least 2 characters");
    }

    #[test]
    fn missing_date_and_status_are_both_reported() {
        let mut input = valid_input();
        input.acquisition_date = None;
        input.status = None;
        let errors = input.validate().unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["acquisitionDate", "status"]);
    }

    #[test]
    fn oversized_description_is_rejected() {
        let mut input = valid_input();
        input.description = Some("x".repeat(501));
        let errors = input.validate().unwrap_err();
        assert_eq!(errors[0].field, "description");

        let mut input = valid_input();
        input.description = Some("x".repeat(500));
        assert!(input.validate().is_ok());
    }

    #[test]
    fn violations_join_with_semicolons() {
        let input = AssetInput {
            name: String::new(),
            serial_number: String::new(),
            acquisition_date: NaiveDate::from_ymd_opt(2024, 1, 10),
            category: "Computer".to_string(),
            status: Some(AssetStatus::InUse),
            description: None,
        };
        let errors = input.validate().unwrap_err();
        assert_eq!(
            joined_message(&errors),
            "asset name is required; serial number is required"
        );
    }

    #[test]
    fn status_serializes_to_screaming_snake_case() {
        let json = serde_json::to_string(&AssetStatus::InUse).unwrap();
        assert_eq!(json, "\"IN_USE\"");
        let status: AssetStatus = serde_json::from_str("\"MAINTENANCE\"").unwrap();
        assert_eq!(status, AssetStatus::Maintenance);
    }

    #[test]
    fn unknown_status_is_rejected() {
        let result = serde_json::from_str::<AssetStatus>("\"BROKEN\"");
        assert!(result.is_err());
    }

    #[test]
    fn missing_fields_deserialize_to_defaults() {
        let input: AssetInput = serde_json::from_str("{}").unwrap();
        assert!(input.name.is_empty());
        assert!(input.acquisition_date.is_none());
        assert!(input.status.is_none());
    }
}
