use once_cell::sync::Lazy;
use regex::Regex;
use rocket::response::status::Custom;
use rocket::serde::json::Json;
use serde::Serialize;
use std::collections::HashMap;
use validator::{ValidationError, ValidationErrors};

use crate::error::AppError;

/// Letters (Latin or Cyrillic), digits, spaces and hyphens.
pub static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Zа-яА-Я0-9 \-]+$").expect("name pattern compiles"));

pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank")
            .with_message("Must not be empty or whitespace-only".into()));
    }
    Ok(())
}

#[derive(Debug, Serialize, Clone)]
pub struct ValidationResponse {
    pub status: &'static str,
    pub errors: HashMap<String, Vec<String>>,
}

impl ValidationResponse {
    pub fn new(errors: HashMap<String, Vec<String>>) -> Self {
        Self {
            status: "error",
            errors,
        }
    }

    pub fn with_error(field: &str, message: &str) -> Self {
        let mut errors = HashMap::new();
        errors.insert(field.to_string(), vec![message.to_string()]);
        Self::new(errors)
    }
}

impl From<&ValidationErrors> for ValidationResponse {
    fn from(errors: &ValidationErrors) -> Self {
        let mut error_map = HashMap::new();

        for (field, field_errors) in errors.field_errors() {
            let error_messages: Vec<String> = field_errors
                .iter()
                .map(|error| {
                    error
                        .message
                        .clone()
                        .unwrap_or_else(|| "Invalid value".into())
                        .to_string()
                })
                .collect();

            error_map.insert(field.to_string(), error_messages);
        }

        Self::new(error_map)
    }
}

pub trait ToValidationResponse {
    fn to_validation_response(self) -> Custom<Json<ValidationResponse>>;
}

impl ToValidationResponse for AppError {
    fn to_validation_response(self) -> Custom<Json<ValidationResponse>> {
        self.log_and_record("API request");
        let status = self.status_code();

        let response = match &self {
            AppError::Validation(errors) => ValidationResponse::from(errors),
            AppError::InvalidArgument(msg) => ValidationResponse::with_error("request", msg),
            AppError::NotFound(msg) => ValidationResponse::with_error("resource", msg),
            // Never leak store-level detail to the client
            AppError::Database(_) => {
                ValidationResponse::with_error("server", "Internal server error")
            }
        };

        Custom(status, Json(response))
    }
}
