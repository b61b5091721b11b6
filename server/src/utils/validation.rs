//! Request payload validation
//!
//! Runs `validator` rules on request DTOs at the handler boundary and maps
//! the first failure to a [`AppError::validation`] with a field-level detail.

use crate::AppError;
use validator::Validate;

/// Validate a request payload, rejecting before any handler logic runs
pub fn validate_payload<T: Validate>(payload: &T) -> Result<(), AppError> {
    payload.validate().map_err(|errors| {
        // Report the first offending field; enough for a client to act on
        let detail = errors
            .field_errors()
            .into_iter()
            .next()
            .map(|(field, errs)| {
                let reason = errs
                    .first()
                    .and_then(|e| e.message.as_ref().map(|m| m.to_string()))
                    .unwrap_or_else(|| {
                        errs.first()
                            .map(|e| e.code.to_string())
                            .unwrap_or_else(|| "invalid".to_string())
                    });
                (field.to_string(), reason)
            });

        match detail {
            Some((field, reason)) => {
                AppError::validation(format!("{}: {}", field, reason)).with_detail("field", field)
            }
            None => AppError::validation("Invalid request payload"),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use shared::ErrorCode;

    #[derive(Debug, Deserialize, Validate)]
    struct Sample {
        #[validate(length(min = 3))]
        name: String,
        #[validate(email)]
        email: String,
    }

    #[test]
    fn test_valid_payload_passes() {
        let s = Sample {
            name: "Fern".into(),
            email: "fern@example.com".into(),
        };
        assert!(validate_payload(&s).is_ok());
    }

    #[test]
    fn test_invalid_payload_maps_to_validation_error() {
        let s = Sample {
            name: "ab".into(),
            email: "nope".into(),
        };
        let err = validate_payload(&s).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert!(err.details.is_some());
    }
}
