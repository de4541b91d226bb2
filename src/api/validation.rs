//! Field validation for user payloads.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::config::ValidationMode;
use crate::errors::Error;

/// Body of `POST /api/users` and `PUT /api/users/:id`.
///
/// Every field is optional at the serde level so that a missing field shows
/// up in the 422 error list rather than as a deserialization failure.
#[derive(Debug, Default, Clone, Deserialize, Validate)]
pub struct UserPayload {
    #[validate(length(min = 3, message = "Name must be at least 3 characters long"))]
    pub name: Option<String>,
    #[validate(required(message = "Email is required"), email(message = "Invalid email"))]
    pub email: Option<String>,
    #[validate(
        required(message = "Password is required"),
        length(min = 8, message = "Password must be at least 8 characters long")
    )]
    pub password: Option<String>,
}

/// One entry of the 422 `errors` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub location: &'static str,
    pub param: String,
    pub msg: String,
}

impl FieldError {
    fn body(param: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            location: "body",
            param: param.into(),
            msg: msg.into(),
        }
    }
}

/// A payload that passed validation. The password is still plaintext here.
#[derive(Debug, Clone)]
pub struct ValidUser {
    pub name: Option<String>,
    pub email: String,
    pub password: String,
}

fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = field.to_string();
            errs.iter().map(move |err| {
                let msg = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value ({})", err.code));
                FieldError::body(field.clone(), msg)
            })
        })
        .collect()
}

impl UserPayload {
    /// Check the payload under `mode`, collecting every failing field.
    pub fn validate_for(self, mode: ValidationMode) -> Result<ValidUser, Error> {
        let mut errors = match self.validate() {
            Ok(()) => Vec::new(),
            Err(errs) => field_errors(&errs),
        };

        if mode == ValidationMode::Strict && self.name.is_none() {
            errors.push(FieldError::body("name", "Name must be at least 3 characters long"));
        }

        if !errors.is_empty() {
            errors.sort_by(|a, b| (&a.param, &a.msg).cmp(&(&b.param, &b.msg)));
            return Err(Error::Validation { errors });
        }

        let (Some(email), Some(password)) = (self.email, self.password) else {
            return Err(Error::Internal {
                operation: "read validated email and password".to_string(),
            });
        };

        Ok(ValidUser {
            name: self.name,
            email,
            password,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(name: Option<&str>, email: Option<&str>, password: Option<&str>) -> UserPayload {
        UserPayload {
            name: name.map(str::to_string),
            email: email.map(str::to_string),
            password: password.map(str::to_string),
        }
    }

    fn failing_params(result: Result<ValidUser, Error>) -> Vec<String> {
        match result {
            Err(Error::Validation { errors }) => errors.into_iter().map(|e| e.param).collect(),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_payload_passes() {
        let valid = payload(Some("alice"), Some("alice@example.com"), Some("longenough"))
            .validate_for(ValidationMode::Strict)
            .unwrap();

        assert_eq!(valid.name.as_deref(), Some("alice"));
        assert_eq!(valid.email, "alice@example.com");
        assert_eq!(valid.password, "longenough");
    }

    #[test]
    fn test_short_name_rejected() {
        let result = payload(Some("Al"), Some("a@b.com"), Some("longenough")).validate_for(ValidationMode::Strict);
        assert_eq!(failing_params(result), vec!["name"]);

        // Lenient mode still checks a name that was supplied
        let result = payload(Some("Al"), Some("a@b.com"), Some("longenough")).validate_for(ValidationMode::Lenient);
        assert_eq!(failing_params(result), vec!["name"]);
    }

    #[test]
    fn test_missing_name_depends_on_mode() {
        let result = payload(None, Some("a@b.com"), Some("longenough")).validate_for(ValidationMode::Strict);
        assert_eq!(failing_params(result), vec!["name"]);

        let valid = payload(None, Some("a@b.com"), Some("longenough"))
            .validate_for(ValidationMode::Lenient)
            .unwrap();
        assert!(valid.name.is_none());
    }

    #[test]
    fn test_bad_email_and_short_password() {
        let result = payload(Some("alice"), Some("not-an-email"), Some("short")).validate_for(ValidationMode::Strict);
        assert_eq!(failing_params(result), vec!["email", "password"]);
    }

    #[test]
    fn test_missing_fields_are_reported() {
        let result = UserPayload::default().validate_for(ValidationMode::Strict);
        assert_eq!(failing_params(result), vec!["email", "name", "password"]);
    }

    #[test]
    fn test_error_entries_are_located_in_body() {
        let Err(Error::Validation { errors }) =
            payload(Some("alice"), Some("alice@example.com"), Some("short")).validate_for(ValidationMode::Strict)
        else {
            panic!("expected validation error");
        };

        assert_eq!(
            errors,
            vec![FieldError {
                location: "body",
                param: "password".to_string(),
                msg: "Password must be at least 8 characters long".to_string(),
            }]
        );
    }
}
