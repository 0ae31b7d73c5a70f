//! Validation schemas for each account screen

use super::schema::{Rule, Schema};

/// Sign-in: e-mail and password are both mandatory
pub fn sign_in() -> Schema {
    Schema::new()
        .field(
            "email",
            vec![
                Rule::Required("E-mail is mandatory!".to_string()),
                Rule::Email("Type a valid e-mail!".to_string()),
            ],
        )
        .field(
            "password",
            vec![Rule::Required("Password is mandatory!".to_string())],
        )
}

/// Sign-up: name, e-mail, and a password of at least 6 characters
pub fn sign_up() -> Schema {
    Schema::new()
        .field(
            "name",
            vec![Rule::Required("Name is mandatory!".to_string())],
        )
        .field(
            "email",
            vec![
                Rule::Required("E-mail is mandatory!".to_string()),
                Rule::Email("Type a valid e-mail!".to_string()),
            ],
        )
        .field(
            "password",
            vec![Rule::MinLength(
                6,
                "Password must have at least 6 digits!".to_string(),
            )],
        )
}

/// Forgot-password: just the account e-mail
pub fn forgot_password() -> Schema {
    Schema::new().field(
        "email",
        vec![
            Rule::Required("E-mail is mandatory!".to_string()),
            Rule::Email("Type a valid e-mail!".to_string()),
        ],
    )
}

/// Reset-password: new password plus a matching confirmation
pub fn reset_password() -> Schema {
    Schema::new()
        .field(
            "password",
            vec![Rule::Required("Password is mandatory!".to_string())],
        )
        .field(
            "password_confirmation",
            vec![Rule::MatchesField(
                "password".to_string(),
                "Password must match".to_string(),
            )],
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submit::schema::FormInput;

    #[test]
    fn test_sign_up_accepts_complete_input() {
        let input = FormInput::new()
            .with("name", "Ada")
            .with("email", "ada@example.com")
            .with("password", "123456");
        assert!(sign_up().validate(&input).is_ok());
    }

    #[test]
    fn test_sign_up_rejects_short_password() {
        let input = FormInput::new()
            .with("name", "Ada")
            .with("email", "ada@example.com")
            .with("password", "12345");
        let failure = sign_up().validate(&input).unwrap_err();
        assert!(failure.has_field("password"));
    }

    #[test]
    fn test_reset_password_requires_matching_confirmation() {
        let input = FormInput::new()
            .with("password", "secret")
            .with("password_confirmation", "different");
        let failure = reset_password().validate(&input).unwrap_err();
        assert_eq!(failure.errors.len(), 1);
        assert_eq!(failure.errors[0].field, "password_confirmation");
    }

    #[test]
    fn test_sign_in_requires_both_fields() {
        let failure = sign_in().validate(&FormInput::new()).unwrap_err();
        assert!(failure.has_field("email"));
        assert!(failure.has_field("password"));
    }
}
