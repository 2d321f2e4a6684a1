use domain_users::{CreateUser, is_valid_email};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Por favor completa todos los campos")]
    Incomplete,

    #[error("Por favor ingresa un email válido")]
    InvalidEmail,
}

/// Raw "Agregar usuario" input, checked before anything is sent.
#[derive(Debug, Clone, Default)]
pub struct UserForm {
    pub name: String,
    pub email: String,
}

impl UserForm {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Checks the trimmed values, so a padded email is accepted and sent trimmed.
    pub fn validate(&self) -> Result<CreateUser, FormError> {
        let name = self.name.trim();
        let email = self.email.trim();

        if name.is_empty() || email.is_empty() {
            return Err(FormError::Incomplete);
        }
        if !is_valid_email(email) {
            return Err(FormError::InvalidEmail);
        }

        Ok(CreateUser::new(name, email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_fields_are_incomplete() {
        for (name, email) in [
            ("", "ana@mail.com"),
            ("Ana", ""),
            ("  ", "ana@mail.com"),
            ("Ana", "\t"),
        ] {
            assert_eq!(
                UserForm::new(name, email).validate().unwrap_err(),
                FormError::Incomplete
            );
        }
    }

    #[test]
    fn test_malformed_email() {
        for email in ["ana", "ana@mail", "ana mail@x.com", "@mail.com", "ana@@mail.com"] {
            assert_eq!(
                UserForm::new("Ana", email).validate().unwrap_err(),
                FormError::InvalidEmail,
                "{email}"
            );
        }
    }

    #[test]
    fn test_valid_form_is_trimmed() {
        let input = UserForm::new("  Ana Torres ", " ana@mail.com ")
            .validate()
            .unwrap();
        assert_eq!(input.name.as_deref(), Some("Ana Torres"));
        assert_eq!(input.email.as_deref(), Some("ana@mail.com"));
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            FormError::Incomplete.to_string(),
            "Por favor completa todos los campos"
        );
        assert_eq!(
            FormError::InvalidEmail.to_string(),
            "Por favor ingresa un email válido"
        );
    }
}
