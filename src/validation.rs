//! Form Validation
//!
//! Checks run before any network call. Messages are shown inline.

use std::sync::LazyLock;

use regex::Regex;

pub const MIN_PASSWORD_LEN: usize = 8;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    MissingFields,
    InvalidEmail,
    PasswordTooShort,
    PasswordMismatch,
    MissingCategory,
    TermsNotAccepted,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            ValidationError::MissingFields => "Por favor, preencha todos os campos obrigatórios",
            ValidationError::InvalidEmail => "Por favor, insira um e-mail válido",
            ValidationError::PasswordTooShort => "A senha deve ter pelo menos 8 caracteres",
            ValidationError::PasswordMismatch => "As senhas não coincidem",
            ValidationError::MissingCategory => "Por favor, selecione uma categoria",
            ValidationError::TermsNotAccepted => "É preciso aceitar os termos de uso",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for ValidationError {}

pub type ValidationResult = Result<(), ValidationError>;

/// Something, then `@`, then something containing a `.` that is neither first nor last
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn validate_password(password: &str, confirmation: &str) -> ValidationResult {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    if password != confirmation {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

fn require(fields: &[&str]) -> ValidationResult {
    if fields.iter().any(|f| f.trim().is_empty()) {
        return Err(ValidationError::MissingFields);
    }
    Ok(())
}

pub fn validate_login(email: &str, password: &str) -> ValidationResult {
    if email.is_empty() || password.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// Signup form state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
}

pub fn validate_signup(form: &SignupForm) -> ValidationResult {
    require(&[&form.name, &form.email, &form.password, &form.confirm_password])?;
    if !is_valid_email(&form.email) {
        return Err(ValidationError::InvalidEmail);
    }
    validate_password(&form.password, &form.confirm_password)
}

/// New request form state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestForm {
    pub title: String,
    /// Selected category id as submitted by the `<select>`; empty when unselected
    pub category: String,
    pub description: String,
    pub neighborhood: String,
    pub address: String,
    pub cep: String,
    pub anonymous: bool,
    pub accepted_terms: bool,
}

impl RequestForm {
    pub fn category_id(&self) -> Option<u32> {
        self.category.trim().parse().ok()
    }
}

pub fn validate_request(form: &RequestForm) -> ValidationResult {
    if form.category_id().is_none() {
        return Err(ValidationError::MissingCategory);
    }
    require(&[&form.title, &form.description])?;
    if !form.accepted_terms {
        return Err(ValidationError::TermsNotAccepted);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_accepts_well_formed() {
        assert!(is_valid_email("maria@cidade.gov.br"));
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("joao.silva+ouvidoria@mail.com"));
    }

    #[test]
    fn test_email_rejects_malformed() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("maria.cidade.gov.br"));
        assert!(!is_valid_email("maria@cidade"));
        assert!(!is_valid_email("@cidade.com"));
        assert!(!is_valid_email("maria@.com"));
        assert!(!is_valid_email("maria@cidade."));
        assert!(!is_valid_email("maria @ cidade.com"));
    }

    #[test]
    fn test_password_rules() {
        assert_eq!(validate_password("curta", "curta"), Err(ValidationError::PasswordTooShort));
        assert_eq!(validate_password("1234567", "1234567"), Err(ValidationError::PasswordTooShort));
        assert_eq!(validate_password("segura123", "segura124"), Err(ValidationError::PasswordMismatch));
        assert_eq!(validate_password("12345678", "12345678"), Ok(()));
        assert_eq!(validate_password("çãoçãoçã", "çãoçãoçã"), Ok(()));
    }

    #[test]
    fn test_login_checks_order() {
        assert_eq!(validate_login("", "x"), Err(ValidationError::MissingFields));
        assert_eq!(validate_login("nope", "x"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_login("a@b.co", "x"), Ok(()));
    }

    #[test]
    fn test_signup_validation() {
        let mut form = SignupForm {
            name: "Maria".into(),
            email: "maria@mail.com".into(),
            phone: String::new(),
            password: "segura123".into(),
            confirm_password: "segura123".into(),
        };
        assert_eq!(validate_signup(&form), Ok(()));

        form.confirm_password = "outra1234".into();
        assert_eq!(validate_signup(&form), Err(ValidationError::PasswordMismatch));

        form.name = "  ".into();
        assert_eq!(validate_signup(&form), Err(ValidationError::MissingFields));
    }

    #[test]
    fn test_request_form_validation() {
        let mut form = RequestForm {
            title: "Poste apagado".into(),
            category: String::new(),
            description: "Rua escura".into(),
            neighborhood: "Centro".into(),
            address: "Rua A, 1".into(),
            accepted_terms: true,
            ..Default::default()
        };
        assert_eq!(validate_request(&form), Err(ValidationError::MissingCategory));

        form.category = "2".into();
        assert_eq!(validate_request(&form), Ok(()));
        assert_eq!(form.category_id(), Some(2));

        form.accepted_terms = false;
        assert_eq!(validate_request(&form), Err(ValidationError::TermsNotAccepted));
    }

    #[test]
    fn test_request_location_is_optional() {
        let form = RequestForm {
            title: "Poste apagado".into(),
            category: "2".into(),
            description: "Rua escura".into(),
            accepted_terms: true,
            ..Default::default()
        };
        assert_eq!(validate_request(&form), Ok(()));

        let untitled = RequestForm { title: " ".into(), ..form };
        assert_eq!(validate_request(&untitled), Err(ValidationError::MissingFields));
    }
}
