//! User registration rules

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, instrument};

use movie_core::traits::UserRepository;
use movie_core::{DomainError, Field, Rule, Violations};

use super::present;

const EMAIL_MIN_LENGTH: usize = 5;
const EMAIL_MAX_LENGTH: usize = 100;
const PASSWORD_MIN_LENGTH: usize = 8;
const PASSWORD_MAX_LENGTH: usize = 32;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_.]+@[A-Za-z0-9_.]+\.[A-Za-z0-9_]+$").expect("email pattern compiles")
});

static LOGIN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_]{4,100}$").expect("login pattern compiles"));

/// Fields submitted for a new account
#[derive(Debug, Clone, Copy, Default)]
pub struct RegistrationCandidate<'a> {
    pub email: Option<&'a str>,
    pub login: Option<&'a str>,
    pub password: Option<&'a str>,
}

/// Validates new accounts
#[derive(Debug, Clone, Copy, Default)]
pub struct RegistrationValidator;

impl RegistrationValidator {
    /// Check a candidate account.
    ///
    /// `confirmation` is the repeated password of a self-registration; pass
    /// `None` when no confirmation was asked for.
    #[instrument(skip_all, fields(login = candidate.login))]
    pub async fn validate(
        &self,
        users: &dyn UserRepository,
        candidate: &RegistrationCandidate<'_>,
        confirmation: Option<&str>,
    ) -> Result<(), DomainError> {
        let mut violations = Violations::new();

        self.check_email(users, present(candidate.email), &mut violations)
            .await?;
        self.check_login(users, present(candidate.login), &mut violations)
            .await?;
        let password = present(candidate.password);
        Self::check_password(password, &mut violations);
        if let (Some(password), Some(confirmation)) = (password, confirmation) {
            if password != confirmation {
                violations.add(
                    Field::PasswordConfirmation,
                    Rule::Mismatch,
                    "Password was not confirmed",
                );
            }
        }

        if !violations.is_empty() {
            debug!(count = violations.len(), "Registration rejected");
        }
        violations.finish(DomainError::RegistrationValidation)
    }

    async fn check_email(
        &self,
        users: &dyn UserRepository,
        email: Option<&str>,
        violations: &mut Violations,
    ) -> Result<(), DomainError> {
        let Some(email) = email else {
            violations.add(Field::Email, Rule::Required, "Email field is empty");
            return Ok(());
        };

        if !EMAIL_REGEX.is_match(email) {
            violations.add(
                Field::Email,
                Rule::Format,
                format!("Invalid email value: {email}"),
            );
        }
        let length = email.chars().count();
        if !(EMAIL_MIN_LENGTH..=EMAIL_MAX_LENGTH).contains(&length) {
            violations.add(
                Field::Email,
                Rule::Length,
                format!(
                    "Email length should be in range between {EMAIL_MIN_LENGTH} and {EMAIL_MAX_LENGTH}"
                ),
            );
        }
        if users.find_by_email(email).await?.is_some() {
            violations.add(
                Field::Email,
                Rule::AlreadyExists,
                "User with such email already exists",
            );
        }
        Ok(())
    }

    async fn check_login(
        &self,
        users: &dyn UserRepository,
        login: Option<&str>,
        violations: &mut Violations,
    ) -> Result<(), DomainError> {
        let Some(login) = login else {
            violations.add(Field::Login, Rule::Required, "Login field is empty");
            return Ok(());
        };

        if !LOGIN_REGEX.is_match(login) {
            violations.add(
                Field::Login,
                Rule::Format,
                "Login should consist of word characters - latin letters, underscore, decimal digits",
            );
        }
        if users.find_by_login(login).await?.is_some() {
            violations.add(
                Field::Login,
                Rule::AlreadyExists,
                "User with such login already exists",
            );
        }
        Ok(())
    }

    fn check_password(password: Option<&str>, violations: &mut Violations) {
        let Some(password) = password else {
            violations.add(Field::Password, Rule::Required, "Password field is empty");
            return;
        };

        let length = password.chars().count();
        if !(PASSWORD_MIN_LENGTH..=PASSWORD_MAX_LENGTH).contains(&length) {
            violations.add(
                Field::Password,
                Rule::Length,
                format!(
                    "Password length should be in range between {PASSWORD_MIN_LENGTH} and {PASSWORD_MAX_LENGTH}"
                ),
            );
        }
        if password.to_uppercase() == password || password.to_lowercase() == password {
            violations.add(
                Field::Password,
                Rule::SingleCase,
                "Password should not consist only from upper or lower case letters",
            );
        }
        if !password.chars().any(|c| c.is_ascii_uppercase()) {
            violations.add(
                Field::Password,
                Rule::MissingUppercase,
                "Password should contain at least one upper case letter",
            );
        }
        if !password.chars().any(|c| c.is_ascii_lowercase()) {
            violations.add(
                Field::Password,
                Rule::MissingLowercase,
                "Password should contain at least one lower case letter",
            );
        }
        if !password.chars().any(|c| c.is_ascii_digit()) {
            violations.add(
                Field::Password,
                Rule::MissingDigit,
                "Password should contain at least one decimal digit",
            );
        }
    }
}
