//! Structural Pattern: Facade
//! Example: One sign-up call hiding validation, user store and mailer
//!
//! Run with: cargo run --bin s05_facade

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum SignUpError {
    #[error("Invalid email: {0}")]
    InvalidEmail(String),
}

// --- the subsystems the facade hides ---

pub struct Validator;

impl Validator {
    pub fn is_valid_mail(&self, user_mail: &str) -> bool {
        EMAIL_RE.is_match(user_mail)
    }
}

pub struct UserStore;

impl UserStore {
    pub fn create(&self, user_name: &str, _user_pass: &str, _user_mail: &str) -> String {
        // some user registration logic ..
        format!("User '{}' was created..", user_name)
    }
}

pub struct Mail {
    to: String,
    subject: String,
}

impl Mail {
    pub fn new() -> Self {
        Mail {
            to: String::new(),
            subject: String::new(),
        }
    }

    pub fn to(mut self, mail_address: &str) -> Self {
        self.to = mail_address.to_string();
        self
    }

    pub fn subject(mut self, mail_subject: &str) -> Self {
        self.subject = mail_subject.to_string();
        self
    }

    pub fn send(self) -> String {
        // sending of mail ..
        format!("Email to {} with subject '{}' was sent..", self.to, self.subject)
    }
}

// --- the facade ---

/// The facade hides the registration complexity behind one method.
pub struct SignUpFacade {
    validator: Validator,
    users: UserStore,
}

impl SignUpFacade {
    pub fn new() -> Self {
        SignUpFacade {
            validator: Validator,
            users: UserStore,
        }
    }

    /// Validates, creates the user, sends the welcome mail. The only
    /// failure surfaced to the caller is a rejected email address.
    pub fn sign_up_user(
        &self,
        user_name: &str,
        user_pass: &str,
        user_mail: &str,
    ) -> Result<Vec<String>, SignUpError> {
        if !self.validator.is_valid_mail(user_mail) {
            return Err(SignUpError::InvalidEmail(user_mail.to_string()));
        }

        Ok(vec![
            self.users.create(user_name, user_pass, user_mail),
            Mail::new().to(user_mail).subject("Welcome").send(),
        ])
    }
}

fn main() {
    // we simply call sign_up_user() and don't care about the details
    // of the registration process
    match SignUpFacade::new().sign_up_user("Sergey", "123456", "test@mail.com") {
        Ok(lines) => {
            for line in lines {
                println!("{}", line);
            }
        }
        Err(_) => println!("User registration error"),
    }

    /* Output:
    User 'Sergey' was created..
    Email to test@mail.com with subject 'Welcome' was sent.. */
}
