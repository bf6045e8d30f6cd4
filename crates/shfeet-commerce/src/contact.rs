//! The "contact us" form.

use serde::{Deserialize, Serialize};
use shfeet_data::StorefrontApi;

use crate::error::CommerceError;
use crate::notice::Notice;

/// A message from the contact page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    /// Optional.
    #[serde(default)]
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    /// Check required fields and the email shape.
    pub fn validate(&self) -> Result<(), CommerceError> {
        let missing: Vec<&str> = [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect();
        if !missing.is_empty() {
            return Err(CommerceError::MissingInformation(missing.join(", ")));
        }

        if !is_valid_email(&self.email) {
            return Err(CommerceError::InvalidEmail(self.email.trim().to_string()));
        }
        Ok(())
    }

    /// Validate and send. Returns the confirmation to show the shopper.
    pub async fn submit(&self, api: &StorefrontApi) -> Result<Notice, CommerceError> {
        self.validate()?;
        let trimmed = ContactMessage {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        };
        api.submit_contact(&trimmed).await?;
        tracing::info!(email = %trimmed.email, "contact message sent");
        Ok(Notice::success("Message sent!")
            .with_description("We'll get back to you as soon as possible."))
    }
}

/// Loose `local@domain.tld` check: one `@`, no whitespace, and a dot in the
/// domain with text on both sides.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message() -> ContactMessage {
        ContactMessage {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: String::new(),
            message: "Do you ship to Jos?".into(),
        }
    }

    #[test]
    fn test_email_check() {
        assert!(is_valid_email("ada@example.com"));
        assert!(is_valid_email("a.b@mail.example.ng"));
        assert!(!is_valid_email("ada@example"));
        assert!(!is_valid_email("ada@.com"));
        assert!(!is_valid_email("ada@example."));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("ada@@example.com"));
        assert!(!is_valid_email("ada obi@example.com"));
    }

    #[test]
    fn test_validate() {
        assert!(message().validate().is_ok());

        let blank = ContactMessage {
            name: " ".into(),
            message: String::new(),
            ..message()
        };
        match blank.validate() {
            Err(CommerceError::MissingInformation(fields)) => assert_eq!(fields, "name, message"),
            other => panic!("unexpected result: {:?}", other),
        }

        let bad_email = ContactMessage {
            email: "ada-at-example.com".into(),
            ..message()
        };
        assert!(matches!(bad_email.validate(), Err(CommerceError::InvalidEmail(_))));
    }
}
