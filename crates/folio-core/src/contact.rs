//! Mailto-based contact form.

pub const PUBLIC_EMAIL: &str = "hhaseeb.aahmed006@gmail.com";

pub const STATUS_MISSING_FIELDS: &str = "Please fill in all fields.";
pub const STATUS_OPENING: &str = "Opening your email client…";
pub const STATUS_COPIED: &str = "Email copied to clipboard.";
pub const STATUS_COPY_FAILED: &str = "Couldn’t copy. You can manually copy the email above.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("{}", STATUS_MISSING_FIELDS)]
    MissingFields,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    /// Trim each field; all three are required.
    pub fn from_fields(name: &str, email: &str, message: &str) -> Result<Self, ContactError> {
        let (name, email, message) = (name.trim(), email.trim(), message.trim());
        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(ContactError::MissingFields);
        }
        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }

    pub fn subject(&self) -> String {
        format!("Portfolio contact — {}", self.name)
    }

    pub fn body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\n\n{}\n",
            self.name, self.email, self.message
        )
    }

    /// `mailto:` link; `encode` is the host's URI-component encoder.
    pub fn mailto_href(&self, encode: impl Fn(&str) -> String) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            PUBLIC_EMAIL,
            encode(&self.subject()),
            encode(&self.body())
        )
    }
}
