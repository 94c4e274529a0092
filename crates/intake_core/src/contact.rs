use serde::{Deserialize, Serialize};

use crate::error::ContactIncomplete;

/// Free-form contact message from the page-level contact section, separate
/// from the per-service intake modal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub service: String,
    pub message: String,
}

impl ContactMessage {
    /// All four fields must be filled before the message is accepted.
    pub fn validate(&self) -> Result<(), ContactIncomplete> {
        let fields = [&self.name, &self.email, &self.service, &self.message];
        if fields.iter().any(|field| field.trim().is_empty()) {
            return Err(ContactIncomplete);
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> ContactMessage {
        ContactMessage {
            name: "Dana".to_string(),
            email: "dana@example.com".to_string(),
            service: "cv-creation".to_string(),
            message: "Looking for a CV refresh before September.".to_string(),
        }
    }

    #[test]
    fn accepts_a_fully_filled_message() {
        assert_eq!(complete().validate(), Ok(()));
    }

    #[test]
    fn rejects_any_blank_field() {
        for blank in 0..4 {
            let mut message = complete();
            match blank {
                0 => message.name.clear(),
                1 => message.email = "   ".to_string(),
                2 => message.service.clear(),
                _ => message.message.clear(),
            }
            assert_eq!(message.validate(), Err(ContactIncomplete));
        }
    }

    #[test]
    fn clear_resets_every_field() {
        let mut message = complete();
        message.clear();
        assert_eq!(message, ContactMessage::default());
    }
}
