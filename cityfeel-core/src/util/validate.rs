use crate::entities::*;
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

pub use fast_chemail::is_valid_email;

lazy_static! {
    static ref USERNAME_REGEX: Regex = Regex::new(r"^[A-Za-z0-9@.+_-]+$").unwrap();
}

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

pub fn is_valid_username(username: &str) -> bool {
    username.chars().count() <= MAX_USERNAME_LEN && USERNAME_REGEX.is_match(username)
}

pub fn is_valid_location_name(name: &str) -> bool {
    name.chars().count() <= MAX_NAME_LEN
}

pub fn is_valid_caption(caption: &str) -> bool {
    caption.chars().count() <= MAX_CAPTION_LEN
}

#[derive(Debug, Error)]
pub enum CommentInvalidation {
    #[error("The comment is empty")]
    Content,
}

impl Validate for Comment {
    type Error = CommentInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if self.content.trim().is_empty() {
            return Err(Self::Error::Content);
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum UserInvalidation {
    #[error("Invalid username")]
    Username,
    #[error("Invalid email")]
    EmailAddress,
}

impl Validate for User {
    type Error = UserInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if !is_valid_username(&self.username) {
            return Err(Self::Error::Username);
        }
        if !is_valid_email(self.email.as_str()) {
            return Err(Self::Error::EmailAddress);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usernames() {
        assert!(is_valid_username("jan.kowalski"));
        assert!(is_valid_username("a+b@c_d-e"));
        assert!(is_valid_username(&"x".repeat(150)));
        assert!(!is_valid_username(&"x".repeat(151)));
        assert!(!is_valid_username(""));
        assert!(!is_valid_username("jan kowalski"));
        assert!(!is_valid_username("zażółć"));
    }

    #[test]
    fn location_names() {
        assert!(is_valid_location_name(""));
        assert!(is_valid_location_name(&"ł".repeat(200)));
        assert!(!is_valid_location_name(&"a".repeat(201)));
    }

    #[test]
    fn blank_comments_are_invalid() {
        let mut comment = Comment {
            id: Id::default(),
            user_id: Id::new(1),
            location_id: Id::new(1),
            emotion_point_id: None,
            content: " \n\t".into(),
            privacy: PrivacyStatus::Public,
            created_at: Timestamp::now(),
        };
        assert!(comment.validate().is_err());
        comment.content = " ok ".into();
        assert!(comment.validate().is_ok());
    }
}
