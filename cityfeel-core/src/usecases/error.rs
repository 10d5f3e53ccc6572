use crate::{
    entities::{EmailAddressParseError, EmotionValueError, PasswordError},
    repositories,
    util::{
        image_format::ImageInvalidation,
        validate::{CommentInvalidation, UserInvalidation},
    },
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("This field is required")]
    MissingField(&'static str),
    #[error("The emotional value must be between 1 and 5")]
    EmotionalValue,
    #[error("The privacy status must be 'public' or 'private'")]
    PrivacyStatus,
    #[error("The latitude must be between -90 and 90")]
    Latitude,
    #[error("The longitude must be between -180 and 180")]
    Longitude,
    #[error("The name is too long")]
    LocationName,
    #[error("The location does not exist")]
    UnknownLocation(&'static str),
    #[error("The comment is empty")]
    EmptyComment,
    #[error("The emotion point does not belong to the location")]
    CommentEmotionPoint,
    #[error("The caption is too long")]
    Caption,
    #[error("The image must not be larger than 5 MB")]
    ImageTooLarge,
    #[error("Only JPEG and PNG images are supported")]
    ImageFormat,
    #[error("The user does not exist")]
    FriendId,
    #[error("You cannot send a friend request to yourself")]
    SelfFriendship,
    #[error("A relationship with this user already exists")]
    FriendshipExists,
    #[error("The status can only be changed to 'accepted' or 'rejected'")]
    FriendshipStatus,
    #[error("Invalid username")]
    Username,
    #[error("A user with that username already exists")]
    UserExists,
    #[error("The name is too long")]
    Name(&'static str),
    #[error("Invalid email address")]
    EmailAddress,
    #[error("The password must contain at least 8 characters")]
    Password,
    #[error("The passwords do not match")]
    PasswordMismatch,
    #[error("Invalid credentials")]
    Credentials,
    #[error("This is not allowed without auth")]
    Unauthorized,
    #[error("This is not allowed")]
    Forbidden,
    #[error("The user does not exist")]
    UserDoesNotExist,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl Error {
    /// Name of the request field that caused the error.
    pub fn field(&self) -> Option<&'static str> {
        let field = match self {
            Self::MissingField(field) | Self::UnknownLocation(field) | Self::Name(field) => *field,
            Self::EmotionalValue => "emotional_value",
            Self::PrivacyStatus => "privacy_status",
            Self::Latitude => "latitude",
            Self::Longitude => "longitude",
            Self::LocationName => "location_name",
            Self::EmptyComment => "content",
            Self::CommentEmotionPoint => "emotion_point",
            Self::Caption => "caption",
            Self::ImageTooLarge | Self::ImageFormat => "image",
            Self::FriendId | Self::SelfFriendship | Self::FriendshipExists => "friend_id",
            Self::FriendshipStatus => "status",
            Self::Username | Self::UserExists => "username",
            Self::EmailAddress => "email",
            Self::Password => "password1",
            Self::PasswordMismatch => "password2",
            Self::Credentials
            | Self::Unauthorized
            | Self::Forbidden
            | Self::UserDoesNotExist
            | Self::Repo(_) => return None,
        };
        Some(field)
    }
}

impl From<EmotionValueError> for Error {
    fn from(_: EmotionValueError) -> Self {
        Self::EmotionalValue
    }
}

impl From<PasswordError> for Error {
    fn from(err: PasswordError) -> Self {
        match err {
            PasswordError::TooShort => Self::Password,
            PasswordError::Hash(err) => Self::Repo(repositories::Error::Other(err.into())),
        }
    }
}

impl From<EmailAddressParseError> for Error {
    fn from(_: EmailAddressParseError) -> Self {
        Self::EmailAddress
    }
}

impl From<ImageInvalidation> for Error {
    fn from(err: ImageInvalidation) -> Self {
        match err {
            ImageInvalidation::TooLarge => Self::ImageTooLarge,
            ImageInvalidation::Format => Self::ImageFormat,
        }
    }
}

impl From<CommentInvalidation> for Error {
    fn from(err: CommentInvalidation) -> Self {
        match err {
            CommentInvalidation::Content => Self::EmptyComment,
        }
    }
}

impl From<UserInvalidation> for Error {
    fn from(err: UserInvalidation) -> Self {
        match err {
            UserInvalidation::Username => Self::Username,
            UserInvalidation::EmailAddress => Self::EmailAddress,
        }
    }
}
