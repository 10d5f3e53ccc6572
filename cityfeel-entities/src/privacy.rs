use strum::{Display, EnumString};

/// Visibility of ratings, comments and photos.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum PrivacyStatus {
    #[default]
    Public,
    Private,
}

impl PrivacyStatus {
    pub const fn is_public(self) -> bool {
        matches!(self, Self::Public)
    }
}
