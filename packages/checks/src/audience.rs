/// Who a message is addressed to.
///
/// Community authors cannot fix project fields or auto-merge themselves, so
/// some messages carry a reassurance for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Audience {
    /// Public member of the organization owning the repository.
    Member,
    /// Anyone else.
    Community,
}

impl Audience {
    #[must_use]
    pub const fn from_is_community(is_community: bool) -> Self {
        if is_community {
            Self::Community
        } else {
            Self::Member
        }
    }

    #[must_use]
    pub const fn is_community(self) -> bool {
        matches!(self, Self::Community)
    }

    /// `base`, followed by `Don't worry, <reassurance>.` for community
    /// authors.
    #[must_use]
    pub fn reassure(self, base: &str, reassurance: &str) -> String {
        match self {
            Self::Member => base.to_string(),
            Self::Community => format!("{base} Don't worry, {reassurance}."),
        }
    }
}
