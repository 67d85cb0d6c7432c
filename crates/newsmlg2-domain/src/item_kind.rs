//! Item kind - the narrative nature of a news item

use std::fmt;

/// Narrative nature of a news item, derived from the content shape
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ItemKind {
    /// Text story
    Text,
    /// Picture (association type `image`)
    Picture,
    /// Video
    Video,
    /// Audio
    Audio,
    /// Graphic
    Graphic,
    /// Any other association type, kept verbatim
    Other(String),
}

impl ItemKind {
    /// Placeholder used when an association carries no type at all
    pub const UNKNOWN_TYPE: &'static str = "unknown";

    /// Map an association `type` field to a kind
    ///
    /// # Examples
    ///
    /// ```
    /// use newsmlg2_domain::ItemKind;
    ///
    /// assert_eq!(ItemKind::from_association_type(Some("image")), ItemKind::Picture);
    /// assert_eq!(ItemKind::from_association_type(Some("podcast")).qcode(), "ninat:podcast");
    /// ```
    pub fn from_association_type(assoc_type: Option<&str>) -> Self {
        match assoc_type {
            Some("text") => ItemKind::Text,
            Some("image") => ItemKind::Picture,
            Some("video") => ItemKind::Video,
            Some("audio") => ItemKind::Audio,
            Some("graphic") => ItemKind::Graphic,
            Some(other) => ItemKind::Other(other.to_string()),
            None => ItemKind::Other(Self::UNKNOWN_TYPE.to_string()),
        }
    }

    /// IPTC news item nature code (`ninat:*`)
    pub fn qcode(&self) -> String {
        match self {
            ItemKind::Text => "ninat:text".to_string(),
            ItemKind::Picture => "ninat:picture".to_string(),
            ItemKind::Video => "ninat:video".to_string(),
            ItemKind::Audio => "ninat:audio".to_string(),
            ItemKind::Graphic => "ninat:graphic".to_string(),
            ItemKind::Other(kind) => format!("ninat:{}", kind),
        }
    }

    /// Check whether this is a text story
    pub fn is_text(&self) -> bool {
        matches!(self, ItemKind::Text)
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.qcode())
    }
}
