//! Editorial notes

/// One editorial or internal note attached to a news item
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct EdNote {
    /// Role tag (e.g. `dpaednoterole:closingline`)
    pub role: Option<String>,

    /// Note text
    pub ednote: Option<String>,

    /// Whether the note may be shown to the public
    pub is_publishable: Option<bool>,
}

impl EdNote {
    /// Create a note with a role and text
    pub fn new(role: impl Into<String>, ednote: impl Into<String>) -> Self {
        Self {
            role: Some(role.into()),
            ednote: Some(ednote.into()),
            is_publishable: None,
        }
    }

    /// Set the publishability flag
    pub fn with_publishable(mut self, is_publishable: bool) -> Self {
        self.is_publishable = Some(is_publishable);
        self
    }

    /// A missing flag counts as not publishable
    pub fn is_public(&self) -> bool {
        self.is_publishable.unwrap_or(false)
    }
}

/// Attributes that can be projected out of a source note
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdNoteAttr {
    /// The `role` field
    Role,
    /// The `ednote` text field
    Text,
    /// The `is_publishable` flag
    IsPublishable,
}

impl EdNoteAttr {
    /// Key of this attribute in the source record
    pub fn source_key(&self) -> &'static str {
        match self {
            EdNoteAttr::Role => "role",
            EdNoteAttr::Text => "ednote",
            EdNoteAttr::IsPublishable => "is_publishable",
        }
    }
}
