//! Role-tagged descriptions

/// Free text describing the item, tagged by role (e.g. a caption)
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Description {
    /// Role tag
    pub role: Option<String>,

    /// Description text
    pub description: Option<String>,
}
