//! Links to associated or external content

use crate::rank::Rank;

/// Relation used for every link this converter produces
pub const SEE_ALSO_REL: &str = "irel:seeAlso";

/// A reference to associated media (one rendition) or to an external page
///
/// Numeric rendition properties are carried as their textual form since
/// they are only ever copied into attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Link {
    /// URN of the associated item
    pub urn: Option<String>,

    /// Version of the associated item
    pub version: Option<String>,

    /// Title (association headline or anchor text)
    pub title: Option<String>,

    /// Association type (`image`, `video`, `audio`, ...)
    pub assoc_type: Option<String>,

    /// Link relation
    pub rel: Option<String>,

    /// Target URL
    pub url: Option<String>,

    /// MIME type of the rendition
    pub content_type: Option<String>,

    /// Rendition width
    pub width: Option<String>,

    /// Rendition height
    pub height: Option<String>,

    /// Audio bitrate
    pub bitrate: Option<String>,

    /// Audio sample rate
    pub samplerate: Option<String>,

    /// Ordering key
    pub rank: Option<Rank>,
}

impl Link {
    /// Create a see-also link to a URL
    pub fn see_also(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            rel: Some(SEE_ALSO_REL.to_string()),
            ..Self::default()
        }
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the rank
    pub fn with_rank(mut self, rank: Rank) -> Self {
        self.rank = Some(rank);
        self
    }
}
