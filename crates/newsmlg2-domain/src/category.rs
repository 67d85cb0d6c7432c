//! Category module - tagged classifications of a news item

use crate::rank::Rank;

/// One tagged classification entry
///
/// Subjects, geo tags, services, providers, desks, keywords and the
/// creator/contributor/info-source roles all share this shape. Only the
/// attributes requested at extraction time are populated; the rest stay
/// `None`. Duplicates are not collapsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Category {
    /// Classification tag (the source's `type`, e.g. `dnltype:dpasubject`)
    pub category_type: Option<String>,

    /// Role qualifier (used by creators, contributors and info sources)
    pub role: Option<String>,

    /// Human readable name
    pub name: Option<String>,

    /// Controlled-vocabulary code
    pub qcode: Option<String>,

    /// Ordering key within the source collection
    pub rank: Option<Rank>,
}

impl Category {
    /// Set the classification tag
    pub fn with_type(mut self, category_type: impl Into<String>) -> Self {
        self.category_type = Some(category_type.into());
        self
    }

    /// Set the role
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Set the name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the qcode
    pub fn with_qcode(mut self, qcode: impl Into<String>) -> Self {
        self.qcode = Some(qcode.into());
        self
    }

    /// Set the rank
    pub fn with_rank(mut self, rank: Rank) -> Self {
        self.rank = Some(rank);
        self
    }
}

/// Attributes that can be projected out of a source category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryAttr {
    /// The source `type` field, stored as `category_type`
    Type,
    /// The `role` field
    Role,
    /// The `name` field
    Name,
    /// The `qcode` field
    Qcode,
    /// The `rank` field
    Rank,
}

impl CategoryAttr {
    /// Default projection when a caller does not narrow the attribute set
    pub const DEFAULT: [CategoryAttr; 4] = [
        CategoryAttr::Type,
        CategoryAttr::Name,
        CategoryAttr::Qcode,
        CategoryAttr::Rank,
    ];

    /// Key of this attribute in the source record
    pub fn source_key(&self) -> &'static str {
        match self {
            CategoryAttr::Type => "type",
            CategoryAttr::Role => "role",
            CategoryAttr::Name => "name",
            CategoryAttr::Qcode => "qcode",
            CategoryAttr::Rank => "rank",
        }
    }
}
