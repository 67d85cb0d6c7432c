//! Output mapping consumed by the document writer
//!
//! [`NewsItemFields`] is the flat, schema-stable result of one conversion.
//! Every key is always present when serialized; optional values
//! serialize as `null`.

use serde::{Deserialize, Serialize};

/// The complete set of rendered fields for one news item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItemFields {
    /// Item URN (`guid`)
    pub urn: String,

    /// Item version
    pub version: i64,

    /// Copyright notice
    pub copyright_notice: String,

    /// Usage terms, one per source
    pub usageterms: Vec<Option<String>>,

    /// Item class
    pub item_class: ItemClass,

    /// Provider
    pub provider: Concept,

    /// Timestamp of this version
    pub version_created: String,

    /// Embargo timestamp
    pub embargoed: Option<String>,

    /// Publication status
    pub pubstatus: Concept,

    /// Identity of the conversion tool
    pub generator: Generator,

    /// Services
    pub services: Vec<Concept>,

    /// Editorial notes
    pub ednotes: Vec<EdNoteEntry>,

    /// Notepad sections
    pub notepad: Option<Notepad>,

    /// Signal qcodes
    pub signals: Option<Vec<String>>,

    /// Links to associated media and linkbox targets
    pub association_links: Vec<AssociationLink>,

    /// Urgency
    pub urgency: i64,

    /// Content creation timestamp
    pub content_created: Option<String>,

    /// Locations
    pub located_list: Vec<Concept>,

    /// Information sources
    pub info_sources: Vec<Party>,

    /// Creators
    pub creators: Vec<Party>,

    /// Contributors
    pub contributors: Vec<Party>,

    /// Genre
    pub genre: Option<Concept>,

    /// Subjects
    pub subjects: Vec<Subject>,

    /// Audiences
    pub audiences: Vec<Concept>,

    /// Language tag
    pub language: Option<String>,

    /// Keywords
    pub keywords: Vec<Keyword>,

    /// Headline
    pub headline: Option<String>,

    /// Byline
    pub byline: String,

    /// Dateline
    pub dateline: Option<String>,

    /// Credit line
    pub credit: Option<String>,

    /// Descriptions
    pub descriptions: Vec<DescriptionEntry>,

    /// Points of interest
    pub pois: Vec<PoiEntry>,

    /// Kicker
    pub kicker: Option<String>,

    /// Teaser
    pub teaser: Option<String>,

    /// Embargo notice
    pub embargo_notice: Option<String>,

    /// Sluglines
    pub sluglines: Vec<Slugline>,

    /// Rendered article blocks; text items only
    pub article_html: Option<Vec<String>>,

    /// Rendered infobox
    pub infobox: Option<String>,

    /// Remote content references; non-text items only
    pub remote_contents: Option<Vec<RemoteContent>>,
}

/// Item class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemClass {
    /// `ninat:*` code
    pub qcode: String,
}

/// A coded concept with an optional display name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Concept {
    /// Controlled-vocabulary code
    pub qcode: Option<String>,

    /// Display name
    pub name: Option<String>,
}

/// Static identity of the conversion tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Generator {
    /// Tool name
    pub name: String,

    /// Role qcode
    pub role: String,

    /// Tool version
    pub version: String,
}

/// A rendered editorial note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdNoteEntry {
    /// Role
    pub role: Option<String>,

    /// Note text
    pub text: String,

    /// Publication constraint for non-public notes
    pub constraint: Option<String>,
}

/// Notepad sections of a text item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notepad {
    /// Header markup
    pub header: Option<String>,

    /// Public markup
    pub public: Option<String>,

    /// Non-public markup
    pub non_public: Option<String>,

    /// Closing line
    pub closingline: String,
}

/// A rendered item-meta link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssociationLink {
    /// URN of the target item
    pub urn: Option<String>,

    /// Sequential 1-based rank
    pub rank: String,

    /// Target URL
    pub href: Option<String>,

    /// Relation
    pub rel: Option<String>,

    /// Version of the target item
    pub version: Option<String>,

    /// Title
    pub title: Option<String>,

    /// `ninat:*` class of the target
    #[serde(rename = "itemClass")]
    pub item_class: Option<String>,
}

/// A person or organisation with a role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    /// Name
    pub name: Option<String>,

    /// Qcode
    pub qcode: Option<String>,

    /// Role
    pub role: Option<String>,
}

/// A rendered subject
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Target subject type
    #[serde(rename = "type")]
    pub subject_type: Option<String>,

    /// Name
    pub name: Option<String>,

    /// Qcode
    pub qcode: Option<String>,

    /// Rank as text
    pub rank: Option<String>,
}

/// A rendered keyword
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyword {
    /// Keyword text
    pub name: Option<String>,

    /// Rank as text
    pub rank: Option<String>,
}

/// A rendered description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptionEntry {
    /// Role
    pub role: Option<String>,

    /// Text
    pub value: Option<String>,
}

/// A rendered point of interest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoiEntry {
    /// Place name
    pub name: Option<String>,

    /// Synthetic identifier (`poiID<index>`)
    pub literal: String,

    /// 1-based rank
    pub rank: String,

    /// Postal address
    pub address: Option<String>,

    /// City
    pub city: Option<String>,

    /// Country
    pub country: Option<String>,

    /// Longitude
    pub longitude: Option<String>,

    /// Latitude
    pub latitude: Option<String>,
}

/// A rendered slugline entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slugline {
    /// Short kind tag (`subject`, `geo`, `keyword`, ...)
    pub kind: String,

    /// Name
    pub name: String,

    /// Qcode
    pub qcode: Option<String>,
}

/// A rendered remote content reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteContent {
    /// Rendition URL
    pub href: Option<String>,

    /// MIME type
    pub contenttype: Option<String>,

    /// Width
    pub width: Option<String>,

    /// Height
    pub height: Option<String>,

    /// Audio sample rate
    pub samplerate: Option<String>,

    /// Audio bitrate
    pub bitrate: Option<String>,
}
