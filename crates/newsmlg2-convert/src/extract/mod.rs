//! Field extractors
//!
//! Each extractor pulls one semantic field out of a [`Record`](crate::Record)
//! and applies that field's default policy. Extractors never fail on
//! missing or malformed optional data; the only fallible one is
//! [`linkbox`], which has to parse embedded markup.

mod association;
mod category;
mod content;
mod description;
mod meta;
mod notepad;

pub use association::associations;
pub use category::{
    contributor, creator, desk, dpa_subjects, genre, geo_subject, infosource, keywords, located, poi,
    provider_name, provider_qcode, pubstatus_name, pubstatus_qcode, scope, services, signal_qcodes,
};
pub use content::{article, headline, kicker, teaser};
pub use description::descriptions;
pub use meta::{
    byline, content_created, copyright_notice, creditline, dateline, embargoed, infobox, language, linkbox,
    urgency, urn, usageterms, version, version_created, DEFAULT_URGENCY, DEFAULT_VERSION,
};
pub use notepad::{
    closing_line, correction, ednotes, embargo_note, embargo_notice, genre_note, non_public_notepad,
    notepad_header, picture_note, public_notepad,
};
