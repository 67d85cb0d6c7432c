//! NewsML-G2 Converter
//!
//! Converts dpa digitalwires records (JSON) into IPTC NewsML-G2 documents.
//!
//! # Overview
//!
//! A conversion runs in three stages:
//!
//! ```text
//! Record → extract → render → NewsItemFields → G2DocumentWriter → XML
//! ```
//!
//! - **Extractors** ([`extract`]) pull one semantic field each out of the
//!   record and apply that field's default.
//! - **Renderers** ([`render`]) reshape extracted values into NewsML-G2
//!   vocabulary and compute derived values such as sequential ranks.
//! - **Assembly** ([`G2Converter`]) runs every extractor/renderer pair and
//!   produces the flat [`NewsItemFields`] mapping, which the
//!   [`G2DocumentWriter`] lays out as XML.
//!
//! Conversion is pure: the same record and configuration always produce
//! the same output.
//!
//! # Example Usage
//!
//! ```
//! use newsmlg2_convert::{convert_to_g2, ConverterConfig, Record};
//! use serde_json::json;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let record = Record::from_value(json!({
//!     "urn": "urn:newsml:dpa.com:20090101:200101-99-000001",
//!     "version": 2,
//!     "headline": "Hafen meldet Rekordumschlag",
//!     "article_html": "<section><p>Lorem ipsum</p></section>",
//! }))
//! .ok_or("record must be a JSON object")?;
//!
//! let xml = convert_to_g2(&record, &ConverterConfig::default())?;
//! assert!(xml.contains("<headline>Hafen meldet Rekordumschlag</headline>"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;
mod converter;
mod document;
mod error;
mod fields;
mod fragment;
mod ranked;
mod record;

pub mod extract;
pub mod render;


pub use config::{
    ConverterConfig, DocumentConfig, GeneratorConfig, DEFAULT_CATALOG_HREF, DEFAULT_GENERATOR_NAME,
    DEFAULT_GENERATOR_ROLE,
};
pub use converter::G2Converter;
pub use document::{G2DocumentWriter, NEWSML_G2_NAMESPACE};
pub use error::{ConvertError, Result};
pub use fields::{
    AssociationLink, Concept, DescriptionEntry, EdNoteEntry, Generator, ItemClass, Keyword, NewsItemFields,
    Notepad, Party, PoiEntry, RemoteContent, Slugline, Subject,
};
pub use fragment::{check_well_formed, parse_fragment, Element, Node};
pub use ranked::{entry_rank, sorted_filtered_projection, Filter};
pub use record::{value_to_int, value_to_rank, value_to_string, Record};

/// Assemble the complete field mapping for one record
pub fn convert_record(record: &Record, config: &ConverterConfig) -> Result<NewsItemFields> {
    G2Converter::new(config.clone())?.assemble(record)
}

/// Convert one record into a serialized NewsML-G2 document
pub fn convert_to_g2(record: &Record, config: &ConverterConfig) -> Result<String> {
    let fields = convert_record(record, config)?;
    G2DocumentWriter::new(config.document.clone()).write(&fields)
}
