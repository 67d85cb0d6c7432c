//! Category extractors
//!
//! All of these select from the record's `categories` by a fixed
//! `dnltype:*` tag. The attribute subset differs per field and matches
//! what the corresponding renderer consumes.

use newsmlg2_domain::{Category, CategoryAttr, Poi};
use serde_json::Value;

use crate::record::{value_to_string, Record};

use newsmlg2_domain::CategoryAttr::{Name, Qcode, Role, Type};

/// Services the item is delivered on (`dnltype:wire`)
pub fn services(record: &Record) -> Vec<Category> {
    record.category_items(Some("dnltype:wire"), &[Qcode, Name])
}

/// dpa subject classifications
pub fn dpa_subjects(record: &Record) -> Vec<Category> {
    record.category_items(Some("dnltype:dpasubject"), &CategoryAttr::DEFAULT)
}

/// Geographic subjects
pub fn geo_subject(record: &Record) -> Vec<Category> {
    record.category_items(Some("dnltype:geosubject"), &CategoryAttr::DEFAULT)
}

/// Desks (editorial departments); desks carry no rank
pub fn desk(record: &Record) -> Vec<Category> {
    record.category_items(Some("dnltype:desk"), &[Type, Name, Qcode])
}

/// Target audience scopes
pub fn scope(record: &Record) -> Vec<Category> {
    record.category_items(Some("dnltype:scope"), &[Name, Qcode])
}

/// Keywords
pub fn keywords(record: &Record) -> Vec<Category> {
    record.category_items(Some("dnltype:keyword"), &CategoryAttr::DEFAULT)
}

/// Places the story was reported from
pub fn located(record: &Record) -> Vec<Category> {
    record.category_items(Some("dnltype:located"), &[Name, Qcode])
}

/// Information sources
pub fn infosource(record: &Record) -> Vec<Category> {
    record.category_items(Some("dnltype:infosource"), &[Name, Qcode, Role])
}

/// Creators
pub fn creator(record: &Record) -> Vec<Category> {
    record.category_items(Some("dnltype:creator"), &[Name, Qcode, Role])
}

/// Contributors
pub fn contributor(record: &Record) -> Vec<Category> {
    record.category_items(Some("dnltype:contributor"), &[Name, Qcode, Role])
}

/// First genre, if any
pub fn genre(record: &Record) -> Option<Category> {
    record
        .category_items(Some("dnltype:genre"), &[Name, Qcode])
        .into_iter()
        .next()
}

/// Signal qcodes; entries without a qcode are kept as `None`
pub fn signal_qcodes(record: &Record) -> Vec<Option<String>> {
    record
        .category_items(Some("dnltype:signal"), &[Qcode])
        .into_iter()
        .map(|c| c.qcode)
        .collect()
}

/// Qcode of the first publication status, `""` when there is none
pub fn pubstatus_qcode(record: &Record) -> Option<String> {
    first_field(record, "dnltype:pubstatus", Qcode)
}

/// Name of the first publication status, `""` when there is none
pub fn pubstatus_name(record: &Record) -> Option<String> {
    first_field(record, "dnltype:pubstatus", Name)
}

/// Qcode of the first provider, `""` when there is none
pub fn provider_qcode(record: &Record) -> Option<String> {
    first_field(record, "dnltype:provider", Qcode)
}

/// Name of the first provider, `""` when there is none
pub fn provider_name(record: &Record) -> Option<String> {
    first_field(record, "dnltype:provider", Name)
}

// A present first match whose field is missing yields None, not "".
fn first_field(record: &Record, category_type: &str, attr: CategoryAttr) -> Option<String> {
    match record.category_items(Some(category_type), &[attr]).into_iter().next() {
        Some(category) => match attr {
            Name => category.name,
            _ => category.qcode,
        },
        None => Some(String::new()),
    }
}

/// Points of interest from `dnltype:poi` categories
///
/// Read in source order straight from each category's `geojson`; the
/// first coordinate is the longitude, the second the latitude.
pub fn poi(record: &Record) -> Vec<Poi> {
    record
        .get_array("categories")
        .iter()
        .filter(|cat| cat.get("type").and_then(Value::as_str) == Some("dnltype:poi"))
        .map(|cat| {
            let geojson = cat.get("geojson");
            let property = |key: &str| {
                geojson
                    .and_then(|g| g.get("properties"))
                    .and_then(|p| p.get(key))
                    .and_then(value_to_string)
            };
            let coordinate = |idx: usize| {
                geojson
                    .and_then(|g| g.get("geometry"))
                    .and_then(|g| g.get("coordinates"))
                    .and_then(|c| c.get(idx))
                    .and_then(value_to_string)
            };

            Poi {
                name: property("name"),
                formatted_address: property("formatted_address"),
                city: property("locality"),
                country: property("country"),
                longitude: coordinate(0),
                latitude: coordinate(1),
            }
        })
        .collect()
}
