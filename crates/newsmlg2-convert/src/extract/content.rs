//! Content extractors; raw passthroughs

use crate::record::Record;

/// Headline
pub fn headline(record: &Record) -> Option<String> {
    record.get_str("headline")
}

/// Kicker (roof line above the headline)
pub fn kicker(record: &Record) -> Option<String> {
    record.get_str("kicker")
}

/// Teaser
pub fn teaser(record: &Record) -> Option<String> {
    record.get_str("teaser")
}

/// Article body markup
pub fn article(record: &Record) -> Option<String> {
    record.get_str("article_html")
}
