//! Meta extractors: identity, dates, rights and the linkbox

use newsmlg2_domain::{Link, Rank};
use serde_json::Value;
use tracing::warn;

use crate::error::Result;
use crate::fragment::parse_fragment;
use crate::record::{value_to_int, Record};

/// Urgency used when the record carries none
pub const DEFAULT_URGENCY: i64 = 3;

/// Version used when the record carries none
pub const DEFAULT_VERSION: &str = "1";

/// URN of the item, `""` when absent
pub fn urn(record: &Record) -> String {
    record.get_str_or("urn", "")
}

/// Raw version value, `"1"` when absent
///
/// Integer coercion happens in the renderer so that a bad value fails
/// the conversion instead of being absorbed here.
pub fn version(record: &Record) -> Value {
    record
        .get("version")
        .cloned()
        .unwrap_or_else(|| Value::from(DEFAULT_VERSION))
}

/// Timestamp of this version, `""` when absent
pub fn version_created(record: &Record) -> String {
    record.get_str_or("version_created", "")
}

/// Creation timestamp of the content, `""` when absent
pub fn content_created(record: &Record) -> String {
    record.get_str_or("content_created", "")
}

/// Urgency, `3` when absent or not an integer
pub fn urgency(record: &Record) -> i64 {
    match record.get("urgency") {
        None => DEFAULT_URGENCY,
        Some(value) => value_to_int(value).unwrap_or_else(|| {
            warn!("Ignoring non-numeric urgency {}, using {}", value, DEFAULT_URGENCY);
            DEFAULT_URGENCY
        }),
    }
}

/// Embargo timestamp
pub fn embargoed(record: &Record) -> Option<String> {
    record.get_str("embargoed")
}

/// Dateline text (e.g. `Hamburg (dpa) - `)
pub fn dateline(record: &Record) -> Option<String> {
    record.get_str("dateline")
}

/// Credit line
pub fn creditline(record: &Record) -> Option<String> {
    record.get_str("creditline")
}

/// Byline; never `None`, empty when absent
pub fn byline(record: &Record) -> String {
    record.get_str_or("byline", "")
}

/// Copyright notice (source key `copyrightnotice`); never `None`
pub fn copyright_notice(record: &Record) -> String {
    record.get_str_or("copyrightnotice", "")
}

/// Usage terms
pub fn usageterms(record: &Record) -> Option<String> {
    record.get_str("usageterms")
}

/// Language tag
pub fn language(record: &Record) -> Option<String> {
    record.get_str("language")
}

/// Infobox markup
pub fn infobox(record: &Record) -> Option<String> {
    record.get_str("infobox_html")
}

/// Links from the linkbox, in document order
///
/// Only anchors at `ul/li/a` directly below the fragment root count.
/// An absent or empty linkbox yields an empty list.
pub fn linkbox(record: &Record) -> Result<Vec<Link>> {
    let markup = match record.get_str("linkbox_html") {
        Some(markup) if !markup.is_empty() => markup,
        _ => return Ok(Vec::new()),
    };

    let section = parse_fragment("linkbox_html", &markup)?;
    let links = section
        .select_path(&["ul", "li", "a"])
        .into_iter()
        .enumerate()
        .map(|(idx, anchor)| {
            let mut link = Link::see_also(anchor.attribute("href").unwrap_or_default()).with_rank(Rank::from_position(idx));
            link.title = anchor.text();
            link
        })
        .collect();
    Ok(links)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConvertError;
    use newsmlg2_domain::SEE_ALSO_REL;
    use serde_json::json;

    fn record(value: Value) -> Record {
        Record::from_value(value).unwrap()
    }

    #[test]
    fn test_defaults_on_empty_record() {
        let r = Record::default();
        assert_eq!(urn(&r), "");
        assert_eq!(version(&r), json!("1"));
        assert_eq!(version_created(&r), "");
        assert_eq!(content_created(&r), "");
        assert_eq!(urgency(&r), 3);
        assert!(embargoed(&r).is_none());
        assert!(dateline(&r).is_none());
        assert!(creditline(&r).is_none());
        assert!(usageterms(&r).is_none());
        assert!(language(&r).is_none());
        assert!(infobox(&r).is_none());
    }

    #[test]
    fn test_byline_and_copyright_never_null() {
        let r = record(json!({"byline": null, "copyrightnotice": null}));
        assert_eq!(byline(&r), "");
        assert_eq!(copyright_notice(&r), "");

        let r = record(json!({"byline": "Von Max Muster", "copyrightnotice": "© dpa"}));
        assert_eq!(byline(&r), "Von Max Muster");
        assert_eq!(copyright_notice(&r), "© dpa");
    }

    #[test]
    fn test_urgency_values() {
        assert_eq!(urgency(&record(json!({"urgency": 1}))), 1);
        assert_eq!(urgency(&record(json!({"urgency": "2"}))), 2);
        assert_eq!(urgency(&record(json!({"urgency": "eilig"}))), 3);
        assert_eq!(urgency(&record(json!({"urgency": null}))), 3);
    }

    #[test]
    fn test_version_passes_through() {
        assert_eq!(version(&record(json!({"version": 4}))), json!(4));
        assert_eq!(version(&record(json!({"version": "x"}))), json!("x"));
    }

    #[test]
    fn test_linkbox_absent_or_empty() {
        assert!(linkbox(&Record::default()).unwrap().is_empty());
        assert!(linkbox(&record(json!({"linkbox_html": ""}))).unwrap().is_empty());
        assert!(linkbox(&record(json!({"linkbox_html": null}))).unwrap().is_empty());
    }

    #[test]
    fn test_linkbox_anchors_in_order() {
        let r = record(json!({
            "linkbox_html": "<section class=\"linkbox\"><h3>Links</h3><ul><li><a href=\"https://a.example\">A</a></li><li><a>B</a></li></ul></section>"
        }));

        let links = linkbox(&r).unwrap();
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].url.as_deref(), Some("https://a.example"));
        assert_eq!(links[0].title.as_deref(), Some("A"));
        assert_eq!(links[0].rel.as_deref(), Some(SEE_ALSO_REL));
        assert_eq!(links[0].rank, Rank::new(1));
        assert_eq!(links[1].url.as_deref(), Some(""));
        assert_eq!(links[1].rank, Rank::new(2));
    }

    #[test]
    fn test_linkbox_malformed() {
        let r = record(json!({"linkbox_html": "<section><ul></section>"}));
        let err = linkbox(&r).unwrap_err();
        assert_eq!(err.field(), Some("linkbox_html"));
        assert!(matches!(err, ConvertError::MarkupParse { .. }));
    }
}
