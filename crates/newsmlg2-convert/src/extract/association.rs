use newsmlg2_domain::{sort_by_rank, Link, SEE_ALSO_REL};
use serde_json::Value;
use tracing::warn;

use crate::record::{non_null, value_to_rank, value_to_string, Record};

/// One link per rendition of every association, sorted by rank
///
/// Associations without a URN are skipped. Rendition dimensions and
/// audio properties are copied only when the rendition carries them.
pub fn associations(record: &Record) -> Vec<Link> {
    let mut links = Vec::new();

    for (idx, assoc) in record.get_array("associations").iter().enumerate() {
        let Some(assoc) = assoc.as_object() else {
            warn!("Skipping non-mapping association {}", idx);
            continue;
        };
        let field = |key: &str| non_null(assoc.get(key)).and_then(value_to_string);

        let Some(urn) = field("urn") else {
            warn!("Skipping association {} without urn", idx);
            continue;
        };
        let rank = non_null(assoc.get("rank")).and_then(value_to_rank);

        let renditions: &[Value] = match assoc.get("renditions") {
            Some(Value::Array(renditions)) => renditions.as_slice(),
            _ => &[],
        };
        for rendition in renditions {
            let attr = |key: &str| rendition.get(key).and_then(value_to_string);
            links.push(Link {
                urn: Some(urn.clone()),
                version: field("version"),
                title: field("headline"),
                assoc_type: field("type"),
                rel: Some(SEE_ALSO_REL.to_string()),
                url: attr("url"),
                content_type: attr("mimetype"),
                width: attr("width"),
                height: attr("height"),
                bitrate: attr("audiobitrate"),
                samplerate: attr("audiosamplerate"),
                rank,
            });
        }
    }

    sort_by_rank(&mut links, |link| link.rank);
    links
}

#[cfg(test)]
mod tests {
    use super::*;
    use newsmlg2_domain::Rank;
    use serde_json::json;

    #[test]
    fn test_renditions_sorted_by_rank() {
        let r = Record::from_value(json!({
            "associations": [
                {
                    "urn": "urn:newsml:dpa.com:20090101:img-2", "rank": 2, "type": "image", "version": 1,
                    "headline": "Zweites Bild",
                    "renditions": [{"url": "https://img.example/2.jpg", "mimetype": "image/jpeg", "width": 800, "height": 600}]
                },
                {
                    "urn": "urn:newsml:dpa.com:20090101:img-1", "rank": 1, "type": "image", "version": 3,
                    "headline": "Erstes Bild",
                    "renditions": [{"url": "https://img.example/1.jpg", "mimetype": "image/jpeg"}]
                }
            ]
        }))
        .unwrap();

        let links = associations(&r);
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].title.as_deref(), Some("Erstes Bild"));
        assert_eq!(links[0].rank, Rank::new(1));
        assert_eq!(links[0].version.as_deref(), Some("3"));
        assert!(links[0].width.is_none());
        assert_eq!(links[1].width.as_deref(), Some("800"));
        assert_eq!(links[1].height.as_deref(), Some("600"));
        assert_eq!(links[1].rel.as_deref(), Some("irel:seeAlso"));
    }

    #[test]
    fn test_one_link_per_rendition() {
        let r = Record::from_value(json!({
            "associations": [{
                "urn": "urn:audio", "rank": 1, "type": "audio",
                "renditions": [
                    {"url": "a.mp3", "mimetype": "audio/mpeg", "audiobitrate": 128000, "audiosamplerate": 44100},
                    {"url": "a.ogg", "mimetype": "audio/ogg"}
                ]
            }]
        }))
        .unwrap();

        let links = associations(&r);
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].bitrate.as_deref(), Some("128000"));
        assert_eq!(links[0].samplerate.as_deref(), Some("44100"));
        assert_eq!(links[1].content_type.as_deref(), Some("audio/ogg"));
        assert!(links[1].bitrate.is_none());
    }

    #[test]
    fn test_skips_association_without_urn() {
        let r = Record::from_value(json!({
            "associations": [
                {"urn": null, "rank": 1, "renditions": [{"url": "x"}]},
                {"rank": 2, "renditions": [{"url": "y"}]}
            ]
        }))
        .unwrap();

        assert!(associations(&r).is_empty());
    }
}
