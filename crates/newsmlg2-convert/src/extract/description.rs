use newsmlg2_domain::Description;

use crate::record::{value_to_string, Record};

/// Role-tagged descriptions, sorted by rank
pub fn descriptions(record: &Record) -> Vec<Description> {
    record
        .sorted_filtered_projection(&["role", "description"], "descriptions", None)
        .into_iter()
        .map(|row| Description {
            role: row[0].and_then(value_to_string),
            description: row[1].and_then(value_to_string),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_descriptions() {
        let r = Record::from_value(json!({
            "descriptions": [
                {"role": "dpadescrole:caption", "description": "Blick auf das Rathaus", "rank": 2},
                {"role": "dpadescrole:alttext", "description": "Rathaus", "rank": 1},
                {"role": "dpadescrole:empty"}
            ]
        }))
        .unwrap();

        let descriptions = descriptions(&r);
        assert_eq!(descriptions.len(), 3);
        assert_eq!(descriptions[0].role.as_deref(), Some("dpadescrole:alttext"));
        assert_eq!(descriptions[1].description.as_deref(), Some("Blick auf das Rathaus"));
        assert!(descriptions[2].description.is_none());
    }
}
