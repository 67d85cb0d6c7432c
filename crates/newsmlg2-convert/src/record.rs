//! Record accessor over a parsed digitalwires document

use newsmlg2_domain::{Category, CategoryAttr, EdNote, EdNoteAttr, ItemKind, Rank};
use serde_json::{Map, Value};

use crate::ranked::{self, Filter};

/// A digitalwires record: one parsed JSON mapping
///
/// Every lookup is null-safe. An absent key and a key holding `null` are
/// the same to [`Record::get`]; callers supply their own defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Map<String, Value>,
}

impl Record {
    /// Wrap an already parsed mapping
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Wrap a JSON value, which must be a mapping
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self::new(fields)),
            _ => None,
        }
    }

    /// Borrow the underlying mapping
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Look up a field, treating `null` as absent
    pub fn get(&self, key: &str) -> Option<&Value> {
        non_null(self.fields.get(key))
    }

    /// Look up a scalar field as text
    pub fn get_str(&self, key: &str) -> Option<String> {
        self.get(key).and_then(value_to_string)
    }

    /// Look up a scalar field as text, falling back to `default`
    pub fn get_str_or(&self, key: &str, default: &str) -> String {
        self.get_str(key).unwrap_or_else(|| default.to_string())
    }

    /// Look up a sequence field; anything but an array reads as empty
    pub fn get_array(&self, key: &str) -> &[Value] {
        match self.get(key) {
            Some(Value::Array(items)) => items,
            _ => &[],
        }
    }

    /// Look up a nested mapping
    pub fn get_object(&self, key: &str) -> Option<&Map<String, Value>> {
        self.get(key).and_then(Value::as_object)
    }

    /// Derive the narrative kind of the item
    ///
    /// A present article makes it a text story. Otherwise a single
    /// association decides the kind, and anything else is a text story.
    pub fn item_kind(&self) -> ItemKind {
        if self.get("article_html").is_some() {
            return ItemKind::Text;
        }
        match self.get_array("associations") {
            [only] => {
                let assoc_type = only.get("type").and_then(value_to_string);
                ItemKind::from_association_type(assoc_type.as_deref())
            }
            _ => ItemKind::Text,
        }
    }

    /// Whether the item is a text story
    pub fn is_text_message(&self) -> bool {
        self.item_kind().is_text()
    }

    /// Rank-sorted, filtered attribute projection over a collection field
    ///
    /// See [`ranked::sorted_filtered_projection`].
    pub fn sorted_filtered_projection<'a>(
        &'a self,
        attrs: &[&str],
        collection_field: &str,
        filter: Option<Filter<'_>>,
    ) -> Vec<Vec<Option<&'a Value>>> {
        ranked::sorted_filtered_projection(self.get_array(collection_field), collection_field, filter, attrs)
    }

    /// Categories with the given type tag, projected to `attrs`
    ///
    /// Passing `None` as the type selects every category.
    pub fn category_items(&self, category_type: Option<&str>, attrs: &[CategoryAttr]) -> Vec<Category> {
        let keys: Vec<&str> = attrs.iter().map(CategoryAttr::source_key).collect();
        let filter = category_type.map(|value| Filter::new("type", value));

        self.sorted_filtered_projection(&keys, "categories", filter)
            .into_iter()
            .map(|row| {
                let mut category = Category::default();
                for (attr, value) in attrs.iter().zip(row) {
                    match attr {
                        CategoryAttr::Type => category.category_type = value.and_then(value_to_string),
                        CategoryAttr::Role => category.role = value.and_then(value_to_string),
                        CategoryAttr::Name => category.name = value.and_then(value_to_string),
                        CategoryAttr::Qcode => category.qcode = value.and_then(value_to_string),
                        CategoryAttr::Rank => category.rank = value.and_then(value_to_rank),
                    }
                }
                category
            })
            .collect()
    }

    /// Editorial notes with the given role, projected to `attrs`
    pub fn notepad_items(&self, role: Option<&str>, attrs: &[EdNoteAttr]) -> Vec<EdNote> {
        let keys: Vec<&str> = attrs.iter().map(EdNoteAttr::source_key).collect();
        let filter = role.map(|value| Filter::new("role", value));

        self.sorted_filtered_projection(&keys, "ednotes", filter)
            .into_iter()
            .map(|row| {
                let mut note = EdNote::default();
                for (attr, value) in attrs.iter().zip(row) {
                    match attr {
                        EdNoteAttr::Role => note.role = value.and_then(value_to_string),
                        EdNoteAttr::Text => note.ednote = value.and_then(value_to_string),
                        EdNoteAttr::IsPublishable => note.is_publishable = value.and_then(Value::as_bool),
                    }
                }
                note
            })
            .collect()
    }
}

impl From<Map<String, Value>> for Record {
    fn from(fields: Map<String, Value>) -> Self {
        Self::new(fields)
    }
}

pub(crate) fn non_null(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

/// Render a scalar as text
///
/// Strings pass through; numbers and booleans use their JSON text.
/// `null`, arrays and objects have no textual form.
pub fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Coerce a value to a rank
///
/// Positive integers (as numbers, integral floats or numeric strings)
/// are ranks; everything else is unranked.
pub fn value_to_rank(value: &Value) -> Option<Rank> {
    match value {
        Value::Number(n) => {
            if let Some(int) = n.as_u64() {
                u32::try_from(int).ok().and_then(Rank::new)
            } else {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0 && *f >= 1.0 && *f <= f64::from(u32::MAX))
                    .and_then(|f| Rank::new(f as u32))
            }
        }
        Value::String(s) => Rank::parse(s),
        _ => None,
    }
}

/// Coerce a value to an integer
///
/// Accepts integers, integral floats and numeric strings with
/// surrounding whitespace. Booleans are not integers.
pub fn value_to_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| is_integral_i64(*f)).map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Integral and inside the `i64` range; `i64::MAX as f64` rounds up to 2^63.
fn is_integral_i64(f: f64) -> bool {
    f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        Record::from_value(value).unwrap()
    }

    #[test]
    fn test_get_treats_null_as_absent() {
        let r = record(json!({"headline": null, "kicker": "Politik"}));
        assert!(r.get("headline").is_none());
        assert!(r.get("missing").is_none());
        assert_eq!(r.get_str("kicker").as_deref(), Some("Politik"));
        assert_eq!(r.get_str_or("headline", "-"), "-");
    }

    #[test]
    fn test_from_value_rejects_non_mapping() {
        assert!(Record::from_value(json!([1, 2])).is_none());
        assert!(Record::from_value(json!("text")).is_none());
    }

    #[test]
    fn test_article_makes_text_regardless_of_associations() {
        let r = record(json!({
            "article_html": "<section/>",
            "associations": [{"type": "image"}]
        }));
        assert_eq!(r.item_kind(), ItemKind::Text);
        assert!(r.is_text_message());
    }

    #[test]
    fn test_single_image_association_is_picture() {
        let r = record(json!({"associations": [{"type": "image"}]}));
        assert_eq!(r.item_kind(), ItemKind::Picture);
        assert!(!r.is_text_message());
    }

    #[test]
    fn test_single_association_type_passes_through() {
        let r = record(json!({"associations": [{"type": "audio"}]}));
        assert_eq!(r.item_kind().qcode(), "ninat:audio");
    }

    #[test]
    fn test_zero_or_many_associations_is_text() {
        assert!(record(json!({})).is_text_message());
        assert!(record(json!({"associations": []})).is_text_message());
        assert!(record(json!({"associations": null})).is_text_message());
        assert!(record(json!({"associations": [{"type": "image"}, {"type": "video"}]})).is_text_message());
    }

    #[test]
    fn test_null_article_does_not_count() {
        let r = record(json!({"article_html": null, "associations": [{"type": "video"}]}));
        assert_eq!(r.item_kind(), ItemKind::Video);
    }

    #[test]
    fn test_value_to_string_scalars() {
        assert_eq!(value_to_string(&json!("a")).as_deref(), Some("a"));
        assert_eq!(value_to_string(&json!(640)).as_deref(), Some("640"));
        assert_eq!(value_to_string(&json!(true)).as_deref(), Some("true"));
        assert!(value_to_string(&json!([1])).is_none());
        assert!(value_to_string(&json!({"a": 1})).is_none());
    }

    #[test]
    fn test_value_to_rank() {
        assert_eq!(value_to_rank(&json!(2)), Rank::new(2));
        assert_eq!(value_to_rank(&json!(3.0)), Rank::new(3));
        assert_eq!(value_to_rank(&json!("4")), Rank::new(4));
        assert!(value_to_rank(&json!(0)).is_none());
        assert!(value_to_rank(&json!(-1)).is_none());
        assert!(value_to_rank(&json!(1.5)).is_none());
        assert!(value_to_rank(&json!(true)).is_none());
    }

    #[test]
    fn test_value_to_int() {
        assert_eq!(value_to_int(&json!(5)), Some(5));
        assert_eq!(value_to_int(&json!(5.0)), Some(5));
        assert_eq!(value_to_int(&json!(" 7 ")), Some(7));
        assert!(value_to_int(&json!(5.5)).is_none());
        assert!(value_to_int(&json!("five")).is_none());
        assert!(value_to_int(&json!(false)).is_none());
        assert_eq!(value_to_int(&json!(-3.0)), Some(-3));
        assert!(value_to_int(&json!(1e20)).is_none());
        assert!(value_to_int(&json!(-1e20)).is_none());
    }

    #[test]
    fn test_category_items_filter_and_rename() {
        let r = record(json!({
            "categories": [
                {"type": "dnltype:desk", "name": "Politik", "qcode": "dpacat:pl", "rank": 2},
                {"type": "dnltype:dpasubject", "name": "Wahlen", "qcode": "dpasubject:1", "rank": 1},
                {"type": "dnltype:desk", "name": "Wirtschaft", "qcode": "dpacat:wi", "rank": 1}
            ]
        }));

        let desks = r.category_items(Some("dnltype:desk"), &CategoryAttr::DEFAULT);
        let names: Vec<_> = desks.iter().map(|c| c.name.as_deref().unwrap()).collect();
        assert_eq!(names, vec!["Wirtschaft", "Politik"]);
        assert_eq!(desks[0].category_type.as_deref(), Some("dnltype:desk"));
        assert_eq!(desks[0].rank, Rank::new(1));
    }

    #[test]
    fn test_category_items_unrequested_attrs_stay_empty() {
        let r = record(json!({
            "categories": [{"type": "dnltype:scope", "name": "Alle", "qcode": "scope:all", "rank": 1}]
        }));

        let scope = r.category_items(Some("dnltype:scope"), &[CategoryAttr::Name, CategoryAttr::Qcode]);
        assert_eq!(scope.len(), 1);
        assert!(scope[0].category_type.is_none());
        assert!(scope[0].rank.is_none());
        assert_eq!(scope[0].qcode.as_deref(), Some("scope:all"));
    }

    #[test]
    fn test_notepad_items_by_role() {
        let r = record(json!({
            "ednotes": [
                {"role": "dpaednoterole:closingline", "ednote": "Ende", "is_publishable": true},
                {"role": "dpaednoterole:editorialnote", "ednote": "Intern"}
            ]
        }));

        let notes = r.notepad_items(Some("dpaednoterole:closingline"), &[EdNoteAttr::Text]);
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].ednote.as_deref(), Some("Ende"));
        assert!(notes[0].role.is_none());
    }
}
