//! Content-meta renderers

use newsmlg2_domain::{Category, Description};

use crate::fields::{Concept, DescriptionEntry, Keyword, Party, Subject};

/// Concatenate the present timestamp parts; `None` when none is present
pub fn render_content_created(parts: &[Option<String>]) -> Option<String> {
    let present: Vec<&str> = parts.iter().flatten().map(String::as_str).collect();
    if present.is_empty() {
        None
    } else {
        Some(present.concat())
    }
}

fn concept(category: &Category) -> Concept {
    Concept {
        qcode: category.qcode.clone(),
        name: category.name.clone(),
    }
}

/// Locations, unfiltered
pub fn render_located(located: &[Category]) -> Vec<Concept> {
    located.iter().map(concept).collect()
}

fn render_parties(parties: &[Category]) -> Vec<Party> {
    parties
        .iter()
        .filter(|p| p.name.is_some() || p.qcode.is_some())
        .map(|p| Party {
            name: p.name.clone(),
            qcode: p.qcode.clone(),
            role: p.role.clone(),
        })
        .collect()
}

/// Information sources with a name or a qcode
pub fn render_infosource(infosources: &[Category]) -> Vec<Party> {
    render_parties(infosources)
}

/// Creators with a name or a qcode
pub fn render_creator(creators: &[Category]) -> Vec<Party> {
    render_parties(creators)
}

/// Contributors with a name or a qcode
pub fn render_contributor(contributors: &[Category]) -> Vec<Party> {
    render_parties(contributors)
}

/// Genre, if any
pub fn render_genre(genre: Option<&Category>) -> Option<Concept> {
    genre.map(concept)
}

fn subject_type(category_type: &str) -> &str {
    match category_type {
        "dnltype:dpasubject" => "dpatype:dpasubject",
        "dnltype:geosubject" => "cpnat:geoArea",
        "dnltype:desk" => "dpatype:category",
        other => other,
    }
}

/// Subjects with their type mapped to the NewsML-G2 vocabulary
///
/// Entries need a type and at least one of name or qcode.
pub fn render_subjects(subjects: &[Category]) -> Vec<Subject> {
    subjects
        .iter()
        .filter(|s| s.name.is_some() || s.qcode.is_some())
        .filter_map(|s| {
            let category_type = s.category_type.as_deref()?;
            Some(Subject {
                subject_type: Some(subject_type(category_type).to_string()),
                name: s.name.clone(),
                qcode: s.qcode.clone(),
                rank: s.rank.map(|r| r.to_string()),
            })
        })
        .collect()
}

/// Audiences; both name and qcode are required
pub fn render_audience(scopes: &[Category]) -> Vec<Concept> {
    scopes
        .iter()
        .filter(|s| s.name.is_some() && s.qcode.is_some())
        .map(concept)
        .collect()
}

/// Keywords with their rank as text
pub fn render_keywords(keywords: &[Category]) -> Vec<Keyword> {
    keywords
        .iter()
        .map(|k| Keyword {
            name: k.name.clone(),
            rank: k.rank.map(|r| r.to_string()),
        })
        .collect()
}

/// Descriptions
pub fn render_descriptions(descriptions: &[Description]) -> Vec<DescriptionEntry> {
    descriptions
        .iter()
        .map(|d| DescriptionEntry {
            role: d.role.clone(),
            value: d.description.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use newsmlg2_domain::Rank;
    use test_case::test_case;

    #[test_case("dnltype:dpasubject", "dpatype:dpasubject" ; "dpa subject")]
    #[test_case("dnltype:geosubject", "cpnat:geoArea" ; "geo subject")]
    #[test_case("dnltype:desk", "dpatype:category" ; "desk")]
    #[test_case("dnltype:keyword", "dnltype:keyword" ; "other types pass through")]
    fn test_subject_type_map(source: &str, expected: &str) {
        assert_eq!(subject_type(source), expected);
    }

    #[test]
    fn test_subjects_desk_without_rank() {
        let subjects = vec![
            Category::default().with_type("dnltype:desk").with_name("Politik").with_qcode("dpacat:pl"),
            Category::default()
                .with_type("dnltype:dpasubject")
                .with_name("Wahlen")
                .with_qcode("dpasubject:1")
                .with_rank(Rank::new(1).unwrap()),
        ];

        let rendered = render_subjects(&subjects);
        assert_eq!(rendered[0].subject_type.as_deref(), Some("dpatype:category"));
        assert!(rendered[0].rank.is_none());
        assert_eq!(rendered[1].subject_type.as_deref(), Some("dpatype:dpasubject"));
        assert_eq!(rendered[1].rank.as_deref(), Some("1"));
    }

    #[test]
    fn test_subjects_dropped_without_type_or_codes() {
        let subjects = vec![
            Category::default().with_name("no type"),
            Category::default().with_type("dnltype:geosubject"),
            Category::default().with_type("dnltype:geosubject").with_qcode("dpageo:hh"),
        ];

        let rendered = render_subjects(&subjects);
        assert_eq!(rendered.len(), 1);
        assert_eq!(rendered[0].subject_type.as_deref(), Some("cpnat:geoArea"));
        assert!(rendered[0].name.is_none());
    }

    #[test]
    fn test_parties_need_name_or_qcode() {
        let creators = vec![
            Category::default().with_name("Max Muster").with_role("dpaauthorrole:author"),
            Category::default().with_role("dpaauthorrole:author"),
            Category::default().with_qcode("dpacreator:2"),
        ];

        let rendered = render_creator(&creators);
        assert_eq!(rendered.len(), 2);
        assert_eq!(rendered[0].role.as_deref(), Some("dpaauthorrole:author"));
        assert_eq!(rendered[1].qcode.as_deref(), Some("dpacreator:2"));
        assert_eq!(render_infosource(&creators), rendered);
        assert_eq!(render_contributor(&creators), rendered);
    }

    #[test]
    fn test_audience_needs_both() {
        let scopes = vec![
            Category::default().with_name("Alle").with_qcode("scope:all"),
            Category::default().with_name("Nur Name"),
        ];
        assert_eq!(render_audience(&scopes).len(), 1);
    }

    #[test]
    fn test_content_created() {
        assert_eq!(render_content_created(&[Some("2024-05-01T10:00:00Z".into())]).as_deref(), Some("2024-05-01T10:00:00Z"));
        assert_eq!(render_content_created(&[Some("a".into()), None, Some("b".into())]).as_deref(), Some("ab"));
        assert!(render_content_created(&[None]).is_none());
        assert_eq!(render_content_created(&[Some(String::new())]).as_deref(), Some(""));
    }

    #[test]
    fn test_keywords_and_genre() {
        let keywords = vec![
            Category::default().with_name("Hafen").with_rank(Rank::new(2).unwrap()),
            Category::default().with_name("Elbe"),
        ];
        let rendered = render_keywords(&keywords);
        assert_eq!(rendered[0].rank.as_deref(), Some("2"));
        assert!(rendered[1].rank.is_none());

        assert!(render_genre(None).is_none());
        let genre = Category::default().with_name("Bericht").with_qcode("dpatextgenre:1");
        assert_eq!(render_genre(Some(&genre)).unwrap().qcode.as_deref(), Some("dpatextgenre:1"));
    }

    #[test]
    fn test_located_and_descriptions() {
        let located = vec![Category::default().with_name("Hamburg")];
        assert_eq!(render_located(&located)[0].name.as_deref(), Some("Hamburg"));

        let descriptions = vec![Description {
            role: Some("dpadescrole:caption".to_string()),
            description: Some("Bildunterschrift".to_string()),
        }];
        let rendered = render_descriptions(&descriptions);
        assert_eq!(rendered[0].value.as_deref(), Some("Bildunterschrift"));
    }
}
