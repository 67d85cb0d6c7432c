//! Item-meta renderers

use newsmlg2_domain::{sort_by_rank, Category, EdNote, ItemKind, Link};

use crate::error::Result;
use crate::fields::{AssociationLink, Concept, EdNoteEntry, ItemClass, Notepad};
use crate::fragment::check_well_formed;

/// Constraint attached to notes that must not be published
pub const NONPUBLIC_CONSTRAINT: &str = "dpapconstraint:nonpublic";

/// Item class from the derived item kind
pub fn render_item_class(kind: &ItemKind) -> ItemClass {
    ItemClass { qcode: kind.qcode() }
}

/// Publication status
pub fn render_pubstatus(qcode: Option<String>, name: Option<String>) -> Concept {
    Concept { qcode, name }
}

/// Services
pub fn render_services(services: &[Category]) -> Vec<Concept> {
    services
        .iter()
        .map(|s| Concept {
            qcode: s.qcode.clone(),
            name: s.name.clone(),
        })
        .collect()
}

/// Editorial notes with text; non-public ones carry a constraint
pub fn render_ednotes(notes: &[EdNote]) -> Vec<EdNoteEntry> {
    notes
        .iter()
        .filter_map(|note| {
            let text = note.ednote.clone().filter(|t| !t.is_empty())?;
            Some(EdNoteEntry {
                role: note.role.clone(),
                text,
                constraint: (!note.is_public()).then(|| NONPUBLIC_CONSTRAINT.to_string()),
            })
        })
        .collect()
}

/// Non-empty signal qcodes, or `None` when nothing is left
pub fn render_signal(signals: &[Option<String>]) -> Option<Vec<String>> {
    let signals: Vec<String> = signals
        .iter()
        .flatten()
        .filter(|s| !s.is_empty())
        .cloned()
        .collect();
    if signals.is_empty() {
        None
    } else {
        Some(signals)
    }
}

fn link_item_class(assoc_type: Option<&str>) -> Option<String> {
    assoc_type.map(|t| ItemKind::from_association_type(Some(t)).qcode())
}

/// Item-meta links of a text item
///
/// Non-text items get no links. Otherwise the links are ordered by rank
/// and renumbered from 1.
pub fn render_links(is_text_message: bool, mut links: Vec<Link>) -> Vec<AssociationLink> {
    if !is_text_message {
        return Vec::new();
    }
    sort_by_rank(&mut links, |link| link.rank);

    links
        .into_iter()
        .enumerate()
        .map(|(idx, link)| AssociationLink {
            item_class: link_item_class(link.assoc_type.as_deref()),
            urn: link.urn,
            rank: (idx + 1).to_string(),
            href: link.url,
            rel: link.rel,
            version: link.version,
            title: link.title,
        })
        .collect()
}

/// Notepad bundle; `None` unless a public or non-public section exists
///
/// Every present section must be well-formed markup.
pub fn render_notepad(
    header: Option<String>,
    public: Option<String>,
    non_public: Option<String>,
    closingline: String,
) -> Result<Option<Notepad>> {
    if public.is_none() && non_public.is_none() {
        return Ok(None);
    }

    for (field, markup) in [
        ("notepad.header_html", &header),
        ("notepad.public_html", &public),
        ("notepad.nonpublic_html", &non_public),
    ] {
        if let Some(markup) = markup {
            check_well_formed(field, markup)?;
        }
    }

    Ok(Some(Notepad {
        header,
        public,
        non_public,
        closingline,
    }))
}
