//! Content renderers: sluglines, article body, infobox, remote content

use std::sync::LazyLock;

use newsmlg2_domain::{Category, Link};
use regex::Regex;
use tracing::{debug, warn};

use crate::error::Result;
use crate::fields::{RemoteContent, Slugline};
use crate::fragment::{parse_fragment, Element, Node};

/// `<located> (<credit>) - `, with any of the common dash variants
static DATELINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<located>.+)(?P<credit>\(.+\))\s*[-\x{2010}\x{2011}\x{2012}\x{2013}\x{2014}\x{2015}\x{FE58}\x{FE63}\x{FF0D}]\s*",
    )
    .expect("dateline pattern is valid")
});

const DATELINE_SEPARATOR: &str = " - ";

fn slugline_kind(category_type: &str) -> &str {
    match category_type {
        "dnltype:dpasubject" => "subject",
        "dnltype:geosubject" => "geo",
        "dnltype:keyword" => "keyword",
        other => other,
    }
}

/// Catalog of subject, geo and keyword tags
///
/// Entries without a type or a name are dropped.
pub fn render_slugline(categories: &[Category]) -> Vec<Slugline> {
    categories
        .iter()
        .filter_map(|category| {
            let kind = category.category_type.as_deref()?;
            let name = category.name.clone()?;
            Some(Slugline {
                kind: slugline_kind(kind).to_string(),
                name,
                qcode: category.qcode.clone(),
            })
        })
        .collect()
}

/// Split a dateline into its located and credit parts
///
/// # Examples
///
/// ```
/// use newsmlg2_convert::render::parse_dateline;
///
/// let (located, credit) = parse_dateline("Hamburg (dpa) - ").unwrap();
/// assert_eq!(located, "Hamburg ");
/// assert_eq!(credit, "(dpa)");
/// ```
pub fn parse_dateline(dateline: &str) -> Option<(String, String)> {
    let captures = DATELINE_RE.captures(dateline)?;
    Some((captures["located"].to_string(), captures["credit"].to_string()))
}

fn is_dateline(element: &Element) -> bool {
    element.name == "span" && element.attribute("class") == Some("dateline")
}

fn dateline_element(located: String, credit: String) -> Element {
    Element::new("span")
        .with_attribute("class", "dateline")
        .with_text(located)
        .with_child(Element::new("span").with_attribute("class", "credit").with_text(credit))
        .with_text(DATELINE_SEPARATOR)
}

/// Render the article body into its top-level blocks
///
/// When a dateline is given and the article has no dateline span yet, one
/// is inserted as the first child of the first block. Returns `None` when
/// there is no article.
pub fn render_article(article: Option<&str>, dateline: Option<&str>) -> Result<Option<Vec<String>>> {
    let Some(article) = article else {
        return Ok(None);
    };
    let mut section = parse_fragment("article_html", article)?;

    if let Some(dateline) = dateline {
        if !section.has_descendant(&is_dateline) {
            insert_dateline(&mut section, dateline);
        }
    }

    let blocks = section
        .child_elements()
        .map(Element::to_markup)
        .collect::<Result<Vec<_>>>()?;
    debug!("Rendered {} article blocks", blocks.len());
    Ok(Some(blocks))
}

fn insert_dateline(section: &mut Element, dateline: &str) {
    let Some(first) = section.first_child_element_mut() else {
        return;
    };
    let Some((located, credit)) = parse_dateline(dateline) else {
        warn!("Dateline {:?} does not match the expected pattern", dateline);
        return;
    };
    first.children.insert(0, Node::Element(dateline_element(located, credit)));
}

/// Wrap the infobox content in `<div class="INFOBOX">`
///
/// Text before the first element of the infobox root is dropped.
pub fn render_infobox(infobox: Option<&str>) -> Result<Option<String>> {
    let Some(infobox) = infobox else {
        return Ok(None);
    };
    let section = parse_fragment("infobox_html", infobox)?;

    let mut div = Element::new("div").with_attribute("class", "INFOBOX");
    div.children = section
        .children
        .into_iter()
        .skip_while(|node| matches!(node, Node::Text(_)))
        .collect();
    div.to_markup().map(Some)
}

/// Remote content references, one per rendition link
pub fn render_remote_content(links: &[Link]) -> Vec<RemoteContent> {
    links
        .iter()
        .map(|link| RemoteContent {
            href: link.url.clone(),
            contenttype: link.content_type.clone(),
            width: link.width.clone(),
            height: link.height.clone(),
            samplerate: link.samplerate.clone(),
            bitrate: link.bitrate.clone(),
        })
        .collect()
}
