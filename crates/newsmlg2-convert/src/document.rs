//! NewsML-G2 document writer
//!
//! Lays out a [`NewsItemFields`] mapping as a `newsMessage` holding one
//! `newsItem`. Plain strings are escaped; rendered markup (article
//! blocks, infobox, notepad sections) is embedded as-is, since assembly
//! already parsed every one of them as well-formed.

use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use tracing::debug;

use crate::config::DocumentConfig;
use crate::error::{ConvertError, Result};
use crate::fields::{AssociationLink, Concept, NewsItemFields, Notepad, Party, PoiEntry};

/// Namespace of every NewsML-G2 element
pub const NEWSML_G2_NAMESPACE: &str = "http://iptc.org/std/nar/2006-10-01/";

const XHTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";
const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";
const POI_SUBJECT_TYPE: &str = "cpnat:poi";

type Attrs<'a> = [(&'a str, Option<&'a str>)];

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Thin layer over the `quick-xml` writer; attributes set to `None` are skipped
struct XmlOut {
    writer: Writer<Vec<u8>>,
}

impl XmlOut {
    fn new(indent: usize) -> Self {
        let mut buffer = Vec::new();
        buffer.extend_from_slice(XML_DECLARATION.as_bytes());
        let writer = if indent == 0 {
            Writer::new(buffer)
        } else {
            Writer::new_with_indent(buffer, b' ', indent)
        };
        Self { writer }
    }

    fn element<'a>(name: &'a str, attrs: &Attrs<'a>) -> BytesStart<'a> {
        let mut start = BytesStart::new(name);
        for (key, value) in attrs {
            if let Some(value) = value {
                start.push_attribute((*key, *value));
            }
        }
        start
    }

    fn start(&mut self, name: &str, attrs: &Attrs<'_>) -> Result<()> {
        self.writer.write_event(Event::Start(Self::element(name, attrs)))?;
        Ok(())
    }

    fn end(&mut self, name: &str) -> Result<()> {
        self.writer.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }

    fn empty(&mut self, name: &str, attrs: &Attrs<'_>) -> Result<()> {
        self.writer.write_event(Event::Empty(Self::element(name, attrs)))?;
        Ok(())
    }

    fn text(&mut self, text: &str) -> Result<()> {
        self.writer
            .write_event(Event::Text(BytesText::from_escaped(partial_escape(text))))?;
        Ok(())
    }

    fn raw(&mut self, markup: &str) -> Result<()> {
        self.writer.write_event(Event::Text(BytesText::from_escaped(markup)))?;
        Ok(())
    }

    fn text_element(&mut self, name: &str, attrs: &Attrs<'_>, text: &str) -> Result<()> {
        self.start(name, attrs)?;
        self.text(text)?;
        self.end(name)
    }

    /// Write `<name attrs>text</name>` unless the text is absent or empty
    fn opt_text_element(&mut self, name: &str, attrs: &Attrs<'_>, text: Option<&str>) -> Result<()> {
        match non_empty(text) {
            Some(text) => self.text_element(name, attrs, text),
            None => Ok(()),
        }
    }

    /// Write a concept element with an optional `<name>` child
    fn concept(&mut self, name: &str, attrs: &Attrs<'_>, display_name: Option<&str>) -> Result<()> {
        match non_empty(display_name) {
            Some(display_name) => {
                self.start(name, attrs)?;
                self.text_element("name", &[], display_name)?;
                self.end(name)
            }
            None => self.empty(name, attrs),
        }
    }

    fn finish(self) -> Result<String> {
        String::from_utf8(self.writer.into_inner()).map_err(|e| ConvertError::Document(e.to_string()))
    }
}

/// Writes NewsML-G2 documents
#[derive(Debug, Clone, Default)]
pub struct G2DocumentWriter {
    config: DocumentConfig,
}

impl G2DocumentWriter {
    /// Create a writer with the given layout options
    pub fn new(config: DocumentConfig) -> Self {
        Self { config }
    }

    /// Write one complete document
    pub fn write(&self, fields: &NewsItemFields) -> Result<String> {
        let mut out = XmlOut::new(self.config.indent);

        out.start("newsMessage", &[("xmlns", Some(NEWSML_G2_NAMESPACE))])?;
        out.start("header", &[])?;
        out.opt_text_element("sent", &[], Some(fields.version_created.as_str()))?;
        out.end("header")?;

        out.start("itemSet", &[])?;
        self.write_news_item(&mut out, fields)?;
        out.end("itemSet")?;
        out.end("newsMessage")?;

        let document = out.finish()?;
        debug!("Wrote NewsML-G2 document of {} bytes", document.len());
        Ok(document)
    }

    fn write_news_item(&self, out: &mut XmlOut, fields: &NewsItemFields) -> Result<()> {
        let version = fields.version.to_string();
        out.start(
            "newsItem",
            &[
                ("guid", Some(fields.urn.as_str())),
                ("version", Some(version.as_str())),
                ("standard", Some("NewsML-G2")),
                ("standardversion", Some(self.config.standard_version.as_str())),
                ("conformance", Some("power")),
                ("xml:lang", non_empty(fields.language.as_deref())),
            ],
        )?;
        out.empty("catalogRef", &[("href", Some(self.config.catalog_href.as_str()))])?;

        write_rights_info(out, fields)?;
        write_item_meta(out, fields)?;
        write_content_meta(out, fields)?;
        for poi in &fields.pois {
            write_poi_assert(out, poi)?;
        }
        write_content_set(out, fields)?;

        out.end("newsItem")
    }
}

fn write_rights_info(out: &mut XmlOut, fields: &NewsItemFields) -> Result<()> {
    out.start("rightsInfo", &[])?;
    out.opt_text_element("copyrightNotice", &[], Some(fields.copyright_notice.as_str()))?;
    for terms in &fields.usageterms {
        out.opt_text_element("usageTerms", &[], terms.as_deref())?;
    }
    out.end("rightsInfo")
}

fn write_concept(out: &mut XmlOut, name: &str, concept: &Concept) -> Result<()> {
    out.concept(name, &[("qcode", non_empty(concept.qcode.as_deref()))], concept.name.as_deref())
}

fn write_party(out: &mut XmlOut, name: &str, party: &Party) -> Result<()> {
    out.concept(
        name,
        &[("role", party.role.as_deref()), ("qcode", party.qcode.as_deref())],
        party.name.as_deref(),
    )
}

fn write_link(out: &mut XmlOut, link: &AssociationLink) -> Result<()> {
    let attrs = [
        ("rel", link.rel.as_deref()),
        ("href", link.href.as_deref()),
        ("residref", link.urn.as_deref()),
        ("version", link.version.as_deref()),
        ("rank", Some(link.rank.as_str())),
    ];
    if link.item_class.is_none() && non_empty(link.title.as_deref()).is_none() {
        return out.empty("link", &attrs);
    }

    out.start("link", &attrs)?;
    if let Some(item_class) = link.item_class.as_deref() {
        out.empty("itemClass", &[("qcode", Some(item_class))])?;
    }
    out.opt_text_element("title", &[], link.title.as_deref())?;
    out.end("link")
}

fn write_item_meta(out: &mut XmlOut, fields: &NewsItemFields) -> Result<()> {
    out.start("itemMeta", &[])?;
    out.empty("itemClass", &[("qcode", Some(fields.item_class.qcode.as_str()))])?;
    write_concept(out, "provider", &fields.provider)?;
    out.opt_text_element("versionCreated", &[], Some(fields.version_created.as_str()))?;
    out.opt_text_element("embargoed", &[], fields.embargoed.as_deref())?;
    out.empty("pubStatus", &[("qcode", non_empty(fields.pubstatus.qcode.as_deref()))])?;
    out.text_element(
        "generator",
        &[
            ("versioninfo", Some(fields.generator.version.as_str())),
            ("role", Some(fields.generator.role.as_str())),
        ],
        &fields.generator.name,
    )?;
    for service in &fields.services {
        write_concept(out, "service", service)?;
    }
    for note in &fields.ednotes {
        out.text_element(
            "edNote",
            &[("role", note.role.as_deref()), ("constraint", note.constraint.as_deref())],
            &note.text,
        )?;
    }
    for signal in fields.signals.iter().flatten() {
        out.empty("signal", &[("qcode", Some(signal.as_str()))])?;
    }
    for link in &fields.association_links {
        write_link(out, link)?;
    }
    out.end("itemMeta")
}

fn write_content_meta(out: &mut XmlOut, fields: &NewsItemFields) -> Result<()> {
    out.start("contentMeta", &[])?;
    out.text_element("urgency", &[], &fields.urgency.to_string())?;
    out.opt_text_element("contentCreated", &[], fields.content_created.as_deref())?;
    for located in &fields.located_list {
        write_concept(out, "located", located)?;
    }
    for source in &fields.info_sources {
        write_party(out, "infoSource", source)?;
    }
    for creator in &fields.creators {
        write_party(out, "creator", creator)?;
    }
    for contributor in &fields.contributors {
        write_party(out, "contributor", contributor)?;
    }
    for audience in &fields.audiences {
        write_concept(out, "audience", audience)?;
    }
    if let Some(genre) = &fields.genre {
        write_concept(out, "genre", genre)?;
    }
    for subject in &fields.subjects {
        out.concept(
            "subject",
            &[
                ("type", subject.subject_type.as_deref()),
                ("qcode", subject.qcode.as_deref()),
                ("rank", subject.rank.as_deref()),
            ],
            subject.name.as_deref(),
        )?;
    }
    for poi in &fields.pois {
        out.concept(
            "subject",
            &[
                ("type", Some(POI_SUBJECT_TYPE)),
                ("literal", Some(poi.literal.as_str())),
                ("rank", Some(poi.rank.as_str())),
            ],
            poi.name.as_deref(),
        )?;
    }
    if let Some(language) = non_empty(fields.language.as_deref()) {
        out.empty("language", &[("tag", Some(language))])?;
    }
    for keyword in &fields.keywords {
        out.opt_text_element("keyword", &[("rank", keyword.rank.as_deref())], keyword.name.as_deref())?;
    }
    out.opt_text_element("headline", &[], fields.headline.as_deref())?;
    out.opt_text_element("by", &[], Some(fields.byline.as_str()))?;
    out.opt_text_element("dateline", &[], fields.dateline.as_deref())?;
    out.opt_text_element("creditline", &[], fields.credit.as_deref())?;
    for description in &fields.descriptions {
        out.opt_text_element("description", &[("role", description.role.as_deref())], description.value.as_deref())?;
    }
    for slugline in &fields.sluglines {
        out.text_element(
            "slugline",
            &[("role", Some(slugline.kind.as_str())), ("qcode", slugline.qcode.as_deref())],
            &slugline.name,
        )?;
    }
    out.end("contentMeta")
}

fn write_poi_assert(out: &mut XmlOut, poi: &PoiEntry) -> Result<()> {
    out.start("assert", &[("literal", Some(poi.literal.as_str()))])?;
    out.start("POIDetails", &[])?;
    if poi.latitude.is_some() || poi.longitude.is_some() {
        out.empty(
            "position",
            &[("latitude", poi.latitude.as_deref()), ("longitude", poi.longitude.as_deref())],
        )?;
    }
    if poi.address.is_some() || poi.city.is_some() || poi.country.is_some() {
        out.start("address", &[])?;
        out.opt_text_element("line", &[], poi.address.as_deref())?;
        if poi.city.is_some() {
            out.concept("locality", &[], poi.city.as_deref())?;
        }
        if poi.country.is_some() {
            out.concept("country", &[], poi.country.as_deref())?;
        }
        out.end("address")?;
    }
    out.end("POIDetails")?;
    out.end("assert")
}

fn write_content_set(out: &mut XmlOut, fields: &NewsItemFields) -> Result<()> {
    out.start("contentSet", &[])?;
    match &fields.remote_contents {
        Some(remote_contents) => {
            for remote in remote_contents {
                out.empty(
                    "remoteContent",
                    &[
                        ("href", remote.href.as_deref()),
                        ("contenttype", remote.contenttype.as_deref()),
                        ("width", remote.width.as_deref()),
                        ("height", remote.height.as_deref()),
                        ("audiobitrate", remote.bitrate.as_deref()),
                        ("audiosamplerate", remote.samplerate.as_deref()),
                    ],
                )?;
            }
        }
        None => write_inline_xhtml(out, fields)?,
    }
    out.end("contentSet")
}

fn write_inline_xhtml(out: &mut XmlOut, fields: &NewsItemFields) -> Result<()> {
    out.start("inlineXML", &[("contenttype", Some("application/xhtml+xml"))])?;
    out.start("html", &[("xmlns", Some(XHTML_NAMESPACE))])?;
    out.start("head", &[])?;
    out.text_element("title", &[], fields.headline.as_deref().unwrap_or_default())?;
    out.end("head")?;
    out.start("body", &[])?;

    out.start("section", &[("class", Some("main"))])?;
    out.start("header", &[])?;
    out.opt_text_element("p", &[("class", Some("kicker"))], fields.kicker.as_deref())?;
    out.opt_text_element("h1", &[], fields.headline.as_deref())?;
    out.opt_text_element("p", &[("class", Some("teaser"))], fields.teaser.as_deref())?;
    out.opt_text_element("p", &[("class", Some("embargo"))], fields.embargo_notice.as_deref())?;
    out.end("header")?;
    for block in fields.article_html.iter().flatten() {
        out.raw(block)?;
    }
    if let Some(infobox) = &fields.infobox {
        out.raw(infobox)?;
    }
    out.end("section")?;

    if let Some(notepad) = &fields.notepad {
        write_notepad(out, notepad)?;
    }

    out.end("body")?;
    out.end("html")?;
    out.end("inlineXML")
}

fn write_notepad(out: &mut XmlOut, notepad: &Notepad) -> Result<()> {
    out.start("section", &[("class", Some("notepad"))])?;
    if let Some(header) = non_empty(notepad.header.as_deref()) {
        out.raw(header)?;
    }
    for (class, markup) in [("public", &notepad.public), ("nonpublic", &notepad.non_public)] {
        if let Some(markup) = markup {
            out.start("section", &[("class", Some(class))])?;
            out.raw(markup)?;
            out.end("section")?;
        }
    }
    out.opt_text_element("p", &[("class", Some("closingline"))], Some(notepad.closingline.as_str()))?;
    out.end("section")
}
