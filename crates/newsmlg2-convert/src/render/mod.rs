//! Renderers
//!
//! Renderers reshape extractor output into the fields of
//! [`NewsItemFields`](crate::NewsItemFields): keys are renamed, source
//! vocabularies are mapped to NewsML-G2 ones, and derived values such as
//! sequential ranks are computed. Renderers receive already extracted
//! values; only the markup renderers can fail.

mod content;
mod content_meta;
mod item_meta;
mod news_item;
mod poi;
mod rights_info;

pub use content::{parse_dateline, render_article, render_infobox, render_remote_content, render_slugline};
pub use content_meta::{
    render_audience, render_content_created, render_contributor, render_creator, render_descriptions,
    render_genre, render_infosource, render_keywords, render_located, render_subjects,
};
pub use item_meta::{
    render_ednotes, render_item_class, render_links, render_notepad, render_pubstatus, render_services,
    render_signal, NONPUBLIC_CONSTRAINT,
};
pub use news_item::{render_provider, render_version};
pub use poi::render_pois;
pub use rights_info::{render_copyright_notice, render_usageterms};
