//! Assembler: runs every extractor and renderer for one record

use newsmlg2_domain::ItemConverter;
use tracing::{debug, info};

use crate::config::ConverterConfig;
use crate::error::{ConvertError, Result};
use crate::extract;
use crate::fields::{Generator, NewsItemFields};
use crate::record::Record;
use crate::render;

/// Converts digitalwires records into [`NewsItemFields`]
#[derive(Debug, Clone, Default)]
pub struct G2Converter {
    config: ConverterConfig,
}

impl G2Converter {
    /// Create a converter, validating the configuration
    pub fn new(config: ConverterConfig) -> Result<Self> {
        config.validate().map_err(ConvertError::Config)?;
        Ok(Self { config })
    }

    /// Get the configuration
    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    fn generator(&self) -> Generator {
        let generator = &self.config.generator;
        Generator {
            name: generator.name.clone(),
            role: generator.role.clone(),
            version: generator.version.clone(),
        }
    }

    /// Assemble the complete field mapping for one record
    ///
    /// `article_html` is only rendered for text items and
    /// `remote_contents` only for the others.
    pub fn assemble(&self, record: &Record) -> Result<NewsItemFields> {
        let kind = record.item_kind();
        let is_text = kind.is_text();
        let urn = extract::urn(record);
        info!("Converting {} as {} (text message: {})", urn, kind, is_text);

        let associations = extract::associations(record);
        let dpa_subjects = extract::dpa_subjects(record);
        let geo_subject = extract::geo_subject(record);
        let keywords = extract::keywords(record);
        let pois = extract::poi(record);

        let mut subjects = extract::desk(record);
        subjects.extend(geo_subject.iter().cloned());
        subjects.extend(dpa_subjects.iter().cloned());

        let mut slugline_sources = dpa_subjects;
        slugline_sources.extend(geo_subject);
        slugline_sources.extend(keywords.iter().cloned());

        // the linkbox only feeds item-meta links, which text items alone carry
        let links = if is_text {
            let mut links = associations.clone();
            links.extend(extract::linkbox(record)?);
            links
        } else {
            Vec::new()
        };

        debug!(
            "{} categories, {} links, {} pois",
            record.get_array("categories").len(),
            links.len(),
            pois.len()
        );

        let article_html = if is_text {
            render::render_article(extract::article(record).as_deref(), extract::dateline(record).as_deref())?
        } else {
            None
        };
        let remote_contents = if is_text {
            None
        } else {
            Some(render::render_remote_content(&associations))
        };

        Ok(NewsItemFields {
            urn,
            version: render::render_version(&extract::version(record))?,
            copyright_notice: render::render_copyright_notice(extract::copyright_notice(record)),
            usageterms: render::render_usageterms(vec![extract::usageterms(record)]),
            item_class: render::render_item_class(&kind),
            provider: render::render_provider(extract::provider_qcode(record), extract::provider_name(record)),
            version_created: extract::version_created(record),
            embargoed: extract::embargoed(record),
            pubstatus: render::render_pubstatus(extract::pubstatus_qcode(record), extract::pubstatus_name(record)),
            generator: self.generator(),
            services: render::render_services(&extract::services(record)),
            ednotes: render::render_ednotes(&extract::ednotes(record)),
            notepad: render::render_notepad(
                extract::notepad_header(record),
                extract::public_notepad(record),
                extract::non_public_notepad(record),
                extract::closing_line(record),
            )?,
            signals: render::render_signal(&extract::signal_qcodes(record)),
            association_links: render::render_links(is_text, links),
            urgency: extract::urgency(record),
            content_created: render::render_content_created(&[Some(extract::content_created(record))]),
            located_list: render::render_located(&extract::located(record)),
            info_sources: render::render_infosource(&extract::infosource(record)),
            creators: render::render_creator(&extract::creator(record)),
            contributors: render::render_contributor(&extract::contributor(record)),
            genre: render::render_genre(extract::genre(record).as_ref()),
            subjects: render::render_subjects(&subjects),
            audiences: render::render_audience(&extract::scope(record)),
            language: extract::language(record),
            keywords: render::render_keywords(&keywords),
            headline: extract::headline(record),
            byline: extract::byline(record),
            dateline: extract::dateline(record),
            credit: extract::creditline(record),
            descriptions: render::render_descriptions(&extract::descriptions(record)),
            pois: render::render_pois(&pois),
            kicker: extract::kicker(record),
            teaser: extract::teaser(record),
            embargo_notice: extract::embargo_notice(record),
            sluglines: render::render_slugline(&slugline_sources),
            article_html,
            infobox: render::render_infobox(extract::infobox(record).as_deref())?,
            remote_contents,
        })
    }
}

impl ItemConverter for G2Converter {
    type Input = Record;
    type Output = NewsItemFields;
    type Error = ConvertError;

    fn convert(&self, input: &Record) -> Result<NewsItemFields> {
        self.assemble(input)
    }
}
