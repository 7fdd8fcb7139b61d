//! Theme module - the HTML layout factory
//!
//! One render operation per page type. The host pipeline supplies typed
//! content and writes the returned HTML wherever its routing decided;
//! this module only decides what each page looks like.

use anyhow::Result;
use tera::Context;

use crate::config::SiteInfo;
use crate::content::{Item, Page, Section};
use crate::helpers::{format_date, full_url_for, group_by_category, url_for};
use crate::templates::{GroupData, ItemRow, TemplateRenderer};

/// The caterpillar theme: site configuration plus the embedded templates
pub struct Theme {
    site: SiteInfo,
    renderer: TemplateRenderer,
}

impl Theme {
    /// Create a theme for the given site
    pub fn new(site: SiteInfo) -> Result<Self> {
        let renderer = TemplateRenderer::new()?;
        Ok(Self { site, renderer })
    }

    /// Site configuration this theme renders for
    pub fn site(&self) -> &SiteInfo {
        &self.site
    }

    /// Stylesheet assets that must be present alongside generated output
    pub fn resource_paths(&self) -> Vec<String> {
        vec![self.site.primer_css.clone(), self.site.highlight_css.clone()]
    }

    /// Render the index page: header, tagline, grouped post list
    pub fn render_index(&self, items: &[Item]) -> Result<String> {
        let mut sorted: Vec<Item> = items.to_vec();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));

        let groups: Vec<GroupData> = group_by_category(&sorted)
            .iter()
            .map(|group| GroupData {
                label: group.label.to_string(),
                slug: group.slug.clone(),
                items: group
                    .items
                    .iter()
                    .map(|item| ItemRow {
                        title: item.title.clone(),
                        path: url_for(&self.site, &item.path),
                        date: format_date(&item.date, &self.site.date_format),
                    })
                    .collect(),
            })
            .collect();

        let mut context =
            self.base_context(&self.site.title, &self.site.description, "", false);
        context.insert("groups", &groups);

        let html = self.renderer.render("index.html", &context)?;
        tracing::debug!("rendered index ({} groups)", groups.len());
        Ok(html)
    }

    /// Render a section page.
    ///
    /// Sections carry no body in this theme; everything flows through the
    /// index, so the layout is a bare header/footer shell.
    pub fn render_section(&self, section: &Section) -> Result<String> {
        let title = format!("{} | {}", section.title, self.site.title);
        let context = self.base_context(&title, &self.site.description, &section.path, false);

        let html = self.renderer.render("section.html", &context)?;
        tracing::debug!("rendered section shell: {}", section.title);
        Ok(html)
    }

    /// Render an item detail page: publish date, reading time, body
    pub fn render_item(&self, item: &Item) -> Result<String> {
        let title = format!("{} | {}", item.title, self.site.title);
        let mut context = self.base_context(&title, &item.body, &item.path, true);
        context.insert(
            "page_date",
            &format_date(&item.date, &self.site.full_date_format),
        );
        context.insert("page_reading_time", &item.reading_time);
        context.insert("page_content", &item.body);

        let html = self.renderer.render("item.html", &context)?;
        tracing::debug!("rendered item: {}", item.title);
        Ok(html)
    }

    /// Render a static page: header, body, footer
    pub fn render_page(&self, page: &Page) -> Result<String> {
        let title = format!("{} | {}", page.title, self.site.title);
        let mut context = self.base_context(&title, &self.site.description, &page.path, false);
        context.insert("page_content", &page.body);

        let html = self.renderer.render("page.html", &context)?;
        tracing::debug!("rendered page: {}", page.title);
        Ok(html)
    }

    /// Tag list pages are suppressed by this theme
    pub fn render_tag_list(&self, _items: &[Item]) -> Option<String> {
        None
    }

    /// Tag detail pages are suppressed by this theme
    pub fn render_tag_details(&self, _tag: &str, _items: &[Item]) -> Option<String> {
        None
    }

    fn base_context(
        &self,
        page_title: &str,
        description: &str,
        current_path: &str,
        highlight: bool,
    ) -> Context {
        let mut context = Context::new();
        context.insert("config", &self.site);
        context.insert("page_title", page_title);
        context.insert("page_description", description);
        context.insert("canonical", &full_url_for(&self.site, current_path));
        context.insert("home_url", &url_for(&self.site, ""));
        context.insert("primer_css", &url_for(&self.site, &self.site.primer_css));
        context.insert(
            "highlight_css",
            &url_for(&self.site, &self.site.highlight_css),
        );
        context.insert("page_highlight", &highlight);
        context
    }
}
