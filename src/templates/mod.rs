//! Built-in caterpillar theme templates using Tera template engine
//!
//! All templates are embedded directly in the binary; the host pipeline
//! never has to ship a template directory alongside the theme.

use anyhow::Result;
use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera};

/// Template renderer with the embedded caterpillar templates
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all caterpillar templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        // Disable autoescaping for HTML templates since we're generating HTML
        // and bodies arrive pre-rendered
        tera.autoescape_on(vec![]);

        // Register all templates
        tera.add_raw_templates(vec![
            ("layout.html", include_str!("caterpillar/layout.html")),
            ("index.html", include_str!("caterpillar/index.html")),
            ("section.html", include_str!("caterpillar/section.html")),
            ("item.html", include_str!("caterpillar/item.html")),
            ("page.html", include_str!("caterpillar/page.html")),
            // Partials
            (
                "partials/header.html",
                include_str!("caterpillar/partials/header.html"),
            ),
            (
                "partials/footer.html",
                include_str!("caterpillar/partials/footer.html"),
            ),
            (
                "partials/item_list.html",
                include_str!("caterpillar/partials/item_list.html"),
            ),
        ])?;

        // Register custom filters
        tera.register_filter("strip_html", strip_html_filter);
        tera.register_filter("truncate_chars", truncate_chars_filter);

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}

/// Tera filter: strip HTML tags
fn strip_html_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("strip_html", "value", String, value);
    let mut result = String::with_capacity(s.len());
    let mut in_tag = false;
    for c in s.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }
    Ok(tera::Value::String(result))
}

/// Tera filter: truncate by character count
fn truncate_chars_filter(
    value: &tera::Value,
    args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("truncate_chars", "value", String, value);
    let length = match args.get("length") {
        Some(val) => tera::try_get_value!("truncate_chars", "length", usize, val),
        None => 150,
    };
    let omission = match args.get("omission") {
        Some(val) => tera::try_get_value!("truncate_chars", "omission", String, val),
        None => "...".to_string(),
    };

    if s.chars().count() <= length {
        Ok(tera::Value::String(s))
    } else {
        let truncated: String = s.chars().take(length).collect();
        Ok(tera::Value::String(format!(
            "{}{}",
            truncated.trim_end(),
            omission
        )))
    }
}

/// Data structures for template context

#[derive(Debug, Clone, Serialize)]
pub struct GroupData {
    pub label: String,
    pub slug: String,
    pub items: Vec<ItemRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ItemRow {
    pub title: String,
    pub path: String,
    pub date: String,
}
