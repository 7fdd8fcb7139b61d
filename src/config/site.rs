//! Site configuration (site.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Site-level theme configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfo {
    // Site
    pub title: String,
    pub description: String,
    pub language: String,

    // URL
    pub url: String,
    pub root: String,

    // Header / footer
    pub tagline: String,
    pub contact_label: String,
    pub social: Vec<SocialLink>,
    pub credits: Vec<Credit>,

    // Date / Time format (Moment.js style)
    pub date_format: String,
    pub full_date_format: String,

    // Stylesheets
    pub primer_css: String,
    pub highlight_css: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            title: "caterpillar.dev".to_string(),
            description: String::new(),
            language: "en".to_string(),

            url: "https://caterpillar.dev".to_string(),
            root: "/".to_string(),

            tagline: "A blog about software engineering".to_string(),
            contact_label: "Reach me on".to_string(),
            social: vec![
                SocialLink {
                    name: "LinkedIn".to_string(),
                    url: "https://www.linkedin.com".to_string(),
                },
                SocialLink {
                    name: "Twitter".to_string(),
                    url: "https://twitter.com".to_string(),
                },
            ],
            credits: vec![
                Credit {
                    prefix: "Styled with".to_string(),
                    name: "Primer".to_string(),
                    url: "https://primer.style".to_string(),
                },
                Credit {
                    prefix: "Hosted on".to_string(),
                    name: "GitHub Pages".to_string(),
                    url: "https://pages.github.com".to_string(),
                },
            ],

            date_format: "D MMM".to_string(),
            full_date_format: "MMMM D, YYYY".to_string(),

            primer_css: "/css/primer.css".to_string(),
            highlight_css: "/css/highlight.css".to_string(),
        }
    }
}

impl SiteInfo {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let info: SiteInfo = serde_yaml::from_str(&content)?;
        Ok(info)
    }
}

/// A named link in the header contact line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
}

/// A footer credit ("Styled with <a>Primer</a>")
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credit {
    pub prefix: String,
    pub name: String,
    pub url: String,
}
