//! Item, Page and Section models

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while validating item metadata at build time
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("item {title:?} is missing required metadata field `{field}`")]
    MissingMetadata { title: String, field: &'static str },

    #[error("item {title:?} metadata field `{field}` must be {expected}")]
    InvalidMetadata {
        title: String,
        field: &'static str,
        expected: &'static str,
    },
}

/// A published piece of content (e.g. a blog post)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    /// Display title
    pub title: String,

    /// Resolved output location, used as the hyperlink target
    pub path: String,

    /// Publication date
    pub date: DateTime<Local>,

    /// Category label grouping related items on the index page
    pub category: String,

    /// Estimated reading time in minutes
    pub reading_time: u32,

    /// Rendered HTML body
    pub body: String,
}

impl Item {
    /// Create a new item with an empty body
    pub fn new(
        title: impl Into<String>,
        path: impl Into<String>,
        date: DateTime<Local>,
        category: impl Into<String>,
        reading_time: u32,
    ) -> Self {
        Self {
            title: title.into(),
            path: path.into(),
            date,
            category: category.into(),
            reading_time,
            body: String::new(),
        }
    }

    /// Build an item from a loosely-typed metadata mapping.
    ///
    /// Hosts that carry per-item metadata as parsed front matter can
    /// validate it here instead of reaching into the mapping at render
    /// time. Missing or wrongly-typed fields fail the build with a
    /// descriptive [`ContentError`].
    pub fn from_metadata(
        title: impl Into<String>,
        path: impl Into<String>,
        date: DateTime<Local>,
        body: impl Into<String>,
        metadata: &serde_yaml::Value,
    ) -> Result<Self, ContentError> {
        let title = title.into();

        let category = match metadata.get("category") {
            None => {
                return Err(ContentError::MissingMetadata {
                    title,
                    field: "category",
                })
            }
            Some(value) => match value.as_str() {
                Some(s) => s.to_string(),
                None => {
                    return Err(ContentError::InvalidMetadata {
                        title,
                        field: "category",
                        expected: "a string",
                    })
                }
            },
        };

        let reading_time = match metadata.get("reading_time") {
            None => {
                return Err(ContentError::MissingMetadata {
                    title,
                    field: "reading_time",
                })
            }
            Some(value) => match value.as_u64() {
                Some(n) => n as u32,
                None => {
                    return Err(ContentError::InvalidMetadata {
                        title,
                        field: "reading_time",
                        expected: "a non-negative integer",
                    })
                }
            },
        };

        Ok(Self {
            title,
            path: path.into(),
            date,
            category,
            reading_time,
            body: body.into(),
        })
    }
}

/// A standalone page (e.g. "about")
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// Page title
    pub title: String,

    /// Resolved output location
    pub path: String,

    /// Rendered HTML body
    pub body: String,
}

/// A content section; this theme renders sections as an empty shell
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    /// Section title
    pub title: String,

    /// Resolved output location
    pub path: String,

    /// Items belonging to the section
    pub items: Vec<Item>,
}
