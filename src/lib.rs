//! caterpillar-theme: a Primer-styled blog theme for static site generators
//!
//! This crate is the HTML layout factory of a site build: the host
//! pipeline loads content, renders markdown and assigns URLs, then hands
//! typed items, pages and sections to [`Theme`] and writes the HTML
//! documents it returns. The index page groups posts by category, most
//! recently active category first.

pub mod config;
pub mod content;
pub mod helpers;
pub mod templates;
pub mod theme;

pub use config::SiteInfo;
pub use content::{ContentError, Item, Page, Section};
pub use helpers::{group_by_category, CategoryGroup};
pub use theme::Theme;
