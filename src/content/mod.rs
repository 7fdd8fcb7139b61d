//! Content module - the typed content model supplied by the host pipeline

mod item;

pub use item::{ContentError, Item, Page, Section};
