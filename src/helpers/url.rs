//! URL helper functions

use crate::config::SiteInfo;

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for(&info, "/css/primer.css") // -> "/blog/css/primer.css"
/// ```
pub fn url_for(info: &SiteInfo, path: &str) -> String {
    let root = info.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Generate a full URL including the domain
///
/// # Examples
/// ```ignore
/// full_url_for(&info, "/about/") // -> "https://example.com/blog/about/"
/// ```
pub fn full_url_for(info: &SiteInfo, path: &str) -> String {
    let base = info.url.trim_end_matches('/');
    format!("{}{}", base, url_for(info, path))
}
