//! Configuration module

mod site;

pub use site::Credit;
pub use site::SiteInfo;
pub use site::SocialLink;
