pub mod footer;
pub mod header;
pub mod layout;
pub mod social_links;
