use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMetadata {
    pub title: &'static str,
    pub description: &'static str,
}

pub const SITE_METADATA: PageMetadata = PageMetadata {
    title: "doisnovemeia",
    description: "Generated by create next app",
};
