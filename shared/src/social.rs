use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub name: &'static str,
    /// Font Awesome brand classes.
    pub icon: &'static str,
    pub url: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink {
        name: "Instagram",
        icon: "fa-brands fa-instagram",
        url: "https://www.instagram.com/doisnovemeia",
    },
    SocialLink {
        name: "LinkedIn",
        icon: "fa-brands fa-linkedin",
        url: "https://www.linkedin.com/company/doisnovemeia",
    },
    SocialLink {
        name: "Facebook",
        icon: "fa-brands fa-facebook",
        url: "https://www.facebook.com/doisnovemeia",
    },
    SocialLink {
        name: "WhatsApp",
        icon: "fa-brands fa-whatsapp",
        url: "https://wa.me/5500000000000",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_are_absolute_https() {
        for link in SOCIAL_LINKS.iter() {
            assert!(link.url.starts_with("https://"), "{}", link.name);
            assert!(link.icon.starts_with("fa-brands "), "{}", link.name);
        }
    }
}
