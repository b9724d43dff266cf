use derive_more::Display;
use serde::Serialize;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

pub const ROOT_PATH: &str = "/";

/// Site sections reachable from the navigation, in menu order.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SiteRoute {
    #[display(fmt = "OLÁ")]
    Home,
    #[display(fmt = "A GENTE")]
    AGente,
    #[display(fmt = "PROJETOS")]
    Projetos,
    #[display(fmt = "SOLUÇÕES")]
    Solucoes,
    #[display(fmt = "BORA CONVERSAR")]
    BoraConversar,
    #[display(fmt = "BLOG")]
    Blog,
    #[display(fmt = "TRABALHE COM A GENTE")]
    TrabalheComAGente,
}

impl SiteRoute {
    pub fn path(self) -> &'static str {
        self.nav_item().href
    }

    pub fn nav_item(self) -> &'static NavItem {
        // NAV_ITEMS is declared in the same order as the enum
        &NAV_ITEMS[self as usize]
    }

    /// Exact lookup of a request path. A single trailing slash is ignored so
    /// `/blog/` resolves like `/blog`.
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = match path.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => path,
        };
        Self::iter().find(|route| route.path() == trimmed)
    }

    /// The section highlighted for `current`, if any.
    pub fn active(current: &str) -> Option<Self> {
        Self::iter().find(|route| is_active(route.path(), current))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub route: SiteRoute,
    pub label: &'static str,
    /// Font Awesome classes for the glyph shown in the drawer.
    pub icon: &'static str,
    pub icon_size: u32,
    pub href: &'static str,
}

pub const NAV_ITEMS: [NavItem; 7] = [
    NavItem {
        route: SiteRoute::Home,
        label: "OLÁ",
        icon: "fa-regular fa-face-smile",
        icon_size: 18,
        href: "/",
    },
    NavItem {
        route: SiteRoute::AGente,
        label: "A GENTE",
        icon: "fa-solid fa-users",
        icon_size: 18,
        href: "/a-gente",
    },
    NavItem {
        route: SiteRoute::Projetos,
        label: "PROJETOS",
        icon: "fa-solid fa-diagram-project",
        icon_size: 18,
        href: "/projetos",
    },
    NavItem {
        route: SiteRoute::Solucoes,
        label: "SOLUÇÕES",
        icon: "fa-solid fa-puzzle-piece",
        icon_size: 18,
        href: "/solucoes",
    },
    NavItem {
        route: SiteRoute::BoraConversar,
        label: "BORA CONVERSAR",
        icon: "fa-regular fa-comment-dots",
        icon_size: 18,
        href: "/bora-conversar",
    },
    NavItem {
        route: SiteRoute::Blog,
        label: "BLOG",
        icon: "fa-solid fa-blog",
        icon_size: 18,
        href: "/blog",
    },
    NavItem {
        route: SiteRoute::TrabalheComAGente,
        label: "TRABALHE COM A GENTE",
        icon: "fa-solid fa-code",
        icon_size: 22,
        href: "/trabalhe-com-a-gente",
    },
];

/// Whether the nav entry for `href` should be highlighted on `current`.
///
/// The home entry only matches the root itself; every other entry also
/// matches nested paths below it.
pub fn is_active(href: &str, current: &str) -> bool {
    if href == ROOT_PATH {
        return current == ROOT_PATH;
    }
    current.starts_with(href)
}
