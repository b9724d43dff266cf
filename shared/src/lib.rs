pub mod drawer;
pub mod meta;
pub mod nav;
pub mod social;

pub use drawer::{Drawer, DrawerAction};
pub use meta::{PageMetadata, SITE_METADATA};
pub use nav::{is_active, NavItem, SiteRoute, NAV_ITEMS, ROOT_PATH};
pub use social::{SocialLink, SOCIAL_LINKS};
