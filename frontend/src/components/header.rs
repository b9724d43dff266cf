use std::rc::Rc;

use shared::{is_active, Drawer, DrawerAction, NavItem, NAV_ITEMS, ROOT_PATH};
use yew::prelude::*;
use yew_router::prelude::*;

use super::social_links::SocialMediaLinks;
use crate::router::Route;

const DESKTOP_LINK_BASE: &str =
    "hover:bg-purple-purpleOpacity transition-colors rounded-full px-2 py-2 duration-200";
const DRAWER_LINK_BASE: &str = "flex items-center gap-2 text-lg";
const DRAWER_PANEL_BASE: &str =
    "lg:hidden fixed top-0 left-0 h-full w-64 bg-white z-40 shadow-lg transform transition-transform duration-300";

pub fn desktop_link_class(active: bool) -> String {
    if active {
        format!("{DESKTOP_LINK_BASE} bg-purple-purpleOpacity font-lemonMilkBold")
    } else {
        DESKTOP_LINK_BASE.to_string()
    }
}

pub fn drawer_link_class(active: bool) -> String {
    if active {
        format!("{DRAWER_LINK_BASE} text-purple-brandPurle font-lemonMilkBold")
    } else {
        format!("{DRAWER_LINK_BASE} text-black")
    }
}

// pt-20 keeps the links clear of the fixed social bar
pub fn drawer_panel_class(open: bool) -> String {
    let slide = if open { "translate-x-0" } else { "-translate-x-full" };
    format!("{DRAWER_PANEL_BASE} {slide} pt-20")
}

pub fn hamburger_icon_class(open: bool) -> &'static str {
    if open {
        "fa-solid fa-xmark"
    } else {
        "fa-solid fa-bars"
    }
}

/// Bridges the shared drawer state machine into `use_reducer`.
#[derive(Default, PartialEq)]
struct DrawerState(Drawer);

impl Reducible for DrawerState {
    type Action = DrawerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.0.apply(action);
        log::debug!("drawer {:?} -> open={}", action, next.open);
        Rc::new(Self(next))
    }
}

/// Site header: desktop bar, mobile social strip, hamburger and drawer.
///
/// Which variant shows up is decided by the `lg` breakpoint in CSS; both are
/// always rendered.
#[function_component(Header)]
pub fn header() -> Html {
    let drawer = use_reducer(DrawerState::default);
    let navigator = use_navigator();
    let pathname = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_else(|| ROOT_PATH.to_string());

    let open = drawer.0.open;

    let on_toggle = {
        let drawer = drawer.clone();
        Callback::from(move |_: MouseEvent| drawer.dispatch(DrawerAction::Toggle))
    };

    // Every nav link closes the drawer, then hands navigation to the router.
    let nav_click = |item: &NavItem| {
        let dispatcher = drawer.dispatcher();
        let navigator = navigator.clone();
        let route = Route::from(item.route);
        Callback::from(move |event: MouseEvent| {
            dispatcher.dispatch(DrawerAction::Close);
            if event.button() != 0 || event.ctrl_key() || event.meta_key() || event.shift_key() {
                return;
            }
            event.prevent_default();
            match &navigator {
                Some(navigator) => navigator.push(&route),
                None => log::warn!("⚠️ No router navigator available for {}", route.to_path()),
            }
        })
    };

    let desktop_links = NAV_ITEMS.iter().map(|item| {
        html! {
            <a
                key={item.href}
                href={item.href}
                class={desktop_link_class(is_active(item.href, &pathname))}
                onclick={nav_click(item)}
            >
                { item.label }
            </a>
        }
    });

    let drawer_links = NAV_ITEMS.iter().map(|item| {
        html! {
            <a
                key={item.href}
                href={item.href}
                class={drawer_link_class(is_active(item.href, &pathname))}
                onclick={nav_click(item)}
            >
                <i class={item.icon} style={format!("font-size: {}px;", item.icon_size)}></i>
                { item.label }
            </a>
        }
    });

    html! {
        <>
            <div class="flex lg:hidden w-full bg-purple-brandPurle py-2 justify-center fixed top-0 left-0 z-40">
                <SocialMediaLinks
                    icon_size={24}
                    icon_color_class="text-white"
                    gap_class="gap-6"
                    hover_effect_class="hover:scale-125 transition-transform"
                />
            </div>

            <header class="hidden lg:flex items-center justify-between px-6 py-6">
                <div class="flex items-center gap-3">
                    <Link<Route> to={Route::Home}>
                        <img
                            src="/img/logo-doisnovemeia.svg"
                            alt="Logo Dois Nove Meia"
                            class="animate-pulseScale"
                        />
                    </Link<Route>>
                </div>

                <nav class="flex gap-5 font-lemonMilkLight rounded-full">
                    { for desktop_links }
                </nav>

                <div class="flex items-center bg-purple-brandPurle px-4 py-3 rounded-full">
                    <SocialMediaLinks
                        icon_size={30}
                        icon_color_class="text-white"
                        gap_class="gap-4"
                        hover_effect_class="hover:scale-125 transition-transform"
                    />
                </div>
            </header>

            <button
                class="lg:hidden fixed top-3 left-4 z-50 text-3xl text-purple-brandPurle bg-white shadow-md rounded-md p-2"
                aria-label="Menu"
                aria-expanded={open.to_string()}
                onclick={on_toggle}
            >
                <i class={hamburger_icon_class(open)}></i>
            </button>

            <div class={drawer_panel_class(open)}>
                <nav class="flex flex-col items-start gap-6 px-6">
                    { for drawer_links }
                </nav>
            </div>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn desktop_active_link_gets_highlight() {
        let active = desktop_link_class(true);
        assert!(active.starts_with(DESKTOP_LINK_BASE));
        assert!(active.ends_with("bg-purple-purpleOpacity font-lemonMilkBold"));
        assert_eq!(desktop_link_class(false), DESKTOP_LINK_BASE);
    }

    #[test]
    fn drawer_link_colours() {
        assert_eq!(
            drawer_link_class(true),
            "flex items-center gap-2 text-lg text-purple-brandPurle font-lemonMilkBold"
        );
        assert_eq!(drawer_link_class(false), "flex items-center gap-2 text-lg text-black");
    }

    #[test]
    fn drawer_panel_slides_with_state() {
        assert!(drawer_panel_class(true).contains(" translate-x-0 "));
        assert!(!drawer_panel_class(true).contains("-translate-x-full"));
        assert!(drawer_panel_class(false).contains(" -translate-x-full "));
        assert!(drawer_panel_class(false).ends_with("pt-20"));
    }

    #[test]
    fn hamburger_icon_follows_state() {
        assert_eq!(hamburger_icon_class(true), "fa-solid fa-xmark");
        assert_eq!(hamburger_icon_class(false), "fa-solid fa-bars");
    }

    #[test]
    fn reducer_wraps_shared_drawer() {
        let state = Rc::new(DrawerState::default());
        let state = state.reduce(DrawerAction::Toggle);
        assert!(state.0.open);
        let state = state.reduce(DrawerAction::Close);
        assert!(!state.0.open);
    }
}
