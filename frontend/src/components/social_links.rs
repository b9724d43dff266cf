use shared::SOCIAL_LINKS;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SocialMediaLinksProps {
    /// Icon size in pixels.
    #[prop_or(24)]
    pub icon_size: u32,
    #[prop_or(AttrValue::Static("text-white"))]
    pub icon_color_class: AttrValue,
    #[prop_or(AttrValue::Static("gap-4"))]
    pub gap_class: AttrValue,
    #[prop_or_default]
    pub hover_effect_class: AttrValue,
}

/// Row of social network icons, styled by the caller.
#[function_component(SocialMediaLinks)]
pub fn social_media_links(props: &SocialMediaLinksProps) -> Html {
    let container_class = format!("flex items-center {}", props.gap_class);
    let link_class = link_class(&props.icon_color_class, &props.hover_effect_class);
    let icon_style = format!("font-size: {}px;", props.icon_size);

    html! {
        <div class={container_class}>
            { for SOCIAL_LINKS.iter().map(|link| html! {
                <a
                    key={link.name}
                    href={link.url}
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label={link.name}
                    title={link.name}
                    class={link_class.clone()}
                >
                    <i class={link.icon} style={icon_style.clone()}></i>
                </a>
            }) }
        </div>
    }
}

fn link_class(color: &str, hover: &str) -> String {
    if hover.is_empty() {
        color.to_string()
    } else {
        format!("{color} {hover}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_class_joins_colour_and_hover() {
        assert_eq!(
            link_class("text-white", "hover:scale-125 transition-transform"),
            "text-white hover:scale-125 transition-transform"
        );
        assert_eq!(link_class("text-white", ""), "text-white");
    }
}
