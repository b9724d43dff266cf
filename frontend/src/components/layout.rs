use shared::SITE_METADATA;
use yew::prelude::*;

use super::footer::Footer;
use super::header::Header;
use crate::metadata;

#[derive(Properties, PartialEq)]
pub struct RootLayoutProps {
    #[prop_or_default]
    pub children: Html,
}

/// Page shell shared by every route: header, page body, footer.
#[function_component(RootLayout)]
pub fn root_layout(props: &RootLayoutProps) -> Html {
    use_effect_with((), |_| {
        metadata::apply(&SITE_METADATA);
    });

    html! {
        <div class="bg-zinc-[#fff] min-h-screen flex flex-col">
            <Header />
            <main class="flex-grow">
                { props.children.clone() }
            </main>
            <Footer />
        </div>
    }
}
