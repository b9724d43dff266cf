mod components;
mod metadata;
mod pages;
mod router;

use components::layout::RootLayout;
use router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <RootLayout>
                <Switch<Route> render={pages::switch} />
            </RootLayout>
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<App>::new().render();
}
