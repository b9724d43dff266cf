use shared::SiteRoute;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

fn blurb(section: SiteRoute) -> &'static str {
    match section {
        SiteRoute::Home => "A gente transforma ideias em produtos digitais.",
        SiteRoute::AGente => "Quem somos e como a gente trabalha.",
        SiteRoute::Projetos => "Alguns dos projetos que a gente tirou do papel.",
        SiteRoute::Solucoes => "O que a gente pode construir com você.",
        SiteRoute::BoraConversar => "Manda uma mensagem, a gente responde rapidinho.",
        SiteRoute::Blog => "Textos sobre tecnologia, design e o dia a dia da gente.",
        SiteRoute::TrabalheComAGente => "Vagas abertas e como fazer parte do time.",
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionPageProps {
    pub section: SiteRoute,
}

#[function_component(SectionPage)]
pub fn section_page(props: &SectionPageProps) -> Html {
    html! {
        <section class="container mx-auto px-6 pt-24 lg:pt-10 pb-20">
            <h1 class="text-4xl font-lemonMilkBold text-purple-brandPurle mb-6">
                { props.section.to_string() }
            </h1>
            <p class="text-lg text-black">{ blurb(props.section) }</p>
        </section>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <section class="container mx-auto px-6 pt-24 lg:pt-10 pb-20 text-center">
            <h1 class="text-4xl font-lemonMilkBold text-purple-brandPurle mb-6">{"Ops!"}</h1>
            <p class="text-lg text-black mb-8">{"A página que você procura não existe."}</p>
            <Link<Route> to={Route::Home} classes={classes!("bg-purple-brandPurle", "text-white", "rounded-full", "px-6", "py-3")}>
                {"Voltar para o início"}
            </Link<Route>>
        </section>
    }
}

pub fn switch(route: Route) -> Html {
    match route.section() {
        Some(section) => html! { <SectionPage {section} /> },
        None => html! { <NotFound /> },
    }
}
