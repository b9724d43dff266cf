use shared::SiteRoute;
use yew_router::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/a-gente")]
    AGente,
    #[at("/projetos")]
    Projetos,
    #[at("/solucoes")]
    Solucoes,
    #[at("/bora-conversar")]
    BoraConversar,
    #[at("/blog")]
    Blog,
    #[at("/trabalhe-com-a-gente")]
    TrabalheComAGente,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// The nav section this route renders, `None` for the fallback page.
    pub fn section(self) -> Option<SiteRoute> {
        match self {
            Route::Home => Some(SiteRoute::Home),
            Route::AGente => Some(SiteRoute::AGente),
            Route::Projetos => Some(SiteRoute::Projetos),
            Route::Solucoes => Some(SiteRoute::Solucoes),
            Route::BoraConversar => Some(SiteRoute::BoraConversar),
            Route::Blog => Some(SiteRoute::Blog),
            Route::TrabalheComAGente => Some(SiteRoute::TrabalheComAGente),
            Route::NotFound => None,
        }
    }
}

impl From<SiteRoute> for Route {
    fn from(section: SiteRoute) -> Self {
        match section {
            SiteRoute::Home => Route::Home,
            SiteRoute::AGente => Route::AGente,
            SiteRoute::Projetos => Route::Projetos,
            SiteRoute::Solucoes => Route::Solucoes,
            SiteRoute::BoraConversar => Route::BoraConversar,
            SiteRoute::Blog => Route::Blog,
            SiteRoute::TrabalheComAGente => Route::TrabalheComAGente,
        }
    }
}
