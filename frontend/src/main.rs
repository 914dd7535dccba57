use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod content;
mod contact_form;
mod error;
mod navigation;
mod reveal;
mod components {
    pub mod contact;
    pub mod nav;
    pub mod notification;
}
mod pages {
    pub mod landing;
}

use components::nav::Nav;
use navigation::NavigationProvider;
use pages::landing::Landing;
use reveal::RevealProvider;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        }
        // Single page site: anything else goes back to the start.
        Route::NotFound => {
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <NavigationProvider>
                <RevealProvider>
                    <Nav />
                    <Switch<Route> render={switch} />
                </RevealProvider>
            </NavigationProvider>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        web_sys::console::error_1(&format!("error initializing log: {}", e).into());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
