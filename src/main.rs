use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod error;
mod validation {
    pub mod email;
    pub mod field;
    pub mod phone;
}
mod forms {
    pub mod definitions;
    pub mod handlers;
    pub mod payload;
    pub mod state;
}
mod components {
    pub mod field_input;
    pub mod form_view;
    pub mod notification;
    pub mod submit_button;
}
mod pages {
    pub mod home;
    pub mod not_found;
}

use components::notification::NotificationProvider;
use pages::{home::Home, not_found::NotFound};

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
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    html! {
        <nav id="navbar" class="top-nav">
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Eko Rides"}
                </Link<Route>>
                <div id="nav-menu" class="nav-right">
                    <a href="#services" class="nav-link">{"Services"}</a>
                    <a href="#fleet" class="nav-link">{"Fleet"}</a>
                    <a href="#booking" class="nav-link">{"Book"}</a>
                    <a href="#hire-purchase" class="nav-link">{"Hire Purchase"}</a>
                    <a href="#contact" class="nav-link">{"Contact"}</a>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <NotificationProvider>
                <Nav />
                <Switch<Route> render={switch} />
            </NotificationProvider>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
