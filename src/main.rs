use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod carousel;
mod slider;
mod content;
mod dom;
mod hooks;
mod components {
    pub mod animated_counter;
    pub mod before_after;
    pub mod contact;
    pub mod faq_accordion;
    pub mod feature_grid;
    pub mod footer;
    pub mod nav;
    pub mod process_timeline;
    pub mod service_card;
    pub mod site_style;
    pub mod testimonials;
}
mod pages {
    pub mod boutique;
    pub mod enhanced;
}

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

use pages::{
    boutique::Boutique,
    enhanced::Enhanced,
};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/enhanced")]
    Enhanced,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering boutique landing page");
            html! { <Boutique /> }
        },
        Route::Enhanced => {
            info!("Rendering enhanced landing page");
            html! { <Enhanced /> }
        },
        Route::NotFound => {
            info!("Unknown path, falling back to boutique landing page");
            html! { <Boutique /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if let Err(err) = console_log::init_with_level(config::log_level()) {
        web_sys::console::warn_1(&format!("logger already set: {}", err).into());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
