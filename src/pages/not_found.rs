use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <section class="not-found" style="min-height: 60vh; display: flex; flex-direction: column; align-items: center; justify-content: center;">
            <h1>{"Page not found"}</h1>
            <Link<Route> to={Route::Home} classes="btn btn-primary">
                {"Back to home"}
            </Link<Route>>
        </section>
    }
}
