mod app;
mod figures;
mod plotly_shim;

use app::*;
use leptos::*;

fn main() {
    mount_to_body(|| {
        view! { <App/> }
    })
}
