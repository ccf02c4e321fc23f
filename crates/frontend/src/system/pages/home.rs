use leptos::prelude::*;
use thaw::*;

use crate::layout::global_context::{use_app_context, Page};

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <section class="home">
            <h1 class="home__title">"Custom Tailoring, Made to Measure"</h1>
            <p class="home__subtitle">
                "Pick a design from our catalog, send us your measurements and we will stitch it for you."
            </p>
            <div class="home__actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| ctx.navigate(Page::Designs { search: String::new() })
                >
                    "Browse Designs"
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| ctx.navigate(Page::Bookings)
                >
                    "View Bookings"
                </Button>
            </div>
        </section>
    }
}
