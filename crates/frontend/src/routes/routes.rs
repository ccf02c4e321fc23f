use crate::domain::a001_design::ui::list::DesignList;
use crate::domain::a002_booking::ui::details::BookDesign;
use crate::domain::a002_booking::ui::list::BookingList;
use crate::layout::global_context::{use_app_context, Page};
use crate::layout::header::Header;
use crate::system::pages::admin::AdminPage;
use crate::system::pages::home::HomePage;
use leptos::prelude::*;

#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <Header />
        <main class="main">
            {move || match ctx.page.get() {
                Page::Home => view! { <HomePage /> }.into_any(),
                Page::Designs { search } => view! { <DesignList initial_search=search /> }.into_any(),
                Page::Book { design_id } => view! { <BookDesign design_id=design_id /> }.into_any(),
                Page::Bookings => view! { <BookingList /> }.into_any(),
                Page::Admin => view! { <AdminPage /> }.into_any(),
            }}
        </main>
    }
}
