use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::global_context::{use_app_context, Page};
use crate::system::auth::context::{do_logout, use_auth};

/// Top navigation bar
#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();
    let (auth_state, set_auth_state) = use_auth();

    let nav_button = move |label: &'static str, target: Page| {
        let is_current = {
            let target = target.clone();
            move || std::mem::discriminant(&ctx.page.get()) == std::mem::discriminant(&target)
        };
        view! {
            <Button
                appearance=move || if is_current() { ButtonAppearance::Primary } else { ButtonAppearance::Subtle }
                on_click=move |_| ctx.navigate(target.clone())
            >
                {label}
            </Button>
        }
    };

    view! {
        <header class="header">
            <div class="header__brand" on:click=move |_| ctx.navigate(Page::Home)>
                "Tailor Studio"
            </div>
            <nav class="header__nav">
                {nav_button("Home", Page::Home)}
                {nav_button("Designs", Page::Designs { search: String::new() })}
                {nav_button("Bookings", Page::Bookings)}
                {nav_button("Admin", Page::Admin)}
            </nav>
            {move || auth_state.get().user_info.map(|user| view! {
                <div class="header__user">
                    <span>{user.username}</span>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| spawn_local(do_logout(set_auth_state))
                    >
                        "Logout"
                    </Button>
                </div>
            })}
        </header>
    }
}
