use leptos::prelude::*;

use super::context::use_auth;
use crate::system::pages::login::LoginPage;

/// Renders `children` for an admin session, the login form otherwise
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().is_admin()
            fallback=move || {
                let signed_in_as = auth_state
                    .get()
                    .user_info
                    .map(|u| u.username);
                view! {
                    {signed_in_as.map(|name| view! {
                        <div class="alert alert--error">
                            {format!("{} is not an administrator.", name)}
                        </div>
                    })}
                    <LoginPage />
                }
            }
        >
            {children()}
        </Show>
    }
}
