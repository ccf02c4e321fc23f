use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::system::auth::{api, context::apply_login, context::use_auth};

#[component]
pub fn LoginPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let (_, set_auth_state) = use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get_untracked() {
            return;
        }

        let username_val = username.get_untracked();
        let password_val = password.get_untracked();
        if username_val.trim().is_empty() || password_val.is_empty() {
            set_error_message.set(Some("Enter username and password".to_string()));
            return;
        }

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match api::login(username_val, password_val).await {
                Ok(response) => {
                    log::info!("Logged in as {}", response.user.username);
                    apply_login(set_auth_state, response);
                }
                Err(e) => set_error_message.set(Some(e)),
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="login-container">
            <Card>
                <h2>"Admin Login"</h2>

                {move || error_message.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <form on:submit=on_submit>
                    <div class="form__group">
                        <Label>"Username"</Label>
                        <Input value=username disabled=Signal::derive(move || is_loading.get()) />
                    </div>

                    <div class="form__group">
                        <Label>"Password"</Label>
                        <Input
                            value=password
                            input_type=InputType::Password
                            disabled=Signal::derive(move || is_loading.get())
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn btn--primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </Card>
        </div>
    }
}
