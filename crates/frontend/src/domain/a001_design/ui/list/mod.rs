use contracts::domain::a001_design::aggregate::{search_designs, Design};
use gloo_net::http::Request;
use leptos::prelude::*;
use thaw::*;

use crate::layout::global_context::{use_app_context, Page};
use crate::shared::api_utils::{api_url, error_message};

/// Whole catalog in catalog order
pub async fn fetch_designs() -> Result<Vec<Design>, String> {
    let response = Request::get(&api_url("/api/design"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    if !response.ok() {
        return Err(error_message(response).await);
    }
    response
        .json::<Vec<Design>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

fn showing_label(count: usize) -> String {
    format!("Showing {} design{}", count, if count == 1 { "" } else { "s" })
}

/// Catalog screen with live search by name or reference id
#[component]
pub fn DesignList(#[prop(into)] initial_search: String) -> impl IntoView {
    let ctx = use_app_context();
    let catalog = RwSignal::new(Vec::<Design>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let query = RwSignal::new(initial_search);

    wasm_bindgen_futures::spawn_local(async move {
        match fetch_designs().await {
            Ok(designs) => catalog.set(designs),
            Err(e) => set_error.set(Some(e)),
        }
        set_loading.set(false);
    });

    let visible = Memo::new(move |_| catalog.with(|c| query.with(|q| search_designs(c, q))));

    view! {
        <section class="page designs">
            <div class="page__header">
                <h1>"Our Designs"</h1>
                <div class="designs__search">
                    <Input value=query placeholder="Search by design name or ID..." />
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <Show when=move || !loading.get() fallback=|| view! { <p class="muted">"Loading designs..."</p> }>
                <p class="designs__count">{move || showing_label(visible.get().len())}</p>

                <Show
                    when=move || !visible.get().is_empty()
                    fallback=move || view! {
                        <div class="empty-state">
                            <p>"No designs found matching your search."</p>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| query.set(String::new())
                            >
                                "Show All Designs"
                            </Button>
                        </div>
                    }
                >
                    <div class="designs__grid">
                        <For
                            each=move || visible.get()
                            key=|design| design.id.clone()
                            children=move |design: Design| {
                                let design_id = design.id.as_str().to_string();
                                view! {
                                    <DesignCard design=design>
                                        <Button
                                            appearance=ButtonAppearance::Primary
                                            on_click=move |_| ctx.navigate(Page::Book { design_id: design_id.clone() })
                                        >
                                            "Book this Design"
                                        </Button>
                                    </DesignCard>
                                }
                            }
                        />
                    </div>
                </Show>
            </Show>
        </section>
    }
}

/// Design preview: image, name, id and category badges, measurement list
#[component]
pub fn DesignCard(design: Design, children: Children) -> impl IntoView {
    view! {
        <div class="design-card">
            <Card>
                <img class="design-card__image" src=design.image.clone() alt=design.name.clone() />
                <h3 class="design-card__name">{design.name.clone()}</h3>
                <div class="design-card__badges">
                    <span class="chip chip--id">{design.id.as_str().to_string()}</span>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>
                        {design.category.clone()}
                    </Badge>
                </div>
                <p class="design-card__label">"Required measurements:"</p>
                <div class="design-card__measurements">
                    {design
                        .measurements
                        .iter()
                        .map(|m| view! { <span class="chip">{m.clone()}</span> })
                        .collect_view()}
                </div>
                {children()}
            </Card>
        </div>
    }
}
