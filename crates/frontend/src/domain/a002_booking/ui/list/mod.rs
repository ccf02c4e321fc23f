use contracts::domain::a002_booking::aggregate::{group_by_status, Booking, BookingGroup};
use gloo_net::http::Request;
use leptos::prelude::*;
use thaw::*;

use crate::layout::global_context::{use_app_context, Page};
use crate::shared::api_utils::{api_url, error_message};
use crate::shared::date_utils::format_date;

/// All bookings, newest first
pub async fn fetch_bookings() -> Result<Vec<Booking>, String> {
    let response = Request::get(&api_url("/api/booking"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    if !response.ok() {
        return Err(error_message(response).await);
    }
    response
        .json::<Vec<Booking>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Bookings screen, grouped by status
#[component]
pub fn BookingList() -> impl IntoView {
    let ctx = use_app_context();
    let bookings = RwSignal::new(Vec::<Booking>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    wasm_bindgen_futures::spawn_local(async move {
        match fetch_bookings().await {
            Ok(list) => bookings.set(list),
            Err(e) => set_error.set(Some(e)),
        }
        set_loading.set(false);
    });

    let groups = Memo::new(move |_| bookings.with(|b| group_by_status(b)));

    view! {
        <section class="page bookings">
            <h1>"My Bookings"</h1>

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <Show when=move || !loading.get() fallback=|| view! { <p class="muted">"Loading bookings..."</p> }>
                <Show
                    when=move || !groups.get().is_empty()
                    fallback=move || view! {
                        <div class="empty-state">
                            <p>"No bookings yet."</p>
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| ctx.navigate(Page::Designs { search: String::new() })
                            >
                                "Browse Designs"
                            </Button>
                        </div>
                    }
                >
                    {move || groups.get().into_iter().map(|group| view! { <StatusGroup group=group /> }).collect_view()}
                </Show>
            </Show>
        </section>
    }
}

#[component]
fn StatusGroup(group: BookingGroup) -> impl IntoView {
    let title = format!("{} ({})", group.status, group.bookings.len());
    view! {
        <div class="bookings__group">
            <h2>{title}</h2>
            {group
                .bookings
                .into_iter()
                .map(|booking| view! { <BookingCard booking=booking /> })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn BookingCard(booking: Booking, #[prop(optional)] children: Option<Children>) -> impl IntoView {
    let unit = booking.unit.short_label();
    let measurements = booking
        .measurements
        .entries()
        .iter()
        .map(|m| {
            view! {
                <div class="booking-card__measurement">
                    <span class="muted">{m.name.clone()}</span>
                    <span>{format!("{} {}", m.value, unit)}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="booking-card">
            <Card>
                <div class="booking-card__header">
                    <div>
                        <h3>{booking.design_name.clone()}</h3>
                        <p class="muted">
                            {format!("Booking {} · Design {}", booking.id, booking.design_id)}
                        </p>
                    </div>
                    <span class=format!("badge {}", booking.status.badge_class())>
                        {booking.status.as_str()}
                    </span>
                </div>
                <div class="booking-card__customer">
                    <span>{booking.customer_name.clone()}</span>
                    <span>{booking.phone.clone()}</span>
                    <span class="muted">{format!("Booked {}", format_date(&booking.metadata.created_at))}</span>
                </div>
                <div class="booking-card__measurements">{measurements}</div>
                {(!booking.extra_requirements.trim().is_empty()).then(|| view! {
                    <p class="booking-card__extra">
                        <strong>"Special requirements: "</strong>
                        {booking.extra_requirements.clone()}
                    </p>
                })}
                {children.map(|c| c())}
            </Card>
        </div>
    }
}
