use contracts::domain::a002_booking::aggregate::{Booking, UpdateStatusDto};
use contracts::enums::BookingStatus;
use gloo_net::http::Request;
use leptos::prelude::*;

use super::list::{fetch_bookings, BookingCard};
use crate::shared::api_utils::{api_url, bearer, error_message};

/// Change the status of a booking (admin token required)
pub async fn update_status(booking_id: &str, status: BookingStatus) -> Result<Booking, String> {
    let url = api_url(&format!(
        "/api/booking/{}/status",
        urlencoding::encode(booking_id)
    ));
    let mut request = Request::put(&url);
    if let Some(auth) = bearer() {
        request = request.header("Authorization", &auth);
    }
    let response = request
        .json(&UpdateStatusDto {
            status: status.as_str().to_string(),
        })
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }
    response
        .json::<Booking>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Status currently stored for `id`, which is what its selector shows
fn stored_status(list: &[Booking], id: &str) -> Option<BookingStatus> {
    list.iter().find(|b| b.id.as_str() == id).map(|b| b.status)
}

/// Fold the server's answer into the list. Returns the error to show; on
/// failure the list keeps the stored status.
fn apply_update(list: &mut [Booking], result: Result<Booking, String>) -> Option<String> {
    match result {
        Ok(updated) => {
            if let Some(slot) = list.iter_mut().find(|b| b.id == updated.id) {
                *slot = updated;
            }
            None
        }
        Err(e) => Some(e),
    }
}

/// Admin list of bookings with a status selector on each
#[component]
pub fn BookingStatusManager() -> impl IntoView {
    let bookings = RwSignal::new(Vec::<Booking>::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let updating = RwSignal::new(Option::<String>::None);

    wasm_bindgen_futures::spawn_local(async move {
        match fetch_bookings().await {
            Ok(list) => bookings.set(list),
            Err(e) => set_error.set(Some(e)),
        }
    });

    let change_status = move |booking_id: String, raw: String| {
        if updating.get_untracked().is_some() {
            return;
        }
        let Ok(status) = raw.parse::<BookingStatus>() else {
            set_error.set(Some(format!("Unknown status: {}", raw)));
            bookings.update(|_| ());
            return;
        };
        set_error.set(None);
        updating.set(Some(booking_id.clone()));
        wasm_bindgen_futures::spawn_local(async move {
            let result = update_status(&booking_id, status).await;
            // Notify even on failure: selectors re-read the stored status
            let mut failure = None;
            bookings.update(|list| failure = apply_update(list, result));
            set_error.set(failure);
            updating.set(None);
        });
    };

    view! {
        <div class="booking-manager">
            <h2>"Manage Bookings"</h2>
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            <Show
                when=move || !bookings.with(|b| b.is_empty())
                fallback=|| view! { <p class="muted">"No bookings yet."</p> }
            >
                <For
                    each=move || bookings.get()
                    key=|b| (b.id.clone(), b.status)
                    children=move |booking: Booking| {
                        let booking_id = booking.id.as_str().to_string();
                        let busy_id = booking_id.clone();
                        let shown_id = booking_id.clone();
                        let current = booking.status;
                        view! {
                            <BookingCard booking=booking>
                                <div class="form__group booking-manager__status">
                                    <label>"Status"</label>
                                    <select
                                        prop:value=move || {
                                            bookings
                                                .with(|list| stored_status(list, &shown_id))
                                                .unwrap_or(current)
                                                .as_str()
                                        }
                                        disabled=move || updating.get().as_deref() == Some(busy_id.as_str())
                                        on:change=move |ev| change_status(booking_id.clone(), event_target_value(&ev))
                                    >
                                        {BookingStatus::all()
                                            .into_iter()
                                            .map(|s| view! {
                                                <option value=s.as_str() selected=s == current>{s.as_str()}</option>
                                            })
                                            .collect_view()}
                                    </select>
                                </div>
                            </BookingCard>
                        }
                    }
                />
            </Show>
        </div>
    }
}
