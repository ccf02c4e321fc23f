use super::view_model::{BookDesignViewModel, DesignState};
use contracts::domain::a001_design::aggregate::Design;
use contracts::enums::MeasurementUnit;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a001_design::ui::list::DesignCard;
use crate::layout::global_context::{use_app_context, Page};

/// Booking screen for one design: customer details, unit, measurements
/// generated from the design, special requirements
#[component]
pub fn BookDesign(#[prop(into)] design_id: String) -> impl IntoView {
    let ctx = use_app_context();
    let vm = BookDesignViewModel::new();
    vm.load(design_id);

    let back_to_catalog = move |_| ctx.navigate(Page::Designs { search: String::new() });

    view! {
        <section class="page book">
            {move || match vm.design.get() {
                DesignState::Loading => view! { <p class="muted">"Loading design..."</p> }.into_any(),
                DesignState::Failed(e) => view! { <div class="alert alert--error">{e}</div> }.into_any(),
                DesignState::NotFound => view! {
                    <div class="empty-state">
                        <h2>"Design not found"</h2>
                        <Button appearance=ButtonAppearance::Primary on_click=back_to_catalog>
                            "Back to Designs"
                        </Button>
                    </div>
                }
                .into_any(),
                DesignState::Ready(design) => view! {
                    <Show
                        when=move || vm.submitted.get().is_none()
                        fallback=move || view! { <BookingConfirmation vm=vm /> }
                    >
                        <BookingForm vm=vm design=design.clone() />
                    </Show>
                }
                .into_any(),
            }}
        </section>
    }
}

#[component]
fn BookingConfirmation(vm: BookDesignViewModel) -> impl IntoView {
    let ctx = use_app_context();
    let summary = move || {
        vm.submitted.get().map(|b| {
            format!(
                "Booking {} for {} has been submitted. We will contact you at {}.",
                b.id, b.design_name, b.phone
            )
        })
    };

    view! {
        <div class="alert alert--success">{summary}</div>
        <Button appearance=ButtonAppearance::Primary on_click=move |_| ctx.navigate(Page::Bookings)>
            "View Bookings"
        </Button>
    }
}

#[component]
fn BookingForm(vm: BookDesignViewModel, design: Design) -> impl IntoView {
    let unit_label = move || vm.unit().short_label();
    let fields = design.measurements.clone();

    let text_field = move |id: &'static str,
                           label: &'static str,
                           placeholder: &'static str,
                           get: fn(&contracts::domain::a002_booking::draft::BookingDraft) -> String,
                           set: fn(&mut contracts::domain::a002_booking::draft::BookingDraft, String)| {
        view! {
            <div class="form__group">
                <label for=id>{label}</label>
                <input
                    id=id
                    type="text"
                    placeholder=placeholder
                    prop:value=move || vm.draft.with(|d| d.as_ref().map(get).unwrap_or_default())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        vm.update_draft(|d| set(d, value));
                    }
                />
            </div>
        }
    };

    view! {
        <div class="book__layout">
            <DesignCard design=design>
                <span></span>
            </DesignCard>

            <form
                class="book__form"
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    vm.submit_command();
                }
            >
                <h2>"Your Details"</h2>

                {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                {text_field("customer-name", "Full Name *", "Your name", |d| d.customer_name.clone(), |d, v| d.customer_name = v)}
                {text_field("phone", "Phone Number *", "+1234567890", |d| d.phone.clone(), |d, v| d.phone = v)}

                <div class="form__group">
                    <label for="unit">"Measurement Unit"</label>
                    <select
                        id="unit"
                        prop:value=move || vm.unit().code()
                        on:change=move |ev| vm.set_unit(&event_target_value(&ev))
                    >
                        {MeasurementUnit::all()
                            .into_iter()
                            .map(|u| view! { <option value=u.code()>{u.display_name()}</option> })
                            .collect_view()}
                    </select>
                </div>

                <h3>"Measurements"</h3>
                <div class="book__measurements">
                    {fields
                        .into_iter()
                        .map(|name| {
                            let label_name = name.clone();
                            let value_name = name.clone();
                            view! {
                                <div class="form__group">
                                    <label>{move || format!("{} ({}) *", label_name, unit_label())}</label>
                                    <input
                                        type="number"
                                        step="0.1"
                                        placeholder="0.0"
                                        prop:value=move || vm.draft.with(|d| {
                                            d.as_ref()
                                                .and_then(|d| d.measurements.get(&value_name).map(str::to_string))
                                                .unwrap_or_default()
                                        })
                                        on:input=move |ev| vm.set_measurement(&name, event_target_value(&ev))
                                    />
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="form__group">
                    <label for="extra">"Special Requirements"</label>
                    <textarea
                        id="extra"
                        rows="3"
                        placeholder="Fabric preferences, colour, deadline..."
                        prop:value=move || vm.draft.with(|d| d.as_ref().map(|d| d.extra_requirements.clone()).unwrap_or_default())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.update_draft(|d| d.extra_requirements = value);
                        }
                    />
                </div>

                <button
                    type="submit"
                    class="btn btn--primary"
                    disabled=move || vm.submitting.get()
                >
                    {move || if vm.submitting.get() { "Submitting..." } else { "Submit Booking" }}
                </button>
            </form>
        </div>
    }
}
