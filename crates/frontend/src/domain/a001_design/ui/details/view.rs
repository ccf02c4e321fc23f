use super::view_model::DesignUploadViewModel;
use leptos::prelude::*;
use thaw::*;

/// Admin form: name, category, optional image reference and a dynamic list
/// of required measurements
#[component]
pub fn DesignUploadForm() -> impl IntoView {
    let vm = DesignUploadViewModel::new();

    view! {
        <div class="details-container design-upload">
            <h2>"Upload New Design"</h2>

            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            {move || vm.notice.get().map(|n| view! { <div class="alert alert--success">{n}</div> })}

            <div class="form__group">
                <label for="design-name">"Design Name"</label>
                <input
                    id="design-name"
                    type="text"
                    placeholder="e.g. Elegant Evening Gown"
                    prop:value=move || vm.form.get().name
                    on:input=move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                />
            </div>

            <div class="form__group">
                <label for="design-category">"Category"</label>
                <input
                    id="design-category"
                    type="text"
                    placeholder="e.g. Evening Wear"
                    prop:value=move || vm.form.get().category
                    on:input=move |ev| vm.form.update(|f| f.category = event_target_value(&ev))
                />
            </div>

            <div class="form__group">
                <label for="design-image">"Image URL (optional)"</label>
                <input
                    id="design-image"
                    type="text"
                    placeholder="/placeholder.svg"
                    prop:value=move || vm.form.get().image.unwrap_or_default()
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        vm.form.update(|f| f.image = if value.is_empty() { None } else { Some(value) });
                    }
                />
            </div>

            <div class="form__group">
                <label>"Required Measurements"</label>
                {move || {
                    let rows = vm.form.get().measurements;
                    rows.into_iter()
                        .enumerate()
                        .map(|(idx, value)| view! {
                            <div class="measurement-row">
                                <input
                                    type="text"
                                    placeholder="e.g. Bust, Waist, Length"
                                    prop:value=value
                                    on:change=move |ev| vm.set_measurement(idx, event_target_value(&ev))
                                />
                                <Show when=move || vm.can_remove()>
                                    <Button
                                        appearance=ButtonAppearance::Subtle
                                        on_click=move |_| vm.remove_measurement(idx)
                                    >
                                        "Remove"
                                    </Button>
                                </Show>
                            </div>
                        })
                        .collect_view()
                }}
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.add_measurement()>
                    "+ Add Measurement"
                </Button>
            </div>

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.save_command()
                    disabled=Signal::derive(move || vm.saving.get())
                    loading=Signal::derive(move || vm.saving.get())
                >
                    "Upload Design"
                </Button>
            </div>
        </div>
    }
}
