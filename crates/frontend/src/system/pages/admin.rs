use leptos::prelude::*;
use thaw::*;

use crate::domain::a001_design::ui::details::DesignUploadForm;
use crate::domain::a002_booking::ui::manage::BookingStatusManager;
use crate::system::auth::guard::RequireAdmin;

#[derive(Clone, Copy, PartialEq, Eq)]
enum AdminTab {
    UploadDesigns,
    ManageBookings,
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let tab = RwSignal::new(AdminTab::UploadDesigns);

    let tab_button = move |target: AdminTab, label: &'static str| {
        view! {
            <Button
                appearance=move || {
                    if tab.get() == target {
                        ButtonAppearance::Primary
                    } else {
                        ButtonAppearance::Subtle
                    }
                }
                on_click=move |_| tab.set(target)
            >
                {label}
            </Button>
        }
    };

    view! {
        <section class="admin">
            <h1>"Admin Panel"</h1>
            <RequireAdmin>
                <div class="admin__tabs">
                    {tab_button(AdminTab::UploadDesigns, "Upload Designs")}
                    {tab_button(AdminTab::ManageBookings, "Manage Bookings")}
                </div>
                {move || match tab.get() {
                    AdminTab::UploadDesigns => view! { <DesignUploadForm /> }.into_any(),
                    AdminTab::ManageBookings => view! { <BookingStatusManager /> }.into_any(),
                }}
            </RequireAdmin>
        </section>
    }
}
