use crate::layout::notifications::NotificationService;
use crate::layout::ModalService;
use crate::routes::routes::AppRoutes;
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide ModalService for centralized modal management
    provide_context(ModalService::new());

    // Transient messages for admin mutations
    provide_context(NotificationService::new());

    view! {
        <AuthProvider>
            <AppRoutes />
        </AuthProvider>
    }
}
