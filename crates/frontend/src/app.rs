use leptos::prelude::*;
use thaw::{ConfigProvider, ToasterProvider};

use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::system::auth::context::AuthProvider;

#[component]
pub fn App() -> impl IntoView {
    // Shell-wide UI state (sidebar visibility, open menu groups).
    provide_context(AppGlobalContext::new());

    view! {
        <ConfigProvider>
            <ToasterProvider>
                <AuthProvider>
                    <AppRoutes />
                </AuthProvider>
            </ToasterProvider>
        </ConfigProvider>
    }
}
