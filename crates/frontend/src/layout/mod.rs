pub mod global_context;
pub mod sidebar;
pub mod top_header;

use leptos::prelude::*;

use sidebar::Sidebar;
use top_header::TopHeader;

/// Main application shell.
///
/// Layout structure:
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |  Sidebar  |         Content              |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: ChildrenFn) -> impl IntoView {
    let ctx = use_context::<global_context::AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body">
                <div class=move || {
                    if ctx.left_open.get() {
                        "app-sidebar"
                    } else {
                        "app-sidebar app-sidebar--collapsed"
                    }
                }>
                    <Sidebar />
                </div>

                <div class="app-main">
                    {children()}
                </div>
            </div>
        </div>
    }
}
