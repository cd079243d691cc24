pub mod footer;
pub mod header;
pub mod view_host;

use leptos::prelude::*;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |                 Header                   |
/// +------------------------------------------+
/// |   ViewHost (home | services | contact)   |
/// +------------------------------------------+
/// |                 Footer                   |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div class="site-layout">
            <header::Header />
            <main class="site-main">
                <view_host::ViewHost />
            </main>
            <footer::Footer />
        </div>
    }
}
