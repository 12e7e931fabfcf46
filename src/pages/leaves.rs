//! Leaves Page
//!
//! Reached from the sidebar; leave management has no admin surface here
//! yet, requests are only counted on the dashboard.

use leptos::*;

use crate::components::Sidebar;

/// Leaves page component
#[component]
pub fn Leaves() -> impl IntoView {
    view! {
        <div class="flex min-h-screen">
            <Sidebar />

            <main class="flex-1 px-8 py-8 space-y-6">
                <h1 class="text-3xl font-bold">"Leaves"</h1>
                <p class="text-gray-400">"No leave records to display."</p>
            </main>
        </div>
    }
}
