//! Loading Component

use leptos::*;

/// Skeleton rows shown while a table fetch is in flight
#[component]
pub fn TableSkeleton(
    #[prop(default = 5)]
    rows: usize,
) -> impl IntoView {
    view! {
        <div class="space-y-2 animate-pulse">
            {(0..rows).map(|_| view! {
                <div class="bg-gray-800 rounded h-10" />
            }).collect_view()}
        </div>
    }
}
