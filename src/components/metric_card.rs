//! Metric Card Component
//!
//! Displays one aggregate number with its caption.

use leptos::*;

/// Metric card component
#[component]
pub fn MetricCard(
    /// Caption under the number
    label: &'static str,
    /// Formatted value to display
    #[prop(into)]
    value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700 text-center">
            <div class="text-3xl font-bold">{move || value.get()}</div>
            <div class="text-gray-400 text-sm mt-2">{label}</div>
        </div>
    }
}
