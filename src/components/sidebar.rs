//! Sidebar Navigation
//!
//! Fixed admin navigation with the Earnest brand and section links.

use leptos::*;
use leptos_router::*;

/// Admin sidebar component
#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <aside class="w-56 shrink-0 bg-gray-800 border-r border-gray-700 px-4 py-6">
            <h2 class="text-2xl font-bold text-white px-4 mb-8">"Earnest"</h2>
            <nav>
                <ul class="space-y-1">
                    <SidebarLink href="/admin_dashboard" label="Dashboard" />
                    <SidebarLink href="/employees" label="Employees" />
                    <SidebarLink href="/payroll" label="Payroll" />
                    <SidebarLink href="/leaves" label="Leaves" />
                </ul>
            </nav>
        </aside>
    }
}

/// Individual sidebar link
#[component]
fn SidebarLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <li>
            <A
                href=href
                class="block px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
                active_class="bg-gray-700 text-white"
            >
                {label}
            </A>
        </li>
    }
}
