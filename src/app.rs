//! App Root Component
//!
//! Router and top-level layout.

use leptos::*;
use leptos_router::*;

use crate::pages::{Dashboard, Employees, Leaves, Login, Payroll};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white">
                <Routes>
                    <Route path="/" view=Login />
                    <Route path="/admin_dashboard" view=Dashboard />
                    <Route path="/employees" view=Employees />
                    <Route path="/payroll" view=Payroll />
                    <Route path="/leaves" view=Leaves />
                    <Route path="/*any" view=NotFound />
                </Routes>
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Back to Login"
            </A>
        </div>
    }
}
