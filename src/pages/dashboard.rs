//! Admin Dashboard Page
//!
//! Aggregate metric cards, payroll charts, and the top-earner list. The
//! whole page renders from one snapshot; before the first fetch resolves
//! it shows zeros and empty charts.

use leptos::*;

use crate::api;
use crate::components::{BarChart, DoughnutChart, LineChart, MetricCard, Sidebar};
use crate::state::dashboard::format_amount;
use crate::state::{DashboardMetrics, ViewToken};

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let (metrics, set_metrics) = create_signal(DashboardMetrics::default());

    let token = ViewToken::new();

    // Fetch the snapshot once on mount
    let fetch_token = token.clone();
    create_effect(move |_| {
        let guard = fetch_token.issue();
        spawn_local(async move {
            match api::fetch_dashboard().await {
                Ok(snapshot) => {
                    if guard.is_current() {
                        set_metrics.set(snapshot);
                    }
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Error fetching dashboard data: {}", e).into());
                }
            }
        });
    });

    let unmount_token = token;
    on_cleanup(move || unmount_token.invalidate());

    let expense_series = Signal::derive(move || metrics.get().payroll_expense_series());
    let department_series = Signal::derive(move || metrics.get().department_payroll_series());
    let growth_series = Signal::derive(move || metrics.get().hire_growth_series());

    view! {
        <div class="flex min-h-screen">
            <Sidebar />

            <main class="flex-1 px-8 py-8 space-y-8">
                <h1 class="text-3xl font-bold">"Admin Dashboard"</h1>

                // Top row cards
                <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                    <MetricCard
                        label="Total Employees"
                        value=Signal::derive(move || metrics.get().total_employees.to_string())
                    />
                    <MetricCard
                        label="Pending Leave Requests"
                        value=Signal::derive(move || metrics.get().pending_leaves.to_string())
                    />
                    <MetricCard
                        label="Average Salary"
                        value=Signal::derive(move || format_amount(metrics.get().avg_salary))
                    />
                    <MetricCard
                        label="Bonuses & Incentives Paid"
                        value=Signal::derive(move || format_amount(metrics.get().bonuses_incentives_paid))
                    />
                </div>

                <div class="grid md:grid-cols-2 gap-8">
                    <section class="bg-gray-800 rounded-xl p-6">
                        <h3 class="text-xl font-semibold mb-4">"Employees by Department Payroll"</h3>
                        <DoughnutChart series=department_series />
                    </section>

                    <section class="bg-gray-800 rounded-xl p-6">
                        <h3 class="text-xl font-semibold mb-4">"Payroll Expenses"</h3>
                        <BarChart series=expense_series />
                    </section>
                </div>

                <section class="bg-gray-800 rounded-xl p-6">
                    <h3 class="text-xl font-semibold mb-4">"Employee Growth (Monthly)"</h3>
                    <LineChart series=growth_series />
                </section>

                <TopEarners metrics=metrics />
            </main>
        </div>
    }
}

/// Ranked list of the highest-paid employees
#[component]
fn TopEarners(metrics: ReadSignal<DashboardMetrics>) -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h3 class="text-xl font-semibold mb-4">"Top 5 Highest Salary Employees"</h3>

            <ul class="space-y-2">
                {move || {
                    let earners = metrics.get().highest_salary_employees;
                    if earners.is_empty() {
                        view! {
                            <li class="text-gray-400 text-sm">"No salary data yet."</li>
                        }.into_view()
                    } else {
                        earners.into_iter().map(|earner| {
                            view! {
                                <li class="flex justify-between border-b border-gray-700 last:border-0 py-2">
                                    <span>{earner.name}</span>
                                    <span class="font-semibold">
                                        {format!("${}", format_amount(earner.salary))}
                                    </span>
                                </li>
                            }
                        }).collect_view()
                    }
                }}
            </ul>
        </section>
    }
}
