//! Payroll Page
//!
//! Read-only payroll run listing in server order.

use leptos::*;

use crate::api;
use crate::components::{Sidebar, TableSkeleton};
use crate::state::dashboard::format_amount;
use crate::state::{PayrollRecord, ViewToken};

/// Payroll page component
#[component]
pub fn Payroll() -> impl IntoView {
    let (records, set_records) = create_signal(Vec::<PayrollRecord>::new());
    let (loading, set_loading) = create_signal(true);

    let token = ViewToken::new();

    let fetch_token = token.clone();
    create_effect(move |_| {
        let guard = fetch_token.issue();
        spawn_local(async move {
            match api::fetch_payroll().await {
                Ok(list) => {
                    if guard.is_current() {
                        set_records.set(list);
                    }
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Error fetching payroll data: {}", e).into());
                }
            }
            if guard.is_current() {
                set_loading.set(false);
            }
        });
    });

    let unmount_token = token;
    on_cleanup(move || unmount_token.invalidate());

    view! {
        <div class="flex min-h-screen">
            <Sidebar />

            <main class="flex-1 px-8 py-8 space-y-6">
                <h1 class="text-3xl font-bold">"Payroll List"</h1>

                {move || {
                    if loading.get() {
                        view! { <TableSkeleton /> }.into_view()
                    } else {
                        view! { <PayrollTable records=records /> }.into_view()
                    }
                }}
            </main>
        </div>
    }
}

/// Payroll table, one row per record in server order
#[component]
fn PayrollTable(records: ReadSignal<Vec<PayrollRecord>>) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl overflow-x-auto">
            <table class="w-full text-sm">
                <thead>
                    <tr class="text-left text-gray-400 border-b border-gray-700">
                        <th class="px-4 py-3">"Employee ID"</th>
                        <th class="px-4 py-3">"Employee Name"</th>
                        <th class="px-4 py-3">"Role"</th>
                        <th class="px-4 py-3">"Department"</th>
                        <th class="px-4 py-3">"Net Salary"</th>
                        <th class="px-4 py-3">"Pay Date"</th>
                        <th class="px-4 py-3">"Payslip"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let list = records.get();
                        if list.is_empty() {
                            view! {
                                <tr>
                                    <td colspan="7" class="px-4 py-6 text-center text-gray-400">
                                        "No payroll records found."
                                    </td>
                                </tr>
                            }.into_view()
                        } else {
                            list.into_iter().map(|record| {
                                view! { <PayrollRow record=record /> }
                            }).collect_view()
                        }
                    }}
                </tbody>
            </table>
        </div>
    }
}

/// Single payroll row
#[component]
fn PayrollRow(record: PayrollRecord) -> impl IntoView {
    view! {
        <tr class="border-b border-gray-700 last:border-0">
            <td class="px-4 py-3">{record.employee_id}</td>
            <td class="px-4 py-3">{record.employee_name}</td>
            <td class="px-4 py-3">{record.role.unwrap_or_default()}</td>
            <td class="px-4 py-3">{record.department.unwrap_or_default()}</td>
            <td class="px-4 py-3">{format!("${}", format_amount(record.net_salary))}</td>
            <td class="px-4 py-3">{record.pay_date.to_string()}</td>
            <td class="px-4 py-3">
                {match record.payslip_pdf {
                    Some(url) => view! {
                        <a
                            href=url
                            download=""
                            class="text-primary-400 hover:text-primary-300 underline"
                        >
                            "Download"
                        </a>
                    }.into_view(),
                    None => view! {
                        <span class="text-gray-500">"Not Generated"</span>
                    }.into_view(),
                }}
            </td>
        </tr>
    }
}
