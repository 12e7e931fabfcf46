//! Employees Page
//!
//! Employee roster plus the add-employee form. The page owns the list:
//! a successful create never patches it locally, it triggers a full
//! refetch instead.

use leptos::*;

use crate::api;
use crate::components::{EmployeeForm, Sidebar, TableSkeleton};
use crate::state::dashboard::format_amount;
use crate::state::{Employee, ViewToken};

/// Employees page component
#[component]
pub fn Employees() -> impl IntoView {
    let (employees, set_employees) = create_signal(Vec::<Employee>::new());
    let (loading, set_loading) = create_signal(true);
    let (show_form, set_show_form) = create_signal(false);

    let token = ViewToken::new();

    let refetch_token = token.clone();
    let refetch = move || {
        // A new fetch supersedes any still in flight
        refetch_token.invalidate();
        let guard = refetch_token.issue();
        spawn_local(async move {
            match api::fetch_employees().await {
                Ok(list) => {
                    if guard.is_current() {
                        set_employees.set(list);
                    }
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Error fetching employees data: {}", e).into());
                }
            }
            if guard.is_current() {
                set_loading.set(false);
            }
        });
    };

    let initial_fetch = refetch.clone();
    create_effect(move |_| initial_fetch());

    let unmount_token = token;
    on_cleanup(move || unmount_token.invalidate());

    view! {
        <div class="flex min-h-screen">
            <Sidebar />

            <main class="flex-1 px-8 py-8 space-y-6">
                <h1 class="text-3xl font-bold">"Employees"</h1>

                {move || {
                    if loading.get() {
                        view! { <TableSkeleton /> }.into_view()
                    } else {
                        view! { <EmployeeTable employees=employees /> }.into_view()
                    }
                }}

                <button
                    on:click=move |_| set_show_form.update(|shown| *shown = !*shown)
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                >
                    {move || if show_form.get() { "Hide Form" } else { "Add New Employee" }}
                </button>

                {move || {
                    if show_form.get() {
                        let on_created = refetch.clone();
                        view! { <EmployeeForm on_created=on_created /> }.into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}
            </main>
        </div>
    }
}

/// Roster table, one row per employee in server order
#[component]
fn EmployeeTable(employees: ReadSignal<Vec<Employee>>) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl overflow-x-auto">
            <table class="w-full text-sm">
                <thead>
                    <tr class="text-left text-gray-400 border-b border-gray-700">
                        <th class="px-4 py-3">"ID"</th>
                        <th class="px-4 py-3">"Name"</th>
                        <th class="px-4 py-3">"Email"</th>
                        <th class="px-4 py-3">"Phone"</th>
                        <th class="px-4 py-3">"Department"</th>
                        <th class="px-4 py-3">"Role"</th>
                        <th class="px-4 py-3">"Status"</th>
                        <th class="px-4 py-3">"Salary"</th>
                        <th class="px-4 py-3">"Hire Date"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let list = employees.get();
                        if list.is_empty() {
                            view! {
                                <tr>
                                    <td colspan="9" class="px-4 py-6 text-center text-gray-400">
                                        "No employees found."
                                    </td>
                                </tr>
                            }.into_view()
                        } else {
                            list.into_iter().map(|employee| {
                                view! { <EmployeeRow employee=employee /> }
                            }).collect_view()
                        }
                    }}
                </tbody>
            </table>
        </div>
    }
}

/// Single roster row
#[component]
fn EmployeeRow(employee: Employee) -> impl IntoView {
    let status = employee.status.clone().unwrap_or_default();
    let status_color = match status.as_str() {
        "active" => "text-green-400",
        "inactive" => "text-yellow-400",
        "terminated" => "text-red-400",
        _ => "text-gray-400",
    };

    view! {
        <tr class="border-b border-gray-700 last:border-0">
            <td class="px-4 py-3">{employee.employee_id}</td>
            <td class="px-4 py-3">{format!("{} {}", employee.first_name, employee.last_name)}</td>
            <td class="px-4 py-3">{employee.email}</td>
            <td class="px-4 py-3">{employee.phone_number.unwrap_or_default()}</td>
            <td class="px-4 py-3">{employee.department.unwrap_or_default()}</td>
            <td class="px-4 py-3">{employee.role.unwrap_or_default()}</td>
            <td class=format!("px-4 py-3 capitalize {}", status_color)>{status}</td>
            <td class="px-4 py-3">{format!("${}", format_amount(employee.salary))}</td>
            <td class="px-4 py-3">{employee.hire_date.to_string()}</td>
        </tr>
    }
}
