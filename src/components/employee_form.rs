//! Add-Employee Form
//!
//! Collects a new employee record into an [`EmployeeDraft`] and posts it.
//! Field validation is left to native input constraints; the submit gate
//! blocks duplicate submission while a request is in flight. On success
//! the draft resets and the owning list refetches through `on_created`;
//! on failure the draft is kept so the user can retry without re-entering
//! data.

use leptos::*;

use crate::api;
use crate::state::{EmployeeDraft, SubmitPhase};

/// Add-employee form component
#[component]
pub fn EmployeeForm(on_created: impl Fn() + 'static + Clone) -> impl IntoView {
    let draft = create_rw_signal(EmployeeDraft::default());
    let (phase, set_phase) = create_signal(SubmitPhase::Idle);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        if phase.get().is_submitting() {
            return;
        }
        set_phase.set(SubmitPhase::Submitting);

        // Freeze the draft for this one request
        let body = draft.get_untracked();

        let on_created = on_created.clone();
        spawn_local(async move {
            match api::create_employee(&body).await {
                Ok(_created) => {
                    draft.set(EmployeeDraft::default());
                    on_created();
                }
                Err(e) => {
                    // Draft stays untouched so the entry can be retried
                    web_sys::console::error_1(&format!("Error adding employee: {}", e).into());
                }
            }
            set_phase.set(SubmitPhase::Idle);
        });
    };

    view! {
        <div class="bg-gray-800 rounded-xl p-6">
            <h3 class="text-xl font-semibold mb-4">"Add New Employee"</h3>

            <form on:submit=on_submit class="grid md:grid-cols-2 gap-4">
                <DraftInput
                    label="First Name"
                    required=true
                    value=Signal::derive(move || draft.with(|d| d.first_name.clone()))
                    on_input=move |v| draft.update(|d| d.first_name = v)
                />
                <DraftInput
                    label="Last Name"
                    required=true
                    value=Signal::derive(move || draft.with(|d| d.last_name.clone()))
                    on_input=move |v| draft.update(|d| d.last_name = v)
                />
                <DraftInput
                    label="Email"
                    input_type="email"
                    required=true
                    value=Signal::derive(move || draft.with(|d| d.email.clone()))
                    on_input=move |v| draft.update(|d| d.email = v)
                />
                <DraftInput
                    label="Phone Number"
                    value=Signal::derive(move || draft.with(|d| d.phone_number.clone()))
                    on_input=move |v| draft.update(|d| d.phone_number = v)
                />
                <DraftInput
                    label="Address"
                    value=Signal::derive(move || draft.with(|d| d.address.clone()))
                    on_input=move |v| draft.update(|d| d.address = v)
                />
                <DraftInput
                    label="Department"
                    value=Signal::derive(move || draft.with(|d| d.department.clone()))
                    on_input=move |v| draft.update(|d| d.department = v)
                />
                <DraftInput
                    label="Role"
                    value=Signal::derive(move || draft.with(|d| d.role.clone()))
                    on_input=move |v| draft.update(|d| d.role = v)
                />

                // Status is constrained to the three employment states
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Status"</label>
                    <select
                        required=true
                        on:change=move |ev| draft.update(|d| d.status = event_target_value(&ev))
                        prop:value=move || draft.with(|d| d.status.clone())
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    >
                        <option value="">"Select Status"</option>
                        <option value="active">"Active"</option>
                        <option value="inactive">"Inactive"</option>
                        <option value="terminated">"Terminated"</option>
                    </select>
                </div>

                <DraftInput
                    label="Salary"
                    input_type="number"
                    required=true
                    value=Signal::derive(move || draft.with(|d| d.salary.clone()))
                    on_input=move |v| draft.update(|d| d.salary = v)
                />
                <DraftInput
                    label="Hire Date"
                    input_type="date"
                    required=true
                    value=Signal::derive(move || draft.with(|d| d.hire_date.clone()))
                    on_input=move |v| draft.update(|d| d.hire_date = v)
                />

                <div class="md:col-span-2">
                    <button
                        type="submit"
                        disabled=move || phase.get().is_submitting()
                        class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               disabled:cursor-not-allowed rounded-lg py-3 font-semibold
                               transition-colors"
                    >
                        {move || if phase.get().is_submitting() { "Adding..." } else { "Add Employee" }}
                    </button>
                </div>
            </form>
        </div>
    }
}

/// Labelled input bound to one draft field
#[component]
fn DraftInput(
    label: &'static str,
    #[prop(default = "text")]
    input_type: &'static str,
    #[prop(default = false)]
    required: bool,
    #[prop(into)]
    value: Signal<String>,
    on_input: impl Fn(String) + 'static,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">{label}</label>
            <input
                type=input_type
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input(event_target_value(&ev))
                class="w-full bg-gray-700 rounded-lg px-4 py-3
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            />
        </div>
    }
}
