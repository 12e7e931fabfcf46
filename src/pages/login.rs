//! Login Page
//!
//! Authenticates against the API and navigates to the server-supplied
//! destination route. This is the only flow that surfaces failures to the
//! user instead of just the console.

use leptos::*;
use leptos_router::use_navigate;

use crate::api;
use crate::api::{ApiError, LoginResponse};
use crate::state::SubmitPhase;

/// Login page component
#[component]
pub fn Login() -> impl IntoView {
    let (username, set_username) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);
    let (phase, set_phase) = create_signal(SubmitPhase::Idle);

    let navigate = use_navigate();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        if phase.get().is_submitting() {
            return;
        }
        set_error.set(None);
        set_phase.set(SubmitPhase::Submitting);

        let user = username.get();
        let pass = password.get();
        let navigate = navigate.clone();
        spawn_local(async move {
            match login_destination(api::login(&user, &pass).await) {
                Ok(destination) => navigate(&destination, Default::default()),
                Err(message) => set_error.set(Some(message)),
            }
            set_phase.set(SubmitPhase::Idle);
        });
    };

    view! {
        <div class="min-h-screen flex items-center justify-center">
            <div class="bg-gray-800 rounded-xl p-8 w-full max-w-sm">
                <h2 class="text-2xl font-bold mb-6 text-center">"Login"</h2>

                <form on:submit=on_submit class="space-y-4">
                    <input
                        type="text"
                        placeholder="username"
                        required=true
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                    <input
                        type="password"
                        placeholder="password"
                        required=true
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />

                    {move || error.get().map(|message| view! {
                        <p class="text-red-400 text-sm">{message}</p>
                    })}

                    <button
                        type="submit"
                        disabled=move || phase.get().is_submitting()
                        class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               rounded-lg py-3 font-semibold transition-colors"
                    >
                        {move || if phase.get().is_submitting() { "Signing in..." } else { "Login" }}
                    </button>
                </form>
            </div>
        </div>
    }
}

/// Resolve a login attempt to the route to navigate to, or the error text
/// to display.
///
/// A success without a destination route is its own failure mode,
/// distinct from rejected credentials.
fn login_destination(result: Result<LoginResponse, ApiError>) -> Result<String, String> {
    match result {
        Ok(response) => match response.dashboard_url {
            Some(url) if !url.is_empty() => Ok(url),
            _ => Err("No dashboard URL provided for this role.".to_string()),
        },
        Err(error) => Err(error
            .server_message()
            .map(str::to_string)
            .unwrap_or_else(|| "Invalid username or password".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn success(dashboard_url: Option<&str>) -> Result<LoginResponse, ApiError> {
        Ok(LoginResponse {
            message: Some("Login successful".to_string()),
            role: Some("admin".to_string()),
            dashboard_url: dashboard_url.map(str::to_string),
        })
    }

    #[test]
    fn navigates_to_the_server_supplied_destination() {
        assert_eq!(
            login_destination(success(Some("/admin_dashboard"))),
            Ok("/admin_dashboard".to_string())
        );
    }

    #[test]
    fn missing_destination_is_its_own_failure() {
        assert_eq!(
            login_destination(success(None)),
            Err("No dashboard URL provided for this role.".to_string())
        );
    }

    #[test]
    fn rejection_shows_the_server_message() {
        let rejected = Err(ApiError::Server {
            status: 401,
            message: Some("Invalid credentials".to_string()),
        });
        assert_eq!(login_destination(rejected), Err("Invalid credentials".to_string()));
    }

    #[test]
    fn failure_without_a_message_falls_back() {
        let dropped = Err(ApiError::Network("connection refused".to_string()));
        assert_eq!(
            login_destination(dropped),
            Err("Invalid username or password".to_string())
        );
    }
}
