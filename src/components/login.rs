use crate::api::StoreApi;
use crate::auth::{sign_in, use_auth};
use crate::config::use_config;
use crate::web::LocalStorage;
use crate::web::route::AppRoute;
use crate::web::router::{Link, use_router};
use crate::web::sleep;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

const FALLBACK_ERROR: &str = "Invalid credentials";

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let config = use_config();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        set_is_submitting.set(true);
        set_error_msg.set(None);

        let api = StoreApi::browser(&config, None);
        let delay = config.login_redirect_delay;
        let username = username.get_untracked();
        let password = password.get_untracked();

        spawn_local(async move {
            match sign_in(&api, &LocalStorage, username, password).await {
                Ok(session) => {
                    sleep(delay).await;
                    set_is_submitting.set(false);
                    auth.set_session(Some(session));
                    router.go(AppRoute::Order);
                }
                Err(e) => {
                    log_error!("[Login] Login failed: {}", e);
                    set_error_msg.set(Some(
                        e.server_message()
                            .unwrap_or_else(|| FALLBACK_ERROR.to_string()),
                    ));
                    set_is_submitting.set(false);
                }
            }
        });
    };

    view! {
        <div>
            <h2>"Login Page"</h2>
            <Show when=move || error_msg.get().is_some()>
                <p style="color: red">{move || error_msg.get().unwrap_or_default()}</p>
            </Show>
            <form on:submit=on_submit>
                <div>
                    <label for="username">"Username:"</label>
                    <input
                        id="username"
                        type="text"
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                        prop:value=username
                        required
                    />
                </div>
                <div>
                    <label for="password">"Password:"</label>
                    <input
                        id="password"
                        type="password"
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        prop:value=password
                        required
                    />
                </div>
                <button type="submit" disabled=move || is_submitting.get()>
                    {move || if is_submitting.get() { "Logging in..." } else { "Login" }}
                </button>
            </form>
            <p>
                "New user? " <Link to=AppRoute::Register>"Register here"</Link>
            </p>
        </div>
    }
}
