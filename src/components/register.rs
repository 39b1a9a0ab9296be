use crate::api::StoreApi;
use crate::config::use_config;
use crate::web::alert;
use crate::web::route::AppRoute;
use crate::web::router::{Link, use_router};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let router = use_router();
    let config = use_config();

    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let api = StoreApi::browser(&config, None);
        let username = username.get_untracked();
        let email = email.get_untracked();
        let password = password.get_untracked();

        spawn_local(async move {
            match api.register(username, email, password).await {
                Ok(message) => {
                    alert(message.as_str());
                    router.go(AppRoute::Login);
                }
                Err(e) => {
                    log_error!("[Register] Registration failed: {}", e);
                    alert(&format!("Registration failed: {}", e.detail()));
                }
            }
        });
    };

    view! {
        <div>
            <h2>"Register Page"</h2>
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
                    <label for="email">"Email:"</label>
                    <input
                        id="email"
                        type="email"
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                        prop:value=email
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
                <button type="submit">"Register"</button>
            </form>
            <p>
                "Already have an account? " <Link to=AppRoute::Login>"Log in"</Link>
            </p>
        </div>
    }
}
