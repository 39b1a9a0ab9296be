use crate::api::StoreApi;
use crate::auth::use_auth;
use crate::config::use_config;
use crate::web::alert;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn CancelOrderPage() -> impl IntoView {
    let auth = use_auth();
    let config = use_config();

    let (order_id, set_order_id) = signal(String::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let api = StoreApi::browser(&config, auth.token_untracked());
        let id = order_id.get_untracked();

        spawn_local(async move {
            match api.cancel_order(id).await {
                Ok(message) => alert(message.as_str()),
                Err(e) => {
                    log_error!("[CancelOrder] Failed to cancel order: {}", e);
                    alert(&format!("Failed to cancel order: {}", e.detail()));
                }
            }
        });
    };

    view! {
        <div>
            <h2>"Cancel Order Page"</h2>
            <form on:submit=on_submit>
                <div>
                    <label for="order-id">"Order ID:"</label>
                    <input
                        id="order-id"
                        type="text"
                        on:input=move |ev| set_order_id.set(event_target_value(&ev))
                        prop:value=order_id
                        required
                    />
                </div>
                <button type="submit">"Cancel Order"</button>
            </form>
        </div>
    }
}
