use crate::api::StoreApi;
use crate::auth::use_auth;
use crate::config::use_config;
use crate::web::alert;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::fmt::Display;
use storefront_shared::Order;

/// 尚未由后端填充的字段显示为空
fn field_text<T: Display>(value: &Option<T>) -> String {
    value.as_ref().map(ToString::to_string).unwrap_or_default()
}

#[component]
fn OrderDetails(order: Order) -> impl IntoView {
    view! {
        <div>
            <h3>"Order Details"</h3>
            <p>"Order ID: " {order.id}</p>
            <p>"Product ID: " {order.product_id}</p>
            <p>"Quantity: " {order.quantity}</p>
            <p>"Total Amount: $" {field_text(&order.total_amount)}</p>
            <p>"Order Status: " {field_text(&order.order_status)}</p>
            <p>"Payment Status: " {field_text(&order.payment_status)}</p>
            <p>"Delivery Status: " {field_text(&order.delivery_status)}</p>
        </div>
    }
}

#[component]
pub fn OrderStatusPage() -> impl IntoView {
    let auth = use_auth();
    let config = use_config();

    let (order_id, set_order_id) = signal(String::new());
    let (order, set_order) = signal(Option::<Order>::None);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let api = StoreApi::browser(&config, auth.token_untracked());
        let id = order_id.get_untracked();

        spawn_local(async move {
            match api.get_order(id).await {
                Ok(found) => set_order.set(Some(found)),
                Err(e) => {
                    log_error!("[OrderStatus] Failed to fetch order status: {}", e);
                    alert("Failed to fetch order status");
                }
            }
        });
    };

    view! {
        <div>
            <h2>"Order Status Page"</h2>
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
                <button type="submit">"Check Status"</button>
            </form>
            {move || order.get().map(|order| view! { <OrderDetails order=order /> })}
        </div>
    }
}
