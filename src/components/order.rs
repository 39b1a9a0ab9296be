use crate::api::StoreApi;
use crate::auth::use_auth;
use crate::config::use_config;
use crate::web::alert;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use storefront_shared::{PlaceOrderRequest, Product};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
enum QuantityError {
    #[error("quantity must be a number")]
    NotANumber,
    #[error("quantity is too large")]
    TooLarge,
}

/// 按 `parseInt` 的方式读取数量：取开头的十进制数字
fn parse_quantity(input: &str) -> Result<u32, QuantityError> {
    let digits: String = input
        .trim_start()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    if digits.is_empty() {
        return Err(QuantityError::NotANumber);
    }
    // 只剩纯数字，解析失败只可能是溢出
    digits.parse().map_err(|_| QuantityError::TooLarge)
}

fn product_label(product: &Product) -> String {
    format!("{} - ${}", product.name, product.price)
}

#[component]
pub fn OrderPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let config = use_config();

    let (products, set_products) = signal(Vec::<Product>::new());
    let (product_id, set_product_id) = signal(String::new());
    let (quantity, set_quantity) = signal(String::from("1"));

    // 挂载时加载一次商品列表，失败只记录日志
    {
        let api = StoreApi::browser(&config, auth.token_untracked());
        spawn_local(async move {
            match api.list_products().await {
                Ok(list) => set_products.set(list),
                Err(e) => log_error!("[Order] Failed to fetch products: {}", e),
            }
        });
    }

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let Some(username) = auth.username_untracked() else {
            alert("Please log in first.");
            return;
        };
        let count = match parse_quantity(&quantity.get_untracked()) {
            Ok(count) => count,
            Err(e) => {
                alert(&format!("Order creation failed: {}", e));
                return;
            }
        };
        let order = PlaceOrderRequest {
            username,
            product_id: product_id.get_untracked(),
            quantity: count,
        };

        let api = StoreApi::browser(&config, auth.token_untracked());
        spawn_local(async move {
            match api.place_order(&order).await {
                Ok(message) => {
                    alert(message.as_str());
                    router.go(AppRoute::OrderStatus);
                }
                Err(e) => {
                    log_error!("[Order] Order creation failed: {}", e);
                    alert(&format!("Order creation failed: {}", e.detail()));
                }
            }
        });
    };

    view! {
        <div>
            <h2>"Order Page"</h2>
            <form on:submit=on_submit>
                <div>
                    <label for="product">"Product:"</label>
                    <select
                        id="product"
                        on:change=move |ev| set_product_id.set(event_target_value(&ev))
                        prop:value=product_id
                        required
                    >
                        <option value="" disabled>"Select a product"</option>
                        <For
                            each=move || products.get()
                            key=|product| product.id.clone()
                            children=move |product: Product| {
                                view! {
                                    <option value=product.id.clone()>{product_label(&product)}</option>
                                }
                            }
                        />
                    </select>
                </div>
                <div>
                    <label for="quantity">"Quantity:"</label>
                    <input
                        id="quantity"
                        type="number"
                        min="1"
                        on:input=move |ev| set_quantity.set(event_target_value(&ev))
                        prop:value=quantity
                        required
                    />
                </div>
                <button type="submit">"Place Order"</button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantity_parses_leading_integer() {
        assert_eq!(parse_quantity("3"), Ok(3));
        assert_eq!(parse_quantity(" 12"), Ok(12));
        assert_eq!(parse_quantity("4.7"), Ok(4));
        assert_eq!(parse_quantity("7 units"), Ok(7));
        assert_eq!(parse_quantity("4294967295"), Ok(u32::MAX));
    }

    #[test]
    fn quantity_rejects_non_numbers() {
        assert_eq!(parse_quantity(""), Err(QuantityError::NotANumber));
        assert_eq!(parse_quantity("abc"), Err(QuantityError::NotANumber));
        assert_eq!(parse_quantity("-2"), Err(QuantityError::NotANumber));
    }

    #[test]
    fn oversized_quantity_is_reported_as_too_large() {
        let err = parse_quantity("99999999999").unwrap_err();
        assert_eq!(err, QuantityError::TooLarge);
        assert_eq!(err.to_string(), "quantity is too large");
    }

    #[test]
    fn product_label_matches_select_text() {
        let product = Product {
            id: "p1".to_string(),
            name: "Widget".to_string(),
            price: 10.0,
        };
        assert_eq!(product_label(&product), "Widget - $10");

        let cheap = Product {
            price: 2.5,
            ..product
        };
        assert_eq!(product_label(&cheap), "Widget - $2.5");
    }
}
