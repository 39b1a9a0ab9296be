use crate::auth::{sign_out, use_auth};
use crate::web::LocalStorage;
use crate::web::route::AppRoute;
use crate::web::router::Link;
use leptos::ev::MouseEvent;
use leptos::prelude::*;

/// 顶部导航栏，仅在存在会话时显示
#[component]
pub fn NavBar() -> impl IntoView {
    let auth = use_auth();

    let on_logout = move |_: MouseEvent| sign_out(&auth, &LocalStorage);

    view! {
        <Show when=move || auth.is_authenticated()>
            <nav>
                <Link to=AppRoute::Order>"Order"</Link> " | "
                <Link to=AppRoute::OrderStatus>"Order Status"</Link> " | "
                <Link to=AppRoute::CancelOrder>"Cancel Order"</Link> " | "
                <Link to=AppRoute::LinkBankAccount>"Link Bank Account"</Link> " | "
                <button on:click=on_logout>"Logout"</button>
            </nav>
        </Show>
    }
}
