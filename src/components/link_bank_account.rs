use crate::api::StoreApi;
use crate::auth::{Session, sign_out, use_auth};
use crate::config::use_config;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use crate::web::{LocalStorage, alert};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use storefront_shared::BankAccountLink;

const LOGIN_REQUIRED: &str = "Please log in first.";

/// 只有同时持有用户名和 token 的会话才能发起绑定请求
fn authorized(session: Option<Session>) -> Option<(String, String)> {
    let session = session?;
    let token = session.token?;
    Some((session.username, token))
}

#[component]
pub fn LinkBankAccountPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let config = use_config();

    let (bank_customer_id, set_bank_customer_id) = signal(String::new());
    let (bank_account_id, set_bank_account_id) = signal(String::new());

    // 挂载后检查会话；缺少 token 的残缺会话会被清除，以便登录页可以正常显示
    Effect::new(move |_| {
        if authorized(auth.state.get_untracked()).is_none() {
            alert(LOGIN_REQUIRED);
            sign_out(&auth, &LocalStorage);
            router.go(AppRoute::Login);
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let Some((username, token)) = authorized(auth.state.get_untracked()) else {
            alert(LOGIN_REQUIRED);
            router.go(AppRoute::Login);
            return;
        };
        let link = BankAccountLink {
            bank_customer_id: bank_customer_id.get_untracked(),
            bank_account_id: bank_account_id.get_untracked(),
        };

        let api = StoreApi::browser(&config, Some(token));
        spawn_local(async move {
            match api.link_bank_account(username, link).await {
                Ok(_) => {
                    alert("Bank account linked successfully!");
                    router.go(AppRoute::Order);
                }
                Err(e) => {
                    log_error!("[LinkBankAccount] Failed to link bank account: {}", e);
                    alert(&format!("Failed to link bank account: {}", e.detail()));
                }
            }
        });
    };

    view! {
        <div>
            <h2>"Link Bank Account"</h2>
            <form on:submit=on_submit>
                <div>
                    <label for="bank-customer-id">"Bank Customer ID:"</label>
                    <input
                        id="bank-customer-id"
                        type="text"
                        on:input=move |ev| set_bank_customer_id.set(event_target_value(&ev))
                        prop:value=bank_customer_id
                        required
                    />
                </div>
                <div>
                    <label for="bank-account-id">"Bank Account ID:"</label>
                    <input
                        id="bank-account-id"
                        type="text"
                        on:input=move |ev| set_bank_account_id.set(event_target_value(&ev))
                        prop:value=bank_account_id
                        required
                    />
                </div>
                <button type="submit">"Link Account"</button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_username_and_token() {
        assert_eq!(authorized(None), None);
        assert_eq!(
            authorized(Some(Session {
                username: "alice".to_string(),
                token: None,
            })),
            None
        );
        assert_eq!(
            authorized(Some(Session {
                username: "alice".to_string(),
                token: Some("t".to_string()),
            })),
            Some(("alice".to_string(), "t".to_string()))
        );
    }
}
