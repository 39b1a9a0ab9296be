//! 浏览器原生提示框

/// 弹出 `window.alert`，非浏览器环境下退化为日志输出。
pub fn alert(message: &str) {
    let shown = web_sys::window()
        .and_then(|w| w.alert_with_message(message).ok())
        .is_some();
    if !shown {
        log_info!("[Alert] {}", message);
    }
}
