//! 定时器封装模块

use gloo_timers::future::TimeoutFuture;
use std::time::Duration;

/// 异步等待指定时长（基于 `setTimeout`）
pub async fn sleep(duration: Duration) {
    let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
    TimeoutFuture::new(millis).await;
}
