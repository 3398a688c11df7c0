//! Async delays that work on every renderer. Desktop and mobile run Dioxus on
//! tokio; the web renderer has no tokio runtime, so it waits on the browser's
//! `setTimeout` instead.

use std::time::Duration;

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    let Some(window) = web_sys::window() else {
        tracing::warn!("no window; delay skipped");
        return;
    };
    let millis = i32::try_from(duration.as_millis()).unwrap_or(i32::MAX);
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Err(err) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            &resolve,
            millis,
        ) {
            tracing::warn!(error = ?err, "setTimeout failed");
            let _ = resolve.call0(&wasm_bindgen::JsValue::NULL);
        }
    });
    if let Err(err) = wasm_bindgen_futures::JsFuture::from(promise).await {
        tracing::warn!(error = ?err, "timer promise rejected");
    }
}
