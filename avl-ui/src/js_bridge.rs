//! Browser interop for simulated async work.
//!
//! Every artificial delay in the app (export downloads, prediction runs,
//! toast dismissal) awaits `sleep_ms`, a `JsFuture` over a Promise resolved
//! by `window.setTimeout`. Tasks that spawn these sleeps are owned by their
//! component scope, so navigating away drops the pending timer with the
//! scope instead of firing into a dead page.

use wasm_bindgen_futures::JsFuture;

/// Await a browser `setTimeout` of the given duration.
pub async fn sleep_ms(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(window) = web_sys::window() {
            if let Err(e) =
                window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            {
                log::warn!("[AVL Debug] sleep_ms: setTimeout failed: {:?}", e);
            }
        }
    });
    let _ = JsFuture::from(promise).await;
}

/// Uniform random draw in [0, 1) for simulated failure rolls.
pub fn random() -> f64 {
    js_sys::Math::random()
}
