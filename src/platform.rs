//! Runtime shims that differ between the wasm client and the native server.

use std::time::Duration;

/// Wait for `duration` on whichever event loop we run on.
#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    use wasm_bindgen::JsValue;

    let ms = duration.as_millis().min(i32::MAX as u128) as i32;
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let scheduled = web_sys::window().map(|window| {
            window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
        });
        if !matches!(scheduled, Some(Ok(_))) {
            let _ = resolve.call0(&JsValue::NULL);
        }
    });
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}

#[cfg(all(not(target_arch = "wasm32"), feature = "server"))]
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

// No timer without a runtime; resolve immediately.
#[cfg(all(not(target_arch = "wasm32"), not(feature = "server")))]
pub async fn sleep(duration: Duration) {
    let _ = duration;
}
