//! Fetch State
//!
//! One reusable async-resource pattern shared by all pages: a fetch runs once
//! when the page mounts, lands in `Ready` or `Failed`, and a failed page can
//! be retried manually. `Ready` is terminal; there is no polling or
//! auto-refresh, and retry always re-issues the identical request.

use std::future::Future;
use std::rc::Rc;

use leptos::*;

/// Lifecycle of one page's data fetch.
#[derive(Clone, Debug, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }
}

/// Handle to a page's fetch state. Cheap to copy; signals are slotmap-backed.
pub struct FetchHandle<T: 'static> {
    pub state: RwSignal<FetchState<T>>,
    attempt: RwSignal<u32>,
}

impl<T: 'static> Clone for FetchHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for FetchHandle<T> {}

impl<T: 'static> FetchHandle<T> {
    /// Re-enter `Loading` and repeat the fetch. Only meaningful from
    /// `Failed`, which is the only state that renders a retry control.
    pub fn retry(&self) {
        self.attempt.update(|n| *n += 1);
    }
}

/// Register a fetch that runs on mount and on every retry.
///
/// In-flight requests are not cancelled if the page unmounts; the late
/// signal write lands on a disposed signal and is dropped.
pub fn create_fetch_state<T, Fut>(fetch: impl Fn() -> Fut + 'static) -> FetchHandle<T>
where
    T: Clone + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let state = create_rw_signal(FetchState::Loading);
    let attempt = create_rw_signal(0u32);
    let fetch = Rc::new(fetch);

    create_effect(move |_| {
        // Subscribe to the retry counter so retry() re-runs the effect
        attempt.get();
        state.set(FetchState::Loading);

        let fetch = Rc::clone(&fetch);
        spawn_local(async move {
            match fetch().await {
                Ok(value) => state.set(FetchState::Ready(value)),
                Err(message) => {
                    web_sys::console::error_1(&format!("Fetch failed: {}", message).into());
                    state.set(FetchState::Failed(message));
                }
            }
        });
    });

    FetchHandle { state, attempt }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_is_the_initial_shape() {
        let state: FetchState<Vec<u32>> = FetchState::Loading;
        assert!(state.is_loading());
        assert!(!FetchState::Ready(vec![1u32]).is_loading());
        assert!(!FetchState::<Vec<u32>>::Failed("boom".to_string()).is_loading());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    use leptos::{create_runtime, SignalGetUntracked};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    /// Let queued microtasks (the `spawn_local` futures) run to completion.
    async fn settle() {
        for _ in 0..10 {
            let _ = wasm_bindgen_futures::JsFuture::from(js_sys::Promise::resolve(
                &wasm_bindgen::JsValue::UNDEFINED,
            ))
            .await;
        }
    }

    #[wasm_bindgen_test]
    async fn failed_fetch_lands_in_failed_and_retry_repeats_the_request() {
        let runtime = create_runtime();

        let calls = Rc::new(Cell::new(0u32));
        let calls_in = Rc::clone(&calls);
        let handle = create_fetch_state(move || {
            let attempt = calls_in.get() + 1;
            calls_in.set(attempt);
            async move {
                if attempt == 1 {
                    Err("Network error: connection refused".to_string())
                } else {
                    Ok(attempt)
                }
            }
        });

        assert!(handle.state.get_untracked().is_loading());
        settle().await;

        // First attempt rejects: exactly one request, Failed with the message
        assert_eq!(calls.get(), 1);
        assert_eq!(
            handle.state.get_untracked(),
            FetchState::Failed("Network error: connection refused".to_string())
        );

        // Manual retry re-issues the identical request and recovers
        handle.retry();
        settle().await;

        assert_eq!(calls.get(), 2);
        assert_eq!(handle.state.get_untracked(), FetchState::Ready(2));

        runtime.dispose();
    }
}
