//! `localStorage` adapter
//!
//! Implements [`KeyValueStore`] on top of `window.localStorage`. Every write
//! dispatches a `local-storage` custom event carrying the key, so contexts
//! mounted in the same page can re-read their entry. The native `storage`
//! event covers writes from other tabs.

use leptos::prelude::*;
use lib_core::store::{KeyValueStore, StorageKey, STORAGE_CHANGE_EVENT};
use lib_core::{CoreError, Result};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CustomEvent, CustomEventInit, StorageEvent};

/// Fired by the browser when another tab writes to `localStorage`
const CROSS_TAB_EVENT: &str = "storage";

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Result<web_sys::Storage> {
        web_sys::window()
            .ok_or_else(|| CoreError::Storage("no window".to_string()))?
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| CoreError::Storage("localStorage unavailable".to_string()))
    }
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Self::storage()?.get_item(key).map_err(js_error)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        Self::storage()?.set_item(key, value).map_err(js_error)?;
        notify_change(key);
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        Self::storage()?.remove_item(key).map_err(js_error)?;
        notify_change(key);
        Ok(())
    }
}

fn js_error(err: JsValue) -> CoreError {
    CoreError::Storage(format!("{:?}", err))
}

fn notify_change(key: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let init = CustomEventInit::new();
    init.set_detail(&JsValue::from_str(key));
    match CustomEvent::new_with_event_init_dict(STORAGE_CHANGE_EVENT, &init) {
        Ok(event) => {
            if let Err(err) = window.dispatch_event(&event) {
                log::warn!("[STORAGE] could not dispatch change for {}: {:?}", key, err);
            }
        }
        Err(err) => log::warn!("[STORAGE] could not create change event: {:?}", err),
    }
}

/// Key carried by a change event; `None` when the event does not say (e.g.
/// `localStorage.clear()` in another tab).
fn changed_key(event: &web_sys::Event) -> Option<String> {
    if let Some(custom) = event.dyn_ref::<CustomEvent>() {
        return custom.detail().as_string();
    }
    event.dyn_ref::<StorageEvent>().and_then(|e| e.key())
}

/// Run `reload` whenever `key` may have changed, in this tab or another.
///
/// Listeners live as long as the page; call this from root contexts only.
pub fn watch_key(key: StorageKey, reload: impl Fn() + Clone + 'static) {
    for event_name in [STORAGE_CHANGE_EVENT, CROSS_TAB_EVENT] {
        let reload = reload.clone();
        let _listener = window_event_listener_untyped(event_name, move |event| {
            let relevant = changed_key(&event).map_or(true, |changed| changed == key.as_str());
            if relevant {
                reload();
            }
        });
    }
}
