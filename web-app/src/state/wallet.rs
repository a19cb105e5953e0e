//! Wallet state management

use leptos::prelude::*;
use lib_core::session;
use lib_core::store::StorageKey;
use shared::WalletState;

use crate::services::storage::{watch_key, LocalStorage};
use crate::services::wallet;

/// Global wallet context
#[derive(Clone, Copy)]
pub struct WalletContext {
    pub wallet: RwSignal<WalletState>,
    pub connecting: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl WalletContext {
    pub fn new() -> Self {
        Self {
            wallet: RwSignal::new(session::load_wallet(&LocalStorage)),
            connecting: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.wallet.with(|state| state.is_connected)
    }

    pub fn address(&self) -> Option<String> {
        self.wallet.with(|state| state.address().map(|s| s.to_string()))
    }

    /// Start the mocked connection. Ignored while one is in flight.
    pub fn connect(&self) {
        if self.connecting.get_untracked() {
            return;
        }
        self.connecting.set(true);
        self.error.set(None);

        let ctx = *self;
        leptos::task::spawn_local(async move {
            match wallet::connect().await {
                Ok(state) => ctx.wallet.set(state),
                Err(err) => {
                    log::warn!("[WALLET] connect failed: {}", err);
                    ctx.error.set(Some(err.user_message()));
                }
            }
            ctx.connecting.set(false);
        });
    }

    pub fn disconnect(&self) {
        match wallet::disconnect() {
            Ok(state) => self.wallet.set(state),
            Err(err) => {
                log::warn!("[WALLET] disconnect not persisted: {}", err);
                self.wallet.set(WalletState::default());
            }
        }
    }

    fn reload(&self) {
        let stored = session::load_wallet(&LocalStorage);
        if self.wallet.with_untracked(|current| current != &stored) {
            self.wallet.set(stored);
        }
    }
}

impl Default for WalletContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_wallet_context() -> WalletContext {
    let context = WalletContext::new();
    watch_key(StorageKey::WalletState, move || context.reload());
    provide_context(context);
    context
}

pub fn use_wallet_context() -> WalletContext {
    expect_context::<WalletContext>()
}
