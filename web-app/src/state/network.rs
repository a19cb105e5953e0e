//! Network selection state

use leptos::prelude::*;
use lib_core::session;
use lib_core::store::StorageKey;
use shared::{Network, NetworkState};

use crate::services::storage::{watch_key, LocalStorage};
use crate::services::wallet;

#[derive(Clone, Copy)]
pub struct NetworkContext {
    pub network: RwSignal<NetworkState>,
    /// Target of the switch in flight, if any
    pub switching: RwSignal<Option<Network>>,
}

impl NetworkContext {
    pub fn new() -> Self {
        Self {
            network: RwSignal::new(session::load_network(&LocalStorage)),
            switching: RwSignal::new(None),
        }
    }

    pub fn current(&self) -> Network {
        self.network.with(|state| state.network)
    }

    /// Start the mocked switch. Switching to the current network, or while
    /// another switch is pending, does nothing.
    pub fn switch_to(&self, network: Network) {
        if self.switching.get_untracked().is_some()
            || self.network.with_untracked(|state| state.network == network)
        {
            return;
        }
        self.switching.set(Some(network));

        let ctx = *self;
        leptos::task::spawn_local(async move {
            match wallet::switch_network(network).await {
                Ok(state) => ctx.network.set(state),
                Err(err) => log::warn!("[NETWORK] switch to {} failed: {}", network, err),
            }
            ctx.switching.set(None);
        });
    }

    fn reload(&self) {
        let stored = session::load_network(&LocalStorage);
        if self.network.with_untracked(|current| current != &stored) {
            self.network.set(stored);
        }
    }
}

impl Default for NetworkContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_network_context() -> NetworkContext {
    let context = NetworkContext::new();
    watch_key(StorageKey::NetworkState, move || context.reload());
    provide_context(context);
    context
}

pub fn use_network_context() -> NetworkContext {
    expect_context::<NetworkContext>()
}
