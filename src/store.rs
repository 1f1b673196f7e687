//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Bairro, Categoria};

/// Data shared between pages
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Category reference list
    pub categorias: Vec<Categoria>,
    /// Neighborhood reference list
    pub bairros: Vec<Bairro>,
    /// Result of the last reachability check (None = not checked yet)
    pub backend_online: Option<bool>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace both reference lists
pub fn store_set_reference(store: &AppStore, categorias: Vec<Categoria>, bairros: Vec<Bairro>) {
    store.categorias().set(categorias);
    store.bairros().set(bairros);
}

/// Whether reference lists were already loaded by another page
pub fn store_has_reference(store: &AppStore) -> bool {
    !store.categorias().read_untracked().is_empty() && !store.bairros().read_untracked().is_empty()
}

pub fn store_set_backend_online(store: &AppStore, online: bool) {
    if store.backend_online().get_untracked() != Some(online) {
        store.backend_online().set(Some(online));
    }
}
