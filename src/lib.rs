//! Bookshelf Application Library
//!
//! Provides the application modules and a helper to assemble them into a
//! module registry backed by a fresh in-memory store.

pub mod modules;

use std::sync::Arc;

use bookshelf_kernel::ModuleRegistry;

use modules::books::store::BookStore;

/// Build a registry with all application modules over a fresh store
pub fn build_registry() -> ModuleRegistry {
    let store = Arc::new(BookStore::new());
    let mut registry = ModuleRegistry::new();
    modules::register_all(&mut registry, store);
    registry
}
