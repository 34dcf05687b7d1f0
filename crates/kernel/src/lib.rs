//! Core kernel for the bookshelf service: settings, module trait, registry.

pub mod module;
pub mod registry;
pub mod settings;

pub use module::{InitCtx, Module};
pub use registry::ModuleRegistry;
