//! In-memory backend for the Proxima actor registry.
//!
//! Nothing is persisted: the registry lives exactly as long as the process.

mod partition;
mod registry;

pub use registry::MemoryRegistry;
