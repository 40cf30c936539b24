//! share-nest/crates/sn-core/src/lib.rs
//!
//! The central domain logic and interface definitions for Share Nest:
//! the in-memory session store, its record types, and the ports plugins
//! implement.

pub mod context;
pub mod error;
pub mod ids;
pub mod models;
pub mod query;
pub mod session;
pub mod traits;

// Re-exporting for easier access in other crates
pub use context::AppContext;
pub use error::*;
pub use ids::{SequentialIdGenerator, UuidV7Generator};
pub use models::*;
pub use query::{CommunityTotals, ItemFilter};
pub use session::SessionStore;
pub use traits::*;
