//! Page state model.
//!
//! - [`IdentifierGenerator`]: unique page keys and payloads
//! - [`Snapshot`]: a committed copy of all pages
//! - [`SiteState`]: the live pages plus the last committed snapshot, with
//!   mutation operations and change queries behind one lock

mod generator;
mod site;
mod snapshot;

pub use generator::{IdentifierGenerator, FALLBACK_PAYLOAD};
pub use site::SiteState;
pub use snapshot::Snapshot;

/// Page key to payload, in insertion order.
pub type PageMap = indexmap::IndexMap<String, String>;
