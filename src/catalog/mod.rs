//! Card system: definitions, the catalog, and drawn instances.
//!
//! ## Key Types
//!
//! - `CardId`: identifier for a card definition
//! - `CardDefinition`: static card data, never mutated after catalog load
//! - `CardCatalog`: definition lookup plus the built-in pool
//! - `InstanceId`: unique identifier for a drawn copy
//! - `CardInstance`: a drawn copy, tracked through hand, field and discard
//!
//! Definitions and instances are distinct on purpose: a match draws with
//! replacement, so several instances may share a `CardId` while every
//! instance identifier is unique for the match lifetime.

pub mod builtin;
pub mod definition;
pub mod instance;
pub mod registry;

pub use definition::{CardDefinition, CardId};
pub use instance::{CardInstance, InstanceId};
pub use registry::CardCatalog;
