//! The command registry subsystem.
//!
//! Discovery (inspector + index), tracking (tracker + store), querying
//! (monitor), and presentation (aggregator + dashboard), wired together by
//! the [`manager::RegistryManager`] façade.

pub mod aggregator;
pub mod dashboard;
pub mod index;
pub mod inspector;
pub mod manager;
pub mod metadata;
pub mod monitor;
pub mod record;
pub mod store;
pub mod tracker;
