//! Hexweave State - The spreading-curse engine
//!
//! This crate holds the tick-driven state machine that progressively
//! replaces a target's worn items with a stored outfit:
//!
//! - [`Host`] - collaborator contract owned by the embedding application
//! - [`ExtensionBag`] / [`CurseStore`] - durable string-keyed curse state
//! - [`eligibility`] / [`selector`] - which item may come next
//! - [`SpreadingCurse`] - activation, delayed start, per-tick item
//!   application, loop continuation, and recovery
//!
//! One machine instance owns one target. The driver calls
//! [`SpreadingCurse::tick`] once per scheduling cycle with an injected
//! `now`; every operation reports its side effects through an
//! [`UpdateResult`] the driver dispatches.

mod bag;
mod curse;
pub mod eligibility;
mod host;
mod report;
pub mod selector;
mod store;

#[cfg(test)]
pub(crate) mod testing;

pub use bag::ExtensionBag;
pub use curse::{
    Phase, SpreadingCurse, DEFAULT_ITEM_INTERVAL_MS, MAX_ITEM_INTERVAL_MS, MIN_ITEM_INTERVAL_MS,
};
pub use host::{Host, WornItem};
pub use report::{LogLevel, Notification, UpdateResult};
pub use store::CurseStore;
