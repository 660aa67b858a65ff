//! Hexweave Core - Shared data model for the spreading-outfit engine
//!
//! This crate provides the leaf types the engine crates build on:
//! - `ItemBundle` and `Outfit` - wearable item descriptors
//! - `SpellDefinition` - activation configuration with capture-time clamps
//! - `ActorId` - activator identity
//! - Millisecond time helpers with caller-injected `now`
//! - `CurseRng` - deterministic shuffle source

mod actor;
mod item;
mod rng;
mod spell;
pub mod time;

pub use actor::ActorId;
pub use item::{Craft, ItemBundle, Outfit};
pub use rng::CurseRng;
pub use spell::{
    OutfitOption, SpellDefinition, MAX_DELAY_MINUTES, MAX_LOOP_COUNT, MAX_LOOP_MINUTES,
};
pub use time::{Timestamp, IMMEDIATE};
