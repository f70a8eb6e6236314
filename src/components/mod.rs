//! ECS components for section content and the player.
//!
//! Submodules overview:
//! - [`coin`] – collectible value
//! - [`enemy`] – patrol parameters and walking direction
//! - [`group`] – tag component naming the kind of entity
//! - [`mapposition`] – world-space position
//! - [`persistent`] – marker for entities that survive a new game
//! - [`platform`] – size of platforms and floor segments
//! - [`player`] – marker for the player entity
//! - [`scrollable`] – marker for content that moves when a section clears

pub mod coin;
pub mod enemy;
pub mod group;
pub mod mapposition;
pub mod persistent;
pub mod platform;
pub mod player;
pub mod scrollable;
