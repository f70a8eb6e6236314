//! Skyclimb progression core.
//!
//! Deterministic section generation and progression rules for a climbing
//! platformer, packaged as `bevy_ecs` components, resources, messages and
//! systems. A host engine owns rendering, physics and input; it reports
//! contacts through messages and instantiates entities from
//! [`section::PlacementCommand`]s.

pub mod autopilot;
pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod section;
pub mod systems;
