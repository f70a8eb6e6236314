//! Persistent entity marker component.
//!
//! Entities with the [`Persistent`] component survive the cleanup that runs
//! when a new game starts. Registered systems and observers carry it.

use bevy_ecs::prelude::Component;

/// Tag component used to mark entities that should persist across games.
#[derive(Component, Clone, Debug)]
pub struct Persistent;
