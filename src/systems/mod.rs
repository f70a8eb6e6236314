//! Progression systems.
//!
//! Submodules overview
//! - [`gamestate`] – check for pending state transitions and trigger events
//! - [`group`] – publish live entity counts per tracked group
//! - [`hud`] – mirror score and lives into displayable text
//! - [`messages`] – create and age the host message queues
//! - [`patrol`] – walk enemies back and forth along their patrol range
//! - [`player`] – settle coin, enemy, fall and victory messages in a fixed order
//! - [`section`] – scroll cleared sections and spawn generated layouts
//! - [`time`] – advance simulation time

pub mod gamestate;
pub mod group;
pub mod hud;
pub mod messages;
pub mod patrol;
pub mod player;
pub mod section;
pub mod time;
