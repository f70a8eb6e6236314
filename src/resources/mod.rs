//! ECS resources made available to systems.
//!
//! Overview
//! - `gamestate` – authoritative and pending high-level game state
//! - `group` – tracked group names and their live entity counts
//! - `hud` – score and lives text for the host to display
//! - `progression` – level, score, lives and the rules that change them
//! - `progressionconfig` – tunables loaded from `config.ini`
//! - `sectioncooldown` – busy period after a section scroll
//! - `systemsstore` – registry of dynamically-lookup-able systems by name
//! - `worldtime` – simulation time and delta
pub mod gamestate;
pub mod group;
pub mod hud;
pub mod progression;
pub mod progressionconfig;
pub mod sectioncooldown;
pub mod systemsstore;
pub mod worldtime;
