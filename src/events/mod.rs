//! Event and message types exchanged between the host and the progression core.
//!
//! Submodules:
//! - [`collision`] – player contacts with enemies and coins, reported by the host
//! - [`gamestate`] – state transition notifications for the high-level game flow
//! - [`player`] – falls and victory claims in, physics reactions out
pub mod collision;
pub mod gamestate;
pub mod player;
