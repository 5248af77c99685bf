//! Core types and definitions for the COLOSSUS boss encounter.
//!
//! This crate defines the vocabulary shared across all other crates:
//! phases, patterns, director tuning, components, commands, snapshots,
//! events, and constants. It has no dependency on any runtime framework.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
