//! # mist-content — Games, Targets, and Shipped Schema Definitions
//!
//! The registry of (game, content-type) pairs that the toolchain compiles
//! and validates, together with the structured schema definitions for the
//! shipped content types.
//!
//! The registry is an explicit configuration value, not ambient global
//! state: compiler and driver entry points receive a [`Registry`] as an
//! argument, so tests can run with a reduced target set.

pub mod legend_in_the_mist;
pub mod registry;

pub use registry::{
    Game, Registry, RegistryError, Target, CITY_OF_MIST, LEGEND_IN_THE_MIST, OTHERSCAPE,
};
