//! Structured schema definitions for the Legend in the Mist game line.

pub mod challenge;
