//! Kani proofs for the tip allocation engine

#![cfg_attr(kani, feature(register_tool), register_tool(kanitool))]

pub mod sanitizer;
pub mod generators;

#[cfg(kani)]
pub mod properties;
