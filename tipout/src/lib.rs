//! Tip-out session driver library
//!
//! Entry flow, session snapshot files, configuration and result rendering
//! around the `tip_model` engine. The `tipout` binary is a thin loop over
//! these.

pub mod config;
pub mod flow;
pub mod report;
pub mod session_file;
