//! # solpack-cli
//!
//! The `solpack` command line interface.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]

#[macro_use]
extern crate tracing;

pub mod args;
pub mod errors;
pub mod handler;
pub mod opts;
pub mod utils;
