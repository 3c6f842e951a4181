//! textlens server library
//!
//! HTTP service and command-line front end for [`textlens_core`].

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod server;

pub use error::{ServerError, ServerResult};

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
pub struct ReadmeDoctests;
