//! Command-line front end for skillbook
//!
//! Both binaries take no arguments; behavior comes from [`config::Config`].

pub mod config;
pub mod service;
