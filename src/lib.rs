//! settings-control: Settings Control-Precedence Resolution
//!
//! A library for resolving the effective value of user settings when the
//! user's stored preferences, a deployment configuration file and
//! controller rules between settings disagree.
//!
//! The core lives in [`rules`] and [`resolve`] and performs no I/O.
//! [`config`] and [`store`] supply its inputs from disk.

pub mod config;
pub mod resolve;
pub mod rules;
pub mod settings;
pub mod store;
