//! Core domain + application logic for the card lookup bot.
//!
//! This crate is framework-agnostic. Telegram and the card lookup API live behind
//! ports (traits) implemented in adapter crates.

pub mod banks;
pub mod config;
pub mod domain;
pub mod errors;
pub mod formatting;
pub mod handler;
pub mod logging;
pub mod luhn;
pub mod messaging;
pub mod ports;

pub use errors::{Error, Result};
