//! Software model of the STM32 hardware CRC peripheral.
//!
//! The checksums match the peripheral bit for bit, including its seeding and
//! its word-at-a-time MSB-first shifting, for any register width up to 32.

pub mod chain;
pub mod config;
pub mod crc;
pub mod demo;
pub mod error;
pub mod trace;

pub use chain::{chain_bytes, chain_file, chain_reader, chain_text, chain_words, Chain};
pub use config::Config;
pub use crc::{crc_step, Engine, Width};
pub use error::{Error, Result};
