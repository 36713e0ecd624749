//! Domain schema for the Biq device service.
//!
//! This crate contains:
//! - Entities (devices, groups, memberships, access grants, limits, observations)
//! - Request and response messages for group and device management
//! - The JSON codec and its error types

pub mod codec;
pub mod config;
pub mod error;
pub mod models;

pub use codec::{JsonCodec, WireEntity};
pub use config::CodecConfig;
pub use error::{SchemaError, UnknownCode};
