//! Shared identity types and validation helpers for the Biq schema.
//!
//! This crate provides the pieces every other crate builds on:
//! - Identity aliases (`UserId`, `Id`, `DeviceUrn`)
//! - The `IdHashable` trait for id-only equality
//! - Common field validation logic

pub mod identity;
pub mod validation;

pub use identity::{DeviceUrn, Id, IdHashable, UserId};
