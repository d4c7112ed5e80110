//! Core library for projectboard.
//!
//! Contains the domain types, validation, cursor codec, and the storage
//! traits implemented by the backends in the `projectboard` crate. This
//! crate has no knowledge of any concrete store or HTTP framework.

pub mod cursor;
pub mod project;
pub mod storage;
