//! # dokvault-entity
//!
//! Domain entity models for DokVault. Every struct in this crate
//! represents a record in the remote entity store or a domain value
//! object. All entities derive `Debug`, `Clone`, `Serialize`, and
//! `Deserialize`.

pub mod document;
