//! # dokvault-store
//!
//! Implementations of the DokVault collaborator traits: a REST client for
//! the remote entity API and an in-memory variant used by tests.

pub mod memory;
pub mod rest;
