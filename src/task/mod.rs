//! Task record management for Taskbook.
//!
//! This module implements the task record store: creating records under
//! caller-supplied identifiers with text validation, fetching records by
//! identifier, applying author-authorized completion updates, and listing
//! records with an optional author filter. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
