//! Taskbook: an authoritative keyed store of to-do task records.
//!
//! This crate provides the core functionality for creating task records
//! under caller-supplied identifiers, authorizing mutations against the
//! recorded author, and retrieving records with read-after-write
//! visibility.
//!
//! # Architecture
//!
//! Taskbook follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory store)
//!
//! # Modules
//!
//! - [`task`]: Task record creation, authorization, and lifecycle tracking

pub mod task;
