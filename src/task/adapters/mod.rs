//! Infrastructure adapters implementing the task ports.

pub mod memory;
