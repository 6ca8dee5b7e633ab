//! # Domain Services
//!
//! Domain services encapsulate logic that doesn't naturally belong to a
//! single entity.
//!
//! ## Services
//!
//! - **AssociationGraph**: the single mutation path for every two-sided
//!   relationship between workspace records

mod association_graph;

pub use association_graph::*;
