//! Arrowsmith Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Arrowsmith
//! crates. It includes:
//!
//! - **Identifiers**: Node and relationship identifiers ([`identifier::Id`])
//!   and the pluggable [`identifier::IdGenerator`] that produces them
//! - **Geometry**: Diagram coordinates ([`geometry::Point`])
//! - **Model**: The arrows.app graph model ([`model`] module)

pub mod geometry;
pub mod identifier;
pub mod model;
