//! Gaugesmith Core Types and Definitions
//!
//! This crate provides the foundational types for rendering gauge dials. It
//! includes:
//!
//! - **Colors**: CSS color validation ([`color::Color`])
//! - **Geometry**: Points, sizes, dial angles and coordinates ([`geometry`] module)
//! - **Nodes**: The immutable vector node tree ([`node::Node`])
//! - **Draw**: Primitive builders for dial elements ([`draw`] module)
//! - **Semantic**: Validated layer and operation types ([`semantic`] module)

pub mod color;
pub mod draw;
pub mod geometry;
pub mod node;
pub mod semantic;
