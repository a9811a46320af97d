//! Graph data models.
//!
//! This module provides the core data structures for representing graphs:
//! - [`MatrixGraph`]: dense V×V adjacency matrix
//! - [`UndirectedGraph`], [`DirectedGraph`]: typed views over the matrix
//! - [`VertexId`], [`Weight`]: vertex and edge types

pub mod matrix;
pub mod node;
pub mod views;

pub use matrix::{MatrixGraph, MatrixGraphBuilder};
pub use node::{VertexId, Weight, ARC_WEIGHT};
pub use views::{ArcAdjacency, DirectedGraph, UndirectedGraph, WeightedAdjacency};
