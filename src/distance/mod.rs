//! Distance matrices.
//!
//! Provides a dense, validated distance matrix for tour evaluation.

mod matrix;

pub use matrix::DistanceMatrix;
