//! Structural patterns.

pub mod flyweight;
