//! Behavioral patterns: how objects hand work to each other.

pub mod chain;
pub mod command;
pub mod iterator;
pub mod state;
pub mod strategy;
