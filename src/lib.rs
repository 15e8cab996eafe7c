//! # Design Patterns
//!
//! Gang-of-Four design patterns, one self-contained module per pattern. Each
//! module ends in a `run` function that writes a short walkthrough to any
//! `std::io::Write`.
//!
//! ## Patterns Covered
//!
//! 1. **Creational**
//!    - Factory Method
//!    - Abstract Factory
//!    - Builder
//!    - Prototype
//!
//! 2. **Structural**
//!    - Flyweight
//!
//! 3. **Behavioral**
//!    - Chain of Responsibility
//!    - Command
//!    - Iterator (bidirectional cursor over an append-only collection)
//!    - State
//!    - Strategy
//!
//! ## Running Demos
//!
//! ```bash
//! # The iterator walkthrough
//! cargo run --bin patterns
//!
//! # Pick demos by name, or run all of them
//! cargo run --bin patterns -- strategy state
//! cargo run --bin patterns -- all
//!
//! # List what is available
//! cargo run --bin patterns -- --list
//! ```

pub mod behavioral;
pub mod catalog;
pub mod config;
pub mod creational;
pub mod error;
pub mod structural;

pub use catalog::{resolve, run_selected, Demo};
pub use config::RunConfig;
pub use error::{PatternError, Result};
