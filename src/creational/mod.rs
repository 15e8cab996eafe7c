//! Creational patterns: who decides which concrete type gets built, and how
//! existing objects are copied.

pub mod abstract_factory;
pub mod builder;
pub mod factory_method;
pub mod prototype;
