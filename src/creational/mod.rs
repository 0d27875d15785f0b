//! Creational patterns: how objects get made.

pub mod abstract_factory;
pub mod builder;
pub mod factory;
pub mod faceted_builder;
pub mod prototype;
pub mod singleton;
