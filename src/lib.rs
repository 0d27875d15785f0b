// Design Patterns Catalog
// Creational, structural and behavioral patterns, each as a runnable demonstration.

//! # Design Patterns Catalog
//!
//! Every pattern lives in its own module and exposes a `demo` function that
//! writes what it did into a [`Transcript`]. The [`catalogue`] module indexes
//! them so the `patterns` binary can list and run them:
//!
//! ```bash
//! cargo run --bin patterns -- list
//! cargo run --bin patterns -- run faceted-builder
//! cargo run --bin patterns -- all --category behavioral
//! ```
//!
//! ## Creational
//! - Faceted Builder, Builder (with director), Factory, Abstract Factory,
//!   Prototype, Singleton
//!
//! ## Structural
//! - Adapter, Bridge, Composite, Decorator, Facade, Proxy
//!
//! ## Behavioral
//! - Chain of Responsibility, Command, Iterator, Mediator, Memento, Observer,
//!   State, Strategy, Template Method, Visitor

pub mod behavioral;
pub mod catalogue;
pub mod config;
pub mod creational;
pub mod error;
pub mod structural;
pub mod transcript;

pub use catalogue::{Category, Pattern, CATALOGUE};
pub use config::CatalogueConfig;
pub use error::CatalogueError;
pub use transcript::Transcript;
