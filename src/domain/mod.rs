//! Domain layer - Catalog entities and the rules that guard them
//!
//! Nothing in here performs I/O; every type can be built and exercised in
//! isolation.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::*;
pub use value_objects::*;
