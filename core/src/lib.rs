// TeX Compiler - Core Library

pub mod endpoints;
pub mod models;

pub use endpoints::*;
pub use models::*;
