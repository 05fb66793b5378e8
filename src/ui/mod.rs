//! Terminal output for the `barrelgen` binary

pub mod context;
pub mod error;
pub mod output;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
