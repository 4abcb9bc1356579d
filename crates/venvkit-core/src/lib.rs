//! venvkit core: configuration layer and observability.

pub mod config;
pub mod observability;
