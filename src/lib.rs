pub mod api;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod finder;
pub mod grid;
pub mod pathfinder;
pub mod ranking;
pub mod scorer;
// cmd and reports are modules of the binary crate (main).
