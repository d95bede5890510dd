pub mod algorithms;
pub mod config;
pub mod error;
pub mod grid;
pub mod neighbors;
pub mod render;
pub mod simulation;
pub mod statistics;
