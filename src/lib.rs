pub mod cli;
pub mod config;
pub mod core;
pub mod life;
pub mod plot;
pub mod sweep;
