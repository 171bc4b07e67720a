pub mod bleed;
pub mod cli;
pub mod color;
pub mod commands;
pub mod compose;
pub mod config;
pub mod encode;
