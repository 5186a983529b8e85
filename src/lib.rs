pub use anyhow::{anyhow, Result};

pub mod checks;
pub mod cli;
pub mod config;
pub mod error;
pub mod params;
pub mod paths;
pub mod plan;
pub mod template;

#[cfg(test)]
mod tests;
