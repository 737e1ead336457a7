//! Core content catalogs, interaction state, and motion descriptors for the
//! marketing site

mod catalog;
#[cfg(feature = "ssr")]
pub mod config;
mod motion;
mod state;
#[cfg(test)]
mod tests;

pub use catalog::*;
pub use motion::*;
pub use state::*;
