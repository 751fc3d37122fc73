pub mod config;
pub mod fragment;

pub use config::*;
pub use fragment::*;
