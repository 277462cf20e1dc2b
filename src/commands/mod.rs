//! Command implementations for elgglp CLI

pub mod check;
pub mod completions;
pub mod export;
pub mod helpers;
pub mod import;
pub mod list;
pub mod sync;
pub mod version;
