// Shared utilities

pub mod storage;
pub mod navigation;
pub mod export;

pub use storage::*;
pub use navigation::*;
