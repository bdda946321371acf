// Adapters layer: concrete implementations for the console and the local filesystem.

pub mod console;
pub mod storage;
