pub mod config;
pub mod content;
pub mod generator;
pub mod pipeline;
pub mod render;
pub mod shell;
pub mod storage;
