pub mod batch;
pub mod cli;
pub mod config;
pub mod error;
pub mod loader;
pub mod recognizer;
pub mod scanner;
pub mod synth;
