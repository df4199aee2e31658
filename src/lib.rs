pub mod batch;
pub mod cli;
pub mod config;
pub mod error;
pub mod notebook;
pub mod parser;
pub mod text;
