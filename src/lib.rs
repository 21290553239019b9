// public modules
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod settings;

// public uses
pub use app::{App, OutputMode, Options, Summary};
pub use settings::{Delimiter, Settings};
