mod console;

pub use console::{ColorChoice, LogLevel};
