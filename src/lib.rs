//! Command-line front-end reading state descriptions out of XML documents.

mod cli;

pub use cli::Cli;
