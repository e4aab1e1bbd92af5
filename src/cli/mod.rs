pub mod cli_parser;
pub mod settings;
