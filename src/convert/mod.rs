//! Conversion engine: preprocessor, tokenizer, scanner, name and value
//! formatting.

pub mod config;
pub mod converter;
pub mod preprocess;
pub mod rule_name;
pub mod scanner;
pub mod split;
pub mod tokenizer;
pub mod value;

pub use config::ConverterConfig;
pub use converter::{css_to_jss, ConvertError, Converter};
