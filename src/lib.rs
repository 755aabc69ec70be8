//! # css-to-jss
//!
//! Converts pasted CSS declarations into JSS object-literal entries.
//!
//! ```text
//! color: #fff;                          color: '#fff',
//! margin: 10px 20px !important;   =>    margin: [[10, 20], '!important'],
//! font-family: 'Open Sans', Arial;      fontFamily: ['Open Sans', 'Arial'],
//! ```
//!
//! Property names become camelCase keys (custom properties stay quoted),
//! `px` units are dropped, numbers stay bare and everything else is single
//! quoted. Multi-token values become arrays, and `!important` on `margin` or
//! `padding` uses the `[[...], '!important']` tuple form.
//!
//! ## Modules
//!
//! - **[`convert`]**: conversion engine: preprocessor, logos tokenizer,
//!   scanner, property name and value formatting
//! - **[`paste`]**: clipboard and document traits with paste fallbacks

pub mod convert;
pub mod paste;

pub use convert::{css_to_jss, ConvertError, Converter, ConverterConfig};
