//! The conversion pipeline: preprocess, scan, then render each segment.

use tracing::debug;

use crate::convert::config::ConverterConfig;
use crate::convert::preprocess::{has_unterminated_comment, preprocess};
use crate::convert::rule_name::RuleName;
use crate::convert::scanner::{scan, Segment};
use crate::convert::split::is_balanced;
use crate::convert::value::format_value;

/// Errors from CSS to JSS conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    #[error("value '{value}' has no preceding property name")]
    MissingRuleName { value: String },
    #[error("empty property name")]
    EmptyRuleName,
    #[error("property name '{name}' contains an empty segment")]
    EmptyNameSegment { name: String },
    #[error("unbalanced parentheses (depth {depth} at end of input)")]
    UnbalancedParentheses { depth: i32 },
    #[error("unbalanced quotes in value '{value}'")]
    UnbalancedQuotes { value: String },
    #[error("unterminated comment")]
    UnterminatedComment,
    #[error("unterminated declaration: '{text}'")]
    TrailingInput { text: String },
    #[error("value '{value}' has an empty comma-separated part")]
    EmptyValuePart { value: String },
}

/// Converts CSS declarations into JSS object-literal entries.
///
/// The converter holds only its configuration; every call to
/// [`parse`](Self::parse) starts from fresh state, so one instance can be
/// shared freely.
///
/// ```
/// use css_to_jss::Converter;
///
/// let jss = Converter::default().parse("margin: 10px 20px;").unwrap();
/// assert_eq!(jss, "    margin: [10, 20],\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Converter {
    config: ConverterConfig,
}

impl Converter {
    pub fn new(config: ConverterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Convert a CSS fragment.
    ///
    /// In the default lenient mode, text after the last stop character and
    /// anything swallowed by an unclosed parenthesis is silently dropped.
    /// With [`ConverterConfig::strict`] such input is an error instead.
    pub fn parse(&self, css: &str) -> Result<String, ConvertError> {
        self.run(css, self.config.strict)
    }

    /// Convert a CSS fragment, rejecting input that would be truncated
    /// regardless of [`ConverterConfig::strict`].
    ///
    /// Use this wherever the result replaces user text: a missing final `;`
    /// or an unclosed parenthesis is reported rather than producing a partial
    /// declaration.
    pub fn parse_complete(&self, css: &str) -> Result<String, ConvertError> {
        self.run(css, true)
    }

    fn run(&self, css: &str, reject_truncation: bool) -> Result<String, ConvertError> {
        let source = preprocess(css);
        if self.config.strict && has_unterminated_comment(&source) {
            return Err(ConvertError::UnterminatedComment);
        }

        let scanned = scan(&source);
        if reject_truncation {
            if !scanned.is_balanced() {
                return Err(ConvertError::UnbalancedParentheses {
                    depth: scanned.depth,
                });
            }
            if !scanned.remainder.is_empty() {
                return Err(ConvertError::TrailingInput {
                    text: scanned.remainder,
                });
            }
        }

        let mut output = String::with_capacity(source.len() * 2);
        let mut context: Option<String> = None;

        for segment in &scanned.segments {
            match segment {
                Segment::BlockOpen => output.push_str("{\n"),
                Segment::RuleName(raw) => {
                    let name = RuleName::parse(raw.trim())?;
                    if let Some(property) = name.context() {
                        context = Some(property.to_string());
                    }
                    output.push_str(&self.config.indent);
                    output.push_str(&name.to_string());
                    output.push(':');
                }
                Segment::RuleValue(raw) => {
                    let raw = raw.trim();
                    let property = context.as_deref().ok_or_else(|| {
                        ConvertError::MissingRuleName {
                            value: raw.to_string(),
                        }
                    })?;
                    if self.config.strict && !is_balanced(raw) {
                        return Err(ConvertError::UnbalancedQuotes {
                            value: raw.to_string(),
                        });
                    }
                    output.push(' ');
                    output.push_str(&format_value(raw, property, &self.config)?);
                    output.push_str(",\n");
                }
                Segment::BlockClose => output.push('}'),
            }
        }

        Ok(output)
    }

    /// Convert `css` with [`parse_complete`](Self::parse_complete), falling
    /// back to the input unchanged on any error.
    pub fn convert_or_original(&self, css: &str) -> String {
        match self.parse_complete(css) {
            Ok(jss) => jss,
            Err(e) => {
                debug!(error = %e, "conversion failed, keeping original text");
                css.to_string()
            }
        }
    }
}

/// Convert a CSS fragment with the default configuration.
pub fn css_to_jss(css: &str) -> Result<String, ConvertError> {
    Converter::default().parse(css)
}
