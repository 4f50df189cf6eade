//! Regular expression payloads.
//!
//! A RegExp value keeps its original pattern and flag string alongside the
//! compiled matcher. Flag translation covers the flags the `regex` crate
//! can express (`i`, `m`, `s`); `g`, `u` and `y` only affect iteration
//! state in the source language and are accepted without translation.

use regex::RegexBuilder;
use std::fmt;

use crate::error::ValueError;

/// A compiled regular expression value.
///
/// # Examples
///
/// ```
/// use value_types::RegExpValue;
///
/// let re = RegExpValue::new("ab+c", "i").unwrap();
/// assert!(re.is_match("ABBC"));
/// assert_eq!(re.to_string(), "/ab+c/i");
/// ```
#[derive(Debug, Clone)]
pub struct RegExpValue {
    source: String,
    flags: String,
    compiled: regex::Regex,
}

impl RegExpValue {
    /// Compile a pattern with JS-style flags.
    pub fn new(pattern: &str, flags: &str) -> Result<Self, ValueError> {
        let mut builder = RegexBuilder::new(pattern);
        for flag in flags.chars() {
            match flag {
                'i' => {
                    builder.case_insensitive(true);
                }
                'm' => {
                    builder.multi_line(true);
                }
                's' => {
                    builder.dot_matches_new_line(true);
                }
                'g' | 'u' | 'y' => {}
                other => {
                    return Err(ValueError::InvalidRegExp {
                        pattern: pattern.to_string(),
                        flags: flags.to_string(),
                        reason: format!("unknown flag '{}'", other),
                    });
                }
            }
        }
        let compiled = builder.build().map_err(|e| ValueError::InvalidRegExp {
            pattern: pattern.to_string(),
            flags: flags.to_string(),
            reason: e.to_string(),
        })?;
        Ok(RegExpValue {
            source: pattern.to_string(),
            flags: flags.to_string(),
            compiled,
        })
    }

    /// The original pattern text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The original flag string.
    pub fn flags(&self) -> &str {
        &self.flags
    }

    /// Test whether the pattern matches anywhere in the input.
    pub fn is_match(&self, input: &str) -> bool {
        self.compiled.is_match(input)
    }
}

impl fmt::Display for RegExpValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.source, self.flags)
    }
}
