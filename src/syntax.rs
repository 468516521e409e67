//! Line tokenizer and directive classification.
//!
//! Every non-blank, non-comment line is split on runs of whitespace into at
//! most three fields. The third field is the untouched remainder of the line,
//! so a fallback default may contain spaces:
//!
//! ```text
//! KEY                          -> Flag
//! KEY  VALUE                   -> Assignment (literal)
//! KEY  ENV:NAME                -> Assignment (env reference)
//! KEY  ENV:NAME  some default  -> EnvWithDefault
//! ```
//!
//! Classification only depends on the [`Syntax`] in use. No environment
//! lookups happen here; that is the resolver's job.

use crate::error::EcfgError;

pub const DEFAULT_ENV_PREFIX: &str = "ENV:";
pub const DEFAULT_COMMENT_PREFIX: &str = "#";
pub const DEFAULT_FLAG_VALUE: &str = "1";

const MAX_FIELDS: usize = 3;

/// The lexical conventions of an ecfg file.
///
/// Owned by a resolver, so two resolvers can read files with different
/// prefixes side by side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Syntax {
    env_prefix: String,
    comment_prefix: String,
    flag_value: String,
}

impl Default for Syntax {
    fn default() -> Self {
        Self {
            env_prefix: DEFAULT_ENV_PREFIX.into(),
            comment_prefix: DEFAULT_COMMENT_PREFIX.into(),
            flag_value: DEFAULT_FLAG_VALUE.into(),
        }
    }
}

impl Syntax {
    /// Marker that turns a value into an environment reference (default `ENV:`).
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = prefix.to_string();
        self
    }

    /// Leading marker of comment lines (default `#`).
    pub fn with_comment_prefix(mut self, prefix: &str) -> Self {
        self.comment_prefix = prefix.to_string();
        self
    }

    /// Value recorded for single-token flag lines (default `1`).
    pub fn with_flag_value(mut self, value: &str) -> Self {
        self.flag_value = value.to_string();
        self
    }

    pub fn env_prefix(&self) -> &str {
        &self.env_prefix
    }

    pub fn comment_prefix(&self) -> &str {
        &self.comment_prefix
    }

    pub fn flag_value(&self) -> &str {
        &self.flag_value
    }

    /// Classify one raw line. Blank lines and comments yield `Ok(None)`.
    ///
    /// `line_no` is 1-based and only used for diagnostics.
    pub fn parse_line<'a>(
        &self,
        raw: &'a str,
        line_no: usize,
    ) -> Result<Option<Directive<'a>>, EcfgError> {
        let line = raw.trim_matches(is_delimiter);
        if line.is_empty() {
            return Ok(None);
        }
        if !self.comment_prefix.is_empty() && line.starts_with(&self.comment_prefix) {
            return Ok(None);
        }

        let fields = split_fields(line);
        let directive = match fields[..] {
            [] => return Ok(None),
            [key] => Directive::Flag { key },
            [key, value] => Directive::Assignment {
                key,
                value: self.classify(value),
            },
            [key, env_ref, default, ..] => match self.classify(env_ref) {
                Value::EnvRef { token, name } => Directive::EnvWithDefault {
                    key,
                    token,
                    name,
                    default,
                },
                Value::Literal(_) => {
                    return Err(EcfgError::IllegalDefaultTriple {
                        line: line_no,
                        content: line.to_string(),
                    });
                }
            },
        };

        Ok(Some(directive))
    }

    fn classify<'a>(&self, token: &'a str) -> Value<'a> {
        match token.strip_prefix(self.env_prefix.as_str()) {
            Some(name) if !self.env_prefix.is_empty() => Value::EnvRef { token, name },
            _ => Value::Literal(token),
        }
    }
}

/// The right-hand side of an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value<'a> {
    Literal(&'a str),
    /// `token` is the raw field (`ENV:NAME`), `name` the variable name.
    EnvRef { token: &'a str, name: &'a str },
}

/// One parsed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive<'a> {
    Flag {
        key: &'a str,
    },
    Assignment {
        key: &'a str,
        value: Value<'a>,
    },
    EnvWithDefault {
        key: &'a str,
        token: &'a str,
        name: &'a str,
        default: &'a str,
    },
}

impl Directive<'_> {
    pub fn key(&self) -> &str {
        match self {
            Directive::Flag { key }
            | Directive::Assignment { key, .. }
            | Directive::EnvWithDefault { key, .. } => *key,
        }
    }

    /// Short name for log output.
    pub fn kind(&self) -> &'static str {
        match self {
            Directive::Flag { .. } => "flag",
            Directive::Assignment {
                value: Value::Literal(_),
                ..
            } => "literal",
            Directive::Assignment {
                value: Value::EnvRef { .. },
                ..
            } => "env",
            Directive::EnvWithDefault { .. } => "env_default",
        }
    }
}

fn is_delimiter(c: char) -> bool {
    c.is_ascii_whitespace()
}

/// Split an already trimmed line into at most [`MAX_FIELDS`] fields.
///
/// Runs of whitespace count as one delimiter. The last field keeps the rest
/// of the line verbatim.
pub fn split_fields(line: &str) -> Vec<&str> {
    let mut fields = Vec::with_capacity(MAX_FIELDS);
    let mut rest = line;

    while fields.len() < MAX_FIELDS - 1 {
        let Some(end) = rest.find(is_delimiter) else {
            break;
        };
        fields.push(&rest[..end]);
        rest = rest[end..].trim_start_matches(is_delimiter);
    }
    if !rest.is_empty() {
        fields.push(rest);
    }
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Option<Directive<'_>> {
        Syntax::default().parse_line(line, 1).unwrap()
    }

    #[test]
    fn split_single_field() {
        assert_eq!(split_fields("KEY"), vec!["KEY"]);
    }

    #[test]
    fn split_collapses_whitespace_runs() {
        assert_eq!(split_fields("KEY \t  VALUE"), vec!["KEY", "VALUE"]);
    }

    #[test]
    fn split_caps_at_three_fields() {
        assert_eq!(
            split_fields("KEY ENV:NAME a default  with   spaces"),
            vec!["KEY", "ENV:NAME", "a default  with   spaces"]
        );
    }

    #[test]
    fn blank_lines_are_skipped() {
        assert_eq!(parse(""), None);
        assert_eq!(parse("   \t  "), None);
    }

    #[test]
    fn comments_are_skipped() {
        assert_eq!(parse("# a comment"), None);
        assert_eq!(parse("\t  #indented KEY VALUE ENV:X"), None);
    }

    #[test]
    fn flag_line() {
        assert_eq!(parse("  KEY_FLAG  "), Some(Directive::Flag { key: "KEY_FLAG" }));
    }

    #[test]
    fn literal_assignment() {
        let d = parse("VLKEY\tVLVALUE").unwrap();
        assert_eq!(
            d,
            Directive::Assignment {
                key: "VLKEY",
                value: Value::Literal("VLVALUE"),
            }
        );
        assert_eq!(d.kind(), "literal");
    }

    #[test]
    fn env_assignment() {
        let d = parse("EKKEY ENV:SOME_VAR").unwrap();
        assert_eq!(
            d,
            Directive::Assignment {
                key: "EKKEY",
                value: Value::EnvRef {
                    token: "ENV:SOME_VAR",
                    name: "SOME_VAR",
                },
            }
        );
        assert_eq!(d.kind(), "env");
    }

    #[test]
    fn env_with_default_keeps_default_verbatim() {
        let d = parse("KEY ENV:NAME  fallback value  here").unwrap();
        assert_eq!(
            d,
            Directive::EnvWithDefault {
                key: "KEY",
                token: "ENV:NAME",
                name: "NAME",
                default: "fallback value  here",
            }
        );
        assert_eq!(d.key(), "KEY");
    }

    #[test]
    fn literal_triple_is_rejected() {
        let err = Syntax::default()
            .parse_line("  KEY literal fallback  ", 4)
            .unwrap_err();
        match err {
            EcfgError::IllegalDefaultTriple { line, content } => {
                assert_eq!(line, 4);
                assert_eq!(content, "KEY literal fallback");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn prefix_is_case_sensitive() {
        let d = parse("KEY env:NAME").unwrap();
        assert_eq!(d.kind(), "literal");
    }

    #[test]
    fn bare_prefix_is_an_env_reference_with_empty_name() {
        let d = parse("KEY ENV:").unwrap();
        assert_eq!(
            d,
            Directive::Assignment {
                key: "KEY",
                value: Value::EnvRef {
                    token: "ENV:",
                    name: "",
                },
            }
        );
    }

    #[test]
    fn custom_syntax() {
        let syntax = Syntax::default()
            .with_env_prefix("$")
            .with_comment_prefix("//")
            .with_flag_value("true");
        assert_eq!(syntax.parse_line("// note", 1).unwrap(), None);
        assert!(matches!(
            syntax.parse_line("# not a comment", 1),
            Err(EcfgError::IllegalDefaultTriple { .. })
        ));
        let d = syntax.parse_line("KEY $HOME", 1).unwrap().unwrap();
        assert_eq!(d.kind(), "env");
        assert_eq!(syntax.flag_value(), "true");
    }
}
