//! The settings resolver: one pass from ecfg lines to a [`Settings`] map.
//!
//! For each line, in order:
//!
//! 1. Trim surrounding whitespace; skip blank lines and comments.
//! 2. Split into at most three fields (see [`syntax`](crate::syntax)).
//! 3. Dispatch on the field count:
//!    - `KEY` records the flag value.
//!    - `KEY VALUE` records the literal.
//!    - `KEY ENV:NAME` records the variable's value, or fails if it is unset.
//!    - `KEY ENV:NAME DEFAULT` records the variable's value, or `DEFAULT` if unset.
//!
//! The first error aborts the pass and no partial map is returned. The
//! resolver reads the environment through its [`EnvSource`] and never writes it.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::env::{self, EmptyEnv, EnvLookup, EnvSource, ProcessEnv};
use crate::error::EcfgError;
use crate::settings::Settings;
use crate::syntax::{Directive, Syntax, Value};

/// Resolves ecfg input against an environment.
///
/// Immutable once built; resolving never changes the resolver, so the same
/// instance can be reused and shared.
#[derive(Debug, Clone, Default)]
pub struct Resolver<E = ProcessEnv> {
    syntax: Syntax,
    empty_env: EmptyEnv,
    env: E,
}

impl Resolver<ProcessEnv> {
    /// A resolver with the default syntax, reading the process environment.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<E: EnvSource> Resolver<E> {
    /// Swap the environment source, e.g. for a map of synthetic variables.
    pub fn with_env<F: EnvSource>(self, env: F) -> Resolver<F> {
        Resolver {
            syntax: self.syntax,
            empty_env: self.empty_env,
            env,
        }
    }

    pub fn with_syntax(mut self, syntax: Syntax) -> Self {
        self.syntax = syntax;
        self
    }

    /// Set how variables holding an empty string are treated (default: as set).
    pub fn with_empty_env(mut self, policy: EmptyEnv) -> Self {
        self.empty_env = policy;
        self
    }

    pub fn syntax(&self) -> &Syntax {
        &self.syntax
    }

    /// Check a single token for an environment reference using this
    /// resolver's prefix, environment and empty-value policy.
    pub fn extract(&self, token: &str) -> EnvLookup {
        env::extract_with(token, self.syntax.env_prefix(), &self.env, self.empty_env)
    }

    /// Resolve a buffered character stream.
    pub fn resolve<R: BufRead>(&self, reader: R) -> Result<Settings, EcfgError> {
        let mut settings = Settings::new();
        let mut count = 0;

        for (idx, line) in reader.lines().enumerate() {
            let line_no = idx + 1;
            let line = line.map_err(|source| EcfgError::ReadError {
                line: line_no,
                source,
            })?;
            self.apply(&mut settings, &line, line_no)?;
            count = line_no;
        }

        tracing::debug!(lines = count, entries = settings.len(), "resolved ecfg input");
        Ok(settings)
    }

    /// Resolve input already held in memory.
    pub fn resolve_str(&self, input: &str) -> Result<Settings, EcfgError> {
        self.resolve_lines(input.lines())
    }

    /// Resolve a sequence of lines, e.g. from a line source that already split them.
    pub fn resolve_lines<I, S>(&self, lines: I) -> Result<Settings, EcfgError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut settings = Settings::new();
        for (idx, line) in lines.into_iter().enumerate() {
            self.apply(&mut settings, line.as_ref(), idx + 1)?;
        }
        tracing::debug!(entries = settings.len(), "resolved ecfg lines");
        Ok(settings)
    }

    /// Open and resolve a single file.
    pub fn resolve_path(&self, path: &Path) -> Result<Settings, EcfgError> {
        let file = File::open(path).map_err(|source| EcfgError::IoError {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "reading ecfg file");
        self.resolve(BufReader::new(file))
    }

    fn apply(&self, settings: &mut Settings, line: &str, line_no: usize) -> Result<(), EcfgError> {
        let Some(directive) = self.syntax.parse_line(line, line_no)? else {
            return Ok(());
        };
        tracing::trace!(line = line_no, key = directive.key(), kind = directive.kind(), "directive");

        let value = match directive {
            Directive::Flag { .. } => self.syntax.flag_value().to_string(),
            Directive::Assignment {
                value: Value::Literal(literal),
                ..
            } => literal.to_string(),
            Directive::Assignment {
                value: Value::EnvRef { token, name },
                ..
            } => match env::lookup(name, &self.env, self.empty_env) {
                EnvLookup::Value(v) => v,
                _ => {
                    return Err(EcfgError::RequiredEnvUndefined {
                        token: token.to_string(),
                        line: line_no,
                    });
                }
            },
            Directive::EnvWithDefault { name, default, .. } => {
                match env::lookup(name, &self.env, self.empty_env) {
                    EnvLookup::Value(v) => v,
                    _ => default.to_string(),
                }
            }
        };

        settings.insert(directive.key(), value);
        Ok(())
    }
}

/// Resolve a stream with the default syntax against the process environment.
pub fn read_settings<R: BufRead>(reader: R) -> Result<Settings, EcfgError> {
    Resolver::new().resolve(reader)
}
