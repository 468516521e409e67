//! Environment access and `ENV:` reference extraction.
//!
//! The resolver never calls `std::env` directly. It goes through an
//! [`EnvSource`], so tests and embedders can hand it a plain map instead of
//! the process environment.

use std::collections::{BTreeMap, HashMap};

/// A read-only view of environment variables.
pub trait EnvSource {
    /// Look up `name`. `None` means unset; `Some("")` means set to empty.
    fn var(&self, name: &str) -> Option<String>;
}

/// The real process environment.
///
/// Names that the OS cannot hold (empty, or containing `=` or NUL) are
/// reported as unset. Values that are not valid UTF-8 are converted lossily.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        if name.is_empty() || name.contains(['=', '\0']) {
            return None;
        }
        std::env::var_os(name).map(|v| v.to_string_lossy().into_owned())
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl<E: EnvSource + ?Sized> EnvSource for &E {
    fn var(&self, name: &str) -> Option<String> {
        (**self).var(name)
    }
}

/// How a variable that is set to the empty string is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyEnv {
    /// An empty value is a real value and satisfies the reference.
    #[default]
    Set,
    /// An empty value counts as unset: required references fail and
    /// defaulted references fall back.
    Unset,
}

/// Outcome of checking a token for an environment reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvLookup {
    /// The token does not start with the prefix; it is a literal.
    NoPrefix,
    /// The token is a reference, but the variable is not set.
    Unset { name: String },
    /// The token is a reference and the variable holds this value (possibly empty).
    Value(String),
}

impl EnvLookup {
    pub fn is_reference(&self) -> bool {
        !matches!(self, EnvLookup::NoPrefix)
    }

    /// The resolved value, if there is one.
    pub fn value(&self) -> Option<&str> {
        match self {
            EnvLookup::Value(v) => Some(v),
            _ => None,
        }
    }
}

/// Resolve `token` against the process environment if it starts with `prefix`.
pub fn extract_env_if_prefix(token: &str, prefix: &str) -> EnvLookup {
    extract_with(token, prefix, &ProcessEnv, EmptyEnv::default())
}

/// Like [`extract_env_if_prefix`] but against an explicit [`EnvSource`] and
/// empty-value policy.
///
/// An empty `prefix` never matches, so every token is a literal.
pub fn extract_with(token: &str, prefix: &str, env: &impl EnvSource, empty: EmptyEnv) -> EnvLookup {
    if prefix.is_empty() {
        return EnvLookup::NoPrefix;
    }
    let Some(name) = token.strip_prefix(prefix) else {
        return EnvLookup::NoPrefix;
    };
    lookup(name, env, empty)
}

/// Look up a bare variable name, applying the empty-value policy.
pub(crate) fn lookup(name: &str, env: &impl EnvSource, empty: EmptyEnv) -> EnvLookup {
    match env.var(name) {
        Some(v) if v.is_empty() && empty == EmptyEnv::Unset => EnvLookup::Unset {
            name: name.to_string(),
        },
        Some(v) => EnvLookup::Value(v),
        None => EnvLookup::Unset {
            name: name.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::test::map_env;

    #[test]
    fn no_prefix_is_literal() {
        let env = map_env(&[("PLAIN", "x")]);
        let got = extract_with("PLAIN", "ENV:", &env, EmptyEnv::Set);
        assert_eq!(got, EnvLookup::NoPrefix);
        assert!(!got.is_reference());
    }

    #[test]
    fn token_shorter_than_prefix_is_literal() {
        let env = map_env(&[]);
        assert_eq!(extract_with("EN", "ENV:", &env, EmptyEnv::Set), EnvLookup::NoPrefix);
    }

    #[test]
    fn defined_variable_resolves() {
        let env = map_env(&[("DB_URL", "postgres://db")]);
        let got = extract_with("ENV:DB_URL", "ENV:", &env, EmptyEnv::Set);
        assert_eq!(got, EnvLookup::Value("postgres://db".into()));
        assert_eq!(got.value(), Some("postgres://db"));
    }

    #[test]
    fn undefined_variable_is_unset_not_empty() {
        let env = map_env(&[]);
        let got = extract_with("ENV:MISSING", "ENV:", &env, EmptyEnv::Set);
        assert_eq!(
            got,
            EnvLookup::Unset {
                name: "MISSING".into()
            }
        );
        assert!(got.is_reference());
        assert_eq!(got.value(), None);
    }

    #[test]
    fn empty_variable_is_a_value_by_default() {
        let env = map_env(&[("EMPTY", "")]);
        assert_eq!(
            extract_with("ENV:EMPTY", "ENV:", &env, EmptyEnv::Set),
            EnvLookup::Value(String::new())
        );
    }

    #[test]
    fn empty_variable_counts_as_unset_under_strict_policy() {
        let env = map_env(&[("EMPTY", "")]);
        assert_eq!(
            extract_with("ENV:EMPTY", "ENV:", &env, EmptyEnv::Unset),
            EnvLookup::Unset {
                name: "EMPTY".into()
            }
        );
    }

    #[test]
    fn empty_prefix_never_matches() {
        let env = map_env(&[("X", "1")]);
        assert_eq!(extract_with("X", "", &env, EmptyEnv::Set), EnvLookup::NoPrefix);
    }

    #[test]
    fn process_env_rejects_unrepresentable_names() {
        assert_eq!(ProcessEnv.var(""), None);
        assert_eq!(ProcessEnv.var("A=B"), None);
        assert_eq!(ProcessEnv.var("A\0B"), None);
    }

    #[test]
    fn process_env_defined_variable() {
        temp_env::with_var("ECFG_TEST_EXTRACT_DEFINED", Some("TEST"), || {
            assert_eq!(
                extract_env_if_prefix("ENV:ECFG_TEST_EXTRACT_DEFINED", "ENV:"),
                EnvLookup::Value("TEST".into())
            );
        });
    }

    #[test]
    fn process_env_undefined_variable() {
        temp_env::with_var_unset("ECFG_TEST_EXTRACT_UNDEFINED", || {
            assert_eq!(
                extract_env_if_prefix("ENV:ECFG_TEST_EXTRACT_UNDEFINED", "ENV:"),
                EnvLookup::Unset {
                    name: "ECFG_TEST_EXTRACT_UNDEFINED".into()
                }
            );
        });
    }

    #[test]
    fn process_env_empty_variable() {
        temp_env::with_var("ECFG_TEST_EXTRACT_EMPTY", Some(""), || {
            assert_eq!(
                extract_env_if_prefix("ENV:ECFG_TEST_EXTRACT_EMPTY", "ENV:"),
                EnvLookup::Value(String::new())
            );
        });
    }

    #[test]
    fn borrowed_source_delegates() {
        let env = map_env(&[("K", "v")]);
        let by_ref: &HashMap<String, String> = &env;
        assert_eq!(by_ref.var("K"), Some("v".into()));
    }
}
