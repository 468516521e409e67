//! Line-oriented configuration files with environment variable indirection.
//!
//! An ecfg file keeps non-sensitive defaults in a checked-in file and hands
//! secrets and per-deployment overrides to the environment. Each line is one
//! directive:
//!
//! ```text
//! # Flag: DEBUG = "1"
//! DEBUG
//! # Literal
//! HOST        0.0.0.0
//! # Required environment variable
//! DB_PASSWORD ENV:DB_PASSWORD
//! # Environment variable with a fallback default
//! LOG_LEVEL   ENV:LOG_LEVEL  info
//! ```
//!
//! ```ignore
//! let settings = ecfg::read_settings(std::io::BufReader::new(file))?;
//! let host = settings.get("HOST");
//! ```
//!
//! # Resolution rules
//!
//! - Blank lines and lines starting with `#` are ignored.
//! - A line splits on whitespace into at most three fields; the third keeps
//!   the rest of the line, spaces included.
//! - `KEY ENV:NAME` fails with [`EcfgError::RequiredEnvUndefined`] when `NAME`
//!   is unset.
//! - `KEY ENV:NAME DEFAULT` uses `DEFAULT` when `NAME` is unset.
//! - `KEY VALUE DEFAULT` with a literal `VALUE` fails with
//!   [`EcfgError::IllegalDefaultTriple`]: defaults only make sense for env
//!   references.
//! - A variable set to the empty string counts as set. Use
//!   [`EmptyEnv::Unset`] to treat it as unset instead.
//! - Later lines overwrite earlier ones with the same key.
//!
//! The first failing line aborts the whole resolve; there are no partial
//! results.
//!
//! # Layers
//!
//! - [`Resolver`] is the core: it turns lines into [`Settings`] using a
//!   [`Syntax`] and an [`EnvSource`]. Both are injectable, so tests can use a
//!   `HashMap` instead of the process environment.
//! - [`Ecfg::builder()`] finds files in [`SearchPath`]s and resolves them.
//! - [`EcfgAction`] / [`EcfgResult`] back a `list|get|check|export` command
//!   group, and the `clap` feature provides [`EcfgArgs`] to parse it.
//!
//! # Logging
//!
//! The crate emits `tracing` events (`debug` for files and summaries,
//! `trace` per directive). Values are never logged. Install a subscriber in
//! your binary to see them.

pub mod env;
pub mod error;
pub mod syntax;
pub mod types;

mod builder;
#[cfg(feature = "clap")]
mod cli;
mod file;
mod ops;
mod resolve;
mod settings;

#[cfg(test)]
mod fixtures;

pub use builder::{Ecfg, EcfgBuilder};
#[cfg(feature = "clap")]
pub use cli::{EcfgArgs, EcfgSubcommand};
pub use env::{EmptyEnv, EnvLookup, EnvSource, ProcessEnv, extract_env_if_prefix};
pub use error::EcfgError;
pub use ops::EcfgResult;
pub use resolve::{Resolver, read_settings};
pub use settings::Settings;
pub use syntax::Syntax;
pub use types::{EcfgAction, SearchMode, SearchPath};
