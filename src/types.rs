//! Shared types for file discovery and actions.
//!
//! # Discovery
//!
//! [`SearchPath`] variants are listed in **priority-ascending** order: the
//! last entry has the highest priority. Each resolves to one directory that
//! is checked for the ecfg file name.
//!
//! # Resolution
//!
//! [`SearchMode`] decides what happens when several directories hold a file:
//!
//! - [`FirstMatch`](SearchMode::FirstMatch) (default): only the
//!   highest-priority file is read. One file is the whole configuration.
//! - [`Merge`](SearchMode::Merge): every file found is resolved, lowest
//!   priority first, and later keys replace earlier ones. Each file is
//!   resolved on its own; files cannot reference one another.

use std::path::PathBuf;

/// Where to search for ecfg files.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchPath {
    /// Platform config directory (XDG on Linux, ~/Library/Application Support on macOS).
    Platform,
    /// A subdirectory under the user's home directory, e.g. `Home(".myapp")`.
    Home(&'static str),
    /// Current working directory.
    Cwd,
    /// An explicit directory.
    Path(PathBuf),
}

/// How discovered files are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    #[default]
    FirstMatch,
    Merge,
}

/// An operation on the resolved settings, independent of any CLI framework.
/// The CLI layer converts parsed clap args into this.
#[derive(Debug, Clone, PartialEq)]
pub enum EcfgAction {
    /// Show every resolved key and value.
    List,
    /// Show one resolved value.
    Get { key: String },
    /// Resolve and report success without printing values.
    Check,
    /// Print the resolved settings as a JSON object.
    Export,
}
