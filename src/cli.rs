//! Clap adapter for ecfg.
//!
//! Compiled only with the `clap` Cargo feature (on by default). Embed
//! [`EcfgArgs`] in your clap derive to get `list|get|check|export`
//! subcommands; [`EcfgArgs::into_action()`] bridges to the
//! framework-agnostic [`EcfgAction`](crate::EcfgAction).

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::types::EcfgAction;

/// Clap-derived args for an `env-config` style subcommand group.
///
/// ```ignore
/// #[derive(Subcommand)]
/// enum Commands {
///     Settings(EcfgArgs),
/// }
/// ```
#[derive(Debug, Args)]
pub struct EcfgArgs {
    /// Read this ecfg file instead of searching for one.
    #[arg(long, short = 'f', global = true)]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub action: Option<EcfgSubcommand>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum EcfgSubcommand {
    /// Show all resolved key-value pairs.
    List,
    /// Show the resolved value of one key.
    Get {
        /// Setting key (e.g. "DATABASE_URL").
        key: String,
    },
    /// Resolve the file and report problems without printing values.
    Check,
    /// Print the resolved settings as JSON.
    Export,
}

impl EcfgArgs {
    /// Convert clap-parsed args into an `EcfgAction`.
    ///
    /// Bare invocation (no subcommand) and explicit `list` both map to
    /// `EcfgAction::List`.
    pub fn into_action(self) -> EcfgAction {
        match self.action {
            None | Some(EcfgSubcommand::List) => EcfgAction::List,
            Some(EcfgSubcommand::Get { key }) => EcfgAction::Get { key },
            Some(EcfgSubcommand::Check) => EcfgAction::Check,
            Some(EcfgSubcommand::Export) => EcfgAction::Export,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    /// Wrapper so we can use `try_parse_from` on the args group.
    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(flatten)]
        ecfg: EcfgArgs,
    }

    fn parse(args: &[&str]) -> EcfgArgs {
        TestCli::try_parse_from(args).unwrap().ecfg
    }

    #[test]
    fn bare_is_list() {
        let args = parse(&["test"]);
        assert_eq!(args.file, None);
        assert_eq!(args.into_action(), EcfgAction::List);
    }

    #[test]
    fn explicit_list() {
        assert_eq!(parse(&["test", "list"]).into_action(), EcfgAction::List);
    }

    #[test]
    fn get_key() {
        assert_eq!(
            parse(&["test", "get", "DATABASE_URL"]).into_action(),
            EcfgAction::Get {
                key: "DATABASE_URL".into()
            }
        );
    }

    #[test]
    fn check_and_export() {
        assert_eq!(parse(&["test", "check"]).into_action(), EcfgAction::Check);
        assert_eq!(parse(&["test", "export"]).into_action(), EcfgAction::Export);
    }

    #[test]
    fn file_before_subcommand() {
        let args = parse(&["test", "--file", "/etc/app.ecfg", "check"]);
        assert_eq!(args.file, Some(PathBuf::from("/etc/app.ecfg")));
    }

    #[test]
    fn file_after_subcommand() {
        let args = parse(&["test", "get", "KEY", "-f", "app.ecfg"]);
        assert_eq!(args.file, Some(PathBuf::from("app.ecfg")));
        assert_eq!(
            args.into_action(),
            EcfgAction::Get { key: "KEY".into() }
        );
    }

    #[test]
    fn get_requires_key() {
        assert!(TestCli::try_parse_from(["test", "get"]).is_err());
    }

    #[test]
    fn invalid_subcommand_errors() {
        assert!(TestCli::try_parse_from(["test", "nope"]).is_err());
    }
}
