//! # ecfg demo application
//!
//! A sample CLI tool that shows how to wire [ecfg](https://docs.rs/ecfg) into
//! an application. It exists to demonstrate and manually verify the crate.
//!
//! ## Running
//!
//! ```sh
//! cargo run --example ecfg_demo -- settings list
//! DEMO_DB_PASSWORD=hunter2 cargo run --example ecfg_demo -- settings -f demos/ecfg_demo/demo.ecfg list
//! RUST_LOG=ecfg=trace cargo run --example ecfg_demo -- settings -f demos/ecfg_demo/demo.ecfg check
//! cargo run --example ecfg_demo -- serve -f demos/ecfg_demo/demo.ecfg
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ecfg::{Ecfg, EcfgArgs, EcfgBuilder, EcfgError, SearchPath};

/// ecfg demo: a sample CLI app reading `ecfg-demo.ecfg`.
#[derive(Parser, Debug)]
#[command(name = "ecfg-demo")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Pretend to start a server using the resolved settings.
    Serve {
        /// Read this ecfg file instead of searching for one.
        #[arg(long, short = 'f')]
        file: Option<PathBuf>,
    },
    /// Inspect the resolved settings (list, get, check, export).
    Settings(EcfgArgs),
}

/// Search `~/.ecfg-demo/` then the current directory; cwd wins.
fn make_builder(file: Option<PathBuf>) -> EcfgBuilder {
    let builder = Ecfg::builder()
        .app_name("ecfg-demo")
        .search_paths(vec![SearchPath::Home(".ecfg-demo"), SearchPath::Cwd]);
    match file {
        Some(path) => builder.file(path),
        None => builder,
    }
}

fn serve(builder: &EcfgBuilder) -> Result<(), EcfgError> {
    let settings = builder.load()?;
    let host = settings.get("HOST").unwrap_or("127.0.0.1");
    let port = settings.get("PORT").unwrap_or("8080");
    let password_set = settings.get("DB_PASSWORD").is_some_and(|p| !p.is_empty());

    println!("listening on {host}:{port}");
    println!("database password configured: {password_set}");
    if settings.flag("DEBUG") {
        println!("debug mode on");
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), EcfgError> {
    match cli.command {
        Commands::Serve { file } => serve(&make_builder(file)),
        Commands::Settings(args) => {
            let builder = make_builder(args.file.clone());
            builder.handle_and_print(&args.into_action())
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
