use std::path::PathBuf;

use crate::env::{EmptyEnv, EnvSource, ProcessEnv};
use crate::error::EcfgError;
use crate::file;
use crate::ops::{self, EcfgResult};
use crate::resolve::Resolver;
use crate::settings::Settings;
use crate::syntax::Syntax;
use crate::types::{EcfgAction, SearchMode, SearchPath};

/// Entry point for building an ecfg loader.
pub struct Ecfg;

impl Ecfg {
    pub fn builder() -> EcfgBuilder {
        EcfgBuilder::new()
    }
}

/// Builder that locates ecfg files and resolves them.
///
/// Either name the app (files are then discovered in the search paths) or
/// point at one file with [`file()`](Self::file).
pub struct EcfgBuilder<E = ProcessEnv> {
    app_name: Option<String>,
    file_name: Option<String>,
    file: Option<PathBuf>,
    search_paths: Option<Vec<SearchPath>>,
    search_mode: SearchMode,
    required: bool,
    resolver: Resolver<E>,
}

impl EcfgBuilder<ProcessEnv> {
    fn new() -> Self {
        Self {
            app_name: None,
            file_name: None,
            file: None,
            search_paths: None,
            search_mode: SearchMode::default(),
            required: true,
            resolver: Resolver::new(),
        }
    }
}

impl<E: EnvSource> EcfgBuilder<E> {
    /// Set the application name. This derives sensible defaults:
    /// - `file_name` → `"{app_name}.ecfg"`
    /// - `search_paths` → `[SearchPath::Cwd]`
    pub fn app_name(mut self, name: &str) -> Self {
        self.app_name = Some(name.to_string());
        self
    }

    /// Override the file name looked up in each search path.
    pub fn file_name(mut self, name: &str) -> Self {
        self.file_name = Some(name.to_string());
        self
    }

    /// Read exactly this file, skipping discovery.
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// Replace the default search paths entirely.
    ///
    /// Paths are listed in **priority-ascending** order: the last entry has the
    /// highest priority.
    pub fn search_paths(mut self, paths: Vec<SearchPath>) -> Self {
        self.search_paths = Some(paths);
        self
    }

    /// Append a search path without replacing the defaults.
    /// If no paths have been set yet, starts from the default `[Cwd]`.
    pub fn add_search_path(mut self, path: SearchPath) -> Self {
        self.search_paths
            .get_or_insert_with(|| vec![SearchPath::Cwd])
            .push(path);
        self
    }

    /// Set the search mode (default: [`SearchMode::FirstMatch`]).
    pub fn search_mode(mut self, mode: SearchMode) -> Self {
        self.search_mode = mode;
        self
    }

    /// Whether finding no file is an error (default: `true`).
    /// When `false`, a missing file yields empty settings.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn syntax(mut self, syntax: Syntax) -> Self {
        self.resolver = self.resolver.with_syntax(syntax);
        self
    }

    /// Override the environment reference prefix (default: `ENV:`).
    pub fn env_prefix(mut self, prefix: &str) -> Self {
        let syntax = self.resolver.syntax().clone().with_env_prefix(prefix);
        self.resolver = self.resolver.with_syntax(syntax);
        self
    }

    pub fn empty_env(mut self, policy: EmptyEnv) -> Self {
        self.resolver = self.resolver.with_empty_env(policy);
        self
    }

    /// Resolve references against `env` instead of the process environment.
    pub fn env<F: EnvSource>(self, env: F) -> EcfgBuilder<F> {
        EcfgBuilder {
            app_name: self.app_name,
            file_name: self.file_name,
            file: self.file,
            search_paths: self.search_paths,
            search_mode: self.search_mode,
            required: self.required,
            resolver: self.resolver.with_env(env),
        }
    }

    fn effective_file_name(&self) -> Result<String, EcfgError> {
        if let Some(name) = &self.file_name {
            return Ok(name.clone());
        }
        let app = self.app_name.as_deref().ok_or(EcfgError::AppNameRequired)?;
        Ok(format!("{app}.ecfg"))
    }

    fn effective_search_paths(&self) -> Vec<SearchPath> {
        if let Some(paths) = &self.search_paths {
            return paths.clone();
        }
        vec![SearchPath::Cwd]
    }

    /// The files that [`load()`](Self::load) would read, lowest priority first.
    pub fn discover(&self) -> Result<Vec<PathBuf>, EcfgError> {
        if let Some(path) = &self.file {
            return Ok(vec![path.clone()]);
        }
        let file_name = self.effective_file_name()?;
        let app_name = self.app_name.as_deref().unwrap_or(&file_name);
        let dirs = file::expand_search_paths(&self.effective_search_paths(), app_name);
        let files = file::find_files(&dirs, &file_name, self.search_mode)?;

        if files.is_empty() && self.required {
            return Err(EcfgError::FileNotFound {
                file_name,
                searched: dirs,
            });
        }
        Ok(files)
    }

    /// Locate and resolve the configured file(s).
    pub fn load(&self) -> Result<Settings, EcfgError> {
        self.load_with_files().map(|(settings, _)| settings)
    }

    fn load_with_files(&self) -> Result<(Settings, Vec<PathBuf>), EcfgError> {
        let files = self.discover()?;
        let mut settings = Settings::new();
        for path in &files {
            settings.extend_from(self.resolver.resolve_path(path)?);
        }
        tracing::debug!(files = files.len(), entries = settings.len(), "loaded ecfg settings");
        Ok((settings, files))
    }

    /// Handle an `EcfgAction` and print the result to stdout.
    pub fn handle_and_print(&self, action: &EcfgAction) -> Result<(), EcfgError> {
        let result = self.handle(action)?;
        println!("{result}");
        Ok(())
    }

    /// Handle an `EcfgAction` (list / get / check / export).
    pub fn handle(&self, action: &EcfgAction) -> Result<EcfgResult, EcfgError> {
        let (settings, files) = self.load_with_files()?;
        match action {
            EcfgAction::List => Ok(ops::list_values(&settings)),
            EcfgAction::Get { key } => ops::get_value(&settings, key),
            EcfgAction::Check => Ok(ops::check(&settings, files)),
            EcfgAction::Export => ops::export_json(&settings),
        }
    }
}
