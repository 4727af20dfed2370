//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for UI
//! clients. It opens notebook sources, loads configuration and dispatches to
//! `commands/*.rs`; it never prints and never exits.
//!
//! Methods come in pairs: one taking a filesystem path (what the CLI uses) and
//! a `*_source` variant generic over [`NotebookSource`], so the layer can be
//! exercised against in-memory notebooks.

use crate::commands::{self, config::ConfigAction, CmdResult};
use crate::config::QuillConfig;
use crate::error::Result;
use crate::source::{self, NotebookSource};
use std::path::{Path, PathBuf};

pub struct QuillApi {
    config_dir: PathBuf,
    config: QuillConfig,
}

impl QuillApi {
    /// Loads configuration from `config_dir` (defaults if absent).
    pub fn new<P: Into<PathBuf>>(config_dir: P) -> Result<Self> {
        let config_dir = config_dir.into();
        let config = QuillConfig::load(&config_dir)?;
        Ok(Self { config_dir, config })
    }

    pub fn with_config<P: Into<PathBuf>>(config_dir: P, config: QuillConfig) -> Self {
        Self {
            config_dir: config_dir.into(),
            config,
        }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn convert<P: AsRef<Path>>(&self, path: P, output_dir: Option<&Path>) -> Result<CmdResult> {
        let source = source::open(path)?;
        self.convert_source(source.as_ref(), output_dir)
    }

    pub fn convert_source<S: NotebookSource + ?Sized>(
        &self,
        source: &S,
        output_dir: Option<&Path>,
    ) -> Result<CmdResult> {
        commands::convert::run(source, &self.config, output_dir)
    }

    pub fn info<P: AsRef<Path>>(&self, path: P) -> Result<CmdResult> {
        let source = source::open(path)?;
        self.info_source(source.as_ref())
    }

    pub fn info_source<S: NotebookSource + ?Sized>(&self, source: &S) -> Result<CmdResult> {
        commands::info::run(source)
    }

    pub fn config(&mut self, action: ConfigAction) -> Result<CmdResult> {
        let result = commands::config::run(&self.config_dir, action)?;
        if let Some(config) = &result.config {
            self.config = config.clone();
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::memory::fixtures::NotebookFixture;
    use tempfile::TempDir;

    #[test]
    fn test_convert_source_uses_loaded_config() {
        let cfg = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let mut api = QuillApi::new(cfg.path()).unwrap();
        api.config(ConfigAction::Set(
            "output-dir".into(),
            out.path().display().to_string(),
        ))
        .unwrap();

        let fixture = NotebookFixture::new("Api", 2, 1);
        let result = api.convert_source(&fixture.source, None).unwrap();
        assert_eq!(result.written_files[0], out.path().join("page_001.svg"));
    }

    #[test]
    fn test_info_source_returns_summary() {
        let cfg = TempDir::new().unwrap();
        let api = QuillApi::with_config(cfg.path(), QuillConfig::default());
        let fixture = NotebookFixture::new("Api", 2, 1);
        let result = api.info_source(&fixture.source).unwrap();
        assert_eq!(result.summary.unwrap().page_count, 2);
    }

    #[test]
    fn test_convert_missing_path() {
        let cfg = TempDir::new().unwrap();
        let api = QuillApi::new(cfg.path()).unwrap();
        assert!(api.convert(cfg.path().join("none.quill"), None).is_err());
    }
}
