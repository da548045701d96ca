//! File discovery and parallel scanning.

use crate::classifier::Classifier;
use crate::config::{default_extensions, Config};
use crate::rule::{Rule, RuleBox};
use crate::source::{is_test_file, SourceFile};
use crate::types::{ScanResult, Violation};

use rayon::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while scanning.
#[derive(Debug, Error)]
pub enum ScanError {
    /// IO error resolving the root.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The scan root does not exist.
    #[error("Scan root not found: {}", .0.display())]
    RootNotFound(PathBuf),

    /// Error walking a gitignore-aware tree.
    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),

    /// Error walking a plain directory tree.
    #[error("Walk error: {0}")]
    WalkDir(#[from] walkdir::Error),

    /// Glob pattern error.
    #[error("Invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

/// Builder for configuring a [`Scanner`].
#[derive(Default)]
pub struct ScannerBuilder {
    root: Option<PathBuf>,
    rules: Vec<RuleBox>,
    exclude_patterns: Vec<String>,
    extensions: Option<Vec<String>>,
    include_tests: Option<bool>,
    config: Option<Config>,
}

impl ScannerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root directory to scan.
    #[must_use]
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = Some(path.into());
        self
    }

    /// Adds a rule; rules are tried in the order they are added.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed rule.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds several boxed rules, keeping their order.
    #[must_use]
    pub fn rules(mut self, rules: impl IntoIterator<Item = RuleBox>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Adds an exclude glob pattern.
    #[must_use]
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_patterns.push(pattern.into());
        self
    }

    /// Adds multiple exclude glob patterns.
    #[must_use]
    pub fn excludes<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_patterns
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Sets the scanned file extensions, replacing the configured ones.
    #[must_use]
    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = Some(extensions.into_iter().map(Into::into).collect());
        self
    }

    /// Sets whether test and story files are scanned.
    #[must_use]
    pub fn include_tests(mut self, include: bool) -> Self {
        self.include_tests = Some(include);
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the scanner.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be resolved or an
    /// exclude pattern is not a valid glob.
    pub fn build(self) -> Result<Scanner, ScanError> {
        let config = self.config.unwrap_or_default();

        let root = self.root.unwrap_or_else(|| config.scan.root.clone());
        let root = if root.is_absolute() {
            root
        } else {
            std::env::current_dir()?.join(&root)
        };

        let mut exclude_patterns = config.scan.exclude.clone();
        exclude_patterns.extend(self.exclude_patterns);
        let excludes = exclude_patterns
            .iter()
            .map(|p| glob::Pattern::new(p))
            .collect::<Result<Vec<_>, _>>()?;

        let extensions = self
            .extensions
            .unwrap_or_else(|| config.scan.extensions.clone());
        let extensions = if extensions.is_empty() {
            default_extensions()
        } else {
            extensions
                .into_iter()
                .map(|e| e.trim_start_matches('.').to_string())
                .collect()
        };

        Ok(Scanner {
            root,
            include_tests: self.include_tests.unwrap_or(config.scan.include_tests),
            respect_gitignore: config.scan.respect_gitignore,
            exclude_patterns,
            excludes,
            extensions,
            classifier: Classifier::new(self.rules, config),
        })
    }
}

/// Discovers source files and runs the classifier over them in parallel.
///
/// Use [`Scanner::builder()`] to construct an instance.
pub struct Scanner {
    root: PathBuf,
    classifier: Classifier,
    exclude_patterns: Vec<String>,
    excludes: Vec<glob::Pattern>,
    extensions: Vec<String>,
    include_tests: bool,
    respect_gitignore: bool,
}

impl Scanner {
    /// Creates a new builder for configuring a scanner.
    #[must_use]
    pub fn builder() -> ScannerBuilder {
        ScannerBuilder::new()
    }

    /// Returns the root directory being scanned.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.classifier.rules().len()
    }

    /// Returns the classifier used for every file.
    #[must_use]
    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Discovers and scans every eligible file under the root.
    ///
    /// Unreadable files are logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the root is missing or the directory walk fails.
    pub fn scan(&self) -> Result<ScanResult, ScanError> {
        info!("Starting scan at {:?}", self.root);

        let files = self.discover_files()?;
        info!("Found {} files to scan", files.len());

        let sources: Vec<SourceFile> = files
            .par_iter()
            .filter_map(|path| match SourceFile::read(path) {
                Ok(source) => Some(source),
                Err(e) => {
                    warn!("Skipping unreadable file {}: {}", path.display(), e);
                    None
                }
            })
            .collect();

        let result = self.scan_sources(&sources);
        info!(
            "Scan complete: {} violations in {} files",
            result.violations.len(),
            result.files_scanned
        );
        Ok(result)
    }

    /// Scans already-loaded files.
    #[must_use]
    pub fn scan_sources(&self, sources: &[SourceFile]) -> ScanResult {
        let partitions: Vec<(PathBuf, Vec<Violation>)> = sources
            .par_iter()
            .map(|source| (source.path.clone(), self.scan_source(source)))
            .collect();
        ScanResult::from_partitions(partitions, sources.len())
    }

    /// Scans a single file.
    #[must_use]
    pub fn scan_source(&self, source: &SourceFile) -> Vec<Violation> {
        debug!("Scanning: {}", source.path.display());
        self.classifier.check_file(source)
    }

    /// Discovers all files to scan, sorted by path.
    ///
    /// # Errors
    ///
    /// Returns an error if the root is missing or the directory walk fails.
    pub fn discover_files(&self) -> Result<Vec<PathBuf>, ScanError> {
        if !self.root.exists() {
            return Err(ScanError::RootNotFound(self.root.clone()));
        }

        let mut files = Vec::new();
        if self.respect_gitignore {
            let mut builder = ignore::WalkBuilder::new(&self.root);
            builder.hidden(false).git_ignore(true).require_git(false);
            for entry in builder.build() {
                let entry = entry?;
                if entry.file_type().is_some_and(|t| t.is_file()) {
                    self.push_if_eligible(entry.path(), &mut files);
                }
            }
        } else {
            for entry in walkdir::WalkDir::new(&self.root) {
                let entry = entry?;
                if entry.file_type().is_file() {
                    self.push_if_eligible(entry.path(), &mut files);
                }
            }
        }

        files.sort();
        Ok(files)
    }

    fn push_if_eligible(&self, path: &Path, files: &mut Vec<PathBuf>) {
        let has_extension = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext));
        if !has_extension {
            return;
        }

        if self.should_exclude(path) {
            debug!("Excluding: {}", path.display());
            return;
        }

        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        if !self.include_tests && is_test_file(relative) {
            debug!("Skipping test file: {}", path.display());
            return;
        }

        files.push(path.to_path_buf());
    }

    /// Checks if a path should be excluded.
    fn should_exclude(&self, path: &Path) -> bool {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        if self
            .excludes
            .iter()
            .any(|p| p.matches_path(relative) || p.matches_path(path))
        {
            return true;
        }

        // Directory patterns like "**/dist/**" also match as a substring.
        let path_str = path.to_string_lossy();
        self.exclude_patterns.iter().any(|pattern| {
            let normalized = pattern.replace("**", "");
            normalized.len() > 2 && normalized.starts_with('/') && path_str.contains(&normalized)
        })
    }
}
