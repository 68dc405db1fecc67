//! Artifact layout and locator construction
//!
//! A locator is the path of one compiled D2XX artifact:
//! `<directory>/<stem>.<os_label>.<arch_label>.<extension>`. The defaults
//! follow the release build layout, `./build/Release/ftdi-d2xx.*`.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::platform::NormalizedPlatform;

/// Directory the release build drops its artifacts into
pub const DEFAULT_DIRECTORY: &str = "./build/Release";

/// File name prefix shared by every artifact
pub const DEFAULT_STEM: &str = "ftdi-d2xx";

/// Extension the build gives every artifact, whatever the OS
pub const DEFAULT_EXTENSION: &str = "node";

/// Where the compiled artifacts live and how they are named
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactLayout {
    directory: PathBuf,
    stem: String,
    extension: String,
}

impl Default for ArtifactLayout {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(DEFAULT_DIRECTORY),
            stem: DEFAULT_STEM.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

impl ArtifactLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = directory.into();
        self
    }

    pub fn with_stem(mut self, stem: impl Into<String>) -> Self {
        self.stem = stem.into();
        self
    }

    /// Extension without the leading dot, e.g. `so` or `node`
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn stem(&self) -> &str {
        &self.stem
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// File name of the artifact built for `platform`
    pub fn file_name(&self, platform: &NormalizedPlatform) -> String {
        format!(
            "{}.{}.{}.{}",
            self.stem, platform.os_label, platform.arch_label, self.extension
        )
    }

    pub fn locate(&self, platform: &NormalizedPlatform) -> Locator {
        Locator(self.directory.join(self.file_name(platform)))
    }
}

/// Path of the artifact to load
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locator(PathBuf);

impl Locator {
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    pub fn file_name(&self) -> Option<&str> {
        self.0.file_name().and_then(|name| name.to_str())
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}

impl AsRef<Path> for Locator {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}
