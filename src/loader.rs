use libloading::Library;
use std::path::Path;

/// Opens compiled artifacts through the platform dynamic linker.
#[cfg_attr(test, mockall::automock)]
pub trait ArtifactLoader: Send + Sync {
    /// Make exactly one attempt to open the artifact at `path`.
    ///
    /// The linker's error is returned as is; implementations must not retry
    /// or probe alternative paths.
    fn open(&self, path: &Path) -> Result<Library, libloading::Error>;
}

/// Loader backed by `dlopen` / `LoadLibraryExW`
#[derive(Debug, Default, Clone, Copy)]
pub struct DynamicLoader;

impl ArtifactLoader for DynamicLoader {
    #[tracing::instrument(skip(self))]
    fn open(&self, path: &Path) -> Result<Library, libloading::Error> {
        // SAFETY: opening the artifact runs its initialisers. The D2XX
        // binding is built alongside this crate and trusted to be sound.
        unsafe { Library::new(path) }
    }
}
