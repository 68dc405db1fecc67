use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The artifact could not be opened by the dynamic linker.
    ///
    /// Covers a missing file, an incompatible binary, unresolved link-time
    /// dependencies and permission errors alike. `source` is the linker's
    /// own error, untouched.
    #[error("failed to load {}: {source}", .locator.display())]
    ArtifactLoad {
        locator: PathBuf,
        #[source]
        source: libloading::Error,
    },

    #[error("symbol `{symbol}` not found in {}: {source}", .locator.display())]
    SymbolLookup {
        symbol: String,
        locator: PathBuf,
        #[source]
        source: libloading::Error,
    },

    #[error("the D2XX binding has already been initialized")]
    AlreadyInitialized,
}
