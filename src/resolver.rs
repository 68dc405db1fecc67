use log::debug;

use crate::error::{Error, Result};
use crate::loader::{ArtifactLoader, DynamicLoader};
use crate::locator::{ArtifactLayout, Locator};
use crate::module::D2xxModule;
use crate::platform::{HostPlatformDetector, NormalizedPlatform, PlatformDetector, normalize};

/// Detects the host platform, picks the matching artifact and loads it.
pub struct Resolver<D = HostPlatformDetector, L = DynamicLoader>
where
    D: PlatformDetector,
    L: ArtifactLoader,
{
    detector: D,
    loader: L,
    layout: ArtifactLayout,
}

impl Resolver<HostPlatformDetector, DynamicLoader> {
    pub fn new() -> Self {
        Self::with_layout(ArtifactLayout::default())
    }

    pub fn with_layout(layout: ArtifactLayout) -> Self {
        Self::with_parts(HostPlatformDetector, DynamicLoader, layout)
    }
}

impl Default for Resolver<HostPlatformDetector, DynamicLoader> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: PlatformDetector, L: ArtifactLoader> Resolver<D, L> {
    pub fn with_parts(detector: D, loader: L, layout: ArtifactLayout) -> Self {
        Self {
            detector,
            loader,
            layout,
        }
    }

    pub fn layout(&self) -> &ArtifactLayout {
        &self.layout
    }

    /// Read the host primitives and normalize them
    pub fn platform(&self) -> NormalizedPlatform {
        let raw = self.detector.detect();
        let platform = normalize(&raw);
        debug!("Host platform {} normalized to {}", raw, platform);
        platform
    }

    /// Path of the artifact built for this host
    pub fn locate(&self) -> Locator {
        self.layout.locate(&self.platform())
    }

    /// Make a single attempt to load the artifact for this host.
    ///
    /// On failure the linker's error is returned inside
    /// [`Error::ArtifactLoad`]; no other path is tried.
    pub fn load(&self) -> Result<D2xxModule> {
        self.load_at(self.locate())
    }

    /// Single load attempt at an already computed locator
    #[tracing::instrument(skip(self))]
    pub(crate) fn load_at(&self, locator: Locator) -> Result<D2xxModule> {
        debug!("Loading D2XX binding from {}", locator);

        let library = self
            .loader
            .open(locator.as_path())
            .map_err(|source| Error::ArtifactLoad {
                locator: locator.as_path().to_path_buf(),
                source,
            })?;

        Ok(D2xxModule::new(library, locator))
    }
}
