//! Loader for the platform-specific FTDI D2XX binding.
//!
//! The binding ships as one compiled artifact per platform, named
//! `ftdi-d2xx.<os>.<arch>.<ext>` under `./build/Release`. This crate works
//! out which one belongs to the running host, loads it and hands back its
//! exported surface untouched.
//!
//! Call [`init`] once during program startup, or [`load`] if the caller
//! manages the module's lifetime itself.

pub mod error;
pub mod loader;
pub mod locator;
pub mod module;
pub mod platform;
pub mod resolver;

use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};

pub use error::{Error, Result};
pub use loader::{ArtifactLoader, DynamicLoader};
pub use locator::{ArtifactLayout, Locator};
pub use module::D2xxModule;
pub use platform::{NormalizedPlatform, PlatformDetector, RawPlatform};
pub use resolver::Resolver;

/// Outcome of the process-wide [`init`] call
#[derive(Debug)]
pub enum Resolution {
    Loaded(D2xxModule),
    Failed { locator: Locator, reason: String },
}

impl Resolution {
    pub fn module(&self) -> Option<&D2xxModule> {
        match self {
            Resolution::Loaded(module) => Some(module),
            Resolution::Failed { .. } => None,
        }
    }
}

static ATTEMPTED: AtomicBool = AtomicBool::new(false);
static RESOLUTION: OnceLock<Resolution> = OnceLock::new();

/// Resolve and load the binding for this host with the default layout.
pub fn load() -> Result<D2xxModule> {
    Resolver::new().load()
}

/// Load the binding for this host and keep it for the rest of the process.
///
/// Must be called once, at startup. The first call makes the only load
/// attempt and returns either the module or the loader's original error.
/// Any later call returns [`Error::AlreadyInitialized`] without touching
/// the filesystem; use [`module`] or [`resolution`] to read the outcome.
pub fn init() -> Result<&'static D2xxModule> {
    if ATTEMPTED.swap(true, Ordering::SeqCst) {
        return Err(Error::AlreadyInitialized);
    }

    resolve_into(&Resolver::new(), &RESOLUTION)
}

/// Run the single load attempt and record its outcome in `slot`.
fn resolve_into<'a, D, L>(
    resolver: &Resolver<D, L>,
    slot: &'a OnceLock<Resolution>,
) -> Result<&'a D2xxModule>
where
    D: PlatformDetector,
    L: ArtifactLoader,
{
    let locator = resolver.locate();

    match resolver.load_at(locator.clone()) {
        Ok(module) => slot
            .get_or_init(|| Resolution::Loaded(module))
            .module()
            .ok_or(Error::AlreadyInitialized),
        Err(err) => {
            slot.get_or_init(|| Resolution::Failed {
                locator,
                reason: err.to_string(),
            });
            Err(err)
        }
    }
}

/// `None` until [`init`] has finished, then its outcome
pub fn resolution() -> Option<&'static Resolution> {
    RESOLUTION.get()
}

/// The module loaded by [`init`], if it succeeded
pub fn module() -> Option<&'static D2xxModule> {
    resolution().and_then(Resolution::module)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::MockArtifactLoader;
    use crate::platform::MockPlatformDetector;
    use crate::test_utils::current_process_library;
    use std::path::Path;

    fn detector_called_once() -> MockPlatformDetector {
        let mut detector = MockPlatformDetector::new();
        detector
            .expect_detect()
            .times(1)
            .returning(|| RawPlatform::new("Windows_NT", "x64"));
        detector
    }

    #[test_log::test]
    fn test_failed_resolution_detects_once_and_keeps_locator() {
        let mut loader = MockArtifactLoader::new();
        loader
            .expect_open()
            .times(1)
            .returning(|_| Err(libloading::Error::DlOpenUnknown));
        let resolver =
            Resolver::with_parts(detector_called_once(), loader, ArtifactLayout::default());
        let slot = OnceLock::new();

        let err = match resolve_into(&resolver, &slot) {
            Err(err) => err,
            Ok(_) => panic!("load should fail"),
        };

        match slot.get() {
            Some(Resolution::Failed { locator, reason }) => {
                assert_eq!(
                    locator.as_path(),
                    Path::new("./build/Release").join("ftdi-d2xx.Windows.AMD64.node")
                );
                assert_eq!(reason, &err.to_string());
            }
            other => panic!("unexpected resolution: {other:?}"),
        }
    }

    #[test]
    fn test_loaded_resolution_is_stored() {
        let mut loader = MockArtifactLoader::new();
        loader
            .expect_open()
            .times(1)
            .returning(|_| Ok(current_process_library()));
        let resolver =
            Resolver::with_parts(detector_called_once(), loader, ArtifactLayout::default());
        let slot = OnceLock::new();

        let module = resolve_into(&resolver, &slot).unwrap();

        assert_eq!(module.locator().file_name(), Some("ftdi-d2xx.Windows.AMD64.node"));
        assert!(slot.get().and_then(Resolution::module).is_some());
    }
}
