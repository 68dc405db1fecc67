//! The loaded D2XX binding.
//!
//! [`D2xxModule`] is the artifact's exported surface, handed to callers as
//! is. Symbols are looked up by their exported names; nothing is renamed,
//! filtered, wrapped or checked up front.

use libloading::{Library, Symbol};

use crate::error::{Error, Result};
use crate::locator::Locator;

#[derive(Debug)]
pub struct D2xxModule {
    library: Library,
    locator: Locator,
}

impl D2xxModule {
    pub fn new(library: Library, locator: Locator) -> Self {
        Self { library, locator }
    }

    /// Path the binding was loaded from
    pub fn locator(&self) -> &Locator {
        &self.locator
    }

    /// Look up an exported symbol by name.
    ///
    /// # Safety
    ///
    /// `T` must match the actual type of the exported item. See
    /// [`libloading::Library::get`].
    pub unsafe fn get<T>(&self, symbol: &str) -> Result<Symbol<'_, T>> {
        // SAFETY: forwarded to the caller.
        unsafe { self.library.get(symbol.as_bytes()) }.map_err(|source| Error::SymbolLookup {
            symbol: symbol.to_string(),
            locator: self.locator.as_path().to_path_buf(),
            source,
        })
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    pub fn into_library(self) -> Library {
        self.library
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{current_process_library, test_locator};

    #[test]
    fn test_locator_is_kept() {
        let module = D2xxModule::new(current_process_library(), test_locator());
        assert_eq!(module.locator(), &test_locator());
    }

    #[test]
    fn test_missing_symbol_reports_name_and_locator() {
        let module = D2xxModule::new(current_process_library(), test_locator());

        let result = unsafe { module.get::<unsafe extern "C" fn()>("FT_NoSuchExport") };

        match result {
            Err(Error::SymbolLookup {
                symbol, locator, ..
            }) => {
                assert_eq!(symbol, "FT_NoSuchExport");
                assert_eq!(locator, test_locator().into_path_buf());
            }
            Err(other) => panic!("unexpected error: {other:?}"),
            Ok(_) => panic!("symbol should not exist"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_existing_symbol_resolves() {
        let module = D2xxModule::new(current_process_library(), test_locator());

        let strlen = unsafe {
            module
                .get::<unsafe extern "C" fn(*const std::ffi::c_char) -> usize>("strlen")
                .unwrap()
        };
        assert_eq!(unsafe { strlen(c"d2xx".as_ptr()) }, 4);
    }

    #[test]
    fn test_into_library() {
        let module = D2xxModule::new(current_process_library(), test_locator());
        let _library: Library = module.into_library();
    }
}
