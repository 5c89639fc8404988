//! Theme preference in `localStorage`
//!
//! The value is stored raw (`light` / `dark`), not JSON encoded.

use folio_core::{FolioError, FolioResult, ThemeStore, THEME_STORAGE_KEY};
use web_sys::Storage;

/// Theme store backed by the browser's local storage.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalThemeStore;

impl LocalThemeStore {
    fn storage() -> FolioResult<Storage> {
        let window =
            web_sys::window().ok_or_else(|| FolioError::Storage("no window".to_string()))?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) => Err(FolioError::Storage("local storage unavailable".to_string())),
            Err(err) => Err(FolioError::Storage(format!("{err:?}"))),
        }
    }
}

impl ThemeStore for LocalThemeStore {
    fn load(&self) -> FolioResult<Option<String>> {
        Self::storage()?
            .get_item(THEME_STORAGE_KEY)
            .map_err(|err| FolioError::Storage(format!("{err:?}")))
    }

    fn save(&mut self, value: &str) -> FolioResult<()> {
        Self::storage()?
            .set_item(THEME_STORAGE_KEY, value)
            .map_err(|err| FolioError::Storage(format!("{err:?}")))
    }
}
