//! 菜单目录
//!
//! A fixed seed table supplied at startup: either the built-in menu or a
//! JSON array of [`MenuEntry`] read from `MENU_FILE`. Entries are immutable
//! for the lifetime of the process.

mod error;
mod seed;

pub use error::CatalogError;
pub use seed::default_menu;

use shared::{MAX_PRICE, MenuEntry};
use std::collections::HashSet;
use std::path::Path;

/// Validated, ordered menu
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    entries: Vec<MenuEntry>,
}

impl Catalog {
    /// Validate and wrap a list of entries
    ///
    /// Names must be non-empty and unique (the cart merges by name), prices
    /// finite and within `0..=MAX_PRICE`.
    pub fn from_entries(entries: Vec<MenuEntry>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for (idx, entry) in entries.iter().enumerate() {
            if entry.name.trim().is_empty() {
                return Err(CatalogError::EmptyName(idx));
            }
            if !(0.0..=MAX_PRICE).contains(&entry.price) {
                return Err(CatalogError::InvalidPrice {
                    name: entry.name.clone(),
                    price: entry.price,
                });
            }
            if !seen.insert(entry.name.as_str()) {
                return Err(CatalogError::DuplicateName(entry.name.clone()));
            }
        }
        Ok(Self { entries })
    }

    /// The built-in menu
    pub fn default_menu() -> Self {
        Self {
            entries: default_menu(),
        }
    }

    /// Read a JSON array of menu entries
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path)?;
        let entries: Vec<MenuEntry> = serde_json::from_str(&raw)?;
        tracing::debug!(path = %path.display(), "Menu file read");
        Self::from_entries(entries)
    }

    /// `MENU_FILE` when configured, the built-in menu otherwise
    pub fn from_config(menu_file: Option<&Path>) -> Result<Self, CatalogError> {
        match menu_file {
            Some(path) => Self::load(path),
            None => {
                tracing::debug!("MENU_FILE not set, using built-in menu");
                Ok(Self::default_menu())
            }
        }
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn get(&self, name: &str) -> Option<&MenuEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn get_index(&self, index: usize) -> Option<&MenuEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::default_menu()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_menu_is_valid() {
        let catalog = Catalog::from_entries(default_menu()).unwrap();
        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog.get("Biryani").unwrap().price, 800.0);
        assert_eq!(catalog.get("Gulab Jamun").unwrap().price, 400.0);
        assert_eq!(catalog.get_index(4).unwrap().name, "Prawn Karhai");
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let entries = vec![
            MenuEntry::new("Biryani", "a", 800.0, ""),
            MenuEntry::new("Biryani", "b", 900.0, ""),
        ];
        assert!(matches!(
            Catalog::from_entries(entries),
            Err(CatalogError::DuplicateName(name)) if name == "Biryani"
        ));
    }

    #[test]
    fn test_invalid_price_rejected() {
        let entries = vec![MenuEntry::new("Tea", "", -1.0, "")];
        assert!(matches!(
            Catalog::from_entries(entries),
            Err(CatalogError::InvalidPrice { .. })
        ));

        let entries = vec![MenuEntry::new("Tea", "", f64::NAN, "")];
        assert!(Catalog::from_entries(entries).is_err());
    }

    #[test]
    fn test_price_above_max_rejected() {
        for price in [MAX_PRICE + 0.01, 5.0e28, 1.0e30] {
            let entries = vec![MenuEntry::new("Gold", "", price, "")];
            assert!(matches!(
                Catalog::from_entries(entries),
                Err(CatalogError::InvalidPrice { .. })
            ));
        }

        let entries = vec![MenuEntry::new("Gold", "", MAX_PRICE, "")];
        assert!(Catalog::from_entries(entries).is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        let entries = vec![MenuEntry::new("  ", "", 1.0, "")];
        assert!(matches!(
            Catalog::from_entries(entries),
            Err(CatalogError::EmptyName(0))
        ));
    }

    #[test]
    fn test_zero_price_allowed() {
        let entries = vec![MenuEntry::new("Water", "", 0.0, "")];
        assert!(Catalog::from_entries(entries).is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"name":"Samosa","description":"Fried pastry","price":120,"image":"/samosa.jpg"}}]"#
        )
        .unwrap();

        let catalog = Catalog::from_config(Some(file.path())).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("Samosa").unwrap().price, 120.0);
    }

    #[test]
    fn test_load_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            Catalog::load(file.path()),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Catalog::load(Path::new("/nonexistent/menu.json")).unwrap_err();
        let app_err: shared::AppError = err.into();
        assert_eq!(app_err.code, shared::ErrorCode::IoError);
    }

    #[test]
    fn test_from_config_without_file_uses_default() {
        assert_eq!(Catalog::from_config(None).unwrap(), Catalog::default_menu());
    }
}
