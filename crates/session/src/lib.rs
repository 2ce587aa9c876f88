//! Explicit, caller-held application state.
//!
//! The dashboard's selection state (countries picked for comparison),
//! favorites, and theme live in one plain value that callers own and thread
//! through their calls. There is no singleton and no interior mutability;
//! two sessions never share state.

use core_types::CountryRecord;
use serde::{Deserialize, Serialize};

pub mod error;

pub use error::SessionError;

/// The most countries a session can hold selected for comparison.
pub const MAX_SELECTED_COUNTRIES: usize = 5;

/// The UI theme preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

/// One user's dashboard session state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppState {
    selected: Vec<CountryRecord>,
    favorites: Vec<String>,
    theme: Theme,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The countries currently selected for comparison, in selection order.
    pub fn selected(&self) -> &[CountryRecord] {
        &self.selected
    }

    /// Adds a country to the comparison selection.
    ///
    /// Rejects duplicates and selections beyond `MAX_SELECTED_COUNTRIES`
    /// rather than silently dropping the request.
    pub fn add_selected(&mut self, country: CountryRecord) -> Result<(), SessionError> {
        if self.selected.iter().any(|c| c.id == country.id) {
            return Err(SessionError::AlreadySelected(country.id));
        }
        if self.selected.len() >= MAX_SELECTED_COUNTRIES {
            return Err(SessionError::SelectionFull {
                max: MAX_SELECTED_COUNTRIES,
            });
        }
        self.selected.push(country);
        Ok(())
    }

    /// Removes a country from the selection. Unknown ids are a no-op.
    pub fn remove_selected(&mut self, country_id: &str) {
        self.selected.retain(|c| c.id != country_id);
    }

    pub fn clear_selected(&mut self) {
        self.selected.clear();
    }

    /// The favorited country ids, in insertion order.
    pub fn favorites(&self) -> &[String] {
        &self.favorites
    }

    /// Adds the id to favorites if absent, removes it if present.
    pub fn toggle_favorite(&mut self, country_id: &str) {
        if self.is_favorite(country_id) {
            self.favorites.retain(|id| id != country_id);
        } else {
            self.favorites.push(country_id.to_string());
        }
    }

    pub fn is_favorite(&self, country_id: &str) -> bool {
        self.favorites.iter().any(|id| id == country_id)
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Flips between light and dark. A system theme toggles to dark first.
    pub fn toggle_theme(&mut self) {
        self.theme = match self.theme {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
            Theme::System => Theme::Dark,
        };
    }
}
