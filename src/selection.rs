//! User-selected subset of the allow-list
//!
//! An external store keeps the selection under [`STORAGE_KEY_SYMBOLS`] as a
//! JSON array of symbol strings. This module only defines the key and the
//! payload format; it never touches a storage medium.

use crate::symbol::AllowedSymbol;
use crate::validation::ValidationError;
use serde::{Deserialize, Serialize};

/// Key under which the selected symbols are persisted
pub const STORAGE_KEY_SYMBOLS: &str = "selected-symbols";

#[derive(Debug, thiserror::Error)]
pub enum SelectionError {
    #[error("Invalid selection: {0}")]
    Validation(#[from] ValidationError),

    #[error("Malformed selection payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Ordered, duplicate-free list of allowed symbols
///
/// Deserialization goes through [`SelectedSymbols::try_from_strs`], so a
/// payload with unknown or repeated symbols is rejected as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<AllowedSymbol>")]
pub struct SelectedSymbols {
    symbols: Vec<AllowedSymbol>,
}

impl Default for SelectedSymbols {
    fn default() -> Self {
        Self::all()
    }
}

impl SelectedSymbols {
    pub fn new() -> Self {
        Self {
            symbols: Vec::with_capacity(AllowedSymbol::ALL.len()),
        }
    }

    /// Every allowed symbol, in registry order
    pub fn all() -> Self {
        Self {
            symbols: AllowedSymbol::ALL.to_vec(),
        }
    }

    /// Build from raw strings, validating each entry
    ///
    /// Fails on the first malformed, unknown, or repeated symbol.
    pub fn try_from_strs<I, S>(raw: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut selection = Self::new();
        for s in raw {
            let symbol: AllowedSymbol = s.as_ref().parse()?;
            if !selection.insert(symbol) {
                return Err(ValidationError::DuplicateSymbol {
                    got: symbol.as_str().to_string(),
                });
            }
        }
        Ok(selection)
    }

    /// Append `symbol` if absent. Returns false if it was already selected.
    pub fn insert(&mut self, symbol: AllowedSymbol) -> bool {
        if self.contains(symbol) {
            return false;
        }
        self.symbols.push(symbol);
        true
    }

    /// Returns false if `symbol` was not selected
    pub fn remove(&mut self, symbol: AllowedSymbol) -> bool {
        match self.symbols.iter().position(|s| *s == symbol) {
            Some(pos) => {
                self.symbols.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Flip membership; returns whether `symbol` is selected afterwards
    pub fn toggle(&mut self, symbol: AllowedSymbol) -> bool {
        if self.remove(symbol) {
            false
        } else {
            self.symbols.push(symbol);
            true
        }
    }

    pub fn contains(&self, symbol: AllowedSymbol) -> bool {
        self.symbols.contains(&symbol)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = AllowedSymbol> + '_ {
        self.symbols.iter().copied()
    }

    pub fn as_slice(&self) -> &[AllowedSymbol] {
        &self.symbols
    }

    /// JSON array form stored under [`STORAGE_KEY_SYMBOLS`]
    pub fn to_payload(&self) -> Result<String, SelectionError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse the stored JSON array form
    ///
    /// # Examples
    /// ```
    /// use crypto_watchlist::selection::SelectedSymbols;
    ///
    /// let sel = SelectedSymbols::from_payload(r#"["SOL-USD","ETH-USD"]"#).unwrap();
    /// assert_eq!(sel.len(), 2);
    /// assert!(SelectedSymbols::from_payload(r#"["BTC-USD"]"#).is_err());
    /// ```
    pub fn from_payload(payload: &str) -> Result<Self, SelectionError> {
        // Parse as strings first so validation failures keep their own kind
        let raw: Vec<String> = serde_json::from_str(payload)?;
        Ok(Self::try_from_strs(raw)?)
    }
}

impl TryFrom<Vec<String>> for SelectedSymbols {
    type Error = ValidationError;

    fn try_from(raw: Vec<String>) -> Result<Self, Self::Error> {
        Self::try_from_strs(raw)
    }
}

impl From<SelectedSymbols> for Vec<AllowedSymbol> {
    fn from(selection: SelectedSymbols) -> Self {
        selection.symbols
    }
}

impl<'a> IntoIterator for &'a SelectedSymbols {
    type Item = AllowedSymbol;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, AllowedSymbol>>;

    fn into_iter(self) -> Self::IntoIter {
        self.symbols.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_key() {
        assert_eq!(STORAGE_KEY_SYMBOLS, "selected-symbols");
    }

    #[test]
    fn test_default_is_all_in_order() {
        let sel = SelectedSymbols::default();
        assert_eq!(sel.as_slice(), &AllowedSymbol::ALL);
        assert!(SelectedSymbols::new().is_empty());
    }

    #[test]
    fn test_insert_preserves_order_and_rejects_duplicates() {
        let mut sel = SelectedSymbols::new();
        assert!(sel.insert(AllowedSymbol::SolUsd));
        assert!(sel.insert(AllowedSymbol::EthUsd));
        assert!(!sel.insert(AllowedSymbol::SolUsd));
        assert_eq!(
            sel.iter().collect::<Vec<_>>(),
            vec![AllowedSymbol::SolUsd, AllowedSymbol::EthUsd]
        );
    }

    #[test]
    fn test_remove_and_toggle() {
        let mut sel = SelectedSymbols::all();
        assert!(sel.remove(AllowedSymbol::DogeUsd));
        assert!(!sel.remove(AllowedSymbol::DogeUsd));
        assert_eq!(sel.len(), 3);

        assert!(sel.toggle(AllowedSymbol::DogeUsd));
        assert!(sel.contains(AllowedSymbol::DogeUsd));
        // toggled-in symbols go to the end
        assert_eq!(sel.as_slice().last(), Some(&AllowedSymbol::DogeUsd));

        assert!(!sel.toggle(AllowedSymbol::EthUsd));
        assert!(!sel.contains(AllowedSymbol::EthUsd));
    }

    #[test]
    fn test_try_from_strs_errors() {
        let err = SelectedSymbols::try_from_strs(["ETH-USD", "BTC-USD"]).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidSymbol {
                got: "BTC-USD".to_string()
            }
        );

        let err = SelectedSymbols::try_from_strs(["ETH-USD", "ETH-USD"]).unwrap_err();
        assert_eq!(
            err,
            ValidationError::DuplicateSymbol {
                got: "ETH-USD".to_string()
            }
        );
    }

    #[test]
    fn test_payload_format() {
        let mut sel = SelectedSymbols::new();
        sel.insert(AllowedSymbol::UsdtUsd);
        sel.insert(AllowedSymbol::EthUsd);
        assert_eq!(sel.to_payload().unwrap(), r#"["USDT-USD","ETH-USD"]"#);

        let empty = SelectedSymbols::from_payload("[]").unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_from_payload_error_kinds() {
        let err = SelectedSymbols::from_payload("not json").unwrap_err();
        assert!(matches!(err, SelectionError::Payload(_)));

        let err = SelectedSymbols::from_payload(r#"{"symbols":[]}"#).unwrap_err();
        assert!(matches!(err, SelectionError::Payload(_)));

        let err = SelectedSymbols::from_payload(r#"["DOGE-USD","BTC-USD"]"#).unwrap_err();
        assert!(matches!(
            err,
            SelectionError::Validation(ValidationError::InvalidSymbol { .. })
        ));
    }

    #[test]
    fn test_from_payload_rejects_padded_entries() {
        let err = SelectedSymbols::from_payload(r#"["  SOL-USD ","\nETH-USD"]"#).unwrap_err();
        assert!(matches!(
            err,
            SelectionError::Validation(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_serde_rejects_invalid_entries() {
        assert!(serde_json::from_str::<SelectedSymbols>(r#"["SOL-USD","SOL-USD"]"#).is_err());
        let sel: SelectedSymbols = serde_json::from_str(r#"["SOL-USD"]"#).unwrap();
        assert_eq!(sel.as_slice(), &[AllowedSymbol::SolUsd]);
    }
}
