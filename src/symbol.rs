//! Symbol registry: the closed set of tracked ticker pairs
//!
//! The allow-list is fixed at compile time. [`AllowedSymbol`] is the typed
//! form; [`ALLOWED_SYMBOLS`] is the same list as plain string literals, in
//! the same order.

use crate::validation::{QUOTE_CURRENCY, SymbolName, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Allowed ticker pairs, in display order
pub const ALLOWED_SYMBOLS: [&str; 4] = ["ETH-USD", "DOGE-USD", "SOL-USD", "USDT-USD"];

/// One of the tracked ticker pairs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum AllowedSymbol {
    EthUsd,
    DogeUsd,
    SolUsd,
    UsdtUsd,
}

impl AllowedSymbol {
    /// All variants, same order as [`ALLOWED_SYMBOLS`]
    pub const ALL: [AllowedSymbol; 4] = [
        AllowedSymbol::EthUsd,
        AllowedSymbol::DogeUsd,
        AllowedSymbol::SolUsd,
        AllowedSymbol::UsdtUsd,
    ];

    #[inline]
    pub const fn as_str(self) -> &'static str {
        ALLOWED_SYMBOLS[self.index()]
    }

    /// Position in the fixed registry order
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            AllowedSymbol::EthUsd => 0,
            AllowedSymbol::DogeUsd => 1,
            AllowedSymbol::SolUsd => 2,
            AllowedSymbol::UsdtUsd => 3,
        }
    }

    /// Base ticker, e.g. "DOGE"
    pub fn ticker(self) -> &'static str {
        let s = self.as_str();
        &s[..s.len() - QUOTE_CURRENCY.len() - 1]
    }

    /// Quote currency, always "USD"
    pub const fn quote(self) -> &'static str {
        QUOTE_CURRENCY
    }

    /// Exact-match lookup, no format validation
    pub fn lookup(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|sym| sym.as_str() == s)
    }
}

/// Membership check against the allow-list (exact, case-sensitive)
///
/// # Examples
/// ```
/// use crypto_watchlist::symbol::is_allowed;
///
/// assert!(is_allowed("ETH-USD"));
/// assert!(!is_allowed("BTC-USD"));
/// ```
pub fn is_allowed(symbol: &str) -> bool {
    AllowedSymbol::lookup(symbol).is_some()
}

impl FromStr for AllowedSymbol {
    type Err = ValidationError;

    /// Exact membership; on a miss the format check picks the error kind
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(symbol) = AllowedSymbol::lookup(s) {
            return Ok(symbol);
        }
        let name = SymbolName::new(s)?;
        Err(ValidationError::InvalidSymbol {
            got: name.as_str().to_string(),
        })
    }
}

impl TryFrom<&str> for AllowedSymbol {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for AllowedSymbol {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AllowedSymbol> for &'static str {
    fn from(symbol: AllowedSymbol) -> Self {
        symbol.as_str()
    }
}

impl fmt::Display for AllowedSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for AllowedSymbol {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
