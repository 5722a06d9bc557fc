//! Input validation for ticker-pair symbol names
//!
//! [`SymbolName`] checks that a raw string has the `<TICKER>-USD` shape.
//! Membership in the allow-list is checked separately by
//! [`crate::symbol::AllowedSymbol`], so a well-formed but unlisted pair
//! (e.g. `BTC-USD`) is reported as [`ValidationError::InvalidSymbol`].

use std::fmt;

/// Quote currency every tracked pair is priced in
pub const QUOTE_CURRENCY: &str = "USD";

/// Separator between ticker and quote
pub const SYMBOL_SEPARATOR: char = '-';

const MIN_LEN: usize = 5; // "X-USD"
const MAX_LEN: usize = 16;

// ============================================================================
// Validation Errors
// ============================================================================

/// Validation errors for symbol names and symbol selections
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum ValidationError {
    #[error("Invalid length for symbol: expected {min}-{max}, got {actual}")]
    InvalidLength {
        min: usize,
        max: usize,
        actual: usize,
    },

    #[error("Symbol name must be uppercase: got '{got}', expected '{expected}'")]
    NotUppercase { got: String, expected: String },

    #[error("Invalid format for symbol: '{value}' (expected: {expected})")]
    InvalidFormat {
        value: String,
        expected: &'static str,
    },

    #[error("Symbol must contain '-' separator: got '{got}'")]
    MissingSeparator { got: String },

    #[error("Unsupported quote currency '{quote}' in '{got}' (expected USD)")]
    UnsupportedQuote { got: String, quote: String },

    #[error("Symbol '{got}' is not in the allowed symbol list")]
    InvalidSymbol { got: String },

    #[error("Symbol '{got}' appears more than once in selection")]
    DuplicateSymbol { got: String },
}

// ============================================================================
// SymbolName - Validated Symbol Name (Private Fields)
// ============================================================================

/// Validated symbol name (guaranteed uppercase, TICKER-USD format)
///
/// Fields are private to force validation through `new()`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SymbolName(String);

impl SymbolName {
    /// Create a new validated SymbolName
    ///
    /// # Validation Rules
    /// - No surrounding whitespace
    /// - Length: 5-16 characters
    /// - Must be uppercase
    /// - Exactly one `-` separator, ticker is `[A-Z0-9]+`
    /// - Quote must be `USD`
    ///
    /// # Examples
    /// ```
    /// use crypto_watchlist::validation::SymbolName;
    ///
    /// let name = SymbolName::new("ETH-USD").unwrap();
    /// assert_eq!(name.ticker(), "ETH");
    ///
    /// assert!(SymbolName::new("eth-usd").is_err());
    /// assert!(SymbolName::new("ETH_USD").is_err());
    /// ```
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        if !name.is_empty() && name.trim() != name {
            return Err(ValidationError::InvalidFormat {
                value: name.to_string(),
                expected: "no leading/trailing whitespace",
            });
        }

        if name.len() < MIN_LEN || name.len() > MAX_LEN {
            return Err(ValidationError::InvalidLength {
                min: MIN_LEN,
                max: MAX_LEN,
                actual: name.len(),
            });
        }

        let expected = name.to_uppercase();
        if name != expected {
            return Err(ValidationError::NotUppercase {
                got: name.to_string(),
                expected,
            });
        }

        let separator_count = name.matches(SYMBOL_SEPARATOR).count();
        if separator_count == 0 {
            return Err(ValidationError::MissingSeparator {
                got: name.to_string(),
            });
        }
        if separator_count > 1 {
            return Err(ValidationError::InvalidFormat {
                value: name.to_string(),
                expected: "exactly one '-' separator (TICKER-USD format)",
            });
        }

        let (ticker, quote) = name
            .split_once(SYMBOL_SEPARATOR)
            .ok_or_else(|| ValidationError::MissingSeparator {
                got: name.to_string(),
            })?;

        if ticker.is_empty()
            || !ticker
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        {
            return Err(ValidationError::InvalidFormat {
                value: name.to_string(),
                expected: "ticker of uppercase letters and digits",
            });
        }

        if quote != QUOTE_CURRENCY {
            return Err(ValidationError::UnsupportedQuote {
                got: name.to_string(),
                quote: quote.to_string(),
            });
        }

        Ok(Self(name.to_string()))
    }

    /// Get the validated symbol name as &str
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Ticker part, e.g. "ETH" for "ETH-USD"
    pub fn ticker(&self) -> &str {
        // Separator presence is checked in new()
        self.0
            .split_once(SYMBOL_SEPARATOR)
            .map(|(ticker, _)| ticker)
            .unwrap_or(&self.0)
    }
}

impl fmt::Display for SymbolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for SymbolName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// Tests
// ============================================================================
