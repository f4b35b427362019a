// Dotlanth
// Copyright (C) 2025 Synerthink

// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.

// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! Static symbol tables: reserved keywords, built-ins and literal identifiers
//!
//! All lookups ignore ASCII case.

use crate::lexer::Keyword;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Names provided by the script runtime
pub const BUILTINS: &[&str] = &[
    // Price and bar accessors
    "Open", "High", "Low", "Close", "Volume", "Time", "Date", "BarIndex", "Bars", "Symbol",
    // Indicators
    "SMA", "EMA", "WMA", "RSI", "MACD", "ATR", "ADX", "Bollinger", "StdDev", "Highest", "Lowest", "Average", "Sum", "CrossOver", "CrossUnder",
    // Math
    "Abs", "Min", "Max", "Round", "Floor", "Ceil", "Sqrt", "Pow", "Log", "Exp",
    // Orders and account
    "Buy", "Sell", "SellShort", "BuyToCover", "ExitLong", "ExitShort", "CancelOrders", "Position", "MarketPosition", "EntryPrice", "Equity", "Cash",
    // Utility
    "Print", "Alert", "Len", "Push", "NaN", "IsNaN",
];

/// Identifiers that denote literal values
pub const LITERALS: &[&str] = &["true", "false", "null", "undefined"];

static BUILTIN_SET: LazyLock<HashSet<String>> = LazyLock::new(|| BUILTINS.iter().map(|name| name.to_ascii_lowercase()).collect());

/// Check if a word is a reserved keyword
pub fn is_keyword(name: &str) -> bool {
    Keyword::from_word(name).is_some()
}

/// Check if a word names a built-in of the static catalogue
pub fn is_builtin(name: &str) -> bool {
    BUILTIN_SET.contains(&name.to_ascii_lowercase())
}

/// Check if a word is one of the literal identifiers
pub fn is_literal(name: &str) -> bool {
    LITERALS.iter().any(|literal| literal.eq_ignore_ascii_case(name))
}

/// Built-in lookup extended with per-analyzer names
#[derive(Debug, Clone, Default)]
pub struct BuiltinCatalog {
    extra: HashSet<String>,
}

impl BuiltinCatalog {
    /// Create a catalogue with additional built-in names
    pub fn with_extra<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            extra: names.into_iter().map(|name| name.as_ref().to_ascii_lowercase()).collect(),
        }
    }

    /// Check if a name is a built-in
    pub fn contains(&self, name: &str) -> bool {
        is_builtin(name) || self.extra.contains(&name.to_ascii_lowercase())
    }

    /// Check if a name is a keyword or a built-in
    pub fn is_reserved(&self, name: &str) -> bool {
        is_keyword(name) || self.contains(name)
    }
}
