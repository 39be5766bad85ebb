//! The grammar side of the pipeline: production rules and string expansion.
//!
//! An L-System rewrites a seed string (the *axiom*) by replacing every
//! symbol simultaneously, once per generation. Symbols without a
//! registered production rewrite to themselves, which is what lets the
//! turtle punctuation (`+`, `-`, `[`, `]`) survive expansion untouched.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A finite mapping from single symbols to replacement strings.
///
/// Lookup of an absent symbol is an identity rewrite: [`expand`] emits the
/// symbol itself. An empty replacement is legal and erases the symbol.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleTable {
    rules: HashMap<char, String>,
}

impl RuleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a production, replacing any previous rule for `symbol`.
    pub fn insert(&mut self, symbol: char, replacement: impl Into<String>) {
        self.rules.insert(symbol, replacement.into());
    }

    /// Returns the registered replacement for `symbol`, if any.
    ///
    /// `None` means the symbol is a fixed point of expansion, not that it
    /// is invalid.
    pub fn get(&self, symbol: char) -> Option<&str> {
        self.rules.get(&symbol).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterates over `(symbol, replacement)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> {
        self.rules.iter().map(|(&s, r)| (s, r.as_str()))
    }
}

/// Rule-string parse failure.
///
/// The raw syntax is `Symbol:Replacement` pairs separated by commas, with
/// surrounding whitespace ignored on both sides of the `:`. Parsing is
/// all-or-nothing so a typo never silently truncates the table; the caller
/// decides whether to surface the diagnostic or fall back to defaults.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseRuleError {
    /// A segment had no `:` between symbol and replacement.
    #[error("rule segment `{segment}` is missing a `:` separator")]
    MissingSeparator { segment: String },

    /// A segment had more than one `:`.
    #[error("rule segment `{segment}` has more than one `:` separator")]
    ExtraSeparator { segment: String },

    /// The left-hand side was empty or longer than one character.
    #[error("rule symbol `{symbol}` must be exactly one character")]
    BadSymbol { symbol: String },
}

impl FromStr for RuleTable {
    type Err = ParseRuleError;

    /// Parses `"F:FF, X:F+X"` style rule strings.
    ///
    /// Empty segments (as produced by a trailing comma) are skipped.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let mut table = RuleTable::new();
        for segment in raw.split(',') {
            let segment = segment.trim();
            if segment.is_empty() {
                continue;
            }
            let Some((lhs, rhs)) = segment.split_once(':') else {
                return Err(ParseRuleError::MissingSeparator {
                    segment: segment.to_owned(),
                });
            };
            if rhs.contains(':') {
                return Err(ParseRuleError::ExtraSeparator {
                    segment: segment.to_owned(),
                });
            }
            let (lhs, rhs) = (lhs.trim(), rhs.trim());
            let mut symbols = lhs.chars();
            let symbol = match (symbols.next(), symbols.next()) {
                (Some(s), None) => s,
                _ => {
                    return Err(ParseRuleError::BadSymbol {
                        symbol: lhs.to_owned(),
                    });
                }
            };
            table.insert(symbol, rhs);
        }
        Ok(table)
    }
}

impl fmt::Display for RuleTable {
    /// Re-serializes to the `Symbol:Replacement, ...` input syntax.
    ///
    /// Symbols are emitted in sorted order so the output is stable;
    /// re-parsing yields an equal table.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<_> = self.rules.iter().collect();
        entries.sort_by_key(|(s, _)| **s);
        for (i, (symbol, replacement)) in entries.into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{symbol}:{replacement}")?;
        }
        Ok(())
    }
}

/// Expansion failure. Only bounded expansion can fail.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ExpandError {
    /// A generation would have grown the string past the configured cap.
    #[error("expansion exceeded the {limit}-character limit at generation {generation}")]
    OutputLimitExceeded { generation: usize, limit: usize },
}

/// Expands `axiom` for `iterations` generations under `rules`.
///
/// Replacement is parallel: every symbol of the current generation is
/// rewritten against that generation only, never against characters the
/// same pass just produced. With `iterations == 0` the axiom is returned
/// verbatim.
///
/// Growth is generally exponential in the rules' expansion factor; no cap
/// is imposed here. Callers that accept untrusted iteration counts should
/// prefer [`expand_bounded`].
pub fn expand(axiom: &str, rules: &RuleTable, iterations: usize) -> String {
    let mut current = axiom.to_owned();
    for _ in 0..iterations {
        current = rewrite_generation(&current, rules);
    }
    current
}

/// Like [`expand`], but fails as soon as a generation exceeds `max_len`
/// characters instead of exhausting memory on a pathological input.
pub fn expand_bounded(
    axiom: &str,
    rules: &RuleTable,
    iterations: usize,
    max_len: usize,
) -> Result<String, ExpandError> {
    let mut current = axiom.to_owned();
    for generation in 1..=iterations {
        current = rewrite_generation(&current, rules);
        if current.chars().count() > max_len {
            return Err(ExpandError::OutputLimitExceeded {
                generation,
                limit: max_len,
            });
        }
    }
    Ok(current)
}

fn rewrite_generation(current: &str, rules: &RuleTable) -> String {
    // Most rules grow the string, so reserve at least the input length.
    let mut next = String::with_capacity(current.len());
    for symbol in current.chars() {
        match rules.get(symbol) {
            Some(replacement) => next.push_str(replacement),
            None => next.push(symbol),
        }
    }
    next
}
