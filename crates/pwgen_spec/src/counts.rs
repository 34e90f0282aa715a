//! Counts-mode specification: `set:n,set:n,…`.

use pwgen_base::error::SpecError;
use pwgen_base::CharSet;

/// Default cap on `total_length` when the CLI doesn't override it.
pub const DEFAULT_MAX_TOTAL_LENGTH: usize = 15;

/// One `(character-set, required-count)` pair, parsed once and borrowed by
/// the enumerators thereafter.
#[derive(Debug, Clone)]
pub struct CharSpec {
    /// The text the user wrote for this set, e.g. `"a-z"` — kept around
    /// purely for error messages.
    pub source_text: String,
    pub required_count: usize,
    pub char_set: CharSet,
}

/// A fully-parsed counts-mode specification.
#[derive(Debug, Clone)]
pub struct CountsSpec {
    pub specs: Vec<CharSpec>,
    pub total_length: usize,
    pub allow_repeat: bool,
}

impl CountsSpec {
    /// Parses `pattern` (e.g. `"a-z:3,!:1,%:1"`) into a [`CountsSpec`].
    ///
    /// `allow_repeat` selects whether without-repetition set-size invariants
    /// are enforced. `max_total_length` bounds `Σ required_count`.
    pub fn parse(
        pattern: &str,
        allow_repeat: bool,
        max_total_length: usize,
    ) -> Result<Self, SpecError> {
        let mut specs = Vec::new();
        let mut total_length = 0usize;

        for part in pattern.split(',') {
            let sub_parts: Vec<&str> = part.split(':').collect();
            if sub_parts.len() != 2 {
                return Err(SpecError::MalformedCountsPart {
                    part: part.to_string(),
                });
            }
            let (charset_str, count_str) = (sub_parts[0], sub_parts[1]);
            let count: usize = count_str.parse().map_err(|_| SpecError::InvalidCount {
                text: count_str.to_string(),
            })?;
            let char_set = CharSet::parse(charset_str)?;
            if char_set.is_empty() && count > 0 {
                return Err(SpecError::EmptySetWithPositiveCount {
                    text: charset_str.to_string(),
                    count,
                });
            }
            if !allow_repeat && char_set.len() < count {
                return Err(SpecError::SetTooSmallForCount {
                    text: charset_str.to_string(),
                    set_size: char_set.len(),
                    count,
                });
            }
            total_length += count;
            specs.push(CharSpec {
                source_text: charset_str.to_string(),
                required_count: count,
                char_set,
            });
        }

        if total_length > max_total_length {
            return Err(SpecError::TotalLengthExceedsMax {
                total: total_length,
                max: max_total_length,
            });
        }

        Ok(Self {
            specs,
            total_length,
            allow_repeat,
        })
    }
}
