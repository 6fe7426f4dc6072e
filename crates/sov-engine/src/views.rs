//! View-count parsing for video results.
//!
//! Collectors hand over whatever the provider displays (`"1.2M views"`,
//! `"50K"`, `"48213"`); this module turns that into an integer without ever
//! failing.

/// Magnitude suffixes in the order they are checked.
const MAGNITUDES: &[(char, f64)] = &[('k', 1_000.0), ('m', 1_000_000.0), ('b', 1_000_000_000.0)];

/// Parses a human-readable view count into an integer.
///
/// Rules (case-insensitive):
/// 1. The unit words `"views"` / `"view"` are removed and whitespace trimmed.
/// 2. The first of `k`, `m`, `b` found anywhere in the remainder sets the
///    magnitude and every occurrence of that letter is removed. A string
///    containing both `k` and `m` is read as thousands.
/// 3. The rest is parsed as a float, scaled, and truncated toward zero.
///
/// Empty, non-numeric, negative, or non-finite input yields `0`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn parse_views(text: &str) -> u64 {
    let lower = text.to_lowercase();
    let stripped = lower.replace("views", "").replace("view", "");
    let stripped = stripped.trim();
    if stripped.is_empty() {
        return 0;
    }

    let magnitude = MAGNITUDES
        .iter()
        .find(|(suffix, _)| stripped.contains(*suffix));
    let (number, multiplier) = match magnitude {
        Some(&(suffix, multiplier)) => (stripped.replace(suffix, ""), multiplier),
        None => (stripped.to_string(), 1.0),
    };

    let Ok(value) = number.trim().parse::<f64>() else {
        return 0;
    };

    let scaled = value * multiplier;
    if !scaled.is_finite() || scaled < 0.0 {
        return 0;
    }

    scaled as u64
}
