//! Plain-language summaries of a share map.

use crate::types::{ShareMap, ShareOfVoice};

pub const NO_BRANDS_DETECTED: &str = "No brands detected in the top results.";

/// Orders brands by composite share, highest first.
///
/// Ties are broken alphabetically by identifier so the order never depends
/// on which brand happened to be mentioned first.
#[must_use]
pub fn rank_brands(sov: &ShareMap) -> Vec<(&str, &ShareOfVoice)> {
    let mut ranked: Vec<(&str, &ShareOfVoice)> =
        sov.iter().map(|(brand, share)| (brand.as_str(), share)).collect();
    ranked.sort_by(|(a_brand, a), (b_brand, b)| {
        b.composite_share
            .total_cmp(&a.composite_share)
            .then_with(|| a_brand.cmp(b_brand))
    });
    ranked
}

/// Derives an ordered list of insight sentences from `sov`.
///
/// With no mentioned brand the result is exactly [`NO_BRANDS_DETECTED`].
/// Otherwise the first sentence names the dominant brand. When `primary` is
/// present in `sov`, its mention and engagement shares follow, plus one
/// comparison sentence unless the two shares are equal.
#[must_use]
pub fn get_insights(sov: &ShareMap, primary: Option<&str>) -> Vec<String> {
    if sov.values().all(|s| s.mention_share <= 0.0) {
        return vec![NO_BRANDS_DETECTED.to_string()];
    }

    let mut insights = Vec::new();

    if let Some(&(top_brand, top)) = rank_brands(sov).first() {
        insights.push(format!(
            "The dominant brand is '{}' with a Composite SoV of {:.2}%.",
            display_name(top_brand),
            top.composite_share
        ));
    }

    let primary = primary.map(|p| p.trim().to_lowercase());
    if let Some((brand, share)) = primary
        .as_deref()
        .and_then(|p| sov.get_key_value(p))
    {
        let name = display_name(brand);
        insights.push(format!(
            "{name}: Mentions SoV: {:.2}%, Engagement (Views) SoV: {:.2}%.",
            share.mention_share, share.engagement_share
        ));

        if share.engagement_share > share.mention_share {
            insights.push(format!(
                "{name}'s content is highly engaging (high views per mention)."
            ));
        } else if share.mention_share > share.engagement_share {
            insights.push(format!(
                "{name} has good visibility but lower engagement compared to competitors."
            ));
        }
    }

    insights
}

/// Title-cases a brand identifier for display: `"atomberg"` → `"Atomberg"`.
///
/// Every letter that follows a non-letter is uppercased, the rest lowercased.
#[must_use]
pub fn display_name(identifier: &str) -> String {
    let mut out = String::with_capacity(identifier.len());
    let mut prev_is_letter = false;
    for c in identifier.chars() {
        if prev_is_letter {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        prev_is_letter = c.is_alphabetic();
    }
    out
}
