//! Display names for raw segment keys.

use std::sync::LazyLock;

use regex::Regex;

pub const OVERALL: &str = "Overall";
pub const MARKET_SEGMENTS: &str = "Market Segments";
pub const PRELIM: &str = "Prelim";
pub const COMBINED: &str = "Combined";

const VIEW_MODE_MARKERS: [&str; 3] = ["(B)", "(R)", "(T)"];

/// Labels produced by the renames below; returned untouched when passed back in.
const CANONICAL_NAMES: [&str; 1] = [MARKET_SEGMENTS];

static GROUPING_WORDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)segments?|groups?").expect("Invalid grouping word regex"));

/// Map a raw segment key such as `"(B) Age Groups"` to its display label (`"Age"`).
///
/// View-mode markers and the words "segment(s)"/"group(s)" are removed,
/// `Mindsets` becomes `Market Segments`, `Prelim-Answer` becomes `Prelim`, and
/// anything else gets a capitalized first letter.
pub fn display_name(raw_key: &str) -> String {
    if CANONICAL_NAMES.contains(&raw_key) {
        return raw_key.to_string();
    }

    let mut name = raw_key.to_string();
    for marker in VIEW_MODE_MARKERS {
        name = name.replace(marker, "");
    }
    let name = GROUPING_WORDS.replace_all(name.trim(), "");
    let name = name.trim();

    if name.eq_ignore_ascii_case("mindsets") {
        return MARKET_SEGMENTS.to_string();
    }
    if name.eq_ignore_ascii_case("prelim-answer") {
        return PRELIM.to_string();
    }
    capitalize_first(name)
}

fn capitalize_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
