//! Caption text handling: parsing model output into a top/bottom pair and the
//! local punchline generator used whenever the remote path is unavailable.

use rand::seq::SliceRandom;

use crate::models::CaptionPair;

/// Punchline stubs the fallback generator draws from.
pub const PUNCH_TEMPLATES: &[(&str, &str)] = &[
    ("When you", "but your code says no"),
    ("Me trying to", "vs reality"),
    ("Expectation:", "Reality:"),
    ("When the deadline is", "and you haven't started"),
];

/// Starter prompts for the "surprise me" path.
pub const SAMPLE_PROMPTS: &[&str] = &[
    "When the coffee kicks in",
    "When deadline is tomorrow",
    "When you fix a bug at 3 AM",
    "Me explaining AI to my family",
    "When WiFi resumes after outage",
];

/// Extracts a top/bottom caption pair from free-form captioning output.
///
/// Recognizes `TOP:`/`BOTTOM:` markers (case-insensitive) first, then falls
/// back to line-oriented splitting, then to splitting a single line in half
/// on word boundaries. Always returns a pair; either side may be empty.
pub fn parse_caption(text: &str) -> CaptionPair {
    let text = text.trim();
    let upper = text.to_uppercase();
    let mut top = String::new();
    let mut bottom = String::new();

    if upper.contains("TOP:") || upper.contains("BOTTOM:") {
        for line in text.lines() {
            let up = line.to_uppercase();
            if up.starts_with("TOP:") {
                top = line.splitn(2, ':').nth(1).unwrap_or("").trim().to_string();
            } else if up.starts_with("BOTTOM:") {
                bottom = line.splitn(2, ':').nth(1).unwrap_or("").trim().to_string();
            }
        }
    } else if text.contains('\n') {
        let parts: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if parts.len() >= 2 {
            top = parts[0].to_string();
            bottom = parts[1].to_string();
        } else if let Some(only) = parts.first() {
            top = only.to_string();
        }
    } else {
        let words: Vec<&str> = text.split_whitespace().collect();
        // Top gets the floor half, never fewer than one word.
        let mid = (words.len() / 2).max(1).min(words.len());
        top = words[..mid].join(" ");
        bottom = words[mid..].join(" ");
    }

    CaptionPair::new(top, bottom)
}

/// Produces a caption pair locally, with no network dependency.
///
/// Picks one of [`PUNCH_TEMPLATES`] uniformly; a non-empty prompt is embedded
/// into the top line.
pub fn fallback_caption(prompt: &str) -> CaptionPair {
    let mut rng = rand::thread_rng();
    let (stub, bottom) = PUNCH_TEMPLATES
        .choose(&mut rng)
        .copied()
        .unwrap_or(PUNCH_TEMPLATES[0]);

    let top = if prompt.is_empty() {
        stub.to_string()
    } else {
        format!("{} — {}", prompt, stub)
    };

    CaptionPair::new(top, bottom)
}

/// Picks a random starter prompt from [`SAMPLE_PROMPTS`].
pub fn surprise_prompt() -> &'static str {
    let mut rng = rand::thread_rng();
    SAMPLE_PROMPTS
        .choose(&mut rng)
        .copied()
        .unwrap_or(SAMPLE_PROMPTS[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_marker_lines() {
        let pair = parse_caption("TOP: Hello there\nBOTTOM: General Kenobi");
        assert_eq!(pair.top, "Hello there");
        assert_eq!(pair.bottom, "General Kenobi");
    }

    #[test]
    fn markers_are_case_insensitive() {
        let pair = parse_caption("top: one\nBoTtOm: two");
        assert_eq!(pair.top, "one");
        assert_eq!(pair.bottom, "two");
    }

    #[test]
    fn marker_value_keeps_inner_colons() {
        let pair = parse_caption("TOP: note: this stays\nBOTTOM: ok");
        assert_eq!(pair.top, "note: this stays");
        assert_eq!(pair.bottom, "ok");
    }

    #[test]
    fn lone_top_marker_leaves_bottom_empty() {
        let pair = parse_caption("TOP: just the one line");
        assert_eq!(pair.top, "just the one line");
        assert_eq!(pair.bottom, "");
    }

    #[test]
    fn marker_mentioned_mid_line_yields_empty_pair() {
        // The marker gate fires but no line starts with a marker, so nothing
        // is extracted; the adapter treats this as an empty caption.
        let pair = parse_caption("the TOP: of the mountain");
        assert!(pair.is_empty());
    }

    #[test]
    fn splits_two_lines() {
        let pair = parse_caption("first line\nsecond line\nthird line");
        assert_eq!(pair.top, "first line");
        assert_eq!(pair.bottom, "second line");
    }

    #[test]
    fn blank_lines_are_skipped() {
        let pair = parse_caption("first\n\n   \nsecond");
        assert_eq!(pair.top, "first");
        assert_eq!(pair.bottom, "second");
    }

    #[test]
    fn splits_even_word_count_in_half() {
        let pair = parse_caption("w1 w2 w3 w4");
        assert_eq!(pair.top, "w1 w2");
        assert_eq!(pair.bottom, "w3 w4");
    }

    #[test]
    fn odd_word_count_gives_top_the_floor_half() {
        let pair = parse_caption("a b c d e");
        assert_eq!(pair.top, "a b");
        assert_eq!(pair.bottom, "c d e");
    }

    #[test]
    fn single_word_goes_to_top() {
        let pair = parse_caption("w1");
        assert_eq!(pair.top, "w1");
        assert_eq!(pair.bottom, "");
    }

    #[test]
    fn empty_input_yields_empty_pair() {
        assert!(parse_caption("").is_empty());
        assert!(parse_caption("   \n  ").is_empty());
    }

    #[test]
    fn fallback_bottom_comes_from_the_fixed_set() {
        for _ in 0..20 {
            let pair = fallback_caption("any prompt");
            assert!(!pair.bottom.is_empty());
            assert!(PUNCH_TEMPLATES
                .iter()
                .any(|(_, bottom)| *bottom == pair.bottom));
        }
    }

    #[test]
    fn fallback_embeds_the_prompt() {
        let pair = fallback_caption("When the coffee kicks in");
        assert!(pair.top.starts_with("When the coffee kicks in — "));
    }

    #[test]
    fn fallback_with_empty_prompt_uses_the_stub_alone() {
        let pair = fallback_caption("");
        assert!(PUNCH_TEMPLATES.iter().any(|(stub, _)| *stub == pair.top));
        assert!(!pair.bottom.is_empty());
    }

    #[test]
    fn surprise_prompt_is_from_the_sample_set() {
        for _ in 0..10 {
            assert!(SAMPLE_PROMPTS.contains(&surprise_prompt()));
        }
    }
}
