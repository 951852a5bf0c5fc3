//! The fixed catalog of meme template slugs known to the rendering service.

use rand::seq::SliceRandom;

pub const MEME_TEMPLATES: &[&str] = &[
    "drake",
    "distracted-boyfriend",
    "two-buttons",
    "futurama-fry",
    "success-kid",
    "doge",
    "one-does-not-simply",
    "gru",
    "mocking-spongebob",
    "rollsafe",
];

pub const DEFAULT_TEMPLATE: &str = "drake";

/// Picks a template slug uniformly from [`MEME_TEMPLATES`].
pub fn random_template() -> &'static str {
    let mut rng = rand::thread_rng();
    MEME_TEMPLATES
        .choose(&mut rng)
        .copied()
        .unwrap_or(DEFAULT_TEMPLATE)
}

/// Whether a slug is in the known catalog. Informational only; unknown slugs
/// are still passed through to the rendering service unvalidated.
pub fn is_known(template: &str) -> bool {
    MEME_TEMPLATES.contains(&template)
}
