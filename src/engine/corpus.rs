//! Static word corpora
//!
//! Both tables are indexed by state-derived values, so the order of the
//! entries is part of the output contract.

/// Vocabulary used by stochastic sampling (25 words)
pub const VOCABULARY: [&str; 25] = [
    "elephant", "paradigm", "microscope", "fluorescent", "whisper",
    "cement", "saxophone", "gentle", "Tuesday", "electric",
    "cucumber", "velocity", "transparent", "mechanism", "spiral",
    "fragment", "oscillate", "nominal", "cascade", "thermal",
    "dormant", "vector", "amplitude", "refraction", "pulse",
];

/// Phrase fragments used by coherent extraction (15 fragments of 1-3 words)
pub const FRAGMENTS: [&[&str]; 15] = [
    &["shoot", "gun"],
    &["basement", "mark", "locked"],
    &["counting", "down"],
    &["they're", "listening"],
    &["don't", "look", "outside"],
    &["camera", "bygone"],
    &["third", "floor"],
    &["midnight", "signal"],
    &["hide", "it"],
    &["Ray", "coming"],
    &["stay", "right"],
    &["behind", "trinity", "building"],
    &["three", "days"],
    &["don't", "close"],
    &["run", "open"],
];
