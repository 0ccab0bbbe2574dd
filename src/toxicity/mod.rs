// Toxicity scoring — trait-based abstraction for swappable providers.
//
// The ToxicityScorer trait defines the interface. PerspectiveScorer implements
// it using Google's Perspective API. The moderation policy only ever sees the
// trait, so tests drive it with canned scores.

pub mod perspective;
pub mod traits;
