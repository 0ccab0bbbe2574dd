// Tactful: message moderation for co-parenting conversations
//
// This is the library root. A message goes through the toxicity scorer,
// the rule set picks a verdict, and the moderation policy packages it.

pub mod config;
pub mod error;
pub mod moderation;
pub mod output;
pub mod rules;
pub mod toxicity;

pub use error::ModerationError;
pub use moderation::{ModerationPolicy, ModerationResult};
