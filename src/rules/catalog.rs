// Built-in rephrasings, in French like the rest of the product.
//
// None of these depend on the blocked message. They are offered to the
// sender as a calmer way to say "I disagree".

use std::collections::BTreeMap;

use super::RewriteCategory;

const THREAT: &[&str] = &[
    "Je ne suis pas d'accord avec cette situation et j'aimerais qu'on en discute calmement.",
    "Cette situation me préoccupe beaucoup, pouvons-nous trouver une solution ensemble ?",
    "Je préfère que nous réglions ce désaccord par le dialogue.",
];

const SEVERE: &[&str] = &[
    "Je suis très contrarié(e) et j'ai besoin de prendre du recul avant de répondre.",
    "Ce sujet me tient à cœur, parlons-en quand nous serons tous les deux plus calmes.",
    "Je ressens beaucoup de frustration en ce moment, reprenons cette conversation plus tard.",
];

const INSULT: &[&str] = &[
    "Je ne suis pas d'accord avec ta décision.",
    "Je pense que nous voyons les choses différemment.",
    "J'aimerais comprendre ton point de vue sur ce sujet.",
    "Cette situation me frustre, pouvons-nous en parler ?",
];

const PROFANITY: &[&str] = &[
    "Je suis vraiment agacé(e) par cette situation.",
    "Cela me contrarie beaucoup.",
    "Je trouve cette situation difficile à accepter.",
];

const GENERAL: &[&str] = &[
    "Pouvons-nous discuter de cela calmement ?",
    "J'aimerais que nous trouvions un terrain d'entente.",
    "Je pense qu'il serait préférable d'en parler de manière posée.",
    "Prenons le temps d'échanger sereinement sur ce point.",
];

/// The catalog shipped with the default rule set.
pub fn default_suggestions() -> BTreeMap<RewriteCategory, Vec<String>> {
    [
        (RewriteCategory::Threat, THREAT),
        (RewriteCategory::Severe, SEVERE),
        (RewriteCategory::Insult, INSULT),
        (RewriteCategory::Profanity, PROFANITY),
        (RewriteCategory::General, GENERAL),
    ]
    .into_iter()
    .map(|(category, lines)| (category, lines.iter().map(|s| s.to_string()).collect()))
    .collect()
}
