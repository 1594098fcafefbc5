//! Model catalog
//! Model descriptors, the remote enumeration wire shape, and the rule tables
//! that assign token limits to model identifiers

use serde::{Deserialize, Serialize};

/// Hard safety ceiling for context windows. Applied to both remotely
/// reported and inferred values.
pub const MAX_CONTEXT_TOKENS: u32 = 128_000;

/// Context window assigned when no rule matches the identifier.
pub const DEFAULT_CONTEXT_TOKENS: u32 = 32_000;

/// Completion ceiling assigned when no rule matches the identifier.
pub const DEFAULT_COMPLETION_TOKENS: u32 = 4_096;

/// Metadata record advertising a callable model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDescriptor {
    pub id: String,
    pub label: String,
    pub provider: &'static str,
    pub max_context_tokens: u32,
    pub max_completion_tokens: u32,
}

/// One record from a remote `GET /models` enumeration.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteModel {
    pub id: String,
    pub object: String,
    #[serde(default)]
    pub context_length: Option<u64>,
}

/// Response envelope for a remote `GET /models` call.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelsResponse {
    pub data: Vec<RemoteModel>,
}

/// Identifier matcher for metadata rules.
#[derive(Debug, Clone, Copy)]
enum IdMatch {
    Prefix(&'static str),
    Contains(&'static str),
}

impl IdMatch {
    fn matches(self, id: &str) -> bool {
        match self {
            IdMatch::Prefix(prefix) => id.starts_with(prefix),
            IdMatch::Contains(needle) => id.contains(needle),
        }
    }
}

/// Documented context windows by model family, most specific rule first.
/// Values are the published windows; `MAX_CONTEXT_TOKENS` still caps the
/// final result.
const CONTEXT_WINDOW_RULES: &[(IdMatch, u32)] = &[
    (IdMatch::Contains("gpt-4o"), 128_000),
    (IdMatch::Contains("gpt-4-turbo"), 128_000),
    (IdMatch::Contains("gpt-4-32k"), 32_768),
    (IdMatch::Contains("gpt-4"), 8_192),
    (IdMatch::Contains("gpt-3.5-turbo"), 16_385),
    (IdMatch::Prefix("chatgpt-"), 128_000),
    (IdMatch::Prefix("o1"), 200_000),
    (IdMatch::Prefix("o3"), 200_000),
    (IdMatch::Prefix("o4"), 128_000),
];

/// Maximum completion tokens by model family, most specific rule first.
/// Reasoning families get the large ceilings; chat families stay small.
const COMPLETION_CEILING_RULES: &[(IdMatch, u32)] = &[
    (IdMatch::Prefix("o1-mini"), 65_536),
    (IdMatch::Prefix("o1"), 32_000),
    (IdMatch::Prefix("o3"), 100_000),
    (IdMatch::Prefix("o4"), 100_000),
    (IdMatch::Prefix("chatgpt-"), 16_384),
];

fn first_match(rules: &[(IdMatch, u32)], id: &str, default: u32) -> u32 {
    rules
        .iter()
        .find(|(matcher, _)| matcher.matches(id))
        .map(|(_, tokens)| *tokens)
        .unwrap_or(default)
}

/// Context window for a model id, used when the remote record reports none.
pub fn context_window_for(id: &str) -> u32 {
    first_match(CONTEXT_WINDOW_RULES, id, DEFAULT_CONTEXT_TOKENS)
}

/// Maximum completion tokens for a model id.
pub fn completion_ceiling_for(id: &str) -> u32 {
    first_match(COMPLETION_CEILING_RULES, id, DEFAULT_COMPLETION_TOKENS)
}

/// Whether an id belongs to a model family served by this endpoint:
/// `gpt-`, `chatgpt-`, or `o` followed by a digit.
pub fn known_model_prefix(id: &str) -> bool {
    if id.starts_with("gpt-") || id.starts_with("chatgpt-") {
        return true;
    }
    let mut chars = id.chars();
    chars.next() == Some('o') && chars.next().is_some_and(|c| c.is_ascii_digit())
}

/// Build a descriptor for a remotely enumerated model.
///
/// A reported `context_length` wins over the family heuristic; the hard
/// ceiling applies either way. Pure and deterministic.
pub fn descriptor_for_remote(
    provider: &'static str,
    id: &str,
    context_length: Option<u64>,
) -> ModelDescriptor {
    let window = context_length
        .map(|len| u32::try_from(len).unwrap_or(u32::MAX))
        .unwrap_or_else(|| context_window_for(id))
        .min(MAX_CONTEXT_TOKENS);
    ModelDescriptor {
        id: id.to_string(),
        label: format!("{} ({}k context)", id, window / 1000),
        provider,
        max_context_tokens: window,
        max_completion_tokens: completion_ceiling_for(id),
    }
}
