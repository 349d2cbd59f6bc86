// Shared system prompts. Each pipeline step keeps its own user-prompt templates
// alongside it in scoring::prompts.

/// System prompt for free-text requirement derivation.
pub const ASSISTANT_SYSTEM: &str = "You are a helpful assistant.";

/// System prompt for rubric scoring. Paired with a JSON-object response format.
pub const SCORING_SYSTEM: &str = "You are a resume scoring expert. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";
