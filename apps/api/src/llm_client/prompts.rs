// Shared prompt fragments used by every service that calls the LLM.
// Each service keeps its own prompts.rs next to it; only cross-cutting fragments live here.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Keeps rewrites faithful to the source text.
pub const FAITHFULNESS_INSTRUCTION: &str = "\
    Do not add or remove information, only rephrase it. \
    Never invent employers, dates, numbers, or technologies that are not in the input. \
    If the content is already well-written, return it as is.";
