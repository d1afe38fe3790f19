// Shared prompt fragments. Each advisory flow defines its own template next to it
// and composes these cross-cutting pieces into its system prompt.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Persona shared by every advisory flow.
pub const AGRONOMIST_PERSONA: &str = "You are an experienced agronomist advising \
    small and marginal farmers on behalf of a non-profit organization. \
    Prefer affordable, locally available inputs and practices. \
    Use plain language a farmer can act on.";

/// Safety fragment appended to flows that may mention agrochemicals.
pub const SAFETY_INSTRUCTION: &str = "\
    Never recommend products banned for agricultural use. \
    Always state protective equipment and waiting periods before harvest when a chemical is involved.";

/// Builds a flow's system prompt from the shared persona, a flow-specific role line and the JSON rule.
pub fn advisory_system(role: &str) -> String {
    format!("{AGRONOMIST_PERSONA} {role} {JSON_ONLY_SYSTEM}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advisory_system_keeps_json_rule_last() {
        let system = advisory_system("Recommend fertilizers.");
        assert!(system.starts_with(AGRONOMIST_PERSONA));
        assert!(system.contains("Recommend fertilizers."));
        assert!(system.ends_with(JSON_ONLY_SYSTEM));
    }
}
