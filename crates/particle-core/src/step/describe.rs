//! Human-readable descriptor of a step registry.

use super::StepRegistry;

/// Render the registry as a multi-line descriptive string: for each step in
/// declared order (1-indexed) its ordinal, name, kind and a dump of its
/// configuration. Deterministic given the same registry and step
/// configuration; intended for persisted run metadata and interactive
/// inspection, not consumed by any engine logic.
pub fn steps_to_string(registry: &StepRegistry) -> String {
    let mut out = String::from("\n");
    for (i, (name, step)) in registry.iter().enumerate() {
        out.push_str(&format!("{}) Step: {}\n", i + 1, name));
        out.push_str(&format!("   Kind: {}\n", step.kind()));
        out.push_str(&format!("   Config: {:?}\n", step));
    }
    out
}
