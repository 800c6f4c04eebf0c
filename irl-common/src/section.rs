//! Section key derivation
//!
//! Feedback is partitioned by a `(step, section)` pair. The section half is a
//! canonical string derived from the participant's taxonomy selection, so
//! that a comment on "Simulations | Maturity | Validation Level" never lands
//! in the same bucket as "Modeling | Maturity | Validation Level" even though
//! the child-attribute label alone is ambiguous.

use crate::wizard::WizardStep;
use serde::{Deserialize, Serialize};

/// Delimiter joining the three components of a Child Attributes key.
///
/// Taxonomy labels must never contain this sequence; see
/// [`crate::taxonomy::verify_labels`].
pub const SECTION_DELIMITER: &str = " | ";

/// Sentinel meaning "no specific sub-choice".
pub const GENERAL: &str = "General";

/// A participant's taxonomy choice for the current step. Ephemeral, never
/// persisted; only the derived key is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum TaxonomySelection {
    /// No specific choice ("General").
    General,
    /// A single flat label (a category or parent-attribute name).
    Label { label: String },
    /// The hierarchical Child Attributes coordinates. `child` of `None`
    /// means the "General" sentinel, used both when the participant picks
    /// it and when the (category, parent) pair defines no children.
    Child {
        category: String,
        parent: String,
        child: Option<String>,
    },
}

/// Derive the canonical section key for a step and selection.
///
/// Deterministic and total: every (step, selection) pair maps to exactly one
/// well-formed key. Selections that do not fit the step shape degenerate to
/// the step's "General" key rather than erroring.
pub fn derive_section_key(step: WizardStep, selection: &TaxonomySelection) -> String {
    match step {
        WizardStep::Introduction => "GeneralIntro".to_string(),
        WizardStep::MethodCategories => match selection {
            TaxonomySelection::Label { label } => label.clone(),
            _ => "GeneralCategories".to_string(),
        },
        WizardStep::ParentAttributes => match selection {
            TaxonomySelection::Label { label } => label.clone(),
            _ => "GeneralAttributes".to_string(),
        },
        WizardStep::ChildAttributes => match selection {
            TaxonomySelection::Child {
                category,
                parent,
                child,
            } => compose_child_key(category, parent, child.as_deref()),
            // Shape mismatch: still a well-formed three-part key
            _ => compose_child_key(GENERAL, GENERAL, None),
        },
        WizardStep::FinalComments => "OverallFinal".to_string(),
    }
}

/// Join the three mandatory Child Attributes components, substituting the
/// "General" sentinel for an absent child attribute.
fn compose_child_key(category: &str, parent: &str, child: Option<&str>) -> String {
    format!(
        "{category}{SECTION_DELIMITER}{parent}{SECTION_DELIMITER}{}",
        child.unwrap_or(GENERAL)
    )
}
