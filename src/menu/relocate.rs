//! Moving named root-level nodes under a destination node
//!
//! Nodes are matched by exact `displayName` equality at the root only; nested
//! children are never searched. When a label occurs more than once at the root,
//! the last occurrence is the one moved, while every occurrence of a source
//! label is removed from the root.

use super::{CHILDREN_KEY, DISPLAY_NAME_KEY};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Label of the first node moved by default
pub const DEFAULT_FIRST_SOURCE: &str = "驾驶舱";

/// Label of the second node moved by default
pub const DEFAULT_SECOND_SOURCE: &str = "能源监视";

/// Label of the default destination node
pub const DEFAULT_DESTINATION: &str = "智能能源管理";

/// Which root nodes to move, and where
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelocationPlan {
    /// Labels of the nodes to move, in the order they end up in `children`
    pub sources: Vec<String>,

    /// Label of the node receiving the moved nodes
    pub destination: String,
}

impl Default for RelocationPlan {
    fn default() -> Self {
        Self {
            sources: vec![
                DEFAULT_FIRST_SOURCE.to_string(),
                DEFAULT_SECOND_SOURCE.to_string(),
            ],
            destination: DEFAULT_DESTINATION.to_string(),
        }
    }
}

impl RelocationPlan {
    fn is_source(&self, label: &str) -> bool {
        self.sources.iter().any(|s| s == label)
    }
}

/// Result of a relocation attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelocationOutcome {
    /// Source nodes were moved to the front of the destination's children
    Moved {
        /// Labels that were moved, in insertion order
        moved: Vec<String>,
        /// Label of the destination node
        destination: String,
    },

    /// At least one participant is absent from the root; document unchanged
    MissingParticipants {
        /// Labels that were not found at the root
        missing: Vec<String>,
    },

    /// Root is not an array; document unchanged
    RootNotSequence,
}

impl RelocationOutcome {
    /// Whether the document was modified
    pub fn is_moved(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

fn display_name(node: &Value) -> Option<&str> {
    node.get(DISPLAY_NAME_KEY).and_then(Value::as_str)
}

/// Move the plan's source nodes into the destination node's `children`
///
/// Consumes the document and returns it, modified only when every
/// participant was found at the root. Running it again on its own output is
/// a no-op, since the sources are no longer at the root.
///
/// # Examples
///
/// ```
/// use menu_refactor::menu::{relocate, RelocationPlan};
/// use serde_json::json;
///
/// let plan = RelocationPlan {
///     sources: vec!["A".into(), "B".into()],
///     destination: "Dest".into(),
/// };
/// let doc = json!([
///     {"displayName": "A"},
///     {"displayName": "B"},
///     {"displayName": "Dest", "children": [{"displayName": "X"}]}
/// ]);
///
/// let (doc, outcome) = relocate(doc, &plan);
/// assert!(outcome.is_moved());
/// assert_eq!(doc, json!([
///     {"displayName": "Dest", "children": [
///         {"displayName": "A"}, {"displayName": "B"}, {"displayName": "X"}
///     ]}
/// ]));
/// ```
pub fn relocate(doc: Value, plan: &RelocationPlan) -> (Value, RelocationOutcome) {
    let mut root = match doc {
        Value::Array(root) => root,
        other => {
            log::warn!("root is not a list, skipping move step");
            return (other, RelocationOutcome::RootNotSequence);
        }
    };

    // Last match wins for each label
    let mut source_indices: Vec<Option<usize>> = vec![None; plan.sources.len()];
    let mut destination_index = None;
    for (index, node) in root.iter().enumerate() {
        let Some(name) = display_name(node) else {
            continue;
        };
        if name == plan.destination {
            destination_index = Some(index);
        }
        for (slot, source) in source_indices.iter_mut().zip(&plan.sources) {
            if name == source {
                *slot = Some(index);
            }
        }
    }

    let mut missing: Vec<String> = plan
        .sources
        .iter()
        .zip(&source_indices)
        .filter(|(_, index)| index.is_none())
        .map(|(label, _)| label.clone())
        .collect();
    if destination_index.is_none() {
        missing.push(plan.destination.clone());
    }

    let (Some(destination_index), true) = (destination_index, missing.is_empty()) else {
        log::info!(
            "could not find {} at the root level, skipping move step",
            missing.join(", ")
        );
        return (Value::Array(root), RelocationOutcome::MissingParticipants { missing });
    };

    let moved_nodes: Vec<Value> = source_indices
        .iter()
        .flatten()
        .map(|&index| root[index].clone())
        .collect();

    if let Value::Object(destination) = &mut root[destination_index] {
        let children = destination
            .entry(CHILDREN_KEY)
            .or_insert_with(|| Value::Array(Vec::new()));
        if !children.is_array() {
            log::debug!("discarding non-list children value: {}", children);
            *children = Value::Array(Vec::new());
        }
        if let Value::Array(children) = children {
            children.splice(0..0, moved_nodes);
        }
    }

    let before = root.len();
    root.retain(|node| !display_name(node).is_some_and(|name| plan.is_source(name)));
    log::debug!("removed {} node(s) from the root", before - root.len());

    (
        Value::Array(root),
        RelocationOutcome::Moved {
            moved: plan.sources.clone(),
            destination: plan.destination.clone(),
        },
    )
}
