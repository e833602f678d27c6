//! SCORM 2004 manifest object model, including the sequencing and rollup
//! data model consumed by the activity tree builder and the validators.
//!
//! Every nested element is optional: a manifest missing its identifier or
//! its organizations still deserializes, and the gaps surface later as
//! validation issues rather than parse failures.

use serde::{Deserialize, Serialize};

/// Root of a SCORM 2004 content-package manifest
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Scorm2004Manifest {
    /// Manifest identifier
    pub identifier: Option<String>,
    /// Manifest version string
    pub version: Option<String>,
    /// Schema name declared by the package (e.g. "ADL SCORM")
    pub schema: Option<String>,
    /// Schema version declared by the package (e.g. "2004 4th Edition")
    pub schema_version: Option<String>,
    /// Organizations element with its default pointer
    pub organizations: Option<Organizations>,
    /// Resources element
    pub resources: Option<Resources>,
    /// Reusable sequencing definitions referenced by ID from items
    pub sequencing_collection: Option<SequencingCollection>,
}

impl Scorm2004Manifest {
    /// Resolve the organization the default pointer designates, falling
    /// back to the first listed organization when no pointer is set.
    pub fn default_organization(&self) -> Option<&Organization> {
        let orgs = self.organizations.as_ref()?;
        if let Some(default_id) = orgs.default.as_deref().filter(|id| !id.trim().is_empty()) {
            if let Some(org) = orgs
                .organizations
                .iter()
                .find(|org| org.identifier.as_deref() == Some(default_id))
            {
                return Some(org);
            }
        }
        orgs.organizations.first()
    }
}

/// Container of content hierarchies plus the default-organization pointer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Organizations {
    /// Identifier of the default organization (optional attribute)
    pub default: Option<String>,
    /// The organizations in document order
    pub organizations: Vec<Organization>,
}

/// Named root of one content hierarchy
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Organization {
    /// Organization identifier
    pub identifier: Option<String>,
    /// Human-readable title
    pub title: Option<String>,
    /// Top-level items in document order
    pub items: Vec<Item>,
    /// Sequencing applied to the organization root
    pub sequencing: Option<Sequencing>,
}

/// Node in a content hierarchy
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Item {
    /// Item identifier
    pub identifier: Option<String>,
    /// Reference to a resource; absent for pure grouping nodes
    pub identifier_ref: Option<String>,
    /// Human-readable title
    pub title: Option<String>,
    /// Whether the item is shown in navigation UIs (defaults to visible)
    pub is_visible: Option<bool>,
    /// Launch parameters appended to the resource href
    pub parameters: Option<String>,
    /// Nested child items in document order
    pub items: Vec<Item>,
    /// Sequencing configuration for this item
    pub sequencing: Option<Sequencing>,
    /// Initialization data handed to the content by the LMS
    pub data_from_lms: Option<String>,
    /// Navigation-UI elements the LMS should hide for this item
    pub hide_lms_ui: Vec<String>,
}

impl Item {
    /// Whether this item is visible; unset means visible.
    pub fn visible(&self) -> bool {
        self.is_visible.unwrap_or(true)
    }
}

/// Resources element
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Resources {
    /// Base path prepended to resource hrefs
    pub base: Option<String>,
    /// The resources in document order
    pub resources: Vec<Resource>,
}

/// A launchable or supporting resource
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Resource {
    /// Resource identifier, referenced by item identifierRefs
    pub identifier: Option<String>,
    /// Resource type (e.g. "webcontent")
    #[serde(rename = "type")]
    pub resource_type: Option<String>,
    /// SCORM content type ("sco" or "asset")
    pub scorm_type: Option<String>,
    /// Launch path relative to the package root
    pub href: Option<String>,
    /// Files belonging to this resource
    pub files: Vec<ManifestFile>,
    /// Other resources this resource depends on
    pub dependencies: Vec<Dependency>,
}

/// A file entry inside a resource
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ManifestFile {
    /// File path relative to the package root
    pub href: Option<String>,
}

/// A dependency on another resource
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Dependency {
    /// Identifier of the resource depended on
    pub identifier_ref: Option<String>,
}

/// Manifest-level table of reusable sequencing definitions
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SequencingCollection {
    /// The reusable definitions; each carries an `id` items point at
    pub sequencings: Vec<Sequencing>,
}

impl SequencingCollection {
    /// Look up a reusable definition by its ID.
    pub fn find(&self, id: &str) -> Option<&Sequencing> {
        self.sequencings
            .iter()
            .find(|seq| seq.id.as_deref() == Some(id))
    }
}

/// Sequencing configuration attached to an organization, an item, or a
/// sequencing-collection entry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Sequencing {
    /// ID under which this definition is registered in the collection
    pub id: Option<String>,
    /// Reference to a sequencing-collection entry to inherit from
    #[serde(rename = "idRef")]
    pub id_ref: Option<String>,
    /// Control mode flags
    pub control_mode: Option<ControlMode>,
    /// Objectives (primary plus additional)
    pub objectives: Option<Objectives>,
    /// Rollup rules governing status aggregation
    pub rollup_rules: Option<RollupRules>,
    /// Delivery controls
    pub delivery_controls: Option<DeliveryControls>,
    /// Completion threshold
    pub completion_threshold: Option<CompletionThreshold>,
    /// Action taken when the activity's time limit is exceeded
    pub time_limit_action: Option<String>,
}

/// Control mode flags restricting learner navigation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ControlMode {
    /// Learner may pick any child activity
    pub choice: Option<bool>,
    /// Learner may leave a choice-entered activity
    pub choice_exit: Option<bool>,
    /// Flow navigation (continue/previous) is enabled
    pub flow: Option<bool>,
    /// Backward navigation is disallowed
    pub forward_only: Option<bool>,
    /// Objective info from the current attempt only
    pub use_current_attempt_objective_info: Option<bool>,
    /// Progress info from the current attempt only
    pub use_current_attempt_progress_info: Option<bool>,
}

impl ControlMode {
    /// Whether any flag was explicitly supplied.
    pub fn any_set(&self) -> bool {
        self.choice.is_some()
            || self.choice_exit.is_some()
            || self.flow.is_some()
            || self.forward_only.is_some()
            || self.use_current_attempt_objective_info.is_some()
            || self.use_current_attempt_progress_info.is_some()
    }
}

/// Objectives element: one primary objective plus any number of others
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Objectives {
    /// The primary objective contributing to rollup
    pub primary: Option<Objective>,
    /// Additional objectives
    pub objectives: Vec<Objective>,
}

impl Objectives {
    /// Iterate the primary objective (if any) followed by the others.
    pub fn iter(&self) -> impl Iterator<Item = &Objective> {
        self.primary.iter().chain(self.objectives.iter())
    }

    /// Total number of objectives, primary included.
    pub fn count(&self) -> usize {
        usize::from(self.primary.is_some()) + self.objectives.len()
    }
}

/// A local learning objective, optionally mapped to global objectives
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Objective {
    /// Objective identifier
    #[serde(rename = "objectiveID")]
    pub objective_id: Option<String>,
    /// Whether satisfaction is derived from the measure
    pub satisfied_by_measure: Option<bool>,
    /// Minimum normalized measure for satisfaction
    pub min_normalized_measure: Option<f64>,
    /// Mappings onto shared global objectives
    pub map_info: Vec<MapInfo>,
}

/// A mapping between a local objective and a global objective
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MapInfo {
    /// Identifier of the global objective mapped onto
    #[serde(rename = "targetObjectiveID")]
    pub target_objective_id: Option<String>,
    /// Read satisfied status from the global objective
    pub read_satisfied_status: Option<bool>,
    /// Write satisfied status to the global objective
    pub write_satisfied_status: Option<bool>,
    /// Read normalized measure from the global objective
    pub read_normalized_measure: Option<bool>,
    /// Write normalized measure to the global objective
    pub write_normalized_measure: Option<bool>,
}

/// Rollup rules element
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RollupRules {
    /// Whether this activity's objective contributes to its parent's rollup
    pub rollup_objective_satisfied: Option<bool>,
    /// Whether this activity's progress contributes to its parent's rollup
    pub rollup_progress_completion: Option<bool>,
    /// Weight applied to this activity's measure during rollup
    pub objective_measure_weight: Option<f64>,
    /// The individual rollup rules
    pub rules: Vec<RollupRule>,
}

/// One rollup rule: a child-activity set, conditions, and an action
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RollupRule {
    /// Which children participate in the evaluation
    pub child_activity_set: Option<ChildActivitySet>,
    /// Minimum child count for the `AtLeastCount` set
    pub minimum_count: Option<u32>,
    /// Minimum child percentage for the `AtLeastPercent` set
    pub minimum_percent: Option<f64>,
    /// Conditions evaluated against the participating children
    pub conditions: Option<RollupConditions>,
    /// Action applied to the parent when the conditions hold
    pub action: Option<RollupAction>,
}

/// Which child activities a rollup rule evaluates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChildActivitySet {
    /// All tracked children
    All,
    /// Any tracked child
    Any,
    /// No tracked child
    None,
    /// At least `minimumCount` children
    AtLeastCount,
    /// At least `minimumPercent` of children
    AtLeastPercent,
}

/// Condition list plus its combination logic
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RollupConditions {
    /// How the individual conditions combine
    pub condition_combination: Option<ConditionCombination>,
    /// The individual conditions
    pub conditions: Vec<RollupCondition>,
}

/// How a condition list combines into one boolean
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionCombination {
    /// Every condition must hold
    All,
    /// At least one condition must hold
    Any,
}

/// One rollup condition with its operator
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RollupCondition {
    /// The tracked state the condition inspects
    pub condition: Option<RollupConditionType>,
    /// Operator applied to the condition result
    pub operator: Option<ConditionOperator>,
}

/// Tracked states a rollup condition can inspect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RollupConditionType {
    /// Child objective is satisfied
    Satisfied,
    /// Child objective status is known
    ObjectiveStatusKnown,
    /// Child objective measure is known
    ObjectiveMeasureKnown,
    /// Child activity is completed
    Completed,
    /// Child activity progress is known
    ActivityProgressKnown,
    /// Child activity has been attempted
    Attempted,
    /// Child activity attempt limit is exceeded
    AttemptLimitExceeded,
    /// Never holds
    Never,
}

/// Operator applied to a single condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConditionOperator {
    /// Use the condition result as-is
    NoOp,
    /// Negate the condition result
    Not,
}

/// Action a rollup rule applies to the parent activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RollupAction {
    /// Mark the parent objective satisfied
    Satisfied,
    /// Mark the parent objective not satisfied
    NotSatisfied,
    /// Mark the parent completed
    Completed,
    /// Mark the parent incomplete
    Incomplete,
}

/// Delivery controls as written in the manifest (all optional)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeliveryControls {
    /// Whether the LMS tracks this activity
    pub tracked: Option<bool>,
    /// Whether the content reports its own completion
    pub completion_set_by_content: Option<bool>,
    /// Whether the content reports its own objective status
    pub objective_set_by_content: Option<bool>,
}

/// Completion threshold configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompletionThreshold {
    /// Whether completion is derived from the progress measure
    pub completed_by_measure: Option<bool>,
    /// Minimum progress measure counting as complete
    pub min_progress_measure: Option<f64>,
    /// Weight applied to this activity's progress measure
    pub progress_weight: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_organization_follows_pointer() {
        let manifest = Scorm2004Manifest {
            organizations: Some(Organizations {
                default: Some("org_b".to_string()),
                organizations: vec![
                    Organization {
                        identifier: Some("org_a".to_string()),
                        ..Default::default()
                    },
                    Organization {
                        identifier: Some("org_b".to_string()),
                        ..Default::default()
                    },
                ],
            }),
            ..Default::default()
        };

        let org = manifest.default_organization().unwrap();
        assert_eq!(org.identifier.as_deref(), Some("org_b"));
    }

    #[test]
    fn test_default_organization_falls_back_to_first() {
        let manifest = Scorm2004Manifest {
            organizations: Some(Organizations {
                default: None,
                organizations: vec![Organization {
                    identifier: Some("org_a".to_string()),
                    ..Default::default()
                }],
            }),
            ..Default::default()
        };

        let org = manifest.default_organization().unwrap();
        assert_eq!(org.identifier.as_deref(), Some("org_a"));
    }

    #[test]
    fn test_default_organization_none_without_organizations() {
        let manifest = Scorm2004Manifest::default();
        assert!(manifest.default_organization().is_none());
    }

    #[test]
    fn test_sequencing_collection_lookup() {
        let collection = SequencingCollection {
            sequencings: vec![
                Sequencing {
                    id: Some("common".to_string()),
                    ..Default::default()
                },
                Sequencing {
                    id: Some("strict".to_string()),
                    ..Default::default()
                },
            ],
        };

        assert!(collection.find("strict").is_some());
        assert!(collection.find("missing").is_none());
    }

    #[test]
    fn test_objectives_iter_includes_primary_first() {
        let objectives = Objectives {
            primary: Some(Objective {
                objective_id: Some("primary".to_string()),
                ..Default::default()
            }),
            objectives: vec![Objective {
                objective_id: Some("secondary".to_string()),
                ..Default::default()
            }],
        };

        let ids: Vec<_> = objectives
            .iter()
            .filter_map(|obj| obj.objective_id.as_deref())
            .collect();
        assert_eq!(ids, vec!["primary", "secondary"]);
        assert_eq!(objectives.count(), 2);
    }

    #[test]
    fn test_item_visible_defaults_to_true() {
        let item = Item::default();
        assert!(item.visible());

        let hidden = Item {
            is_visible: Some(false),
            ..Default::default()
        };
        assert!(!hidden.visible());
    }
}
