//! Resolution of effective sequencing data across a manifest.
//!
//! Delivery controls resolve in three steps: the item's own sequencing
//! element, then the sequencing-collection entry its `IDRef` points at,
//! then the SCORM defaults. Activities whose controls came from the first
//! two steps land in the override set. The same traversal accumulates
//! global objective mappings and the per-item metadata maps.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use scormlens_model::{
    CompletionThreshold, ControlMode, DeliveryControls, Item, Scorm2004Manifest, Sequencing,
};

/// Effective delivery controls for one activity, defaults filled in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedDeliveryControls {
    /// Whether the LMS tracks this activity
    pub tracked: bool,
    /// Whether the content reports its own completion
    pub completion_set_by_content: bool,
    /// Whether the content reports its own objective status
    pub objective_set_by_content: bool,
}

impl Default for ResolvedDeliveryControls {
    fn default() -> Self {
        ResolvedDeliveryControls {
            tracked: true,
            completion_set_by_content: false,
            objective_set_by_content: false,
        }
    }
}

impl From<&DeliveryControls> for ResolvedDeliveryControls {
    fn from(controls: &DeliveryControls) -> Self {
        let defaults = ResolvedDeliveryControls::default();
        ResolvedDeliveryControls {
            tracked: controls.tracked.unwrap_or(defaults.tracked),
            completion_set_by_content: controls
                .completion_set_by_content
                .unwrap_or(defaults.completion_set_by_content),
            objective_set_by_content: controls
                .objective_set_by_content
                .unwrap_or(defaults.objective_set_by_content),
        }
    }
}

/// Everything one resolution pass over a manifest produces
#[derive(Debug, Clone, Default)]
pub struct SequencingResolution {
    /// Resolved delivery controls per activity identifier
    pub delivery_controls: HashMap<String, ResolvedDeliveryControls>,
    /// Activities whose manifest explicitly supplied delivery controls
    pub overrides: HashSet<String>,
    /// Global objective IDs in first-seen order, deduplicated
    pub global_objective_ids: Vec<String>,
    /// Completion thresholds per activity identifier (only where supplied)
    pub completion_thresholds: HashMap<String, CompletionThreshold>,
    /// Time-limit actions per activity identifier (only where supplied)
    pub time_limit_actions: HashMap<String, String>,
    /// LMS initialization data per activity identifier (only where supplied)
    pub data_from_lms: HashMap<String, String>,
    /// Hidden navigation-UI elements per activity identifier (only where supplied)
    pub hide_lms_ui: HashMap<String, Vec<String>>,
    /// Control-mode flags per activity identifier (only where supplied)
    pub control_modes: HashMap<String, ControlMode>,
}

/// Walks a manifest's items and resolves their effective sequencing data
pub struct SequencingResolver;

impl SequencingResolver {
    /// Resolve effective sequencing data for every identified item.
    ///
    /// Accumulators are built fresh on every call: resolving the same
    /// manifest twice yields identical maps.
    pub fn resolve(manifest: &Scorm2004Manifest) -> SequencingResolution {
        let mut resolution = SequencingResolution::default();
        let mut seen_objectives: HashSet<String> = HashSet::new();

        let organizations = match manifest.organizations.as_ref() {
            Some(orgs) => orgs,
            None => return resolution,
        };

        // Pre-order over every organization's items; an explicit stack
        // keeps arbitrarily deep hierarchies off the call stack.
        let mut worklist: Vec<&Item> = Vec::new();
        for organization in &organizations.organizations {
            for item in organization.items.iter().rev() {
                worklist.push(item);
            }
        }

        while let Some(item) = worklist.pop() {
            Self::resolve_item(manifest, item, &mut resolution, &mut seen_objectives);
            for child in item.items.iter().rev() {
                worklist.push(child);
            }
        }

        debug!(
            activities = resolution.delivery_controls.len(),
            overrides = resolution.overrides.len(),
            global_objectives = resolution.global_objective_ids.len(),
            "resolved sequencing data"
        );
        resolution
    }

    fn resolve_item(
        manifest: &Scorm2004Manifest,
        item: &Item,
        resolution: &mut SequencingResolution,
        seen_objectives: &mut HashSet<String>,
    ) {
        let identifier = match item.identifier.as_deref().filter(|id| !id.trim().is_empty()) {
            Some(id) => id,
            None => return,
        };

        let effective = Self::effective_sequencing(manifest, item.sequencing.as_ref());

        let supplied_controls =
            effective.and_then(|sequencing| sequencing.delivery_controls.as_ref());
        let controls = supplied_controls
            .map(ResolvedDeliveryControls::from)
            .unwrap_or_default();
        resolution
            .delivery_controls
            .insert(identifier.to_string(), controls);
        if supplied_controls.is_some() {
            resolution.overrides.insert(identifier.to_string());
        }

        if let Some(sequencing) = effective {
            if let Some(objectives) = sequencing.objectives.as_ref() {
                for objective in objectives.iter() {
                    for map_info in &objective.map_info {
                        let target = map_info
                            .target_objective_id
                            .as_deref()
                            .map(str::trim)
                            .filter(|target| !target.is_empty());
                        if let Some(target) = target {
                            if seen_objectives.insert(target.to_string()) {
                                resolution.global_objective_ids.push(target.to_string());
                            }
                        }
                    }
                }
            }

            if let Some(threshold) = sequencing.completion_threshold.as_ref() {
                resolution
                    .completion_thresholds
                    .insert(identifier.to_string(), threshold.clone());
            }

            if let Some(action) = sequencing.time_limit_action.as_ref() {
                resolution
                    .time_limit_actions
                    .insert(identifier.to_string(), action.clone());
            }

            if let Some(control_mode) = sequencing.control_mode.as_ref() {
                resolution
                    .control_modes
                    .insert(identifier.to_string(), control_mode.clone());
            }
        }

        if let Some(data) = item.data_from_lms.as_ref() {
            resolution
                .data_from_lms
                .insert(identifier.to_string(), data.clone());
        }

        if !item.hide_lms_ui.is_empty() {
            resolution
                .hide_lms_ui
                .insert(identifier.to_string(), item.hide_lms_ui.clone());
        }
    }

    /// The sequencing definition that actually applies to an item: its own
    /// element, or the collection entry its `IDRef` designates.
    pub fn effective_sequencing<'a>(
        manifest: &'a Scorm2004Manifest,
        sequencing: Option<&'a Sequencing>,
    ) -> Option<&'a Sequencing> {
        let sequencing = sequencing?;
        if sequencing.delivery_controls.is_some()
            || sequencing.control_mode.is_some()
            || sequencing.objectives.is_some()
            || sequencing.rollup_rules.is_some()
            || sequencing.completion_threshold.is_some()
            || sequencing.time_limit_action.is_some()
        {
            return Some(sequencing);
        }
        let id_ref = sequencing.id_ref.as_deref()?;
        manifest
            .sequencing_collection
            .as_ref()
            .and_then(|collection| collection.find(id_ref))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scormlens_model::{
        MapInfo, Objective, Objectives, Organization, Organizations, SequencingCollection,
    };

    fn manifest_with_items(items: Vec<Item>) -> Scorm2004Manifest {
        Scorm2004Manifest {
            organizations: Some(Organizations {
                default: Some("org_1".to_string()),
                organizations: vec![Organization {
                    identifier: Some("org_1".to_string()),
                    items,
                    ..Default::default()
                }],
            }),
            ..Default::default()
        }
    }

    fn item_with_sequencing(id: &str, sequencing: Option<Sequencing>) -> Item {
        Item {
            identifier: Some(id.to_string()),
            sequencing,
            ..Default::default()
        }
    }

    // ========================================================================
    // Delivery-control resolution
    // ========================================================================

    #[test]
    fn test_item_without_sequencing_gets_defaults_and_no_override() {
        let manifest = manifest_with_items(vec![item_with_sequencing("item_1", None)]);

        let resolution = SequencingResolver::resolve(&manifest);
        let controls = resolution.delivery_controls.get("item_1").unwrap();
        assert!(controls.tracked);
        assert!(!controls.completion_set_by_content);
        assert!(!controls.objective_set_by_content);
        assert!(!resolution.overrides.contains("item_1"));
    }

    #[test]
    fn test_direct_delivery_controls_are_used_and_recorded_as_override() {
        let sequencing = Sequencing {
            delivery_controls: Some(DeliveryControls {
                tracked: Some(false),
                ..Default::default()
            }),
            ..Default::default()
        };
        let manifest = manifest_with_items(vec![item_with_sequencing("item_1", Some(sequencing))]);

        let resolution = SequencingResolver::resolve(&manifest);
        let controls = resolution.delivery_controls.get("item_1").unwrap();
        assert!(!controls.tracked);
        assert!(resolution.overrides.contains("item_1"));
    }

    #[test]
    fn test_id_ref_indirection_resolves_through_collection() {
        let sequencing = Sequencing {
            id_ref: Some("shared".to_string()),
            ..Default::default()
        };
        let mut manifest =
            manifest_with_items(vec![item_with_sequencing("item_1", Some(sequencing))]);
        manifest.sequencing_collection = Some(SequencingCollection {
            sequencings: vec![Sequencing {
                id: Some("shared".to_string()),
                delivery_controls: Some(DeliveryControls {
                    completion_set_by_content: Some(true),
                    ..Default::default()
                }),
                ..Default::default()
            }],
        });

        let resolution = SequencingResolver::resolve(&manifest);
        let controls = resolution.delivery_controls.get("item_1").unwrap();
        assert!(controls.tracked);
        assert!(controls.completion_set_by_content);
        assert!(resolution.overrides.contains("item_1"));
    }

    #[test]
    fn test_dangling_id_ref_falls_back_to_defaults() {
        let sequencing = Sequencing {
            id_ref: Some("missing".to_string()),
            ..Default::default()
        };
        let manifest = manifest_with_items(vec![item_with_sequencing("item_1", Some(sequencing))]);

        let resolution = SequencingResolver::resolve(&manifest);
        let controls = resolution.delivery_controls.get("item_1").unwrap();
        assert_eq!(*controls, ResolvedDeliveryControls::default());
        assert!(!resolution.overrides.contains("item_1"));
    }

    // ========================================================================
    // Global objective accumulation
    // ========================================================================

    #[test]
    fn test_global_objectives_deduplicated_in_first_seen_order() {
        let objectives = Objectives {
            primary: Some(Objective {
                map_info: vec![
                    MapInfo {
                        target_objective_id: Some("glob_b".to_string()),
                        ..Default::default()
                    },
                    MapInfo {
                        target_objective_id: Some("glob_a".to_string()),
                        ..Default::default()
                    },
                ],
                ..Default::default()
            }),
            objectives: vec![Objective {
                map_info: vec![MapInfo {
                    target_objective_id: Some("glob_b".to_string()),
                    ..Default::default()
                }],
                ..Default::default()
            }],
        };
        let sequencing = Sequencing {
            objectives: Some(objectives),
            ..Default::default()
        };
        let manifest = manifest_with_items(vec![item_with_sequencing("item_1", Some(sequencing))]);

        let resolution = SequencingResolver::resolve(&manifest);
        assert_eq!(resolution.global_objective_ids, vec!["glob_b", "glob_a"]);
    }

    #[test]
    fn test_blank_objective_targets_are_skipped() {
        let objectives = Objectives {
            primary: Some(Objective {
                map_info: vec![MapInfo {
                    target_objective_id: Some("   ".to_string()),
                    ..Default::default()
                }],
                ..Default::default()
            }),
            objectives: vec![],
        };
        let sequencing = Sequencing {
            objectives: Some(objectives),
            ..Default::default()
        };
        let manifest = manifest_with_items(vec![item_with_sequencing("item_1", Some(sequencing))]);

        let resolution = SequencingResolver::resolve(&manifest);
        assert!(resolution.global_objective_ids.is_empty());
    }

    // ========================================================================
    // Per-item metadata maps
    // ========================================================================

    #[test]
    fn test_absent_fields_produce_no_map_entries() {
        let manifest = manifest_with_items(vec![item_with_sequencing("item_1", None)]);

        let resolution = SequencingResolver::resolve(&manifest);
        assert!(resolution.completion_thresholds.is_empty());
        assert!(resolution.time_limit_actions.is_empty());
        assert!(resolution.data_from_lms.is_empty());
        assert!(resolution.hide_lms_ui.is_empty());
        assert!(resolution.control_modes.is_empty());
    }

    #[test]
    fn test_supplied_fields_are_keyed_by_item_identifier() {
        let sequencing = Sequencing {
            completion_threshold: Some(CompletionThreshold {
                min_progress_measure: Some(0.8),
                ..Default::default()
            }),
            time_limit_action: Some("exit,message".to_string()),
            control_mode: Some(ControlMode {
                choice: Some(false),
                flow: Some(true),
                ..Default::default()
            }),
            ..Default::default()
        };
        let mut item = item_with_sequencing("item_1", Some(sequencing));
        item.data_from_lms = Some("launch-data".to_string());
        item.hide_lms_ui = vec!["continue".to_string(), "previous".to_string()];
        let manifest = manifest_with_items(vec![item]);

        let resolution = SequencingResolver::resolve(&manifest);
        assert_eq!(
            resolution
                .completion_thresholds
                .get("item_1")
                .and_then(|threshold| threshold.min_progress_measure),
            Some(0.8)
        );
        assert_eq!(
            resolution.time_limit_actions.get("item_1").map(String::as_str),
            Some("exit,message")
        );
        assert_eq!(
            resolution.data_from_lms.get("item_1").map(String::as_str),
            Some("launch-data")
        );
        assert_eq!(
            resolution.hide_lms_ui.get("item_1").map(Vec::len),
            Some(2)
        );
        assert_eq!(
            resolution
                .control_modes
                .get("item_1")
                .and_then(|mode| mode.choice),
            Some(false)
        );
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let sequencing = Sequencing {
            delivery_controls: Some(DeliveryControls {
                objective_set_by_content: Some(true),
                ..Default::default()
            }),
            ..Default::default()
        };
        let manifest = manifest_with_items(vec![
            item_with_sequencing("item_1", Some(sequencing)),
            item_with_sequencing("item_2", None),
        ]);

        let first = SequencingResolver::resolve(&manifest);
        let second = SequencingResolver::resolve(&manifest);
        assert_eq!(first.delivery_controls.len(), second.delivery_controls.len());
        assert_eq!(first.overrides, second.overrides);
        assert_eq!(first.global_objective_ids, second.global_objective_ids);
    }
}
