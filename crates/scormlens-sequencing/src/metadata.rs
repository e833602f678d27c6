//! Assembled sequencing metadata for one manifest.
//!
//! Computed once from the tree, the resolution pass, and the usage
//! detector; read-only afterwards. This is the record LMS integrations
//! consume.

use std::collections::{HashMap, HashSet};

use scormlens_model::{CompletionThreshold, ControlMode, Scorm2004Manifest};

use crate::resolution::{ResolvedDeliveryControls, SequencingResolver};
use crate::tree::ActivityTree;
use crate::usage::{SequencingLevel, SequencingUsageDetector};

/// Read-only sequencing metadata derived from one manifest
#[derive(Debug, Clone)]
pub struct SequencingMetadata {
    level: SequencingLevel,
    indicator_tags: Vec<String>,
    delivery_controls: HashMap<String, ResolvedDeliveryControls>,
    overrides: HashSet<String>,
    global_objective_ids: Vec<String>,
    completion_thresholds: HashMap<String, CompletionThreshold>,
    time_limit_actions: HashMap<String, String>,
    data_from_lms: HashMap<String, String>,
    hide_lms_ui: HashMap<String, Vec<String>>,
    control_modes: HashMap<String, ControlMode>,
}

impl SequencingMetadata {
    /// Extract the full metadata record from a manifest.
    pub fn from_manifest(manifest: &Scorm2004Manifest) -> SequencingMetadata {
        let resolution = SequencingResolver::resolve(manifest);
        let usage = SequencingUsageDetector::detect(manifest);

        SequencingMetadata {
            level: usage.level,
            indicator_tags: usage.indicator_tags(),
            delivery_controls: resolution.delivery_controls,
            overrides: resolution.overrides,
            global_objective_ids: resolution.global_objective_ids,
            completion_thresholds: resolution.completion_thresholds,
            time_limit_actions: resolution.time_limit_actions,
            data_from_lms: resolution.data_from_lms,
            hide_lms_ui: resolution.hide_lms_ui,
            control_modes: resolution.control_modes,
        }
    }

    /// Build the activity tree for the same manifest. Returns `None` when
    /// the manifest has no default organization.
    pub fn build_tree(manifest: &Scorm2004Manifest) -> Option<ActivityTree> {
        ActivityTree::build(manifest)
    }

    /// The overall sequencing level.
    pub fn level(&self) -> SequencingLevel {
        self.level
    }

    /// Sorted indicator tags describing the sequencing features in use.
    pub fn indicator_tags(&self) -> &[String] {
        &self.indicator_tags
    }

    /// Resolved delivery controls for an activity; SCORM defaults when the
    /// activity is unknown.
    pub fn delivery_controls_for(&self, activity_id: &str) -> ResolvedDeliveryControls {
        self.delivery_controls
            .get(activity_id)
            .copied()
            .unwrap_or_default()
    }

    /// Whether the manifest explicitly supplied delivery controls for an
    /// activity rather than relying on defaults.
    pub fn overrides_defaults(&self, activity_id: &str) -> bool {
        self.overrides.contains(activity_id)
    }

    /// Activities with explicitly supplied delivery controls.
    pub fn overridden_activities(&self) -> &HashSet<String> {
        &self.overrides
    }

    /// Global objective IDs referenced anywhere in the manifest, in
    /// first-seen order.
    pub fn global_objective_ids(&self) -> &[String] {
        &self.global_objective_ids
    }

    /// Completion thresholds keyed by activity identifier.
    pub fn completion_thresholds(&self) -> &HashMap<String, CompletionThreshold> {
        &self.completion_thresholds
    }

    /// Time-limit actions keyed by activity identifier.
    pub fn time_limit_actions(&self) -> &HashMap<String, String> {
        &self.time_limit_actions
    }

    /// LMS initialization data keyed by activity identifier.
    pub fn data_from_lms(&self) -> &HashMap<String, String> {
        &self.data_from_lms
    }

    /// Hidden navigation-UI lists keyed by activity identifier.
    pub fn hide_lms_ui(&self) -> &HashMap<String, Vec<String>> {
        &self.hide_lms_ui
    }

    /// Control-mode flags keyed by activity identifier.
    pub fn control_modes(&self) -> &HashMap<String, ControlMode> {
        &self.control_modes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scormlens_model::{
        DeliveryControls, Item, Organization, Organizations, Sequencing,
    };

    fn simple_manifest() -> Scorm2004Manifest {
        Scorm2004Manifest {
            identifier: Some("manifest_1".to_string()),
            organizations: Some(Organizations {
                default: Some("org_1".to_string()),
                organizations: vec![Organization {
                    identifier: Some("org_1".to_string()),
                    items: vec![Item {
                        identifier: Some("item_1".to_string()),
                        identifier_ref: Some("res_1".to_string()),
                        ..Default::default()
                    }],
                    ..Default::default()
                }],
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_metadata_for_plain_manifest() {
        let metadata = SequencingMetadata::from_manifest(&simple_manifest());

        assert_eq!(metadata.level(), SequencingLevel::None);
        assert!(metadata.indicator_tags().is_empty());
        assert!(!metadata.overrides_defaults("item_1"));

        let controls = metadata.delivery_controls_for("item_1");
        assert!(controls.tracked);
        assert!(!controls.completion_set_by_content);
        assert!(!controls.objective_set_by_content);
    }

    #[test]
    fn test_unknown_activity_gets_defaults() {
        let metadata = SequencingMetadata::from_manifest(&simple_manifest());
        assert_eq!(
            metadata.delivery_controls_for("no_such_activity"),
            ResolvedDeliveryControls::default()
        );
        assert!(!metadata.overrides_defaults("no_such_activity"));
    }

    #[test]
    fn test_metadata_reflects_overrides() {
        let mut manifest = simple_manifest();
        if let Some(orgs) = manifest.organizations.as_mut() {
            orgs.organizations[0].items[0].sequencing = Some(Sequencing {
                delivery_controls: Some(DeliveryControls {
                    completion_set_by_content: Some(true),
                    ..Default::default()
                }),
                ..Default::default()
            });
        }

        let metadata = SequencingMetadata::from_manifest(&manifest);
        assert!(metadata.overrides_defaults("item_1"));
        assert!(metadata.delivery_controls_for("item_1").completion_set_by_content);
        assert_eq!(metadata.level(), SequencingLevel::Basic);
        assert_eq!(metadata.indicator_tags().to_vec(), vec!["delivery_controls"]);
    }
}
