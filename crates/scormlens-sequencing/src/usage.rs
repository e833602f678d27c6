//! Classification of how extensively a manifest uses sequencing.
//!
//! The detector scans every sequencing element for indicator features and
//! derives a three-tier level from which indicator categories are present.
//! The exact basic/advanced boundary has no published specification; the
//! categories below treat navigation-restricting and rollup-bearing
//! features as advanced and everything else as basic.

use std::collections::BTreeSet;
use std::fmt;

use scormlens_model::{Item, Scorm2004Manifest, Sequencing};

/// Three-tier classification of sequencing sophistication
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SequencingLevel {
    /// No sequencing elements at all
    None,
    /// Sequencing present but only simple features
    Basic,
    /// Navigation restrictions, rollup, or objective mapping present
    Advanced,
}

/// A specific sequencing feature found in the manifest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SequencingIndicator {
    /// Control-mode flags customize navigation
    ControlMode,
    /// Delivery controls are supplied explicitly
    DeliveryControls,
    /// A completion threshold is configured
    CompletionThreshold,
    /// A time-limit action is configured
    TimeLimitAction,
    /// Rollup rules are defined
    RollupRules,
    /// More than one objective is defined on an activity
    MultipleObjectives,
    /// Objectives map onto global objectives
    ObjectiveMapping,
    /// Items reference the shared sequencing collection
    SharedCollection,
}

impl SequencingIndicator {
    /// Whether this indicator alone pushes the level to advanced.
    fn advanced(self) -> bool {
        matches!(
            self,
            SequencingIndicator::ControlMode
                | SequencingIndicator::RollupRules
                | SequencingIndicator::MultipleObjectives
                | SequencingIndicator::ObjectiveMapping
        )
    }
}

impl fmt::Display for SequencingIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            SequencingIndicator::ControlMode => "control_mode",
            SequencingIndicator::DeliveryControls => "delivery_controls",
            SequencingIndicator::CompletionThreshold => "completion_threshold",
            SequencingIndicator::TimeLimitAction => "time_limit_action",
            SequencingIndicator::RollupRules => "rollup_rules",
            SequencingIndicator::MultipleObjectives => "multiple_objectives",
            SequencingIndicator::ObjectiveMapping => "objective_mapping",
            SequencingIndicator::SharedCollection => "shared_collection",
        };
        f.write_str(tag)
    }
}

/// Detected level plus the specific features behind it
#[derive(Debug, Clone)]
pub struct SequencingUsage {
    /// The overall classification
    pub level: SequencingLevel,
    /// Indicators found, in a deterministic order
    pub indicators: BTreeSet<SequencingIndicator>,
}

impl SequencingUsage {
    /// Indicator tags as sorted strings for reporting.
    pub fn indicator_tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = self
            .indicators
            .iter()
            .map(SequencingIndicator::to_string)
            .collect();
        tags.sort();
        tags
    }
}

/// Scans a manifest's items for sequencing indicators
pub struct SequencingUsageDetector;

impl SequencingUsageDetector {
    /// Classify a manifest's sequencing usage.
    pub fn detect(manifest: &Scorm2004Manifest) -> SequencingUsage {
        let mut indicators = BTreeSet::new();

        if let Some(organizations) = manifest.organizations.as_ref() {
            let mut worklist: Vec<&Item> = Vec::new();
            for organization in &organizations.organizations {
                if let Some(sequencing) = organization.sequencing.as_ref() {
                    Self::inspect(sequencing, &mut indicators);
                }
                for item in organization.items.iter().rev() {
                    worklist.push(item);
                }
            }

            while let Some(item) = worklist.pop() {
                if let Some(sequencing) = item.sequencing.as_ref() {
                    Self::inspect(sequencing, &mut indicators);
                }
                for child in item.items.iter().rev() {
                    worklist.push(child);
                }
            }
        }

        let level = if indicators.is_empty() {
            SequencingLevel::None
        } else if indicators.iter().any(|indicator| indicator.advanced()) {
            SequencingLevel::Advanced
        } else {
            SequencingLevel::Basic
        };

        SequencingUsage { level, indicators }
    }

    fn inspect(sequencing: &Sequencing, indicators: &mut BTreeSet<SequencingIndicator>) {
        if sequencing.id_ref.is_some() {
            indicators.insert(SequencingIndicator::SharedCollection);
        }
        if sequencing
            .control_mode
            .as_ref()
            .is_some_and(|mode| mode.any_set())
        {
            indicators.insert(SequencingIndicator::ControlMode);
        }
        if sequencing.delivery_controls.is_some() {
            indicators.insert(SequencingIndicator::DeliveryControls);
        }
        if sequencing.completion_threshold.is_some() {
            indicators.insert(SequencingIndicator::CompletionThreshold);
        }
        if sequencing.time_limit_action.is_some() {
            indicators.insert(SequencingIndicator::TimeLimitAction);
        }
        if sequencing
            .rollup_rules
            .as_ref()
            .is_some_and(|rollup| !rollup.rules.is_empty())
        {
            indicators.insert(SequencingIndicator::RollupRules);
        }
        if let Some(objectives) = sequencing.objectives.as_ref() {
            if objectives.count() > 1 {
                indicators.insert(SequencingIndicator::MultipleObjectives);
            }
            if objectives
                .iter()
                .any(|objective| !objective.map_info.is_empty())
            {
                indicators.insert(SequencingIndicator::ObjectiveMapping);
            }
        }
    }
}
