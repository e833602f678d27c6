//! End-to-end scenarios over parsing, tree building, metadata extraction,
//! and validation together.

use scormlens_model::{
    DeliveryControls, Item, JsonParser, Organization, Organizations, Resource, Resources,
    Scorm2004Manifest, Sequencing, SequencingCollection,
};
use scormlens_sequencing::{ActivityTree, SequencingLevel, SequencingMetadata};
use scormlens_validation::Scorm2004Validator;

fn minimal_valid_manifest() -> Scorm2004Manifest {
    Scorm2004Manifest {
        identifier: Some("com.example.course".to_string()),
        organizations: Some(Organizations {
            default: Some("org_1".to_string()),
            organizations: vec![Organization {
                identifier: Some("org_1".to_string()),
                title: Some("Example Course".to_string()),
                items: vec![Item {
                    identifier: Some("item_1".to_string()),
                    identifier_ref: Some("res_1".to_string()),
                    title: Some("Lesson 1".to_string()),
                    ..Default::default()
                }],
                ..Default::default()
            }],
        }),
        resources: Some(Resources {
            resources: vec![Resource {
                identifier: Some("res_1".to_string()),
                href: Some("lesson1/index.html".to_string()),
                ..Default::default()
            }],
            ..Default::default()
        }),
        ..Default::default()
    }
}

#[test]
fn test_minimal_package_is_clean_end_to_end() {
    let manifest = minimal_valid_manifest();

    let tree = ActivityTree::build(&manifest).unwrap();
    assert_eq!(tree.len(), 2);
    assert_eq!(tree.root().identifier.as_deref(), Some("org_1"));
    assert!(tree.get("item_1").unwrap().leaf);

    let metadata = SequencingMetadata::from_manifest(&manifest);
    assert!(metadata.overridden_activities().is_empty());
    assert_eq!(metadata.level(), SequencingLevel::None);

    let controls = metadata.delivery_controls_for("item_1");
    assert!(controls.tracked);
    assert!(!controls.completion_set_by_content);
    assert!(!controls.objective_set_by_content);

    let result = Scorm2004Validator::new().validate(&manifest);
    assert!(result.is_valid());
    assert_eq!(result.errors().count(), 0);
    assert_eq!(result.warnings().count(), 0);
}

#[test]
fn test_dangling_default_org_is_the_only_error() {
    let mut manifest = minimal_valid_manifest();
    manifest.organizations.as_mut().unwrap().default = Some("missing".to_string());

    let result = Scorm2004Validator::new().validate(&manifest);
    assert!(!result.is_valid());

    let error_codes: Vec<&str> = result.errors().map(|issue| issue.code.as_str()).collect();
    assert_eq!(error_codes, vec!["SCORM2004_INVALID_DEFAULT_ORG"]);
}

#[test]
fn test_id_ref_indirection_end_to_end() {
    let mut manifest = minimal_valid_manifest();
    if let Some(orgs) = manifest.organizations.as_mut() {
        orgs.organizations[0].items[0].sequencing = Some(Sequencing {
            id_ref: Some("shared".to_string()),
            ..Default::default()
        });
    }
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

    let metadata = SequencingMetadata::from_manifest(&manifest);
    assert!(metadata.delivery_controls_for("item_1").completion_set_by_content);
    assert!(metadata.overrides_defaults("item_1"));

    // The indirection itself is structurally fine.
    let result = Scorm2004Validator::new().validate(&manifest);
    assert!(result.is_valid());
}

#[test]
fn test_duplicate_identifier_reported_once_with_both_locations() {
    let mut manifest = minimal_valid_manifest();
    manifest.identifier = Some("dup_id".to_string());
    if let Some(orgs) = manifest.organizations.as_mut() {
        orgs.default = Some("dup_id".to_string());
        orgs.organizations[0].identifier = Some("dup_id".to_string());
    }

    let result = Scorm2004Validator::new().validate(&manifest);
    let duplicates: Vec<_> = result
        .issues()
        .iter()
        .filter(|issue| issue.code == "DUPLICATE_IDENTIFIER")
        .collect();
    assert_eq!(duplicates.len(), 1);
    assert!(duplicates[0].message.contains("manifest"));
    assert!(duplicates[0]
        .message
        .contains("organizations/organization[dup_id]"));
}

#[test]
fn test_json_loaded_manifest_round_trips_through_the_whole_core() {
    let content = r#"{
        "identifier": "com.example.loaded",
        "organizations": {
            "default": "org_1",
            "organizations": [
                {
                    "identifier": "org_1",
                    "title": "Loaded Course",
                    "items": [
                        {
                            "identifier": "module_1",
                            "title": "Module 1",
                            "items": [
                                {
                                    "identifier": "lesson_1",
                                    "identifierRef": "res_1",
                                    "title": "Lesson 1"
                                }
                            ]
                        }
                    ]
                }
            ]
        },
        "resources": {
            "resources": [
                {
                    "identifier": "res_1",
                    "href": "lesson1/index.html"
                },
                {
                    "identifier": "res_unused",
                    "href": "extra/unused.html"
                }
            ]
        }
    }"#;

    let manifest: Scorm2004Manifest = JsonParser::parse(content).unwrap();

    let tree = ActivityTree::build(&manifest).unwrap();
    assert_eq!(tree.len(), 3);
    assert!(!tree.get("module_1").unwrap().leaf);
    assert!(tree.get("lesson_1").unwrap().leaf);

    let result = Scorm2004Validator::new().validate(&manifest);
    assert!(result.is_valid());
    let warning_codes: Vec<&str> = result.warnings().map(|issue| issue.code.as_str()).collect();
    assert_eq!(warning_codes, vec!["ORPHANED_RESOURCE"]);
}
