//! The SCORM 2004 structural rule set.
//!
//! Rules are a closed enum dispatched through [`Scorm2004Rule::validate`];
//! each is a pure function from the manifest to a [`ValidationResult`] and
//! tolerates any absent sub-structure. Duplicate-identifier detection and
//! the reference checks walk items with an explicit worklist, so deeply
//! nested hierarchies never grow the call stack.

use std::collections::{HashMap, HashSet};

use scormlens_model::{Item, Organization, Scorm2004Manifest};

use crate::codes;
use crate::paths::classify_unsafe_path;
use crate::result::{ValidationIssue, ValidationResult};

/// One independent structural rule over a SCORM 2004 manifest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scorm2004Rule {
    /// Organizations element must be present
    OrganizationsRequired,
    /// The default-organization pointer must resolve if set
    DefaultOrganizationValid,
    /// Identifier values must be unique across the document
    DuplicateIdentifiers,
    /// Every item identifierRef must resolve to a resource
    ResourceReferencesValid,
    /// Every referenced resource must carry a launch href
    ResourceHrefRequired,
    /// Unreferenced resources are flagged as waste
    OrphanedResources,
    /// Resource and file paths must stay inside the package
    PathSecurity,
}

impl Scorm2004Rule {
    /// The full rule pipeline in its canonical order.
    pub fn all() -> Vec<Scorm2004Rule> {
        vec![
            Scorm2004Rule::OrganizationsRequired,
            Scorm2004Rule::DefaultOrganizationValid,
            Scorm2004Rule::DuplicateIdentifiers,
            Scorm2004Rule::ResourceReferencesValid,
            Scorm2004Rule::ResourceHrefRequired,
            Scorm2004Rule::OrphanedResources,
            Scorm2004Rule::PathSecurity,
        ]
    }

    /// Human-readable rule name for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Scorm2004Rule::OrganizationsRequired => "organizations required",
            Scorm2004Rule::DefaultOrganizationValid => "default organization valid",
            Scorm2004Rule::DuplicateIdentifiers => "duplicate identifiers",
            Scorm2004Rule::ResourceReferencesValid => "resource references valid",
            Scorm2004Rule::ResourceHrefRequired => "resource href required",
            Scorm2004Rule::OrphanedResources => "orphaned resources",
            Scorm2004Rule::PathSecurity => "path security",
        }
    }

    /// Specification-section reference for documentation output.
    pub fn reference(&self) -> &'static str {
        match self {
            Scorm2004Rule::OrganizationsRequired => "SCORM 2004 4th Ed. CAM 3.4.1.5",
            Scorm2004Rule::DefaultOrganizationValid => "SCORM 2004 4th Ed. CAM 3.4.1.5",
            Scorm2004Rule::DuplicateIdentifiers => "IMS CP 1.1.4 5.1",
            Scorm2004Rule::ResourceReferencesValid => "SCORM 2004 4th Ed. CAM 3.4.1.7",
            Scorm2004Rule::ResourceHrefRequired => "SCORM 2004 4th Ed. CAM 3.4.1.8",
            Scorm2004Rule::OrphanedResources => "SCORM 2004 4th Ed. CAM 3.4.1.8",
            Scorm2004Rule::PathSecurity => "IMS CP 1.1.4 5.1.5",
        }
    }

    /// Run this rule against a manifest.
    pub fn validate(&self, manifest: &Scorm2004Manifest) -> ValidationResult {
        match self {
            Scorm2004Rule::OrganizationsRequired => organizations_required(manifest),
            Scorm2004Rule::DefaultOrganizationValid => default_organization_valid(manifest),
            Scorm2004Rule::DuplicateIdentifiers => duplicate_identifiers(manifest),
            Scorm2004Rule::ResourceReferencesValid => resource_references_valid(manifest),
            Scorm2004Rule::ResourceHrefRequired => resource_href_required(manifest),
            Scorm2004Rule::OrphanedResources => orphaned_resources(manifest),
            Scorm2004Rule::PathSecurity => path_security(manifest),
        }
    }
}

fn organizations_required(manifest: &Scorm2004Manifest) -> ValidationResult {
    let mut result = ValidationResult::valid();
    if manifest.organizations.is_none() {
        result.push(
            ValidationIssue::error(
                codes::SCORM2004_MISSING_ORGANIZATIONS,
                "manifest has no organizations element",
                "manifest",
            )
            .with_remediation("add an <organizations> element with at least one organization"),
        );
    }
    result
}

fn default_organization_valid(manifest: &Scorm2004Manifest) -> ValidationResult {
    let mut result = ValidationResult::valid();
    let Some(organizations) = manifest.organizations.as_ref() else {
        return result;
    };
    let Some(default) = organizations
        .default
        .as_deref()
        .filter(|id| !id.trim().is_empty())
    else {
        // Unset or blank default is a valid optional attribute.
        return result;
    };

    let resolves = organizations
        .organizations
        .iter()
        .any(|org| org.identifier.as_deref() == Some(default));
    if !resolves {
        result.push(ValidationIssue::error(
            codes::SCORM2004_INVALID_DEFAULT_ORG,
            format!("default organization '{default}' does not exist"),
            "organizations",
        ));
    }
    result
}

fn duplicate_identifiers(manifest: &Scorm2004Manifest) -> ValidationResult {
    // Collect (identifier, location) pairs in document order, then report
    // one issue per identifier used more than once, naming every location.
    let mut seen: Vec<(String, String)> = Vec::new();

    if let Some(id) = non_blank(manifest.identifier.as_deref()) {
        seen.push((id.to_string(), "manifest".to_string()));
    }

    if let Some(organizations) = manifest.organizations.as_ref() {
        for organization in &organizations.organizations {
            if let Some(id) = non_blank(organization.identifier.as_deref()) {
                seen.push((id.to_string(), organization_location(organization)));
            }
            let org_location = organization_location(organization);
            for_each_item(organization, |item| {
                if let Some(id) = non_blank(item.identifier.as_deref()) {
                    seen.push((id.to_string(), format!("{org_location}/item[{id}]")));
                }
            });
        }
    }

    if let Some(resources) = manifest.resources.as_ref() {
        for resource in &resources.resources {
            if let Some(id) = non_blank(resource.identifier.as_deref()) {
                seen.push((id.to_string(), format!("resources/resource[{id}]")));
            }
        }
    }

    let mut locations: HashMap<&str, Vec<&str>> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();
    for (id, location) in &seen {
        let entry = locations.entry(id.as_str()).or_default();
        if entry.is_empty() {
            order.push(id.as_str());
        }
        entry.push(location.as_str());
    }

    let mut result = ValidationResult::valid();
    for id in order {
        let found = &locations[id];
        if found.len() > 1 {
            result.push(ValidationIssue::error(
                codes::DUPLICATE_IDENTIFIER,
                format!(
                    "identifier '{id}' is used {} times: {}",
                    found.len(),
                    found.join(", ")
                ),
                found[0].to_string(),
            ));
        }
    }
    result
}

fn resource_references_valid(manifest: &Scorm2004Manifest) -> ValidationResult {
    let mut result = ValidationResult::valid();
    let resource_ids = resource_identifiers(manifest);

    let Some(organizations) = manifest.organizations.as_ref() else {
        return result;
    };
    for organization in &organizations.organizations {
        let org_name = organization
            .identifier
            .as_deref()
            .unwrap_or("(unidentified)");
        for_each_item(organization, |item| {
            let Some(reference) = non_blank(item.identifier_ref.as_deref()) else {
                return;
            };
            if !resource_ids.contains(reference) {
                let item_name = item.identifier.as_deref().unwrap_or("(unidentified)");
                result.push(ValidationIssue::error(
                    codes::SCORM2004_MISSING_RESOURCE_REF,
                    format!(
                        "item '{item_name}' in organization '{org_name}' references \
                         missing resource '{reference}'"
                    ),
                    format!(
                        "organizations/organization[{org_name}]/item[{item_name}]"
                    ),
                ));
            }
        });
    }
    result
}

fn resource_href_required(manifest: &Scorm2004Manifest) -> ValidationResult {
    let mut result = ValidationResult::valid();
    let referenced = referenced_resource_ids(manifest);

    let Some(resources) = manifest.resources.as_ref() else {
        return result;
    };
    for resource in &resources.resources {
        let Some(id) = non_blank(resource.identifier.as_deref()) else {
            continue;
        };
        if !referenced.contains(id) {
            // Unreferenced resources are the orphaned-resources rule's job.
            continue;
        }
        let has_href = non_blank(resource.href.as_deref()).is_some();
        if !has_href {
            result.push(
                ValidationIssue::error(
                    codes::SCORM2004_MISSING_LAUNCH_URL,
                    format!("referenced resource '{id}' has no launch href"),
                    format!("resources/resource[{id}]"),
                )
                .with_remediation("set the href attribute to the resource's launch file"),
            );
        }
    }
    result
}

fn orphaned_resources(manifest: &Scorm2004Manifest) -> ValidationResult {
    let mut result = ValidationResult::valid();
    let referenced = referenced_resource_ids(manifest);

    let Some(resources) = manifest.resources.as_ref() else {
        return result;
    };
    for resource in &resources.resources {
        let Some(id) = non_blank(resource.identifier.as_deref()) else {
            continue;
        };
        if !referenced.contains(id) {
            result.push(
                ValidationIssue::warning(
                    codes::ORPHANED_RESOURCE,
                    format!("resource '{id}' is never referenced by any item"),
                    format!("resources/resource[{id}]"),
                )
                .with_remediation("remove the resource or reference it from an item"),
            );
        }
    }
    result
}

fn path_security(manifest: &Scorm2004Manifest) -> ValidationResult {
    let mut result = ValidationResult::valid();
    let Some(resources) = manifest.resources.as_ref() else {
        return result;
    };

    for resource in &resources.resources {
        let resource_id = resource.identifier.as_deref().unwrap_or("(unidentified)");
        if let Some(href) = non_blank(resource.href.as_deref()) {
            if let Some((code, message)) = classify_unsafe_path(href) {
                result.push(ValidationIssue::error(
                    code,
                    message,
                    format!("resources/resource[{resource_id}]"),
                ));
            }
        }
        for file in &resource.files {
            if let Some(href) = non_blank(file.href.as_deref()) {
                if let Some((code, message)) = classify_unsafe_path(href) {
                    result.push(ValidationIssue::error(
                        code,
                        message,
                        format!("resources/resource[{resource_id}]/file"),
                    ));
                }
            }
        }
    }
    result
}

fn organization_location(organization: &Organization) -> String {
    let id = organization
        .identifier
        .as_deref()
        .unwrap_or("(unidentified)");
    format!("organizations/organization[{id}]")
}

/// Visit every item of an organization, nested items included, in document
/// order.
fn for_each_item<'a>(organization: &'a Organization, mut visit: impl FnMut(&'a Item)) {
    let mut worklist: Vec<&Item> = organization.items.iter().rev().collect();
    while let Some(item) = worklist.pop() {
        visit(item);
        for child in item.items.iter().rev() {
            worklist.push(child);
        }
    }
}

fn resource_identifiers(manifest: &Scorm2004Manifest) -> HashSet<&str> {
    manifest
        .resources
        .as_ref()
        .map(|resources| {
            resources
                .resources
                .iter()
                .filter_map(|resource| non_blank(resource.identifier.as_deref()))
                .collect()
        })
        .unwrap_or_default()
}

fn referenced_resource_ids(manifest: &Scorm2004Manifest) -> HashSet<&str> {
    let mut referenced = HashSet::new();
    if let Some(organizations) = manifest.organizations.as_ref() {
        for organization in &organizations.organizations {
            for_each_item(organization, |item| {
                if let Some(reference) = non_blank(item.identifier_ref.as_deref()) {
                    referenced.insert(reference);
                }
            });
        }
    }
    referenced
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
