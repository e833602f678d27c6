//! Activity tree construction from the organization/item hierarchy.
//!
//! Nodes live in a flat arena: parents are indices, children are owned
//! index lists, and traversal uses an explicit worklist, so arbitrarily
//! deep item nesting never grows the call stack.

use std::collections::HashMap;

use tracing::debug;

use scormlens_model::{Item, Scorm2004Manifest, Sequencing};

/// One activity in the tree, mirroring an organization root or an item
#[derive(Debug, Clone)]
pub struct ActivityNode {
    /// Activity identifier (the organization's or item's identifier)
    pub identifier: Option<String>,
    /// Human-readable title
    pub title: Option<String>,
    /// Identifier of the referenced resource; `None` for grouping nodes
    pub resource_identifier: Option<String>,
    /// Sequencing element carried by the source item or organization
    pub sequencing: Option<Sequencing>,
    /// Whether the activity is shown in navigation UIs
    pub visible: bool,
    /// Whether the activity has no children in the manifest
    pub leaf: bool,
    /// Arena index of the parent; `None` for the root
    pub parent: Option<usize>,
    /// Arena indices of the children in document order
    pub children: Vec<usize>,
}

/// Activity tree built from the default organization of a manifest
#[derive(Debug, Clone)]
pub struct ActivityTree {
    nodes: Vec<ActivityNode>,
    index: HashMap<String, usize>,
}

impl ActivityTree {
    /// Build the activity tree for a manifest.
    ///
    /// Returns `None` when the manifest has no organizations or no default
    /// organization; that is a normal outcome, not an error. Reporting a
    /// missing organizations element is the validator's job.
    pub fn build(manifest: &Scorm2004Manifest) -> Option<ActivityTree> {
        let organization = manifest.default_organization()?;

        let root = ActivityNode {
            identifier: organization.identifier.clone(),
            title: organization.title.clone(),
            resource_identifier: None,
            sequencing: organization.sequencing.clone(),
            visible: true,
            leaf: false,
            parent: None,
            children: Vec::new(),
        };

        let mut nodes = vec![root];
        let mut index = HashMap::new();
        if let Some(id) = non_blank(organization.identifier.as_deref()) {
            index.insert(id.to_string(), 0);
        }

        // Pre-order, document order: push children reversed so the first
        // sibling is processed first.
        let mut worklist: Vec<(usize, &Item)> = Vec::new();
        for item in organization.items.iter().rev() {
            worklist.push((0, item));
        }

        while let Some((parent, item)) = worklist.pop() {
            let node = ActivityNode {
                identifier: item.identifier.clone(),
                title: item.title.clone(),
                resource_identifier: item.identifier_ref.clone(),
                sequencing: item.sequencing.clone(),
                visible: item.visible(),
                leaf: item.items.is_empty(),
                parent: Some(parent),
                children: Vec::new(),
            };

            let position = nodes.len();
            nodes.push(node);
            nodes[parent].children.push(position);

            // Last write wins; duplicate identifiers are a validation
            // concern, not a tree-building one.
            if let Some(id) = non_blank(item.identifier.as_deref()) {
                index.insert(id.to_string(), position);
            }

            for child in item.items.iter().rev() {
                worklist.push((position, child));
            }
        }

        debug!(nodes = nodes.len(), "built activity tree");
        Some(ActivityTree { nodes, index })
    }

    /// The root activity (the default organization).
    pub fn root(&self) -> &ActivityNode {
        &self.nodes[0]
    }

    /// Look up an activity by identifier.
    pub fn get(&self, identifier: &str) -> Option<&ActivityNode> {
        self.index.get(identifier).map(|&idx| &self.nodes[idx])
    }

    /// The activity at an arena index.
    pub fn node(&self, index: usize) -> Option<&ActivityNode> {
        self.nodes.get(index)
    }

    /// Number of activities in the tree, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree is empty. A built tree always holds at least the
    /// root, so this is only `true` for a manually-emptied arena.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate all activities in document (pre-order) order.
    pub fn iter(&self) -> impl Iterator<Item = &ActivityNode> {
        self.nodes.iter()
    }

    /// Iterate the children of an activity in document order.
    pub fn children<'a>(&'a self, node: &'a ActivityNode) -> impl Iterator<Item = &'a ActivityNode> + 'a {
        node.children.iter().map(|&idx| &self.nodes[idx])
    }

    /// All indexed identifiers in the tree.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.index.keys().map(String::as_str)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
