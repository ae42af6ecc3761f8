use indexmap::IndexMap;

use crate::classify::{child_fields, icon_for, is_expandable};
use crate::{ChildProvider, Displayable, FieldModel, IconCategory};

/// Context value reported for every schema field row.
pub const FIELD_CONTEXT_VALUE: &str = "fieldTreeItem";

/// Child nodes keyed by field name, in schema order.
pub type ChildrenCache = IndexMap<String, SchemaTreeNode>;

/// How the host should draw a node's disclosure control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollapsibleState {
    /// Leaf; no disclosure control.
    None,
    Collapsed,
    Expanded,
}

impl CollapsibleState {
    pub fn for_field(field: &FieldModel, is_expanded: bool) -> Self {
        if !is_expandable(field) {
            return CollapsibleState::None;
        }

        if is_expanded {
            CollapsibleState::Expanded
        } else {
            CollapsibleState::Collapsed
        }
    }
}

/// A schema field in the tree view.
///
/// Each node owns the children it built last time, so a schema refresh can
/// hand the previous children back and keep the expansion state of every
/// field whose name survived.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaTreeNode {
    field: FieldModel,
    is_expanded: bool,
    children_cache: ChildrenCache,
}

impl SchemaTreeNode {
    /// Creates a collapsed node with nothing materialized.
    pub fn new(field: FieldModel) -> Self {
        Self::restore(field, false, ChildrenCache::new())
    }

    /// Creates a node carrying over state from a previous node of the same name.
    pub fn restore(field: FieldModel, is_expanded: bool, children_cache: ChildrenCache) -> Self {
        Self {
            field,
            is_expanded,
            children_cache,
        }
    }

    pub fn field(&self) -> &FieldModel {
        &self.field
    }

    pub fn field_name(&self) -> &str {
        &self.field.name
    }

    pub fn is_expanded(&self) -> bool {
        self.is_expanded
    }

    pub fn is_expandable(&self) -> bool {
        is_expandable(&self.field)
    }

    /// Marks the node expanded. Always confirms with `true`.
    pub fn expand(&mut self) -> bool {
        self.is_expanded = true;
        true
    }

    pub fn collapse(&mut self) {
        self.is_expanded = false;
    }

    pub fn children_cache(&self) -> &ChildrenCache {
        &self.children_cache
    }

    pub fn cached_child(&self, field_name: &str) -> Option<&SchemaTreeNode> {
        self.children_cache.get(field_name)
    }

    pub fn cached_child_mut(&mut self, field_name: &str) -> Option<&mut SchemaTreeNode> {
        self.children_cache.get_mut(field_name)
    }

    pub fn into_parts(self) -> (FieldModel, bool, ChildrenCache) {
        (self.field, self.is_expanded, self.children_cache)
    }

    /// Points the node at a newer version of its field, keeping its state.
    fn replace_field(&mut self, field: FieldModel) {
        self.field = field;
    }
}

impl Displayable for SchemaTreeNode {
    fn label(&self) -> &str {
        &self.field.name
    }

    fn tooltip(&self) -> &str {
        &self.field.name
    }

    fn context_value(&self) -> &'static str {
        FIELD_CONTEXT_VALUE
    }

    fn icon(&self) -> Option<IconCategory> {
        icon_for(&self.field)
    }

    fn collapsible_state(&self) -> CollapsibleState {
        CollapsibleState::for_field(&self.field, self.is_expanded)
    }
}

impl ChildProvider for SchemaTreeNode {
    type Child = SchemaTreeNode;

    fn get_children(&mut self) -> Vec<&mut SchemaTreeNode> {
        if !self.is_expandable() {
            return Vec::new();
        }

        let previous = std::mem::take(&mut self.children_cache);
        let fields = child_fields(&self.field);

        if fields.is_empty()
            && let Some(types) = &self.field.types
            && types.is_empty()
        {
            log::warn!(
                "Field '{}' has an empty type list, showing no children",
                self.field.name
            );
        }

        self.children_cache = reconcile(previous, fields);
        self.children_cache.values_mut().collect()
    }

    fn cached_children(&self) -> Vec<&SchemaTreeNode> {
        self.children_cache.values().collect()
    }
}

/// Builds the children cache for `fields`, reusing nodes from `previous`
/// by field name.
///
/// A reused node keeps its expansion flag and its own cache; only its field
/// is replaced. Names missing from `fields` are dropped along with their
/// subtrees. If a name repeats, the later field replaces the earlier one in
/// place.
pub fn reconcile(mut previous: ChildrenCache, fields: &[FieldModel]) -> ChildrenCache {
    let mut next = ChildrenCache::with_capacity(fields.len());
    let mut reused = 0usize;

    for field in fields {
        if let Some(existing) = next.get_mut(&field.name) {
            existing.replace_field(field.clone());
            continue;
        }

        let node = match previous.shift_remove(&field.name) {
            Some(mut node) => {
                log::trace!(
                    "Reusing node '{}' (expanded: {})",
                    field.name,
                    node.is_expanded
                );
                node.replace_field(field.clone());
                reused += 1;
                node
            }
            None => {
                log::trace!("Creating node '{}'", field.name);
                SchemaTreeNode::new(field.clone())
            }
        };

        next.insert(field.name.clone(), node);
    }

    log::debug!(
        "Rebuilt children cache: {} nodes, {} reused, {} dropped",
        next.len(),
        reused,
        previous.len()
    );

    next
}

/// Row label, optionally suffixed with the presence percentage of fields
/// missing from some documents.
pub fn format_field_label(field: &FieldModel, show_probability: bool) -> String {
    let mut label = field.name.clone();

    if show_probability && field.probability < 1.0 {
        label.push_str(&format!(" ({:.0}%)", field.probability * 100.0));
    }

    label
}
