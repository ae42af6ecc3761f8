use crate::tree_node::{ChildrenCache, format_field_label, reconcile};
use crate::{
    ChildProvider, CollapsibleState, Displayable, FieldModel, IconCategory, IconResolver, NodePath,
    SchemaDocument, SchemaTreeNode, TreeViewConfig,
};

/// A row of the flattened tree, as the host would draw it.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibleRow {
    pub path: NodePath,
    /// Nesting depth (0 = top-level field).
    pub depth: usize,
    pub label: String,
    pub icon: Option<IconCategory>,
    pub state: CollapsibleState,
}

/// Host-facing side of the schema tree.
///
/// Owns the top-level nodes and routes host callbacks (children requests,
/// expand/collapse notifications) to the node addressed by a [`NodePath`].
/// Only nodes materialized by an earlier `get_children` call can be
/// addressed.
pub struct SchemaTreeProvider {
    schema: SchemaDocument,
    roots: ChildrenCache,
    config: TreeViewConfig,
    icons: IconResolver,
}

impl SchemaTreeProvider {
    pub fn new(schema: SchemaDocument, config: TreeViewConfig) -> Self {
        let icons = config.icon_resolver();

        Self {
            schema,
            roots: ChildrenCache::new(),
            config,
            icons,
        }
    }

    pub fn from_fields(fields: Vec<FieldModel>) -> Self {
        Self::new(SchemaDocument::new(fields), TreeViewConfig::default())
    }

    pub fn icon_resolver(&self) -> &IconResolver {
        &self.icons
    }

    /// Replaces the schema. Existing nodes are reconciled against it on the
    /// next root [`SchemaTreeProvider::get_children`] call.
    pub fn set_schema(&mut self, schema: SchemaDocument) {
        log::debug!(
            "Schema replaced: {} top-level fields (was {})",
            schema.fields.len(),
            self.schema.fields.len()
        );
        self.schema = schema;
    }

    pub fn get_tree_item<'a>(&self, node: &'a SchemaTreeNode) -> &'a SchemaTreeNode {
        node
    }

    /// `None` returns the top-level fields; `Some(path)` materializes the
    /// children of the node at `path`.
    pub fn get_children(&mut self, path: Option<&NodePath>) -> Vec<&mut SchemaTreeNode> {
        let Some(path) = path else {
            let previous = std::mem::take(&mut self.roots);
            self.roots = reconcile(previous, &self.schema.fields);
            return self.roots.values_mut().collect();
        };

        match self.node_mut(path) {
            Some(node) => node.get_children(),
            None => {
                log::warn!("No materialized node at '{}'", path);
                Vec::new()
            }
        }
    }

    pub fn node(&self, path: &NodePath) -> Option<&SchemaTreeNode> {
        let (first, rest) = path.segments.split_first()?;
        let mut node = self.roots.get(first)?;

        for segment in rest {
            node = node.cached_child(segment)?;
        }

        Some(node)
    }

    pub fn node_mut(&mut self, path: &NodePath) -> Option<&mut SchemaTreeNode> {
        let (first, rest) = path.segments.split_first()?;
        let mut node = self.roots.get_mut(first)?;

        for segment in rest {
            node = node.cached_child_mut(segment)?;
        }

        Some(node)
    }

    /// Host notification: the user expanded the row at `path`.
    ///
    /// Returns `false` only when no node exists at `path`.
    pub fn on_did_expand(&mut self, path: &NodePath) -> bool {
        match self.node_mut(path) {
            Some(node) => node.expand(),
            None => {
                log::warn!("Expand requested for unknown node '{}'", path);
                false
            }
        }
    }

    /// Host notification: the user collapsed the row at `path`.
    pub fn on_did_collapse(&mut self, path: &NodePath) {
        match self.node_mut(path) {
            Some(node) => node.collapse(),
            None => log::warn!("Collapse requested for unknown node '{}'", path),
        }
    }

    /// Materializes and expands every node from the top level down to `path`.
    ///
    /// Returns `false` if some segment does not name a child of its parent.
    pub fn reveal(&mut self, path: &NodePath) -> bool {
        let Some((first, rest)) = path.segments.split_first() else {
            return false;
        };

        self.get_children(None);

        let mut node = match self.roots.get_mut(first) {
            Some(node) => node,
            None => {
                log::warn!("Cannot reveal '{}': no top-level field '{}'", path, first);
                return false;
            }
        };
        node.expand();

        for segment in rest {
            node.get_children();
            node = match node.cached_child_mut(segment) {
                Some(child) => child,
                None => {
                    log::warn!("Cannot reveal '{}': no child '{}'", path, segment);
                    return false;
                }
            };
            node.expand();
        }

        true
    }

    /// Flattens the tree into display rows, descending only into expanded
    /// nodes. Children are materialized on the way, as a host would.
    pub fn visible_rows(&mut self) -> Vec<VisibleRow> {
        let show_probability = self.config.show_probability;
        let mut rows = Vec::new();

        for node in self.get_children(None) {
            let path = NodePath::root(node.field_name());
            collect_visible_rows(node, path, show_probability, &mut rows);
        }

        rows
    }
}

fn collect_visible_rows(
    node: &mut SchemaTreeNode,
    path: NodePath,
    show_probability: bool,
    rows: &mut Vec<VisibleRow>,
) {
    let state = node.collapsible_state();

    rows.push(VisibleRow {
        depth: path.depth(),
        label: format_field_label(node.field(), show_probability),
        icon: node.icon(),
        state,
        path: path.clone(),
    });

    if state != CollapsibleState::Expanded {
        return;
    }

    for child in node.get_children() {
        let child_path = path.child(child.field_name());
        collect_visible_rows(child, child_path, show_probability, rows);
    }
}
