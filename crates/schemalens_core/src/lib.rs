mod classify;
mod config;
mod error;
mod field;
mod icons;
mod node_path;
mod provider;
mod traits;
mod tree_node;

pub use classify::{IconCategory, child_fields, icon_for, is_expandable};
pub use config::{ConfigStore, TreeViewConfig};
pub use error::SchemaTreeError;
pub use field::{FieldModel, FieldType, SchemaDocument};
pub use icons::{IconResolver, ThemeKind, ThemedIconPath};
pub use node_path::NodePath;
pub use provider::{SchemaTreeProvider, VisibleRow};
pub use traits::{ChildProvider, Displayable};
pub use tree_node::{
    ChildrenCache, CollapsibleState, FIELD_CONTEXT_VALUE, SchemaTreeNode, format_field_label,
    reconcile,
};
