use crate::{CollapsibleState, IconCategory, IconResolver, SchemaTreeError, ThemedIconPath};

/// What the host tree view needs to draw a row.
pub trait Displayable {
    fn label(&self) -> &str;

    fn tooltip(&self) -> &str;

    /// Key the host uses to attach context menu entries.
    fn context_value(&self) -> &'static str;

    fn icon(&self) -> Option<IconCategory>;

    fn collapsible_state(&self) -> CollapsibleState;

    /// Resolves the icon to theme-specific asset paths.
    ///
    /// `Ok(None)` means the row has no icon and the host default applies.
    fn icon_path(
        &self,
        resolver: &IconResolver,
    ) -> Result<Option<ThemedIconPath>, SchemaTreeError> {
        resolver.resolve(self.icon())
    }
}

/// Lazily materialized children backed by a per-node cache.
pub trait ChildProvider {
    type Child;

    /// Recomputes the children from the current schema, reusing cached
    /// children whose field name still exists.
    fn get_children(&mut self) -> Vec<&mut Self::Child>;

    /// Children built by the last [`ChildProvider::get_children`] call.
    fn cached_children(&self) -> Vec<&Self::Child>;
}
