/// Address of a tree node: field names from a top-level field down to the node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NodePath {
    pub segments: Vec<String>,
}

impl NodePath {
    pub fn root(field_name: &str) -> Self {
        Self {
            segments: vec![field_name.to_string()],
        }
    }

    /// Splits a dotted path such as `address.geo.lat`.
    ///
    /// Field names may themselves contain dots; use [`NodePath::child`] to
    /// build those paths segment by segment.
    pub fn parse_dotted(path: &str) -> Self {
        Self {
            segments: path
                .split('.')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn child(&self, field_name: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(field_name.to_string());
        Self { segments }
    }

    pub fn parent(&self) -> Option<Self> {
        if self.segments.len() <= 1 {
            return None;
        }
        let mut segments = self.segments.clone();
        segments.pop();
        Some(Self { segments })
    }

    /// Zero for top-level fields.
    pub fn depth(&self) -> usize {
        self.segments.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn name(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    pub fn dotted(&self) -> String {
        self.segments.join(".")
    }
}

impl std::fmt::Display for NodePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.dotted())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_and_parent() {
        let path = NodePath::root("address").child("geo");
        assert_eq!(path.depth(), 1);
        assert_eq!(path.name(), Some("geo"));
        assert_eq!(path.parent(), Some(NodePath::root("address")));
        assert_eq!(NodePath::root("address").parent(), None);
    }

    #[test]
    fn test_parse_dotted_skips_empty_segments() {
        let path = NodePath::parse_dotted("address..geo.");
        assert_eq!(path.segments, ["address", "geo"]);
        assert_eq!(path.dotted(), "address.geo");
        assert!(NodePath::parse_dotted("").is_empty());
    }
}
