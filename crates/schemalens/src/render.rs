use std::fmt::Write;

use schemalens_core::{CollapsibleState, IconResolver, ThemeKind, VisibleRow};

const INDENT: &str = "  ";

fn marker(state: CollapsibleState) -> &'static str {
    match state {
        CollapsibleState::None => " ",
        CollapsibleState::Collapsed => "+",
        CollapsibleState::Expanded => "-",
    }
}

/// Renders rows as an indented outline, one row per line.
///
/// With `icons` set, each row ends with the icon file for the theme, or
/// `(default)` when the field has no icon of its own.
pub fn render_outline(
    rows: &[VisibleRow],
    icons: Option<(&IconResolver, ThemeKind)>,
) -> anyhow::Result<String> {
    let mut out = String::new();

    for row in rows {
        let category = row.icon.map(|icon| icon.file_stem()).unwrap_or("-");

        write!(
            out,
            "{}{} {} [{}]",
            INDENT.repeat(row.depth),
            marker(row.state),
            row.label,
            category
        )?;

        if let Some((resolver, theme)) = icons {
            match resolver.resolve(row.icon)? {
                Some(paths) => write!(out, " {}", paths.for_theme(theme).display())?,
                None => out.push_str(" (default)"),
            }
        }

        out.push('\n');
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use schemalens_core::{FieldType, NodePath, SchemaTreeProvider, TreeViewConfig};
    use schemalens_test_support::{scalar, users_schema};

    #[test]
    fn test_outline_marks_expansion_state() {
        let mut provider = SchemaTreeProvider::new(users_schema(), TreeViewConfig::default());
        provider.reveal(&NodePath::parse_dotted("address.geo"));

        let outline = render_outline(&provider.visible_rows(), None).unwrap();
        let lines: Vec<_> = outline.lines().collect();

        assert_eq!(lines[0], "  _id [object-id]");
        assert_eq!(lines[2], "  nickname [mixed-type]");
        assert_eq!(lines[3], "- address [object]");
        assert_eq!(lines[6], "  - geo [object]");
        assert_eq!(lines[7], "      lat [double]");
        assert_eq!(lines[9], "+ tags [array]");
    }

    #[test]
    fn test_outline_with_icon_paths() {
        let mut provider = SchemaTreeProvider::from_fields(vec![
            scalar("code", FieldType::Javascript),
            scalar("name", FieldType::String),
        ]);
        let resolver = IconResolver::new("/icons");

        let outline =
            render_outline(&provider.visible_rows(), Some((&resolver, ThemeKind::Light))).unwrap();

        assert_eq!(
            outline,
            "  code [-] (default)\n  name [string] /icons/light/schema/string.svg\n"
        );
    }
}
