use std::path::PathBuf;

use anyhow::{Context, bail};
use schemalens_core::{NodePath, ThemeKind};

pub const USAGE: &str = "\
Usage: schemalens <schema.json>... [options]

Each schema file is applied in order, as a refresh of the previous one.
Expand requests are applied after the first file is loaded.

Options:
  --expand <a.b.c>      Expand every node down to this path (repeatable)
  --config <path>       Read settings from this file
  --theme <light|dark>  Theme used for icon paths
  --show-probability    Append presence percentage to partial fields
  --icons               Print the icon file for each row
  -h, --help            Show this help";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderArgs {
    pub schemas: Vec<PathBuf>,
    pub expand: Vec<NodePath>,
    pub config: Option<PathBuf>,
    pub theme: Option<ThemeKind>,
    pub show_probability: bool,
    pub show_icons: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Render(RenderArgs),
}

/// Parses `args` as received by `main`, program name included.
pub fn parse(args: &[String]) -> anyhow::Result<Command> {
    let mut parsed = RenderArgs::default();
    let mut iter = args.iter().skip(1);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--expand" => {
                let value = iter.next().context("--expand needs a path")?;
                let path = NodePath::parse_dotted(value);
                if path.is_empty() {
                    bail!("--expand needs a non-empty path");
                }
                parsed.expand.push(path);
            }
            "--config" => {
                let value = iter.next().context("--config needs a file path")?;
                parsed.config = Some(PathBuf::from(value));
            }
            "--theme" => {
                let value = iter.next().context("--theme needs a value")?;
                let theme = ThemeKind::parse(value)
                    .with_context(|| format!("Unknown theme '{}'", value))?;
                parsed.theme = Some(theme);
            }
            "--show-probability" => parsed.show_probability = true,
            "--icons" => parsed.show_icons = true,
            other if other.starts_with('-') => bail!("Unknown option '{}'", other),
            schema => parsed.schemas.push(PathBuf::from(schema)),
        }
    }

    if parsed.schemas.is_empty() {
        bail!("No schema file given");
    }

    Ok(Command::Render(parsed))
}
