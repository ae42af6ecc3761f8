mod cli;
mod render;

use std::fs;
use std::path::Path;

use anyhow::Context;
use log::info;
use schemalens_core::{ConfigStore, SchemaDocument, SchemaTreeProvider, TreeViewConfig};

use cli::{Command, RenderArgs};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args: Vec<String> = std::env::args().collect();

    let code = match cli::parse(&args) {
        Ok(Command::Help) => {
            println!("{}", cli::USAGE);
            0
        }
        Ok(Command::Render(render_args)) => match run(render_args) {
            Ok(()) => 0,
            Err(e) => {
                log::error!("{:#}", e);
                1
            }
        },
        Err(e) => {
            eprintln!("{:#}\n\n{}", e, cli::USAGE);
            2
        }
    };

    std::process::exit(code);
}

fn run(args: RenderArgs) -> anyhow::Result<()> {
    let config = load_config(&args)?;
    let theme = config.theme;

    let mut schemas = args.schemas.iter();
    let Some(first) = schemas.next() else {
        anyhow::bail!("No schema file given");
    };

    let mut provider = SchemaTreeProvider::new(load_schema(first)?, config);

    for path in &args.expand {
        if !provider.reveal(path) {
            log::warn!("Nothing to expand at '{}'", path);
        }
    }

    for path in schemas {
        provider.set_schema(load_schema(path)?);
    }

    let rows = provider.visible_rows();
    let icons = args.show_icons.then(|| (provider.icon_resolver(), theme));

    print!("{}", render::render_outline(&rows, icons)?);

    Ok(())
}

fn load_config(args: &RenderArgs) -> anyhow::Result<TreeViewConfig> {
    let store = match &args.config {
        Some(path) => ConfigStore::at(path),
        None => ConfigStore::new()?,
    };

    let mut config = store
        .load()
        .with_context(|| format!("Failed to load config from {}", store.path().display()))?;

    if let Some(theme) = args.theme {
        config.theme = theme;
    }
    if args.show_probability {
        config.show_probability = true;
    }

    Ok(config)
}

fn load_schema(path: &Path) -> anyhow::Result<SchemaDocument> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read schema {}", path.display()))?;

    let schema = SchemaDocument::from_json_str(&content)
        .with_context(|| format!("Failed to parse schema {}", path.display()))?;

    info!(
        "Loaded {} ({} top-level fields)",
        path.display(),
        schema.fields.len()
    );

    Ok(schema)
}
