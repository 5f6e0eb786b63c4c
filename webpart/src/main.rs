use anyhow::{Context, Result};
use clap::Parser;
use host::{DomElement, ServiceScope, THEME_SERVICE_KEY, ThemeProvider, ThemeService};
use section_background::theme::{LoadedTheme, ThemeLoader};
use section_background::webpart::styles::STYLESHEET;
use section_background::{
    AppResult, ClientSideWebPart, SectionBackgroundWebPart, WebPartContext, config, logger,
};
use std::path::PathBuf;
use std::sync::Arc;

/// Render the section background web part inside a minimal host page.
#[derive(Parser, Debug)]
#[command(name = "section-background", version, about)]
struct Cli {
    /// Configuration file (defaults to ./config.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured description
    #[arg(short, long)]
    description: Option<String>,

    /// Theme active before the web part initializes
    #[arg(short, long)]
    theme: Option<String>,

    /// Start without an active theme
    #[arg(long, conflicts_with = "theme")]
    no_initial_theme: bool,

    /// Theme to switch to after the first render; repeat for several changes
    #[arg(long = "switch", value_name = "THEME")]
    switch: Vec<String>,

    /// List available themes and exit
    #[arg(long)]
    list_themes: bool,

    /// Print the property pane declaration as JSON and exit
    #[arg(long)]
    property_pane: bool,

    /// Print only the web part root element instead of a full page
    #[arg(long)]
    fragment: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config =
        config::init_config(cli.config.as_deref()).context("Failed to load configuration")?;
    logger::setup_logger().context("Failed to initialize logger")?;

    let loader = ThemeLoader::new(config.theme().themes_dir());
    if cli.list_themes {
        for name in loader.discover_themes()? {
            println!("{name}");
        }
        return Ok(());
    }

    let initial_theme = if cli.no_initial_theme {
        None
    } else {
        cli.theme.as_deref().or(config.theme().name())
    };
    let provider = Arc::new(match initial_theme {
        Some(name) => ThemeProvider::with_theme(loader.load_theme(name)?.snapshot),
        None => ThemeProvider::new(),
    });

    // Resolve every switch up front so a bad name fails before rendering
    let switches = cli
        .switch
        .iter()
        .map(|name| loader.load_theme(name))
        .collect::<AppResult<Vec<LoadedTheme>>>()?;

    let service_scope = Arc::new(ServiceScope::new());
    service_scope.provide(&THEME_SERVICE_KEY, provider.clone() as Arc<dyn ThemeService>)?;

    let element = Arc::new(DomElement::new());
    let context = WebPartContext::new(service_scope, element.clone());

    let mut properties = config.webpart().clone();
    if let Some(description) = cli.description {
        properties.description = description;
    }

    let mut webpart =
        SectionBackgroundWebPart::new(context, properties, config.theme().stale_variables());

    if cli.property_pane {
        let pane = webpart.property_pane_configuration();
        println!("{}", serde_json::to_string_pretty(&pane)?);
        return Ok(());
    }

    log::info!(
        "Hosting section background web part (data version {})",
        webpart.data_version()
    );
    webpart.on_init().await?;
    webpart.render()?;

    for theme in switches {
        log::info!("Switching host theme to '{}'", theme.metadata.name);
        provider.set_theme(theme.snapshot);
    }

    log::debug!(
        "{} style variable(s) on the web part root",
        webpart.bridge().style_scope().variables().len()
    );

    let root = element.outer_html();
    if cli.fragment {
        println!("{root}");
    } else {
        println!("{}", page(&root));
    }

    webpart.on_dispose();
    log::debug!(
        "Theme listeners left after dispose: {}",
        provider.listener_count()
    );
    Ok(())
}

fn page(body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Section Background</title>\n<style>\n{STYLESHEET}</style>\n</head>\n\
         <body>\n{body}\n</body>\n</html>"
    )
}
