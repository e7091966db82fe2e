//! readme-icons CLI
//!
//! Usage:
//!   readme-icons serve [--config FILE] [--host HOST] [--port PORT]
//!   readme-icons grid -i rust,go [--theme light] [--perline N] [--size N]
//!   readme-icons badge --label Rust --message 1.80 --color 000000
//!   readme-icons snippet -i rust,go --base https://icons.example.com
//!   readme-icons search QUERY

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use readme_icons::badge::BadgeStyle;
use readme_icons::markup::{badge_markdown, grid_snippet};
use readme_icons::{
    badge_url, render_icons, server, svg_data_uri, Alignment, BadgeSpec, GridConfig, IconCatalog,
    LayoutRequest, ServerConfig, SvgConfig, Theme,
};

#[derive(Parser, Debug)]
#[command(name = "readme-icons")]
#[command(author, version, about = "Icon grids and badges for README files", long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the grid and search endpoints over HTTP
    Serve {
        /// Configuration file (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Icon dataset (JSON), overrides the configuration file
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Render an icon grid to stdout
    Grid {
        #[command(flatten)]
        grid: GridArgs,

        /// Icon dataset (JSON)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Emit a self-contained document with an XML declaration
        #[arg(long)]
        standalone: bool,

        /// Indent the output
        #[arg(long)]
        pretty: bool,

        /// Print a base64 data URI instead of the raw SVG
        #[arg(long)]
        data_uri: bool,
    },

    /// Print the URL (or Markdown) for a badge
    Badge(BadgeArgs),

    /// Print a README snippet embedding a grid served at BASE
    Snippet {
        #[command(flatten)]
        grid: GridArgs,

        /// Base URL of a running server
        #[arg(long)]
        base: String,

        /// Link target of the grid (defaults to BASE)
        #[arg(long)]
        link: Option<String>,

        /// Horizontal alignment (left, center, right)
        #[arg(long, default_value_t = Alignment::default())]
        align: Alignment,
    },

    /// Search the icon catalog by title or identifier
    Search {
        query: String,

        /// Maximum number of results
        #[arg(short, long, default_value_t = readme_icons::catalog::DEFAULT_SEARCH_LIMIT)]
        limit: usize,

        /// Icon dataset (JSON)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

/// Badge options
#[derive(clap::Args, Debug)]
struct BadgeArgs {
    /// Left-hand text
    #[arg(long, default_value = "")]
    label: String,

    /// Right-hand text
    #[arg(long, default_value = "")]
    message: String,

    /// Badge color (hex, with or without '#')
    #[arg(long)]
    color: Option<String>,

    /// Prefill label, color and logo from a catalog icon
    #[arg(long, conflicts_with = "repo")]
    icon: Option<String>,

    /// Repository as OWNER/NAME for a repository metric badge
    #[arg(long, requires = "metric")]
    repo: Option<String>,

    /// Repository metric (stars, forks, issues, ...)
    #[arg(long, requires = "repo")]
    metric: Option<String>,

    /// Badge style
    #[arg(long, default_value_t = BadgeStyle::default())]
    style: BadgeStyle,

    /// Logo identifier
    #[arg(long)]
    logo: Option<String>,

    /// Logo color
    #[arg(long)]
    logo_color: Option<String>,

    /// Print a Markdown image instead of the bare URL
    #[arg(long)]
    markdown: bool,

    /// Link target for the Markdown image
    #[arg(long)]
    link: Option<String>,

    /// Icon dataset (JSON) used by --icon
    #[arg(long)]
    catalog: Option<PathBuf>,
}

/// Grid parameters shared by `grid` and `snippet`
#[derive(clap::Args, Debug)]
struct GridArgs {
    /// Comma-separated icon identifiers
    #[arg(short, long)]
    icons: String,

    /// Theme (dark or light)
    #[arg(short, long, default_value = "dark")]
    theme: String,

    /// Icons per row (clamped to 1..=50)
    #[arg(long)]
    perline: Option<i64>,

    /// Cell size in pixels (clamped to 16..=128)
    #[arg(long)]
    size: Option<i64>,
}

impl GridArgs {
    fn to_request(&self) -> LayoutRequest {
        let mut grid = GridConfig::new();
        if let Some(perline) = self.perline {
            grid = grid.with_icons_per_row(perline);
        }
        if let Some(size) = self.size {
            grid = grid.with_icon_size(size);
        }
        let identifiers = self
            .icons
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty());
        LayoutRequest::new(identifiers)
            .with_theme(Theme::from_param(Some(self.theme.as_str())))
            .with_grid(grid)
    }
}

impl BadgeArgs {
    /// Build the badge description; `catalog` is only consulted for `--icon`
    fn to_spec(&self, catalog: &IconCatalog) -> anyhow::Result<BadgeSpec> {
        let mut spec = match (&self.icon, &self.repo, &self.metric) {
            (Some(slug), _, _) => {
                let Some(icon) = catalog.get(slug) else {
                    bail!("Unknown icon '{}'", slug);
                };
                BadgeSpec::from_icon(icon, self.message.as_str())
            }
            (None, Some(repo), Some(metric)) => {
                let (owner, name) = split_repo(repo)?;
                BadgeSpec::repository_metric(metric.as_str(), owner, name).with_logo("github")
            }
            _ => BadgeSpec::custom(self.label.as_str(), self.message.as_str(), ""),
        };
        spec = spec.with_style(self.style);
        if let Some(color) = &self.color {
            spec = spec.with_color(color.as_str());
        }
        if let Some(logo) = &self.logo {
            spec = spec.with_logo(logo.as_str());
        }
        if let Some(logo_color) = &self.logo_color {
            spec = spec.with_logo_color(logo_color.as_str());
        }
        Ok(spec)
    }
}

fn load_catalog(path: Option<&Path>) -> anyhow::Result<IconCatalog> {
    match path {
        Some(path) => IconCatalog::from_file(path)
            .with_context(|| format!("Failed to load icon catalog {}", path.display())),
        None => Ok(IconCatalog::builtin().clone()),
    }
}

fn split_repo(repo: &str) -> anyhow::Result<(&str, &str)> {
    match repo.split_once('/') {
        Some((owner, name)) if !owner.is_empty() && !name.is_empty() => Ok((owner, name)),
        _ => bail!("Repository must be given as OWNER/NAME, got '{}'", repo),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Command::Serve {
            config,
            host,
            port,
            catalog,
        } => {
            let mut config = match config {
                Some(path) => ServerConfig::from_file(&path)
                    .with_context(|| format!("Failed to load config {}", path.display()))?,
                None => ServerConfig::default(),
            };
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            if catalog.is_some() {
                config.catalog.path = catalog;
            }
            server::run_server(config).await
        }

        Command::Grid {
            grid,
            catalog,
            standalone,
            pretty,
            data_uri,
        } => {
            let catalog = load_catalog(catalog.as_deref())?;
            let svg_config = SvgConfig::new()
                .with_standalone(standalone)
                .with_pretty_print(pretty);
            let svg = render_icons(&catalog, &grid.to_request(), &svg_config)?;
            if data_uri {
                println!("{}", svg_data_uri(&svg));
            } else {
                println!("{}", svg);
            }
            Ok(())
        }

        Command::Badge(args) => {
            let catalog = match &args.icon {
                Some(_) => load_catalog(args.catalog.as_deref())?,
                None => IconCatalog::default(),
            };
            let spec = args.to_spec(&catalog)?;
            if args.markdown {
                println!("{}", badge_markdown(&spec, args.link.as_deref()));
            } else {
                println!("{}", badge_url(&spec));
            }
            Ok(())
        }

        Command::Snippet {
            grid,
            base,
            link,
            align,
        } => {
            let snippet = grid_snippet(&base, &grid.to_request(), link.as_deref(), align);
            println!("{}", snippet);
            Ok(())
        }

        Command::Search {
            query,
            limit,
            catalog,
        } => {
            let catalog = load_catalog(catalog.as_deref())?;
            for icon in catalog.search(&query, limit) {
                println!("{:<20} #{:<8} {}", icon.slug, icon.hex, icon.title);
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Command {
        Cli::try_parse_from(std::iter::once("readme-icons").chain(args.iter().copied()))
            .unwrap()
            .command
    }

    fn badge(args: &[&str]) -> BadgeSpec {
        let mut full = vec!["badge"];
        full.extend_from_slice(args);
        match parse(&full) {
            Command::Badge(args) => args.to_spec(IconCatalog::builtin()).unwrap(),
            other => panic!("expected badge command, got {other:?}"),
        }
    }

    #[test]
    fn test_badge_custom_dispatch() {
        let spec = badge(&["--label", "Rust", "--message", "1.80", "--color", "#000000"]);
        assert_eq!(
            badge_url(&spec),
            "https://img.shields.io/badge/Rust-1.80-000000?style=for-the-badge"
        );
    }

    #[test]
    fn test_badge_repository_dispatch() {
        let spec = badge(&["--repo", "octo/cat", "--metric", "stars", "--style", "flat"]);
        assert_eq!(
            badge_url(&spec),
            "https://img.shields.io/github/stars/octo/cat?style=flat&logo=github"
        );
    }

    #[test]
    fn test_badge_icon_dispatch() {
        let spec = badge(&["--icon", "rust", "--message", "stable"]);
        assert_eq!(
            badge_url(&spec),
            "https://img.shields.io/badge/Rust-stable-000000?style=for-the-badge&logo=rust&logoColor=white"
        );
    }

    #[test]
    fn test_badge_rejects_bad_input() {
        let args = match parse(&["badge", "--repo", "no-slash", "--metric", "stars"]) {
            Command::Badge(args) => args,
            other => panic!("expected badge command, got {other:?}"),
        };
        assert!(args.to_spec(IconCatalog::builtin()).is_err());

        let args = match parse(&["badge", "--icon", "not-an-icon"]) {
            Command::Badge(args) => args,
            other => panic!("expected badge command, got {other:?}"),
        };
        assert!(args.to_spec(IconCatalog::builtin()).is_err());

        // --repo and --metric only make sense together
        assert!(Cli::try_parse_from(["readme-icons", "badge", "--repo", "a/b"]).is_err());
        assert!(Cli::try_parse_from(["readme-icons", "badge", "--style", "round"]).is_err());
    }

    #[test]
    fn test_grid_args_to_request() {
        let Command::Grid { grid, .. } = parse(&[
            "grid", "-i", "rust, go,,", "--theme", "light", "--perline", "0", "--size", "999",
        ]) else {
            panic!("expected grid command");
        };
        let request = grid.to_request();
        assert_eq!(request.identifiers, vec!["rust", "go"]);
        assert_eq!(request.theme, Theme::Light);
        assert_eq!(request.grid.icons_per_row(), 1);
        assert_eq!(request.grid.icon_size(), 128);
    }

    #[test]
    fn test_snippet_link_defaults_to_base() {
        let Command::Snippet {
            grid,
            base,
            link,
            align,
        } = parse(&["snippet", "-i", "go", "--base", "https://icons.example.com"])
        else {
            panic!("expected snippet command");
        };
        assert_eq!(link, None);
        assert_eq!(
            grid_snippet(&base, &grid.to_request(), link.as_deref(), align),
            "[![Icons](https://icons.example.com/api/icons?i=go)](https://icons.example.com)"
        );
    }

    #[test]
    fn test_snippet_has_no_catalog_flag() {
        assert!(Cli::try_parse_from([
            "readme-icons", "snippet", "-i", "go", "--base", "x", "--catalog", "icons.json"
        ])
        .is_err());
    }
}
