use clap::{Parser, Subcommand};
use easy_vibe_site::env::{Deployment, EnvVars};
use easy_vibe_site::head::{self, HeadContext};
use easy_vibe_site::{config, locale, output, sidebar, site, sitemap};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "easy-vibe-site")]
#[command(about = "Resolve the Easy-Vibe site configuration")]
#[command(long_about = "\
Resolve the Easy-Vibe site configuration

Computes the configuration object the static-site generator consumes: base
path, per-locale head tags, navigation and sidebars, and sitemap settings.

Environment:

  BASE         Base path, used verbatim when set
  VERCEL       \"1\" on Vercel builds (base path becomes /)
  VERCEL_URL   Set on Vercel builds (base path becomes /)
  EDGEONE      Set on EdgeOne builds (base path becomes /)
  RUST_LOG     Log filter, e.g. easy_vibe_site=debug

Run 'easy-vibe-site gen-config' to generate a documented site.toml.")]
#[command(version)]
struct Cli {
    /// Directory containing site.toml
    #[arg(long, default_value = ".", global = true)]
    config_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve the full site configuration as JSON
    Resolve {
        /// Write JSON here and print a summary instead of the JSON
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print the head tags for one locale
    Head {
        #[arg(long, default_value = locale::DEFAULT_LOCALE)]
        locale: String,
        /// Canonical path override, e.g. /zh-cn/guide/introduction
        #[arg(long)]
        path: Option<String>,
        /// Render an HTML preview instead of JSON
        #[arg(long)]
        html: bool,
    },
    /// Print the sidebar tree for one locale
    Sidebar {
        #[arg(long, default_value = locale::DEFAULT_LOCALE)]
        locale: String,
        /// Print JSON instead of a tree
        #[arg(long)]
        json: bool,
    },
    /// List the locale table
    Locales,
    /// Report whether each URL is kept in the sitemap
    Sitemap {
        #[arg(required = true)]
        urls: Vec<String>,
    },
    /// Print a stock site.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("easy_vibe_site=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let load_project = || config::load_config(&cli.config_dir);
    let env = EnvVars::from_process();

    match cli.command {
        Command::Resolve { out } => {
            let project = load_project()?;
            let site = site::resolve_site_config(&env, &project);
            let json = serde_json::to_string_pretty(&site)?;
            match out {
                Some(path) => {
                    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, json)?;
                    output::print_site_summary(&site);
                    info!(path = %path.display(), "wrote site configuration");
                }
                None => println!("{}", json),
            }
        }
        Command::Head {
            locale: code,
            path,
            html,
        } => {
            let project = load_project()?;
            let deployment = Deployment::resolve(&env, &project.deploy);
            let ctx = HeadContext {
                deployment: &deployment,
                config: &project,
            };
            let entry = locale::locale_meta(&code);
            let tags = head::build_head_tags(
                &ctx,
                &code,
                entry.title,
                entry.description,
                path.as_deref(),
            );
            if html {
                println!(
                    "{}",
                    head::render_head_document(entry.html_lang, &tags).into_string()
                );
            } else {
                println!("{}", serde_json::to_string_pretty(&tags)?);
            }
        }
        Command::Sidebar { locale: code, json } => {
            let tree = sidebar::build_sidebar(&code);
            if json {
                println!("{}", serde_json::to_string_pretty(&tree)?);
            } else {
                output::print_sidebar(&tree);
            }
        }
        Command::Locales => {
            output::print_locale_table(locale::locales());
        }
        Command::Sitemap { urls } => {
            let project = load_project()?;
            let options = sitemap::SitemapOptions::from_config(&project.sitemap);
            output::print_sitemap_check(&options, &urls);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
