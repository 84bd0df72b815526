use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use mandex::index::stats::show_stats;
use mandex::index::{
    load_cache, pack_manuals, resolve_cache_path, save_packed, save_pages, scan_manuals,
    ManualLayout, PageIndex, ScanOptions,
};
use mandex::output;
use mandex::query::{LookupExecutor, LookupResult, Query};
use mandex::utils::{AppConfig, LocalFs};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use termcolor::ColorChoice;

#[derive(Parser)]
#[command(name = "mandex", version)]
#[command(about = "Index manual page sources and look pages up by title and section")]
struct Cli {
    /// Page title to look up (case-insensitive)
    title: Option<String>,

    /// Section to look in, e.g. 1, 3p, 8. Without a title, lists the section
    #[arg(short, long)]
    section: Option<String>,

    /// Print the number of indexed pages and exit
    #[arg(short = 'n', long)]
    count: bool,

    /// List known manual sections and exit
    #[arg(long, conflicts_with_all = ["stats", "count"])]
    sections: bool,

    /// Show index statistics and exit
    #[arg(long, conflicts_with = "count")]
    stats: bool,

    /// Scan the manuals folder instead of loading the cache
    #[arg(long)]
    read: bool,

    /// Write the scanned index to the cache file
    #[arg(long, requires = "read")]
    write: bool,

    /// Build the flat title -> content cache (duplicate titles are an error)
    #[arg(long, requires = "read")]
    packed: bool,

    /// Cache file [default: <root>/documentation/pages.json]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Directory containing the documentation folder [default: current directory]
    #[arg(long)]
    root: Option<PathBuf>,

    /// Hide progress output
    #[arg(short, long)]
    quiet: bool,

    /// When to use colors
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    color: ColorMode,
}

#[derive(Clone, Copy, ValueEnum)]
enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    fn choice(self) -> ColorChoice {
        match self {
            ColorMode::Auto if std::io::stdout().is_terminal() => ColorChoice::Auto,
            ColorMode::Auto => ColorChoice::Never,
            ColorMode::Always => ColorChoice::Always,
            ColorMode::Never => ColorChoice::Never,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or("MANDEX_LOG", "warn")).init();

    let cli = Cli::parse();
    let choice = cli.color.choice();

    if cli.sections {
        output::print_sections(choice)?;
        return Ok(());
    }

    let config = AppConfig::load()?;
    let layout = config.layout(cli.root.as_deref())?;
    let cache_path = resolve_cache_path(&layout, cli.output.as_deref());

    let index = load_index(&cli, &layout, &cache_path)?;

    if cli.stats {
        let source = if cli.read {
            layout.manuals_dir()
        } else {
            cache_path
        };
        return show_stats(&index, &source);
    }

    if cli.count {
        println!("{}", index.len());
        return Ok(());
    }

    let query = Query::new(cli.title.as_deref(), cli.section.as_deref());
    if query.is_empty() {
        if cli.write {
            if !cli.quiet {
                eprintln!("Wrote {} pages to {}", index.len(), cache_path.display());
            }
            return Ok(());
        }
        bail!("missing page title");
    }

    match LookupExecutor::new(&index).execute(&query)? {
        LookupResult::Page(page) => output::print_page(page)?,
        LookupResult::Pages(pages) => output::print_page_list(&pages, choice)?,
    }

    Ok(())
}

/// Scan the source tree or load the cache, persisting a scan when asked.
fn load_index(cli: &Cli, layout: &ManualLayout, cache_path: &Path) -> Result<PageIndex> {
    if !cli.read {
        return load_cache(cache_path).with_context(|| {
            format!(
                "Failed to load cache {}. Run with --read --write to build it.",
                cache_path.display()
            )
        });
    }

    let options = ScanOptions { silent: cli.quiet };

    if cli.packed {
        let packed = pack_manuals(&LocalFs, layout, options)
            .with_context(|| format!("Failed to pack {}", layout.manuals_dir().display()))?;
        if cli.write {
            save_packed(cache_path, &packed)?;
        }
        return Ok(PageIndex::from_packed(packed));
    }

    let index = scan_manuals(&LocalFs, layout, options)
        .with_context(|| format!("Failed to scan {}", layout.manuals_dir().display()))?;
    if cli.write {
        save_pages(cache_path, &index)?;
    }
    Ok(index)
}
