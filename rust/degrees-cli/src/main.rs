use std::error::Error as StdError;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

use degrees_cli::render::{render_json, render_text};
use degrees_cli::Config;
use degrees_core::graph::GraphFile;
use degrees_core::store::LinkStore;
use degrees_core::wiki::{base_url, ArticleLinks, ArticleResolver, Editions, PageDir};
use degrees_core::{CachingProvider, NeighborProvider, Resolver, SearchEngine, SearchOptions, Traversal};

#[derive(Parser, Debug)]
#[command(name = "degrees", version, about = "Degrees of separation between the articles of a link graph")]
struct Cli {
    /// Log as JSON lines on stderr
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Shortest connecting path from SOURCE to each TARGET
    Path(PathArgs),
    /// Load a JSON graph document into a SQLite link store
    Import(ImportArgs),
}

#[derive(Args, Debug)]
struct PathArgs {
    /// JSON graph document (falls back to DEGREES_GRAPH)
    #[arg(long, value_name = "PATH", conflicts_with_all = ["db", "pages"])]
    graph: Option<PathBuf>,

    /// SQLite link store built by `degrees import`
    #[arg(long, value_name = "PATH", conflicts_with = "pages")]
    db: Option<PathBuf>,

    /// Directory of saved article pages, `<Title>.html` each
    #[arg(long, value_name = "DIR", requires = "language")]
    pages: Option<PathBuf>,

    /// Edition of the saved pages: English or local name, or code (`Italiano`, `it`)
    #[arg(long, value_name = "LANGUAGE", requires = "pages")]
    language: Option<String>,

    /// JSON edition table replacing the built-in one
    #[arg(long, value_name = "PATH", requires = "language")]
    editions: Option<PathBuf>,

    /// Article id, title or URL to start from
    source: String,

    /// Article ids, titles or URLs to reach
    #[arg(required = true)]
    targets: Vec<String>,

    /// Depth-first traversal: finds a path, not necessarily the shortest
    #[arg(long)]
    depth_first: bool,

    /// Give up after expanding this many articles
    #[arg(long, value_name = "N")]
    max_expansions: Option<u64>,

    /// Cache this many neighbor lists across the searches
    #[arg(long, value_name = "ENTRIES")]
    cache: Option<usize>,

    /// Print the search report as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct ImportArgs {
    #[arg(long, value_name = "PATH")]
    graph: PathBuf,

    #[arg(long, value_name = "PATH")]
    db: PathBuf,
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = fmt().with_env_filter(filter).with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_json);
    info!(core_version = %degrees_core::version(), "starting degrees");

    match cli.command {
        Command::Path(args) => run_path(&args, &Config::from_env()),
        Command::Import(args) => run_import(&args),
    }
}

fn run_path(args: &PathArgs, cfg: &Config) -> Result<()> {
    let options = SearchOptions {
        traversal: if args.depth_first { Traversal::DepthFirst } else { Traversal::BreadthFirst },
        max_expansions: args.max_expansions.or(cfg.max_expansions),
    };
    let cache = match args.cache {
        Some(0) => None,
        Some(n) => Some(n),
        None => cfg.cache_capacity,
    };

    if let (Some(pages), Some(language)) = (&args.pages, &args.language) {
        let editions = match &args.editions {
            Some(path) => {
                let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
                Editions::from_reader(BufReader::new(file)).with_context(|| format!("failed to parse {}", path.display()))?
            }
            None => Editions::builtin(),
        };
        let edition = editions.lookup(language).with_context(|| format!("invalid language `{language}`"))?;
        let base = base_url(&edition.code).with_context(|| format!("bad edition code `{}`", edition.code))?;
        info!(edition = %edition.code, pages = %pages.display(), "saved_pages");
        let dir = PageDir::new(pages);
        let links = ArticleLinks::new(base.clone(), &dir);
        return search_all(&links, &ArticleResolver::new(base, &dir), args, options, cache);
    }
    if let Some(db) = &args.db {
        let store = LinkStore::open(db).with_context(|| format!("failed to open {}", db.display()))?;
        return search_all(&store, &store, args, options, cache);
    }
    let path = args
        .graph
        .clone()
        .or_else(|| cfg.graph.clone())
        .context("no graph given: pass --graph or --db, or set DEGREES_GRAPH")?;
    let doc = GraphFile::load(&path).with_context(|| format!("failed to load {}", path.display()))?;
    search_all(&doc.to_graph(), &doc.name_index(), args, options, cache)
}

fn search_all<P, R>(provider: &P, resolver: &R, args: &PathArgs, options: SearchOptions, cache: Option<usize>) -> Result<()>
where
    P: NeighborProvider<String>,
    P::Error: StdError + Send + Sync + 'static,
    R: Resolver<String>,
    R::Error: StdError + Send + Sync + 'static,
{
    let Some(capacity) = cache else {
        return run_searches(provider, provider, resolver, args, options);
    };
    let cached: CachingProvider<_, String> = CachingProvider::with_capacity(|s: &String| provider.neighbors(s), capacity);
    let out = run_searches(&cached, provider, resolver, args, options);
    debug!(hits = cached.hits(), misses = cached.misses(), cached = cached.cached(), "neighbor_cache");
    out
}

fn run_searches<Q, P, R>(search: &Q, labels: &P, resolver: &R, args: &PathArgs, options: SearchOptions) -> Result<()>
where
    Q: NeighborProvider<String>,
    Q::Error: StdError + Send + Sync + 'static,
    P: NeighborProvider<String>,
    R: Resolver<String>,
    R::Error: StdError + Send + Sync + 'static,
{
    let source = resolve(resolver, &args.source)?;
    let source_label = labels.label(&source).unwrap_or_else(|| source.clone());
    let engine = SearchEngine::with_options(search, options);

    for query in &args.targets {
        let target = resolve(resolver, query)?;
        let report = engine
            .find_path(&source, &target)
            .with_context(|| format!("searching {source} -> {target}"))?;
        info!(%source, %target, expanded = report.expanded, degrees = ?report.degrees(), "path_done");
        if args.json {
            println!("{}", render_json(&source, &target, &report)?);
        } else {
            print!("{}", render_text(&source_label, &source, report.path.as_ref()));
        }
    }
    Ok(())
}

fn resolve<R>(resolver: &R, query: &str) -> Result<String>
where
    R: Resolver<String>,
    R::Error: StdError + Send + Sync + 'static,
{
    let resolution = resolver.resolve(query).with_context(|| format!("resolving `{query}`"))?;
    Ok(resolution.into_result(query)?)
}

fn run_import(args: &ImportArgs) -> Result<()> {
    let doc = GraphFile::load(&args.graph).with_context(|| format!("failed to load {}", args.graph.display()))?;
    let store = LinkStore::create(&args.db).with_context(|| format!("failed to create {}", args.db.display()))?;
    store.import(&doc).context("import failed")?;
    let (articles, links) = (store.article_count()?, store.link_count()?);
    info!(articles, links, db = %args.db.display(), "import_done");
    println!("{articles} articles, {links} links in {}", args.db.display());
    Ok(())
}
