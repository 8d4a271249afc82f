use std::{
    fs::File,
    io::{BufReader, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pageblocks::{
    BlockKind, Locale, PageSnapshot, RenderCtx, RenderedPage, SectionKind, SiteConfig,
    StaticPosts, Strategy, Taxonomy,
};

#[derive(Parser, Debug)]
#[command(name = "pageblocks", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a page (or the homepage) to HTML.
    Render(RenderArgs),
    /// List the units of a content file with their payload status.
    Inspect(InspectArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input content units JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Treat the input as homepage sections instead of page blocks.
    #[arg(long)]
    sections: bool,

    /// Display locale (`id` or `en`). Defaults to the site config's locale.
    #[arg(long)]
    locale: Option<String>,

    /// Storage root for relative media paths. Overrides the site config.
    #[arg(long)]
    media_base: Option<String>,

    /// Site config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Posts JSON for news blocks.
    #[arg(long)]
    posts: Option<PathBuf>,

    /// Output HTML path. Writes to stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct InspectArgs {
    /// Input content units JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Treat the input as homepage sections instead of page blocks.
    #[arg(long)]
    sections: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Inspect(args) => cmd_inspect(args),
    }
}

fn load_config(args: &RenderArgs) -> anyhow::Result<SiteConfig> {
    let mut cfg = match &args.config {
        Some(path) => SiteConfig::from_path(path)
            .with_context(|| format!("load site config '{}'", path.display()))?,
        None => SiteConfig::default(),
    };
    if let Some(base) = &args.media_base {
        cfg.media_base_url = Some(base.clone());
        cfg.validate().with_context(|| "apply --media-base")?;
    }
    Ok(cfg)
}

fn load_posts(path: &Path) -> anyhow::Result<StaticPosts> {
    let f = File::open(path).with_context(|| format!("open posts '{}'", path.display()))?;
    Ok(StaticPosts::from_reader(BufReader::new(f))
        .with_context(|| format!("parse posts '{}'", path.display()))?)
}

fn render_file<K: Strategy>(path: &Path, ctx: &RenderCtx<'_>) -> anyhow::Result<RenderedPage> {
    let snapshot = PageSnapshot::<K>::from_path(path)
        .with_context(|| format!("load content units '{}'", path.display()))?;
    if snapshot.rejected() > 0 {
        eprintln!("skipped {} entries that are not content units", snapshot.rejected());
    }
    Ok(pageblocks::render_page(&snapshot, ctx))
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args)?;
    let locale = match &args.locale {
        Some(s) => s.parse::<Locale>()?,
        None => cfg.default_locale,
    };
    let media = cfg.media_resolver()?;
    let posts = args.posts.as_deref().map(load_posts).transpose()?;

    let mut ctx = RenderCtx::new(locale, &*media).with_opts(cfg.render_opts());
    if let Some(posts) = &posts {
        ctx = ctx.with_posts(posts);
    }

    let page = if args.sections {
        render_file::<SectionKind>(&args.in_path, &ctx)?
    } else {
        render_file::<BlockKind>(&args.in_path, &ctx)?
    };

    for fallback in page.fallbacks() {
        eprintln!(
            "fallback: {} ({}): {}",
            fallback.type_tag, fallback.id, fallback.message
        );
    }

    let html = page.to_html();
    match &args.out {
        Some(out) => {
            if let Some(parent) = out.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(out, format!("{html}\n"))
                .with_context(|| format!("write html '{}'", out.display()))?;
            eprintln!("wrote {} ({} units)", out.display(), page.visible_count());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{html}").with_context(|| "write html to stdout")?;
        }
    }
    Ok(())
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    if args.sections {
        inspect_file::<SectionKind>(&args.in_path)
    } else {
        inspect_file::<BlockKind>(&args.in_path)
    }
}

fn inspect_file<K: Taxonomy>(path: &Path) -> anyhow::Result<()> {
    let snapshot = PageSnapshot::<K>::from_path(path)
        .with_context(|| format!("load content units '{}'", path.display()))?;

    let mut stdout = std::io::stdout().lock();
    for unit in snapshot.units() {
        let kind = if unit.kind().is_some() { "" } else { " (unknown type)" };
        writeln!(
            stdout,
            "{}\t{}{}\torder={}\tactive={}\tpayload={}",
            unit.id(),
            unit.type_tag(),
            kind,
            unit.order(),
            unit.is_active(),
            unit.payload_status().label()
        )?;
    }
    writeln!(stdout, "rejected={}", snapshot.rejected())?;
    Ok(())
}
