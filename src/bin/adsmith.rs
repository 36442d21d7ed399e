use std::path::{Path, PathBuf};

use adsmith::batch::archive_name;
use adsmith::model::templates::{BUTTON_TEMPLATES, COMBINED_TEMPLATES};
use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "adsmith", version)]
struct Cli {
    /// Log progress (and skipped entries) to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render every image × platform × variant into a zip archive.
    Generate(GenerateArgs),
    /// Render a single preview PNG.
    Preview(PreviewArgs),
    /// Print the expanded variants of a job as JSON.
    Expand(JobArgs),
    /// Print the platform list (the built-in catalog, or a job's selection) as JSON.
    Platforms(PlatformsArgs),
    /// List built-in button and combined templates.
    Templates,
}

#[derive(Parser, Debug)]
struct JobArgs {
    /// Job JSON file.
    #[arg(long)]
    job: PathBuf,
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Job JSON file.
    #[arg(long)]
    job: PathBuf,

    /// Output zip path. An existing directory receives the default archive name.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct PreviewArgs {
    /// Job JSON file.
    #[arg(long)]
    job: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Platform key to preview at (defaults to the first selected platform).
    #[arg(long)]
    platform: Option<String>,

    /// Variant index (0-based, clamped).
    #[arg(long, default_value_t = 0)]
    variant: usize,

    /// Source image index (0-based).
    #[arg(long, default_value_t = 0)]
    image: usize,
}

#[derive(Parser, Debug)]
struct PlatformsArgs {
    /// Job JSON file.
    #[arg(long)]
    job: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .init();

    match cli.cmd {
        Command::Generate(args) => cmd_generate(args),
        Command::Preview(args) => cmd_preview(args),
        Command::Expand(args) => cmd_expand(args),
        Command::Platforms(args) => cmd_platforms(args),
        Command::Templates => cmd_templates(),
    }
}

fn load_job(path: &Path) -> anyhow::Result<adsmith::LoadedJob> {
    adsmith::JobDef::load(path).with_context(|| format!("load job '{}'", path.display()))
}

fn ensure_parent(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let job = load_job(&args.job)?;
    let canvas = adsmith::preview::preview_canvas(&job.model);
    let surface = adsmith::CpuSurface::new(canvas, job.fonts)?;
    let orchestrator = adsmith::BatchOrchestrator::new()
        .with_labels(job.labels)
        .with_analytics(Box::new(adsmith::TracingAnalytics));
    let mut studio = adsmith::Studio::new(job.model, surface).with_orchestrator(orchestrator);

    let out = studio.generate_zip()?;
    let report = &out.report;

    let path = if args.out.is_dir() {
        args.out.join(&report.archive_name)
    } else {
        args.out
    };
    ensure_parent(&path)?;
    std::fs::write(&path, &out.bytes)
        .with_context(|| format!("write zip '{}'", path.display()))?;

    for s in &report.skipped_entries {
        eprintln!(
            "skipped image {} / {} / #{:03}: {}",
            s.image_index + 1,
            s.platform,
            s.seq,
            s.reason
        );
    }
    eprintln!(
        "wrote {} ({} of {} images)",
        path.display(),
        report.produced,
        report.total
    );
    Ok(())
}

fn cmd_preview(args: PreviewArgs) -> anyhow::Result<()> {
    let mut job = load_job(&args.job)?;
    if args.platform.is_some() {
        job.model
            .apply(adsmith::ModelUpdate::SetPreviewPlatform(args.platform))?;
    }
    job.model.apply(adsmith::ModelUpdate::SelectImage(args.image))?;

    let canvas = adsmith::preview::preview_canvas(&job.model);
    let surface = adsmith::CpuSurface::new(canvas, job.fonts)?;
    let mut preview = adsmith::PreviewLoop::new(surface);
    preview.set_variant_index(args.variant);

    let frame = preview
        .refresh(&job.model)?
        .context("nothing to preview: the job has no images")?;

    ensure_parent(&args.out)?;
    std::fs::write(&args.out, &frame.png)
        .with_context(|| format!("write png '{}'", args.out.display()))?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_expand(args: JobArgs) -> anyhow::Result<()> {
    let job = load_job(&args.job)?;
    let variants = adsmith::expand_model(&job.model);
    let json = serde_json::to_string_pretty(&variants).context("serialize variants")?;
    println!("{json}");
    eprintln!(
        "{} variants; {}",
        variants.len(),
        archive_name(
            &job.labels.archive_prefix,
            job.model.images.len() * job.model.platforms.selected_count() * variants.len()
        )
    );
    Ok(())
}

fn cmd_platforms(args: PlatformsArgs) -> anyhow::Result<()> {
    let platforms = match args.job {
        Some(path) => load_job(&path)?.model.platforms,
        None => adsmith::model::PlatformSet::default(),
    };
    let json = serde_json::to_string_pretty(&platforms).context("serialize platforms")?;
    println!("{json}");
    Ok(())
}

fn cmd_templates() -> anyhow::Result<()> {
    println!("button templates:");
    for t in BUTTON_TEMPLATES {
        println!("  {}", t.name);
    }
    println!("combined templates:");
    for t in COMBINED_TEMPLATES {
        println!("  {}", t.name);
    }
    Ok(())
}
