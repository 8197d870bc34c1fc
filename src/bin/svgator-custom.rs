use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "svgator-custom", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replace the embedded player with a generated runtime.
    Convert(ConvertArgs),
    /// Print the detected capabilities and module plan as JSON.
    Detect(DetectArgs),
    /// Print the attribute writes of one frame as JSON.
    Sample(SampleArgs),
}

#[derive(Args, Debug)]
struct ConvertArgs {
    /// Exported SVG.
    input: PathBuf,

    /// Output SVG.
    #[arg(default_value = "output.custom.svg")]
    output: PathBuf,

    /// Minify the generated runtime.
    #[arg(long)]
    minify: bool,

    #[command(flatten)]
    common: CommonArgs,

    /// Minimum visible percentage for scroll-started playback (clamped to 1..=100).
    #[arg(long, allow_negative_numbers = true)]
    scroll_threshold: Option<i64>,
}

#[derive(Args, Debug)]
struct DetectArgs {
    /// Exported SVG.
    input: PathBuf,

    /// Keep the editor's UI decoration.
    #[arg(long)]
    keep_ui: bool,
}

#[derive(Args, Debug)]
struct SampleArgs {
    /// Exported SVG.
    input: PathBuf,

    /// Elapsed playback time in milliseconds.
    #[arg(long)]
    at: f64,

    /// Animation index.
    #[arg(long, default_value_t = 0)]
    animation: usize,

    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Args, Debug)]
struct CommonArgs {
    /// Keep the editor's UI decoration.
    #[arg(long)]
    keep_ui: bool,

    /// Sample count for path morphing (clamped to 16..=500).
    #[arg(long, allow_negative_numbers = true)]
    morph_samples: Option<i64>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("svgator_custom=info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Convert(args) => cmd_convert(args),
        Command::Detect(args) => cmd_detect(args),
        Command::Sample(args) => cmd_sample(args),
    }
}

fn read_svg(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("read input '{}'", path.display()))
}

fn cmd_convert(args: ConvertArgs) -> anyhow::Result<()> {
    let svg = read_svg(&args.input)?;
    let opts = svgator_custom::ConvertOptions {
        keep_ui: args.common.keep_ui,
        minify: args.minify,
        runtime: svgator_custom::RuntimeConfig::clamped(
            args.common.morph_samples,
            args.scroll_threshold,
        ),
    };
    let out = svgator_custom::convert(&svg, &opts)?;

    if let Some(parent) = args.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.output, &out.svg)
        .with_context(|| format!("write output '{}'", args.output.display()))?;

    tracing::info!(output = %args.output.display(), "wrote");
    tracing::info!(
        minify = ?if opts.minify { Some(out.minifier) } else { None },
        keep_ui = opts.keep_ui,
        removed = out.removed_ids.len(),
        runtime_bytes = out.runtime_bytes,
        "converted"
    );
    tracing::info!(
        capabilities = %serde_json::to_string(&out.capabilities)?,
        plan = %serde_json::to_string(&out.plan)?,
        "detected"
    );
    Ok(())
}

fn cmd_detect(args: DetectArgs) -> anyhow::Result<()> {
    let svg = read_svg(&args.input)?;
    let doc = svgator_custom::load(&svg, args.keep_ui)?;
    let capabilities = doc.capabilities();
    let report = serde_json::json!({
        "player_id": doc.player_id,
        "animations": doc.payload.animations.len(),
        "removed_ids": doc.removed_ids,
        "capabilities": capabilities,
        "modules": svgator_custom::ModulePlan::from(&capabilities),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let svg = read_svg(&args.input)?;
    let doc = svgator_custom::load(&svg, args.common.keep_ui)?;
    let config = svgator_custom::RuntimeConfig::clamped(args.common.morph_samples, None);
    let sampled = svgator_custom::sample_frame(&doc, args.animation, args.at, &config)?;
    println!("{}", serde_json::to_string_pretty(&sampled)?);
    Ok(())
}
