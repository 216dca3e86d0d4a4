use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use blendlab::{BlendMode, BlendlabError, PixelBuffer, RenderOpts};

#[derive(Parser, Debug)]
#[command(name = "blendlab", version, about = "Compare two images under every blend mode")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every blend mode with its display names.
    Modes(ModesArgs),
    /// Render the full gallery of blend modes into a directory.
    Render(RenderArgs),
    /// Render a single blend mode as a PNG.
    Inspect(InspectArgs),
    /// Render the gallery for the built-in gradient and letter layers.
    Demo(DemoArgs),
}

#[derive(Args, Debug)]
struct ModesArgs {
    /// Print as JSON instead of a table.
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct LayerArgs {
    /// Bottom layer image.
    #[arg(long)]
    base: PathBuf,

    /// Top layer image.
    #[arg(long)]
    overlay: PathBuf,

    /// Swap layer order before rendering.
    #[arg(long)]
    swap: bool,
}

#[derive(Args, Debug)]
struct ThreadingArgs {
    /// Composite on a dedicated rayon pool.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads; must be at least 1 when given.
    #[arg(long)]
    threads: Option<usize>,
}

impl ThreadingArgs {
    fn opts(&self) -> RenderOpts {
        RenderOpts {
            parallel: self.parallel,
            threads: self.threads,
        }
    }
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    layers: LayerArgs,

    /// Output directory for `<mode>.png` files and `manifest.json`.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    threading: ThreadingArgs,
}

#[derive(Args, Debug)]
struct InspectArgs {
    #[command(flatten)]
    layers: LayerArgs,

    /// Blend mode identifier, e.g. `color-burn`.
    #[arg(long, value_parser = parse_mode)]
    mode: BlendMode,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    threading: ThreadingArgs,
}

#[derive(Args, Debug)]
struct DemoArgs {
    /// Output directory for `<mode>.png` files and `manifest.json`.
    #[arg(long)]
    out: PathBuf,

    /// Put the letter underneath the gradient.
    #[arg(long)]
    swap: bool,

    #[command(flatten)]
    threading: ThreadingArgs,
}

fn parse_mode(s: &str) -> Result<BlendMode, BlendlabError> {
    BlendMode::parse(s)
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
        Command::Modes(args) => cmd_modes(args),
        Command::Render(args) => cmd_render(args),
        Command::Inspect(args) => cmd_inspect(args),
        Command::Demo(args) => cmd_demo(args),
    }
}

fn cmd_modes(args: ModesArgs) -> anyhow::Result<()> {
    if args.json {
        let rows: Vec<_> = BlendMode::ALL
            .iter()
            .map(|m| {
                serde_json::json!({
                    "id": m,
                    "label": m.label(),
                    "label_zh": m.label_zh(),
                    "group": m.group(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    for m in BlendMode::ALL {
        println!("{:<14} {:<20} {}", m.id(), m.label(), m.label_zh());
    }
    Ok(())
}

fn load_layers(args: &LayerArgs) -> anyhow::Result<(PixelBuffer, PixelBuffer)> {
    let base = blendlab::load_image(&args.base)?;
    let overlay = blendlab::load_image(&args.overlay)?;
    Ok(if args.swap {
        (overlay, base)
    } else {
        (base, overlay)
    })
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let (base, overlay) = load_layers(&args.layers)?;
    write_gallery(&base, &overlay, &args.threading.opts(), &args.out)
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let (base, overlay) = load_layers(&args.layers)?;
    let out = blendlab::render_one(&base, &overlay, args.mode, &args.threading.opts())?;
    blendlab::save_png(&out, &args.out)?;
    eprintln!(
        "wrote {} ({}, {})",
        args.out.display(),
        args.mode.label(),
        out.canvas()
    );
    Ok(())
}

fn cmd_demo(args: DemoArgs) -> anyhow::Result<()> {
    let (base, overlay) = blendlab::demo::pair()?;
    let (base, overlay) = if args.swap {
        (overlay, base)
    } else {
        (base, overlay)
    };
    write_gallery(&base, &overlay, &args.threading.opts(), &args.out)
}

fn write_gallery(
    base: &PixelBuffer,
    overlay: &PixelBuffer,
    opts: &RenderOpts,
    out: &Path,
) -> anyhow::Result<()> {
    let gallery = blendlab::render_all_with(base, overlay, opts)?;
    let manifest = blendlab::write_gallery(&gallery, out)
        .with_context(|| format!("export gallery to '{}'", out.display()))?;
    eprintln!(
        "wrote {} modes ({}) to {}",
        manifest.modes.len(),
        manifest.canvas,
        out.display()
    );
    Ok(())
}
