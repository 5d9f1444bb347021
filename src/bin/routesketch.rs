use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use routesketch::{
    ClockTick, CpuSurface, CpuSurfaceOpts, InputChange, RenderFrame, RenderInput, RendererConfig,
    RouteColor, RouteData, RoutePoint, RouteStyle, StylizedRouteRenderer, Viewport,
    encode_polyline,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "routesketch", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one instant of the reveal animation as a PNG.
    Frame(FrameArgs),
    /// Render the whole reveal animation as a numbered PNG sequence.
    Frames(FramesArgs),
    /// Write the complete hand-drawn path as an SVG document.
    Svg(SvgArgs),
    /// Print the encoded polyline for the document's route.
    Encode(EncodeArgs),
}

#[derive(Args, Debug)]
struct CommonArgs {
    /// Input route document JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Optional renderer config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Wobble seed (overrides the config).
    #[arg(long)]
    seed: Option<u64>,

    /// Background color as hex; transparent when omitted.
    #[arg(long)]
    background: Option<String>,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Reveal progress in [0, 1].
    #[arg(long, conflicts_with = "time")]
    progress: Option<f64>,

    /// Clock time since the animation started, in time units.
    #[arg(long)]
    time: Option<f64>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct FramesArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Frames per 1000 time units.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Output directory for `frame_NNNN.png` files.
    #[arg(long)]
    out_dir: PathBuf,
}

#[derive(Args, Debug)]
struct SvgArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Output SVG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct EncodeArgs {
    /// Input route document JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

/// Route document: explicit points or an API geometry string, plus style and size.
#[derive(serde::Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct SketchDoc {
    #[serde(default)]
    points: Vec<RoutePoint>,
    #[serde(default)]
    geometry: Option<String>,
    #[serde(default)]
    style: RouteStyle,
    width: f64,
    height: f64,
}

impl SketchDoc {
    fn into_input(self) -> anyhow::Result<RenderInput> {
        let data = RouteData {
            points: self.points,
            geometry: self.geometry,
            ..RouteData::default()
        };
        let route = data.route().context("decode route")?;
        Ok(RenderInput {
            points: route.into_points(),
            style: self.style,
            width: self.width,
            height: self.height,
        })
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("ROUTESKETCH_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Frames(args) => cmd_frames(args),
        Command::Svg(args) => cmd_svg(args),
        Command::Encode(args) => cmd_encode(args),
    }
}

fn read_doc(path: &Path) -> anyhow::Result<SketchDoc> {
    let f = File::open(path).with_context(|| format!("open route document '{}'", path.display()))?;
    let doc: SketchDoc =
        serde_json::from_reader(BufReader::new(f)).with_context(|| "parse route document JSON")?;
    Ok(doc)
}

fn load_config(common: &CommonArgs) -> anyhow::Result<RendererConfig> {
    let mut config = match &common.config {
        Some(path) => RendererConfig::from_json_file(path)?,
        None => RendererConfig::default(),
    };
    if common.seed.is_some() {
        config.seed = common.seed;
    }
    Ok(config)
}

struct Session {
    renderer: StylizedRouteRenderer,
    surface: CpuSurface,
    input: RenderInput,
    run: routesketch::RunId,
    background: Option<RouteColor>,
}

fn open_session(common: &CommonArgs) -> anyhow::Result<Session> {
    let input = read_doc(&common.in_path)?.into_input()?;
    let mut renderer = StylizedRouteRenderer::new(load_config(common)?)?;
    let InputChange::Route(run) = renderer.set_input(input.clone(), 0.0)? else {
        anyhow::bail!("first input did not start an animation run (bug)");
    };

    let background = common
        .background
        .as_deref()
        .map(RouteColor::from_hex)
        .transpose()
        .map_err(|e| anyhow::anyhow!("invalid --background: {e}"))?;
    let clear = background.map(|c| [c.r, c.g, c.b, c.a]);
    let viewport = Viewport::new(input.width, input.height)?;
    let surface = CpuSurface::new(viewport, CpuSurfaceOpts::default().with_clear_rgba(clear))?;

    Ok(Session {
        renderer,
        surface,
        input,
        run,
        background,
    })
}

/// SVG 1.1 paint: opaque `#RRGGBB` plus a separate opacity.
fn svg_paint(color: RouteColor) -> (String, f64) {
    let opaque = RouteColor { a: 255, ..color };
    (opaque.to_hex(), f64::from(color.a) / 255.0)
}

fn write_png(surface: &CpuSurface, frame: &RenderFrame, out: &Path) -> anyhow::Result<()> {
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    let pixels = surface.draw(frame)?;
    image::save_buffer_with_format(
        out,
        &pixels.to_straight_rgba(),
        pixels.width,
        pixels.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", out.display()))?;
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let mut s = open_session(&args.common)?;

    let frame = match (args.progress, args.time) {
        (Some(progress), _) => {
            anyhow::ensure!(
                (0.0..=1.0).contains(&progress),
                "--progress must be within [0, 1]"
            );
            s.renderer.deliver(ClockTick {
                run: s.run,
                progress,
            })
        }
        (None, Some(time)) => s.renderer.tick(time),
        (None, None) => s.renderer.deliver(ClockTick {
            run: s.run,
            progress: 1.0,
        }),
    }
    .context("renderer produced no frame")?;

    write_png(&s.surface, &frame, &args.out)?;
    eprintln!(
        "wrote {} ({}/{} commands)",
        args.out.display(),
        frame.visible_commands,
        frame.total_commands
    );
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.fps > 0, "--fps must be > 0");
    let mut s = open_session(&args.common)?;
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let step = 1000.0 / f64::from(args.fps);
    let mut written = 0usize;
    while let Some(frame) = s.renderer.tick(written as f64 * step) {
        let out = args.out_dir.join(format!("frame_{written:04}.png"));
        write_png(&s.surface, &frame, &out)?;
        written += 1;
    }

    eprintln!("wrote {written} frames to {}", args.out_dir.display());
    Ok(())
}

fn cmd_svg(args: SvgArgs) -> anyhow::Result<()> {
    let s = open_session(&args.common)?;
    let stroke = s
        .renderer
        .stroke()
        .context("renderer has no stroke after input (bug)")?;

    let background = match s.background {
        Some(bg) => {
            let (fill, opacity) = svg_paint(bg);
            format!(
                "  <rect width=\"100%\" height=\"100%\" fill=\"{fill}\" fill-opacity=\"{opacity}\"/>\n"
            )
        }
        None => String::new(),
    };
    let (color, opacity) = svg_paint(stroke.color);
    let svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n\
         {background}  <path d=\"{d}\" fill=\"none\" stroke=\"{color}\" stroke-opacity=\"{opacity}\" \
         stroke-width=\"{sw}\" stroke-linejoin=\"round\" stroke-linecap=\"round\"/>\n</svg>\n",
        w = s.input.width,
        h = s.input.height,
        d = s.renderer.full_path().to_svg_path_data(),
        sw = stroke.width,
    );

    std::fs::write(&args.out, svg).with_context(|| format!("write svg '{}'", args.out.display()))?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_encode(args: EncodeArgs) -> anyhow::Result<()> {
    let input = read_doc(&args.in_path)?.into_input()?;
    println!("{}", encode_polyline(&input.points));
    Ok(())
}
