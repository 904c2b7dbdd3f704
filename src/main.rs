use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser};
use pagemarker::config::Config;
use pagemarker::draw::raster;
use pagemarker::host::{HostSdk, PageContent, Plugin, SidebarOptions};
use pagemarker::input::{Artifact, KeyPress, PointerButton, Tool};
use pagemarker::ui::ToolbarEvent;
use std::fs;
use std::path::{Path, PathBuf};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("PAGEMARKER_GIT_HASH"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "pagemarker")]
#[command(version, long_version = LONG_VERSION)]
#[command(about = "Screen annotation overlay plugin for host-embedded pages")]
struct Cli {
    /// Run a scripted headless drawing session and report committed artifacts
    #[arg(long, short = 'd', action = ArgAction::SetTrue)]
    demo: bool,

    /// Export the demo's image artifacts as PNG files into DIR
    #[arg(long, value_name = "DIR")]
    out: Option<PathBuf>,

    /// Demo viewport size as WIDTHxHEIGHT
    #[arg(long, value_name = "WxH", default_value = "1280x720")]
    size: String,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.demo {
        let (width, height) = parse_size(&cli.size)?;
        run_demo(width, height, cli.out.as_deref())
    } else {
        print_usage();
        Ok(())
    }
}

/// Host stand-in for the headless demo: registrations go to stdout.
struct ConsoleHost;

impl HostSdk for ConsoleHost {
    fn register_page(&mut self, path: &str, content: PageContent) -> Result<()> {
        println!("Registered page {path} ({})", content.title);
        Ok(())
    }

    fn register_sidebar_entry(
        &mut self,
        label: &str,
        path: &str,
        _options: SidebarOptions,
    ) -> Result<()> {
        println!("Registered sidebar entry '{label}' -> {path}");
        Ok(())
    }
}

fn parse_size(size: &str) -> Result<(u32, u32)> {
    let Some((width, height)) = size.split_once('x') else {
        bail!("Invalid --size '{size}', expected WIDTHxHEIGHT (e.g. 1280x720)");
    };
    let width: u32 = width
        .parse()
        .with_context(|| format!("Invalid width in --size '{size}'"))?;
    let height: u32 = height
        .parse()
        .with_context(|| format!("Invalid height in --size '{size}'"))?;
    if width == 0 || height == 0 {
        bail!("--size must be non-zero in both dimensions");
    }
    Ok((width, height))
}

/// Runs one stroke per tool against a real raster surface and reports what
/// got committed. Exercises the same code path a host embedding would.
fn run_demo(width: u32, height: u32, out: Option<&Path>) -> Result<()> {
    let config = Config::load()?;
    let mut host = ConsoleHost;
    let mut plugin = Plugin::init(&mut host, &config, width, height)?;

    println!("pagemarker demo on a {width}x{height} viewport");

    let binding = plugin.toggle_binding().clone();
    plugin.on_key_press(&KeyPress {
        key: binding.key,
        ctrl: binding.ctrl,
        shift: binding.shift,
        alt: binding.alt,
    });
    println!("Drawing mode enabled via {}", config.hotkeys.toggle);

    // Freehand squiggle
    plugin
        .toolbar
        .apply(ToolbarEvent::SelectTool(Tool::Pen), &mut plugin.overlay);
    plugin.overlay.on_pointer_press(PointerButton::Left, 80, 200);
    for (x, y) in [(110, 160), (140, 240), (170, 160), (200, 240), (230, 160)] {
        plugin.overlay.on_pointer_motion(x, y);
    }
    plugin
        .overlay
        .on_pointer_release(PointerButton::Left, 230, 160);

    // Circle from a center-out drag
    plugin
        .toolbar
        .apply(ToolbarEvent::SelectTool(Tool::Circle), &mut plugin.overlay);
    plugin.overlay.on_pointer_press(PointerButton::Left, 400, 300);
    plugin.overlay.on_pointer_motion(460, 380);
    plugin
        .overlay
        .on_pointer_release(PointerButton::Left, 460, 380);

    // Rectangle dragged "backwards" to show normalization
    plugin
        .toolbar
        .apply(ToolbarEvent::SelectTool(Tool::Rect), &mut plugin.overlay);
    plugin.overlay.on_pointer_press(PointerButton::Left, 700, 160);
    plugin.overlay.on_pointer_motion(500, 40);
    plugin.overlay.on_pointer_release(PointerButton::Left, 500, 40);

    // Blur redaction
    plugin
        .toolbar
        .apply(ToolbarEvent::SelectTool(Tool::Blur), &mut plugin.overlay);
    plugin.overlay.on_pointer_press(PointerButton::Left, 900, 500);
    plugin.overlay.on_pointer_motion(1100, 600);
    plugin
        .overlay
        .on_pointer_release(PointerButton::Left, 1100, 600);

    let artifacts = plugin.overlay.artifacts();
    println!("Committed {} artifacts:", artifacts.len());
    for (index, artifact) in artifacts.iter().enumerate() {
        match artifact {
            Artifact::Image(image) => {
                println!("  {index}: image {}x{}", image.image.width, image.image.height)
            }
            Artifact::Redaction(redaction) => println!(
                "  {index}: redaction at ({}, {}) {}x{}, blur {}px",
                redaction.region.x,
                redaction.region.y,
                redaction.region.width,
                redaction.region.height,
                redaction.blur_radius
            ),
        }
    }

    if let Some(dir) = out {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
        let mut exported = 0;
        for (index, artifact) in artifacts.iter().enumerate() {
            if let Artifact::Image(image) = artifact {
                let path = dir.join(format!("stroke-{index}.png"));
                let mut file = fs::File::create(&path)
                    .with_context(|| format!("Failed to create {}", path.display()))?;
                raster::write_png(&image.image, &mut file)
                    .with_context(|| format!("Failed to encode {}", path.display()))?;
                exported += 1;
            }
        }
        println!("Exported {exported} images to {}", dir.display());
    }

    plugin.overlay.clear_all();
    println!(
        "clear-all removed every artifact ({} remain)",
        plugin.overlay.artifacts().len()
    );

    Ok(())
}

fn print_usage() {
    println!("pagemarker: Screen annotation overlay plugin for host-embedded pages");
    println!();
    println!("Usage:");
    println!("  pagemarker --demo            Run a headless drawing demo");
    println!("  pagemarker --demo --out DIR  Export demo strokes as PNG files");
    println!("  pagemarker --help            Show help");
    println!();
    println!("As a plugin:");
    println!("  The host application initializes the overlay through the library");
    println!("  crate (pagemarker::host::Plugin::init) and forwards pointer,");
    println!("  keyboard, and resize events to it. Press the toggle hotkey");
    println!("  (default F12) to start drawing; use the toolbar to pick tools,");
    println!("  colors, and sizes, or the blur tool to redact a region.");
}
