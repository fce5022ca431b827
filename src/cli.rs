use crate::batch::{read_tree, run_batch};
use crate::compact::CompactTree;
use crate::config::{Config, load_config};
use crate::ir::Tree;
use crate::layout::compute_layout;
use crate::layout_dump::write_layout_dump;
use crate::render::{render_svg, write_output, write_output_png};
use anyhow::Result;
use clap::{ArgAction, Parser, ValueEnum};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "ptsvg", version, about = "Passive skill tree renderer")]
pub struct Args {
    /// Input tree (.json) or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file (svg/png/json). Defaults to stdout for SVG and JSON if omitted.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'e', long = "outputFormat", value_enum, default_value = "svg")]
    pub output_format: OutputFormat,

    /// Config JSON file
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// PNG width
    #[arg(short = 'w', long = "width")]
    pub width: Option<f32>,

    /// PNG height
    #[arg(short = 'H', long = "height")]
    pub height: Option<f32>,

    /// Embed the theme stylesheet in the SVG
    #[arg(long = "style")]
    pub style: bool,

    /// Draw the orbit rings of every group
    #[arg(long = "orbits")]
    pub orbits: bool,

    /// Write the computed layout as JSON
    #[arg(long = "dumpLayout")]
    pub dump_layout: Option<PathBuf>,

    /// Directory of tree files to render in batch (repeatable)
    #[arg(long = "inputDir")]
    pub input_dirs: Vec<PathBuf>,

    /// Root directory for batch output
    #[arg(long = "outputDir", default_value = ".")]
    pub output_dir: PathBuf,

    /// More logging (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    Png,
    Json,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    let config = build_config(&args)?;

    if !args.input_dirs.is_empty() {
        let written = run_batch(&args.input_dirs, &args.output_dir, &config)?;
        log::info!("wrote {} trees", written.len());
        return Ok(());
    }

    let tree = read_input(args.input.as_deref())?;
    if args.output_format == OutputFormat::Json {
        let json = CompactTree::from_tree(&tree).to_json()?;
        return write_output(&format!("{json}\n"), args.output.as_deref());
    }

    let layout = compute_layout(&tree, &config.layout);
    if let Some(path) = args.dump_layout.as_deref() {
        write_layout_dump(path, &layout, &config.layout)?;
    }
    let svg = render_svg(&layout, &config);
    match args.output_format {
        OutputFormat::Png => {
            let output = ensure_output(&args.output, "png")?;
            write_output_png(&svg, &output, &config.render)?;
        }
        _ => write_output(&svg, args.output.as_deref())?,
    }
    Ok(())
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let env = env_logger::Env::default().default_filter_or(default_level);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}

fn build_config(args: &Args) -> Result<Config> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(width) = args.width {
        config.render.width = width;
    }
    if let Some(height) = args.height {
        config.render.height = height;
    }
    config.render.embed_style |= args.style;
    config.render.show_orbits |= args.orbits;
    Ok(config)
}

fn read_input(path: Option<&Path>) -> Result<Tree> {
    if let Some(path) = path {
        if path != Path::new("-") {
            return read_tree(path);
        }
    }
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(Tree::from_json(&buf)?)
}

fn ensure_output(output: &Option<PathBuf>, ext: &str) -> Result<PathBuf> {
    if let Some(path) = output {
        return Ok(path.clone());
    }
    Err(anyhow::anyhow!("Output path required for {} output", ext))
}
