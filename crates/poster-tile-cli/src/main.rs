use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use log::{LevelFilter, info};
use poster_tile::{TileOptions, translations_for};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "tile",
    about = "Split a one page PostScript document into a multi-sheet poster",
    version,
    disable_help_flag = true
)]
struct Cli {
    /// Input PostScript file, `-` for standard input
    input: PathBuf,

    /// Be verbose; repeat for more detail
    #[arg(short, action = ArgAction::Count)]
    verbose: u8,

    /// Add alignment marks on edges shared with other sheets
    #[arg(short = 'a')]
    alignment: bool,

    /// Ask for manual feed on the printing device
    #[arg(short = 'f')]
    manual_feed: bool,

    /// Language code of the sheet labels (en, nl, fr, ...)
    #[arg(short = 'l')]
    language: Option<String>,

    /// Directory holding the tile.<lang>.json translation tables
    #[arg(long)]
    lang_dir: Option<PathBuf>,

    /// Input image size, overriding the bounding box in the input
    #[arg(short = 'i', value_name = "BOX")]
    image: Option<String>,

    /// Horizontal and vertical cut margin, a box or a percentage
    #[arg(short = 'c', value_name = "MARGIN")]
    cut_margin: Option<String>,

    /// Additional white margin around the poster
    #[arg(short = 'w', value_name = "MARGIN")]
    white_margin: Option<String>,

    /// Media paper size
    #[arg(short = 'm', value_name = "BOX")]
    media: Option<String>,

    /// Output poster size
    #[arg(short = 'p', value_name = "BOX")]
    poster: Option<String>,

    /// Linear scale factor for the poster
    #[arg(short = 's')]
    scale: Option<f64>,

    /// Output file, standard output when omitted
    #[arg(short = 'o')]
    output: Option<PathBuf>,

    /// Title printed on the cover
    #[arg(short = 't')]
    title: Option<String>,

    /// Handle printed on the cover
    #[arg(short = 'h')]
    handle: Option<String>,

    /// Start from options saved as JSON
    #[arg(long)]
    config: Option<PathBuf>,

    /// Show the layout only, don't write PostScript
    #[arg(long)]
    stats_only: bool,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,
}

impl Cli {
    /// Command line values override the loaded options
    fn apply(&self, options: &mut TileOptions) {
        options.alignment_marks |= self.alignment;
        options.manual_feed |= self.manual_feed;

        let overrides = [
            (&self.language, &mut options.language),
            (&self.cut_margin, &mut options.cut_margin),
            (&self.white_margin, &mut options.white_margin),
            (&self.media, &mut options.media),
            (&self.title, &mut options.title),
            (&self.handle, &mut options.handle),
        ];
        for (value, field) in overrides {
            if let Some(value) = value {
                *field = value.clone();
            }
        }

        if self.image.is_some() {
            options.image = self.image.clone();
        }
        if self.poster.is_some() {
            options.poster = self.poster.clone();
        }
        if self.scale.is_some() {
            options.scale = self.scale;
        }
        if self.output.is_some() {
            options.output = self.output.clone();
        }
        if self.lang_dir.is_some() {
            options.translations_dir = self.lang_dir.clone();
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .parse_default_env()
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut options = match &cli.config {
        Some(path) => TileOptions::load(path)
            .await
            .with_context(|| format!("Cannot read options from {}", path.display()))?,
        None => TileOptions::default(),
    };
    cli.apply(&mut options);

    info!("Using language {}", options.language);
    let translations = translations_for(options.translations_dir(), &options.language).await;
    let config = options.resolve(&translations)?;

    let source = poster_tile::load_source(&cli.input)
        .await
        .with_context(|| format!("Cannot read input {}", cli.input.display()))?;

    if cli.stats_only {
        let (_, plan) = poster_tile::scan_and_plan(&source, &config)?;
        let stats = poster_tile::calculate_statistics(&plan);
        println!("Poster Statistics:");
        println!("  Sheets: {} ({} rows x {} columns)", stats.sheets, stats.rows, stats.cols);
        println!("  Output pages: {}", stats.output_pages);
        println!("  Orientation: {:?}", stats.orientation);
        println!("  Scale: {:.4}", stats.scale);
        println!(
            "  Poster size: {:.0} x {:.0} mm",
            stats.poster_width_mm, stats.poster_height_mm
        );
        return Ok(());
    }

    let (plan, bytes) = poster_tile::tile_poster(source, &config).await?;
    poster_tile::save_output(&bytes, options.output.as_deref())
        .await
        .context("Cannot write output")?;

    if let Some(output) = &options.output {
        info!(
            "Tiled {}x{} sheets → {}",
            plan.rows,
            plan.cols,
            output.display()
        );
    }

    Ok(())
}
