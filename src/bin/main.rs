//! photo2skin CLI
//!
//! Create a Minecraft skin and a preview thumbnail from a photo.

use clap::Parser;
use photo2skin::{convert, write_outputs, PaletteSource, ResizeFilter, SkinConfig, TracingReporter};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "photo2skin")]
#[command(author, version, about = "Create a Minecraft skin from a photo", long_about = None)]
struct Cli {
    /// Filename of the photo to process
    photo: PathBuf,

    /// Horizontal offset in the photo
    #[arg(short = 'x', long, default_value_t = 0, allow_negative_numbers = true)]
    offset_x: i32,

    /// Vertical offset in the photo
    #[arg(short = 'y', long, default_value_t = 0, allow_negative_numbers = true)]
    offset_y: i32,

    /// Directory holding lightGrey.png, darkGrey.png, blue.png, green.png and black.png
    #[arg(long, default_value = "assets")]
    assets: PathBuf,

    /// Paint hidden faces with generated colours instead of the asset images
    #[arg(long, conflicts_with = "assets")]
    builtin_palette: bool,

    /// Interpolation used when resizing the photo
    #[arg(long, value_enum, default_value = "catmull-rom")]
    filter: ResizeFilter,

    /// Print the photo to skin mapping as JSON
    #[arg(long)]
    print_mapping: bool,

    /// Log every part as it is mapped
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let palette = if cli.builtin_palette {
        PaletteSource::Builtin
    } else {
        PaletteSource::Directory(cli.assets.clone())
    };
    let config = SkinConfig::default()
        .with_offset(cli.offset_x, cli.offset_y)
        .with_filter(cli.filter)
        .with_palette(palette);

    let output = convert(&cli.photo, &config, &TracingReporter)?;
    let (skin_path, thumb_path) = write_outputs(&output, &cli.photo, &TracingReporter)?;

    if cli.print_mapping {
        println!("{}", output.mapping_json()?);
    }

    println!("Skin: {:?}", skin_path);
    println!("Thumbnail: {:?}", thumb_path);

    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "photo2skin=debug" } else { "photo2skin=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}
