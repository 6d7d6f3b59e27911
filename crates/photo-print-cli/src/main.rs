use anyhow::{Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use env_logger::{Builder, Env};
use log::info;
use photo_layout::{Item, ItemId, LayoutStatistics, PageSpec, PrintSize};
use photo_sheet::{JobOptions, PhotoSpec, RasterOptions};
use std::path::PathBuf;

const DEFAULT_OUTPUT: &str = "photos.pdf";

#[derive(Parser)]
#[command(name = "photoprint", about = "Lay out photos on printable sheets", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the standard print sizes
    Sizes,

    /// Lay out photos and write a print-ready PDF
    Generate {
        /// Input photo(s), laid out in the order given
        #[arg(short, long, num_args = 1..)]
        input: Vec<PathBuf>,

        /// Print size: one for every photo, or one per photo (e.g. 4x6, 3.5x5, 2.5x3.5)
        #[arg(short, long, num_args = 1..)]
        size: Vec<PrintSize>,

        /// Output PDF file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// JSON job file; replaces the photo, page and raster flags
        #[arg(
            long,
            conflicts_with_all = [
                "input",
                "size",
                "paper",
                "orientation",
                "margin",
                "gap",
                "step",
                "dpi",
                "quality",
            ]
        )]
        config: Option<PathBuf>,

        /// Output paper size
        #[arg(long, default_value = "letter", value_enum)]
        paper: PaperArg,

        /// Output orientation
        #[arg(long, default_value = "portrait", value_enum)]
        orientation: OrientationArg,

        /// Page margin in inches (uniform on all sides)
        #[arg(long, default_value = "0.5")]
        margin: f64,

        /// Minimum gap between photos in inches
        #[arg(long, default_value = "0.25")]
        gap: f64,

        /// Position search step in inches
        #[arg(long, default_value = "0.1")]
        step: f64,

        /// Print resolution
        #[arg(long, default_value = "300")]
        dpi: u32,

        /// JPEG quality (1-100)
        #[arg(long, default_value = "92")]
        quality: u8,

        /// Print the layout as JSON without reading photos or writing a PDF
        #[arg(long)]
        layout_only: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    A3,
    A4,
    A5,
    Letter,
    Legal,
    Tabloid,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    Portrait,
    Landscape,
}

impl From<PaperArg> for photo_layout::PaperSize {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::A3 => Self::A3,
            PaperArg::A4 => Self::A4,
            PaperArg::A5 => Self::A5,
            PaperArg::Letter => Self::Letter,
            PaperArg::Legal => Self::Legal,
            PaperArg::Tabloid => Self::Tabloid,
        }
    }
}

impl From<OrientationArg> for photo_layout::Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait => Self::Portrait,
            OrientationArg::Landscape => Self::Landscape,
        }
    }
}

/// Pair every input with its print size
fn photo_specs(input: Vec<PathBuf>, size: &[PrintSize]) -> Result<Vec<PhotoSpec>> {
    if input.is_empty() {
        bail!("no input photos; pass --input or --config");
    }

    let sizes: Vec<PrintSize> = match size {
        [] => bail!("no print size; pass --size"),
        [one] => vec![*one; input.len()],
        many if many.len() == input.len() => many.to_vec(),
        many => bail!(
            "got {} sizes for {} photos; pass one size or one per photo",
            many.len(),
            input.len()
        ),
    };

    Ok(input
        .into_iter()
        .zip(sizes)
        .map(|(path, size)| PhotoSpec {
            path,
            size: Some(size),
            crop: None,
        })
        .collect())
}

fn print_statistics(stats: &LayoutStatistics) {
    println!("Layout Statistics:");
    println!("  Photos: {}", stats.input_items);
    println!("  Placed: {}", stats.placed_items);
    println!("  Pages: {}", stats.pages);
    if stats.ineligible_items > 0 {
        println!("  Skipped (no image or size): {}", stats.ineligible_items);
    }
    if stats.unplaceable_items > 0 {
        println!("  Skipped (too large for page): {}", stats.unplaceable_items);
    }
    for (page, coverage) in stats.coverage_per_page.iter().enumerate() {
        println!("  Page {} coverage: {:.0}%", page + 1, coverage * 100.0);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    Builder::from_env(Env::default().filter_or("RUST_LOG", "info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Sizes => {
            println!("Standard print sizes:");
            for size in PrintSize::CATALOG {
                println!("  {:<6} {}", size.name(), size.label());
            }
        }

        Commands::Generate {
            input,
            size,
            output,
            config,
            paper,
            orientation,
            margin,
            gap,
            step,
            dpi,
            quality,
            layout_only,
        } => {
            let job = match config {
                Some(path) => {
                    info!("Reading job file {}", path.display());
                    JobOptions::load(&path).await?
                }
                None => JobOptions {
                    photos: photo_specs(input, &size)?,
                    page: PageSpec {
                        margin_in: margin,
                        gap_in: gap,
                        step_in: step,
                        ..PageSpec::from_paper(paper.into(), orientation.into())
                    },
                    raster: RasterOptions {
                        dpi,
                        jpeg_quality: quality,
                    },
                    output: None,
                },
            };

            if layout_only {
                // Sizes alone decide the layout, so photos are not decoded
                let items: Vec<Item<()>> = job
                    .photos
                    .iter()
                    .enumerate()
                    .map(|(i, spec)| Item::new(ItemId(i as u64), Some(()), spec.size))
                    .collect();
                let layout = photo_layout::layout(&items, &job.page)?;
                let stats = photo_layout::calculate_statistics(&layout, &job.page)?;
                println!("{}", layout.to_json_pretty()?);
                print_statistics(&stats);
                return Ok(());
            }

            let output = output
                .or_else(|| job.output.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

            info!(
                "Generating {} photo(s) on {:.2}x{:.2} in pages into {}",
                job.photos.len(),
                job.page.width_in,
                job.page.height_in,
                output.display()
            );
            let sheet = photo_sheet::generate_from_job(&job).await?;
            print_statistics(&sheet.statistics);
            sheet.save(&output).await?;
            println!("Generated print sheet → {}", output.display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_size_applies_to_every_photo() {
        let specs = photo_specs(
            vec![PathBuf::from("a.jpg"), PathBuf::from("b.jpg")],
            &[PrintSize::Photo4x6],
        )
        .unwrap();
        assert!(specs.iter().all(|s| s.size == Some(PrintSize::Photo4x6)));
    }

    #[test]
    fn test_sizes_pair_with_photos() {
        let specs = photo_specs(
            vec![PathBuf::from("a.jpg"), PathBuf::from("b.jpg")],
            &[PrintSize::Square2x2, PrintSize::Photo5x7],
        )
        .unwrap();
        assert_eq!(specs[1].size, Some(PrintSize::Photo5x7));
    }

    #[test]
    fn test_mismatched_size_count_is_rejected() {
        let result = photo_specs(
            vec![
                PathBuf::from("a.jpg"),
                PathBuf::from("b.jpg"),
                PathBuf::from("c.jpg"),
            ],
            &[PrintSize::Square2x2, PrintSize::Photo5x7],
        );
        assert!(result.is_err());
        assert!(photo_specs(vec![PathBuf::from("a.jpg")], &[]).is_err());
    }

    #[test]
    fn test_config_rejects_page_and_raster_flags() {
        for flag in [
            ["--margin", "0.25"],
            ["--gap", "0.1"],
            ["--step", "0.2"],
            ["--dpi", "150"],
            ["--quality", "80"],
            ["--paper", "a4"],
            ["--orientation", "landscape"],
        ] {
            let result = Cli::try_parse_from(
                ["photoprint", "generate", "--config", "job.json"]
                    .into_iter()
                    .chain(flag),
            );
            assert!(result.is_err(), "{} accepted alongside --config", flag[0]);
        }
    }

    #[test]
    fn test_config_alone_is_accepted() {
        let cli = Cli::try_parse_from(["photoprint", "generate", "--config", "job.json"]).unwrap();
        match cli.command {
            Commands::Generate { config, margin, .. } => {
                assert_eq!(config, Some(PathBuf::from("job.json")));
                assert_eq!(margin, 0.5);
            }
            Commands::Sizes => panic!("expected generate"),
        }
    }

    #[test]
    fn test_cli_parses_sizes() {
        let cli = Cli::try_parse_from([
            "photoprint",
            "generate",
            "-i",
            "a.jpg",
            "-s",
            "3.5x5",
            "--paper",
            "a4",
            "--layout-only",
        ])
        .unwrap();

        match cli.command {
            Commands::Generate {
                size, layout_only, ..
            } => {
                assert_eq!(size, vec![PrintSize::Photo3_5x5]);
                assert!(layout_only);
            }
            Commands::Sizes => panic!("expected generate"),
        }
    }
}
