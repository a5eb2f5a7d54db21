//! Command-line interface for generating and exporting mosaic layouts

use crate::algorithm::executor::{GenerationConfig, LayoutGenerator};
use crate::algorithm::policy::{SplitPolicy, SplitStrategy};
use crate::color::generator::ColorGenerator;
use crate::color::palette::Palette;
use crate::io::configuration::{
    DEFAULT_MAX_DEPTH, DEFAULT_MIN_SIZE, DEFAULT_OUTPUT_NAME, DEFAULT_ROOT_HEIGHT,
    DEFAULT_ROOT_WIDTH, DEFAULT_SHADE_PERCENT, DEFAULT_VARIANT_COUNT, LAYOUT_EXTENSION,
    RENDER_EXTENSION,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::export::export_layout_as_json;
use crate::io::image::export_layout_as_png;
use crate::io::progress::ProgressManager;
use crate::spatial::rectangle::Rectangle;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;

/// Shape of each subdivision step
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SplitMode {
    /// Two children per split with 1:1, 2:1 or 1:2 proportions
    Binary,
    /// Four children around a corner cell one half to one eighth the size
    Quad,
}

impl SplitMode {
    /// Reference strategy for this mode
    pub fn strategy(self) -> SplitStrategy {
        match self {
            Self::Binary => SplitStrategy::binary(),
            Self::Quad => SplitStrategy::quad(),
        }
    }
}

#[derive(Parser)]
#[command(name = "tilemosaic")]
#[command(
    author,
    version,
    about = "Generate mosaic layouts by randomized recursive subdivision"
)]
/// Command-line arguments for the mosaic generator
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Width of the region to tile in pixels
    #[arg(short = 'w', long, default_value_t = DEFAULT_ROOT_WIDTH)]
    pub width: f64,

    /// Height of the region to tile in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_ROOT_HEIGHT)]
    pub height: f64,

    /// Rectangles with a side below this stop splitting
    #[arg(short, long, default_value_t = DEFAULT_MIN_SIZE)]
    pub min_size: f64,

    /// Maximum subdivision depth
    #[arg(short = 'd', long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: u32,

    /// Split shape used at every level
    #[arg(long, value_enum, default_value_t = SplitMode::Binary)]
    pub mode: SplitMode,

    /// Random seed for reproducible layouts (random when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Number of independent layouts to generate
    #[arg(short = 'n', long, default_value_t = DEFAULT_VARIANT_COUNT)]
    pub count: usize,

    /// Directory that receives exported layouts
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// File stem for exported layouts
    #[arg(long, default_value = DEFAULT_OUTPUT_NAME)]
    pub name: String,

    /// Also render each layout as a PNG preview
    #[arg(long)]
    pub png: bool,

    /// Label each tile of the PNG preview with its block number
    #[arg(long, requires = "png")]
    pub numbers: bool,

    /// JSON palette file: an array of {"name", "hex"} objects
    #[arg(long, value_name = "FILE")]
    pub palette: Option<PathBuf>,

    /// Percent by which darker and lighter variants are shaded
    #[arg(long, default_value_t = DEFAULT_SHADE_PERCENT, allow_negative_numbers = true)]
    pub shade: i32,

    /// Subdivide sibling rectangles in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Suppress progress and informational output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Default log level before `RUST_LOG` is applied
    pub const fn log_filter(&self) -> log::LevelFilter {
        if self.quiet {
            log::LevelFilter::Warn
        } else {
            log::LevelFilter::Info
        }
    }

    /// Generation parameters described by the flags
    pub fn generation_config(&self) -> GenerationConfig {
        GenerationConfig {
            root: Rectangle::with_size(self.width, self.height),
            policy: SplitPolicy::new(self.min_size, self.max_depth),
            strategy: self.mode.strategy(),
            parallel: self.parallel,
        }
    }
}

/// Generates a batch of layouts and writes them to disk
pub struct LayoutProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl LayoutProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate every requested layout and export it
    ///
    /// Returns the paths of the JSON documents written, in variant order.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters or palette are invalid, or any
    /// export fails
    pub fn process(&mut self) -> Result<Vec<PathBuf>> {
        if self.cli.count == 0 {
            return Err(invalid_parameter(
                "count",
                &self.cli.count,
                &"at least one layout must be requested",
            ));
        }

        let generator = self.build_generator()?;
        let base_seed = self.cli.seed.unwrap_or_else(rand::random);
        log::info!(
            "Generating {} layout(s) with seed {base_seed} ({:?} splits, min size {}, max depth {})",
            self.cli.count,
            self.cli.mode,
            self.cli.min_size,
            self.cli.max_depth
        );

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(self.cli.count);
        }

        let mut written = Vec::with_capacity(self.cli.count);
        for index in 0..self.cli.count {
            written.push(self.process_variant(&generator, base_seed, index)?);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(written)
    }

    fn build_generator(&self) -> Result<LayoutGenerator> {
        let palette = match &self.cli.palette {
            Some(path) => Palette::from_json_file(path)?,
            None => Palette::default(),
        };
        let colors = ColorGenerator::new(palette).with_shade_percent(self.cli.shade)?;
        LayoutGenerator::with_colors(self.cli.generation_config(), colors)
    }

    fn process_variant(
        &mut self,
        generator: &LayoutGenerator,
        base_seed: u64,
        index: usize,
    ) -> Result<PathBuf> {
        let start_time = Instant::now();
        let seed = base_seed.wrapping_add(index as u64);
        let layout_path = self.output_path(index, LAYOUT_EXTENSION);

        if let Some(ref pm) = self.progress_manager {
            pm.start_variant(index, &self.variant_stem(index));
        }

        let layout = generator.generate_seeded(seed);
        log::debug!("Variant {} (seed {seed}): {} tiles", index + 1, layout.len());

        export_layout_as_json(&layout, &layout_path)?;
        if self.cli.png {
            export_layout_as_png(
                &layout,
                &self.output_path(index, RENDER_EXTENSION),
                self.cli.numbers,
            )?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_variant(index, layout.len(), start_time.elapsed());
        }

        Ok(layout_path)
    }

    fn variant_stem(&self, index: usize) -> String {
        if self.cli.count > 1 {
            format!("{}_{}", self.cli.name, index + 1)
        } else {
            self.cli.name.clone()
        }
    }

    /// Path of variant `index` with the given extension
    pub fn output_path(&self, index: usize, extension: &str) -> PathBuf {
        self.cli
            .output
            .join(format!("{}.{extension}", self.variant_stem(index)))
    }
}
