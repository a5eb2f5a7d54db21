use crate::{
    algorithm::policy::{SplitPolicy, SplitStrategy},
    algorithm::subdivision::Subdivision,
    color::generator::ColorGenerator,
    color::palette::Palette,
    io::configuration::{DEFAULT_ROOT_HEIGHT, DEFAULT_ROOT_WIDTH, MAX_LEAVES, MAX_ROOT_DIMENSION},
    io::error::{Result, invalid_parameter},
    spatial::layout::Layout,
    spatial::rectangle::Rectangle,
};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::time::Instant;

/// Everything that shapes a layout apart from the palette and random source
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationConfig {
    /// Region to tile
    pub root: Rectangle,
    /// When rectangles stop splitting
    pub policy: SplitPolicy,
    /// How rectangles are split
    pub strategy: SplitStrategy,
    /// Evaluate sibling subtrees concurrently
    pub parallel: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            root: Rectangle::with_size(DEFAULT_ROOT_WIDTH, DEFAULT_ROOT_HEIGHT),
            policy: SplitPolicy::default(),
            strategy: SplitStrategy::default(),
            parallel: false,
        }
    }
}

impl GenerationConfig {
    /// Check every parameter before any work starts
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The root has a non-finite or negative coordinate or dimension
    /// - A root dimension exceeds [`MAX_ROOT_DIMENSION`]
    /// - The policy or strategy is malformed
    /// - `max_depth` lets the strategy produce more than [`MAX_LEAVES`] tiles
    pub fn validate(&self) -> Result<()> {
        let root = &self.root;
        for (parameter, value) in [("root_x", root.x), ("root_y", root.y)] {
            if !value.is_finite() {
                return Err(invalid_parameter(parameter, &value, &"must be finite"));
            }
        }
        for (parameter, value) in [("root_width", root.width), ("root_height", root.height)] {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &"must be a finite, non-negative number",
                ));
            }
            if value > MAX_ROOT_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must not exceed {MAX_ROOT_DIMENSION}"),
                ));
            }
        }
        self.policy.validate()?;
        self.strategy.validate()?;

        let worst_case = self.policy.worst_case_leaves(&self.strategy);
        if worst_case.is_none_or(|leaves| leaves > MAX_LEAVES) {
            return Err(invalid_parameter(
                "max_depth",
                &self.policy.max_depth,
                &format!(
                    "{}-way splits could produce more than {MAX_LEAVES} tiles",
                    self.strategy.fan_out()
                ),
            ));
        }
        Ok(())
    }
}

/// Validated generator that produces fresh layouts on demand
///
/// Holds no per-run state: each call to [`LayoutGenerator::generate`] builds
/// its own subdivision run and discards it when the layout is returned.
#[derive(Clone, Debug)]
pub struct LayoutGenerator {
    config: GenerationConfig,
    colors: ColorGenerator,
}

impl LayoutGenerator {
    /// Validate `config` and pair it with a palette
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid
    pub fn new(config: GenerationConfig, palette: Palette) -> Result<Self> {
        Self::with_colors(config, ColorGenerator::new(palette))
    }

    /// Validate `config` and pair it with a preconfigured colour source
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid
    pub fn with_colors(config: GenerationConfig, colors: ColorGenerator) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, colors })
    }

    /// Configuration this generator was built with
    pub const fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Colour source tiles are painted from
    pub const fn colors(&self) -> &ColorGenerator {
        &self.colors
    }

    /// Run one subdivision drawing every random choice from `rng`
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Layout {
        let start_time = Instant::now();
        let run = Subdivision::new(
            self.config.root,
            self.config.policy,
            &self.config.strategy,
            &self.colors,
        )
        .parallel(self.config.parallel);

        run.subdivide(self.config.root, 0, rng);
        let layout = run.finish();

        log::debug!(
            "Generated {} tiles (max depth {}) in {:?}",
            layout.len(),
            layout.max_depth(),
            start_time.elapsed()
        );
        layout
    }

    /// Run one subdivision from a seeded generator
    ///
    /// The same seed and configuration always produce the same tiles.
    pub fn generate_seeded(&self, seed: u64) -> Layout {
        let mut rng = StdRng::seed_from_u64(seed);
        self.generate(&mut rng)
    }
}

/// Tile `root` with binary splits and the default palette
///
/// # Errors
///
/// Returns an error if the root or policy is invalid; no partial layout is produced
pub fn generate_layout<R: Rng>(root: Rectangle, policy: SplitPolicy, rng: &mut R) -> Result<Layout> {
    let config = GenerationConfig {
        root,
        policy,
        ..GenerationConfig::default()
    };
    let generator = LayoutGenerator::new(config, Palette::default())?;
    Ok(generator.generate(rng))
}
