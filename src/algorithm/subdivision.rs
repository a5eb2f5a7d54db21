//! Recursive randomized subdivision of a rectangle into tiles
//!
//! A [`Subdivision`] is the state of a single run: policy, strategy, colour
//! source and the collector that numbers finished tiles. Nothing outlives the
//! run, so a new run can never observe tiles from an earlier one.
//!
//! In parallel mode every child gets its own generator forked from its
//! parent before the fan-out. The resulting geometry and colours depend only
//! on the seed; the thread schedule only affects sequence numbers.

use crate::algorithm::policy::{SplitPolicy, SplitStrategy};
use crate::color::generator::ColorGenerator;
use crate::io::configuration::PARALLEL_FAN_OUT_DEPTH;
use crate::spatial::layout::{Layout, LeafCollector};
use crate::spatial::rectangle::Rectangle;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::{IntoParallelIterator, ParallelIterator};

/// State of one subdivision run
pub struct Subdivision<'a> {
    policy: SplitPolicy,
    strategy: &'a SplitStrategy,
    colors: &'a ColorGenerator,
    collector: LeafCollector,
    parallel: bool,
}

impl<'a> Subdivision<'a> {
    /// Start a run over `root`
    ///
    /// Only reachable through [`crate::algorithm::executor::LayoutGenerator`],
    /// which validates every input first.
    pub const fn new(
        root: Rectangle,
        policy: SplitPolicy,
        strategy: &'a SplitStrategy,
        colors: &'a ColorGenerator,
    ) -> Self {
        Self {
            policy,
            strategy,
            colors,
            collector: LeafCollector::new(root),
            parallel: false,
        }
    }

    /// Evaluate sibling subtrees on the rayon pool
    pub const fn parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Split `rect` until every piece satisfies the policy, emitting each tile
    pub fn subdivide<R: Rng>(&self, rect: Rectangle, depth: u32, rng: &mut R) {
        if self.policy.is_leaf(&rect, depth) {
            self.emit(rect, depth, rng);
            return;
        }

        let Some(children) = self.split(&rect, rng) else {
            self.emit(rect, depth, rng);
            return;
        };

        if !self.parallel {
            for child in children {
                self.subdivide(child, depth + 1, rng);
            }
            return;
        }

        let forked: Vec<(Rectangle, StdRng)> = children
            .into_iter()
            .map(|child| (child, StdRng::from_rng(&mut *rng)))
            .collect();

        if depth < PARALLEL_FAN_OUT_DEPTH {
            // for_each returns only once every subtree has finished
            forked
                .into_par_iter()
                .for_each(|(child, mut child_rng)| {
                    self.subdivide(child, depth + 1, &mut child_rng);
                });
        } else {
            for (child, mut child_rng) in forked {
                self.subdivide(child, depth + 1, &mut child_rng);
            }
        }
    }

    /// Close the run
    pub fn finish(self) -> Layout {
        self.collector.into_layout()
    }

    fn split<R: Rng>(&self, rect: &Rectangle, rng: &mut R) -> Option<Vec<Rectangle>> {
        match self.strategy {
            SplitStrategy::Binary { ratios } => {
                let ratio = *ratios.choose(rng)?;
                let halves = if rng.random_bool(0.5) {
                    rect.split_vertical(ratio.vertical_fraction())
                } else {
                    rect.split_horizontal(ratio.horizontal_fraction())
                };
                Some(halves.to_vec())
            }
            SplitStrategy::Quad { divisors } => {
                let divisor = *divisors.choose(rng)?;
                Some(rect.split_corner(f64::from(divisor)).to_vec())
            }
        }
    }

    fn emit<R: Rng>(&self, rect: Rectangle, depth: u32, rng: &mut R) {
        let color = self.colors.next_color(rng);
        let sequence_number = self.collector.finalize(rect, depth, color);
        log::trace!(
            "tile {sequence_number} at depth {depth}: {:.1}x{:.1} {color}",
            rect.width,
            rect.height
        );
    }
}
