//! Uniform line sampling with Algorithm L (Li, 1994).
//!
//! Once the reservoir is full, instead of drawing a random number for every line (Algorithm R),
//! the sampler draws how many lines to skip before the next replacement. That brings the number
//! of random draws down from O(N) to O(K log(N/K)), which matters for huge or endless inputs.

use log::{debug, trace};

use crate::config::{LineBound, SampleConfig};
use crate::error::SampleError;
use crate::source::LineSource;
use crate::uniform::{entropy_rng, UniformSource};

/// Slots allocated before any input is read. Larger reservoirs grow as lines arrive.
const PREALLOCATED_SLOTS: usize = 1024;

/// Why sampling stopped.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Halt {
    /// The sample size was zero, so the input was never read.
    Empty,
    Exhausted,
    ReachedMaxLines,
}

#[derive(Debug, Clone)]
pub struct Sample {
    /// Sampled lines in reservoir slot order.
    pub lines: Vec<Vec<u8>>,
    /// Lines read after the skip prefix.
    pub lines_considered: usize,
    pub replacements: usize,
    pub halt: Halt,
}

impl Sample {
    fn empty(halt: Halt) -> Sample {
        Sample {
            lines: Vec::new(),
            lines_considered: 0,
            replacements: 0,
            halt,
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn into_lines(self) -> Vec<Vec<u8>> {
        self.lines
    }
}

pub struct ReservoirSampler<U> {
    config: SampleConfig,
    rng: U,
}

impl<U: UniformSource> ReservoirSampler<U> {
    pub fn new(config: SampleConfig, rng: U) -> ReservoirSampler<U> {
        ReservoirSampler { config, rng }
    }

    pub fn into_rng(self) -> U {
        self.rng
    }

    /// Reads `source` once and returns a uniform sample of its lines.
    ///
    /// Running out of input at any point is not an error: the sample just ends up short or
    /// empty. The only error is `source` failing to read.
    pub fn sample<S: LineSource>(&mut self, mut source: S) -> Result<Sample, SampleError> {
        let bound = self.config.max_lines;
        let k = self.config.effective_sample_size();

        if k == 0 {
            debug!("sample size is zero, not reading input");
            return Ok(Sample::empty(Halt::Empty));
        }

        for skipped in 0..self.config.skip_lines {
            if !source.advance()? {
                debug!(
                    "input ended after skipping {skipped} of {} lines",
                    self.config.skip_lines
                );
                return Ok(Sample::empty(Halt::Exhausted));
            }
        }

        let mut reservoir: Vec<Vec<u8>> = Vec::with_capacity(k.min(PREALLOCATED_SLOTS));
        while reservoir.len() < k && source.advance()? {
            reservoir.push(source.current().to_vec());
        }

        let mut lines_considered = reservoir.len();

        // A short fill means the input is already exhausted. Reading again could block on a
        // terminal, so stop here.
        if reservoir.len() < k {
            debug!("input ended after {lines_considered} lines, fewer than the {k} requested");
            return Ok(Sample {
                lines: reservoir,
                lines_considered,
                replacements: 0,
                halt: Halt::Exhausted,
            });
        }

        if !bound.allows(lines_considered) {
            debug!("reached max lines ({lines_considered}) while filling the reservoir");
            return Ok(Sample {
                lines: reservoir,
                lines_considered,
                replacements: 0,
                halt: Halt::ReachedMaxLines,
            });
        }

        let fk = k as f64;
        let mut w = (self.rng.uniform().ln() / fk).exp();
        let mut replacements = 0;

        let halt = loop {
            let skip = skip_length(w, self.rng.uniform());

            if let Some(halt) = advance_by(&mut source, skip, bound, &mut lines_considered)? {
                break halt;
            }

            // The last line advanced to is the replacement.
            let slot = self.rng.slot(k);
            reservoir[slot].clear();
            reservoir[slot].extend_from_slice(source.current());
            replacements += 1;
            trace!("line {lines_considered} replaced slot {slot}");

            w *= (self.rng.uniform().ln() / fk).exp();
        };

        debug!(
            "sampling stopped ({halt:?}) after {lines_considered} lines, {replacements} replacements"
        );

        Ok(Sample {
            lines: reservoir,
            lines_considered,
            replacements,
            halt,
        })
    }
}

/// Samples `source` with a freshly seeded generator.
pub fn sample_lines<S: LineSource>(source: S, config: SampleConfig) -> Result<Sample, SampleError> {
    ReservoirSampler::new(config, entropy_rng()).sample(source)
}

/// Number of lines to advance to reach the next replacement: `floor(ln(u) / ln(1 - w)) + 1`.
///
/// Saturates at `u64::MAX` when `w` is so small that the next replacement is effectively never.
fn skip_length(w: f64, u: f64) -> u64 {
    let skip = (u.ln() / (-w).ln_1p()).floor() + 1.0;
    skip as u64
}

fn advance_by<S: LineSource>(
    source: &mut S,
    skip: u64,
    bound: LineBound,
    lines_considered: &mut usize,
) -> Result<Option<Halt>, SampleError> {
    for _ in 0..skip {
        if !bound.allows(*lines_considered) {
            return Ok(Some(Halt::ReachedMaxLines));
        }
        if !source.advance()? {
            return Ok(Some(Halt::Exhausted));
        }
        *lines_considered += 1;
    }

    Ok(None)
}
