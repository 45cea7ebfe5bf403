/// Upper bound on how many lines, after the skip prefix, the sampler may read.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum LineBound {
    #[default]
    Unbounded,
    AtMost(usize),
}

impl LineBound {
    /// Negative values mean "no bound", as on the command line.
    pub fn from_signed(max_lines: i64) -> LineBound {
        match usize::try_from(max_lines) {
            Ok(n) => LineBound::AtMost(n),
            Err(_) => LineBound::Unbounded,
        }
    }

    /// Whether another line may be read once `count` lines have been read.
    pub fn allows(&self, count: usize) -> bool {
        match self {
            LineBound::Unbounded => true,
            LineBound::AtMost(n) => count < *n,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct SampleConfig {
    pub sample_size: usize,
    pub max_lines: LineBound,
    pub skip_lines: usize,
}

impl Default for SampleConfig {
    fn default() -> Self {
        SampleConfig {
            sample_size: 3,
            max_lines: LineBound::Unbounded,
            skip_lines: 0,
        }
    }
}

impl SampleConfig {
    pub fn new(sample_size: usize) -> SampleConfig {
        SampleConfig {
            sample_size,
            ..Default::default()
        }
    }

    pub fn with_max_lines(self, max_lines: usize) -> SampleConfig {
        SampleConfig {
            max_lines: LineBound::AtMost(max_lines),
            ..self
        }
    }

    pub fn with_skip_lines(self, skip_lines: usize) -> SampleConfig {
        SampleConfig { skip_lines, ..self }
    }

    /// Builds a config from raw signed values. Negative sizes and skips become zero and a
    /// negative `max_lines` means unbounded.
    pub fn from_signed(sample_size: i64, max_lines: i64, skip_lines: i64) -> SampleConfig {
        SampleConfig {
            sample_size: usize::try_from(sample_size).unwrap_or(0),
            max_lines: LineBound::from_signed(max_lines),
            skip_lines: usize::try_from(skip_lines).unwrap_or(0),
        }
    }

    /// The sample size after clamping to `max_lines`. You can't sample more lines than will
    /// ever be read.
    pub fn effective_sample_size(&self) -> usize {
        match self.max_lines {
            LineBound::Unbounded => self.sample_size,
            LineBound::AtMost(n) => self.sample_size.min(n),
        }
    }
}
