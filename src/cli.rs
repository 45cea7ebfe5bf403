use anyhow::{Context, Result};
use clap::Parser;
use std::io::{BufRead, Write};

use crate::config::SampleConfig;
use crate::reservoir::ReservoirSampler;
use crate::source::ReaderSource;
use crate::uniform::UniformSource;

/// Print a uniform random sample of the lines read from stdin.
#[derive(Parser, Debug)]
#[command(name = "rsvp", version)]
pub struct Args {
    /// Number of lines to sample. Negative means zero.
    #[arg(
        short = 'k',
        long = "samples",
        env = "RSVP_SAMPLES",
        default_value_t = 3,
        allow_negative_numbers = true
    )]
    pub samples: i64,

    /// Maximum number of lines to read after skipping. Negative means no limit.
    #[arg(
        short = 'm',
        long,
        env = "RSVP_MAX_LINES",
        default_value_t = -1,
        allow_negative_numbers = true
    )]
    pub max_lines: i64,

    /// Number of leading lines to discard before sampling.
    #[arg(
        short = 'n',
        long,
        env = "RSVP_SKIP_LINES",
        default_value_t = -1,
        allow_negative_numbers = true
    )]
    pub skip_lines: i64,

    /// Don't print an error message on failure.
    #[arg(short, long)]
    pub silent: bool,
}

impl Args {
    pub fn config(&self) -> SampleConfig {
        SampleConfig::from_signed(self.samples, self.max_lines, self.skip_lines)
    }
}

/// Samples the lines of `input` and writes them to `output`, one per line. Returns the number
/// of lines written.
pub fn run<R, W, U>(config: SampleConfig, input: R, mut output: W, rng: U) -> Result<usize>
where
    R: BufRead,
    W: Write,
    U: UniformSource,
{
    let sample = ReservoirSampler::new(config, rng)
        .sample(ReaderSource::new(input))
        .context("failed to sample input")?;

    for line in &sample.lines {
        output.write_all(line).context("failed to write sample")?;
        output.write_all(b"\n").context("failed to write sample")?;
    }
    output.flush().context("failed to flush output")?;

    Ok(sample.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LineBound;
    use clap::CommandFactory;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;
    use std::io::{self, Cursor};

    fn rng() -> Xoshiro256StarStar {
        Xoshiro256StarStar::seed_from_u64(42)
    }

    #[test]
    fn default_arguments() {
        let args = Args::try_parse_from(["rsvp"]).unwrap();

        assert_eq!(args.config(), SampleConfig::default());
        assert!(!args.silent);
    }

    #[test]
    fn negative_arguments() {
        let args = Args::try_parse_from(["rsvp", "-k", "-2", "-m", "-1", "-n", "-5", "-s"]).unwrap();
        let config = args.config();

        assert_eq!(config.sample_size, 0);
        assert_eq!(config.max_lines, LineBound::Unbounded);
        assert_eq!(config.skip_lines, 0);
        assert!(args.silent);
    }

    #[test]
    fn long_arguments() {
        let args =
            Args::try_parse_from(["rsvp", "--samples", "10", "--max-lines", "100", "--skip-lines", "2"])
                .unwrap();

        assert_eq!(
            args.config(),
            SampleConfig::new(10).with_max_lines(100).with_skip_lines(2)
        );
    }

    #[test]
    fn version_flag() {
        assert_eq!(Args::command().get_version(), Some("1.0.0"));

        let err = Args::try_parse_from(["rsvp", "-V"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn largest_sample_size_on_short_input() {
        let args = Args::try_parse_from(["rsvp", "-k", "9223372036854775807"]).unwrap();
        let mut output = Vec::new();

        let written = run(args.config(), Cursor::new("a\nb\n"), &mut output, rng()).unwrap();

        assert_eq!(written, 2);
        assert_eq!(output, b"a\nb\n");
    }

    #[test]
    fn rejects_garbage() {
        assert!(Args::try_parse_from(["rsvp", "-k", "three"]).is_err());
    }

    #[test]
    fn writes_short_input_unchanged() {
        let mut output = Vec::new();
        let written = run(SampleConfig::new(5), Cursor::new("a\r\nb\nc"), &mut output, rng()).unwrap();

        assert_eq!(written, 3);
        assert_eq!(output, b"a\nb\nc\n");
    }

    #[test]
    fn writes_one_line_per_sample() {
        let input: String = (0..1_000).map(|i| format!("line {i}\n")).collect();
        let mut output = Vec::new();

        let written = run(SampleConfig::new(7), Cursor::new(input), &mut output, rng()).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert_eq!(written, 7);
        assert_eq!(text.lines().count(), 7);
        assert!(text.lines().all(|line| line.starts_with("line ")));
    }

    #[test]
    fn skip_and_max_lines() {
        let config = SampleConfig::new(5).with_skip_lines(2).with_max_lines(2);
        let mut output = Vec::new();

        run(config, Cursor::new("a\nb\nc\nd\ne\n"), &mut output, rng()).unwrap();

        assert_eq!(output, b"c\nd\n");
    }

    #[test]
    fn write_errors_are_reported() {
        struct Closed;

        impl Write for Closed {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let err = run(SampleConfig::new(1), Cursor::new("a\n"), Closed, rng()).unwrap_err();
        assert_eq!(err.to_string(), "failed to write sample");
        assert_eq!(err.root_cause().to_string(), "closed");
    }
}
