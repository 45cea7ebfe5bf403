use clap::Parser;
use log::debug;
use rsvp::cli::{run, Args};
use rsvp::entropy_rng;
use std::io::{self, BufWriter};
use std::process::ExitCode;
use std::time::Instant;

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    let start_time = Instant::now();

    let stdin = io::stdin().lock();
    let stdout = BufWriter::new(io::stdout().lock());

    match run(args.config(), stdin, stdout, entropy_rng()) {
        Ok(written) => {
            debug!(
                "wrote {written} lines in {} seconds",
                start_time.elapsed().as_secs_f32()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            if !args.silent {
                eprintln!("rsvp: {err:#}");
            }
            ExitCode::FAILURE
        }
    }
}
