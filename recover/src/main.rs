use std::env;
use std::error::Error;
use std::fs;
use std::process::ExitCode;

use num_bigint::BigInt;
use tracing_subscriber::EnvFilter;

use recover::{vandermonde, TestCase};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let files: Vec<String> = env::args().skip(1).collect();
    if files.is_empty() {
        eprintln!("usage: recover <testcase.json>...");
        return ExitCode::FAILURE;
    }

    let mut failures = 0usize;
    for path in &files {
        println!("Processing {path}:");
        match process_file(path) {
            Ok(secret) => println!("Secret: {secret}\n"),
            Err(err) => {
                eprintln!("error processing {path}: {err}\n");
                failures += 1;
            }
        }
    }

    if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn process_file(path: &str) -> Result<BigInt, Box<dyn Error>> {
    let text = fs::read_to_string(path)?;
    let case = TestCase::from_json(&text)?;
    println!("n = {}, k = {} (degree {})", case.n(), case.k(), case.k() - 1);

    // Verified against the independent linear-system path; a mismatch is a
    // bug or corrupt input.
    let points = case.points()?;
    let reconstruction = vandermonde::cross_checked_detailed(&points, case.k())?;
    for (point, term) in points.iter().zip(&reconstruction.terms) {
        println!("  {point} contributes {}", term.contribution);
    }
    Ok(reconstruction.secret)
}
