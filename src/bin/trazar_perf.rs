//! trazar-perf - rasterization algorithm timing report.
//!
//! Runs every line algorithm and the midpoint circle algorithm over the
//! default test suites and prints the comparison tables.

use trazar::perf::Harness;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut harness = Harness::new(1000);
    harness.run_default_suite()?;
    print!("{}", harness.report());
    Ok(())
}
