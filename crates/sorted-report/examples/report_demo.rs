//! Fill a dataset with random integers and print its report
//!
//! Run with: cargo run -p sorted-report --example report_demo -- [count]

use rand::Rng;
use sorted_core::{Dataset, EstimationMode};
use sorted_report::render_all;

fn main() -> anyhow::Result<()> {
    let count: usize = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => 20,
    };

    let mut rng = rand::thread_rng();
    let mut dataset = Dataset::new(EstimationMode::Sample);
    for _ in 0..count {
        dataset.insert(f64::from(rng.gen_range(0..=100)));
    }

    println!("Inserted {count} random values.\n");
    render_all(&dataset, &mut std::io::stdout().lock())?;
    Ok(())
}
