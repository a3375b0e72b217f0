use clap::Parser;
use heap_sort::heap::Heap;
use heap_sort::sort::heapsort;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::process::ExitCode;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "heap-benchmark")]
#[command(about = "A heap sort performance testing tool")]
struct Args {
    #[arg(long, default_value = "1000000")]
    size: usize,

    #[arg(long, default_value = "42")]
    seed: u64,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let mut rng = StdRng::seed_from_u64(args.seed);
    let input: Vec<i32> = (0..args.size).map(|_| rng.random()).collect();

    println!("Running with {} elements and seed {}", args.size, args.seed);

    let start = Instant::now();
    let mut heap = match Heap::from_slice(&input) {
        Ok(heap) => heap,
        Err(err) => {
            eprintln!(
                "Error: allocating a heap of {} elements failed: {err}",
                args.size
            );
            return ExitCode::FAILURE;
        }
    };
    let loaded = Instant::now();
    heapsort(&mut heap);
    let sorted = Instant::now();
    assert!(heap.as_slice().windows(2).all(|pair| pair[0] <= pair[1]));
    let end = Instant::now();

    println!(
        "Loading took {} seconds",
        loaded.saturating_duration_since(start).as_secs_f32()
    );
    println!(
        "Sorting took {} seconds",
        sorted.saturating_duration_since(loaded).as_secs_f32()
    );
    println!(
        "Verifying took {} seconds",
        end.saturating_duration_since(sorted).as_secs_f32()
    );
    println!(
        "Total {} seconds",
        end.saturating_duration_since(start).as_secs_f32()
    );
    ExitCode::SUCCESS
}
