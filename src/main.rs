use std::process::ExitCode;

use heap_sort::heap::Heap;
use heap_sort::sort::heapsort;

const SAMPLE: [i32; 30] = [
    5, 6, 7, 8, 9, 10, 2, -1, 3, 4, 1, 2, -35, 78, -10, 13, 7, -11, 20, 1, 15, 7, 16, 0, 1, 2, 5,
    6, 100, 23,
];

fn main() -> ExitCode {
    let mut heap = match Heap::from_slice(&SAMPLE) {
        Ok(heap) => heap,
        Err(err) => {
            eprintln!(
                "Error: allocating a heap of {} elements failed: {err}",
                SAMPLE.len()
            );
            return ExitCode::FAILURE;
        }
    };

    println!("Unsorted:");
    println!("{heap}");
    heapsort(&mut heap);
    println!("Sorted:");
    println!("{heap}");
    ExitCode::SUCCESS
}
