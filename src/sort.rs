use crate::heap::Heap;

/// Restores the max-heap property for the subtree rooted at `start`,
/// assuming both child subtrees already satisfy it. Descends by swapping
/// with the larger in-range child; strict `>` comparisons leave equal
/// children in place. Returns the number of swaps (the descent depth).
pub fn sift_down(heap: &mut Heap, start: usize) -> usize {
    let mut i = start;
    let mut swaps = 0;
    loop {
        let size = heap.len();
        let values = heap.as_slice();
        let left = 2 * i + 1;
        let right = 2 * i + 2;
        let mut max = i;
        if left < size && values[left] > values[max] {
            max = left;
        }
        if right < size && values[right] > values[max] {
            max = right;
        }
        if max == i {
            break;
        }
        heap.swap(i, max);
        swaps += 1;
        i = max;
    }
    swaps
}

/// Turns an arbitrary sequence into a max-heap by sifting down every
/// internal node, last to first, so each subtree is valid before its
/// parent is processed. Total swap count is at most `len`, giving the
/// linear construction bound. Returns that count.
pub fn build_max_heap(heap: &mut Heap) -> usize {
    let mut swaps = 0;
    for i in (0..heap.len() / 2).rev() {
        swaps += sift_down(heap, i);
    }
    swaps
}

/// Sorts the heap's contents in ascending order: build a max-heap, then
/// repeatedly move the root to the end of the live range and shrink it.
/// The logical size is restored afterwards so the caller sees the whole
/// sorted sequence.
pub fn heapsort(heap: &mut Heap) {
    let size = heap.len();
    build_max_heap(heap);
    for i in (1..size).rev() {
        heap.swap(0, i);
        heap.shrink();
        sift_down(heap, 0);
    }
    heap.set_len(size);
}
