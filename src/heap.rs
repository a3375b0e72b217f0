use std::collections::TryReserveError;
use std::fmt;

/// Fixed-capacity array of integers with a logical size. During sorting
/// the logical size shrinks below the capacity; indices past it hold the
/// already-extracted suffix and are no longer part of the heap structure.
pub struct Heap {
    values: Vec<i32>,
    size: usize,
}

impl Heap {
    /// Creates a zero-filled heap of the given length. Allocation failure
    /// is returned to the caller instead of aborting.
    pub fn with_len(len: usize) -> Result<Self, TryReserveError> {
        let mut values = Vec::new();
        values.try_reserve_exact(len)?;
        values.resize(len, 0);
        Ok(Heap { values, size: len })
    }

    /// Creates a heap holding a copy of `source`.
    pub fn from_slice(source: &[i32]) -> Result<Self, TryReserveError> {
        let mut heap = Self::with_len(source.len())?;
        heap.values.copy_from_slice(source);
        Ok(heap)
    }

    /// Logical size: the number of leading indices that form the heap.
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Backing length, fixed at construction.
    pub fn capacity(&self) -> usize {
        self.values.len()
    }

    /// The full backing sequence, including any sorted suffix.
    pub fn as_slice(&self) -> &[i32] {
        &self.values
    }

    pub fn swap(&mut self, a: usize, b: usize) {
        self.values.swap(a, b);
    }

    // Size manipulation is reserved for the sort; callers outside the
    // crate only ever observe a settled heap.
    pub(crate) fn shrink(&mut self) {
        self.size -= 1;
    }

    pub(crate) fn set_len(&mut self, len: usize) {
        debug_assert!(len <= self.values.len());
        self.size = len;
    }
}

impl fmt::Display for Heap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}
