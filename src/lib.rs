pub mod heap;
pub mod sort;
