pub mod change;
pub mod diff_size;
