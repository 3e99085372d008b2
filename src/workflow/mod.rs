pub mod diff_size;
