mod contention;

pub use contention::register_contention_benchmarks;
