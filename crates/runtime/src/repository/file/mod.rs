//! File-based repository implementations.

mod meal;

pub use meal::FileMealRepository;
