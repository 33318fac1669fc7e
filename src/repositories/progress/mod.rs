pub mod progress_repo;

pub use progress_repo::ProgressRepository;
