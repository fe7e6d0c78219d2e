//! Database repositories
//!
//! Repositories handle all direct database interactions.

pub mod announcement_repo;
pub mod contest_repo;
pub mod problem_repo;
pub mod user_repo;

pub use announcement_repo::AnnouncementRepository;
pub use contest_repo::ContestRepository;
pub use problem_repo::ProblemRepository;
pub use user_repo::UserRepository;
