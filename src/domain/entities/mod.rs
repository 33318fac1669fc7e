//! 도메인 엔티티 모듈
//!
//! MongoDB 컬렉션에 영속되는 엔티티들을 정의합니다.
//!
//! - [`progress`] - 학습 진행 기록 (learningProgresses 컬렉션)
//! - [`profiles`] - 사용자 프로필 (userProfiles 컬렉션)
//! - [`accounts`] - 계정 (accounts 컬렉션)

pub mod progress;
pub mod profiles;
pub mod accounts;

pub use progress::LearningProgress;
pub use profiles::UserProfile;
pub use accounts::Account;
