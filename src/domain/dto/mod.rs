//! 데이터 전송 객체(DTO) 모듈
//!
//! HTTP 요청/응답에 사용되는 구조체들을 정의합니다.
//! 요청 DTO는 입력 검증을, 응답 DTO는 외부 표현(hex ID 문자열,
//! 민감 필드 제외)을 담당합니다.

pub mod progress;
pub mod profiles;
pub mod accounts;

pub use progress::{ProgressPayload, ProgressResponse};
pub use profiles::{ProfilePayload, ProfileResponse};
pub use accounts::{AccountPayload, AccountResponse};
