//! 도메인 모델 모듈
//!
//! 엔티티와 DTO를 정의하는 도메인 계층입니다.
//!
//! # 모듈 구성
//!
//! - [`entities`] - MongoDB 컬렉션에 영속되는 도메인 엔티티
//! - [`dto`] - HTTP 요청/응답 데이터 전송 객체
//!
//! 엔티티는 저장소 표현(camelCase 문서 필드, `_id` ObjectId)을 담당하고,
//! DTO는 외부 표현(ID 문자열, 민감 필드 제외)을 담당합니다.
//! 변환은 `From` trait과 명시적 변환 메서드를 통해 이루어집니다.

pub mod entities;
pub mod dto;

pub use entities::{Account, LearningProgress, UserProfile};
pub use dto::{
    AccountPayload, AccountResponse, ProfilePayload, ProfileResponse, ProgressPayload,
    ProgressResponse,
};
