//! 피트니스 진행 기록 서비스 백엔드
//!
//! 사용자의 운동 학습 진행(Learning Progress) 기록과 프로필, 계정을 관리하는
//! MongoDB 기반 REST 백엔드입니다. 싱글톤 매크로를 활용한 의존성 주입과
//! Redis 캐싱을 제공합니다.
//!
//! # Features
//!
//! - **진행 기록 관리**: 운동 플랜 기록의 생성, 조회, 병합 수정, 삭제
//! - **사용자 프로필**: 소개, 피트니스 목표, 공개 여부 관리
//! - **계정 관리**: 비밀번호 정책 검증을 포함한 계정 CRUD
//! - **싱글톤 DI**: 매크로 기반 자동 의존성 주입
//! - **MongoDB**: 컬렉션 단위 문서 영구 저장
//! - **Redis**: ID 조회 캐싱
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리 (통과형, 비즈니스 로직 없음)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use fitness_progress_backend::repositories::progress::progress_repo::ProgressRepository;
//!
//! // 싱글톤 리포지토리 인스턴스 가져오기
//! let repo = ProgressRepository::instance();
//!
//! // 진행 기록 생성 및 조회
//! let saved = repo.save(record).await?;
//! let found = repo.find_by_user_id("u1").await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod utils;
pub mod routes;
pub mod handlers;
