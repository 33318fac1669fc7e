//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! Spring Framework의 Controller 레이어와 동일한 역할을 수행하며,
//! ActixWeb 프레임워크를 기반으로 구현되었습니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! HTTP Layer Architecture
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                     ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   Entities/DTOs - 도메인 모델                    ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 별도의 서비스 계층 없이 핸들러가 리포지토리 싱글톤을 직접 호출합니다.
//! 비즈니스 로직이 단순한 CRUD 중심이므로 중간 계층의 이점이 없습니다.
//!
//! ## 모듈 구성
//!
//! - **`progress`**: 학습 진행 기록 엔드포인트 (`/api/v1/progress`)
//! - **`profiles`**: 사용자 프로필 엔드포인트 (`/api/v1/profiles`)
//! - **`accounts`**: 계정 엔드포인트 (`/api/v1/accounts`)
//!
//! ## 에러 처리
//!
//! 모든 핸들러는 `Result<HttpResponse, AppError>`를 반환하며,
//! `AppError`의 `ResponseError` 구현이 HTTP 상태 코드 매핑을 담당합니다.
//!
//! - `ValidationError` → 400 Bad Request
//! - `NotFound` → 404 Not Found
//! - 그 외 → 500 Internal Server Error

pub mod progress;
pub mod profiles;
pub mod accounts;
