//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//! 진행 기록, 프로필, 계정 라우트와 헬스체크 엔드포인트를 포함합니다.
//!
//! # Features
//!
//! - 학습 진행 기록 CRUD API 엔드포인트
//! - 사용자 프로필 CRUD API 엔드포인트
//! - 계정 CRUD API 엔드포인트
//! - 헬스체크 엔드포인트
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new().configure(configure_all_routes);
//! ```

use crate::handlers;
use actix_web::web;
use chrono;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// 기능별로 분할된 라우트들을 통합하여 애플리케이션에 등록합니다.
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    // Feature-specific routes
    configure_progress_routes(cfg);
    configure_profile_routes(cfg);
    configure_account_routes(cfg);
}

/// 학습 진행 기록 라우트를 설정합니다
///
/// # Available Routes
///
/// - `GET /api/v1/progress` - 전체 기록 조회
/// - `GET /api/v1/progress/{user_id}` - 사용자별 기록 조회
/// - `POST /api/v1/progress` - 기록 생성
/// - `PUT /api/v1/progress/{progress_id}` - 기록 수정
/// - `DELETE /api/v1/progress/{progress_id}` - 기록 삭제
///
/// # Examples
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/progress \
///   -H "Content-Type: application/json" \
///   -d '{"userId":"user-123","planName":"StrongLifts","goal":"3대 300"}'
/// ```
fn configure_progress_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/progress")
            .service(handlers::progress::get_all_progress)
            .service(handlers::progress::create_progress)
            .service(handlers::progress::get_progress_by_user)
            .service(handlers::progress::update_progress)
            .service(handlers::progress::delete_progress)
    );
}

/// 사용자 프로필 라우트를 설정합니다
///
/// # Available Routes
///
/// - `GET /api/v1/profiles` - 전체 프로필 조회
/// - `GET /api/v1/profiles/user/{user_id}` - 사용자별 프로필 조회
/// - `GET /api/v1/profiles/{profile_id}` - ID로 프로필 조회
/// - `POST /api/v1/profiles` - 프로필 생성
/// - `PUT /api/v1/profiles/{profile_id}` - 프로필 수정
/// - `DELETE /api/v1/profiles/{profile_id}` - 프로필 삭제
fn configure_profile_routes(cfg: &mut web::ServiceConfig) {
    // /user/{user_id}가 /{profile_id}보다 먼저 매칭되도록 등록 순서 유지
    cfg.service(
        web::scope("/api/v1/profiles")
            .service(handlers::profiles::get_all_profiles)
            .service(handlers::profiles::create_profile)
            .service(handlers::profiles::get_profiles_by_user)
            .service(handlers::profiles::get_profile)
            .service(handlers::profiles::update_profile)
            .service(handlers::profiles::delete_profile)
    );
}

/// 계정 라우트를 설정합니다
///
/// # Available Routes
///
/// - `GET /api/v1/accounts` - 전체 계정 조회
/// - `GET /api/v1/accounts/{account_id}` - ID로 계정 조회
/// - `POST /api/v1/accounts` - 계정 생성
/// - `PUT /api/v1/accounts/{account_id}` - 계정 수정
/// - `DELETE /api/v1/accounts/{account_id}` - 계정 삭제
fn configure_account_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/accounts")
            .service(handlers::accounts::get_all_accounts)
            .service(handlers::accounts::create_account)
            .service(handlers::accounts::get_account)
            .service(handlers::accounts::update_account)
            .service(handlers::accounts::delete_account)
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "fitness_progress_backend",
///   "version": "0.1.0",
///   "timestamp": "2025-01-01T00:00:00Z",
///   "features": {
///     "database": "MongoDB",
///     "cache": "Redis",
///     "dependency_injection": "Singleton Macro"
///   }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "fitness_progress_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "cache": "Redis",
            "dependency_injection": "Singleton Macro"
        }
    }))
}
