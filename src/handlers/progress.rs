//! # 학습 진행 기록 HTTP 핸들러
//!
//! 학습 진행 기록의 CRUD 엔드포인트를 처리하는 핸들러 함수들입니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/progress` | 전체 기록 조회 | 200 OK |
//! | `GET` | `/progress/{user_id}` | 사용자별 기록 조회 | 200 OK |
//! | `POST` | `/progress` | 새 기록 생성 | 201 Created |
//! | `PUT` | `/progress/{progress_id}` | 기록 수정 | 200 OK / 404 |
//! | `DELETE` | `/progress/{progress_id}` | 기록 삭제 | 204 No Content |

use actix_web::{web, HttpResponse, get, post, put, delete};
use crate::core::errors::AppError;
use crate::domain::dto::progress::{ProgressPayload, ProgressResponse};
use crate::repositories::progress::ProgressRepository;

/// 전체 진행 기록 조회 핸들러
///
/// 컬렉션의 모든 기록을 배열로 반환합니다. 기록이 없으면 빈 배열을 반환합니다.
///
/// # 엔드포인트
///
/// `GET /api/v1/progress`
#[get("")]
pub async fn get_all_progress() -> Result<HttpResponse, AppError> {
    let repo = ProgressRepository::instance();
    let records = repo.find_all().await?;

    let response: Vec<ProgressResponse> =
        records.into_iter().map(ProgressResponse::from).collect();

    Ok(HttpResponse::Ok().json(response))
}

/// 사용자별 진행 기록 조회 핸들러
///
/// 경로의 userId에 속한 기록들을 반환합니다.
/// 해당 사용자의 기록이 없으면 200과 빈 배열을 반환합니다 (404 아님).
///
/// # 엔드포인트
///
/// `GET /api/v1/progress/{user_id}`
#[get("/{user_id}")]
pub async fn get_progress_by_user(
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let repo = ProgressRepository::instance();
    let records = repo.find_by_user_id(&user_id).await?;

    let response: Vec<ProgressResponse> =
        records.into_iter().map(ProgressResponse::from).collect();

    Ok(HttpResponse::Ok().json(response))
}

/// 진행 기록 생성 핸들러
///
/// 새 기록을 저장하고 ID를 포함한 전체 기록을 반환합니다.
/// 본문에 id가 없으면 서버가 할당하고, 있으면 해당 ID 기준으로
/// insert-or-replace 저장됩니다. 생략된 내용 필드는 빈 문자열로
/// 저장됩니다.
///
/// # 엔드포인트
///
/// `POST /api/v1/progress`
///
/// # 요청 본문
///
/// ```json
/// {
///   "userId": "user-123",
///   "routines": "스쿼트 5x5",
///   "planName": "StrongLifts",
///   "description": "초급 바벨 프로그램",
///   "goal": "3대 300"
/// }
/// ```
///
/// # 응답
///
/// 201 Created와 함께 `id`가 채워진 기록을 반환합니다.
#[post("")]
pub async fn create_progress(
    payload: web::Json<ProgressPayload>,
) -> Result<HttpResponse, AppError> {
    let repo = ProgressRepository::instance();
    let created = repo.save(payload.into_inner().into_record()?).await?;

    Ok(HttpResponse::Created().json(ProgressResponse::from(created)))
}

/// 진행 기록 수정 핸들러
///
/// 기존 기록을 조회한 뒤 요청 본문의 다섯 개 내용 필드로 덮어쓰고
/// 저장합니다. ID는 경로의 값이 유지되며, 본문의 id는 무시됩니다.
///
/// # 엔드포인트
///
/// `PUT /api/v1/progress/{progress_id}`
///
/// # 응답
///
/// - **200 OK**: 수정된 기록 전체
/// - **400 Bad Request**: 잘못된 ObjectId 형식
/// - **404 Not Found**: 해당 ID의 기록이 없음
#[put("/{progress_id}")]
pub async fn update_progress(
    progress_id: web::Path<String>,
    payload: web::Json<ProgressPayload>,
) -> Result<HttpResponse, AppError> {
    let repo = ProgressRepository::instance();

    let mut record = repo
        .find_by_id(&progress_id)
        .await?
        .ok_or_else(|| AppError::NotFound("진행 기록을 찾을 수 없습니다".to_string()))?;

    record.apply_update(payload.into_inner());

    let updated = repo.save(record).await?;

    Ok(HttpResponse::Ok().json(ProgressResponse::from(updated)))
}

/// 진행 기록 삭제 핸들러
///
/// 기록을 삭제하고 204를 반환합니다. 이미 없는 ID에 대해서도
/// 204를 반환하여 멱등성을 보장합니다.
///
/// # 엔드포인트
///
/// `DELETE /api/v1/progress/{progress_id}`
#[delete("/{progress_id}")]
pub async fn delete_progress(
    progress_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let repo = ProgressRepository::instance();
    repo.delete_by_id(&progress_id).await?;

    Ok(HttpResponse::NoContent().finish())
}
