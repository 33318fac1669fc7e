//! 사용자 프로필 HTTP 핸들러
//!
//! 프로필 CRUD 엔드포인트를 처리합니다. 수정은 진행 기록과 동일하게
//! 조회 후 전체 덮어쓰기 방식을 사용합니다.

use actix_web::{web, HttpResponse, get, post, put, delete};
use crate::core::errors::AppError;
use crate::domain::dto::profiles::{ProfilePayload, ProfileResponse};
use crate::repositories::profiles::ProfileRepository;

/// 전체 프로필 조회 핸들러
///
/// `GET /api/v1/profiles`
#[get("")]
pub async fn get_all_profiles() -> Result<HttpResponse, AppError> {
    let repo = ProfileRepository::instance();
    let profiles = repo.find_all().await?;

    let response: Vec<ProfileResponse> =
        profiles.into_iter().map(ProfileResponse::from).collect();

    Ok(HttpResponse::Ok().json(response))
}

/// 사용자별 프로필 조회 핸들러
///
/// `GET /api/v1/profiles/user/{user_id}`
///
/// 해당 사용자의 프로필이 없으면 빈 배열을 반환합니다.
#[get("/user/{user_id}")]
pub async fn get_profiles_by_user(
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let repo = ProfileRepository::instance();
    let profiles = repo.find_by_user_id(&user_id).await?;

    let response: Vec<ProfileResponse> =
        profiles.into_iter().map(ProfileResponse::from).collect();

    Ok(HttpResponse::Ok().json(response))
}

/// ID로 프로필 조회 핸들러
///
/// `GET /api/v1/profiles/{profile_id}`
#[get("/{profile_id}")]
pub async fn get_profile(
    profile_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let repo = ProfileRepository::instance();

    let profile = repo
        .find_by_id(&profile_id)
        .await?
        .ok_or_else(|| AppError::NotFound("프로필을 찾을 수 없습니다".to_string()))?;

    Ok(HttpResponse::Ok().json(ProfileResponse::from(profile)))
}

/// 프로필 생성 핸들러
///
/// `POST /api/v1/profiles` → 201 Created
#[post("")]
pub async fn create_profile(
    payload: web::Json<ProfilePayload>,
) -> Result<HttpResponse, AppError> {
    let repo = ProfileRepository::instance();
    let created = repo.save(payload.into_inner().into_profile()?).await?;

    Ok(HttpResponse::Created().json(ProfileResponse::from(created)))
}

/// 프로필 수정 핸들러
///
/// `PUT /api/v1/profiles/{profile_id}`
///
/// 기존 프로필을 조회하여 ID를 제외한 모든 필드를 본문 값으로
/// 덮어쓴 뒤 저장합니다. 없는 ID는 404를 반환합니다.
#[put("/{profile_id}")]
pub async fn update_profile(
    profile_id: web::Path<String>,
    payload: web::Json<ProfilePayload>,
) -> Result<HttpResponse, AppError> {
    let repo = ProfileRepository::instance();

    let mut profile = repo
        .find_by_id(&profile_id)
        .await?
        .ok_or_else(|| AppError::NotFound("프로필을 찾을 수 없습니다".to_string()))?;

    profile.apply_update(payload.into_inner());

    let updated = repo.save(profile).await?;

    Ok(HttpResponse::Ok().json(ProfileResponse::from(updated)))
}

/// 프로필 삭제 핸들러
///
/// `DELETE /api/v1/profiles/{profile_id}` → 204 No Content (멱등)
#[delete("/{profile_id}")]
pub async fn delete_profile(
    profile_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let repo = ProfileRepository::instance();
    repo.delete_by_id(&profile_id).await?;

    Ok(HttpResponse::NoContent().finish())
}
