//! 계정 HTTP 핸들러
//!
//! 계정 CRUD 엔드포인트를 처리합니다. 생성과 수정 요청은
//! validator를 통한 입력 검증을 거치며, 응답에는 비밀번호가
//! 포함되지 않습니다.

use actix_web::{web, HttpResponse, get, post, put, delete};
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::accounts::{AccountPayload, AccountResponse};
use crate::repositories::accounts::AccountRepository;

/// 전체 계정 조회 핸들러
///
/// `GET /api/v1/accounts`
#[get("")]
pub async fn get_all_accounts() -> Result<HttpResponse, AppError> {
    let repo = AccountRepository::instance();
    let accounts = repo.find_all().await?;

    let response: Vec<AccountResponse> =
        accounts.into_iter().map(AccountResponse::from).collect();

    Ok(HttpResponse::Ok().json(response))
}

/// ID로 계정 조회 핸들러
///
/// `GET /api/v1/accounts/{account_id}`
#[get("/{account_id}")]
pub async fn get_account(
    account_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let repo = AccountRepository::instance();

    let account = repo
        .find_by_id(&account_id)
        .await?
        .ok_or_else(|| AppError::NotFound("계정을 찾을 수 없습니다".to_string()))?;

    Ok(HttpResponse::Ok().json(AccountResponse::from(account)))
}

/// 계정 생성 핸들러
///
/// `POST /api/v1/accounts` → 201 Created
///
/// 비밀번호는 8-20자이며 영문자와 숫자를 포함해야 합니다.
/// 검증 실패 시 400을 반환합니다.
#[post("")]
pub async fn create_account(
    payload: web::Json<AccountPayload>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let repo = AccountRepository::instance();
    let created = repo.save(payload.into_inner().into_account()?).await?;

    Ok(HttpResponse::Created().json(AccountResponse::from(created)))
}

/// 계정 수정 핸들러
///
/// `PUT /api/v1/accounts/{account_id}`
///
/// 이름, 사용자명, 비밀번호를 본문 값으로 덮어씁니다.
/// ID와 생성 시각은 유지됩니다.
#[put("/{account_id}")]
pub async fn update_account(
    account_id: web::Path<String>,
    payload: web::Json<AccountPayload>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let repo = AccountRepository::instance();

    let mut account = repo
        .find_by_id(&account_id)
        .await?
        .ok_or_else(|| AppError::NotFound("계정을 찾을 수 없습니다".to_string()))?;

    account.apply_update(payload.into_inner());

    let updated = repo.save(account).await?;

    Ok(HttpResponse::Ok().json(AccountResponse::from(updated)))
}

/// 계정 삭제 핸들러
///
/// `DELETE /api/v1/accounts/{account_id}` → 204 No Content (멱등)
#[delete("/{account_id}")]
pub async fn delete_account(
    account_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let repo = AccountRepository::instance();
    repo.delete_by_id(&account_id).await?;

    Ok(HttpResponse::NoContent().finish())
}
