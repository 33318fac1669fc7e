//! 계정 요청/응답 DTO
//!
//! 계정 생성 요청의 입력 검증과 비밀번호를 제외한 응답 표현을 정의합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::accounts::Account;

/// 계정 생성/수정 요청 DTO
///
/// JSON 역직렬화와 입력 검증을 자동으로 수행합니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AccountPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// 이름 (필수)
    #[serde(default)]
    #[validate(length(min = 1, message = "이름을 입력해주세요"))]
    pub first_name: String,

    /// 성 (필수)
    #[serde(default)]
    #[validate(length(min = 1, message = "성을 입력해주세요"))]
    pub last_name: String,

    /// 사용자명 (필수)
    #[serde(default)]
    #[validate(length(min = 1, message = "사용자명을 입력해주세요"))]
    pub user_name: String,

    /// 비밀번호 (8-20자, 영문자와 숫자 필수 포함)
    #[serde(default)]
    #[validate(length(
        min = 8,
        max = 20,
        message = "비밀번호는 8-20자 사이여야 합니다"
    ))]
    #[validate(custom(function = "validate_password_strength"))]
    pub password: String,
}

impl AccountPayload {
    /// 검증된 요청 본문을 엔티티로 변환합니다.
    ///
    /// 생성 시각이 현재 시간으로 기록됩니다. 본문에 id가 있으면
    /// 해당 ID가 유지되며, 잘못된 형식은 `ValidationError`로 거부됩니다.
    pub fn into_account(self) -> AppResult<Account> {
        let id = self
            .id
            .as_deref()
            .map(ObjectId::parse_str)
            .transpose()
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let mut account =
            Account::new(self.first_name, self.last_name, self.user_name, self.password);
        account.id = id;

        Ok(account)
    }
}

/// 비밀번호 구성 검증 (영문자와 숫자 필수 포함)
fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if !(has_letter && has_digit) {
        return Err(ValidationError::new("weak_password")
            .with_message("비밀번호는 영문자와 숫자를 포함해야 합니다".into()));
    }

    Ok(())
}

/// 계정 응답 DTO
///
/// 비밀번호는 어떤 경우에도 직렬화되지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub user_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateTime>,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        let Account {
            id,
            first_name,
            last_name,
            user_name,
            created_date,
            ..
        } = account;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            first_name,
            last_name,
            user_name,
            created_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_payload() -> AccountPayload {
        serde_json::from_str(
            r#"{
                "firstName": "길동",
                "lastName": "홍",
                "userName": "gildong",
                "password": "passw0rd1"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_valid_payload_passes_validation() {
        assert!(valid_payload().validate().is_ok());
    }

    #[test]
    fn test_short_password_rejected() {
        let mut payload = valid_payload();
        payload.password = "abc1".to_string();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_too_long_password_rejected() {
        let mut payload = valid_payload();
        payload.password = "a1".repeat(11); // 22자
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_password_without_digit_rejected() {
        let mut payload = valid_payload();
        payload.password = "abcdefgh".to_string();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_password_without_letter_rejected() {
        let mut payload = valid_payload();
        payload.password = "12345678".to_string();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_blank_user_name_rejected() {
        let mut payload = valid_payload();
        payload.user_name = String::new();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_into_account_honors_supplied_id() {
        let mut payload = valid_payload();
        payload.id = Some("64a1f0c2e4b0a1b2c3d4e5f6".to_string());

        let account = payload.into_account().unwrap();

        assert_eq!(
            account.id,
            Some(ObjectId::parse_str("64a1f0c2e4b0a1b2c3d4e5f6").unwrap())
        );
    }

    #[test]
    fn test_into_account_rejects_malformed_id() {
        let mut payload = valid_payload();
        payload.id = Some("123".to_string());

        assert!(matches!(
            payload.into_account(),
            Err(AppError::ValidationError(_))
        ));
    }

    #[test]
    fn test_response_never_contains_password() {
        let account = valid_payload().into_account().unwrap();
        let response = AccountResponse::from(account);

        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("password").is_none());
        assert!(json.get("firstName").is_some());
        assert!(json.get("createdDate").is_some());
    }
}
