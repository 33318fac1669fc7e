//! Account Entity Implementation
//!
//! 계정 엔티티 구현체입니다.
//! 이름, 사용자명, 비밀번호와 생성 시각을 보관합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use crate::domain::dto::accounts::AccountPayload;

/// 계정 엔티티
///
/// `accounts` 컬렉션에 저장됩니다. 비밀번호는 응답 DTO에서 제외되며,
/// 생성 시각은 엔티티 생성 시점에 기록됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 이름
    #[serde(default)]
    pub first_name: String,
    /// 성
    #[serde(default)]
    pub last_name: String,
    /// 로그인 사용자명
    #[serde(default)]
    pub user_name: String,
    /// 비밀번호 (검증된 평문, 응답에는 노출되지 않음)
    #[serde(default)]
    pub password: String,
    /// 계정 생성 시각
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateTime>,
}

impl Account {
    /// 새 계정을 생성합니다.
    ///
    /// 생성 시각이 현재 시간으로 기록됩니다.
    pub fn new(first_name: String, last_name: String, user_name: String, password: String) -> Self {
        Self {
            id: None,
            first_name,
            last_name,
            user_name,
            password,
            created_date: Some(DateTime::now()),
        }
    }

    /// 수정 요청의 내용을 기존 계정에 반영합니다.
    ///
    /// 이름, 사용자명, 비밀번호를 요청 값으로 덮어씁니다.
    /// ID와 생성 시각은 변경되지 않습니다.
    pub fn apply_update(&mut self, payload: AccountPayload) {
        self.first_name = payload.first_name;
        self.last_name = payload.last_name;
        self.user_name = payload.user_name;
        self.password = payload.password;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_account_records_created_date() {
        let account = Account::new(
            "길동".to_string(),
            "홍".to_string(),
            "gildong".to_string(),
            "passw0rd1".to_string(),
        );

        assert!(account.id.is_none());
        assert!(account.created_date.is_some());
    }

    #[test]
    fn test_apply_update_preserves_id_and_created_date() {
        let mut account = Account::new(
            "길동".to_string(),
            "홍".to_string(),
            "gildong".to_string(),
            "passw0rd1".to_string(),
        );
        account.id = Some(ObjectId::new());
        let original_id = account.id;
        let original_created_date = account.created_date;

        // 요청 본문에 다른 ID가 들어 있어도 무시된다
        let payload = AccountPayload {
            id: Some(ObjectId::new().to_hex()),
            first_name: "철수".to_string(),
            last_name: "김".to_string(),
            user_name: "cheolsu".to_string(),
            password: "newpass99".to_string(),
        };

        account.apply_update(payload);

        assert_eq!(account.id, original_id);
        assert_eq!(account.created_date, original_created_date);
        assert_eq!(account.first_name, "철수");
        assert_eq!(account.user_name, "cheolsu");
        assert_eq!(account.password, "newpass99");
    }

    #[test]
    fn test_account_document_fields_are_camel_case() {
        let account = Account::new(
            "a".to_string(),
            "b".to_string(),
            "ab".to_string(),
            "passw0rd1".to_string(),
        );
        let json = serde_json::to_value(&account).unwrap();

        assert!(json.get("firstName").is_some());
        assert!(json.get("userName").is_some());
        assert!(json.get("createdDate").is_some());
        assert!(json.get("first_name").is_none());
    }
}
