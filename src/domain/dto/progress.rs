//! 학습 진행 기록 요청/응답 DTO
//!
//! 진행 기록 CRUD 엔드포인트의 와이어 포맷을 정의합니다.
//! 요청 본문의 생략된 내용 필드는 빈 문자열로 역직렬화됩니다.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::progress::LearningProgress;

/// 진행 기록 생성/수정 요청 DTO
///
/// 생성과 수정이 같은 본문 형태를 사용합니다. 생성 시 본문의 `id`가
/// 있으면 해당 ID로 저장(insert-or-replace)되고, 없으면 서버가
/// 할당합니다. 수정 시에는 경로의 ID가 기준이며 본문의 id는 무시됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub routines: String,
    #[serde(default)]
    pub plan_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub goal: String,
}

impl ProgressPayload {
    /// 요청 본문을 엔티티로 변환합니다.
    ///
    /// 본문에 id가 있으면 파싱하여 엔티티에 유지합니다. 저장 시
    /// 해당 ID 기준의 insert-or-replace가 수행됩니다. 잘못된 ID
    /// 형식은 `ValidationError`로 거부됩니다.
    pub fn into_record(self) -> AppResult<LearningProgress> {
        let id = self
            .id
            .as_deref()
            .map(ObjectId::parse_str)
            .transpose()
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let mut record = LearningProgress::new(
            self.user_id,
            self.routines,
            self.plan_name,
            self.description,
            self.goal,
        );
        record.id = id;

        Ok(record)
    }
}

/// 진행 기록 응답 DTO
///
/// MongoDB ObjectId를 24자리 hex 문자열로 변환하여 반환합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressResponse {
    pub id: String,
    pub user_id: String,
    pub routines: String,
    pub plan_name: String,
    pub description: String,
    pub goal: String,
}

impl From<LearningProgress> for ProgressResponse {
    fn from(record: LearningProgress) -> Self {
        let LearningProgress {
            id,
            user_id,
            routines,
            plan_name,
            description,
            goal,
        } = record;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            user_id,
            routines,
            plan_name,
            description,
            goal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_missing_fields_deserialize_as_blank() {
        let payload: ProgressPayload = serde_json::from_str(r#"{}"#).unwrap();

        assert!(payload.id.is_none());
        assert_eq!(payload.user_id, "");
        assert_eq!(payload.routines, "");
        assert_eq!(payload.plan_name, "");
        assert_eq!(payload.description, "");
        assert_eq!(payload.goal, "");
    }

    #[test]
    fn test_camel_case_fields_deserialize() {
        let payload: ProgressPayload = serde_json::from_str(
            r#"{"userId": "user-1", "planName": "StrongLifts", "goal": "3대 300"}"#,
        )
        .unwrap();

        assert_eq!(payload.user_id, "user-1");
        assert_eq!(payload.plan_name, "StrongLifts");
        assert_eq!(payload.goal, "3대 300");
    }

    #[test]
    fn test_into_record_honors_supplied_id() {
        let payload: ProgressPayload = serde_json::from_str(
            r#"{"id": "64a1f0c2e4b0a1b2c3d4e5f6", "userId": "user-1"}"#,
        )
        .unwrap();

        let record = payload.into_record().unwrap();

        assert_eq!(
            record.id,
            Some(ObjectId::parse_str("64a1f0c2e4b0a1b2c3d4e5f6").unwrap())
        );
        assert_eq!(record.user_id, "user-1");
    }

    #[test]
    fn test_into_record_without_id_starts_unassigned() {
        let payload: ProgressPayload =
            serde_json::from_str(r#"{"userId": "user-1"}"#).unwrap();

        let record = payload.into_record().unwrap();

        assert!(record.id.is_none());
    }

    #[test]
    fn test_into_record_rejects_malformed_id() {
        let payload: ProgressPayload =
            serde_json::from_str(r#"{"id": "not-an-object-id", "userId": "user-1"}"#).unwrap();

        let result = payload.into_record();

        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_response_converts_object_id_to_hex() {
        let oid = ObjectId::new();
        let mut record = LearningProgress::new(
            "user-1".to_string(),
            "r".to_string(),
            "p".to_string(),
            "d".to_string(),
            "g".to_string(),
        );
        record.id = Some(oid);

        let response = ProgressResponse::from(record);

        assert_eq!(response.id, oid.to_hex());
        assert_eq!(response.id.len(), 24);

        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("userId").is_some());
        assert!(json.get("planName").is_some());
    }
}
