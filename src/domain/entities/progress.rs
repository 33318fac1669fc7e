//! Learning Progress Entity Implementation
//!
//! 학습 진행 기록 엔티티의 핵심 구현체입니다.
//! 사용자별 운동 루틴, 계획 이름, 목표 등의 진행 상황을 표현합니다.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::domain::dto::progress::ProgressPayload;

/// 학습 진행 기록 엔티티
///
/// `learningProgresses` 컬렉션에 저장되는 핵심 도메인 엔티티입니다.
/// 문서 필드는 camelCase로 저장되며, 내용 필드는 모두 자유 텍스트입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningProgress {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 기록 소유자 식별자
    #[serde(default)]
    pub user_id: String,
    /// 운동 루틴 설명
    #[serde(default)]
    pub routines: String,
    /// 운동 계획 이름
    #[serde(default)]
    pub plan_name: String,
    /// 자유 서술 설명
    #[serde(default)]
    pub description: String,
    /// 목표 서술
    #[serde(default)]
    pub goal: String,
}

impl LearningProgress {
    /// 새 진행 기록을 생성합니다.
    ///
    /// ID는 None으로 시작하며, MongoDB 삽입 시점에 ObjectId가 할당됩니다.
    pub fn new(
        user_id: String,
        routines: String,
        plan_name: String,
        description: String,
        goal: String,
    ) -> Self {
        Self {
            id: None,
            user_id,
            routines,
            plan_name,
            description,
            goal,
        }
    }

    /// 수정 요청의 내용을 기존 기록에 반영합니다.
    ///
    /// 다섯 개의 내용 필드(userId, routines, planName, description, goal)를
    /// 요청 값으로 무조건 덮어씁니다. 요청에서 생략된 필드는 빈 문자열로
    /// 역직렬화되므로 기존 값이 지워집니다. ID는 절대 변경되지 않습니다.
    pub fn apply_update(&mut self, payload: ProgressPayload) {
        self.user_id = payload.user_id;
        self.routines = payload.routines;
        self.plan_name = payload.plan_name;
        self.description = payload.description;
        self.goal = payload.goal;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> LearningProgress {
        let mut record = LearningProgress::new(
            "user-123".to_string(),
            "스쿼트 5x5".to_string(),
            "StrongLifts".to_string(),
            "초급 바벨 프로그램".to_string(),
            "3대 300".to_string(),
        );
        record.id = Some(ObjectId::new());
        record
    }

    #[test]
    fn test_apply_update_overwrites_all_content_fields() {
        let mut record = sample_record();
        let payload = ProgressPayload {
            id: None,
            user_id: "user-456".to_string(),
            routines: "데드리프트 3x5".to_string(),
            plan_name: "Madcow".to_string(),
            description: "중급 프로그램".to_string(),
            goal: "체지방 감량".to_string(),
        };

        record.apply_update(payload);

        assert_eq!(record.user_id, "user-456");
        assert_eq!(record.routines, "데드리프트 3x5");
        assert_eq!(record.plan_name, "Madcow");
        assert_eq!(record.description, "중급 프로그램");
        assert_eq!(record.goal, "체지방 감량");
    }

    #[test]
    fn test_apply_update_preserves_id() {
        let mut record = sample_record();
        let original_id = record.id;

        // 요청 본문에 다른 ID가 들어 있어도 무시된다
        let payload = ProgressPayload {
            id: Some(ObjectId::new().to_hex()),
            user_id: "other".to_string(),
            routines: String::new(),
            plan_name: String::new(),
            description: String::new(),
            goal: String::new(),
        };

        record.apply_update(payload);

        assert_eq!(record.id, original_id);
    }

    #[test]
    fn test_apply_update_blank_fields_erase_existing_values() {
        let mut record = sample_record();

        // 생략된 필드는 기본값(빈 문자열)으로 역직렬화된다
        let payload: ProgressPayload =
            serde_json::from_str(r#"{"userId": "user-123"}"#).unwrap();

        record.apply_update(payload);

        assert_eq!(record.user_id, "user-123");
        assert_eq!(record.routines, "");
        assert_eq!(record.plan_name, "");
        assert_eq!(record.description, "");
        assert_eq!(record.goal, "");
    }

    #[test]
    fn test_document_fields_serialize_as_camel_case() {
        let record = sample_record();
        let json = serde_json::to_value(&record).unwrap();

        assert!(json.get("userId").is_some());
        assert!(json.get("planName").is_some());
        assert!(json.get("user_id").is_none());
        assert!(json.get("plan_name").is_none());
    }

    #[test]
    fn test_new_record_has_no_id() {
        let record = LearningProgress::new(
            "u".to_string(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
        );
        assert!(record.id.is_none());

        // id가 None이면 직렬화 결과에 _id 키가 없어야 한다
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("_id").is_none());
    }
}
