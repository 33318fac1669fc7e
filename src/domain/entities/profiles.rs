//! User Profile Entity Implementation
//!
//! 사용자 프로필 엔티티 구현체입니다.
//! 자기소개, 피트니스 목표, 공개 여부 등 사용자의 공개 정보를 표현합니다.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::domain::dto::profiles::ProfilePayload;

/// 사용자 프로필 엔티티
///
/// `userProfiles` 컬렉션에 저장되며, 진행 기록과는 userId 값으로만 연결됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 프로필 소유자 식별자
    #[serde(default)]
    pub user_id: String,
    /// 자기소개
    #[serde(default)]
    pub biography: String,
    /// 피트니스 목표
    #[serde(default)]
    pub fitness_goals: String,
    /// 프로필 공개 여부
    #[serde(default)]
    pub profile_visibility: bool,
    /// 연락용 이메일
    #[serde(default)]
    pub email: String,
    /// 프로필 이미지 URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl UserProfile {
    /// 새 프로필을 생성합니다.
    pub fn new(
        user_id: String,
        biography: String,
        fitness_goals: String,
        profile_visibility: bool,
        email: String,
        image: Option<String>,
    ) -> Self {
        Self {
            id: None,
            user_id,
            biography,
            fitness_goals,
            profile_visibility,
            email,
            image,
        }
    }

    /// 수정 요청의 내용을 기존 프로필에 반영합니다.
    ///
    /// ID를 제외한 모든 필드를 요청 값으로 덮어씁니다.
    pub fn apply_update(&mut self, payload: ProfilePayload) {
        self.user_id = payload.user_id;
        self.biography = payload.biography;
        self.fitness_goals = payload.fitness_goals;
        self.profile_visibility = payload.profile_visibility;
        self.email = payload.email;
        self.image = payload.image;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_update_replaces_content_and_keeps_id() {
        let mut profile = UserProfile::new(
            "user-1".to_string(),
            "안녕하세요".to_string(),
            "벌크업".to_string(),
            true,
            "a@b.com".to_string(),
            Some("https://cdn.example.com/1.png".to_string()),
        );
        profile.id = Some(ObjectId::new());
        let original_id = profile.id;

        let payload = ProfilePayload {
            id: None,
            user_id: "user-1".to_string(),
            biography: "수정된 소개".to_string(),
            fitness_goals: "커팅".to_string(),
            profile_visibility: false,
            email: "c@d.com".to_string(),
            image: None,
        };

        profile.apply_update(payload);

        assert_eq!(profile.id, original_id);
        assert_eq!(profile.biography, "수정된 소개");
        assert_eq!(profile.fitness_goals, "커팅");
        assert!(!profile.profile_visibility);
        assert!(profile.image.is_none());
    }

    #[test]
    fn test_profile_serializes_camel_case() {
        let profile = UserProfile::new(
            "u".to_string(),
            String::new(),
            String::new(),
            false,
            String::new(),
            None,
        );
        let json = serde_json::to_value(&profile).unwrap();

        assert!(json.get("fitnessGoals").is_some());
        assert!(json.get("profileVisibility").is_some());
        // image는 None이면 문서에 포함되지 않는다
        assert!(json.get("image").is_none());
    }
}
