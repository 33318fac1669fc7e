//! 사용자 프로필 요청/응답 DTO

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::profiles::UserProfile;
use crate::utils::string_utils::deserialize_optional_string;

/// 프로필 생성/수정 요청 DTO
///
/// `image` 필드는 빈 문자열이나 공백만 들어오면 None으로 정규화됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub biography: String,
    #[serde(default)]
    pub fitness_goals: String,
    #[serde(default)]
    pub profile_visibility: bool,
    #[serde(default)]
    pub email: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub image: Option<String>,
}

impl ProfilePayload {
    /// 요청 본문을 엔티티로 변환합니다.
    ///
    /// 본문에 id가 있으면 해당 ID가 유지되어 insert-or-replace로
    /// 저장됩니다. 잘못된 ID 형식은 `ValidationError`로 거부됩니다.
    pub fn into_profile(self) -> AppResult<UserProfile> {
        let id = self
            .id
            .as_deref()
            .map(ObjectId::parse_str)
            .transpose()
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let mut profile = UserProfile::new(
            self.user_id,
            self.biography,
            self.fitness_goals,
            self.profile_visibility,
            self.email,
            self.image,
        );
        profile.id = id;

        Ok(profile)
    }
}

/// 프로필 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub id: String,
    pub user_id: String,
    pub biography: String,
    pub fitness_goals: String,
    pub profile_visibility: bool,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl From<UserProfile> for ProfileResponse {
    fn from(profile: UserProfile) -> Self {
        let UserProfile {
            id,
            user_id,
            biography,
            fitness_goals,
            profile_visibility,
            email,
            image,
        } = profile;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            user_id,
            biography,
            fitness_goals,
            profile_visibility,
            email,
            image,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_image_normalized_to_none() {
        let payload: ProfilePayload =
            serde_json::from_str(r#"{"userId": "u", "image": "   "}"#).unwrap();
        assert!(payload.image.is_none());

        let payload: ProfilePayload =
            serde_json::from_str(r#"{"userId": "u", "image": ""}"#).unwrap();
        assert!(payload.image.is_none());

        let payload: ProfilePayload = serde_json::from_str(
            r#"{"userId": "u", "image": " https://cdn.example.com/p.png "}"#,
        )
        .unwrap();
        assert_eq!(
            payload.image.as_deref(),
            Some("https://cdn.example.com/p.png")
        );
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let payload: ProfilePayload = serde_json::from_str(r#"{}"#).unwrap();

        assert_eq!(payload.user_id, "");
        assert!(!payload.profile_visibility);
        assert!(payload.image.is_none());
    }

    #[test]
    fn test_into_profile_honors_supplied_id() {
        let payload: ProfilePayload = serde_json::from_str(
            r#"{"id": "64a1f0c2e4b0a1b2c3d4e5f6", "userId": "user-9", "profileVisibility": true}"#,
        )
        .unwrap();

        let profile = payload.into_profile().unwrap();

        assert_eq!(
            profile.id,
            Some(ObjectId::parse_str("64a1f0c2e4b0a1b2c3d4e5f6").unwrap())
        );
        assert_eq!(profile.user_id, "user-9");
        assert!(profile.profile_visibility);
    }

    #[test]
    fn test_into_profile_rejects_malformed_id() {
        let payload: ProfilePayload =
            serde_json::from_str(r#"{"id": "xyz", "userId": "user-9"}"#).unwrap();

        assert!(matches!(
            payload.into_profile(),
            Err(AppError::ValidationError(_))
        ));
    }
}
