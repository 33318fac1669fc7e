//! 사용자 프로필 리포지토리 구현
//!
//! `userProfiles` 컬렉션의 데이터 액세스를 담당합니다.
//! 캐싱과 에러 처리 방식은 진행 기록 리포지토리와 동일합니다.

use std::sync::Arc;
use futures_util::TryStreamExt;
use mongodb::{bson::{doc, oid::ObjectId}, options::IndexOptions, IndexModel};
use crate::{
    caching::redis::RedisClient,
    core::errors::AppError,
    core::registry::Repository,
    db::Database,
    domain::entities::profiles::UserProfile,
};
use singleton_macro::repository;

/// 사용자 프로필 데이터 액세스 리포지토리
///
/// 캐시 키 패턴: `profile:{id}`, TTL 600초.
#[repository(name = "profile", collection = "userProfiles")]
pub struct ProfileRepository {
    /// MongoDB 데이터베이스 연결 (자동 주입)
    db: Arc<Database>,

    /// Redis 캐시 클라이언트 (자동 주입)
    redis: Arc<RedisClient>,
}

impl ProfileRepository {
    /// 전체 프로필 조회
    pub async fn find_all(&self) -> Result<Vec<UserProfile>, AppError> {
        let cursor = self.collection::<UserProfile>()
            .find(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// ID로 프로필 조회 (캐시 우선)
    pub async fn find_by_id(&self, id: &str) -> Result<Option<UserProfile>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let cache_key = self.cache_key(id);

        if let Ok(Some(cached)) = self.redis.get::<UserProfile>(&cache_key).await {
            return Ok(Some(cached));
        }

        let profile = self.collection::<UserProfile>()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref profile) = profile {
            let _ = self.redis
                .set_with_expiry(&cache_key, profile, 600)
                .await;
        }

        Ok(profile)
    }

    /// 사용자별 프로필 조회
    ///
    /// 프로필은 사용자당 여러 개 존재할 수 있는 구조를 유지합니다.
    pub async fn find_by_user_id(&self, user_id: &str) -> Result<Vec<UserProfile>, AppError> {
        let cursor = self.collection::<UserProfile>()
            .find(doc! { "userId": user_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 프로필 저장 (삽입 또는 전체 교체)
    pub async fn save(&self, mut profile: UserProfile) -> Result<UserProfile, AppError> {
        match profile.id {
            None => {
                let result = self.collection::<UserProfile>()
                    .insert_one(&profile)
                    .await
                    .map_err(|e| AppError::DatabaseError(e.to_string()))?;

                profile.id = Some(crate::repositories::inserted_object_id(result.inserted_id)?);
            }
            Some(object_id) => {
                self.collection::<UserProfile>()
                    .replace_one(doc! { "_id": object_id }, &profile)
                    .with_options(
                        mongodb::options::ReplaceOptions::builder()
                            .upsert(true)
                            .build(),
                    )
                    .await
                    .map_err(|e| AppError::DatabaseError(e.to_string()))?;

                let _ = self.invalidate_cache(&object_id.to_hex()).await;
            }
        }

        let _ = self.invalidate_collection_cache(None).await;

        Ok(profile)
    }

    /// 프로필 삭제
    pub async fn delete_by_id(&self, id: &str) -> Result<bool, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let result = self.collection::<UserProfile>()
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.deleted_count > 0 {
            let _ = self.invalidate_cache(id).await;
            let _ = self.invalidate_collection_cache(None).await;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// 데이터베이스 인덱스 생성
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let user_id_index = IndexModel::builder()
            .keys(doc! { "userId": 1 })
            .options(IndexOptions::builder()
                .name("userId_asc".to_string())
                .build())
            .build();

        self.collection::<UserProfile>()
            .create_indexes([user_id_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
