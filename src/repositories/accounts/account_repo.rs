//! 계정 리포지토리 구현

use std::sync::Arc;
use futures_util::TryStreamExt;
use mongodb::{bson::{doc, oid::ObjectId}, options::IndexOptions, IndexModel};
use crate::{
    caching::redis::RedisClient,
    core::errors::AppError,
    core::registry::Repository,
    db::Database,
    domain::entities::accounts::Account,
};
use singleton_macro::repository;

/// 계정 데이터 액세스 리포지토리
///
/// 캐시 키 패턴: `account:{id}`, TTL 600초.
#[repository(name = "account", collection = "accounts")]
pub struct AccountRepository {
    /// MongoDB 데이터베이스 연결 (자동 주입)
    db: Arc<Database>,

    /// Redis 캐시 클라이언트 (자동 주입)
    redis: Arc<RedisClient>,
}

impl AccountRepository {
    /// 전체 계정 조회
    pub async fn find_all(&self) -> Result<Vec<Account>, AppError> {
        let cursor = self.collection::<Account>()
            .find(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// ID로 계정 조회 (캐시 우선)
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Account>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let cache_key = self.cache_key(id);

        if let Ok(Some(cached)) = self.redis.get::<Account>(&cache_key).await {
            return Ok(Some(cached));
        }

        let account = self.collection::<Account>()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref account) = account {
            let _ = self.redis
                .set_with_expiry(&cache_key, account, 600)
                .await;
        }

        Ok(account)
    }

    /// 계정 저장 (삽입 또는 전체 교체)
    pub async fn save(&self, mut account: Account) -> Result<Account, AppError> {
        match account.id {
            None => {
                let result = self.collection::<Account>()
                    .insert_one(&account)
                    .await
                    .map_err(|e| AppError::DatabaseError(e.to_string()))?;

                account.id = Some(crate::repositories::inserted_object_id(result.inserted_id)?);
            }
            Some(object_id) => {
                self.collection::<Account>()
                    .replace_one(doc! { "_id": object_id }, &account)
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

        Ok(account)
    }

    /// 계정 삭제
    pub async fn delete_by_id(&self, id: &str) -> Result<bool, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let result = self.collection::<Account>()
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
    ///
    /// 사용자명 조회 최적화를 위한 인덱스를 생성합니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let user_name_index = IndexModel::builder()
            .keys(doc! { "userName": 1 })
            .options(IndexOptions::builder()
                .name("userName_asc".to_string())
                .build())
            .build();

        self.collection::<Account>()
            .create_indexes([user_name_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
