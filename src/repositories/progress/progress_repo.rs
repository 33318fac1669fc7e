//! # 학습 진행 기록 리포지토리 구현
//!
//! 학습 진행 기록 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! MongoDB를 주 저장소로 사용하고, Redis를 통한 캐싱을 지원합니다.
//!
//! ## 특징
//!
//! - **하이브리드 스토리지**: MongoDB + Redis 캐싱
//! - **자동 의존성 주입**: 싱글톤 매크로를 통한 DI
//! - **읽기 우선 캐싱**: ID 조회 시 캐시 우선 확인, 쓰기 시 무효화

use std::sync::Arc;
use futures_util::TryStreamExt;
use mongodb::{bson::{doc, oid::ObjectId}, options::IndexOptions, IndexModel};
use crate::{
    caching::redis::RedisClient,
    core::errors::AppError,
    core::registry::Repository,
    db::Database,
    domain::entities::progress::LearningProgress,
};
use singleton_macro::repository;

/// 학습 진행 기록 데이터 액세스 리포지토리
///
/// `learningProgresses` 컬렉션의 CRUD 연산을 담당하며,
/// MongoDB 컬렉션과 Redis 캐시를 통합하여 데이터 액세스를 제공합니다.
///
/// ## 캐싱 전략
///
/// - **개별 기록**: `progress:{id}`, TTL 600초 (10분)
/// - **쓰기 후 무효화**: 저장/삭제 시 해당 키와 컬렉션 캐시 제거
/// - **목록 조회는 캐싱하지 않음**: 사용자별 조회 빈도가 낮고 변동이 잦음
///
/// ## 인덱스
///
/// - `userId` (오름차순): 사용자별 기록 조회 최적화
///
/// ## 사용 예제
///
/// ```rust,ignore
/// use crate::repositories::progress::ProgressRepository;
///
/// let repo = ProgressRepository::instance();
/// let records = repo.find_by_user_id("user-123").await?;
/// ```
#[repository(name = "progress", collection = "learningProgresses")]
pub struct ProgressRepository {
    /// MongoDB 데이터베이스 연결 (자동 주입)
    db: Arc<Database>,

    /// Redis 캐시 클라이언트 (자동 주입)
    redis: Arc<RedisClient>,
}

impl ProgressRepository {
    /// 전체 진행 기록 조회
    ///
    /// 컬렉션의 모든 기록을 저장 순서대로 반환합니다.
    pub async fn find_all(&self) -> Result<Vec<LearningProgress>, AppError> {
        let cursor = self.collection::<LearningProgress>()
            .find(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// ID로 진행 기록 조회
    ///
    /// 캐시 우선 조회를 수행합니다. 잘못된 ObjectId 형식은
    /// `ValidationError`로 거부됩니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(LearningProgress))` - 기록을 찾은 경우
    /// * `Ok(None)` - 해당 ID의 기록이 없는 경우
    /// * `Err(AppError::ValidationError)` - 잘못된 ObjectId 형식
    pub async fn find_by_id(&self, id: &str) -> Result<Option<LearningProgress>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let cache_key = self.cache_key(id);

        // 캐시 확인
        if let Ok(Some(cached)) = self.redis.get::<LearningProgress>(&cache_key).await {
            return Ok(Some(cached));
        }

        // DB 조회
        let record = self.collection::<LearningProgress>()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        // 캐시 저장 (10분)
        if let Some(ref record) = record {
            let _ = self.redis
                .set_with_expiry(&cache_key, record, 600)
                .await;
        }

        Ok(record)
    }

    /// 사용자별 진행 기록 조회
    ///
    /// 주어진 userId에 속한 모든 기록을 반환합니다.
    /// 해당 사용자의 기록이 없으면 빈 벡터를 반환합니다.
    pub async fn find_by_user_id(&self, user_id: &str) -> Result<Vec<LearningProgress>, AppError> {
        let cursor = self.collection::<LearningProgress>()
            .find(doc! { "userId": user_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 진행 기록 저장
    ///
    /// ID가 없으면 새 문서를 삽입하고 할당된 ObjectId를 채워 반환합니다.
    /// ID가 있으면 해당 문서 전체를 교체합니다. 쓰기 후 관련 캐시를
    /// 무효화합니다.
    pub async fn save(&self, mut record: LearningProgress) -> Result<LearningProgress, AppError> {
        match record.id {
            None => {
                let result = self.collection::<LearningProgress>()
                    .insert_one(&record)
                    .await
                    .map_err(|e| AppError::DatabaseError(e.to_string()))?;

                record.id = Some(crate::repositories::inserted_object_id(result.inserted_id)?);
            }
            Some(object_id) => {
                self.collection::<LearningProgress>()
                    .replace_one(doc! { "_id": object_id }, &record)
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

        // 컬렉션 캐시 무효화
        let _ = self.invalidate_collection_cache(None).await;

        Ok(record)
    }

    /// 진행 기록 삭제
    ///
    /// # 반환값
    ///
    /// * `Ok(true)` - 기록이 삭제됨
    /// * `Ok(false)` - 해당 ID의 기록이 존재하지 않음
    pub async fn delete_by_id(&self, id: &str) -> Result<bool, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let result = self.collection::<LearningProgress>()
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
    /// 애플리케이션 초기화 시점에 한 번 호출됩니다.
    /// `userId` 인덱스로 사용자별 조회를 최적화합니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let user_id_index = IndexModel::builder()
            .keys(doc! { "userId": 1 })
            .options(IndexOptions::builder()
                .name("userId_asc".to_string())
                .build())
            .build();

        self.collection::<LearningProgress>()
            .create_indexes([user_id_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
