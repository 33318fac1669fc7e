//! 리포지토리 계층 모듈
//!
//! MongoDB를 주 저장소로, Redis를 읽기 캐시로 사용하는
//! 데이터 액세스 계층입니다. 각 리포지토리는 싱글톤 매크로를 통해
//! `ServiceLocator`에 등록되며 `instance()`로 접근합니다.

pub mod progress;
pub mod profiles;
pub mod accounts;

use mongodb::bson::{oid::ObjectId, Bson};

use crate::core::errors::AppError;

/// 삽입 결과에서 할당된 ObjectId를 추출합니다.
///
/// MongoDB는 이 서비스의 모든 컬렉션에 ObjectId를 할당하므로
/// 다른 타입이 돌아오는 것은 저장소 이상 상황입니다. 조용히
/// ID 없는 기록을 반환하는 대신 `InternalError`로 표면화합니다.
pub(crate) fn inserted_object_id(inserted_id: Bson) -> Result<ObjectId, AppError> {
    match inserted_id {
        Bson::ObjectId(object_id) => Ok(object_id),
        other => Err(AppError::InternalError(format!(
            "삽입된 문서의 ID가 ObjectId가 아닙니다: {:?}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inserted_object_id_extracts_object_id() {
        let object_id = ObjectId::new();

        let extracted = inserted_object_id(Bson::ObjectId(object_id)).unwrap();

        assert_eq!(extracted, object_id);
    }

    #[test]
    fn test_inserted_object_id_rejects_non_object_id() {
        let result = inserted_object_id(Bson::String("42".to_string()));

        assert!(matches!(result, Err(AppError::InternalError(_))));
    }
}
