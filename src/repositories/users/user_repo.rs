//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! MongoDB를 주 저장소로 사용하고, Redis를 통한 캐싱을 지원합니다.
//!
//! ## 특징
//!
//! - **하이브리드 스토리지**: MongoDB + Redis 캐싱
//! - **스마트 캐싱**: ID 조회 성능 최적화를 위한 읽기 우선 캐싱
//! - **데이터 무결성**: 유니크 제약 조건 및 인덱스 관리

use std::sync::Arc;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};
use crate::{
    caching::redis::RedisClient,
    core::errors::AppError,
    db::Database,
    domain::entities::users::user::User,
};

/// 사용자 컬렉션 이름
const COLLECTION_NAME: &str = "users";

/// 개별 사용자 캐시 TTL (초)
const USER_CACHE_TTL: u64 = 600;

/// 사용자 데이터 액세스 리포지토리
///
/// 사용자 엔티티의 CRUD 연산을 담당하며, MongoDB 컬렉션과
/// Redis 캐시를 통합하여 최적화된 데이터 액세스를 제공합니다.
///
/// ## 캐싱 전략
///
/// ### L1 Cache (Redis)
/// - **TTL**: 10분 (600초)
/// - **키 패턴**: 개별 사용자 `user:id:{id}`
///
/// ### L2 Storage (MongoDB)
/// - **컬렉션명**: `users`
/// - **인덱스**: email(unique), created_at(desc)
///
/// 목록 조회는 필터 조합에 따라 결과가 달라지므로 캐싱하지 않고
/// 항상 MongoDB에서 직접 조회합니다.
///
/// ## 에러 처리
///
/// 모든 메서드는 `Result<T, AppError>` 타입을 반환하며,
/// MongoDB 오류는 `DatabaseError`로 변환됩니다.
pub struct UserRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,

    /// Redis 캐시 클라이언트
    redis: Arc<RedisClient>,
}

impl UserRepository {
    /// 새 리포지토리 인스턴스 생성
    pub fn new(db: Arc<Database>, redis: Arc<RedisClient>) -> Self {
        Self { db, redis }
    }

    /// `users` 컬렉션 핸들 반환
    fn collection(&self) -> Collection<User> {
        self.db.get_database().collection::<User>(COLLECTION_NAME)
    }

    /// ID 기반 캐시 키 생성
    fn cache_key(id: i64) -> String {
        format!("user:id:{}", id)
    }

    /// 전체 사용자 조회
    ///
    /// 이메일 필터가 주어지면 해당 이메일과 정확히 일치하는 사용자만,
    /// 없으면 전체 사용자를 ID 오름차순으로 반환합니다.
    ///
    /// # 인자
    ///
    /// * `email` - 정확히 일치해야 하는 이메일 필터 (선택)
    ///
    /// # 반환값
    ///
    /// * `Ok(Vec<User>)` - 조건에 맞는 사용자 목록 (없으면 빈 벡터)
    /// * `Err(AppError::DatabaseError)` - 데이터베이스 오류
    pub async fn find_all(&self, email: Option<&str>) -> Result<Vec<User>, AppError> {
        let filter = match email {
            Some(email) => doc! { "email": email },
            None => doc! {},
        };

        let cursor = self.collection()
            .find(filter)
            .sort(doc! { "_id": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// ID로 사용자 조회
    ///
    /// 가장 빈번한 조회 패턴이므로 캐시 우선 조회를 적용합니다.
    ///
    /// # 인자
    ///
    /// * `id` - 조회할 사용자의 숫자 ID
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(User))` - 사용자를 찾은 경우
    /// * `Ok(None)` - 해당 ID의 사용자가 없는 경우
    /// * `Err(AppError::DatabaseError)` - 데이터베이스 오류
    ///
    /// # 캐싱 정책
    ///
    /// - **캐시 키**: `user:id:{id}`
    /// - **TTL**: 600초 (10분)
    /// - **캐시 미스**: MongoDB에서 조회 후 캐시에 저장
    pub async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let cache_key = Self::cache_key(id);

        // 캐시에서 먼저 확인
        if let Ok(Some(cached)) = self.redis.get::<User>(&cache_key).await {
            return Ok(Some(cached));
        }

        // DB 에서 조회
        let user = self.collection()
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        // 캐시에 저장 (10분)
        if let Some(ref user) = user {
            let _ = self.redis
                .set_with_expiry(&cache_key, user, USER_CACHE_TTL)
                .await;
        }

        Ok(user)
    }

    /// 사용자 정보 업데이트
    ///
    /// 기존 사용자의 정보를 부분적으로 업데이트하고
    /// 업데이트 후의 최신 문서를 반환합니다.
    ///
    /// # 인자
    ///
    /// * `id` - 업데이트할 사용자의 숫자 ID
    /// * `update_doc` - 변경할 필드들을 담은 MongoDB Document
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(User))` - 업데이트된 사용자 정보
    /// * `Ok(None)` - 해당 ID의 사용자가 존재하지 않음
    /// * `Err(AppError::DatabaseError)` - 데이터베이스 오류
    ///
    /// # 업데이트 연산
    ///
    /// - **MongoDB `$set` 연산자 사용**: 지정된 필드만 변경
    /// - **원자적 연산**: find_one_and_update로 조회와 업데이트를 동시에
    /// - **최신 데이터 반환**: ReturnDocument::After 옵션 사용
    pub async fn update(&self, id: i64, update_doc: Document) -> Result<Option<User>, AppError> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        let updated_user = self.collection()
            .find_one_and_update(
                doc! { "_id": id },
                doc! { "$set": update_doc },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        // 캐시 무효화
        if updated_user.is_some() {
            let _ = self.redis.del(&Self::cache_key(id)).await;
        }

        Ok(updated_user)
    }

    /// 사용자 삭제
    ///
    /// 지정된 ID의 사용자를 데이터베이스에서 영구적으로 삭제합니다.
    /// 삭제 성공 시 해당 사용자의 캐시를 무효화합니다.
    ///
    /// # 인자
    ///
    /// * `id` - 삭제할 사용자의 숫자 ID
    ///
    /// # 반환값
    ///
    /// * `Ok(true)` - 사용자가 성공적으로 삭제됨
    /// * `Ok(false)` - 해당 ID의 사용자가 존재하지 않음
    /// * `Err(AppError::DatabaseError)` - 데이터베이스 오류
    pub async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = self.collection()
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.deleted_count > 0 {
            // 캐시 무효화
            let _ = self.redis.del(&Self::cache_key(id)).await;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 사용자 컬렉션에 필요한 인덱스를 생성합니다.
    /// 애플리케이션 초기화 시점에 한 번 실행하여 쿼리 성능을 최적화합니다.
    ///
    /// # 생성되는 인덱스
    ///
    /// 1. **이메일 유니크 인덱스**: 중복 이메일 방지 및 필터 조회 최적화
    /// 2. **생성일 인덱스**: 최근 사용자 조회 및 정렬 최적화
    ///
    /// # 반환값
    ///
    /// * `Ok(())` - 모든 인덱스가 성공적으로 생성됨
    /// * `Err(AppError::DatabaseError)` - 인덱스 생성 중 오류 발생
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let collection = self.collection();

        // 이메일 유니크 인덱스
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        // 생성일 인덱스
        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        collection
            .create_indexes([email_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
