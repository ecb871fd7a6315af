//! # 보고서 리포지토리 구현
//!
//! 보고서 엔티티의 데이터 액세스 계층입니다.
//! 승인 처리가 주 연산이므로 캐싱 없이 MongoDB를 직접 사용합니다.

use std::sync::Arc;
use mongodb::{
    bson::{doc, DateTime},
    options::{FindOneAndUpdateOptions, ReturnDocument},
    Collection,
};
use crate::{
    core::errors::AppError,
    db::Database,
    domain::entities::reports::report::Report,
};

/// 보고서 컬렉션 이름
const COLLECTION_NAME: &str = "reports";

/// 보고서 데이터 액세스 리포지토리
pub struct ReportRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
}

impl ReportRepository {
    /// 새 리포지토리 인스턴스 생성
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// `reports` 컬렉션 핸들 반환
    fn collection(&self) -> Collection<Report> {
        self.db.get_database().collection::<Report>(COLLECTION_NAME)
    }

    /// 보고서 승인 상태 변경
    ///
    /// `approved` 플래그와 파생된 `status` 값을 원자적으로 갱신하고
    /// 갱신 후의 최신 문서를 반환합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(Report))` - 갱신된 보고서
    /// * `Ok(None)` - 해당 ID의 보고서가 존재하지 않음
    /// * `Err(AppError::DatabaseError)` - 데이터베이스 오류
    pub async fn set_approval(
        &self,
        id: i64,
        approved: bool,
        status: &str,
    ) -> Result<Option<Report>, AppError> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection()
            .find_one_and_update(
                doc! { "_id": id },
                doc! { "$set": {
                    "approved": approved,
                    "status": status,
                    "updated_at": DateTime::now(),
                } },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}
