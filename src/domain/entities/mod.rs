//! # Domain Entities Module
//!
//! 이 모듈은 비즈니스 도메인의 핵심 엔티티들을 정의합니다.
//! MongoDB 문서와 직접 매핑되는 데이터 구조체들을 포함합니다.
//!
//! ## 주요 역할
//!
//! - **도메인 모델링**: 비즈니스 도메인의 핵심 개념들을 Rust 구조체로 표현
//! - **데이터베이스 매핑**: MongoDB 컬렉션과 1:1 대응되는 문서 구조 정의
//! - **직렬화/역직렬화**: BSON ↔ Rust 구조체 변환 지원
//!
//! ## MongoDB 통합
//!
//! 모든 엔티티는 다음 특징을 가집니다:
//! - **BSON 직렬화**: `serde`와 `bson` 크레이트를 통한 자동 변환
//! - **정수 `_id`**: 외부에서 부여된 정수 식별자를 `_id`로 직접 사용
//! - **타임스탬프**: `created_at`/`updated_at`을 BSON DateTime으로 저장
//!
//! ## 모듈 구조
//!
//! ```text
//! entities/
//! ├── mod.rs          ← 이 파일
//! ├── users/          ← 사용자 엔티티
//! │   └── user.rs
//! └── reports/        ← 리포트 엔티티
//!     └── report.rs
//! ```
//!
//! ## 주의사항
//!
//! - **순환 참조 금지**: 엔티티 간 직접 참조보다는 ID 참조 사용
//! - **인덱스 설계**: 쿼리 패턴에 맞는 인덱스는 리포지토리의
//!   `create_indexes`에서 생성

pub mod users;
pub mod reports;
