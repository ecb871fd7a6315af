//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 계층형 아키텍처의 웹 계층에 해당하며, ActixWeb 프레임워크를
//! 기반으로 구현되었습니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! HTTP Layer Architecture
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                        ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                     ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   Entities/Models - 도메인 모델                  ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 핸들러 책임 범위
//!
//! 핸들러는 다음 역할만 수행하고 비즈니스 로직은 전부 서비스에 위임합니다:
//!
//! - HTTP 메서드/경로를 핸들러 함수에 바인딩
//! - 경로/쿼리 파라미터와 요청 본문 추출 및 검증
//! - 주입된 서비스 트레이트 객체를 정확히 한 번 호출
//! - trace id를 태깅한 Begin/End 디버그 로그와 처리 시간 기록
//! - 서비스가 감싼 응답을 그대로 JSON으로 직렬화
//!
//! ## 에러 처리
//!
//! - **Result 패턴**: 모든 핸들러가 `Result<HttpResponse, AppError>` 반환
//! - **자동 변환**: `?` 연산자로 서비스 에러를 그대로 전파
//! - **통합 매핑**: `AppError`의 `ResponseError` 구현이 상태 코드 결정
//!
//! ## 모듈 구성
//!
//! - **`users`**: 사용자 관리 엔드포인트
//!   - 사용자 목록 조회 (`GET /users`)
//!   - 사용자 조회 (`GET /users/{id}`)
//!   - 사용자 부분 수정 (`PATCH /users/{id}`)
//!   - 사용자 삭제 (`DELETE /users/{id}`)
//!
//! - **`reports`**: 보고서 승인 엔드포인트
//!   - 보고서 승인/반려 (`PATCH /reports/{id}/approve`)

pub mod reports;
pub mod users;
