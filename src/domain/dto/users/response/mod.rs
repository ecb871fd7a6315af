//! # 사용자 관련 응답 DTO 모듈
//!
//! 이 모듈은 사용자 도메인과 관련된 HTTP 응답 데이터 전송 객체(DTO)들을 정의합니다.
//! 비즈니스 로직 처리 결과를 클라이언트에게 일관된 형태로 전달합니다.
//!
//! ## JSON 응답 예제
//!
//! ```json
//! {
//!   "id": 42,
//!   "email": "user@example.com",
//!   "name": "홍길동",
//!   "created_at": { "$date": { "$numberLong": "1717236000000" } },
//!   "updated_at": { "$date": { "$numberLong": "1717754400000" } }
//! }
//! ```

pub mod user_response;

pub use user_response::UserResponse;
