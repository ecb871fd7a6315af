//! 캐싱 계층 모듈
//!
//! Redis를 백엔드로 하는 읽기 경로 캐시와 JSON 기반 객체 직렬화를 제공합니다.
//!
//! # 주요 기능
//!
//! - Redis 통합 및 멀티플렉싱 연결 관리
//! - JSON 기반 자동 직렬화/역직렬화
//! - TTL 지원 및 쓰기 경로 캐시 무효화
//!
//! # 환경 설정
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! ```

pub mod redis;
