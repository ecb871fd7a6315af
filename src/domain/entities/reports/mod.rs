//! Reports Entity Module
//!
//! 승인 워크플로우 도메인의 엔티티를 정의하는 모듈입니다.

pub mod report;
