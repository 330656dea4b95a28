//! 계정 관리 서비스 모듈
//!
//! 계정 생명주기와 관련된 비즈니스 로직을 담당하는 서비스를 제공합니다.
//! 프로필 조회/수정, 팔로우 아티스트 관리, 계정 탈퇴를 구현합니다.
//!
//! # Features
//!
//! - 프로필 간단/상세 조회
//! - 닉네임, 프로필 이미지 수정
//! - 팔로우 아티스트 조회/추가/일괄 삭제
//! - 계정 탈퇴 (연동 해제 + 토큰 회수 + 소프트 삭제)

pub mod account_service;

pub use account_service::*;
