//! 인증 컨텍스트 모델 모듈

pub mod authenticated_account;
pub mod authentication_request;

pub use authenticated_account::*;
pub use authentication_request::*;
