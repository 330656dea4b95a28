//! 엔티티 감사 정보 값 타입
//!
//! 생성/수정/삭제 일시를 하나의 값 타입으로 묶어 각 엔티티에 포함시킵니다.
//! 삭제 일시가 설정된 엔티티는 소프트 삭제된 것으로 취급합니다.

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

/// 엔티티 공통 감사 정보
///
/// 엔티티가 상속 대신 합성으로 포함하는 값 타입입니다.
/// 모든 변경은 명시적인 메서드를 통해서만 이루어집니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditInfo {
    /// 생성 일시
    pub create_date: DateTime,
    /// 마지막 수정 일시
    pub update_date: DateTime,
    /// 삭제(탈퇴) 일시 - 설정되어 있으면 소프트 삭제 상태
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_date: Option<DateTime>,
}

impl AuditInfo {
    /// 현재 시각 기준의 새 감사 정보를 생성합니다.
    pub fn now() -> Self {
        let now = DateTime::now();

        Self {
            create_date: now,
            update_date: now,
            delete_date: None,
        }
    }

    /// 수정 일시를 현재 시각으로 갱신합니다.
    pub fn touch(&mut self) {
        self.update_date = DateTime::now();
    }

    /// 삭제 일시를 현재 시각으로 설정합니다.
    ///
    /// 소프트 삭제 마킹이며, 이후 `is_deleted()`는 true를 반환합니다.
    pub fn mark_deleted(&mut self) {
        self.delete_date = Some(DateTime::now());
        self.update_date = DateTime::now();
    }

    /// 소프트 삭제 여부를 확인합니다.
    pub fn is_deleted(&self) -> bool {
        self.delete_date.is_some()
    }
}

impl Default for AuditInfo {
    fn default() -> Self {
        Self::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_audit_info_is_not_deleted() {
        let audit = AuditInfo::now();

        assert!(!audit.is_deleted());
        assert!(audit.delete_date.is_none());
        assert_eq!(audit.create_date, audit.update_date);
    }

    #[test]
    fn test_mark_deleted_sets_delete_date() {
        let mut audit = AuditInfo::now();

        audit.mark_deleted();

        assert!(audit.is_deleted());
        assert!(audit.delete_date.is_some());
    }

    #[test]
    fn test_touch_updates_only_update_date() {
        let mut audit = AuditInfo::now();
        let created = audit.create_date;

        audit.touch();

        assert_eq!(audit.create_date, created);
        assert!(audit.update_date >= created);
        assert!(!audit.is_deleted());
    }
}
