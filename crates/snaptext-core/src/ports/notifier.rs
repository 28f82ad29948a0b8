//! 사용자 알림 포트.
//!
//! 구현: `snaptext-app` (터미널 출력)

use async_trait::async_trait;

use crate::error::CoreError;

/// 일시 알림 인터페이스
///
/// 컨트롤러 경계에서 변환된 에러와 안내 문구가 여기로 나간다.
#[async_trait]
pub trait UserNotifier: Send + Sync {
    /// 일반 안내 표시
    async fn show_notice(&self, message: &str) -> Result<(), CoreError>;

    /// 에러 알림 표시
    async fn show_error(&self, message: &str) -> Result<(), CoreError>;
}
