//! 사용자 알림 어댑터 — 터미널 출력.

use async_trait::async_trait;
use tracing::{info, warn};

use snaptext_core::error::CoreError;
use snaptext_core::ports::notifier::UserNotifier;

/// 터미널 알림
///
/// 안내는 stderr로 내보내 stdout의 인식 결과와 섞이지 않게 한다.
pub struct TerminalNotifier;

impl TerminalNotifier {
    /// 새 알림기 생성
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserNotifier for TerminalNotifier {
    async fn show_notice(&self, message: &str) -> Result<(), CoreError> {
        info!("{message}");
        eprintln!("💬 {message}");
        Ok(())
    }

    async fn show_error(&self, message: &str) -> Result<(), CoreError> {
        warn!("{message}");
        eprintln!("⚠️  {message}");
        Ok(())
    }
}
