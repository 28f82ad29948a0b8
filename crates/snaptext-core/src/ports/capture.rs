//! 캡처 장치 포트.
//!
//! 구현: `snaptext-app` (xcap 스크린 캡처)

use async_trait::async_trait;
use std::path::Path;

use crate::error::CoreError;
use crate::models::acquisition::CaptureOutcome;

/// 캡처 장치 — 미리 할당된 저장소 슬롯에 이미지를 기록한다
#[async_trait]
pub trait CaptureDevice: Send + Sync {
    /// 캡처를 실행하고 결과를 `slot` 경로에 기록한다.
    ///
    /// 사용자가 캡처를 중단하면 `CaptureOutcome::Cancelled`를 반환하며
    /// 슬롯은 비워 둔다.
    async fn capture_into(&self, slot: &Path) -> Result<CaptureOutcome, CoreError>;

    /// 장치 이름 (예: "screen", "mock")
    fn device_name(&self) -> &str;
}
