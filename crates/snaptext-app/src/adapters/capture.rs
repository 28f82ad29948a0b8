//! 캡처 장치 어댑터 — xcap 기반.
//!
//! 캡처 결과를 미리 할당된 슬롯 경로에 PNG로 기록한다.

use async_trait::async_trait;
use std::path::Path;
use tracing::debug;
use xcap::Monitor;

use snaptext_core::error::CoreError;
use snaptext_core::models::acquisition::CaptureOutcome;
use snaptext_core::ports::capture::CaptureDevice;

/// 스크린 캡처 장치
pub struct ScreenCaptureDevice {
    /// 캡처 대상 모니터 인덱스 (None이면 주 모니터)
    monitor_index: Option<usize>,
}

impl ScreenCaptureDevice {
    /// 새 캡처 장치 생성
    pub fn new(monitor_index: Option<usize>) -> Self {
        Self { monitor_index }
    }

    /// 대상 모니터 선택
    fn pick_monitor(index: Option<usize>) -> Result<Monitor, CoreError> {
        let monitors = Monitor::all()
            .map_err(|e| CoreError::Capture(format!("모니터 목록 조회 실패: {e}")))?;

        match index {
            Some(i) => monitors
                .into_iter()
                .nth(i)
                .ok_or_else(|| CoreError::Capture(format!("모니터 인덱스 {i} 없음"))),
            None => monitors
                .into_iter()
                .find(|m| m.is_primary().unwrap_or(false))
                .or_else(|| Monitor::all().ok()?.into_iter().next())
                .ok_or_else(|| CoreError::Capture("모니터를 찾을 수 없음".to_string())),
        }
    }
}

impl Default for ScreenCaptureDevice {
    fn default() -> Self {
        Self::new(None)
    }
}

#[async_trait]
impl CaptureDevice for ScreenCaptureDevice {
    async fn capture_into(&self, slot: &Path) -> Result<CaptureOutcome, CoreError> {
        let slot = slot.to_path_buf();
        let index = self.monitor_index;

        tokio::task::spawn_blocking(move || {
            let monitor = Self::pick_monitor(index)?;

            let image = monitor
                .capture_image()
                .map_err(|e| CoreError::Capture(format!("스크린 캡처 실패: {e}")))?;

            debug!("스크린 캡처 완료: {}x{}", image.width(), image.height());

            image
                .save(&slot)
                .map_err(|e| CoreError::Capture(format!("캡처 슬롯 기록 실패: {e}")))?;

            Ok(CaptureOutcome::Captured)
        })
        .await
        .map_err(|e| CoreError::Capture(format!("캡처 작업 조인 실패: {e}")))?
    }

    fn device_name(&self) -> &str {
        "screen"
    }
}
