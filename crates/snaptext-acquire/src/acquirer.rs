//! 이미지 획득기.
//!
//! 경로별 확인 → 실행 2단계 프로토콜.
//! 방금 허용된 권한에 대해서는 정확히 1회 자동 재시도하며,
//! 거부/취소 후에는 재시도하지 않는다 — 사용자가 다시 시작해야 한다.

use std::sync::Arc;
use tracing::debug;

use snaptext_core::models::acquisition::{Acquisition, CaptureOutcome, ImageSource};
use snaptext_core::models::image_ref::ImageReference;
use snaptext_core::models::permission::RequestOutcome;
use snaptext_core::ports::capture::CaptureDevice;
use snaptext_core::ports::picker::MediaPicker;

use crate::error::AcquireError;
use crate::gate::PermissionGate;
use crate::slots::CaptureSlots;

/// 이미지 획득기 — 권한 게이트와 플랫폼 획득 UI 조합
pub struct ImageAcquirer {
    gate: PermissionGate,
    device: Arc<dyn CaptureDevice>,
    picker: Arc<dyn MediaPicker>,
    slots: CaptureSlots,
}

impl ImageAcquirer {
    /// 새 획득기 생성
    pub fn new(
        gate: PermissionGate,
        device: Arc<dyn CaptureDevice>,
        picker: Arc<dyn MediaPicker>,
        slots: CaptureSlots,
    ) -> Self {
        Self {
            gate,
            device,
            picker,
            slots,
        }
    }

    /// 권한 게이트 접근 (상태 조회용)
    pub fn gate(&self) -> &PermissionGate {
        &self.gate
    }

    /// 지정한 경로로 이미지 획득 시도
    ///
    /// 필요 능력이 부족하면 프롬프트를 거치고, 전부 허용된 경우에만
    /// 획득 UI를 1회 실행한다. 거부는 에러, 취소는 결과다.
    pub async fn acquire(&self, source: ImageSource) -> Result<Acquisition, AcquireError> {
        debug!("이미지 획득 시작: {}", source.label());

        let required = source.required_capabilities();
        if !self.gate.all_granted(required) {
            match self.gate.request(required).await? {
                // 방금 허용됨 — 아래에서 1회 재시도
                RequestOutcome::AllGranted => {}
                RequestOutcome::Denied(denied) => {
                    return Err(AcquireError::PermissionDenied(denied));
                }
                RequestOutcome::Cancelled => {
                    return Ok(Acquisition::Cancelled);
                }
            }
        }

        match source {
            ImageSource::Camera => self.capture_into_slot().await,
            ImageSource::Gallery => self.pick_from_storage().await,
        }
    }

    /// 슬롯을 먼저 확보한 뒤 캡처 요청을 띄운다
    async fn capture_into_slot(&self) -> Result<Acquisition, AcquireError> {
        let slot = self.slots.allocate()?;

        match self.device.capture_into(&slot).await? {
            CaptureOutcome::Captured => {
                debug!("캡처 완료: {}", slot.display());
                Ok(Acquisition::Acquired(ImageReference::captured(slot)))
            }
            CaptureOutcome::Cancelled => {
                debug!("캡처 취소됨");
                self.slots.discard(&slot);
                Ok(Acquisition::Cancelled)
            }
        }
    }

    /// 이미지 콘텐츠로 제한된 선택 UI를 띄운다
    async fn pick_from_storage(&self) -> Result<Acquisition, AcquireError> {
        match self.picker.pick_image().await? {
            Some(reference) => {
                debug!("이미지 선택됨: {}", reference.path().display());
                Ok(Acquisition::Acquired(reference))
            }
            None => {
                debug!("선택 취소됨");
                Ok(Acquisition::Cancelled)
            }
        }
    }
}
