//! 캡처 슬롯 사전 할당.
//!
//! 캡처 요청을 띄우기 전에 결과가 기록될 저장소 슬롯을 먼저 확보한다.
//! 슬롯은 고유한 파일 경로이며, 캡처가 취소되면 버린다.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use snaptext_core::error::CoreError;

/// 캡처 슬롯 할당기
pub struct CaptureSlots {
    /// 슬롯 파일이 생성되는 디렉토리
    slot_dir: PathBuf,
}

impl CaptureSlots {
    /// 새 할당기 생성 (디렉토리는 첫 할당 때 만든다)
    pub fn new(slot_dir: PathBuf) -> Self {
        Self { slot_dir }
    }

    /// 새 슬롯 경로 할당
    ///
    /// 디렉토리를 보장하고 고유 경로를 돌려준다. 파일 자체는
    /// 캡처 장치가 기록할 때 생긴다.
    pub fn allocate(&self) -> Result<PathBuf, CoreError> {
        if !self.slot_dir.exists() {
            fs::create_dir_all(&self.slot_dir).map_err(|e| {
                CoreError::Capture(format!(
                    "슬롯 디렉토리 생성 실패: {}: {}",
                    self.slot_dir.display(),
                    e
                ))
            })?;
        }

        let slot = self
            .slot_dir
            .join(format!("cap_{}.png", uuid::Uuid::new_v4()));
        debug!("캡처 슬롯 할당: {}", slot.display());
        Ok(slot)
    }

    /// 사용되지 않은(또는 부분 기록된) 슬롯 정리
    ///
    /// 파일이 없으면 아무것도 하지 않는다.
    pub fn discard(&self, slot: &Path) {
        if slot.exists() {
            if let Err(e) = fs::remove_file(slot) {
                debug!("슬롯 정리 실패 (무시): {}: {}", slot.display(), e);
            }
        }
    }

    /// 슬롯 디렉토리 경로
    pub fn slot_dir(&self) -> &Path {
        &self.slot_dir
    }
}
