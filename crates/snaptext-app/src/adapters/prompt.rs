//! 권한 프롬프트 어댑터 — rfd 메시지 다이얼로그.
//!
//! 데스크톱에는 모바일식 권한 모델이 없으므로, 요청 시 네이티브
//! 다이얼로그로 묻고 허용 결과를 세션 동안 기억한다.

use async_trait::async_trait;
use parking_lot::Mutex;
use rfd::{AsyncMessageDialog, MessageButtons, MessageDialogResult, MessageLevel};
use std::collections::HashSet;
use tracing::debug;

use snaptext_core::error::CoreError;
use snaptext_core::models::permission::{Capability, CapabilityDecision, PromptResponse};
use snaptext_core::ports::permission_host::PermissionHost;

/// 다이얼로그 기반 권한 호스트
pub struct DialogPermissionHost {
    /// 세션 동안 허용된 능력
    granted: Mutex<HashSet<Capability>>,
}

impl DialogPermissionHost {
    /// 새 호스트 생성 (아무 것도 부여되지 않음)
    pub fn new() -> Self {
        Self {
            granted: Mutex::new(HashSet::new()),
        }
    }
}

impl Default for DialogPermissionHost {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PermissionHost for DialogPermissionHost {
    fn is_granted(&self, capability: Capability) -> bool {
        self.granted.lock().contains(&capability)
    }

    async fn request(&self, capabilities: &[Capability]) -> Result<PromptResponse, CoreError> {
        let labels = capabilities
            .iter()
            .map(|c| c.label())
            .collect::<Vec<_>>()
            .join(", ");

        let result = AsyncMessageDialog::new()
            .set_level(MessageLevel::Info)
            .set_title("권한 요청")
            .set_description(format!("snaptext가 다음 접근을 요청합니다: {labels}"))
            .set_buttons(MessageButtons::YesNo)
            .show()
            .await;

        let response = match result {
            MessageDialogResult::Yes => {
                let mut granted = self.granted.lock();
                granted.extend(capabilities.iter().copied());
                PromptResponse::Answered(
                    capabilities
                        .iter()
                        .map(|c| CapabilityDecision {
                            capability: *c,
                            granted: true,
                        })
                        .collect(),
                )
            }
            MessageDialogResult::No => PromptResponse::Answered(
                capabilities
                    .iter()
                    .map(|c| CapabilityDecision {
                        capability: *c,
                        granted: false,
                    })
                    .collect(),
            ),
            // 선택 없이 닫힘
            other => {
                debug!("권한 다이얼로그 닫힘: {other:?}");
                PromptResponse::Dismissed
            }
        };

        Ok(response)
    }
}
