//! 권한 게이트.
//!
//! 능력별 tri-state 캐시와 요청/응답 사이클 중재.
//! 캐시는 프롬프트 응답 경로에서만 갱신된다 — 조회는 항상 플랫폼을 직접 읽는다.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

use snaptext_core::error::CoreError;
use snaptext_core::models::permission::{
    Capability, CapabilityState, PromptResponse, RequestOutcome,
};
use snaptext_core::ports::permission_host::PermissionHost;

/// 권한 게이트 — 플랫폼 호스트 + 상태 캐시
pub struct PermissionGate {
    host: Arc<dyn PermissionHost>,
    states: Mutex<HashMap<Capability, CapabilityState>>,
}

impl PermissionGate {
    /// 새 게이트 생성 (모든 능력 Unknown)
    pub fn new(host: Arc<dyn PermissionHost>) -> Self {
        Self {
            host,
            states: Mutex::new(HashMap::new()),
        }
    }

    /// 요청한 능력이 전부 현재 부여되어 있는지 (플랫폼 직접 조회)
    pub fn all_granted(&self, capabilities: &[Capability]) -> bool {
        capabilities.iter().all(|c| self.host.is_granted(*c))
    }

    /// 캐시된 능력 상태
    pub fn state_of(&self, capability: Capability) -> CapabilityState {
        self.states
            .lock()
            .get(&capability)
            .copied()
            .unwrap_or_default()
    }

    /// 캐시 전체 스냅샷
    pub fn snapshot(&self) -> HashMap<Capability, CapabilityState> {
        self.states.lock().clone()
    }

    /// OS 프롬프트를 띄우고 결과를 하나의 결과로 접는다.
    ///
    /// - 요청한 능력 전부 허용 → `AllGranted`
    /// - 하나라도 거부(또는 응답 누락) → `Denied` — 부분 허용도 거부다
    /// - 선택 없이 닫힘 → `Cancelled`, 상태 전이 없음
    pub async fn request(
        &self,
        capabilities: &[Capability],
    ) -> Result<RequestOutcome, CoreError> {
        debug!("권한 요청: {:?}", capabilities);

        match self.host.request(capabilities).await? {
            PromptResponse::Dismissed => {
                debug!("권한 프롬프트 닫힘 (선택 없음)");
                Ok(RequestOutcome::Cancelled)
            }
            PromptResponse::Answered(decisions) => {
                let mut states = self.states.lock();
                for decision in &decisions {
                    let state = if decision.granted {
                        CapabilityState::Granted
                    } else {
                        CapabilityState::Denied
                    };
                    states.insert(decision.capability, state);
                }
                drop(states);

                let denied: Vec<Capability> = capabilities
                    .iter()
                    .copied()
                    .filter(|c| {
                        !decisions
                            .iter()
                            .any(|d| d.capability == *c && d.granted)
                    })
                    .collect();

                if denied.is_empty() {
                    debug!("권한 전부 허용됨");
                    Ok(RequestOutcome::AllGranted)
                } else {
                    debug!("권한 거부됨: {:?}", denied);
                    Ok(RequestOutcome::Denied(denied))
                }
            }
        }
    }
}
