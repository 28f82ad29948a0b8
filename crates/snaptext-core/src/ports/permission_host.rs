//! 플랫폼 권한 프롬프트 포트.
//!
//! 구현: `snaptext-app` (rfd 네이티브 다이얼로그)

use async_trait::async_trait;

use crate::error::CoreError;
use crate::models::permission::{Capability, PromptResponse};

/// 플랫폼 권한 호스트 — 현재 부여 상태 조회 + 프롬프트 요청
#[async_trait]
pub trait PermissionHost: Send + Sync {
    /// 플랫폼이 현재 해당 능력을 부여하고 있는지
    fn is_granted(&self, capability: Capability) -> bool;

    /// OS 수준 프롬프트를 띄우고 사용자의 응답을 기다린다.
    ///
    /// 선택 없이 닫힌 프롬프트는 `PromptResponse::Dismissed`로 보고한다.
    async fn request(&self, capabilities: &[Capability]) -> Result<PromptResponse, CoreError>;
}
