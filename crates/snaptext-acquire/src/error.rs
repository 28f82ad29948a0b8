//! 획득 에러 타입.

use snaptext_core::error::CoreError;
use snaptext_core::models::permission::Capability;
use thiserror::Error;

/// 획득 흐름 에러
///
/// 취소는 에러가 아니므로 여기 없다 — `Acquisition::Cancelled`로 보고된다.
#[derive(Debug, Error)]
pub enum AcquireError {
    /// 사용자가 필요한 능력을 명시적으로 거부함.
    /// 해당 시도에서는 종료 — 재시도는 사용자가 다시 시작해야 한다.
    #[error("권한 거부됨: {}", format_capabilities(.0))]
    PermissionDenied(Vec<Capability>),

    /// 플랫폼 어댑터 실패
    #[error(transparent)]
    Core(#[from] CoreError),
}

fn format_capabilities(capabilities: &[Capability]) -> String {
    capabilities
        .iter()
        .map(|c| c.label())
        .collect::<Vec<_>>()
        .join(", ")
}
