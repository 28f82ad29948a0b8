//! 권한(capability) 상태 모델.
//!
//! 플랫폼이 보호하는 장치 능력과 그 부여 상태를 정의한다.
//! 상태 전이는 권한 프롬프트 응답 경로에서만 일어난다.

use serde::{Deserialize, Serialize};

/// 플랫폼 보호 장치 능력
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    /// 캡처 장치 접근
    Camera,
    /// 이미지 저장소 접근
    Storage,
}

impl Capability {
    /// 프롬프트 문구용 표시 이름
    pub fn label(&self) -> &'static str {
        match self {
            Capability::Camera => "카메라",
            Capability::Storage => "저장소",
        }
    }
}

/// 능력별 부여 상태 (tri-state)
///
/// `Unknown`은 아직 프롬프트를 거치지 않은 상태다.
/// 프롬프트 무응답(닫기)은 상태를 바꾸지 않는다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CapabilityState {
    /// 아직 묻지 않음
    #[default]
    Unknown,
    /// 사용자가 허용
    Granted,
    /// 사용자가 거부
    Denied,
}

/// 프롬프트에서 내려온 능력별 결정
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityDecision {
    /// 대상 능력
    pub capability: Capability,
    /// 허용 여부
    pub granted: bool,
}

/// 플랫폼 권한 프롬프트 응답
///
/// `Dismissed`는 선택 없이 닫힌 프롬프트 — 거부가 아니라 취소로 다룬다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PromptResponse {
    /// 능력별로 허용/거부가 결정됨
    Answered(Vec<CapabilityDecision>),
    /// 선택 없이 닫힘
    Dismissed,
}

/// 권한 요청 한 사이클의 결과
///
/// 부분 허용은 해당 획득 흐름에서는 거부와 동일하게 취급한다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestOutcome {
    /// 요청한 능력 전부 허용됨
    AllGranted,
    /// 하나 이상 거부됨 (거부된 능력 목록)
    Denied(Vec<Capability>),
    /// 프롬프트가 선택 없이 닫힘
    Cancelled,
}
