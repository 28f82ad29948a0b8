//! # snaptext-acquire
//!
//! 이미지 획득 크레이트.
//! 권한 게이트(확인/요청 사이클), 캡처 슬롯 사전 할당,
//! 그리고 확인 → 요청 → 1회 재시도 획득 프로토콜을 담당한다.

pub mod acquirer;
pub mod error;
pub mod gate;
pub mod slots;

pub use acquirer::ImageAcquirer;
pub use error::AcquireError;
pub use gate::PermissionGate;
pub use slots::CaptureSlots;
