//! SNAPTEXT 도메인 모델.
//!
//! 획득/권한/인식 흐름이 공유하는 핵심 데이터 구조체를 정의한다.

pub mod acquisition;
pub mod frame;
pub mod image_ref;
pub mod permission;
pub mod recognition;
