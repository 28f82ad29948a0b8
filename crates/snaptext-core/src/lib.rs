//! # snaptext-core
//!
//! SNAPTEXT 도메인 모델, 포트(trait) 정의, 에러 타입.
//! 획득/권한/인식 흐름의 모든 크레이트가 공유하는 핵심 타입을 제공한다.
//!
//! ## 구조
//!
//! - [`models`] — 도메인 데이터 구조체 (serde Serialize/Deserialize)
//! - [`ports`] — Hexagonal Architecture 포트 인터페이스 (async_trait)
//! - [`error`] — 핵심 에러 타입 (thiserror)
//! - [`config`] — 애플리케이션 설정 구조체
//! - [`config_manager`] — 설정 파일 관리 (로드/저장)

pub mod config;
pub mod config_manager;
pub mod error;
pub mod models;
pub mod ports;

#[cfg(test)]
mod tests {
    use crate::error::CoreError;
    use crate::models::image_ref::ImageReference;
    use std::path::PathBuf;

    #[test]
    fn image_reference_serde_roundtrip() {
        let reference = ImageReference::selected(PathBuf::from("/tmp/sample.png"));

        let json = serde_json::to_string(&reference).unwrap();
        let deserialized: ImageReference = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized, reference);
    }

    #[test]
    fn error_display_messages() {
        let e1 = CoreError::Capture("테스트".to_string());
        assert!(e1.to_string().contains("캡처"));

        let e2 = CoreError::Ocr("테스트".to_string());
        assert!(e2.to_string().contains("OCR"));

        let e3 = CoreError::Prompt("테스트".to_string());
        assert!(e3.to_string().contains("프롬프트"));
    }
}
