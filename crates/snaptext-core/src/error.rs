//! SNAPTEXT 핵심 에러 타입.
//!
//! 모든 어댑터 crate는 자체 에러 타입에서 `#[from] CoreError`로 래핑한다.

use thiserror::Error;

/// 코어 레이어 에러.
/// 직렬화, 설정, 플랫폼 어댑터 실패 등 도메인 공통 에러를 정의한다.
#[derive(Debug, Error)]
pub enum CoreError {
    /// JSON 직렬화/역직렬화 실패
    #[error("직렬화 에러: {0}")]
    Serialization(#[from] serde_json::Error),

    /// 설정값 오류
    #[error("설정 에러: {0}")]
    Config(String),

    /// 권한 프롬프트 표시 실패 (플랫폼 다이얼로그 에러)
    #[error("권한 프롬프트 에러: {0}")]
    Prompt(String),

    /// 캡처 장치 실패 (장치 조회, 캡처, 슬롯 저장)
    #[error("캡처 에러: {0}")]
    Capture(String),

    /// 이미지 선택기 실패
    #[error("선택기 에러: {0}")]
    Picker(String),

    /// OCR 처리 실패
    #[error("OCR 에러: {0}")]
    Ocr(String),

    /// 내부 에러 (예상치 못한 상황)
    #[error("내부 에러: {0}")]
    Internal(String),

    /// I/O 에러
    #[error("I/O 에러: {0}")]
    Io(#[from] std::io::Error),
}
