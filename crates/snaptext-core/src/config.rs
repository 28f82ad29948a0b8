//! 애플리케이션 설정 구조체.
//!
//! 인식 엔진, 캡처 슬롯, 선택기 필터 등 런타임 설정을 정의한다.
//! `ConfigManager`를 통해 JSON 파일에서 로드/저장.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 최상위 애플리케이션 설정
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// 텍스트 인식 설정
    #[serde(default)]
    pub recognition: RecognitionConfig,
    /// 캡처 설정
    #[serde(default)]
    pub capture: CaptureConfig,
    /// 이미지 선택기 설정
    #[serde(default)]
    pub picker: PickerConfig,
}

// ============================================================
// 인식 설정
// ============================================================

/// 텍스트 인식 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognitionConfig {
    /// 인식 언어 (Tesseract 언어 코드)
    #[serde(default = "default_language")]
    pub language: String,
    /// Tesseract 데이터 경로 (None이면 시스템 기본값)
    pub tessdata_path: Option<PathBuf>,
    /// 최대 추출 문자 수 (0이면 무제한)
    #[serde(default)]
    pub max_chars: usize,
}

impl Default for RecognitionConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            tessdata_path: None,
            max_chars: 0,
        }
    }
}

// ============================================================
// 캡처 설정
// ============================================================

/// 캡처 설정 — 슬롯 디렉토리, 대상 모니터
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CaptureConfig {
    /// 캡처 슬롯 디렉토리 (None이면 플랫폼 데이터 경로)
    pub slot_dir: Option<PathBuf>,
    /// 캡처 대상 모니터 인덱스 (None이면 주 모니터)
    pub monitor_index: Option<usize>,
}

// ============================================================
// 선택기 설정
// ============================================================

/// 이미지 선택기 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickerConfig {
    /// 선택 가능한 이미지 확장자 목록
    #[serde(default = "default_image_extensions")]
    pub extensions: Vec<String>,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            extensions: default_image_extensions(),
        }
    }
}

// ============================================================
// 기본값 함수
// ============================================================

fn default_language() -> String {
    "eng".to_string()
}

fn default_image_extensions() -> Vec<String> {
    vec![
        "png".to_string(),
        "jpg".to_string(),
        "jpeg".to_string(),
        "bmp".to_string(),
        "webp".to_string(),
        "tiff".to_string(),
    ]
}
