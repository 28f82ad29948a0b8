//! 로컬 OCR 엔진 — Tesseract 어댑터.
//!
//! `leptess` 기반. `ocr` feature flag 활성화 시에만 Tesseract를 호출하며,
//! 비활성 빌드에서는 빈 텍스트를 돌려준다.
//! 인식은 spawn_blocking으로 메인 스레드 밖에서 실행한다.

use async_trait::async_trait;
use std::path::PathBuf;

use snaptext_core::error::CoreError;
use snaptext_core::models::frame::RgbaFrame;
use snaptext_core::ports::ocr_engine::OcrEngine;

/// 로컬 OCR 엔진 (Tesseract 기반)
pub struct LocalOcrEngine {
    /// 인식 언어 (Tesseract 언어 코드)
    language: String,
    /// Tesseract 데이터 경로 (None이면 시스템 기본값)
    tessdata_path: Option<PathBuf>,
    /// 최대 추출 문자 수 (0이면 무제한)
    max_chars: usize,
}

impl LocalOcrEngine {
    /// 새 로컬 엔진 생성
    pub fn new(language: impl Into<String>, tessdata_path: Option<PathBuf>) -> Self {
        Self {
            language: language.into(),
            tessdata_path,
            max_chars: 0,
        }
    }

    /// 최대 문자 수 제한 설정
    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = max_chars;
        self
    }

    /// 설정된 인식 언어
    pub fn language(&self) -> &str {
        &self.language
    }

    /// tessdata 경로 반환
    pub fn tessdata_path(&self) -> Option<&PathBuf> {
        self.tessdata_path.as_ref()
    }
}

impl Default for LocalOcrEngine {
    fn default() -> Self {
        Self::new("eng", None)
    }
}

#[async_trait]
impl OcrEngine for LocalOcrEngine {
    async fn recognize_text(&self, frame: &RgbaFrame) -> Result<String, CoreError> {
        if frame.is_empty() {
            return Err(CoreError::Ocr("빈 이미지: 너비 또는 높이가 0".to_string()));
        }

        #[cfg(feature = "ocr")]
        {
            let language = self.language.clone();
            let tessdata = self
                .tessdata_path
                .as_ref()
                .map(|p| p.to_string_lossy().to_string());
            let max_chars = self.max_chars;
            let (width, height) = (frame.width, frame.height);
            let pixels = frame.pixels.clone();

            // 별도 스레드에서 OCR 실행
            tokio::task::spawn_blocking(move || {
                use std::io::Cursor;

                // leptess는 인코딩된 이미지 바이트를 받는다 — PNG로 감싼다
                let rgba = image::RgbaImage::from_raw(width, height, pixels)
                    .ok_or_else(|| CoreError::Ocr("프레임 버퍼 크기 불일치".to_string()))?;
                let mut encoded = Vec::new();
                image::DynamicImage::ImageRgba8(rgba)
                    .write_to(&mut Cursor::new(&mut encoded), image::ImageFormat::Png)
                    .map_err(|e| CoreError::Ocr(format!("프레임 인코딩 실패: {e}")))?;

                let mut lt = leptess::LepTess::new(tessdata.as_deref(), &language)
                    .map_err(|e| CoreError::Ocr(format!("OCR 초기화 실패: {e}")))?;

                lt.set_image_from_mem(&encoded)
                    .map_err(|e| CoreError::Ocr(format!("OCR 이미지 설정 실패: {e}")))?;

                let text = lt
                    .get_utf8_text()
                    .map_err(|e| CoreError::Ocr(format!("OCR 텍스트 추출 실패: {e}")))?;

                let result = text.trim().to_string();

                // 최대 문자 수 제한
                if max_chars > 0 && result.len() > max_chars {
                    Ok(result.chars().take(max_chars).collect())
                } else {
                    Ok(result)
                }
            })
            .await
            .map_err(|e| CoreError::Ocr(format!("OCR 작업 조인 실패: {e}")))?
        }

        #[cfg(not(feature = "ocr"))]
        {
            Ok(String::new())
        }
    }

    fn engine_name(&self) -> &str {
        "local-tesseract"
    }
}
