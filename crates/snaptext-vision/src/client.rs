//! 인식 클라이언트.
//!
//! 이미지 핸들을 엔진 입력으로 준비하고 외부 엔진 호출을 감싼다.
//! 준비(디코딩) 실패와 엔진 실패는 같은 결과 채널로 보고하되 구분한다.

use std::fs;
use std::sync::Arc;
use tracing::debug;

use snaptext_core::models::frame::RgbaFrame;
use snaptext_core::models::image_ref::ImageReference;
use snaptext_core::models::recognition::{RecognitionError, RecognitionResult};
use snaptext_core::ports::ocr_engine::OcrEngine;

/// 인식 클라이언트 — 디코딩 + 엔진 호출
///
/// 부수 효과 없음. 같은 핸들로 몇 번이고 다시 호출해도 안전하다.
pub struct RecognitionClient {
    engine: Arc<dyn OcrEngine>,
}

impl RecognitionClient {
    /// 새 클라이언트 생성
    pub fn new(engine: Arc<dyn OcrEngine>) -> Self {
        Self { engine }
    }

    /// 연결된 엔진 이름
    pub fn engine_name(&self) -> &str {
        self.engine.engine_name()
    }

    /// 핸들을 엔진 입력 프레임으로 준비한다.
    ///
    /// 파일 읽기/디코딩 실패는 `RecognitionError::Decode`로 보고한다.
    pub fn prepare(&self, reference: &ImageReference) -> Result<RgbaFrame, RecognitionError> {
        let path = reference.path();
        debug!("이미지 준비: {}", path.display());

        let bytes = fs::read(path)
            .map_err(|e| RecognitionError::Decode(format!("{} 읽기 실패: {e}", path.display())))?;

        let decoded = image::load_from_memory(&bytes)
            .map_err(|e| RecognitionError::Decode(format!("이미지 디코딩 실패: {e}")))?;

        let rgba = decoded.to_rgba8();
        let (width, height) = (rgba.width(), rgba.height());
        Ok(RgbaFrame::new(width, height, rgba.into_raw()))
    }

    /// 준비된 프레임에서 텍스트 인식
    ///
    /// 엔진 실패는 `RecognitionError::Engine`으로 보고한다.
    /// 빈 텍스트는 성공이다.
    pub async fn recognize_frame(&self, frame: &RgbaFrame) -> RecognitionResult {
        debug!(
            "텍스트 인식 요청: {}x{} ({})",
            frame.width,
            frame.height,
            self.engine.engine_name()
        );

        self.engine
            .recognize_text(frame)
            .await
            .map_err(|e| RecognitionError::Engine(e.to_string()))
    }

    /// 준비 + 인식을 한 번에 수행
    pub async fn recognize(&self, reference: &ImageReference) -> RecognitionResult {
        let frame = self.prepare(reference)?;
        self.recognize_frame(&frame).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use async_trait::async_trait;
    use image::{DynamicImage, RgbaImage};
    use snaptext_core::error::CoreError;
    use std::io::Cursor;
    use std::path::Path;
    use tempfile::TempDir;

    /// 고정 결과를 돌려주는 엔진
    struct FixedEngine {
        result: Result<String, String>,
    }

    #[async_trait]
    impl OcrEngine for FixedEngine {
        async fn recognize_text(&self, _frame: &RgbaFrame) -> Result<String, CoreError> {
            self.result
                .clone()
                .map_err(CoreError::Ocr)
        }

        fn engine_name(&self) -> &str {
            "fixed-mock"
        }
    }

    fn client_with(result: Result<String, String>) -> RecognitionClient {
        RecognitionClient::new(Arc::new(FixedEngine { result }))
    }

    fn write_png(dir: &Path, name: &str, w: u32, h: u32) -> ImageReference {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            w,
            h,
            image::Rgba([255, 255, 255, 255]),
        ));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        let path = dir.join(name);
        std::fs::write(&path, bytes).unwrap();
        ImageReference::selected(path)
    }

    #[test]
    fn prepare_decodes_valid_image() {
        let temp = TempDir::new().unwrap();
        let reference = write_png(temp.path(), "sample.png", 32, 16);
        let client = client_with(Ok(String::new()));

        let frame = client.prepare(&reference).unwrap();
        assert_eq!(frame.width, 32);
        assert_eq!(frame.height, 16);
        assert_eq!(frame.pixels.len(), 32 * 16 * 4);
    }

    #[test]
    fn prepare_reports_decode_failure_for_garbage() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.png");
        std::fs::write(&path, b"definitely not an image").unwrap();
        let client = client_with(Ok(String::new()));

        let result = client.prepare(&ImageReference::selected(path));

        assert_matches!(result, Err(RecognitionError::Decode(reason)) => {
            assert!(!reason.is_empty());
        });
    }

    #[test]
    fn prepare_reports_decode_failure_for_missing_file() {
        let client = client_with(Ok(String::new()));
        let reference = ImageReference::selected("/no/such/file.png".into());

        let result = client.prepare(&reference);

        assert_matches!(result, Err(RecognitionError::Decode(_)));
    }

    #[tokio::test]
    async fn empty_text_is_success() {
        // 읽을 텍스트가 없는 이미지 → 빈 문자열 성공
        let temp = TempDir::new().unwrap();
        let reference = write_png(temp.path(), "blank.png", 64, 64);
        let client = client_with(Ok(String::new()));

        let result = client.recognize(&reference).await;

        assert_eq!(result, Ok(String::new()));
    }

    #[tokio::test]
    async fn engine_failure_is_distinct_from_decode() {
        let temp = TempDir::new().unwrap();
        let reference = write_png(temp.path(), "ok.png", 8, 8);
        let client = client_with(Err("엔진 다운".to_string()));

        let result = client.recognize(&reference).await;

        assert_matches!(result, Err(RecognitionError::Engine(reason)) => {
            assert!(reason.contains("엔진 다운"));
        });
    }

    #[tokio::test]
    async fn recognize_is_reinvocable_on_same_reference() {
        let temp = TempDir::new().unwrap();
        let reference = write_png(temp.path(), "again.png", 8, 8);
        let client = client_with(Ok("HELLO".to_string()));

        let first = client.recognize(&reference).await.unwrap();
        let second = client.recognize(&reference).await.unwrap();

        assert_eq!(first, "HELLO");
        assert_eq!(second, "HELLO");
    }
}
