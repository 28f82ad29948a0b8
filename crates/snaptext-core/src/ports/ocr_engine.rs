//! 텍스트 인식 엔진 포트.
//!
//! 구현: `snaptext-vision` crate (`LocalOcrEngine`, Tesseract)

use async_trait::async_trait;

use crate::error::CoreError;
use crate::models::frame::RgbaFrame;

/// 외부 텍스트 인식 엔진
///
/// 디코딩된 프레임을 받아 인식된 텍스트를 하나의 문자열로 반환한다.
/// 텍스트가 없는 이미지는 빈 문자열 성공이다.
#[async_trait]
pub trait OcrEngine: Send + Sync {
    /// 프레임에서 텍스트 추출
    async fn recognize_text(&self, frame: &RgbaFrame) -> Result<String, CoreError>;

    /// 엔진 이름 (예: "local-tesseract")
    fn engine_name(&self) -> &str;
}
