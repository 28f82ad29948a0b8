//! 이미지 선택기 어댑터 — rfd 네이티브 파일 다이얼로그.

use async_trait::async_trait;
use rfd::AsyncFileDialog;
use tracing::debug;

use snaptext_core::error::CoreError;
use snaptext_core::models::image_ref::ImageReference;
use snaptext_core::ports::picker::MediaPicker;

/// 네이티브 파일 다이얼로그 선택기
///
/// 설정된 이미지 확장자로 선택을 제한한다.
pub struct NativeMediaPicker {
    extensions: Vec<String>,
}

impl NativeMediaPicker {
    /// 새 선택기 생성
    pub fn new(extensions: Vec<String>) -> Self {
        Self { extensions }
    }
}

#[async_trait]
impl MediaPicker for NativeMediaPicker {
    async fn pick_image(&self) -> Result<Option<ImageReference>, CoreError> {
        let handle = AsyncFileDialog::new()
            .set_title("이미지 선택")
            .add_filter("이미지", &self.extensions)
            .pick_file()
            .await;

        match handle {
            Some(file) => {
                let path = file.path().to_path_buf();
                debug!("파일 선택됨: {}", path.display());
                Ok(Some(ImageReference::selected(path)))
            }
            None => {
                debug!("파일 선택 취소");
                Ok(None)
            }
        }
    }
}
