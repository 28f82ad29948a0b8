//! 이미지 선택기 포트.
//!
//! 구현: `snaptext-app` (rfd 네이티브 파일 다이얼로그)

use async_trait::async_trait;

use crate::error::CoreError;
use crate::models::image_ref::ImageReference;

/// 저장소 이미지 선택기 — 이미지 콘텐츠로 제한된 플랫폼 선택 UI
#[async_trait]
pub trait MediaPicker: Send + Sync {
    /// 선택 UI를 띄우고 사용자의 선택을 기다린다.
    ///
    /// `None`은 선택 없이 닫힌 경우 (취소).
    async fn pick_image(&self) -> Result<Option<ImageReference>, CoreError>;
}
