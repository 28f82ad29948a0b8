//! 획득된 이미지 핸들.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::models::acquisition::ImageSource;

/// 획득된 이미지 바이트에 대한 불투명 핸들
///
/// 캡처 또는 저장소 선택으로 생성되며, 화면 컨트롤러가
/// 새 획득으로 교체될 때까지 보유한다. 다른 컴포넌트는 변경하지 않는다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageReference {
    /// 이미지 바이트 위치
    pub path: PathBuf,
    /// 획득 경로 (캡처 / 선택)
    pub origin: ImageSource,
    /// 획득 시각
    pub acquired_at: DateTime<Utc>,
}

impl ImageReference {
    /// 캡처 슬롯에서 생성된 핸들
    pub fn captured(slot: PathBuf) -> Self {
        Self {
            path: slot,
            origin: ImageSource::Camera,
            acquired_at: Utc::now(),
        }
    }

    /// 저장소 선택으로 생성된 핸들
    pub fn selected(path: PathBuf) -> Self {
        Self {
            path,
            origin: ImageSource::Gallery,
            acquired_at: Utc::now(),
        }
    }

    /// 이미지 경로
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captured_reference_origin() {
        let r = ImageReference::captured(PathBuf::from("/tmp/cap_1.png"));
        assert_eq!(r.origin, ImageSource::Camera);
        assert_eq!(r.path(), Path::new("/tmp/cap_1.png"));
    }

    #[test]
    fn selected_reference_origin() {
        let r = ImageReference::selected(PathBuf::from("/tmp/photo.jpg"));
        assert_eq!(r.origin, ImageSource::Gallery);
    }
}
