//! 화면 이벤트 버스.
//!
//! `tokio::broadcast` 기반. 컨트롤러가 상태 전이를 발행하고
//! 프런트엔드가 구독해서 렌더링한다.

use snaptext_core::models::image_ref::ImageReference;
use tokio::sync::broadcast;
use tracing::debug;

/// 인식 진행 단계
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecognitionPhase {
    /// 이미지 준비 중 (디코딩)
    Preparing,
    /// 엔진 인식 중
    Recognizing,
}

/// 화면 이벤트
#[derive(Debug, Clone)]
pub enum ScreenEvent {
    /// 새 이미지가 획득되어 미리보기가 바뀜
    PreviewUpdated(ImageReference),
    /// 인식 진행 단계 변경
    RecognitionPhase(RecognitionPhase),
    /// 인식 완료, 텍스트 표시
    TextRecognized(String),
}

/// 화면 이벤트 버스
pub struct EventBus {
    tx: broadcast::Sender<ScreenEvent>,
}

impl EventBus {
    /// 새 이벤트 버스 생성
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// 이벤트 발행
    pub fn publish(&self, event: ScreenEvent) {
        debug!("이벤트 발행: {:?}", std::mem::discriminant(&event));
        let _ = self.tx.send(event);
    }

    /// 구독자 생성
    pub fn subscribe(&self) -> broadcast::Receiver<ScreenEvent> {
        self.tx.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(64)
    }
}
