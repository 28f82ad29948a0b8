//! 화면 컨트롤러.
//!
//! Idle → ImageReady → Recognizing → ImageReady 상태 기계.
//! 사용자 동작에 반응해 획득기와 인식 클라이언트를 구동하고,
//! 모든 에러를 이 경계에서 일시 알림으로 변환한다 — 밖으로 전파되는 것은 없다.
//!
//! 상태는 하나의 값으로 소유하며, 잠금은 await를 가로질러 잡지 않는다.

use parking_lot::Mutex;
use std::sync::Arc;
use tracing::debug;

use snaptext_acquire::ImageAcquirer;
use snaptext_core::models::acquisition::{Acquisition, ImageSource};
use snaptext_core::models::image_ref::ImageReference;
use snaptext_core::ports::notifier::UserNotifier;
use snaptext_vision::RecognitionClient;

use crate::event_bus::{EventBus, RecognitionPhase, ScreenEvent};

/// 화면 단계
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    /// 이미지 없음
    #[default]
    Idle,
    /// 이미지 핸들 보유
    ImageReady,
    /// 인식 요청 진행 중
    Recognizing,
}

/// 화면의 일시 상태 — 컨트롤러가 단독 소유한다
#[derive(Debug, Default)]
struct ScreenState {
    phase: Phase,
    /// 현재 보유한 이미지 핸들
    image: Option<ImageReference>,
    /// 마지막 인식 텍스트
    text: Option<String>,
    /// 획득 UI가 떠 있는 동안 true
    picking: bool,
}

/// 사용자에게 보여줄 안내 문구
const NOTICE_PICK_IMAGE_FIRST: &str = "먼저 이미지를 선택하세요";
const NOTICE_CANCELLED: &str = "취소되었습니다";
const NOTICE_RECOGNITION_IN_FLIGHT: &str = "이미 텍스트를 인식하는 중입니다";
const NOTICE_WAIT_FOR_RECOGNITION: &str = "인식이 끝난 뒤 다시 시도하세요";
const NOTICE_PICKING_IN_FLIGHT: &str = "이미지 선택이 이미 진행 중입니다";

/// 화면 컨트롤러
pub struct ScreenController {
    acquirer: ImageAcquirer,
    client: RecognitionClient,
    notifier: Arc<dyn UserNotifier>,
    events: EventBus,
    state: Mutex<ScreenState>,
}

impl ScreenController {
    /// 새 컨트롤러 생성 (Idle 상태)
    pub fn new(
        acquirer: ImageAcquirer,
        client: RecognitionClient,
        notifier: Arc<dyn UserNotifier>,
    ) -> Self {
        Self {
            acquirer,
            client,
            notifier,
            events: EventBus::default(),
            state: Mutex::new(ScreenState::default()),
        }
    }

    /// 현재 단계
    pub fn phase(&self) -> Phase {
        self.state.lock().phase
    }

    /// 현재 보유한 이미지 핸들
    pub fn current_image(&self) -> Option<ImageReference> {
        self.state.lock().image.clone()
    }

    /// 마지막 인식 텍스트
    pub fn recognized_text(&self) -> Option<String> {
        self.state.lock().text.clone()
    }

    /// 권한 게이트 접근 (상태 조회용)
    pub fn gate(&self) -> &snaptext_acquire::PermissionGate {
        self.acquirer.gate()
    }

    /// 연결된 인식 엔진 이름
    pub fn engine_name(&self) -> &str {
        self.client.engine_name()
    }

    /// 화면 이벤트 구독
    pub fn subscribe(&self) -> tokio::sync::broadcast::Receiver<ScreenEvent> {
        self.events.subscribe()
    }

    /// 사용자 동작: 이미지 획득 (카메라 / 갤러리)
    ///
    /// 성공하면 이미지 핸들 필드만 교체된다. 취소/거부는 현재 상태를
    /// 그대로 두고 안내만 띄운다. 인식이 진행 중이거나 다른 획득이
    /// 떠 있는 동안에는 차단한다.
    pub async fn request_image(&self, source: ImageSource) {
        if let Err(notice) = self.admit_acquisition() {
            self.show_notice(notice).await;
            return;
        }

        debug!("이미지 획득 요청: {}", source.label());
        let result = self.acquirer.acquire(source).await;

        match result {
            Ok(Acquisition::Acquired(reference)) => {
                {
                    let mut st = self.state.lock();
                    st.picking = false;
                    st.image = Some(reference.clone());
                    st.phase = Phase::ImageReady;
                }
                debug!("이미지 교체: {}", reference.path().display());
                self.events.publish(ScreenEvent::PreviewUpdated(reference));
            }
            Ok(Acquisition::Cancelled) => {
                self.state.lock().picking = false;
                self.show_notice(NOTICE_CANCELLED).await;
            }
            Err(e) => {
                self.state.lock().picking = false;
                self.show_error(&e.to_string()).await;
            }
        }
    }

    /// 사용자 동작: 현재 이미지에서 텍스트 인식
    ///
    /// Idle에서는 엔진을 호출하지 않고 안내만 띄운다.
    /// 이미 Recognizing이면 중복 요청은 무시한다.
    pub async fn request_recognition(&self) {
        let reference = match self.admit_recognition() {
            Ok(reference) => reference,
            Err(notice) => {
                self.show_notice(notice).await;
                return;
            }
        };

        self.events
            .publish(ScreenEvent::RecognitionPhase(RecognitionPhase::Preparing));

        let outcome = match self.client.prepare(&reference) {
            Ok(frame) => {
                self.events
                    .publish(ScreenEvent::RecognitionPhase(RecognitionPhase::Recognizing));
                self.client.recognize_frame(&frame).await
            }
            Err(e) => Err(e),
        };

        // 성공이든 실패든 ImageReady로 복귀 — 이미지는 그대로다
        match outcome {
            Ok(text) => {
                {
                    let mut st = self.state.lock();
                    st.phase = Phase::ImageReady;
                    st.text = Some(text.clone());
                }
                debug!("인식 완료: {}자", text.chars().count());
                self.events.publish(ScreenEvent::TextRecognized(text));
            }
            Err(e) => {
                self.state.lock().phase = Phase::ImageReady;
                self.show_error(&e.to_string()).await;
            }
        }
    }

    /// 획득 진입 검사 — 통과하면 진행 플래그를 세운다
    fn admit_acquisition(&self) -> Result<(), &'static str> {
        let mut st = self.state.lock();
        if st.phase == Phase::Recognizing {
            return Err(NOTICE_WAIT_FOR_RECOGNITION);
        }
        if st.picking {
            return Err(NOTICE_PICKING_IN_FLIGHT);
        }
        st.picking = true;
        Ok(())
    }

    /// 인식 진입 검사 — 통과하면 Recognizing으로 전이하고 핸들을 돌려준다
    fn admit_recognition(&self) -> Result<ImageReference, &'static str> {
        let mut st = self.state.lock();
        if st.phase == Phase::Recognizing {
            return Err(NOTICE_RECOGNITION_IN_FLIGHT);
        }
        match st.image.clone() {
            Some(reference) => {
                st.phase = Phase::Recognizing;
                Ok(reference)
            }
            None => Err(NOTICE_PICK_IMAGE_FIRST),
        }
    }

    async fn show_notice(&self, message: &str) {
        debug!("안내: {message}");
        if let Err(e) = self.notifier.show_notice(message).await {
            debug!("안내 표시 실패: {e}");
        }
    }

    async fn show_error(&self, message: &str) {
        debug!("에러 안내: {message}");
        if let Err(e) = self.notifier.show_error(message).await {
            debug!("에러 안내 표시 실패: {e}");
        }
    }
}
