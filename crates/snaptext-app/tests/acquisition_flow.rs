//! 획득 흐름 통합 테스트.
//!
//! 컨트롤러를 통한 권한 협상 → 캡처/선택 시나리오.


use std::sync::atomic::Ordering;
use std::sync::Arc;
use tempfile::TempDir;

use mocks::{answered, build_controller, MockDevice, MockEngine, MockHost, MockPicker, RecordingNotifier};
use snaptext_app::controller::Phase;
use snaptext_core::models::acquisition::{CaptureOutcome, ImageSource};
use snaptext_core::models::permission::{Capability, CapabilityState, PromptResponse};

fn assemble(
    host: MockHost,
    device_outcome: CaptureOutcome,
) -> (
    Arc<MockHost>,
    Arc<MockDevice>,
    Arc<RecordingNotifier>,
    snaptext_app::controller::ScreenController,
    TempDir,
) {
    let temp = TempDir::new().unwrap();
    let host = Arc::new(host);
    let device = Arc::new(MockDevice::new(device_outcome));
    let notifier = RecordingNotifier::new();
    let controller = build_controller(
        host.clone(),
        device.clone(),
        Arc::new(MockPicker::new(vec![])),
        Arc::new(MockEngine::returning("")),
        notifier.clone(),
        temp.path().join("slots"),
    );
    (host, device, notifier, controller, temp)
}

#[tokio::test]
async fn camera_denied_surfaces_error_and_never_captures() {
    let host = MockHost::new(vec![answered(&[
        (Capability::Camera, false),
        (Capability::Storage, false),
    ])]);
    let (_host, device, notifier, controller, _temp) =
        assemble(host, CaptureOutcome::Captured);

    controller.request_image(ImageSource::Camera).await;

    assert_eq!(controller.phase(), Phase::Idle);
    assert!(controller.current_image().is_none());
    assert_eq!(device.captures.load(Ordering::SeqCst), 0);
    assert!(notifier.has_error_containing("권한 거부됨"));
}

#[tokio::test]
async fn deny_then_grant_captures_once_after_second_attempt() {
    // 첫 프롬프트는 거부, 사용자가 다시 시도한 두 번째 프롬프트는 허용
    let host = MockHost::new(vec![
        answered(&[(Capability::Camera, false), (Capability::Storage, false)]),
        answered(&[(Capability::Camera, true), (Capability::Storage, true)]),
    ]);
    let (host, device, _notifier, controller, _temp) =
        assemble(host, CaptureOutcome::Captured);

    controller.request_image(ImageSource::Camera).await;
    assert_eq!(device.captures.load(Ordering::SeqCst), 0);

    controller.request_image(ImageSource::Camera).await;

    assert_eq!(device.captures.load(Ordering::SeqCst), 1);
    assert_eq!(host.prompt_count.load(Ordering::SeqCst), 2);
    assert_eq!(controller.phase(), Phase::ImageReady);
    let reference = controller.current_image().unwrap();
    assert_eq!(reference.origin, ImageSource::Camera);
    assert!(reference.path().exists());
}

#[tokio::test]
async fn dismissed_prompt_cancels_and_records_no_state() {
    let host = MockHost::new(vec![PromptResponse::Dismissed]);
    let (_host, device, notifier, controller, _temp) =
        assemble(host, CaptureOutcome::Captured);

    controller.request_image(ImageSource::Camera).await;

    assert_eq!(controller.phase(), Phase::Idle);
    assert_eq!(device.captures.load(Ordering::SeqCst), 0);
    assert!(notifier.has_notice_containing("취소되었습니다"));
    // 닫힌 프롬프트는 능력 상태를 남기지 않는다
    assert_eq!(
        controller.gate().state_of(Capability::Camera),
        CapabilityState::Unknown
    );
    assert_eq!(
        controller.gate().state_of(Capability::Storage),
        CapabilityState::Unknown
    );
}

#[tokio::test]
async fn cancelled_capture_keeps_idle_state() {
    let host = MockHost::new(vec![])
        .pre_granted(&[Capability::Camera, Capability::Storage]);
    let (_host, device, notifier, controller, _temp) =
        assemble(host, CaptureOutcome::Cancelled);

    controller.request_image(ImageSource::Camera).await;

    assert_eq!(controller.phase(), Phase::Idle);
    assert!(controller.current_image().is_none());
    assert_eq!(device.captures.load(Ordering::SeqCst), 1);
    assert!(notifier.has_notice_containing("취소되었습니다"));
}

#[tokio::test]
async fn granted_camera_flow_captures_into_slot() {
    let host = MockHost::new(vec![])
        .pre_granted(&[Capability::Camera, Capability::Storage]);
    let (host, device, _notifier, controller, temp) =
        assemble(host, CaptureOutcome::Captured);

    controller.request_image(ImageSource::Camera).await;

    assert_eq!(host.prompt_count.load(Ordering::SeqCst), 0);
    assert_eq!(device.captures.load(Ordering::SeqCst), 1);
    let reference = controller.current_image().unwrap();
    // 슬롯은 지정된 디렉토리 밑에 있다
    assert!(reference.path().starts_with(temp.path().join("slots")));
}
