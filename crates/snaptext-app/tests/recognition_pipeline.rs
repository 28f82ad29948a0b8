//! 인식 파이프라인 통합 테스트.
//!
//! 컨트롤러 → 클라이언트 → 엔진 경로의 성공/실패 보고.


use std::sync::atomic::Ordering;
use std::sync::Arc;
use tempfile::TempDir;

use mocks::{build_controller, write_png, MockDevice, MockEngine, MockHost, MockPicker, RecordingNotifier};
use snaptext_app::controller::Phase;
use snaptext_core::models::acquisition::{CaptureOutcome, ImageSource};
use snaptext_core::models::permission::Capability;

fn controller_with_engine(
    engine: Arc<MockEngine>,
    selection: std::path::PathBuf,
    notifier: Arc<RecordingNotifier>,
    temp: &TempDir,
) -> snaptext_app::controller::ScreenController {
    let host = Arc::new(MockHost::new(vec![]).pre_granted(&[Capability::Storage]));
    build_controller(
        host,
        Arc::new(MockDevice::new(CaptureOutcome::Captured)),
        Arc::new(MockPicker::new(vec![Some(selection)])),
        engine,
        notifier,
        temp.path().join("slots"),
    )
}

#[tokio::test]
async fn no_text_image_is_empty_success() {
    // 읽을 텍스트가 없는 이미지 → 빈 텍스트 성공, 에러 알림 없음
    let temp = TempDir::new().unwrap();
    let image = temp.path().join("blank.png");
    write_png(&image, 64, 64);

    let engine = Arc::new(MockEngine::returning(""));
    let notifier = RecordingNotifier::new();
    let controller = controller_with_engine(engine, image, notifier.clone(), &temp);

    controller.request_image(ImageSource::Gallery).await;
    controller.request_recognition().await;

    assert_eq!(controller.phase(), Phase::ImageReady);
    assert_eq!(controller.recognized_text(), Some(String::new()));
    assert!(notifier.errors.lock().is_empty());
}

#[tokio::test]
async fn undecodable_reference_reports_decode_failure() {
    let temp = TempDir::new().unwrap();
    let broken = temp.path().join("broken.png");
    std::fs::write(&broken, b"not an image at all").unwrap();

    let engine = Arc::new(MockEngine::returning("무시됨"));
    let notifier = RecordingNotifier::new();
    let controller = controller_with_engine(engine.clone(), broken.clone(), notifier.clone(), &temp);

    controller.request_image(ImageSource::Gallery).await;
    controller.request_recognition().await;

    // 디코딩 실패 — 엔진은 호출되지 않고, 화면은 ImageReady로 복귀
    assert_eq!(engine.calls.load(Ordering::SeqCst), 0);
    assert_eq!(controller.phase(), Phase::ImageReady);
    assert_eq!(controller.current_image().unwrap().path(), broken.as_path());
    assert!(notifier.has_error_containing("이미지 준비 실패"));
}

#[tokio::test]
async fn engine_failure_surfaces_reason_and_recovers() {
    let temp = TempDir::new().unwrap();
    let image = temp.path().join("ok.png");
    write_png(&image, 32, 32);

    let engine = Arc::new(MockEngine::failing("모델 로드 실패"));
    let notifier = RecordingNotifier::new();
    let controller = controller_with_engine(engine, image.clone(), notifier.clone(), &temp);

    controller.request_image(ImageSource::Gallery).await;
    controller.request_recognition().await;

    assert_eq!(controller.phase(), Phase::ImageReady);
    assert_eq!(controller.current_image().unwrap().path(), image.as_path());
    // 자동 재시도 없음 — 텍스트도 비어 있다
    assert!(controller.recognized_text().is_none());
    assert!(notifier.has_error_containing("텍스트 인식 실패"));
    assert!(notifier.has_error_containing("모델 로드 실패"));
}

#[tokio::test]
async fn repeated_recognition_is_idempotent() {
    let temp = TempDir::new().unwrap();
    let image = temp.path().join("twice.png");
    write_png(&image, 32, 32);

    let engine = Arc::new(MockEngine::returning("SAME"));
    let notifier = RecordingNotifier::new();
    let controller = controller_with_engine(engine.clone(), image, notifier, &temp);

    controller.request_image(ImageSource::Gallery).await;
    controller.request_recognition().await;
    controller.request_recognition().await;

    assert_eq!(engine.calls.load(Ordering::SeqCst), 2);
    assert_eq!(controller.recognized_text(), Some("SAME".to_string()));
    assert_eq!(controller.phase(), Phase::ImageReady);
}
