//! snaptext 바이너리 진입점.
//!
//! 설정 로드, 어댑터 와이어링, 화면 컨트롤러 구동.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rfd::{AsyncMessageDialog, MessageButtons, MessageDialogResult, MessageLevel};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use snaptext_acquire::{CaptureSlots, ImageAcquirer, PermissionGate};
use snaptext_app::adapters::{
    DialogPermissionHost, NativeMediaPicker, ScreenCaptureDevice, TerminalNotifier,
};
use snaptext_app::controller::ScreenController;
use snaptext_app::event_bus::{RecognitionPhase, ScreenEvent};
use snaptext_core::config_manager::ConfigManager;
use snaptext_core::models::acquisition::ImageSource;
use snaptext_vision::{LocalOcrEngine, RecognitionClient};

/// SNAPTEXT 데스크톱 클라이언트
///
/// 이미지 한 장을 획득해 텍스트를 추출한다
#[derive(Parser, Debug)]
#[command(name = "snaptext")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// 이미지 획득 경로 (지정하지 않으면 다이얼로그로 묻는다)
    #[arg(long, short = 's', value_enum)]
    source: Option<SourceArg>,

    /// 인식 언어 (Tesseract 언어 코드, 설정 파일보다 우선)
    #[arg(long)]
    lang: Option<String>,

    /// 설정 파일 경로 (기본: 플랫폼 설정 디렉토리)
    #[arg(long)]
    config: Option<PathBuf>,

    /// 캡처 슬롯 디렉토리 (기본: 플랫폼 데이터 디렉토리)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// 로그 레벨 (trace, debug, info, warn, error)
    #[arg(long, short = 'l', default_value = "warn")]
    log_level: String,

    /// 획득만 하고 인식은 건너뛴다
    #[arg(long)]
    no_recognize: bool,
}

/// CLI 획득 경로 인자
#[derive(Debug, Clone, Copy, ValueEnum)]
enum SourceArg {
    Camera,
    Gallery,
}

impl From<SourceArg> for ImageSource {
    fn from(value: SourceArg) -> Self {
        match value {
            SourceArg::Camera => ImageSource::Camera,
            SourceArg::Gallery => ImageSource::Gallery,
        }
    }
}

/// 획득 경로 선택 다이얼로그 (CAMERA / GALLERY 메뉴)
async fn choose_source() -> Option<ImageSource> {
    let result = AsyncMessageDialog::new()
        .set_level(MessageLevel::Info)
        .set_title("이미지 입력")
        .set_description("예: 화면 캡처 / 아니오: 파일에서 선택")
        .set_buttons(MessageButtons::YesNoCancel)
        .show()
        .await;

    match result {
        MessageDialogResult::Yes => Some(ImageSource::Camera),
        MessageDialogResult::No => Some(ImageSource::Gallery),
        _ => None,
    }
}

/// 이벤트 버스를 터미널 진행 표시로 렌더링
fn spawn_renderer(controller: &ScreenController) -> tokio::task::JoinHandle<()> {
    let mut rx = controller.subscribe();
    tokio::spawn(async move {
        while let Ok(event) = rx.recv().await {
            match event {
                ScreenEvent::PreviewUpdated(reference) => {
                    eprintln!("🖼  이미지: {}", reference.path().display());
                }
                ScreenEvent::RecognitionPhase(RecognitionPhase::Preparing) => {
                    eprintln!("⏳ 이미지 준비 중 ...");
                }
                ScreenEvent::RecognitionPhase(RecognitionPhase::Recognizing) => {
                    eprintln!("🔍 텍스트 인식 중 ...");
                }
                ScreenEvent::TextRecognized(_) => {}
            }
        }
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // tracing 초기화
    let log_filter = format!(
        "snaptext={lvl},snaptext_app={lvl},snaptext_core={lvl},snaptext_acquire={lvl},snaptext_vision={lvl}",
        lvl = args.log_level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_filter)),
        )
        .init();

    // 설정 로드
    let config_manager = match &args.config {
        Some(path) => ConfigManager::with_path(path.clone()),
        None => ConfigManager::new(),
    }
    .context("설정 로드 실패")?;
    let config = config_manager.get();
    debug!("설정 로드: {}", config_manager.config_path().display());

    // 캡처 슬롯 디렉토리: CLI > 설정 > 플랫폼 데이터 경로
    let slot_dir = args
        .data_dir
        .clone()
        .or_else(|| config.capture.slot_dir.clone())
        .map(Ok)
        .unwrap_or_else(|| ConfigManager::data_dir().map(|p| p.join("slots")))
        .context("슬롯 디렉토리 결정 실패")?;

    // 어댑터 와이어링
    let language = args
        .lang
        .clone()
        .unwrap_or_else(|| config.recognition.language.clone());
    let engine = LocalOcrEngine::new(language, config.recognition.tessdata_path.clone())
        .with_max_chars(config.recognition.max_chars);

    let gate = PermissionGate::new(Arc::new(DialogPermissionHost::new()));
    let acquirer = ImageAcquirer::new(
        gate,
        Arc::new(ScreenCaptureDevice::new(config.capture.monitor_index)),
        Arc::new(NativeMediaPicker::new(config.picker.extensions.clone())),
        CaptureSlots::new(slot_dir),
    );
    let client = RecognitionClient::new(Arc::new(engine));
    let controller = ScreenController::new(acquirer, client, Arc::new(TerminalNotifier::new()));

    info!("snaptext 시작 (엔진: {})", controller.engine_name());
    let renderer = spawn_renderer(&controller);

    // 획득 경로 결정
    let source = match args.source.map(ImageSource::from) {
        Some(source) => source,
        None => match choose_source().await {
            Some(source) => source,
            None => {
                eprintln!("💬 취소되었습니다");
                return Ok(());
            }
        },
    };

    // 획득 → (선택적) 인식
    controller.request_image(source).await;

    if controller.current_image().is_some() && !args.no_recognize {
        controller.request_recognition().await;
    }

    if let Some(text) = controller.recognized_text() {
        println!("{text}");
    }

    renderer.abort();
    Ok(())
}
