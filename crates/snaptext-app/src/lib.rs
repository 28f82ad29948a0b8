//! # snaptext-app
//!
//! SNAPTEXT 클라이언트 구성 요소.
//! 화면 컨트롤러(상태 기계), 이벤트 버스, 플랫폼 어댑터를 제공하며
//! `snaptext` 바이너리가 이들을 와이어링한다.

pub mod adapters;
pub mod controller;
pub mod event_bus;
