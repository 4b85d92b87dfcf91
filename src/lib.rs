//! 핵심 계산 로직을 라이브러리로 분리하여 CLI와 GUI 양쪽에서 같은 모델을 쓰게 한다.

pub mod app;
pub mod apu;
pub mod config;
pub mod i18n;
pub mod ui_cli;
