//! 발전 사업 LCOE 계산 로직을 라이브러리로 분리하여 CLI 외의 호출자도 그대로 쓸 수 있게 한다.

pub mod app;
pub mod config;
pub mod finance;
pub mod logging;
pub mod report;
pub mod ui_cli;
