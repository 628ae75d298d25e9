//! tracing 기반 로그 초기화.
use std::io;

use tracing_subscriber::EnvFilter;

/// 기본 로그 레벨.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// stderr로 출력하는 로그 구독자를 설치한다.
///
/// `RUST_LOG`가 설정되어 있으면 그 값을, 없으면 `level`을 필터로 쓴다.
/// 이미 설치되어 있으면 아무것도 하지 않는다.
pub fn init(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
