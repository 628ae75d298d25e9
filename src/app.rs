use std::io::{BufRead, Write};

use thiserror::Error;
use tracing::info;

use crate::config::{self, ConfigError};
use crate::finance::{compute_lcoe, construction_schedule, LcoeError};
use crate::report;
use crate::ui_cli::{self, Cli};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일/콘솔 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// LCOE 계산 오류
    #[error("LCOE 계산 오류: {0}")]
    Lcoe(#[from] LcoeError),
}

/// 설정을 읽고 명령행/대화형 입력을 반영해 LCOE를 계산·출력한다.
pub fn run<R: BufRead, W: Write>(cli: &Cli, input: &mut R, out: &mut W) -> Result<(), AppError> {
    let cfg = config::load_or_default(&cli.config)?;
    let mut project = cfg.project;
    cli.apply_overrides(&mut project);
    if cli.interactive {
        ui_cli::prompt_project(input, out, &mut project)?;
    }

    let lcoe_input = project.to_input();
    info!(
        model = %lcoe_input.model,
        valuation_point = %lcoe_input.valuation_point,
        "LCOE 계산 시작"
    );
    let result = compute_lcoe(lcoe_input)?;

    if cli.schedule {
        let rows = construction_schedule(&lcoe_input)?;
        write!(out, "{}", report::format_schedule(&rows))?;
    }
    writeln!(out, "{}", report::format_summary(&result))?;
    Ok(())
}
