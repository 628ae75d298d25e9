use std::fmt::Display;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;

use crate::app::AppError;
use crate::config::{ProjectConfig, DEFAULT_CONFIG_FILE};
use crate::finance::{FinancingModel, ValuationPoint};
use crate::logging::DEFAULT_LOG_LEVEL;

/// 명령행 인자. 지정한 값은 설정 파일의 기본값을 덮어쓴다.
#[derive(Debug, Parser)]
#[command(version, about = "발전 사업의 균등화 발전원가(LCOE) 계산기")]
pub struct Cli {
    /// 설정 파일 경로 (없으면 기본값으로 생성)
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,
    /// 건설비(OCC)
    #[arg(long)]
    pub occ: Option<f64>,
    /// 건설 기간 [년]
    #[arg(long)]
    pub construction_years: Option<u32>,
    /// 운전 기간 [년]
    #[arg(long)]
    pub useful_life: Option<u32>,
    /// 할인율 (소수, 예: 0.07)
    #[arg(long, allow_negative_numbers = true)]
    pub discount_rate: Option<f64>,
    /// 건설 중 이자율 (소수, 예: 0.05)
    #[arg(long, allow_negative_numbers = true)]
    pub interest_rate: Option<f64>,
    /// 연간 발전량
    #[arg(long)]
    pub energy_per_year: Option<f64>,
    /// IDC 적립 방식: standard | rab
    #[arg(long)]
    pub model: Option<FinancingModel>,
    /// 할인 기준 시점: soc | cod
    #[arg(long)]
    pub valuation_point: Option<ValuationPoint>,
    /// 건설 연도별 내역 표를 함께 출력
    #[arg(long)]
    pub schedule: bool,
    /// 각 입력값을 대화형으로 입력
    #[arg(short, long)]
    pub interactive: bool,
    /// 로그 레벨 (RUST_LOG가 우선)
    #[arg(long, default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,
}

impl Cli {
    /// 명령행에서 지정한 값으로 사업 입력값을 덮어쓴다.
    pub fn apply_overrides(&self, project: &mut ProjectConfig) {
        if let Some(v) = self.occ {
            project.occ = v;
        }
        if let Some(v) = self.construction_years {
            project.construction_years = v;
        }
        if let Some(v) = self.useful_life {
            project.useful_life = v;
        }
        if let Some(v) = self.discount_rate {
            project.discount_rate = v;
        }
        if let Some(v) = self.interest_rate {
            project.interest_rate = v;
        }
        if let Some(v) = self.energy_per_year {
            project.energy_per_year = v;
        }
        if let Some(v) = self.model {
            project.model = v;
        }
        if let Some(v) = self.valuation_point {
            project.valuation_point = v;
        }
    }
}

/// 사업 입력값을 차례로 묻는다. 빈 입력은 현재 값을 유지한다.
pub fn prompt_project<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    project: &mut ProjectConfig,
) -> Result<(), AppError> {
    writeln!(out, "\n-- LCOE 입력 (엔터: 현재 값 유지) --")?;
    project.occ = read_value(input, out, "건설비(OCC)", project.occ)?;
    project.construction_years =
        read_value(input, out, "건설 기간 [년]", project.construction_years)?;
    project.useful_life = read_value(input, out, "운전 기간 [년]", project.useful_life)?;
    project.discount_rate = read_value(input, out, "할인율", project.discount_rate)?;
    project.interest_rate = read_value(input, out, "건설 중 이자율", project.interest_rate)?;
    project.energy_per_year = read_value(input, out, "연간 발전량", project.energy_per_year)?;
    project.model = read_value(input, out, "IDC 방식 (standard/rab)", project.model)?;
    project.valuation_point =
        read_value(input, out, "할인 기준 시점 (soc/cod)", project.valuation_point)?;
    Ok(())
}

fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<Option<String>, AppError> {
    write!(out, "{prompt}")?;
    out.flush()?;
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf))
}

fn read_value<T, R, W>(input: &mut R, out: &mut W, label: &str, current: T) -> Result<T, AppError>
where
    T: FromStr + Display,
    R: BufRead,
    W: Write,
{
    let prompt = format!("{label} [{current}]: ");
    loop {
        // 입력이 끝나면 현재 값을 그대로 쓴다.
        let Some(line) = read_line(input, out, &prompt)? else {
            return Ok(current);
        };
        let line = line.trim();
        if line.is_empty() {
            return Ok(current);
        }
        match line.parse::<T>() {
            Ok(v) => return Ok(v),
            Err(_) => writeln!(out, "올바른 값을 입력하세요.")?,
        }
    }
}
