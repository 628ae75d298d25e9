//! 균등화 발전원가(LCOE) 계산.
//!
//! 건설 기간 동안 OCC를 균등 분할 집행하면서 건설 중 이자(IDC)를 적립하고,
//! 운전 기간의 발전량을 선택한 기준 시점으로 할인하여 비율을 구한다.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::discount::present_value;
use super::schedule::accrual_years;

/// LCOE 계산 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LcoeError {
    /// 입력값 오류 (알 수 없는 모델/기준 시점, 0년 기간 등)
    #[error("입력 오류: {0}")]
    InvalidArgument(String),
    /// 발전량 현재가치가 0이라 나눗셈 불가
    #[error("발전량 현재가치가 0이므로 LCOE를 계산할 수 없습니다.")]
    ZeroEnergy,
}

/// 건설 중 이자(IDC) 적립 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FinancingModel {
    /// 집행 OCC와 미지급 누적 이자 모두에 이자가 붙는다(복리).
    #[default]
    Standard,
    /// 규제자산기준(RAB). 집행 OCC에만 이자가 붙는다(단리).
    Rab,
}

impl FinancingModel {
    /// 해당 연도의 이자 부과 기준 원금.
    pub fn principal(self, occ_spent_to_date: f64, accrued_interest: f64) -> f64 {
        match self {
            FinancingModel::Standard => occ_spent_to_date + accrued_interest,
            FinancingModel::Rab => occ_spent_to_date,
        }
    }

    /// 설정 파일·명령행에서 쓰는 이름.
    pub fn as_str(self) -> &'static str {
        match self {
            FinancingModel::Standard => "standard",
            FinancingModel::Rab => "rab",
        }
    }
}

impl fmt::Display for FinancingModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FinancingModel {
    type Err = LcoeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(FinancingModel::Standard),
            "rab" => Ok(FinancingModel::Rab),
            _ => Err(LcoeError::InvalidArgument(format!(
                "알 수 없는 모델: '{s}' (standard 또는 rab)"
            ))),
        }
    }
}

/// 발전량 할인 기준 시점.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ValuationPoint {
    /// 착공 시점(SOC). 운전 i년차 발전량을 `건설기간 + i`년으로 할인한다.
    #[default]
    #[serde(rename = "soc")]
    StartOfConstruction,
    /// 상업운전 개시 시점(COD). 운전 i년차 발전량을 i년으로 할인한다.
    #[serde(rename = "cod")]
    CommercialOperationDate,
}

impl ValuationPoint {
    /// 운전 `operating_year`년차 발전량에 적용할 할인 지수.
    pub fn discount_year(self, construction_years: u32, operating_year: u32) -> u32 {
        match self {
            ValuationPoint::StartOfConstruction => construction_years + operating_year,
            ValuationPoint::CommercialOperationDate => operating_year,
        }
    }

    /// 설정 파일·명령행에서 쓰는 이름.
    pub fn as_str(self) -> &'static str {
        match self {
            ValuationPoint::StartOfConstruction => "soc",
            ValuationPoint::CommercialOperationDate => "cod",
        }
    }
}

impl fmt::Display for ValuationPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValuationPoint {
    type Err = LcoeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "soc" => Ok(ValuationPoint::StartOfConstruction),
            "cod" => Ok(ValuationPoint::CommercialOperationDate),
            _ => Err(LcoeError::InvalidArgument(format!(
                "알 수 없는 할인 기준 시점: '{s}' (soc 또는 cod)"
            ))),
        }
    }
}

/// 할인 지수의 상한. `powi`가 `i32` 지수를 받는다.
pub const MAX_DISCOUNT_YEAR: u32 = i32::MAX as u32;

/// LCOE 계산 입력.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LcoeInput {
    /// 건설비(OCC) [통화]
    pub occ: f64,
    /// 건설 기간 [년]
    pub construction_years: u32,
    /// 운전 기간 [년]
    pub useful_life: u32,
    /// 할인율 (소수)
    pub discount_rate: f64,
    /// 건설 중 이자율 (소수)
    pub interest_rate: f64,
    /// 연간 발전량 [에너지/년]
    pub energy_per_year: f64,
    /// IDC 적립 방식
    pub model: FinancingModel,
    /// 발전량 할인 기준 시점
    pub valuation_point: ValuationPoint,
}

impl LcoeInput {
    /// 계산 전 입력 범위를 검사한다.
    pub fn validate(&self) -> Result<(), LcoeError> {
        if self.construction_years == 0 {
            return Err(LcoeError::InvalidArgument(
                "건설 기간은 1년 이상이어야 합니다.".to_string(),
            ));
        }
        if self.useful_life == 0 {
            return Err(LcoeError::InvalidArgument(
                "운전 기간은 1년 이상이어야 합니다.".to_string(),
            ));
        }
        // SOC 기준 마지막 운전 연도의 할인 지수가 가장 크다.
        let last_year = u64::from(self.construction_years) + u64::from(self.useful_life);
        if last_year > u64::from(MAX_DISCOUNT_YEAR) {
            return Err(LcoeError::InvalidArgument(format!(
                "건설 기간과 운전 기간의 합은 {MAX_DISCOUNT_YEAR}년 이하여야 합니다: {last_year}"
            )));
        }
        let fields = [
            ("occ", self.occ),
            ("discount_rate", self.discount_rate),
            ("interest_rate", self.interest_rate),
            ("energy_per_year", self.energy_per_year),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(LcoeError::InvalidArgument(format!(
                    "{name} 값이 유한한 수가 아닙니다: {value}"
                )));
            }
        }
        if self.discount_rate <= -1.0 {
            return Err(LcoeError::InvalidArgument(format!(
                "할인율은 -1보다 커야 합니다: {}",
                self.discount_rate
            )));
        }
        Ok(())
    }
}

/// LCOE 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LcoeResult {
    /// 균등화 발전원가 [통화/에너지]
    pub lcoe: f64,
    /// 건설 기간 동안 적립된 총 이자 [통화]
    pub total_idc: f64,
}

/// 운전 기간 발전량의 현재가치를 구한다.
pub fn energy_present_value(input: &LcoeInput) -> f64 {
    (1..=input.useful_life).fold(0.0, |pv_energy, year| {
        let discount_year = input
            .valuation_point
            .discount_year(input.construction_years, year);
        pv_energy + present_value(input.energy_per_year, input.discount_rate, discount_year)
    })
}

/// 건설비, 금융 조건, 발전량으로 LCOE와 총 IDC를 계산한다.
///
/// 1단계에서 건설 연도별 (OCC 분할액 + 당해 이자)를 연말 기준으로 할인해
/// 비용 현재가치를 누적하고, 2단계에서 발전량 현재가치를 누적한 뒤 나눈다.
///
/// # Errors
///
/// 건설/운전 기간이 0이거나 수치가 유효하지 않으면 [`LcoeError::InvalidArgument`],
/// 발전량 현재가치가 0이면 무한대를 반환하는 대신 [`LcoeError::ZeroEnergy`].
pub fn compute_lcoe(input: LcoeInput) -> Result<LcoeResult, LcoeError> {
    input.validate()?;

    let (cost_pv, total_idc) = accrual_years(&input)?
        .fold((0.0, 0.0), |(cost_pv, _), row| {
            (cost_pv + row.present_value, row.accrued_interest)
        });

    let pv_energy = energy_present_value(&input);
    if pv_energy == 0.0 {
        return Err(LcoeError::ZeroEnergy);
    }

    let lcoe = cost_pv / pv_energy;
    debug!(
        model = %input.model,
        valuation_point = %input.valuation_point,
        cost_pv,
        pv_energy,
        lcoe,
        total_idc,
        "LCOE 계산 완료"
    );
    Ok(LcoeResult { lcoe, total_idc })
}
