//! 건설 기간 연도별 OCC 집행·이자 적립 내역.
use tracing::debug;

use super::discount::{self, discount_factor};
use super::lcoe::{FinancingModel, LcoeError, LcoeInput};

/// 건설 연도 한 해의 집행/이자/현재가치 내역.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstructionYear {
    /// 건설 연도 (1부터)
    pub year: u32,
    /// 연말까지 누적 집행된 OCC
    pub occ_spent: f64,
    /// 이자 부과 기준 원금
    pub principal: f64,
    /// 당해 이자
    pub interest: f64,
    /// 당해까지 누적 이자
    pub accrued_interest: f64,
    /// 당해 현금 유출 (OCC 분할액 + 당해 이자)
    pub cash_outflow: f64,
    /// 연말 기준 할인계수
    pub discount_factor: f64,
    /// 현금 유출의 현재가치
    pub present_value: f64,
}

/// 건설 연도별 내역을 한 해씩 계산하는 반복자.
///
/// 상태는 누적 집행액과 누적 이자뿐이므로 건설 기간 길이와 무관하게
/// 메모리를 더 쓰지 않는다.
#[derive(Debug, Clone)]
pub struct AccrualYears {
    model: FinancingModel,
    occ_per_year: f64,
    interest_rate: f64,
    discount_rate: f64,
    construction_years: u32,
    year: u32,
    occ_spent: f64,
    accrued_interest: f64,
}

impl Iterator for AccrualYears {
    type Item = ConstructionYear;

    fn next(&mut self) -> Option<ConstructionYear> {
        if self.year >= self.construction_years {
            return None;
        }
        self.year += 1;
        let year = self.year;

        self.occ_spent += self.occ_per_year;
        // 할인 전 연초 잔액 기준으로 이자를 매긴다.
        let principal = self.model.principal(self.occ_spent, self.accrued_interest);
        let interest = principal * self.interest_rate;
        self.accrued_interest += interest;

        let cash_outflow = self.occ_per_year + interest;
        let present_value = discount::present_value(cash_outflow, self.discount_rate, year);
        debug!(
            year,
            principal,
            interest,
            accrued_interest = self.accrued_interest,
            present_value,
            "건설 연도 이자 적립"
        );

        Some(ConstructionYear {
            year,
            occ_spent: self.occ_spent,
            principal,
            interest,
            accrued_interest: self.accrued_interest,
            cash_outflow,
            discount_factor: discount_factor(self.discount_rate, year),
            present_value,
        })
    }
}

/// 입력을 검사한 뒤 건설 연도별 내역 반복자를 만든다.
pub fn accrual_years(input: &LcoeInput) -> Result<AccrualYears, LcoeError> {
    input.validate()?;
    Ok(AccrualYears {
        model: input.model,
        occ_per_year: input.occ / f64::from(input.construction_years),
        interest_rate: input.interest_rate,
        discount_rate: input.discount_rate,
        construction_years: input.construction_years,
        year: 0,
        occ_spent: 0.0,
        accrued_interest: 0.0,
    })
}

/// 건설 기간 동안의 연도별 내역 표를 만든다.
///
/// 마지막 행의 `accrued_interest`가 총 IDC이고, `present_value`의 합이
/// LCOE 분자(비용 현재가치)이다.
pub fn construction_schedule(input: &LcoeInput) -> Result<Vec<ConstructionYear>, LcoeError> {
    Ok(accrual_years(input)?.collect())
}
