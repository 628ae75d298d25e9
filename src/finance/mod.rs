//! 발전 사업 재무 계산 모듈 모음.
//! 건설 중 이자 적립, 연말 기준 할인, LCOE 산정으로 구성한다.

pub mod discount;
pub mod lcoe;
pub mod schedule;

pub use lcoe::*;
pub use schedule::{accrual_years, construction_schedule, AccrualYears, ConstructionYear};
