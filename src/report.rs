//! 계산 결과 출력 형식.
use std::fmt::Write;

use crate::finance::{ConstructionYear, LcoeResult};

/// 소수점 없이 반올림하고 세 자리마다 쉼표를 넣는다.
pub fn group_thousands(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let digits = format!("{:.0}", value.abs());
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0.0 && digits.bytes().any(|b| b != b'0') {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `LCOE: 12.43, Total IDC: 160,382,562` 형태의 요약.
pub fn format_summary(result: &LcoeResult) -> String {
    format!(
        "LCOE: {:.2}, Total IDC: {}",
        result.lcoe,
        group_thousands(result.total_idc)
    )
}

/// 건설 연도별 내역 표.
pub fn format_schedule(rows: &[ConstructionYear]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>4} {:>18} {:>18} {:>16} {:>18} {:>8} {:>18}",
        "Year", "OCC spent", "Principal", "Interest", "Accrued IDC", "DF", "PV outflow"
    );
    for row in rows {
        let _ = writeln!(
            out,
            "{:>4} {:>18} {:>18} {:>16} {:>18} {:>8.4} {:>18}",
            row.year,
            group_thousands(row.occ_spent),
            group_thousands(row.principal),
            group_thousands(row.interest),
            group_thousands(row.accrued_interest),
            row.discount_factor,
            group_thousands(row.present_value),
        );
    }
    out
}
