/// 연말 기준 할인계수 1 / (1 + r)^year 를 계산한다.
///
/// `year`는 1부터 시작하며, 0이면 할인하지 않는다(계수 1).
/// `year`는 [`MAX_DISCOUNT_YEAR`](super::lcoe::MAX_DISCOUNT_YEAR) 이하여야 한다.
pub fn discount_factor(rate: f64, year: u32) -> f64 {
    1.0 / (1.0 + rate).powi(year as i32)
}

/// `year`년 말에 발생하는 금액을 현재가치로 환산한다.
pub fn present_value(amount: f64, rate: f64, year: u32) -> f64 {
    amount / (1.0 + rate).powi(year as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_zero_is_not_discounted() {
        assert_eq!(discount_factor(0.07, 0), 1.0);
        assert_eq!(present_value(123.0, 0.07, 0), 123.0);
    }

    #[test]
    fn zero_rate_keeps_amount() {
        assert_eq!(present_value(500.0, 0.0, 30), 500.0);
    }

    #[test]
    fn factor_matches_present_value() {
        let df = discount_factor(0.05, 3);
        assert!((df - 1.0 / 1.157_625).abs() < 1e-12);
        assert!((present_value(1000.0, 0.05, 3) - 1000.0 * df).abs() < 1e-9);
    }

    #[test]
    fn negative_rate_above_minus_one_inflates() {
        // r = -0.5 이면 매년 두 배가 된다.
        assert!((present_value(1.0, -0.5, 2) - 4.0).abs() < 1e-12);
    }
}
