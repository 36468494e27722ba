//! Display strings for amounts and ratios.

use rust_decimal::prelude::*;

const CURRENCY_SYMBOL: char = '€';

fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

fn group_thousands(integer: &str) -> String {
    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// `€12,000`, `€6,268.657`, `€-1,500`: grouped digits, at most three
/// decimals, trailing zeros dropped.
pub fn currency(value: Decimal) -> String {
    let rounded = round_half_up(value, 3).normalize();
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let digits = rounded.abs().to_string();
    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let mut out = format!("{CURRENCY_SYMBOL}{sign}{}", group_thousands(integer));
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// A percentage with one decimal place, `80.0%`.
pub fn percent(value: Decimal) -> String {
    format!("{:.1}%", round_half_up(value, 1))
}

/// Revenue achievement relative to target: `+5.0%` above, `-20.0%` below.
pub fn revenue_variance(variance: Decimal, on_target: bool) -> String {
    if on_target {
        format!("+{}", percent(variance))
    } else {
        percent(variance)
    }
}

/// Cost efficiency relative to budget: `-12.5%` under, `+13.5%` over.
pub fn cost_variance(variance: Decimal, within_budget: bool) -> String {
    let magnitude = percent(variance.abs());
    if within_budget {
        format!("-{magnitude}")
    } else {
        format!("+{magnitude}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_groups_thousands() {
        assert_eq!(currency(dec!(12000)), "€12,000");
        assert_eq!(currency(dec!(1234567.5)), "€1,234,567.5");
        assert_eq!(currency(dec!(300)), "€300");
        assert_eq!(currency(dec!(0)), "€0");
    }

    #[test]
    fn test_currency_rounds_to_thousandths() {
        assert_eq!(currency(dec!(6268.656716)), "€6,268.657");
        assert_eq!(currency(dec!(0.0005)), "€0.001");
        assert_eq!(currency(dec!(10.10)), "€10.1");
        assert_eq!(currency(dec!(1250.125)), "€1,250.125");
    }

    #[test]
    fn test_currency_keeps_sign() {
        assert_eq!(currency(dec!(-1500)), "€-1,500");
        assert_eq!(currency(dec!(-0.0001)), "€0");
    }

    #[test]
    fn test_percent_has_one_decimal() {
        assert_eq!(percent(dec!(80)), "80.0%");
        assert_eq!(percent(dec!(113.548387)), "113.5%");
        assert_eq!(percent(dec!(0.05)), "0.1%");
        assert_eq!(percent(Decimal::ZERO), "0.0%");
    }

    #[test]
    fn test_revenue_variance_sign() {
        assert_eq!(revenue_variance(dec!(-20), false), "-20.0%");
        assert_eq!(revenue_variance(dec!(0), true), "+0.0%");
        assert_eq!(revenue_variance(dec!(12.25), true), "+12.3%");
        assert_eq!(revenue_variance(dec!(-100), false), "-100.0%");
    }

    #[test]
    fn test_cost_variance_sign() {
        assert_eq!(cost_variance(dec!(13.548), false), "+13.5%");
        assert_eq!(cost_variance(dec!(-12.5), true), "-12.5%");
        assert_eq!(cost_variance(dec!(0), true), "-0.0%");
        assert_eq!(cost_variance(dec!(-100), true), "-100.0%");
    }
}
