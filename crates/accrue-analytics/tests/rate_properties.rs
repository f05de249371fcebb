//! Property tests for the rate solvers and valuation functions.

use accrue_analytics::prelude::*;
use accrue_core::daycounts::Act365Fixed;
use accrue_core::{CashFlowSeries, Date};
use proptest::prelude::*;

prop_compose! {
    /// A conventional investment: one outlay followed by 2 to 48 monthly receipts
    /// totalling 1.2x to 3x the outlay.
    fn investment()(
        cost in 100.0f64..1_000.0,
        months in 2u32..=48,
        multiple in 1.2f64..3.0,
        start_days in 0i64..15_000,
        gap in 1i64..60,
    ) -> CashFlowSeries {
        let start = Date::from_ymd(1990, 1, 1).unwrap().add_days(start_days);
        let income = cost * multiple / f64::from(months);
        CashFlowSeries::monthly(-cost, start, months, income, start.add_days(gap))
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_xirr_zeroes_dated_value(series in investment()) {
        let result = XirrSolver::new().solve(&series).unwrap();
        let residual = value_at_rate(&series, result.rate, &Act365Fixed);

        prop_assert!(residual.abs() < 1e-8, "residual {residual} at {}", result.rate);
        prop_assert!(result.rate > 0.0);
    }

    #[test]
    fn prop_xnpv_at_xirr_is_zero(series in investment()) {
        let rate = xirr(&series).unwrap();
        prop_assert!(xnpv(rate, &series).unwrap().abs() < 1e-8);
    }

    #[test]
    fn prop_xnpv_decreases_in_rate(series in investment(), r in 0.0f64..0.5) {
        let lower = xnpv(r, &series).unwrap();
        let higher = xnpv(r + 0.01, &series).unwrap();
        prop_assert!(higher < lower);
    }

    #[test]
    fn prop_reordering_keeps_xirr(series in investment()) {
        // Monthly builders already produce ascending dates
        let ordered = series.order_by_date();
        prop_assert_eq!(&ordered, &series);
        prop_assert_eq!(xirr(&ordered).unwrap(), xirr(&series).unwrap());
    }
}

#[test]
fn xirr_is_deterministic() {
    let series = CashFlowSeries::monthly(
        -20_000.0,
        Date::parse("2000-05-15").unwrap(),
        18,
        1247.6957453033,
        Date::parse("2000-06-20").unwrap(),
    );
    let first = XirrSolver::new().solve(&series).unwrap();
    for _ in 0..5 {
        assert_eq!(XirrSolver::new().solve(&series).unwrap(), first);
    }
}
