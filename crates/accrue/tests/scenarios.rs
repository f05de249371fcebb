//! End-to-end scenarios through the public facade.

use accrue::prelude::*;
use approx::assert_abs_diff_eq;
use serde::Deserialize;

const REFERENCE: &str = include_str!("fixtures/tvm_reference.json");

// ============================================================================
// JSON Structures for Test Data
// ============================================================================

#[derive(Debug, Deserialize)]
#[allow(dead_code)] // metadata is informational only
struct Reference {
    metadata: serde_json::Value,
    xirr: Vec<XirrCase>,
    present_value: Vec<PresentValueCase>,
    future_value: Vec<FutureValueCase>,
    return_coefficient: Vec<CoefficientCase>,
}

#[derive(Debug, Deserialize)]
struct XirrCase {
    anchor: f64,
    anchor_date: String,
    income: f64,
    income_start: String,
    months: u32,
    xirr: f64,
    xirr_tolerance: f64,
    xnpv_rate: f64,
    xnpv: f64,
    xnpv_tolerance: f64,
}

impl XirrCase {
    fn series(&self) -> CashFlowSeries {
        CashFlowSeries::monthly(
            self.anchor,
            parse_date(&self.anchor_date),
            self.months,
            self.income,
            parse_date(&self.income_start),
        )
    }
}

#[derive(Debug, Deserialize)]
struct PresentValueCase {
    rate: f64,
    periods: u32,
    payment: f64,
    future_value: f64,
    due: bool,
    expected: f64,
}

#[derive(Debug, Deserialize)]
struct FutureValueCase {
    rate: f64,
    periods: u32,
    payment: f64,
    present_value: f64,
    due: bool,
    expected: f64,
}

#[derive(Debug, Deserialize)]
struct CoefficientCase {
    annual_rate: f64,
    periods: u32,
    present_value: f64,
    expected: f64,
}

fn load() -> Reference {
    serde_json::from_str(REFERENCE).expect("reference fixture should be valid JSON")
}

fn parse_date(s: &str) -> Date {
    Date::parse(s).unwrap_or_else(|_| panic!("Failed to parse date: {}", s))
}

fn timing(due: bool) -> PaymentTiming {
    if due {
        PaymentTiming::BeginningOfPeriod
    } else {
        PaymentTiming::EndOfPeriod
    }
}

// ============================================================================
// Reference Tests
// ============================================================================

#[test]
fn test_xirr_reference() {
    for case in load().xirr {
        let series = case.series();
        let rate = xirr(&series).unwrap();
        assert_abs_diff_eq!(rate, case.xirr, epsilon = case.xirr_tolerance);
        assert!(value_at_rate(&series, rate, &Act365Fixed).abs() < 1e-8);
    }
}

#[test]
fn test_xnpv_reference() {
    for case in load().xirr {
        let value = xnpv(case.xnpv_rate, &case.series()).unwrap();
        assert_abs_diff_eq!(value, case.xnpv, epsilon = case.xnpv_tolerance);
    }
}

#[test]
fn test_present_value_reference() {
    for case in load().present_value {
        let pv = present_value(
            case.rate,
            case.periods,
            case.payment,
            case.future_value,
            timing(case.due),
        );
        assert_abs_diff_eq!(pv, case.expected, epsilon = 0.01);
    }
}

#[test]
fn test_future_value_reference() {
    for case in load().future_value {
        let fv = future_value(
            case.rate,
            case.periods,
            case.payment,
            case.present_value,
            timing(case.due),
        );
        assert_abs_diff_eq!(fv, case.expected, epsilon = 0.01);
    }
}

#[test]
fn test_return_coefficient_reference() {
    for case in load().return_coefficient {
        let coefficient = return_coefficient(
            case.annual_rate,
            case.periods,
            case.present_value,
            0.0,
            PaymentTiming::EndOfPeriod,
        );
        assert_abs_diff_eq!(coefficient, case.expected, epsilon = 1e-6);
    }
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_loan_yield_round_trip() {
    let start = parse_date("2010-05-10");
    let series = loan_cash_flows(1_000_000.0, start, 240, 0.12345 / 12.0).unwrap();

    let rate = xirr(&series).unwrap();
    assert_abs_diff_eq!(rate, 0.13053038213, epsilon = 1e-10);

    // Calendar-month dates put the XIRR just under the monthly-compounded rate
    let effective = effective_rate(0.12345, 12).unwrap();
    assert_abs_diff_eq!(effective, 0.13068011771, epsilon = 1e-10);
    assert_abs_diff_eq!(effective - rate, 1.4973558e-4, epsilon = 1e-9);
}

#[test]
fn test_loan_schedule_matches_cash_flows() {
    let rate = 0.12345 / 12.0;
    let schedule =
        AmortizationSchedule::new(rate, 240, 1_000_000.0, PaymentTiming::EndOfPeriod).unwrap();
    let series = loan_cash_flows(1_000_000.0, parse_date("2010-05-10"), 240, rate).unwrap();

    for (row, cf) in schedule.rows().zip(series.iter().skip(1)) {
        // Borrower pays what the lender receives
        assert_abs_diff_eq!(-row.payment, cf.amount(), epsilon = 1e-9);
    }

    let repaid: f64 = schedule.rows().map(|row| row.principal).sum();
    assert_abs_diff_eq!(repaid, -1_000_000.0, epsilon = 1e-4);
}

#[test]
fn test_two_entries_rejected_by_xirr_but_not_xnpv() {
    let series = CashFlowSeries::new(vec![
        CashFlow::new(parse_date("2020-01-01"), -100.0),
        CashFlow::new(parse_date("2021-01-01"), 110.0),
    ]);

    let err = xirr(&series).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parameter);
    assert!(xnpv(0.1, &series).is_ok());
}

#[test]
fn test_irr_and_npv_agree() {
    let series = CashFlowSeries::monthly(
        -1_000.0,
        parse_date("2024-01-01"),
        5,
        300.0,
        parse_date("2024-02-01"),
    );
    let outcome = irr(&series).unwrap();

    assert!(npv(outcome.rate, &series).unwrap().abs() < 1e-8);
    let (low, high) = outcome.bracket;
    assert!(low <= outcome.rate && outcome.rate <= high);
}

#[test]
fn test_batch_over_reference_scenarios() {
    let series: Vec<CashFlowSeries> = load().xirr.iter().map(XirrCase::series).collect();
    let metrics = evaluate_series(&series, 0.04);

    for (m, case) in metrics.iter().zip(load().xirr) {
        assert_abs_diff_eq!(m.xirr.unwrap(), case.xirr, epsilon = case.xirr_tolerance);
    }
}

#[test]
fn test_series_serializes_as_flow_records() {
    let series = CashFlowSeries::new(vec![CashFlow::new(parse_date("2000-05-15"), -100.0)]);
    let json = serde_json::to_string(&series).unwrap();
    assert_eq!(json, r#"[{"date":"2000-05-15","flow":-100.0}]"#);

    let back: CashFlowSeries = serde_json::from_str(&json).unwrap();
    assert_eq!(back, series);
}
