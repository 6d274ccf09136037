//! Parsing and formatting of monetary amounts.

use crate::costs::domain::{CostCategory, Money, ParseCostCategoryError, ParseMoneyError};
use rstest::rstest;

#[rstest]
#[case("12", 1200)]
#[case("12.5", 1250)]
#[case("12,34", 1234)]
#[case(" 0.99 ", 99)]
#[case(".5", 50)]
#[case("-3.10", -310)]
fn parses_decimal_amounts(#[case] input: &str, #[case] cents: i64) {
    assert_eq!(input.parse::<Money>(), Ok(Money::from_cents(cents)));
}

#[rstest]
#[case("")]
#[case(".")]
#[case("1.234")]
#[case("12a")]
#[case("1.2.3")]
#[case("99999999999999999999")]
fn rejects_malformed_amounts(#[case] input: &str) {
    assert_eq!(
        input.parse::<Money>(),
        Err(ParseMoneyError(input.to_owned()))
    );
}

#[rstest]
#[case(Money::from_cents(123_456), "1234.56")]
#[case(Money::from_cents(5), "0.05")]
#[case(Money::from_cents(-250), "-2.50")]
#[case(Money::from_units(7), "7.00")]
fn displays_two_decimal_places(#[case] amount: Money, #[case] expected: &str) {
    assert_eq!(amount.to_string(), expected);
}

#[rstest]
fn sum_saturates_instead_of_overflowing() {
    let total: Money = [Money::from_cents(i64::MAX), Money::from_cents(1)]
        .into_iter()
        .sum();
    assert_eq!(total, Money::from_cents(i64::MAX));
}

#[rstest]
#[case("transportation", CostCategory::Transportation)]
#[case(" Tools ", CostCategory::Tools)]
#[case("PERMITS", CostCategory::Permits)]
#[case("other", CostCategory::Other)]
fn parses_cost_categories(#[case] input: &str, #[case] expected: CostCategory) {
    assert_eq!(CostCategory::try_from(input), Ok(expected));
}

#[rstest]
fn rejects_unknown_category() {
    assert_eq!(
        CostCategory::try_from("catering"),
        Err(ParseCostCategoryError("catering".to_owned()))
    );
}
