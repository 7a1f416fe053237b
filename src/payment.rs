use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::decimal::Rate;

/// monthly installment for `amount` spread over `period` months with a flat surcharge of `rate`
///
/// `trunc(amount / period * (1 + rate))`, multiplied before dividing so whole results stay whole
pub fn monthly_payment(amount: u32, period: u32, rate: Rate) -> u32 {
    if period == 0 {
        return 0;
    }
    let total = Decimal::from(amount) * rate.factor();
    (total / Decimal::from(period)).trunc().to_u32().unwrap_or(0)
}
