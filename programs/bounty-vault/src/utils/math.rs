use crate::constants::HUNDRED_PERCENT;
use crate::errors::ErrorCode;
use anchor_lang::prelude::*;

/// floor(a * b / denom), failing on overflow and on a zero denominator
pub fn mul_div_floor(a: u128, b: u128, denom: u128) -> Result<u128> {
    require!(denom > 0, ErrorCode::DivisionByZero);
    let num = a.checked_mul(b).ok_or(ErrorCode::CalculationOverflow)?;
    Ok(num / denom)
}

pub fn to_u64(value: u128) -> Result<u64> {
    u64::try_from(value).map_err(|_| error!(ErrorCode::CalculationOverflow))
}

/// Portion of `amount` expressed in basis points.
pub fn bps_of(amount: u64, bps: u64) -> Result<u64> {
    to_u64(mul_div_floor(amount as u128, bps as u128, HUNDRED_PERCENT as u128)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mul_div_floors() {
        assert_eq!(mul_div_floor(10, 3, 4).unwrap(), 7);
        assert_eq!(mul_div_floor(0, 3, 4).unwrap(), 0);
    }

    #[test]
    fn mul_div_rejects_zero_denominator() {
        assert_eq!(
            mul_div_floor(1, 1, 0).unwrap_err(),
            error!(ErrorCode::DivisionByZero)
        );
    }

    #[test]
    fn mul_div_rejects_overflow() {
        assert_eq!(
            mul_div_floor(u128::MAX, 2, 1).unwrap_err(),
            error!(ErrorCode::CalculationOverflow)
        );
    }

    #[test]
    fn bps_of_amount() {
        assert_eq!(bps_of(1_000_000, 200).unwrap(), 20_000);
        assert_eq!(bps_of(99, 100).unwrap(), 0);
    }
}
