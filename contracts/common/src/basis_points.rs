use soroban_fixed_point_math::FixedPoint;

use crate::BPS_FACTOR;

pub trait BasisPointMath<T: Into<i128>> {
    /// Calculates value * bps / 10_000, floored
    fn bps_mul(self, bps: T) -> Option<i128>;
}

impl<T: Into<i128>, V: Into<i128>> BasisPointMath<T> for V {
    fn bps_mul(self, bps: T) -> Option<i128> {
        let value: i128 = self.into();
        let bps: i128 = bps.into();
        if value == 0 || bps == 0 {
            return Some(0);
        }

        value.fixed_mul_floor(bps, BPS_FACTOR)
    }
}

/// Signed change from `reference` to `current` in basis points, truncated
/// toward zero. None when `reference` is zero or the intermediate product
/// overflows.
pub fn change_bps(reference: i128, current: i128) -> Option<i128> {
    if reference == 0 {
        return None;
    }

    current
        .checked_sub(reference)?
        .checked_mul(BPS_FACTOR)?
        .checked_div(reference)
}
