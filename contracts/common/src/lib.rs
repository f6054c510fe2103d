#![deny(warnings)]
#![no_std]

mod basis_points;

pub use basis_points::*;

/// Implied fractional digits of every oracle price
pub const DECIMALS: u32 = 18;

/// One whole unit of the quoted asset in oracle precision
pub const PRICE_ONE: i128 = 1_000_000_000_000_000_000;

/// Basis point representation of 100%
pub const BPS_FACTOR: i128 = 10_000;
