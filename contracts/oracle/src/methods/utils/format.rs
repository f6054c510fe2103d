use common::PRICE_ONE;
use price_oracle_interface::types::error::Error;
use soroban_sdk::{Env, String, Vec};

// "$" + up to 39 digits of i128 + "." + 2 fractional digits
const PRICE_BUF_LEN: usize = 43;

const LABEL_BUF_LEN: usize = 256;

/// Formats a committed (hence positive) price for display. The fraction is
/// truncated to two digits; a trailing zero is stripped and sub-0.10
/// fractions render unpadded: 325.67 -> "$325.67", 100.05 -> "$100.5",
/// 100.00 -> "$100".
pub fn format_price(env: &Env, price: i128) -> String {
    let whole = (price / PRICE_ONE) as u128;
    let mut frac = ((price % PRICE_ONE) / (PRICE_ONE / 100)) as u128;

    let mut buf = [0u8; PRICE_BUF_LEN];
    buf[0] = b'$';
    let mut pos = write_decimal(&mut buf, 1, whole);

    if frac != 0 {
        if frac % 10 == 0 {
            frac /= 10;
        }

        buf[pos] = b'.';
        pos = write_decimal(&mut buf, pos + 1, frac);
    }

    String::from_bytes(env, &buf[..pos])
}

/// Builds the composite consensus label "Consensus(<sources joined by ',')>"
/// preserving input order, without dedup.
pub fn consensus_label(env: &Env, sources: &Vec<String>) -> Result<String, Error> {
    let mut buf = [0u8; LABEL_BUF_LEN];
    let mut pos = 0;

    append(&mut buf, &mut pos, b"Consensus(")?;

    for (i, source) in sources.iter().enumerate() {
        if i > 0 {
            append(&mut buf, &mut pos, b",")?;
        }

        let len = source.len() as usize;
        if pos + len > LABEL_BUF_LEN {
            return Err(Error::InvalidArgument);
        }

        source.copy_into_slice(&mut buf[pos..pos + len]);
        pos += len;
    }

    append(&mut buf, &mut pos, b")")?;

    Ok(String::from_bytes(env, &buf[..pos]))
}

fn append(buf: &mut [u8; LABEL_BUF_LEN], pos: &mut usize, bytes: &[u8]) -> Result<(), Error> {
    if *pos + bytes.len() > LABEL_BUF_LEN {
        return Err(Error::InvalidArgument);
    }

    buf[*pos..*pos + bytes.len()].copy_from_slice(bytes);
    *pos += bytes.len();

    Ok(())
}

fn write_decimal(buf: &mut [u8], pos: usize, value: u128) -> usize {
    let mut digits = [0u8; 39];
    let mut count = 0;
    let mut rest = value;

    loop {
        digits[count] = b'0' + (rest % 10) as u8;
        rest /= 10;
        count += 1;

        if rest == 0 {
            break;
        }
    }

    for i in 0..count {
        buf[pos + i] = digits[count - 1 - i];
    }

    pos + count
}
