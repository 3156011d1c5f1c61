//! Digit Rendering
//!
//! Turns integers into digit strings for a base. Non-decimal bases render
//! the two's-complement bit pattern at the declared width; no sign is applied.

use super::base::Base;

/// Mask `value` to its low `width` bits
fn bit_pattern(value: i64, width: u32) -> u64 {
    if width >= 64 {
        value as u64
    } else {
        (value as u64) & ((1u64 << width) - 1)
    }
}

/// Signed decimal digits, optional `+` for non-negative values
pub(crate) fn decimal(value: i64, positive_sign: bool) -> String {
    if positive_sign && value >= 0 {
        format!("+{}", value)
    } else {
        value.to_string()
    }
}

/// Unsigned digits of the bit pattern in a power-of-two base.
/// Binary output is left-padded to whole nibbles, never past `width` bits.
pub(crate) fn pattern_digits(
    value: i64,
    width: u32,
    base: Base,
    uppercase: bool,
    nibble_separator: Option<char>,
) -> String {
    let bits = bit_pattern(value, width);
    match base {
        Base::Octal => format!("{:o}", bits),
        Base::Hexadecimal if uppercase => format!("{:X}", bits),
        Base::Hexadecimal => format!("{:x}", bits),
        Base::Binary => {
            let raw = format!("{:b}", bits);
            let padded_len = (raw.len().div_ceil(4) * 4).min(width as usize).max(raw.len());
            let padded = format!("{:0>len$}", raw, len = padded_len);
            match nibble_separator {
                Some(sep) => group_nibbles(&padded, sep),
                None => padded,
            }
        }
        // callers route decimal through `decimal`
        Base::Decimal => bits.to_string(),
    }
}

/// Insert `sep` every four digits, counting from the right
fn group_nibbles(digits: &str, sep: char) -> String {
    let lead = digits.len() % 4;
    let mut out = String::with_capacity(digits.len() + digits.len() / 4);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (i + 4 - lead) % 4 == 0 {
            out.push(sep);
        }
        out.push(ch);
    }
    out
}

/// Base prefix for `digits`, honoring case. Octal zero stays `0`.
pub(crate) fn prefix(base: Base, digits: &str, uppercase: bool) -> String {
    match base {
        Base::Octal if digits == "0" => String::new(),
        _ if uppercase => base.prefix().to_ascii_uppercase(),
        _ => base.prefix().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_values_use_declared_width() {
        assert_eq!(pattern_digits(-1, 32, Base::Hexadecimal, false, None), "ffffffff");
        assert_eq!(pattern_digits(-1, 8, Base::Hexadecimal, false, None), "ff");
        assert_eq!(pattern_digits(-1, 64, Base::Octal, false, None), "1777777777777777777777");
        assert_eq!(pattern_digits(-47347, 32, Base::Hexadecimal, false, None), "ffff470d");
    }

    #[test]
    fn binary_pads_to_nibbles_within_width() {
        assert_eq!(pattern_digits(15, 32, Base::Binary, false, None), "1111");
        assert_eq!(pattern_digits(5, 32, Base::Binary, false, None), "0101");
        assert_eq!(pattern_digits(16, 32, Base::Binary, false, None), "00010000");
        assert_eq!(pattern_digits(1, 1, Base::Binary, false, None), "1");
        assert_eq!(pattern_digits(0, 32, Base::Binary, false, None), "0000");
    }

    #[test]
    fn nibble_separator_groups_from_right() {
        assert_eq!(group_nibbles("00010000", '_'), "0001_0000");
        assert_eq!(group_nibbles("1111", '_'), "1111");
        assert_eq!(group_nibbles("110000", ' '), "11 0000");
    }

    #[test]
    fn octal_zero_has_no_prefix() {
        assert_eq!(prefix(Base::Octal, "0", false), "");
        assert_eq!(prefix(Base::Octal, "17", false), "0");
        assert_eq!(prefix(Base::Hexadecimal, "f", true), "0X");
    }
}
