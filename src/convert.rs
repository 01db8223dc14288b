//! String rendering. Base 2 prints the raw limbs, most significant first, each
//! as a full 64-digit group; base 10 peels decimal digits off the magnitude by
//! repeated division. Parsing strings back into `BigInt` is deliberately not
//! offered here.

use std::fmt::{self, Display, Formatter};

use crate::BigInt;

impl BigInt {
    /// Each limb as 64 binary digits, most significant limb first, groups
    /// separated by spaces. Shows the magnitude only; the sign is not encoded
    /// in the bits.
    fn binary_string(&self) -> String {
        self.limbs
            .iter()
            .rev()
            .map(|limb| format!("{limb:064b}"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Decimal digits of the magnitude, least significant first, then the sign,
    /// reversed at the end. Each round of the shared division routine yields
    /// one digit as the remainder and the shortened magnitude as the quotient.
    fn decimal_string(&self) -> String {
        if self.is_zero() {
            return String::from("0");
        }

        let ten = BigInt::from(10u64);
        let mut buffer = self.abs();
        let mut output = String::new();
        while !buffer.is_zero() {
            let (quotient, remainder) = Self::div_rem_magnitude(&buffer, &ten);
            output.push(char::from(b'0' + remainder.limbs[0] as u8));
            buffer = quotient;
        }
        if !self.sign {
            output.push('-');
        }
        output.chars().rev().collect()
    }

    /// Render in the given base. Base 2 gives the limb-grouped binary form;
    /// anything else falls back to decimal.
    pub fn to_string_radix(&self, base: u32) -> String {
        match base {
            2 => self.binary_string(),
            // More bases to be added as needed
            _ => self.decimal_string(),
        }
    }
}

impl Display for BigInt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.decimal_string())
    }
}

impl fmt::Binary for BigInt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.binary_string())
    }
}
