use super::*;

use core::fmt::{Debug, Display};

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Debug for Posit<N, ES, Int> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let bits = self.0.as_unsigned();
    if const { Self::JUNK_BITS == 0 } {
      f.debug_tuple("Posit")
        .field(&format_args!("0b{bits:0w$b}", w = Int::BITS as usize))
        .finish()
    } else {
      let junk = bits >> Self::BITS;
      let significant = (bits << Self::JUNK_BITS) >> Self::JUNK_BITS;
      f.debug_tuple("Posit")
        .field(&format_args!(
          "0b{junk:0wj$b}_{significant:0ws$b}",
          wj = Self::JUNK_BITS as usize, ws = Self::BITS as usize,
        ))
        .finish()
    }
  }
}

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Debug for Decoded<N, ES, Int> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let hidden = self.frac >> Self::FRAC_WIDTH;
    let explicit = (self.frac << 1) >> 1;
    f.debug_struct("Decoded")
      .field("sign", &format_args!("{}", if self.sign { '-' } else { '+' }))
      .field("scale", &format_args!("{:+}", self.scale))
      .field("frac", &format_args!(
        "0b{hidden:b}_{explicit:0w$b}",
        w = Self::FRAC_WIDTH as usize,
      ))
      .finish()
  }
}

impl<
  const N: u32,
  const ES: u32,
  Int: crate::Int,
> Display for Posit<N, ES, Int> {
  /// Displays via the (correctly rounded) `f64` value; NaR displays as `"NaR"`.
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    use crate::RoundFrom;
    if self.is_nar() {
      write!(f, "NaR")
    } else {
      Display::fmt(&f64::round_from(*self), f)
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn posit_nojunk() {
    assert_eq!(
      format!("{:?}", Posit::<8, 2, i8>::from_bits_unsigned(0b00101011)).as_str(),
      "Posit(0b00101011)",
    );
    assert_eq!(
      format!("{:?}", Posit::<8, 2, i8>::from_bits_unsigned(0b10101011)).as_str(),
      "Posit(0b10101011)",
    );
  }

  #[test]
  fn posit_junk() {
    assert_eq!(
      format!("{:?}", Posit::<6, 2, i16>::from_bits_unsigned(0b001011)).as_str(),
      "Posit(0b0000000000_001011)",
    );
    assert_eq!(
      format!("{:?}", Posit::<6, 2, i16>::from_bits_unsigned(0b101011)).as_str(),
      "Posit(0b1111111111_101011)",
    );
  }

  #[test]
  fn decoded() {
    assert_eq!(
      format!("{:?}", Decoded::<6, 2, i16> { sign: false, scale: 3, frac: 0b1_001010111011010_u16 }).as_str(),
      "Decoded { sign: +, scale: +3, frac: 0b1_001010111011010 }",
    );
    assert_eq!(
      format!("{:?}", Decoded::<6, 2, i16> { sign: true, scale: -16, frac: 0b1_000000000000001_u16 }).as_str(),
      "Decoded { sign: -, scale: -16, frac: 0b1_000000000000001 }",
    );
  }

  #[test]
  fn display() {
    assert_eq!(format!("{}", crate::p8::ONE).as_str(), "1");
    assert_eq!(format!("{}", -crate::p8::ONE).as_str(), "-1");
    assert_eq!(format!("{}", crate::p8::ZERO).as_str(), "0");
    assert_eq!(format!("{}", crate::p8::NAR).as_str(), "NaR");
    assert_eq!(format!("{}", crate::p8::from_bits_unsigned(0b0010_0000)).as_str(), "0.0625");
  }
}
