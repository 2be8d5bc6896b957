/// A power-of-1024 unit of data size.
///
/// Unlike the units of a [`Duration`](crate::Duration), byte units carry no
/// calendar meaning. A size is just a number of bytes, so [`ToBytes`]
/// produces plain numbers and ordinary arithmetic applies.
///
/// # Example
///
/// ```
/// use jiff_units::ByteUnit;
///
/// assert_eq!(ByteUnit::Kilobyte.bytes(), 1024);
/// assert_eq!(ByteUnit::Exabyte.bytes(), 1 << 60);
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ByteUnit {
    /// 1 byte.
    Byte = 0,
    /// 1,024 bytes.
    Kilobyte = 1,
    /// 1,024 kilobytes.
    Megabyte = 2,
    /// 1,024 megabytes.
    Gigabyte = 3,
    /// 1,024 gigabytes.
    Terabyte = 4,
    /// 1,024 terabytes.
    Petabyte = 5,
    /// 1,024 petabytes.
    Exabyte = 6,
}

impl ByteUnit {
    /// All byte units, from biggest to smallest.
    pub const ALL: [ByteUnit; 7] = [
        ByteUnit::Exabyte,
        ByteUnit::Petabyte,
        ByteUnit::Terabyte,
        ByteUnit::Gigabyte,
        ByteUnit::Megabyte,
        ByteUnit::Kilobyte,
        ByteUnit::Byte,
    ];

    /// Returns the number of bytes in one of this unit, i.e., `1024^n` where
    /// `n` is `0` for bytes, `1` for kilobytes and so on.
    #[inline]
    pub const fn bytes(self) -> i64 {
        1 << (10 * self as u32)
    }

    /// Returns the plural lowercase name of this unit, e.g., `megabytes`.
    pub const fn plural(self) -> &'static str {
        match self {
            ByteUnit::Byte => "bytes",
            ByteUnit::Kilobyte => "kilobytes",
            ByteUnit::Megabyte => "megabytes",
            ByteUnit::Gigabyte => "gigabytes",
            ByteUnit::Terabyte => "terabytes",
            ByteUnit::Petabyte => "petabytes",
            ByteUnit::Exabyte => "exabytes",
        }
    }
}

/// A trait for building data sizes out of numbers.
///
/// This is implemented for `i64`, which produces an `i64` number of bytes,
/// and for `f64`, which produces an `f64` number of bytes. With only one
/// implementation per kind of number, the type of a literal like `3` or `3.5`
/// is inferred from the method call. Every method has a singular alias, so
/// that both `1.kilobyte()` and `3.kilobytes()` read naturally.
///
/// # Panics
///
/// For `i64`, when the number of bytes overflows an `i64`. For example,
/// `8.exabytes()` panics.
///
/// # Example
///
/// ```
/// use jiff_units::ToBytes;
///
/// assert_eq!(3.megabytes(), 3_145_728);
/// assert_eq!(1.kilobyte().pow(4), 1.terabyte());
/// assert_eq!(3584.0.kilobytes(), 3.5.megabytes());
/// assert_eq!(256.megabytes() * 20 + 5.gigabytes(), 10.gigabytes());
/// ```
pub trait ToBytes: Sized {
    /// The numeric type that sizes built from `Self` are expressed in.
    type Output;

    /// Returns the number of bytes in `self` of the given unit.
    fn to_bytes(self, unit: ByteUnit) -> Self::Output;

    /// Returns `self` bytes.
    #[inline]
    fn bytes(self) -> Self::Output {
        self.to_bytes(ByteUnit::Byte)
    }

    /// Returns the number of bytes in `self` kilobytes.
    #[inline]
    fn kilobytes(self) -> Self::Output {
        self.to_bytes(ByteUnit::Kilobyte)
    }

    /// Returns the number of bytes in `self` megabytes.
    #[inline]
    fn megabytes(self) -> Self::Output {
        self.to_bytes(ByteUnit::Megabyte)
    }

    /// Returns the number of bytes in `self` gigabytes.
    #[inline]
    fn gigabytes(self) -> Self::Output {
        self.to_bytes(ByteUnit::Gigabyte)
    }

    /// Returns the number of bytes in `self` terabytes.
    #[inline]
    fn terabytes(self) -> Self::Output {
        self.to_bytes(ByteUnit::Terabyte)
    }

    /// Returns the number of bytes in `self` petabytes.
    #[inline]
    fn petabytes(self) -> Self::Output {
        self.to_bytes(ByteUnit::Petabyte)
    }

    /// Returns the number of bytes in `self` exabytes.
    #[inline]
    fn exabytes(self) -> Self::Output {
        self.to_bytes(ByteUnit::Exabyte)
    }

    /// Singular form of [`ToBytes::bytes`].
    #[inline]
    fn byte(self) -> Self::Output {
        self.bytes()
    }

    /// Singular form of [`ToBytes::kilobytes`].
    #[inline]
    fn kilobyte(self) -> Self::Output {
        self.kilobytes()
    }

    /// Singular form of [`ToBytes::megabytes`].
    #[inline]
    fn megabyte(self) -> Self::Output {
        self.megabytes()
    }

    /// Singular form of [`ToBytes::gigabytes`].
    #[inline]
    fn gigabyte(self) -> Self::Output {
        self.gigabytes()
    }

    /// Singular form of [`ToBytes::terabytes`].
    #[inline]
    fn terabyte(self) -> Self::Output {
        self.terabytes()
    }

    /// Singular form of [`ToBytes::petabytes`].
    #[inline]
    fn petabyte(self) -> Self::Output {
        self.petabytes()
    }

    /// Singular form of [`ToBytes::exabytes`].
    #[inline]
    fn exabyte(self) -> Self::Output {
        self.exabytes()
    }
}

impl ToBytes for i64 {
    type Output = i64;

    #[inline]
    fn to_bytes(self, unit: ByteUnit) -> i64 {
        self.checked_mul(unit.bytes()).unwrap_or_else(|| {
            panic!(
                "{self} {unit} overflows a 64-bit byte count",
                unit = unit.plural(),
            )
        })
    }
}

impl ToBytes for f64 {
    type Output = f64;

    #[inline]
    fn to_bytes(self, unit: ByteUnit) -> f64 {
        self * unit.bytes() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table() {
        for pair in ByteUnit::ALL.windows(2) {
            assert_eq!(pair[0].bytes(), pair[1].bytes() * 1024);
        }
        assert_eq!(ByteUnit::Byte.bytes(), 1);
    }

    #[test]
    #[should_panic(expected = "8 exabytes overflows")]
    fn overflow_panics() {
        let _ = 8.exabytes();
    }
}
