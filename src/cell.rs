//! The numeric contract a tape slot must satisfy.

/// A tape cell: a fixed-width unsigned value with wrapping arithmetic and
/// a byte view for I/O.
///
/// `increment` and `decrement` never fail; overflow wraps to the opposite
/// bound (for a `u8` cell, 255 increments to 0 and 0 decrements to 255).
/// `Default` provides the zero value, and equality against it is how the
/// VM tests a cell for zero.
pub trait Cell: Default + Clone + PartialEq {
    /// Add one, wrapping at the type's maximum.
    fn increment(&mut self);

    /// Subtract one, wrapping at zero.
    fn decrement(&mut self);

    /// Overwrite the cell's value from a single input byte.
    fn set_byte(&mut self, byte: u8);

    /// The cell's value as a single output byte. For widths greater than
    /// eight bits this is the low byte.
    fn to_byte(&self) -> u8;
}

macro_rules! impl_cell {
    ($($t:ty),*) => {
        $(
            impl Cell for $t {
                fn increment(&mut self) {
                    *self = self.wrapping_add(1);
                }

                fn decrement(&mut self) {
                    *self = self.wrapping_sub(1);
                }

                fn set_byte(&mut self, byte: u8) {
                    *self = byte as $t;
                }

                fn to_byte(&self) -> u8 {
                    *self as u8
                }
            }
        )*
    };
}

impl_cell!(u8, u16, u32);
