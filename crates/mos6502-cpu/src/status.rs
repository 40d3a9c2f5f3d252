//! CPU status register (P) flags.
//!
//! ```text
//! 7  6  5  4  3  2  1  0
//! N  V  U  B  D  I  Z  C
//! │  │  │  │  │  │  │  └─ Carry
//! │  │  │  │  │  │  └──── Zero
//! │  │  │  │  │  └─────── Interrupt Disable
//! │  │  │  │  └────────── Decimal Mode
//! │  │  │  └───────────── Break (pushed only; not a real latch)
//! │  │  └──────────────── Unused (always 1)
//! │  └─────────────────── Overflow
//! └────────────────────── Negative
//! ```

use bitflags::bitflags;

bitflags! {
    /// CPU status register flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Status: u8 {
        /// Carry flag - set on overflow out of bit 7 or a non-borrowing
        /// subtraction/compare.
        const C = 1 << 0;

        /// Zero flag - set if the result of the last operation was zero.
        const Z = 1 << 1;

        /// Interrupt Disable flag - when set, IRQ requests are masked.
        /// NMI is never masked.
        const I = 1 << 2;

        /// Decimal Mode flag - when set, ADC/SBC operate on packed BCD.
        const D = 1 << 3;

        /// Break flag - distinguishes BRK/PHP pushes (1) from pushes made
        /// by hardware interrupts (0). Only meaningful on the stack.
        const B = 1 << 4;

        /// Unused flag - always reads as 1.
        const U = 1 << 5;

        /// Overflow flag - set on signed overflow.
        const V = 1 << 6;

        /// Negative flag - mirrors bit 7 of the result.
        const N = 1 << 7;
    }
}

impl Status {
    /// Status after reset: I masked, U pinned.
    pub const RESET: Self = Self::I.union(Self::U);

    /// Sets or clears the Zero and Negative flags from an 8-bit result.
    #[inline]
    pub fn set_zn(&mut self, value: u8) {
        self.set_flag(Self::Z, value == 0);
        self.set_flag(Self::N, value & 0x80 != 0);
    }

    /// Sets or clears a flag.
    #[inline]
    pub fn set_flag(&mut self, flag: Self, value: bool) {
        if value {
            *self |= flag;
        } else {
            *self &= !flag;
        }
    }

    /// Converts the register to the byte pushed on the stack.
    ///
    /// U is always set in the pushed image; B is set only for BRK/PHP
    /// pushes, never for hardware interrupts.
    #[inline]
    #[must_use]
    pub const fn to_pushed_byte(self, brk: bool) -> u8 {
        let mut value = self.bits() | Self::U.bits();
        if brk {
            value |= Self::B.bits();
        }
        value
    }

    /// Rebuilds the register from a byte pulled off the stack.
    ///
    /// U is pinned back on; B is kept exactly as it was stacked.
    #[inline]
    #[must_use]
    pub const fn from_pulled_byte(value: u8) -> Self {
        Self::from_bits_retain(value | Self::U.bits())
    }
}
