use bitflags::bitflags;

bitflags! {
    /// 6502 status register. The Unused bit reads as 1 on real hardware.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct StatusFlags: u8 {
        const CARRY = 0x01;
        const ZERO = 0x02;
        const INTERRUPT_DISABLE = 0x04;
        const DECIMAL = 0x08;
        const BREAK = 0x10;
        const UNUSED = 0x20;
        const OVERFLOW = 0x40;
        const NEGATIVE = 0x80;
    }
}

impl StatusFlags {
    /// Documented power-on state: Unused and InterruptDisable set (0x24).
    pub const POWER_ON: StatusFlags = StatusFlags::UNUSED.union(StatusFlags::INTERRUPT_DISABLE);

    pub fn reset(&mut self) {
        *self = Self::POWER_ON;
    }

    pub fn value(&self) -> u8 {
        self.bits()
    }

    /// Carry as a 0/1 addend for ADC/SBC.
    pub fn carry_bit(&self) -> u8 {
        self.contains(StatusFlags::CARRY) as u8
    }

    pub fn set_zero_by_value(&mut self, value: u8) {
        self.set(StatusFlags::ZERO, value == 0);
    }

    pub fn set_negative(&mut self, value: u8) {
        self.set(StatusFlags::NEGATIVE, value & 0x80 != 0);
    }

    /// Overflow from bit 6 of a raw value. Only meaningful when restoring
    /// flags wholesale; arithmetic overflow is computed by ADC/SBC from the
    /// operand and result sign bits.
    pub fn set_overflow_bit(&mut self, value: u8) {
        self.set(StatusFlags::OVERFLOW, value & 0x40 != 0);
    }

    pub fn update_zn(&mut self, value: u8) {
        self.set_zero_by_value(value);
        self.set_negative(value);
    }

    /// Positional restore of a flags byte popped off the stack (PLP/RTI).
    /// Break and Unused keep whatever the register already holds.
    pub fn restore(&mut self, bits: u8) {
        for flag in [
            StatusFlags::CARRY,
            StatusFlags::ZERO,
            StatusFlags::INTERRUPT_DISABLE,
            StatusFlags::DECIMAL,
            StatusFlags::OVERFLOW,
            StatusFlags::NEGATIVE,
        ] {
            self.set(flag, bits & flag.bits() != 0);
        }
    }
}

impl Default for StatusFlags {
    fn default() -> Self {
        Self::POWER_ON
    }
}
