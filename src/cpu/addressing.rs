use super::Cpu;

/// How an instruction's trailing bytes become an operand value or address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    Implicit,
    Accumulator,
    Immediate,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    Relative,
    IndirectX,
    IndirectY,
}

/// Decoded operand for a single step: everything the semantics function and
/// the trace formatter need, captured before any state is mutated.
#[derive(Debug, Clone, Copy, Default)]
pub struct Operand {
    /// First operand byte exactly as fetched.
    pub operand8: u8,
    /// Two-byte operand for the absolute modes.
    pub operand16: u16,
    /// Intermediate pointer: the indexed zero-page address, or the 16-bit
    /// pointer read out of the zero page for the indirect modes.
    pub pointer: u16,
    /// Effective address the instruction operates on.
    pub addr: u16,
    /// Byte at the effective address (or the immediate/accumulator value).
    pub value: u8,
    /// Indexing moved the access onto a different page.
    pub page_crossed: bool,
}

pub fn page_crossed(a: u16, b: u16) -> bool {
    (a & 0xFF00) != (b & 0xFF00)
}

impl Cpu {
    /// Fetches and resolves the operand for `mode`, advancing the PC past
    /// the operand bytes. Reads of the effective address are side-effect
    /// free on the flat memory model, so the pre-execution value is always
    /// captured, stores included.
    pub(crate) fn resolve_operand(&mut self, mode: AddressingMode) -> Operand {
        let mut op = Operand::default();
        match mode {
            AddressingMode::Implicit => {}
            AddressingMode::Accumulator => {
                op.value = self.a.get();
            }
            AddressingMode::Immediate => {
                op.operand8 = self.fetch();
                op.value = op.operand8;
            }
            AddressingMode::ZeroPage => {
                op.operand8 = self.fetch();
                op.addr = op.operand8 as u16;
                op.value = self.read(op.addr);
            }
            AddressingMode::ZeroPageX => {
                op.operand8 = self.fetch();
                op.pointer = op.operand8.wrapping_add(self.x.get()) as u16;
                op.addr = op.pointer;
                op.value = self.read(op.addr);
            }
            AddressingMode::ZeroPageY => {
                op.operand8 = self.fetch();
                op.pointer = op.operand8.wrapping_add(self.y.get()) as u16;
                op.addr = op.pointer;
                op.value = self.read(op.addr);
            }
            AddressingMode::Absolute => {
                op.operand16 = self.fetch16();
                op.addr = op.operand16;
                op.value = self.read(op.addr);
            }
            AddressingMode::AbsoluteX => {
                op.operand16 = self.fetch16();
                op.addr = op.operand16.wrapping_add(self.x.get() as u16);
                op.page_crossed = page_crossed(op.operand16, op.addr);
                op.value = self.read(op.addr);
            }
            AddressingMode::AbsoluteY => {
                op.operand16 = self.fetch16();
                op.addr = op.operand16.wrapping_add(self.y.get() as u16);
                op.page_crossed = page_crossed(op.operand16, op.addr);
                op.value = self.read(op.addr);
            }
            AddressingMode::Relative => {
                op.operand8 = self.fetch();
                // Signed offset from the PC after the operand byte.
                op.addr = self.pc.wrapping_add(op.operand8 as i8 as u16);
            }
            AddressingMode::IndirectX => {
                op.operand8 = self.fetch();
                let zp = op.operand8.wrapping_add(self.x.get());
                op.pointer = zp as u16;
                let lo = self.read(zp as u16) as u16;
                let hi = self.read(zp.wrapping_add(1) as u16) as u16;
                op.addr = hi << 8 | lo;
                op.value = self.read(op.addr);
            }
            AddressingMode::IndirectY => {
                op.operand8 = self.fetch();
                let lo = self.read(op.operand8 as u16) as u16;
                let hi = self.read(op.operand8.wrapping_add(1) as u16) as u16;
                op.pointer = hi << 8 | lo;
                op.addr = op.pointer.wrapping_add(self.y.get() as u16);
                op.page_crossed = page_crossed(op.pointer, op.addr);
                op.value = self.read(op.addr);
            }
        }
        op
    }
}

/// Renders the operand column of a trace line in the reference log format.
/// JMP/JSR print a bare target; every other absolute access also shows the
/// byte at the address.
pub(crate) fn format_operand(mnemonic: &str, mode: AddressingMode, op: &Operand) -> String {
    match mode {
        AddressingMode::Implicit => String::new(),
        AddressingMode::Accumulator => "A".to_string(),
        AddressingMode::Immediate => format!("#${:02X}", op.value),
        AddressingMode::ZeroPage => format!("${:02X} = {:02X}", op.operand8, op.value),
        AddressingMode::ZeroPageX => {
            format!("${:02X},X @ {:02X} = {:02X}", op.operand8, op.pointer as u8, op.value)
        }
        AddressingMode::ZeroPageY => {
            format!("${:02X},Y @ {:02X} = {:02X}", op.operand8, op.pointer as u8, op.value)
        }
        AddressingMode::Absolute => {
            if mnemonic == "JMP" || mnemonic == "JSR" {
                format!("${:04X}", op.addr)
            } else {
                format!("${:04X} = {:02X}", op.addr, op.value)
            }
        }
        AddressingMode::AbsoluteX => {
            format!("${:04X},X @ {:04X} = {:02X}", op.operand16, op.addr, op.value)
        }
        AddressingMode::AbsoluteY => {
            format!("${:04X},Y @ {:04X} = {:02X}", op.operand16, op.addr, op.value)
        }
        AddressingMode::Relative => format!("${:04X}", op.addr),
        AddressingMode::IndirectX => format!(
            "(${:02X},X) @ {:02X} = {:04X} = {:02X}",
            op.operand8, op.pointer as u8, op.addr, op.value
        ),
        AddressingMode::IndirectY => format!(
            "(${:02X}),Y = {:04X} @ {:04X} = {:02X}",
            op.operand8, op.pointer, op.addr, op.value
        ),
    }
}
