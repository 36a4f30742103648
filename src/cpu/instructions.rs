//! Opcode descriptor table and per-instruction semantics.
//!
//! Each supported opcode maps to one [`Instruction`]: mnemonic, encoded
//! length, addressing mode, base cycle cost, and a semantics function. The
//! executor adds the page-crossing penalty for the read instructions that
//! pay one, and the semantics function reports any extra cycles it incurs
//! itself (branch taken / branch page cross). Opcodes without an entry are
//! a hard decode error, never a silent no-op.

use super::addressing::{page_crossed, AddressingMode, Operand};
use super::flags::StatusFlags;
use super::Cpu;

use super::addressing::AddressingMode::{
    Absolute, AbsoluteX, AbsoluteY, Accumulator, Immediate, Implicit, IndirectX, IndirectY,
    Relative, ZeroPage, ZeroPageX, ZeroPageY,
};

#[derive(Clone, Copy)]
pub struct Instruction {
    pub opcode: u8,
    pub mnemonic: &'static str,
    /// Encoded length in bytes, opcode included (1-3).
    pub length: u8,
    pub mode: AddressingMode,
    /// Base cycle cost before taken-branch and page-crossing additions.
    pub cycles: u8,
    /// Costs one extra cycle when the operand access crosses a page.
    pub page_penalty: bool,
    /// Mutates registers/flags/memory; returns extra cycles beyond the base.
    pub execute: fn(&mut Cpu, &Operand) -> u8,
}

pub fn decode(opcode: u8) -> Option<&'static Instruction> {
    OPCODE_TABLE[opcode as usize].as_ref()
}

static OPCODE_TABLE: [Option<Instruction>; 256] = build_table();

const fn ins(
    opcode: u8,
    mnemonic: &'static str,
    length: u8,
    mode: AddressingMode,
    cycles: u8,
    page_penalty: bool,
    execute: fn(&mut Cpu, &Operand) -> u8,
) -> Option<Instruction> {
    Some(Instruction {
        opcode,
        mnemonic,
        length,
        mode,
        cycles,
        page_penalty,
        execute,
    })
}

#[rustfmt::skip]
const fn build_table() -> [Option<Instruction>; 256] {
    let mut t: [Option<Instruction>; 256] = [None; 256];

    // Loads
    t[0xA9] = ins(0xA9, "LDA", 2, Immediate, 2, false, lda);
    t[0xA5] = ins(0xA5, "LDA", 2, ZeroPage,  3, false, lda);
    t[0xB5] = ins(0xB5, "LDA", 2, ZeroPageX, 4, false, lda);
    t[0xAD] = ins(0xAD, "LDA", 3, Absolute,  4, false, lda);
    t[0xBD] = ins(0xBD, "LDA", 3, AbsoluteX, 4, true,  lda);
    t[0xB9] = ins(0xB9, "LDA", 3, AbsoluteY, 4, true,  lda);
    t[0xA1] = ins(0xA1, "LDA", 2, IndirectX, 6, false, lda);
    t[0xB1] = ins(0xB1, "LDA", 2, IndirectY, 5, true,  lda);
    t[0xA2] = ins(0xA2, "LDX", 2, Immediate, 2, false, ldx);
    t[0xA6] = ins(0xA6, "LDX", 2, ZeroPage,  3, false, ldx);
    t[0xB6] = ins(0xB6, "LDX", 2, ZeroPageY, 4, false, ldx);
    t[0xAE] = ins(0xAE, "LDX", 3, Absolute,  4, false, ldx);
    t[0xBE] = ins(0xBE, "LDX", 3, AbsoluteY, 4, true,  ldx);
    t[0xA0] = ins(0xA0, "LDY", 2, Immediate, 2, false, ldy);
    t[0xA4] = ins(0xA4, "LDY", 2, ZeroPage,  3, false, ldy);
    t[0xB4] = ins(0xB4, "LDY", 2, ZeroPageX, 4, false, ldy);
    t[0xAC] = ins(0xAC, "LDY", 3, Absolute,  4, false, ldy);
    t[0xBC] = ins(0xBC, "LDY", 3, AbsoluteX, 4, true,  ldy);

    // Stores
    t[0x85] = ins(0x85, "STA", 2, ZeroPage,  3, false, sta);
    t[0x95] = ins(0x95, "STA", 2, ZeroPageX, 4, false, sta);
    t[0x8D] = ins(0x8D, "STA", 3, Absolute,  4, false, sta);
    t[0x9D] = ins(0x9D, "STA", 3, AbsoluteX, 5, false, sta);
    t[0x99] = ins(0x99, "STA", 3, AbsoluteY, 5, false, sta);
    t[0x81] = ins(0x81, "STA", 2, IndirectX, 6, false, sta);
    t[0x91] = ins(0x91, "STA", 2, IndirectY, 6, false, sta);
    t[0x86] = ins(0x86, "STX", 2, ZeroPage,  3, false, stx);
    t[0x96] = ins(0x96, "STX", 2, ZeroPageY, 4, false, stx);
    t[0x8E] = ins(0x8E, "STX", 3, Absolute,  4, false, stx);
    t[0x84] = ins(0x84, "STY", 2, ZeroPage,  3, false, sty);
    t[0x94] = ins(0x94, "STY", 2, ZeroPageX, 4, false, sty);
    t[0x8C] = ins(0x8C, "STY", 3, Absolute,  4, false, sty);

    // Register transfers
    t[0xAA] = ins(0xAA, "TAX", 1, Implicit, 2, false, tax);
    t[0xA8] = ins(0xA8, "TAY", 1, Implicit, 2, false, tay);
    t[0x8A] = ins(0x8A, "TXA", 1, Implicit, 2, false, txa);
    t[0x98] = ins(0x98, "TYA", 1, Implicit, 2, false, tya);
    t[0xBA] = ins(0xBA, "TSX", 1, Implicit, 2, false, tsx);
    t[0x9A] = ins(0x9A, "TXS", 1, Implicit, 2, false, txs);

    // Arithmetic
    t[0x69] = ins(0x69, "ADC", 2, Immediate, 2, false, adc);
    t[0x65] = ins(0x65, "ADC", 2, ZeroPage,  3, false, adc);
    t[0x75] = ins(0x75, "ADC", 2, ZeroPageX, 4, false, adc);
    t[0x6D] = ins(0x6D, "ADC", 3, Absolute,  4, false, adc);
    t[0x7D] = ins(0x7D, "ADC", 3, AbsoluteX, 4, true,  adc);
    t[0x79] = ins(0x79, "ADC", 3, AbsoluteY, 4, true,  adc);
    t[0x61] = ins(0x61, "ADC", 2, IndirectX, 6, false, adc);
    t[0x71] = ins(0x71, "ADC", 2, IndirectY, 5, true,  adc);
    t[0xE9] = ins(0xE9, "SBC", 2, Immediate, 2, false, sbc);
    t[0xE5] = ins(0xE5, "SBC", 2, ZeroPage,  3, false, sbc);
    t[0xF5] = ins(0xF5, "SBC", 2, ZeroPageX, 4, false, sbc);
    t[0xED] = ins(0xED, "SBC", 3, Absolute,  4, false, sbc);
    t[0xFD] = ins(0xFD, "SBC", 3, AbsoluteX, 4, true,  sbc);
    t[0xF9] = ins(0xF9, "SBC", 3, AbsoluteY, 4, true,  sbc);
    t[0xE1] = ins(0xE1, "SBC", 2, IndirectX, 6, false, sbc);
    t[0xF1] = ins(0xF1, "SBC", 2, IndirectY, 5, true,  sbc);

    // Compares
    t[0xC9] = ins(0xC9, "CMP", 2, Immediate, 2, false, cmp);
    t[0xC5] = ins(0xC5, "CMP", 2, ZeroPage,  3, false, cmp);
    t[0xD5] = ins(0xD5, "CMP", 2, ZeroPageX, 4, false, cmp);
    t[0xCD] = ins(0xCD, "CMP", 3, Absolute,  4, false, cmp);
    t[0xDD] = ins(0xDD, "CMP", 3, AbsoluteX, 4, true,  cmp);
    t[0xD9] = ins(0xD9, "CMP", 3, AbsoluteY, 4, true,  cmp);
    t[0xC1] = ins(0xC1, "CMP", 2, IndirectX, 6, false, cmp);
    t[0xD1] = ins(0xD1, "CMP", 2, IndirectY, 5, true,  cmp);
    t[0xE0] = ins(0xE0, "CPX", 2, Immediate, 2, false, cpx);
    t[0xE4] = ins(0xE4, "CPX", 2, ZeroPage,  3, false, cpx);
    t[0xEC] = ins(0xEC, "CPX", 3, Absolute,  4, false, cpx);
    t[0xC0] = ins(0xC0, "CPY", 2, Immediate, 2, false, cpy);
    t[0xC4] = ins(0xC4, "CPY", 2, ZeroPage,  3, false, cpy);
    t[0xCC] = ins(0xCC, "CPY", 3, Absolute,  4, false, cpy);

    // Bitwise
    t[0x29] = ins(0x29, "AND", 2, Immediate, 2, false, and);
    t[0x25] = ins(0x25, "AND", 2, ZeroPage,  3, false, and);
    t[0x35] = ins(0x35, "AND", 2, ZeroPageX, 4, false, and);
    t[0x2D] = ins(0x2D, "AND", 3, Absolute,  4, false, and);
    t[0x3D] = ins(0x3D, "AND", 3, AbsoluteX, 4, true,  and);
    t[0x39] = ins(0x39, "AND", 3, AbsoluteY, 4, true,  and);
    t[0x21] = ins(0x21, "AND", 2, IndirectX, 6, false, and);
    t[0x31] = ins(0x31, "AND", 2, IndirectY, 5, true,  and);
    t[0x09] = ins(0x09, "ORA", 2, Immediate, 2, false, ora);
    t[0x05] = ins(0x05, "ORA", 2, ZeroPage,  3, false, ora);
    t[0x15] = ins(0x15, "ORA", 2, ZeroPageX, 4, false, ora);
    t[0x0D] = ins(0x0D, "ORA", 3, Absolute,  4, false, ora);
    t[0x1D] = ins(0x1D, "ORA", 3, AbsoluteX, 4, true,  ora);
    t[0x19] = ins(0x19, "ORA", 3, AbsoluteY, 4, true,  ora);
    t[0x01] = ins(0x01, "ORA", 2, IndirectX, 6, false, ora);
    t[0x11] = ins(0x11, "ORA", 2, IndirectY, 5, true,  ora);
    t[0x49] = ins(0x49, "EOR", 2, Immediate, 2, false, eor);
    t[0x45] = ins(0x45, "EOR", 2, ZeroPage,  3, false, eor);
    t[0x55] = ins(0x55, "EOR", 2, ZeroPageX, 4, false, eor);
    t[0x4D] = ins(0x4D, "EOR", 3, Absolute,  4, false, eor);
    t[0x5D] = ins(0x5D, "EOR", 3, AbsoluteX, 4, true,  eor);
    t[0x59] = ins(0x59, "EOR", 3, AbsoluteY, 4, true,  eor);
    t[0x41] = ins(0x41, "EOR", 2, IndirectX, 6, false, eor);
    t[0x51] = ins(0x51, "EOR", 2, IndirectY, 5, true,  eor);
    t[0x24] = ins(0x24, "BIT", 2, ZeroPage, 3, false, bit);
    t[0x2C] = ins(0x2C, "BIT", 3, Absolute, 4, false, bit);

    // Shifts and rotates (accumulator forms only)
    t[0x0A] = ins(0x0A, "ASL", 1, Accumulator, 2, false, asl);
    t[0x4A] = ins(0x4A, "LSR", 1, Accumulator, 2, false, lsr);
    t[0x2A] = ins(0x2A, "ROL", 1, Accumulator, 2, false, rol);
    t[0x6A] = ins(0x6A, "ROR", 1, Accumulator, 2, false, ror);

    // Increment/decrement
    t[0xE8] = ins(0xE8, "INX", 1, Implicit, 2, false, inx);
    t[0xC8] = ins(0xC8, "INY", 1, Implicit, 2, false, iny);
    t[0xCA] = ins(0xCA, "DEX", 1, Implicit, 2, false, dex);
    t[0x88] = ins(0x88, "DEY", 1, Implicit, 2, false, dey);

    // Branches
    t[0x90] = ins(0x90, "BCC", 2, Relative, 2, false, bcc);
    t[0xB0] = ins(0xB0, "BCS", 2, Relative, 2, false, bcs);
    t[0xF0] = ins(0xF0, "BEQ", 2, Relative, 2, false, beq);
    t[0xD0] = ins(0xD0, "BNE", 2, Relative, 2, false, bne);
    t[0x30] = ins(0x30, "BMI", 2, Relative, 2, false, bmi);
    t[0x10] = ins(0x10, "BPL", 2, Relative, 2, false, bpl);
    t[0x50] = ins(0x50, "BVC", 2, Relative, 2, false, bvc);
    t[0x70] = ins(0x70, "BVS", 2, Relative, 2, false, bvs);

    // Stack and subroutines
    t[0x48] = ins(0x48, "PHA", 1, Implicit, 3, false, pha);
    t[0x68] = ins(0x68, "PLA", 1, Implicit, 4, false, pla);
    t[0x08] = ins(0x08, "PHP", 1, Implicit, 3, false, php);
    t[0x28] = ins(0x28, "PLP", 1, Implicit, 4, false, plp);
    t[0x20] = ins(0x20, "JSR", 3, Absolute, 6, false, jsr);
    t[0x60] = ins(0x60, "RTS", 1, Implicit, 6, false, rts);
    t[0x40] = ins(0x40, "RTI", 1, Implicit, 6, false, rti);

    // Control and flag operations
    t[0x4C] = ins(0x4C, "JMP", 3, Absolute, 3, false, jmp);
    t[0xEA] = ins(0xEA, "NOP", 1, Implicit, 2, false, nop);
    t[0x38] = ins(0x38, "SEC", 1, Implicit, 2, false, sec);
    t[0x18] = ins(0x18, "CLC", 1, Implicit, 2, false, clc);
    t[0x78] = ins(0x78, "SEI", 1, Implicit, 2, false, sei);
    t[0x58] = ins(0x58, "CLI", 1, Implicit, 2, false, cli);
    t[0xF8] = ins(0xF8, "SED", 1, Implicit, 2, false, sed);
    t[0xD8] = ins(0xD8, "CLD", 1, Implicit, 2, false, cld);
    t[0xB8] = ins(0xB8, "CLV", 1, Implicit, 2, false, clv);

    t
}

// Loads and transfers copy a value and update Zero/Negative from it.

fn lda(cpu: &mut Cpu, op: &Operand) -> u8 {
    cpu.a.set(op.value);
    cpu.flags.update_zn(op.value);
    0
}

fn ldx(cpu: &mut Cpu, op: &Operand) -> u8 {
    cpu.x.set(op.value);
    cpu.flags.update_zn(op.value);
    0
}

fn ldy(cpu: &mut Cpu, op: &Operand) -> u8 {
    cpu.y.set(op.value);
    cpu.flags.update_zn(op.value);
    0
}

fn sta(cpu: &mut Cpu, op: &Operand) -> u8 {
    cpu.write(op.addr, cpu.a.get());
    0
}

fn stx(cpu: &mut Cpu, op: &Operand) -> u8 {
    cpu.write(op.addr, cpu.x.get());
    0
}

fn sty(cpu: &mut Cpu, op: &Operand) -> u8 {
    cpu.write(op.addr, cpu.y.get());
    0
}

fn tax(cpu: &mut Cpu, _op: &Operand) -> u8 {
    let v = cpu.a.get();
    cpu.x.set(v);
    cpu.flags.update_zn(v);
    0
}

fn tay(cpu: &mut Cpu, _op: &Operand) -> u8 {
    let v = cpu.a.get();
    cpu.y.set(v);
    cpu.flags.update_zn(v);
    0
}

fn txa(cpu: &mut Cpu, _op: &Operand) -> u8 {
    let v = cpu.x.get();
    cpu.a.set(v);
    cpu.flags.update_zn(v);
    0
}

fn tya(cpu: &mut Cpu, _op: &Operand) -> u8 {
    let v = cpu.y.get();
    cpu.a.set(v);
    cpu.flags.update_zn(v);
    0
}

fn tsx(cpu: &mut Cpu, _op: &Operand) -> u8 {
    let v = cpu.sp;
    cpu.x.set(v);
    cpu.flags.update_zn(v);
    0
}

// TXS is the one transfer that touches no flags.
fn txs(cpu: &mut Cpu, _op: &Operand) -> u8 {
    cpu.sp = cpu.x.get();
    0
}

/// Shared ADC core: 9-bit sum of A, the operand, and carry-in. Carry-out is
/// bit 8; Overflow is set when both inputs share a sign the result lacks.
fn add_with_carry(cpu: &mut Cpu, value: u8) {
    let a = cpu.a.get();
    let sum = a as u16 + value as u16 + cpu.flags.carry_bit() as u16;
    let result = sum as u8;
    cpu.flags.set(StatusFlags::CARRY, sum > 0xFF);
    cpu.flags.set(
        StatusFlags::OVERFLOW,
        (a ^ result) & (value ^ result) & 0x80 != 0,
    );
    cpu.a.set(result);
    cpu.flags.update_zn(result);
}

fn adc(cpu: &mut Cpu, op: &Operand) -> u8 {
    add_with_carry(cpu, op.value);
    0
}

// SBC is ADC of the ones'-complemented operand; Carry set means no borrow.
fn sbc(cpu: &mut Cpu, op: &Operand) -> u8 {
    add_with_carry(cpu, !op.value);
    0
}

fn compare(cpu: &mut Cpu, register: u8, value: u8) {
    let result = register.wrapping_sub(value);
    cpu.flags.set(StatusFlags::CARRY, register >= value);
    cpu.flags.set(StatusFlags::ZERO, register == value);
    cpu.flags.set_negative(result);
}

fn cmp(cpu: &mut Cpu, op: &Operand) -> u8 {
    compare(cpu, cpu.a.get(), op.value);
    0
}

fn cpx(cpu: &mut Cpu, op: &Operand) -> u8 {
    compare(cpu, cpu.x.get(), op.value);
    0
}

fn cpy(cpu: &mut Cpu, op: &Operand) -> u8 {
    compare(cpu, cpu.y.get(), op.value);
    0
}

fn and(cpu: &mut Cpu, op: &Operand) -> u8 {
    let v = cpu.a.get() & op.value;
    cpu.a.set(v);
    cpu.flags.update_zn(v);
    0
}

fn ora(cpu: &mut Cpu, op: &Operand) -> u8 {
    let v = cpu.a.get() | op.value;
    cpu.a.set(v);
    cpu.flags.update_zn(v);
    0
}

fn eor(cpu: &mut Cpu, op: &Operand) -> u8 {
    let v = cpu.a.get() ^ op.value;
    cpu.a.set(v);
    cpu.flags.update_zn(v);
    0
}

// BIT: Zero from A & M, but Overflow/Negative straight from the memory
// operand's bits 6/7.
fn bit(cpu: &mut Cpu, op: &Operand) -> u8 {
    cpu.flags.set_zero_by_value(cpu.a.get() & op.value);
    cpu.flags.set_overflow_bit(op.value);
    cpu.flags.set_negative(op.value);
    0
}

fn asl(cpu: &mut Cpu, _op: &Operand) -> u8 {
    let a = cpu.a.get();
    cpu.flags.set(StatusFlags::CARRY, a & 0x80 != 0);
    let v = a << 1;
    cpu.a.set(v);
    cpu.flags.update_zn(v);
    0
}

fn lsr(cpu: &mut Cpu, _op: &Operand) -> u8 {
    let a = cpu.a.get();
    cpu.flags.set(StatusFlags::CARRY, a & 0x01 != 0);
    let v = a >> 1;
    cpu.a.set(v);
    cpu.flags.update_zn(v);
    0
}

// Rotates shift the old carry into the vacated bit.
fn rol(cpu: &mut Cpu, _op: &Operand) -> u8 {
    let a = cpu.a.get();
    let v = a << 1 | cpu.flags.carry_bit();
    cpu.flags.set(StatusFlags::CARRY, a & 0x80 != 0);
    cpu.a.set(v);
    cpu.flags.update_zn(v);
    0
}

fn ror(cpu: &mut Cpu, _op: &Operand) -> u8 {
    let a = cpu.a.get();
    let v = a >> 1 | cpu.flags.carry_bit() << 7;
    cpu.flags.set(StatusFlags::CARRY, a & 0x01 != 0);
    cpu.a.set(v);
    cpu.flags.update_zn(v);
    0
}

fn inx(cpu: &mut Cpu, _op: &Operand) -> u8 {
    let v = cpu.x.get().wrapping_add(1);
    cpu.x.set(v);
    cpu.flags.update_zn(v);
    0
}

fn iny(cpu: &mut Cpu, _op: &Operand) -> u8 {
    let v = cpu.y.get().wrapping_add(1);
    cpu.y.set(v);
    cpu.flags.update_zn(v);
    0
}

fn dex(cpu: &mut Cpu, _op: &Operand) -> u8 {
    let v = cpu.x.get().wrapping_sub(1);
    cpu.x.set(v);
    cpu.flags.update_zn(v);
    0
}

fn dey(cpu: &mut Cpu, _op: &Operand) -> u8 {
    let v = cpu.y.get().wrapping_sub(1);
    cpu.y.set(v);
    cpu.flags.update_zn(v);
    0
}

/// Taken branches cost one extra cycle, two when the target sits on a
/// different page than the PC the branch departs from.
fn branch_if(cpu: &mut Cpu, op: &Operand, taken: bool) -> u8 {
    if !taken {
        return 0;
    }
    let from = cpu.pc;
    cpu.set_pc(op.addr);
    if page_crossed(from, op.addr) {
        2
    } else {
        1
    }
}

fn bcc(cpu: &mut Cpu, op: &Operand) -> u8 {
    let taken = !cpu.flags.contains(StatusFlags::CARRY);
    branch_if(cpu, op, taken)
}

fn bcs(cpu: &mut Cpu, op: &Operand) -> u8 {
    let taken = cpu.flags.contains(StatusFlags::CARRY);
    branch_if(cpu, op, taken)
}

fn beq(cpu: &mut Cpu, op: &Operand) -> u8 {
    let taken = cpu.flags.contains(StatusFlags::ZERO);
    branch_if(cpu, op, taken)
}

fn bne(cpu: &mut Cpu, op: &Operand) -> u8 {
    let taken = !cpu.flags.contains(StatusFlags::ZERO);
    branch_if(cpu, op, taken)
}

fn bmi(cpu: &mut Cpu, op: &Operand) -> u8 {
    let taken = cpu.flags.contains(StatusFlags::NEGATIVE);
    branch_if(cpu, op, taken)
}

fn bpl(cpu: &mut Cpu, op: &Operand) -> u8 {
    let taken = !cpu.flags.contains(StatusFlags::NEGATIVE);
    branch_if(cpu, op, taken)
}

fn bvc(cpu: &mut Cpu, op: &Operand) -> u8 {
    let taken = !cpu.flags.contains(StatusFlags::OVERFLOW);
    branch_if(cpu, op, taken)
}

fn bvs(cpu: &mut Cpu, op: &Operand) -> u8 {
    let taken = cpu.flags.contains(StatusFlags::OVERFLOW);
    branch_if(cpu, op, taken)
}

fn pha(cpu: &mut Cpu, _op: &Operand) -> u8 {
    let v = cpu.a.get();
    cpu.push(v);
    0
}

fn pla(cpu: &mut Cpu, _op: &Operand) -> u8 {
    let v = cpu.pop();
    cpu.a.set(v);
    cpu.flags.update_zn(v);
    0
}

// PHP pushes with bits 4-5 forced, like BRK would.
fn php(cpu: &mut Cpu, _op: &Operand) -> u8 {
    let v = cpu.flags.value() | 0x30;
    cpu.push(v);
    0
}

fn plp(cpu: &mut Cpu, _op: &Operand) -> u8 {
    let v = cpu.pop();
    cpu.flags.restore(v);
    0
}

// JSR pushes the address of its own last byte, high byte first.
fn jsr(cpu: &mut Cpu, op: &Operand) -> u8 {
    let ret = cpu.pc.wrapping_sub(1);
    cpu.push((ret >> 8) as u8);
    cpu.push(ret as u8);
    cpu.set_pc(op.addr);
    0
}

fn rts(cpu: &mut Cpu, _op: &Operand) -> u8 {
    let lo = cpu.pop() as u16;
    let hi = cpu.pop() as u16;
    cpu.set_pc((hi << 8 | lo).wrapping_add(1));
    0
}

// RTI restores the flags before the return address, and resumes at the
// popped address verbatim.
fn rti(cpu: &mut Cpu, _op: &Operand) -> u8 {
    let flags = cpu.pop();
    cpu.flags.restore(flags);
    let lo = cpu.pop() as u16;
    let hi = cpu.pop() as u16;
    cpu.set_pc(hi << 8 | lo);
    0
}

fn jmp(cpu: &mut Cpu, op: &Operand) -> u8 {
    cpu.set_pc(op.addr);
    0
}

fn nop(_cpu: &mut Cpu, _op: &Operand) -> u8 {
    0
}

fn sec(cpu: &mut Cpu, _op: &Operand) -> u8 {
    cpu.flags.insert(StatusFlags::CARRY);
    0
}

fn clc(cpu: &mut Cpu, _op: &Operand) -> u8 {
    cpu.flags.remove(StatusFlags::CARRY);
    0
}

fn sei(cpu: &mut Cpu, _op: &Operand) -> u8 {
    cpu.flags.insert(StatusFlags::INTERRUPT_DISABLE);
    0
}

fn cli(cpu: &mut Cpu, _op: &Operand) -> u8 {
    cpu.flags.remove(StatusFlags::INTERRUPT_DISABLE);
    0
}

fn sed(cpu: &mut Cpu, _op: &Operand) -> u8 {
    cpu.flags.insert(StatusFlags::DECIMAL);
    0
}

fn cld(cpu: &mut Cpu, _op: &Operand) -> u8 {
    cpu.flags.remove(StatusFlags::DECIMAL);
    0
}

fn clv(cpu: &mut Cpu, _op: &Operand) -> u8 {
    cpu.flags.remove(StatusFlags::OVERFLOW);
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn operand_value(value: u8) -> Operand {
        Operand {
            value,
            ..Operand::default()
        }
    }

    #[test]
    fn table_length_matches_descriptor_lengths() {
        for opcode in 0u16..=0xFF {
            if let Some(ins) = decode(opcode as u8) {
                assert_eq!(ins.opcode, opcode as u8);
                let expected = match ins.mode {
                    Implicit | Accumulator => 1,
                    Absolute | AbsoluteX | AbsoluteY => 3,
                    _ => 2,
                };
                assert_eq!(
                    ins.length, expected,
                    "opcode {opcode:02X} length disagrees with its mode"
                );
            }
        }
    }

    #[test]
    fn unofficial_opcodes_are_unmapped() {
        for opcode in [0x00u8, 0x02, 0x6C, 0xE6, 0x06, 0xFF, 0xA3] {
            assert!(decode(opcode).is_none(), "{opcode:02X} should not decode");
        }
    }

    #[test]
    fn adc_matches_the_truth_table_exhaustively() {
        for a in 0u16..=0xFF {
            for m in 0u16..=0xFF {
                for carry_in in 0u16..=1 {
                    let mut cpu = Cpu::new();
                    cpu.a.set(a as u8);
                    cpu.flags.set(StatusFlags::CARRY, carry_in == 1);
                    adc(&mut cpu, &operand_value(m as u8));

                    let sum = a + m + carry_in;
                    let expected = sum as u8;
                    let signed =
                        (a as u8 as i8) as i16 + (m as u8 as i8) as i16 + carry_in as i16;
                    assert_eq!(cpu.a.get(), expected, "ADC {a:02X}+{m:02X}+{carry_in}");
                    assert_eq!(cpu.flags.contains(StatusFlags::CARRY), sum > 0xFF);
                    assert_eq!(cpu.flags.contains(StatusFlags::ZERO), expected == 0);
                    assert_eq!(
                        cpu.flags.contains(StatusFlags::NEGATIVE),
                        expected & 0x80 != 0
                    );
                    assert_eq!(
                        cpu.flags.contains(StatusFlags::OVERFLOW),
                        !(-128..=127).contains(&signed),
                        "ADC overflow {a:02X}+{m:02X}+{carry_in}"
                    );
                }
            }
        }
    }

    #[test]
    fn sbc_matches_the_truth_table_exhaustively() {
        for a in 0i16..=0xFF {
            for m in 0i16..=0xFF {
                for carry_in in 0i16..=1 {
                    let mut cpu = Cpu::new();
                    cpu.a.set(a as u8);
                    cpu.flags.set(StatusFlags::CARRY, carry_in == 1);
                    sbc(&mut cpu, &operand_value(m as u8));

                    let borrow = 1 - carry_in;
                    let diff = a - m - borrow;
                    let expected = diff as u8;
                    let signed = (a as u8 as i8) as i16 - (m as u8 as i8) as i16 - borrow;
                    assert_eq!(cpu.a.get(), expected, "SBC {a:02X}-{m:02X}-{borrow}");
                    // Carry set means no borrow was needed.
                    assert_eq!(cpu.flags.contains(StatusFlags::CARRY), diff >= 0);
                    assert_eq!(cpu.flags.contains(StatusFlags::ZERO), expected == 0);
                    assert_eq!(
                        cpu.flags.contains(StatusFlags::NEGATIVE),
                        expected & 0x80 != 0
                    );
                    assert_eq!(
                        cpu.flags.contains(StatusFlags::OVERFLOW),
                        !(-128..=127).contains(&signed),
                        "SBC overflow {a:02X}-{m:02X}-{borrow}"
                    );
                }
            }
        }
    }

    #[test]
    fn compare_sets_carry_zero_negative() {
        let mut cpu = Cpu::new();
        cpu.a.set(0x40);
        cmp(&mut cpu, &operand_value(0x40));
        assert!(cpu.flags.contains(StatusFlags::CARRY));
        assert!(cpu.flags.contains(StatusFlags::ZERO));
        assert!(!cpu.flags.contains(StatusFlags::NEGATIVE));

        cmp(&mut cpu, &operand_value(0x41));
        assert!(!cpu.flags.contains(StatusFlags::CARRY));
        assert!(!cpu.flags.contains(StatusFlags::ZERO));
        assert!(cpu.flags.contains(StatusFlags::NEGATIVE)); // 0x40 - 0x41 = 0xFF

        cmp(&mut cpu, &operand_value(0x10));
        assert!(cpu.flags.contains(StatusFlags::CARRY));
        assert!(!cpu.flags.contains(StatusFlags::ZERO));
    }

    #[test]
    fn bit_reads_overflow_and_negative_from_memory() {
        let mut cpu = Cpu::new();
        cpu.a.set(0x01);
        bit(&mut cpu, &operand_value(0xC0));
        assert!(cpu.flags.contains(StatusFlags::ZERO)); // 0x01 & 0xC0 == 0
        assert!(cpu.flags.contains(StatusFlags::OVERFLOW));
        assert!(cpu.flags.contains(StatusFlags::NEGATIVE));

        cpu.a.set(0xFF);
        bit(&mut cpu, &operand_value(0x01));
        assert!(!cpu.flags.contains(StatusFlags::ZERO));
        assert!(!cpu.flags.contains(StatusFlags::OVERFLOW));
        assert!(!cpu.flags.contains(StatusFlags::NEGATIVE));
    }

    #[test]
    fn rotates_shift_through_the_carry() {
        let mut cpu = Cpu::new();
        cpu.a.set(0x80);
        cpu.flags.insert(StatusFlags::CARRY);
        rol(&mut cpu, &Operand::default());
        assert_eq!(cpu.a.get(), 0x01);
        assert!(cpu.flags.contains(StatusFlags::CARRY));

        let mut cpu = Cpu::new();
        cpu.a.set(0x01);
        cpu.flags.insert(StatusFlags::CARRY);
        ror(&mut cpu, &Operand::default());
        assert_eq!(cpu.a.get(), 0x80);
        assert!(cpu.flags.contains(StatusFlags::CARRY));
        assert!(cpu.flags.contains(StatusFlags::NEGATIVE));
    }

    #[test]
    fn shifts_set_carry_from_the_ejected_bit() {
        let mut cpu = Cpu::new();
        cpu.a.set(0x81);
        asl(&mut cpu, &Operand::default());
        assert_eq!(cpu.a.get(), 0x02);
        assert!(cpu.flags.contains(StatusFlags::CARRY));

        let mut cpu = Cpu::new();
        cpu.a.set(0x01);
        lsr(&mut cpu, &Operand::default());
        assert_eq!(cpu.a.get(), 0x00);
        assert!(cpu.flags.contains(StatusFlags::CARRY));
        assert!(cpu.flags.contains(StatusFlags::ZERO));
    }

    #[test]
    fn increment_and_decrement_wrap() {
        let mut cpu = Cpu::new();
        cpu.x.set(0xFF);
        inx(&mut cpu, &Operand::default());
        assert_eq!(cpu.x.get(), 0x00);
        assert!(cpu.flags.contains(StatusFlags::ZERO));

        cpu.y.set(0x00);
        dey(&mut cpu, &Operand::default());
        assert_eq!(cpu.y.get(), 0xFF);
        assert!(cpu.flags.contains(StatusFlags::NEGATIVE));
    }

    #[test]
    fn txs_updates_no_flags() {
        let mut cpu = Cpu::new();
        cpu.x.set(0x00);
        txs(&mut cpu, &Operand::default());
        assert_eq!(cpu.sp, 0x00);
        assert!(!cpu.flags.contains(StatusFlags::ZERO));
    }
}
