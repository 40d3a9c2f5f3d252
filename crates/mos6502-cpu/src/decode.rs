//! Opcode decode tables.
//!
//! All 256 opcode values decode to a defined `(operation, addressing mode)`
//! pair. The table is built at compile time from the 6502's regular
//! `aaabbbcc` encoding: an explicit tier first picks off every opcode that
//! does not follow the family rules (single-byte implied ops, the JAM and
//! multi-byte NOP families, the immediate-form and unstable-store
//! undocumented ops), then the `cc`-group rules decode the rest. The result
//! is a flat table auditable against published opcode matrices.

use crate::addressing::AddrMode;

/// Operations, official and undocumented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// Add with carry (BCD-aware).
    Adc,
    /// Logical AND into A.
    And,
    /// Arithmetic shift left.
    Asl,
    /// Branch if carry clear.
    Bcc,
    /// Branch if carry set.
    Bcs,
    /// Branch if zero set.
    Beq,
    /// Bit test: Z from A AND operand, N/V copied from operand.
    Bit,
    /// Branch if negative set.
    Bmi,
    /// Branch if zero clear.
    Bne,
    /// Branch if negative clear.
    Bpl,
    /// Software interrupt through the IRQ/BRK vector.
    Brk,
    /// Branch if overflow clear.
    Bvc,
    /// Branch if overflow set.
    Bvs,
    /// Clear carry.
    Clc,
    /// Clear decimal mode.
    Cld,
    /// Clear interrupt disable.
    Cli,
    /// Clear overflow.
    Clv,
    /// Compare A with operand.
    Cmp,
    /// Compare X with operand.
    Cpx,
    /// Compare Y with operand.
    Cpy,
    /// Decrement memory.
    Dec,
    /// Decrement X.
    Dex,
    /// Decrement Y.
    Dey,
    /// Exclusive OR into A.
    Eor,
    /// Increment memory.
    Inc,
    /// Increment X.
    Inx,
    /// Increment Y.
    Iny,
    /// Jump.
    Jmp,
    /// Jump to subroutine.
    Jsr,
    /// Load A.
    Lda,
    /// Load X.
    Ldx,
    /// Load Y.
    Ldy,
    /// Logical shift right.
    Lsr,
    /// No operation (all addressing-mode forms).
    Nop,
    /// Logical OR into A.
    Ora,
    /// Push A.
    Pha,
    /// Push P with B set.
    Php,
    /// Pull A.
    Pla,
    /// Pull P.
    Plp,
    /// Rotate left through carry.
    Rol,
    /// Rotate right through carry.
    Ror,
    /// Return from interrupt.
    Rti,
    /// Return from subroutine.
    Rts,
    /// Subtract with carry (BCD-aware).
    Sbc,
    /// Set carry.
    Sec,
    /// Set decimal mode.
    Sed,
    /// Set interrupt disable.
    Sei,
    /// Store A.
    Sta,
    /// Store X.
    Stx,
    /// Store Y.
    Sty,
    /// Transfer A to X.
    Tax,
    /// Transfer A to Y.
    Tay,
    /// Transfer S to X.
    Tsx,
    /// Transfer X to A.
    Txa,
    /// Transfer X to S (no flags).
    Txs,
    /// Transfer Y to A.
    Tya,

    // ---- Undocumented ----
    /// AND then LSR on the accumulator.
    Alr,
    /// AND, with carry copied from the negative flag.
    Anc,
    /// `(A | magic) & X & operand` into A; unstable on real silicon.
    Ane,
    /// AND then rotate right, with carry/overflow taken from bits 6/5.
    Arr,
    /// Decrement memory then compare with A.
    Dcp,
    /// Increment memory then subtract from A.
    Isc,
    /// Halt: latches the CPU until reset.
    Jam,
    /// `operand & S` into A, X and S.
    Las,
    /// Load A and X together.
    Lax,
    /// `(A | magic) & operand` into A and X; unstable on real silicon.
    Lxa,
    /// ROL memory then AND with A.
    Rla,
    /// ROR memory then ADC.
    Rra,
    /// Store A AND X.
    Sax,
    /// `(A & X) - operand` into X.
    Sbx,
    /// Store `A & X & (high(addr) + 1)`; unstable on real silicon.
    Sha,
    /// Store `X & (high(addr) + 1)`; unstable on real silicon.
    Shx,
    /// Store `Y & (high(addr) + 1)`; unstable on real silicon.
    Shy,
    /// ASL memory then ORA.
    Slo,
    /// LSR memory then EOR.
    Sre,
    /// `S = A & X`, then store `S & (high(addr) + 1)`; unstable.
    Tas,
    /// Undocumented alias of SBC immediate.
    Usbc,
}

impl Op {
    /// Assembler mnemonic, for disassembly and traces.
    #[must_use]
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Adc => "ADC",
            Self::And => "AND",
            Self::Asl => "ASL",
            Self::Bcc => "BCC",
            Self::Bcs => "BCS",
            Self::Beq => "BEQ",
            Self::Bit => "BIT",
            Self::Bmi => "BMI",
            Self::Bne => "BNE",
            Self::Bpl => "BPL",
            Self::Brk => "BRK",
            Self::Bvc => "BVC",
            Self::Bvs => "BVS",
            Self::Clc => "CLC",
            Self::Cld => "CLD",
            Self::Cli => "CLI",
            Self::Clv => "CLV",
            Self::Cmp => "CMP",
            Self::Cpx => "CPX",
            Self::Cpy => "CPY",
            Self::Dec => "DEC",
            Self::Dex => "DEX",
            Self::Dey => "DEY",
            Self::Eor => "EOR",
            Self::Inc => "INC",
            Self::Inx => "INX",
            Self::Iny => "INY",
            Self::Jmp => "JMP",
            Self::Jsr => "JSR",
            Self::Lda => "LDA",
            Self::Ldx => "LDX",
            Self::Ldy => "LDY",
            Self::Lsr => "LSR",
            Self::Nop => "NOP",
            Self::Ora => "ORA",
            Self::Pha => "PHA",
            Self::Php => "PHP",
            Self::Pla => "PLA",
            Self::Plp => "PLP",
            Self::Rol => "ROL",
            Self::Ror => "ROR",
            Self::Rti => "RTI",
            Self::Rts => "RTS",
            Self::Sbc => "SBC",
            Self::Sec => "SEC",
            Self::Sed => "SED",
            Self::Sei => "SEI",
            Self::Sta => "STA",
            Self::Stx => "STX",
            Self::Sty => "STY",
            Self::Tax => "TAX",
            Self::Tay => "TAY",
            Self::Tsx => "TSX",
            Self::Txa => "TXA",
            Self::Txs => "TXS",
            Self::Tya => "TYA",
            Self::Alr => "ALR",
            Self::Anc => "ANC",
            Self::Ane => "ANE",
            Self::Arr => "ARR",
            Self::Dcp => "DCP",
            Self::Isc => "ISC",
            Self::Jam => "JAM",
            Self::Las => "LAS",
            Self::Lax => "LAX",
            Self::Lxa => "LXA",
            Self::Rla => "RLA",
            Self::Rra => "RRA",
            Self::Sax => "SAX",
            Self::Sbx => "SBX",
            Self::Sha => "SHA",
            Self::Shx => "SHX",
            Self::Shy => "SHY",
            Self::Slo => "SLO",
            Self::Sre => "SRE",
            Self::Tas => "TAS",
            Self::Usbc => "USBC",
        }
    }
}

/// Decoded opcode: operation, addressing mode, and documentation status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeEntry {
    /// Operation.
    pub op: Op,
    /// Addressing mode.
    pub mode: AddrMode,
    /// Whether this opcode is absent from the official data sheet.
    pub unofficial: bool,
}

const fn official(op: Op, mode: AddrMode) -> OpcodeEntry {
    OpcodeEntry {
        op,
        mode,
        unofficial: false,
    }
}

const fn illegal(op: Op, mode: AddrMode) -> OpcodeEntry {
    OpcodeEntry {
        op,
        mode,
        unofficial: true,
    }
}

/// Nominal cycle count per opcode. Page-cross and taken-branch penalties
/// are charged on top during execution.
#[rustfmt::skip]
pub const OPCODE_CYCLES: [u8; 256] = [
    7, 6, 2, 8, 3, 3, 5, 5, 3, 2, 2, 2, 4, 4, 6, 6,
    2, 5, 2, 8, 4, 4, 6, 6, 2, 4, 2, 7, 4, 4, 7, 7,
    6, 6, 2, 8, 3, 3, 5, 5, 4, 2, 2, 2, 4, 4, 6, 6,
    2, 5, 2, 8, 4, 4, 6, 6, 2, 4, 2, 7, 4, 4, 7, 7,
    6, 6, 2, 8, 3, 3, 5, 5, 3, 2, 2, 2, 3, 4, 6, 6,
    2, 5, 2, 8, 4, 4, 6, 6, 2, 4, 2, 7, 4, 4, 7, 7,
    6, 6, 2, 8, 3, 3, 5, 5, 4, 2, 2, 2, 5, 4, 6, 6,
    2, 5, 2, 8, 4, 4, 6, 6, 2, 4, 2, 7, 4, 4, 7, 7,
    2, 6, 2, 6, 3, 3, 3, 3, 2, 2, 2, 2, 4, 4, 4, 4,
    2, 6, 2, 6, 4, 4, 4, 4, 2, 5, 2, 5, 5, 5, 5, 5,
    2, 6, 2, 6, 3, 3, 3, 3, 2, 2, 2, 2, 4, 4, 4, 4,
    2, 5, 2, 5, 4, 4, 4, 4, 2, 4, 2, 4, 4, 4, 4, 4,
    2, 6, 2, 8, 3, 3, 5, 5, 2, 2, 2, 2, 4, 4, 6, 6,
    2, 5, 2, 8, 4, 4, 6, 6, 2, 4, 2, 7, 4, 4, 7, 7,
    2, 6, 2, 8, 3, 3, 5, 5, 2, 2, 2, 2, 4, 4, 6, 6,
    2, 5, 2, 8, 4, 4, 6, 6, 2, 4, 2, 7, 4, 4, 7, 7,
];

/// Decode one opcode byte.
///
/// Tier 1 handles every encoding exception explicitly; tier 2 applies the
/// regular `cc`-group rules.
const fn decode(opcode: u8) -> OpcodeEntry {
    match opcode {
        // Control flow and stack, all outside the family rules.
        0x00 => return official(Op::Brk, AddrMode::Imp),
        0x20 => return official(Op::Jsr, AddrMode::Abs),
        0x40 => return official(Op::Rti, AddrMode::Imp),
        0x60 => return official(Op::Rts, AddrMode::Imp),

        // Single-byte implied operations.
        0x08 => return official(Op::Php, AddrMode::Imp),
        0x18 => return official(Op::Clc, AddrMode::Imp),
        0x28 => return official(Op::Plp, AddrMode::Imp),
        0x38 => return official(Op::Sec, AddrMode::Imp),
        0x48 => return official(Op::Pha, AddrMode::Imp),
        0x58 => return official(Op::Cli, AddrMode::Imp),
        0x68 => return official(Op::Pla, AddrMode::Imp),
        0x78 => return official(Op::Sei, AddrMode::Imp),
        0x88 => return official(Op::Dey, AddrMode::Imp),
        0x8A => return official(Op::Txa, AddrMode::Imp),
        0x98 => return official(Op::Tya, AddrMode::Imp),
        0x9A => return official(Op::Txs, AddrMode::Imp),
        0xA8 => return official(Op::Tay, AddrMode::Imp),
        0xAA => return official(Op::Tax, AddrMode::Imp),
        0xB8 => return official(Op::Clv, AddrMode::Imp),
        0xBA => return official(Op::Tsx, AddrMode::Imp),
        0xC8 => return official(Op::Iny, AddrMode::Imp),
        0xCA => return official(Op::Dex, AddrMode::Imp),
        0xD8 => return official(Op::Cld, AddrMode::Imp),
        0xE8 => return official(Op::Inx, AddrMode::Imp),
        0xF8 => return official(Op::Sed, AddrMode::Imp),

        // The one official NOP, and the implied undocumented ones.
        0xEA => return official(Op::Nop, AddrMode::Imp),
        0x1A | 0x3A | 0x5A | 0x7A | 0xDA | 0xFA => return illegal(Op::Nop, AddrMode::Imp),

        // Multi-byte NOPs still consume their addressing-mode bytes.
        0x80 | 0x82 | 0x89 | 0xC2 | 0xE2 => return illegal(Op::Nop, AddrMode::Imm),
        0x04 | 0x44 | 0x64 => return illegal(Op::Nop, AddrMode::Zp0),
        0x14 | 0x34 | 0x54 | 0x74 | 0xD4 | 0xF4 => return illegal(Op::Nop, AddrMode::Zpx),
        0x0C => return illegal(Op::Nop, AddrMode::Abs),
        0x1C | 0x3C | 0x5C | 0x7C | 0xDC | 0xFC => return illegal(Op::Nop, AddrMode::Abx),

        // Halt opcodes.
        0x02 | 0x12 | 0x22 | 0x32 | 0x42 | 0x52 | 0x62 | 0x72 | 0x92 | 0xB2 | 0xD2 | 0xF2 => {
            return illegal(Op::Jam, AddrMode::Imp)
        }

        // Immediate-form undocumented operations.
        0x4B => return illegal(Op::Alr, AddrMode::Imm),
        0x0B | 0x2B => return illegal(Op::Anc, AddrMode::Imm),
        0x8B => return illegal(Op::Ane, AddrMode::Imm),
        0x6B => return illegal(Op::Arr, AddrMode::Imm),
        0xAB => return illegal(Op::Lxa, AddrMode::Imm),
        0xCB => return illegal(Op::Sbx, AddrMode::Imm),
        0xEB => return illegal(Op::Usbc, AddrMode::Imm),

        // Unstable store family and LAS.
        0x9F => return illegal(Op::Sha, AddrMode::Aby),
        0x93 => return illegal(Op::Sha, AddrMode::Idy),
        0x9C => return illegal(Op::Shy, AddrMode::Abx),
        0x9E => return illegal(Op::Shx, AddrMode::Aby),
        0x9B => return illegal(Op::Tas, AddrMode::Aby),
        0xBB => return illegal(Op::Las, AddrMode::Aby),

        _ => {}
    }

    let aaa = (opcode >> 5) & 0x07;
    let bbb = (opcode >> 2) & 0x07;

    match opcode & 0x03 {
        // Group 01: the ALU column.
        0x01 => {
            let mode = match bbb {
                0x00 => AddrMode::Idx,
                0x01 => AddrMode::Zp0,
                0x02 => AddrMode::Imm,
                0x03 => AddrMode::Abs,
                0x04 => AddrMode::Idy,
                0x05 => AddrMode::Zpx,
                0x06 => AddrMode::Aby,
                _ => AddrMode::Abx,
            };
            let op = match aaa {
                0x00 => Op::Ora,
                0x01 => Op::And,
                0x02 => Op::Eor,
                0x03 => Op::Adc,
                0x04 => Op::Sta,
                0x05 => Op::Lda,
                0x06 => Op::Cmp,
                _ => Op::Sbc,
            };
            official(op, mode)
        }

        // Group 10: shifts and X-register traffic. STX/LDX substitute
        // ZP,Y, and LDX substitutes Abs,Y, in the indexed columns.
        0x02 => {
            let mode = match bbb {
                0x00 => AddrMode::Imm,
                0x01 => AddrMode::Zp0,
                0x02 => AddrMode::Acc,
                0x03 => AddrMode::Abs,
                0x05 => {
                    if aaa == 0x04 || aaa == 0x05 {
                        AddrMode::Zpy
                    } else {
                        AddrMode::Zpx
                    }
                }
                0x07 => {
                    if aaa == 0x05 {
                        AddrMode::Aby
                    } else {
                        AddrMode::Abx
                    }
                }
                // Columns 4 and 6 hold only JAM and implied opcodes, all
                // consumed by the explicit tier.
                _ => AddrMode::Imp,
            };
            let op = match aaa {
                0x00 => Op::Asl,
                0x01 => Op::Rol,
                0x02 => Op::Lsr,
                0x03 => Op::Ror,
                0x04 => Op::Stx,
                0x05 => Op::Ldx,
                0x06 => Op::Dec,
                _ => Op::Inc,
            };
            official(op, mode)
        }

        // Group 11: the undocumented RMW family, combining the group 10
        // transform with the group 01 ALU step. SAX/LAX take the ZP,Y and
        // Abs,Y substitutions.
        0x03 => {
            let mode = match bbb {
                0x00 => AddrMode::Idx,
                0x01 => AddrMode::Zp0,
                0x02 => AddrMode::Imm,
                0x03 => AddrMode::Abs,
                0x04 => AddrMode::Idy,
                0x05 => {
                    if aaa == 0x04 || aaa == 0x05 {
                        AddrMode::Zpy
                    } else {
                        AddrMode::Zpx
                    }
                }
                0x06 => AddrMode::Aby,
                _ => {
                    if aaa == 0x05 {
                        AddrMode::Aby
                    } else {
                        AddrMode::Abx
                    }
                }
            };
            let op = match aaa {
                0x00 => Op::Slo,
                0x01 => Op::Rla,
                0x02 => Op::Sre,
                0x03 => Op::Rra,
                0x04 => Op::Sax,
                0x05 => Op::Lax,
                0x06 => Op::Dcp,
                _ => Op::Isc,
            };
            illegal(op, mode)
        }

        // Group 00: compares, loads/stores of Y, jumps, and the branch row.
        _ => {
            if bbb == 0x04 {
                let op = match aaa {
                    0x00 => Op::Bpl,
                    0x01 => Op::Bmi,
                    0x02 => Op::Bvc,
                    0x03 => Op::Bvs,
                    0x04 => Op::Bcc,
                    0x05 => Op::Bcs,
                    0x06 => Op::Bne,
                    _ => Op::Beq,
                };
                return official(op, AddrMode::Rel);
            }
            let mode = match bbb {
                0x00 => AddrMode::Imm,
                0x01 => AddrMode::Zp0,
                0x03 => {
                    if aaa == 0x03 {
                        AddrMode::Ind
                    } else {
                        AddrMode::Abs
                    }
                }
                0x05 => AddrMode::Zpx,
                0x07 => AddrMode::Abx,
                // Columns 2 and 6 are implied opcodes, all consumed by the
                // explicit tier.
                _ => AddrMode::Imp,
            };
            let op = match aaa {
                0x01 => Op::Bit,
                0x02 | 0x03 => Op::Jmp,
                0x04 => Op::Sty,
                0x05 => Op::Ldy,
                0x06 => Op::Cpy,
                0x07 => Op::Cpx,
                // The aaa=0 row is BRK plus NOPs, all explicit.
                _ => Op::Nop,
            };
            official(op, mode)
        }
    }
}

const fn build_table() -> [OpcodeEntry; 256] {
    let mut table = [official(Op::Nop, AddrMode::Imp); 256];
    let mut i = 0;
    while i < 256 {
        table[i] = decode(i as u8);
        i += 1;
    }
    table
}

/// Complete 256-entry decode table, indexed by opcode byte.
pub static DECODE: [OpcodeEntry; 256] = build_table();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lda_family() {
        assert_eq!(DECODE[0xA9], official(Op::Lda, AddrMode::Imm));
        assert_eq!(DECODE[0xA5], official(Op::Lda, AddrMode::Zp0));
        assert_eq!(DECODE[0xB5], official(Op::Lda, AddrMode::Zpx));
        assert_eq!(DECODE[0xAD], official(Op::Lda, AddrMode::Abs));
        assert_eq!(DECODE[0xBD], official(Op::Lda, AddrMode::Abx));
        assert_eq!(DECODE[0xB9], official(Op::Lda, AddrMode::Aby));
        assert_eq!(DECODE[0xA1], official(Op::Lda, AddrMode::Idx));
        assert_eq!(DECODE[0xB1], official(Op::Lda, AddrMode::Idy));
    }

    #[test]
    fn x_register_mode_substitutions() {
        assert_eq!(DECODE[0x96], official(Op::Stx, AddrMode::Zpy));
        assert_eq!(DECODE[0xB6], official(Op::Ldx, AddrMode::Zpy));
        assert_eq!(DECODE[0xBE], official(Op::Ldx, AddrMode::Aby));
        assert_eq!(DECODE[0x97], illegal(Op::Sax, AddrMode::Zpy));
        assert_eq!(DECODE[0xB7], illegal(Op::Lax, AddrMode::Zpy));
        assert_eq!(DECODE[0xBF], illegal(Op::Lax, AddrMode::Aby));
    }

    #[test]
    fn jumps() {
        assert_eq!(DECODE[0x4C], official(Op::Jmp, AddrMode::Abs));
        assert_eq!(DECODE[0x6C], official(Op::Jmp, AddrMode::Ind));
        assert_eq!(DECODE[0x20], official(Op::Jsr, AddrMode::Abs));
    }

    #[test]
    fn branch_row() {
        assert_eq!(DECODE[0x10].op, Op::Bpl);
        assert_eq!(DECODE[0x30].op, Op::Bmi);
        assert_eq!(DECODE[0x50].op, Op::Bvc);
        assert_eq!(DECODE[0x70].op, Op::Bvs);
        assert_eq!(DECODE[0x90].op, Op::Bcc);
        assert_eq!(DECODE[0xB0].op, Op::Bcs);
        assert_eq!(DECODE[0xD0].op, Op::Bne);
        assert_eq!(DECODE[0xF0].op, Op::Beq);
        for opcode in [0x10, 0x30, 0x50, 0x70, 0x90, 0xB0, 0xD0, 0xF0] {
            assert_eq!(DECODE[opcode].mode, AddrMode::Rel);
        }
    }

    #[test]
    fn immediate_undocumented_ops() {
        assert_eq!(DECODE[0x4B], illegal(Op::Alr, AddrMode::Imm));
        assert_eq!(DECODE[0x0B], illegal(Op::Anc, AddrMode::Imm));
        assert_eq!(DECODE[0x2B], illegal(Op::Anc, AddrMode::Imm));
        assert_eq!(DECODE[0x8B], illegal(Op::Ane, AddrMode::Imm));
        assert_eq!(DECODE[0x6B], illegal(Op::Arr, AddrMode::Imm));
        assert_eq!(DECODE[0xAB], illegal(Op::Lxa, AddrMode::Imm));
        assert_eq!(DECODE[0xCB], illegal(Op::Sbx, AddrMode::Imm));
        assert_eq!(DECODE[0xEB], illegal(Op::Usbc, AddrMode::Imm));
    }

    #[test]
    fn unstable_store_family() {
        assert_eq!(DECODE[0x9F], illegal(Op::Sha, AddrMode::Aby));
        assert_eq!(DECODE[0x93], illegal(Op::Sha, AddrMode::Idy));
        assert_eq!(DECODE[0x9C], illegal(Op::Shy, AddrMode::Abx));
        assert_eq!(DECODE[0x9E], illegal(Op::Shx, AddrMode::Aby));
        assert_eq!(DECODE[0x9B], illegal(Op::Tas, AddrMode::Aby));
        assert_eq!(DECODE[0xBB], illegal(Op::Las, AddrMode::Aby));
    }

    #[test]
    fn rmw_family_group_decode() {
        assert_eq!(DECODE[0x07], illegal(Op::Slo, AddrMode::Zp0));
        assert_eq!(DECODE[0x33], illegal(Op::Rla, AddrMode::Idy));
        assert_eq!(DECODE[0x5B], illegal(Op::Sre, AddrMode::Aby));
        assert_eq!(DECODE[0x7F], illegal(Op::Rra, AddrMode::Abx));
        assert_eq!(DECODE[0x83], illegal(Op::Sax, AddrMode::Idx));
        assert_eq!(DECODE[0xC3], illegal(Op::Dcp, AddrMode::Idx));
        assert_eq!(DECODE[0xFF], illegal(Op::Isc, AddrMode::Abx));
    }

    #[test]
    fn jam_slots() {
        for opcode in [
            0x02, 0x12, 0x22, 0x32, 0x42, 0x52, 0x62, 0x72, 0x92, 0xB2, 0xD2, 0xF2,
        ] {
            assert_eq!(DECODE[opcode], illegal(Op::Jam, AddrMode::Imp));
        }
    }

    #[test]
    fn multi_byte_nops_keep_their_modes() {
        assert_eq!(DECODE[0xEA], official(Op::Nop, AddrMode::Imp));
        assert_eq!(DECODE[0x80], illegal(Op::Nop, AddrMode::Imm));
        assert_eq!(DECODE[0x04], illegal(Op::Nop, AddrMode::Zp0));
        assert_eq!(DECODE[0x14], illegal(Op::Nop, AddrMode::Zpx));
        assert_eq!(DECODE[0x0C], illegal(Op::Nop, AddrMode::Abs));
        assert_eq!(DECODE[0xFC], illegal(Op::Nop, AddrMode::Abx));
    }

    #[test]
    fn unofficial_count_matches_data_sheet() {
        let unofficial = DECODE.iter().filter(|entry| entry.unofficial).count();
        assert_eq!(unofficial, 105);
        assert_eq!(DECODE.len() - unofficial, 151);
    }

    #[test]
    fn cycle_table_spot_checks() {
        assert_eq!(OPCODE_CYCLES[0x00], 7); // BRK
        assert_eq!(OPCODE_CYCLES[0xA9], 2); // LDA #
        assert_eq!(OPCODE_CYCLES[0xA5], 3); // LDA zp
        assert_eq!(OPCODE_CYCLES[0xBD], 4); // LDA abs,X
        assert_eq!(OPCODE_CYCLES[0xA1], 6); // LDA (zp,X)
        assert_eq!(OPCODE_CYCLES[0xB1], 5); // LDA (zp),Y
        assert_eq!(OPCODE_CYCLES[0x4C], 3); // JMP abs
        assert_eq!(OPCODE_CYCLES[0x6C], 5); // JMP (ind)
        assert_eq!(OPCODE_CYCLES[0x20], 6); // JSR
        assert_eq!(OPCODE_CYCLES[0x60], 6); // RTS
        assert_eq!(OPCODE_CYCLES[0x1E], 7); // ASL abs,X
        assert_eq!(OPCODE_CYCLES[0x03], 8); // SLO (zp,X)
        assert_eq!(OPCODE_CYCLES[0x91], 6); // STA (zp),Y
    }
}
