//! Instruction semantics.
//!
//! Operation bodies work on the 16-bit operand intermediate left behind by
//! the addressing resolver, so carry and overflow information survives
//! above bit 7; results narrow to 8 bits only at writeback.

use crate::bus::Bus;
use crate::cpu::Cpu;
use crate::decode::Op;
use crate::status::Status;
use crate::vectors;

/// Constant folded into A by the unstable ANE/LXA opcodes.
///
/// Real silicon produces a value that depends on temperature and bus
/// capacitance; `0x00` is this core's documented deterministic choice.
const MAGIC: u8 = 0x00;

impl Cpu {
    /// Dispatch one decoded operation. The addressing mode has already run.
    pub(crate) fn execute(&mut self, op: Op, bus: &mut impl Bus) {
        match op {
            Op::Adc => self.op_adc(),
            Op::And => self.op_and(),
            Op::Asl => self.op_asl(bus),
            Op::Bcc => self.op_branch_if(!self.status.contains(Status::C)),
            Op::Bcs => self.op_branch_if(self.status.contains(Status::C)),
            Op::Beq => self.op_branch_if(self.status.contains(Status::Z)),
            Op::Bit => self.op_bit(),
            Op::Bmi => self.op_branch_if(self.status.contains(Status::N)),
            Op::Bne => self.op_branch_if(!self.status.contains(Status::Z)),
            Op::Bpl => self.op_branch_if(!self.status.contains(Status::N)),
            Op::Brk => self.op_brk(bus),
            Op::Bvc => self.op_branch_if(!self.status.contains(Status::V)),
            Op::Bvs => self.op_branch_if(self.status.contains(Status::V)),
            Op::Clc => self.status.set_flag(Status::C, false),
            Op::Cld => self.status.set_flag(Status::D, false),
            Op::Cli => self.status.set_flag(Status::I, false),
            Op::Clv => self.status.set_flag(Status::V, false),
            Op::Cmp => self.op_compare(self.a),
            Op::Cpx => self.op_compare(self.x),
            Op::Cpy => self.op_compare(self.y),
            Op::Dec => self.op_dec(bus),
            Op::Dex => {
                self.x = self.x.wrapping_sub(1);
                self.status.set_zn(self.x);
            }
            Op::Dey => {
                self.y = self.y.wrapping_sub(1);
                self.status.set_zn(self.y);
            }
            Op::Eor => self.op_eor(),
            Op::Inc => self.op_inc(bus),
            Op::Inx => {
                self.x = self.x.wrapping_add(1);
                self.status.set_zn(self.x);
            }
            Op::Iny => {
                self.y = self.y.wrapping_add(1);
                self.status.set_zn(self.y);
            }
            Op::Jmp => self.pc = self.address,
            Op::Jsr => self.op_jsr(bus),
            Op::Lda => {
                self.a = (self.target & 0x00FF) as u8;
                self.status.set_zn(self.a);
            }
            Op::Ldx => {
                self.x = (self.target & 0x00FF) as u8;
                self.status.set_zn(self.x);
            }
            Op::Ldy => {
                self.y = (self.target & 0x00FF) as u8;
                self.status.set_zn(self.y);
            }
            Op::Lsr => self.op_lsr(bus),
            Op::Nop => {}
            Op::Ora => self.op_ora(),
            Op::Pha => self.push(bus, self.a),
            Op::Php => {
                let byte = self.status.to_pushed_byte(true);
                self.push(bus, byte);
            }
            Op::Pla => {
                self.a = self.pop(bus);
                self.status.set_zn(self.a);
            }
            Op::Plp => {
                let byte = self.pop(bus);
                self.status = Status::from_pulled_byte(byte);
            }
            Op::Rol => self.op_rol(bus),
            Op::Ror => self.op_ror(bus),
            Op::Rti => self.op_rti(bus),
            Op::Rts => self.pc = self.pop_u16(bus).wrapping_add(1),
            Op::Sbc | Op::Usbc => self.op_sbc(),
            Op::Sec => self.status.set_flag(Status::C, true),
            Op::Sed => self.status.set_flag(Status::D, true),
            Op::Sei => self.status.set_flag(Status::I, true),
            Op::Sta => self.write_result(bus, u16::from(self.a)),
            Op::Stx => self.write_result(bus, u16::from(self.x)),
            Op::Sty => self.write_result(bus, u16::from(self.y)),
            Op::Tax => {
                self.x = self.a;
                self.status.set_zn(self.x);
            }
            Op::Tay => {
                self.y = self.a;
                self.status.set_zn(self.y);
            }
            Op::Tsx => {
                self.x = self.sp;
                self.status.set_zn(self.x);
            }
            Op::Txa => {
                self.a = self.x;
                self.status.set_zn(self.a);
            }
            Op::Txs => self.sp = self.x,
            Op::Tya => {
                self.a = self.y;
                self.status.set_zn(self.a);
            }

            Op::Alr => self.op_alr(),
            Op::Anc => self.op_anc(),
            Op::Ane => self.op_ane(),
            Op::Arr => self.op_arr(),
            Op::Dcp => self.op_dcp(bus),
            Op::Isc => self.op_isc(bus),
            Op::Jam => self.op_jam(),
            Op::Las => self.op_las(),
            Op::Lax => self.op_lax(),
            Op::Lxa => self.op_lxa(),
            Op::Rla => self.op_rla(bus),
            Op::Rra => self.op_rra(bus),
            Op::Sax => bus.write(self.address, self.a & self.x),
            Op::Sbx => self.op_sbx(),
            Op::Sha => self.op_unstable_store(bus, self.a & self.x),
            Op::Shx => self.op_unstable_store(bus, self.x),
            Op::Shy => self.op_unstable_store(bus, self.y),
            Op::Slo => self.op_slo(bus),
            Op::Sre => self.op_sre(bus),
            Op::Tas => {
                self.sp = self.a & self.x;
                self.op_unstable_store(bus, self.sp);
            }
        }
    }

    /// Whether ADC/SBC apply BCD fixups.
    #[cfg(not(feature = "nes"))]
    fn decimal_mode(&self) -> bool {
        self.status.contains(Status::D)
    }

    /// The NES variant hard-wires decimal mode off.
    #[cfg(feature = "nes")]
    fn decimal_mode(&self) -> bool {
        false
    }

    /// Narrow a result to 8 bits and write it back: to the accumulator for
    /// the `cc = 10`, `bbb = 010` encoding, to memory otherwise.
    fn write_result(&mut self, bus: &mut impl Bus, result: u16) {
        let value = (result & 0x00FF) as u8;
        if self.opcode & 0x03 == 0x02 && (self.opcode >> 2) & 0x07 == 0x02 {
            self.a = value;
            return;
        }
        bus.write(self.address, value);
    }

    /// Taken branch: +1 cycle, +1 more when the target lands on another
    /// page than the instruction's successor.
    fn op_branch_if(&mut self, condition: bool) {
        if !condition {
            return;
        }
        let destination = self.pc.wrapping_add(self.address);
        if destination & 0xFF00 != self.pc & 0xFF00 {
            self.cycles_remaining += 1;
        }
        self.cycles_remaining += 1;
        self.pc = destination;
    }

    fn op_adc(&mut self) {
        let carry = u16::from(self.status.contains(Status::C));
        let mut sum = u16::from(self.a) + self.target + carry;

        if self.decimal_mode() {
            let high = u16::from(self.a & 0xF0) + (self.target & 0x00F0);
            let mut low = u16::from(self.a & 0x0F) + (self.target & 0x000F) + carry;
            // Low digit wraps at 0x0A, carrying a 0x10 into the high digit.
            if low >= 0x0A {
                low = ((low + 0x06) & 0x0F) + 0x10;
            }
            sum = high + low;
            self.test_negative(sum);
            // High digit wraps at 0xA0.
            if sum >= 0xA0 {
                sum += 0x60;
            }
            self.status.set_flag(Status::V, sum & 0xFF80 != 0);
            self.status.set_flag(Status::C, sum >= 0x100);
        } else {
            self.test_carry(sum);
            self.test_negative(sum);
            self.test_overflow(self.target, sum);
        }
        self.test_zero(sum);

        self.a = (sum & 0x00FF) as u8;
    }

    /// SBC is ADC of the inverted operand; all flags come from the binary
    /// intermediate even in decimal mode, where only the stored result is
    /// corrected.
    fn op_sbc(&mut self) {
        let carry = u16::from(self.status.contains(Status::C));
        let inverted = self.target ^ 0x00FF;
        let mut result = u16::from(self.a) + inverted + carry;

        self.test_zero(result);
        self.test_carry(result);
        self.test_overflow(inverted, result);
        self.test_negative(result & 0x00FF);

        if self.decimal_mode() {
            let high = u16::from(self.a & 0xF0).wrapping_sub(self.target & 0x00F0);
            let mut low = u16::from(self.a & 0x0F)
                .wrapping_sub(self.target & 0x000F)
                .wrapping_add(carry)
                .wrapping_sub(1);
            // A borrowed low digit wraps back by 6 and borrows 0x10.
            if low & 0x8000 != 0 {
                low = low.wrapping_sub(0x06) & 0x0F;
                low = low.wrapping_sub(0x10);
            }
            result = high.wrapping_add(low);
            if result & 0x8000 != 0 {
                result = result.wrapping_sub(0x60);
            }
        }

        self.a = (result & 0x00FF) as u8;
    }

    fn op_and(&mut self) {
        let result = u16::from(self.a) & self.target;
        self.a = (result & 0x00FF) as u8;
        self.test_zero(result);
        self.test_negative(result);
    }

    fn op_ora(&mut self) {
        let result = u16::from(self.a) | self.target;
        self.a = (result & 0x00FF) as u8;
        self.test_zero(result);
        self.test_negative(result);
    }

    fn op_eor(&mut self) {
        let result = u16::from(self.a) ^ self.target;
        self.a = (result & 0x00FF) as u8;
        self.test_zero(result);
        self.test_negative(result);
    }

    fn op_asl(&mut self, bus: &mut impl Bus) {
        let result = self.target << 1;
        self.write_result(bus, result);
        self.test_carry(result);
        self.test_zero(result);
        self.test_negative(result);
    }

    /// LSR always clears N; the shifted-out bit 0 becomes C.
    fn op_lsr(&mut self, bus: &mut impl Bus) {
        let result = self.target >> 1;
        self.write_result(bus, result);
        self.status.set_flag(Status::C, self.target & 0x01 != 0);
        self.test_zero(result);
        self.status.set_flag(Status::N, false);
    }

    fn op_rol(&mut self, bus: &mut impl Bus) {
        let carry = u16::from(self.status.contains(Status::C));
        let result = (self.target << 1) | carry;
        self.write_result(bus, result);
        self.test_carry(result);
        self.test_zero(result);
        self.test_negative(result);
    }

    fn op_ror(&mut self, bus: &mut impl Bus) {
        let carry = u16::from(self.status.contains(Status::C));
        let result = (self.target >> 1) | (carry << 7);
        self.write_result(bus, result);
        self.status.set_flag(Status::C, self.target & 0x01 != 0);
        self.test_zero(result);
        self.test_negative(result);
    }

    /// Z from `A AND operand`; N and V copied straight from operand bits
    /// 7 and 6.
    fn op_bit(&mut self) {
        let result = u16::from(self.a) & self.target;
        self.test_zero(result);
        let bits = (self.status.bits() & 0x3F) | ((self.target & 0x00C0) as u8);
        self.status = Status::from_bits_retain(bits);
    }

    fn op_compare(&mut self, register: u8) {
        let result = u16::from(register).wrapping_sub(self.target);
        let operand = (self.target & 0x00FF) as u8;
        self.status.set_flag(Status::C, register >= operand);
        self.status.set_flag(Status::Z, register == operand);
        self.test_negative(result);
    }

    fn op_inc(&mut self, bus: &mut impl Bus) {
        let result = self.target.wrapping_add(1);
        self.write_result(bus, result);
        self.test_zero(result);
        self.test_negative(result);
    }

    fn op_dec(&mut self, bus: &mut impl Bus) {
        let result = self.target.wrapping_sub(1);
        self.write_result(bus, result);
        self.test_zero(result);
        self.test_negative(result);
    }

    /// JSR stacks the address of its own last byte; RTS adds the 1 back.
    fn op_jsr(&mut self, bus: &mut impl Bus) {
        self.push_u16(bus, self.pc.wrapping_sub(1));
        self.pc = self.address;
    }

    /// BRK skips its padding byte, stacks PC and P with B set, masks IRQs,
    /// and enters through the IRQ/BRK vector.
    fn op_brk(&mut self, bus: &mut impl Bus) {
        self.pc = self.pc.wrapping_add(1);
        self.push_u16(bus, self.pc);
        let byte = self.status.to_pushed_byte(true);
        self.push(bus, byte);
        self.status.insert(Status::I);
        self.pc = bus.read_u16(vectors::IRQ);
    }

    fn op_rti(&mut self, bus: &mut impl Bus) {
        self.release_interrupt();
        let byte = self.pop(bus);
        self.status = Status::from_pulled_byte(byte);
        self.pc = self.pop_u16(bus);
    }

    // ---- Undocumented operations ----

    /// ALR: AND then LSR on the accumulator.
    fn op_alr(&mut self) {
        let anded = u16::from(self.a) & self.target;
        self.status.set_flag(Status::C, anded & 0x01 != 0);
        let result = anded >> 1;
        self.a = (result & 0x00FF) as u8;
        self.test_zero(result);
        self.test_negative(result);
    }

    /// ANC: AND, then copy N into C.
    fn op_anc(&mut self) {
        let result = u16::from(self.a) & self.target;
        self.a = (result & 0x00FF) as u8;
        self.test_zero(result);
        self.test_negative(result);
        let negative = self.status.contains(Status::N);
        self.status.set_flag(Status::C, negative);
    }

    /// ANE: `(A | magic) & X & operand`. Unstable; see [`MAGIC`].
    fn op_ane(&mut self) {
        let result = (u16::from(self.a | MAGIC) & u16::from(self.x)) & self.target;
        self.a = (result & 0x00FF) as u8;
        self.test_zero(result);
        self.test_negative(result);
    }

    /// ARR: AND then rotate right; C comes from bit 6 and V from
    /// bit 5 XOR bit 6 of the rotated result.
    fn op_arr(&mut self) {
        let carry = u16::from(self.status.contains(Status::C));
        let result = ((u16::from(self.a) & self.target) >> 1) | (carry << 7);
        self.a = (result & 0x00FF) as u8;

        let bit5 = (self.a >> 5) & 1;
        let bit6 = (self.a >> 6) & 1;
        self.status.set_flag(Status::C, bit6 != 0);
        self.status.set_flag(Status::V, bit5 ^ bit6 != 0);
        self.test_zero(result);
        self.test_negative(result);
    }

    /// DCP: decrement memory, then compare with A.
    fn op_dcp(&mut self, bus: &mut impl Bus) {
        let decremented = self.target.wrapping_sub(1);
        let compare = u16::from(self.a).wrapping_sub(decremented);
        bus.write(self.address, (decremented & 0x00FF) as u8);

        let operand = (decremented & 0x00FF) as u8;
        self.status.set_flag(Status::C, self.a >= operand);
        self.status.set_flag(Status::Z, self.a == operand);
        self.test_negative(compare);
    }

    /// ISC: increment memory, then subtract it from A.
    fn op_isc(&mut self, bus: &mut impl Bus) {
        self.target = self.target.wrapping_add(1) & 0x00FF;
        bus.write(self.address, self.target as u8);
        self.op_sbc();
    }

    /// LAS: fold the operand into A, X and S through the stack pointer.
    fn op_las(&mut self) {
        let result = (self.target & 0x00FF) as u8 & self.sp;
        self.a = result;
        self.x = result;
        self.sp = result;
        self.status.set_zn(result);
    }

    fn op_lax(&mut self) {
        self.a = (self.target & 0x00FF) as u8;
        self.x = self.a;
        self.test_zero(self.target);
        self.test_negative(self.target);
    }

    /// LXA: `(A | magic) & operand` into A and X. Unstable; see [`MAGIC`].
    fn op_lxa(&mut self) {
        let result = u16::from(self.a | MAGIC) & self.target;
        self.a = (result & 0x00FF) as u8;
        self.x = self.a;
        self.test_zero(result);
        self.test_negative(result);
    }

    /// RLA: ROL memory, then AND the rotated value into A.
    fn op_rla(&mut self, bus: &mut impl Bus) {
        let carry = u16::from(self.status.contains(Status::C));
        let rotated = (self.target << 1) | carry;
        bus.write(self.address, (rotated & 0x00FF) as u8);
        self.status.set_flag(Status::C, self.target & 0x80 != 0);
        self.target = rotated;
        self.op_and();
    }

    /// RRA: ROR memory, then ADC the rotated value (with the carry the
    /// rotate just shifted out).
    fn op_rra(&mut self, bus: &mut impl Bus) {
        let carry = u16::from(self.status.contains(Status::C));
        let rotated = (self.target >> 1) | (carry << 7);
        self.status.set_flag(Status::C, self.target & 0x01 != 0);
        bus.write(self.address, (rotated & 0x00FF) as u8);
        self.target = rotated;
        self.op_adc();
    }

    /// SBX: `(A & X) - operand` into X, carry as an unsigned compare.
    fn op_sbx(&mut self) {
        let anded = u16::from(self.a) & u16::from(self.x);
        let operand = (self.target & 0x00FF) as u8;
        self.status.set_flag(Status::C, (anded as u8) >= operand);
        let result = anded.wrapping_sub(self.target);
        self.x = (result & 0x00FF) as u8;
        self.test_negative(result);
        self.test_zero(result);
    }

    /// The unstable store family writes `value & (high(address) + 1)`.
    fn op_unstable_store(&mut self, bus: &mut impl Bus, value: u8) {
        let result = u16::from(value) & ((self.address >> 8) + 1);
        bus.write(self.address, (result & 0x00FF) as u8);
    }

    /// SLO: ASL memory, then OR the shifted value into A.
    fn op_slo(&mut self, bus: &mut impl Bus) {
        let mut result = self.target << 1;
        bus.write(self.address, (result & 0x00FF) as u8);
        self.test_carry(result);
        result |= u16::from(self.a);
        self.a = (result & 0x00FF) as u8;
        self.test_zero(result);
        self.test_negative(result);
    }

    /// SRE: LSR memory, then EOR the shifted value into A.
    fn op_sre(&mut self, bus: &mut impl Bus) {
        let mut result = self.target >> 1;
        self.status.set_flag(Status::C, self.target & 0x01 != 0);
        bus.write(self.address, (result & 0x00FF) as u8);
        result ^= u16::from(self.a);
        self.a = (result & 0x00FF) as u8;
        self.test_zero(result);
        self.test_negative(result);
    }

    /// JAM: latch the halt state. Only reset recovers.
    fn op_jam(&mut self) {
        self.jammed = true;
        log::warn!("JAM opcode {:#04X} halted the CPU at {:#06X}", self.opcode, self.pc);
    }
}
