use crate::opcode::Opcode;
use crate::operations::*;
use crate::state::State;

/// Executes the operation selected by an instruction word.
///
/// Dispatch is a pure function of the word's nibbles: the top nibble picks the
/// family, and families 0x0, 0x8, 0xE disambiguate on the low nibble(s) while
/// 0xF uses the low byte. A word matching no pattern executes as a no-op so
/// malformed or reserved encodings never abort a running program; the 2-byte
/// fetch advance is the only thing that happens to the machine.
pub fn execute(op: u16, state: &mut State) {
    match op.nibbles() {
        (0x0, 0x0, 0xE, 0x0) => clr(op, state),
        (0x0, 0x0, 0xE, 0xE) => rts(op, state),
        (0x1, ..) => jump(op, state),
        (0x2, ..) => call(op, state),
        (0x3, ..) => ske(op, state),
        (0x4, ..) => skne(op, state),
        (0x5, .., 0x0) => skre(op, state),
        (0x6, ..) => load(op, state),
        (0x7, ..) => add(op, state),
        (0x8, .., 0x0) => mv(op, state),
        (0x8, .., 0x1) => or(op, state),
        (0x8, .., 0x2) => and(op, state),
        (0x8, .., 0x3) => xor(op, state),
        (0x8, .., 0x4) => add_reg(op, state),
        (0x8, .., 0x5) => sub(op, state),
        (0x8, .., 0x6) => shr(op, state),
        (0x8, .., 0x7) => subn(op, state),
        (0x8, .., 0xE) => shl(op, state),
        (0x9, .., 0x0) => skrne(op, state),
        (0xA, ..) => loadi(op, state),
        (0xB, ..) => jumpi(op, state),
        (0xC, ..) => rand(op, state),
        (0xD, ..) => draw(op, state),
        (0xE, .., 0x9, 0xE) => skpr(op, state),
        (0xE, .., 0xA, 0x1) => skup(op, state),
        (0xF, .., 0x0, 0x7) => moved(op, state),
        (0xF, .., 0x0, 0xA) => keyd(op, state),
        (0xF, .., 0x1, 0x5) => loads(op, state),
        (0xF, .., 0x1, 0x8) => ld(op, state),
        (0xF, .., 0x1, 0xE) => addi(op, state),
        (0xF, .., 0x2, 0x9) => ldspr(op, state),
        (0xF, .., 0x3, 0x3) => bcd(op, state),
        (0xF, .., 0x5, 0x5) => stor(op, state),
        (0xF, .., 0x6, 0x5) => read(op, state),
        _ => {}
    }
}
