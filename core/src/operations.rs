//! One function per instruction. The cycle driver has already advanced the
//! program counter past the instruction word before any of these run, so skip
//! instructions add a further 2, jumps overwrite the counter, and the key-wait
//! rewinds it by 2 to re-execute itself.

use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH, FONT_BASE, FONT_GLYPH_SIZE};
use crate::opcode::Opcode;
use crate::state::State;

/// clear the frame buffer
pub fn clr(_op: u16, state: &mut State) {
    state.frame_buffer = [[0; DISPLAY_WIDTH]; DISPLAY_HEIGHT];
    state.draw_flag = true;
}

/// PC = STACK.pop()
pub fn rts(_op: u16, state: &mut State) {
    state.sp -= 1;
    state.pc = state.stack[state.sp as usize];
}

/// PC = addr
pub fn jump(op: u16, state: &mut State) {
    state.pc = op.addr();
}

/// STACK.push(PC); PC = addr
///
/// The pushed PC already points past the CALL, so a later RTS resumes at the
/// following instruction.
pub fn call(op: u16, state: &mut State) {
    state.stack[state.sp as usize] = state.pc;
    state.sp += 1;
    state.pc = op.addr();
}

/// if Vx == kk then skip
pub fn ske(op: u16, state: &mut State) {
    if state.v[op.x() as usize] == op.kk() {
        state.pc += 0x2;
    }
}

/// if Vx != kk then skip
pub fn skne(op: u16, state: &mut State) {
    if state.v[op.x() as usize] != op.kk() {
        state.pc += 0x2;
    }
}

/// if Vx == Vy then skip
pub fn skre(op: u16, state: &mut State) {
    if state.v[op.x() as usize] == state.v[op.y() as usize] {
        state.pc += 0x2;
    }
}

/// Vx = kk
pub fn load(op: u16, state: &mut State) {
    state.v[op.x() as usize] = op.kk();
}

/// Vx += kk
/// Overflow is implicitly dropped; no flag is set.
pub fn add(op: u16, state: &mut State) {
    let x = op.x() as usize;
    state.v[x] = state.v[x].wrapping_add(op.kk());
}

/// Vx = Vy
pub fn mv(op: u16, state: &mut State) {
    state.v[op.x() as usize] = state.v[op.y() as usize];
}

/// Vx |= Vy
pub fn or(op: u16, state: &mut State) {
    state.v[op.x() as usize] |= state.v[op.y() as usize];
}

/// Vx &= Vy
pub fn and(op: u16, state: &mut State) {
    state.v[op.x() as usize] &= state.v[op.y() as usize];
}

/// Vx ^= Vy
pub fn xor(op: u16, state: &mut State) {
    state.v[op.x() as usize] ^= state.v[op.y() as usize];
}

/// Vx += Vy; VF = carry
/// VF is written after the result, so it survives when x is 0xF.
pub fn add_reg(op: u16, state: &mut State) {
    let x = op.x() as usize;
    let (res, carry) = state.v[x].overflowing_add(state.v[op.y() as usize]);
    state.v[x] = res;
    state.v[0xF] = carry as u8;
}

/// VF = (Vx > Vy); Vx -= Vy
/// The comparison is strict: equal operands clear VF.
pub fn sub(op: u16, state: &mut State) {
    let x = op.x() as usize;
    let (vx, vy) = (state.v[x], state.v[op.y() as usize]);
    state.v[0xF] = (vx > vy) as u8;
    state.v[x] = vx.wrapping_sub(vy);
}

/// VF = Vx & 1; Vx >>= 1
pub fn shr(op: u16, state: &mut State) {
    let x = op.x() as usize;
    let vx = state.v[x];
    state.v[0xF] = vx & 0x1;
    state.v[x] = vx >> 1;
}

/// VF = (Vx < Vy); Vx = Vy - Vx
pub fn subn(op: u16, state: &mut State) {
    let x = op.x() as usize;
    let (vx, vy) = (state.v[x], state.v[op.y() as usize]);
    state.v[0xF] = (vx < vy) as u8;
    state.v[x] = vy.wrapping_sub(vx);
}

/// VF = Vx >> 7; Vx <<= 1
pub fn shl(op: u16, state: &mut State) {
    let x = op.x() as usize;
    let vx = state.v[x];
    state.v[0xF] = vx >> 7;
    state.v[x] = vx << 1;
}

/// if Vx != Vy then skip
pub fn skrne(op: u16, state: &mut State) {
    if state.v[op.x() as usize] != state.v[op.y() as usize] {
        state.pc += 0x2;
    }
}

/// I = addr
pub fn loadi(op: u16, state: &mut State) {
    state.i = op.addr();
}

/// PC = V0 + addr
pub fn jumpi(op: u16, state: &mut State) {
    state.pc = u16::from(state.v[0x0]) + op.addr();
}

/// Vx = random byte & kk
pub fn rand(op: u16, state: &mut State) {
    state.v[op.x() as usize] = rand::random::<u8>() & op.kk();
}

/// draw_sprite(x=Vx, y=Vy, rows=n)
///
/// XORs an n-row sprite from memory at I onto the frame buffer. Only the
/// starting position wraps (x mod 64, y mod 32); sprite rows and columns
/// extending past the screen edge are clipped rather than wrapped per-pixel.
/// VF accumulates a collision bit across every pixel drawn: 1 if any lit
/// pixel was turned off.
pub fn draw(op: u16, state: &mut State) {
    let x0 = state.v[op.x() as usize] as usize % DISPLAY_WIDTH;
    let y0 = state.v[op.y() as usize] as usize % DISPLAY_HEIGHT;

    state.v[0xF] = 0x0;

    for row in 0..op.n() as usize {
        let y = y0 + row;
        if y >= DISPLAY_HEIGHT {
            break;
        }
        let sprite_row = state.memory[state.i as usize + row];
        for bit in 0..8 {
            let x = x0 + bit;
            if x >= DISPLAY_WIDTH {
                break;
            }
            let pixel = (sprite_row >> (7 - bit)) & 1;
            state.v[0xF] |= pixel & state.frame_buffer[y][x];
            state.frame_buffer[y][x] ^= pixel;
        }
    }

    state.draw_flag = true;
}

/// if key[Vx] pressed then skip
pub fn skpr(op: u16, state: &mut State) {
    if state.keys[state.v[op.x() as usize] as usize] {
        state.pc += 0x2;
    }
}

/// if key[Vx] not pressed then skip
pub fn skup(op: u16, state: &mut State) {
    if !state.keys[state.v[op.x() as usize] as usize] {
        state.pc += 0x2;
    }
}

/// Vx = DT
pub fn moved(op: u16, state: &mut State) {
    state.v[op.x() as usize] = state.delay_timer;
}

/// await keypress into Vx
///
/// Cooperative busy-wait: while no key is down the PC is rewound by 2 so the
/// same instruction re-executes next cycle. The lowest pressed key wins ties.
pub fn keyd(op: u16, state: &mut State) {
    match state.keys.iter().position(|&pressed| pressed) {
        Some(key) => state.v[op.x() as usize] = key as u8,
        None => state.pc -= 0x2,
    }
}

/// DT = Vx
pub fn loads(op: u16, state: &mut State) {
    state.delay_timer = state.v[op.x() as usize];
}

/// ST = Vx
pub fn ld(op: u16, state: &mut State) {
    state.sound_timer = state.v[op.x() as usize];
}

/// I += Vx
/// No flag is set and I is not masked to 12 bits; a later memory access
/// through an out-of-range I panics at the state layer.
pub fn addi(op: u16, state: &mut State) {
    state.i = state.i.wrapping_add(u16::from(state.v[op.x() as usize]));
}

/// I = font address of the glyph for Vx
/// Undefined for Vx > 0xF; the font table only has 16 glyphs.
pub fn ldspr(op: u16, state: &mut State) {
    state.i = FONT_BASE + FONT_GLYPH_SIZE * u16::from(state.v[op.x() as usize]);
}

/// mem[I..I+3] = bcd(Vx)
/// Hundreds, tens, units digits at I, I+1, I+2.
pub fn bcd(op: u16, state: &mut State) {
    let vx = state.v[op.x() as usize];
    let digits = [vx / 100 % 10, vx / 10 % 10, vx % 10];
    let i = state.i as usize;
    state.memory[i..i + 3].copy_from_slice(&digits);
}

/// mem[I..=I+x] = V0..=Vx
pub fn stor(op: u16, state: &mut State) {
    let x = op.x() as usize;
    let i = state.i as usize;
    state.memory[i..=i + x].copy_from_slice(&state.v[0..=x]);
}

/// V0..=Vx = mem[I..=I+x]
pub fn read(op: u16, state: &mut State) {
    let x = op.x() as usize;
    let i = state.i as usize;
    state.v[0..=x].copy_from_slice(&state.memory[i..=i + x]);
}
