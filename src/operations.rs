use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH, GLYPH_SIZE, KEY_COUNT};
use crate::error::Chip8Error;
use crate::opcode::Opcode;
use crate::state::State;

// Every operation runs after the pc has been moved past its own opcode, so "skip" means
// one more += 2 and jumps overwrite the pc outright.

/// clear
pub fn clr(_op: &dyn Opcode, state: &mut State) -> Result<(), Chip8Error> {
    state.frame_buffer = [[0; DISPLAY_WIDTH]; DISPLAY_HEIGHT];
    state.draw_flag = true;
    Ok(())
}

/// PC = STACK.pop()
pub fn rts(_op: &dyn Opcode, state: &mut State) -> Result<(), Chip8Error> {
    state.pc = state.pop()?;
    Ok(())
}

/// PC = nnn
pub fn jump(op: &dyn Opcode, state: &mut State) -> Result<(), Chip8Error> {
    state.pc = op.nnn();
    Ok(())
}

/// STACK.push(PC); PC = nnn
pub fn call(op: &dyn Opcode, state: &mut State) -> Result<(), Chip8Error> {
    state.push()?;
    state.pc = op.nnn();
    Ok(())
}

fn skip_if(state: &mut State, condition: bool) {
    if condition {
        state.pc += 0x2;
    }
}

/// if Vx == nn then pc += 2
pub fn ske(op: &dyn Opcode, state: &mut State) -> Result<(), Chip8Error> {
    let condition = state.v[op.x() as usize] == op.nn();
    skip_if(state, condition);
    Ok(())
}

/// if Vx != nn then pc += 2
pub fn skne(op: &dyn Opcode, state: &mut State) -> Result<(), Chip8Error> {
    let condition = state.v[op.x() as usize] != op.nn();
    skip_if(state, condition);
    Ok(())
}

/// if Vx == Vy then pc += 2
pub fn skre(op: &dyn Opcode, state: &mut State) -> Result<(), Chip8Error> {
    let condition = state.v[op.x() as usize] == state.v[op.y() as usize];
    skip_if(state, condition);
    Ok(())
}

/// Vx = nn
pub fn load(op: &dyn Opcode, state: &mut State) -> Result<(), Chip8Error> {
    state.v[op.x() as usize] = op.nn();
    Ok(())
}

/// Vx += nn
/// Overflow wraps and VF is left alone
pub fn add(op: &dyn Opcode, state: &mut State) -> Result<(), Chip8Error> {
    let x = op.x() as usize;
    state.v[x] = state.v[x].wrapping_add(op.nn());
    Ok(())
}

/// Vx = Vy
pub fn mv(op: &dyn Opcode, state: &mut State) -> Result<(), Chip8Error> {
    state.v[op.x() as usize] = state.v[op.y() as usize];
    Ok(())
}

/// Vx |= Vy
pub fn or(op: &dyn Opcode, state: &mut State) -> Result<(), Chip8Error> {
    state.v[op.x() as usize] |= state.v[op.y() as usize];
    Ok(())
}

/// Vx &= Vy
pub fn and(op: &dyn Opcode, state: &mut State) -> Result<(), Chip8Error> {
    state.v[op.x() as usize] &= state.v[op.y() as usize];
    Ok(())
}

/// Vx ^= Vy
pub fn xor(op: &dyn Opcode, state: &mut State) -> Result<(), Chip8Error> {
    state.v[op.x() as usize] ^= state.v[op.y() as usize];
    Ok(())
}

// VF is written before Vx, so with x = 0xF the result overwrites the flag.

/// Vx += Vy; VF = overflow
pub fn addr(op: &dyn Opcode, state: &mut State) -> Result<(), Chip8Error> {
    let (x, y) = (op.x() as usize, op.y() as usize);
    let (res, over) = state.v[x].overflowing_add(state.v[y]);
    state.v[0xF] = over as u8;
    state.v[x] = res;
    Ok(())
}

/// Vx -= Vy; VF = Vx > Vy
pub fn sub(op: &dyn Opcode, state: &mut State) -> Result<(), Chip8Error> {
    let (x, y) = (op.x() as usize, op.y() as usize);
    let no_borrow = state.v[x] > state.v[y];
    let res = state.v[x].wrapping_sub(state.v[y]);
    state.v[0xF] = no_borrow as u8;
    state.v[x] = res;
    Ok(())
}

/// Vx >>= 1; VF = old lsb
pub fn shr(op: &dyn Opcode, state: &mut State) -> Result<(), Chip8Error> {
    let x = op.x() as usize;
    let vx = state.v[x];
    state.v[0xF] = vx & 0x1;
    state.v[x] = vx >> 1;
    Ok(())
}

/// Vx = Vy - Vx; VF = Vy > Vx
pub fn subn(op: &dyn Opcode, state: &mut State) -> Result<(), Chip8Error> {
    let (x, y) = (op.x() as usize, op.y() as usize);
    let no_borrow = state.v[y] > state.v[x];
    let res = state.v[y].wrapping_sub(state.v[x]);
    state.v[0xF] = no_borrow as u8;
    state.v[x] = res;
    Ok(())
}

/// Vx <<= 1; VF = old msb
pub fn shl(op: &dyn Opcode, state: &mut State) -> Result<(), Chip8Error> {
    let x = op.x() as usize;
    let vx = state.v[x];
    state.v[0xF] = vx >> 7;
    state.v[x] = vx << 1;
    Ok(())
}

/// if Vx != Vy then pc += 2
pub fn skrne(op: &dyn Opcode, state: &mut State) -> Result<(), Chip8Error> {
    let condition = state.v[op.x() as usize] != state.v[op.y() as usize];
    skip_if(state, condition);
    Ok(())
}

/// I = nnn
pub fn loadi(op: &dyn Opcode, state: &mut State) -> Result<(), Chip8Error> {
    state.i = op.nnn();
    Ok(())
}

/// PC = V0 + nnn
pub fn jumpi(op: &dyn Opcode, state: &mut State) -> Result<(), Chip8Error> {
    state.pc = u16::from(state.v[0x0]) + op.nnn();
    Ok(())
}

/// Vx = rand_byte & nn
pub fn rand(op: &dyn Opcode, state: &mut State) -> Result<(), Chip8Error> {
    let rand_byte = state.random_byte();
    state.v[op.x() as usize] = rand_byte & op.nn();
    Ok(())
}

/// draw_sprite(x=Vx y=Vy size=n)
/// XORs a sprite from memory I..I+n at position x, y on the FrameBuffer, wrapping at the
/// screen edges. Sets VF if any set pixel gets erased.
pub fn draw(op: &dyn Opcode, state: &mut State) -> Result<(), Chip8Error> {
    let origin_x = state.v[op.x() as usize] as usize;
    let origin_y = state.v[op.y() as usize] as usize;
    let mut collision = 0x0;

    for row in 0..op.n() {
        let sprite_byte = state.read(state.i.wrapping_add(u16::from(row)));
        let y = (origin_y + row as usize) % DISPLAY_HEIGHT;
        for bit in 0..8 {
            let x = (origin_x + bit) % DISPLAY_WIDTH;
            let pixel = (sprite_byte >> (7 - bit)) & 0x1;
            collision |= pixel & state.frame_buffer[y][x];
            state.frame_buffer[y][x] ^= pixel;
        }
    }

    state.v[0xF] = collision;
    state.draw_flag = true;
    Ok(())
}

/// if Vx.pressed then pc += 2
pub fn skpr(op: &dyn Opcode, state: &mut State) -> Result<(), Chip8Error> {
    let condition = state.is_pressed(state.v[op.x() as usize]);
    skip_if(state, condition);
    Ok(())
}

/// if !Vx.pressed then pc += 2
pub fn skup(op: &dyn Opcode, state: &mut State) -> Result<(), Chip8Error> {
    let condition = !state.is_pressed(state.v[op.x() as usize]);
    skip_if(state, condition);
    Ok(())
}

/// Vx = DT
pub fn moved(op: &dyn Opcode, state: &mut State) -> Result<(), Chip8Error> {
    state.v[op.x() as usize] = state.delay_timer;
    Ok(())
}

/// Vx = first pressed key
/// Rewinds the pc while nothing is pressed so the same opcode runs again next cycle.
pub fn keyd(op: &dyn Opcode, state: &mut State) -> Result<(), Chip8Error> {
    match (0..KEY_COUNT as u8).find(|&key| state.is_pressed(key)) {
        Some(key) => state.v[op.x() as usize] = key,
        None => state.pc -= 0x2,
    }
    Ok(())
}

/// DT = Vx
pub fn loads(op: &dyn Opcode, state: &mut State) -> Result<(), Chip8Error> {
    state.delay_timer = state.v[op.x() as usize];
    Ok(())
}

/// ST = Vx
pub fn ld(op: &dyn Opcode, state: &mut State) -> Result<(), Chip8Error> {
    state.sound_timer = state.v[op.x() as usize];
    Ok(())
}

/// I += Vx; VF = I + Vx > 0xFFF
pub fn addi(op: &dyn Opcode, state: &mut State) -> Result<(), Chip8Error> {
    let vx = u16::from(state.v[op.x() as usize]);
    let overflow = u32::from(state.i) + u32::from(vx) > 0xFFF;
    state.i = state.i.wrapping_add(vx);
    state.v[0xF] = overflow as u8;
    Ok(())
}

/// I = Vx * 5
/// Points I at the sprite sheet glyph for Vx; values above 0xF land past the sheet
pub fn ldspr(op: &dyn Opcode, state: &mut State) -> Result<(), Chip8Error> {
    state.i = u16::from(state.v[op.x() as usize]) * GLYPH_SIZE;
    Ok(())
}

/// mem[I..I+3] = bcd(Vx)
pub fn bcd(op: &dyn Opcode, state: &mut State) -> Result<(), Chip8Error> {
    let vx = state.v[op.x() as usize];
    let digits = [vx / 100, vx / 10 % 10, vx % 10];
    for (offset, digit) in (0u16..).zip(digits) {
        let addr = state.i.wrapping_add(offset);
        state.write(addr, digit);
    }
    Ok(())
}

/// mem[I..=I+x] = V0..=Vx; I = x + 1
pub fn stor(op: &dyn Opcode, state: &mut State) -> Result<(), Chip8Error> {
    for reg in 0..=op.x() {
        let (addr, value) = (state.i.wrapping_add(u16::from(reg)), state.v[reg as usize]);
        state.write(addr, value);
    }
    state.i = u16::from(op.x()) + 1;
    Ok(())
}

/// V0..=Vx = mem[I..=I+x]; I = x + 1
pub fn read(op: &dyn Opcode, state: &mut State) -> Result<(), Chip8Error> {
    for reg in 0..=op.x() {
        state.v[reg as usize] = state.read(state.i.wrapping_add(u16::from(reg)));
    }
    state.i = u16::from(op.x()) + 1;
    Ok(())
}
