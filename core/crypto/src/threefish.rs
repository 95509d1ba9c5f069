//! Threefish-256 block cipher.
//!
//! Threefish is the tweakable block cipher at the core of the Skein hash
//! function. Only the 256-bit variant with an all-zero tweak is needed
//! here: it is used as a keyed mixing function, mapping a 256-bit block
//! to a 256-bit block under a 256-bit key.
//!
//! # Reference
//!
//! Ferguson et al., "The Skein Hash Function Family", version 1.3.
//! Output must match the published Threefish-256 vectors bit for bit.

/// A 256-bit block (or key) as four 64-bit words.
pub type Block64 = [u64; 4];

/// A 256-bit block as eight 32-bit words, high half of each 64-bit word first.
pub type Block32 = [u32; 8];

/// Key schedule parity constant (C240 in the Skein specification).
pub const KEY_SCHEDULE_PARITY: u64 = 0x1BD1_1BDA_A9FC_1A22;

/// Total number of mixing rounds.
pub const ROUNDS: usize = 72;

/// Words in the cipher state.
const STATE_WORDS: usize = 4;

/// Words in the extended key schedule (key words plus parity).
const SCHEDULE_WORDS: usize = STATE_WORDS + 1;

/// Rounds between two subkey injections.
const ROUNDS_PER_INJECTION: usize = 4;

/// Rotation amounts for each round within a group of eight.
const ROTATIONS: [[u32; 2]; 8] = [
    [14, 16],
    [52, 57],
    [23, 40],
    [5, 37],
    [25, 33],
    [46, 12],
    [58, 22],
    [32, 32],
];

/// Encrypt one block under `key`, returning the raw 64-bit words.
pub fn encrypt_block64(key: &Block64, block: &Block64) -> Block64 {
    let ks = key_schedule(key);

    let mut x = [0u64; STATE_WORDS];
    for (i, word) in x.iter_mut().enumerate() {
        *word = block[i].wrapping_add(ks[i]);
    }

    for group in 0..ROUNDS / (2 * ROUNDS_PER_INJECTION) {
        for half in 0..2 {
            for round in 0..ROUNDS_PER_INJECTION {
                let [ra, rb] = ROTATIONS[half * ROUNDS_PER_INJECTION + round];
                // Odd rounds combine (0,3) and (2,1): the word permutation.
                if round % 2 == 0 {
                    (x[0], x[1]) = mix(x[0], x[1], ra);
                    (x[2], x[3]) = mix(x[2], x[3], rb);
                } else {
                    (x[0], x[3]) = mix(x[0], x[3], ra);
                    (x[2], x[1]) = mix(x[2], x[1], rb);
                }
            }
            inject(&mut x, &ks, 2 * group + half + 1);
        }
    }

    x
}

/// Encrypt one block under `key`, splitting each output word into two 32-bit halves.
pub fn encrypt_block32(key: &Block64, block: &Block64) -> Block32 {
    let x = encrypt_block64(key, block);

    let mut out = [0u32; 8];
    for (i, word) in x.iter().enumerate() {
        out[2 * i] = (word >> 32) as u32;
        out[2 * i + 1] = *word as u32;
    }
    out
}

fn key_schedule(key: &Block64) -> [u64; SCHEDULE_WORDS] {
    let parity = key.iter().fold(KEY_SCHEDULE_PARITY, |acc, w| acc ^ w);
    [key[0], key[1], key[2], key[3], parity]
}

#[inline(always)]
fn mix(a: u64, b: u64, rotation: u32) -> (u64, u64) {
    let a = a.wrapping_add(b);
    (a, b.rotate_left(rotation) ^ a)
}

/// Add subkey number `s` to the state. The tweak is zero, so only the
/// key words and the injection counter contribute.
#[inline(always)]
fn inject(x: &mut Block64, ks: &[u64; SCHEDULE_WORDS], s: usize) {
    for (i, word) in x.iter_mut().enumerate() {
        *word = word.wrapping_add(ks[(s + i) % SCHEDULE_WORDS]);
    }
    x[3] = x[3].wrapping_add(s as u64);
}
