//! Seven segment table for the large clock digits.
//!
//! ```text
//!          A
//!    FA .-----. AB
//!       |     |
//!     F |     | B
//!       |  G  |
//!    EF >-----< BC
//!       |     |
//!     E |     | C
//!       |     |
//!       '-----'
//!    DE    D    CD
//! ```
//!
//! Bits 0-6 select the lit segments. Bits 8-13 mark segment intersections
//! that are drawn curved instead of square; a corner flag is only set where at
//! least two lit segments meet. The serif on the digit 1 is not encoded here.

pub const A: u16 = 1 << 0;
pub const B: u16 = 1 << 1;
pub const C: u16 = 1 << 2;
pub const D: u16 = 1 << 3;
pub const E: u16 = 1 << 4;
pub const F: u16 = 1 << 5;
pub const G: u16 = 1 << 6;

pub const AB: u16 = 1 << 8;
pub const BC: u16 = 1 << 9;
pub const CD: u16 = 1 << 10;
pub const DE: u16 = 1 << 11;
pub const EF: u16 = 1 << 12;
pub const FA: u16 = 1 << 13;

/// Segment and corner bits for the hex digits 0x0-0xF.
pub const DIGIT_TABLE: [u16; 16] = [
    A | B | C | D | E | F | AB | CD | DE | FA,
    B | C,
    A | B | G | E | D | AB | BC | EF | DE,
    A | B | C | D | G | AB | BC | CD,
    F | G | B | C | EF,
    A | F | G | C | D | BC | CD,
    A | F | G | C | D | E | BC | CD | DE | FA,
    A | B | C,
    A | B | C | D | E | F | G | AB | BC | CD | DE | EF | FA,
    A | B | C | D | F | G | AB | CD | EF | FA,
    A | B | C | E | F | G | AB | FA,
    A | B | C | D | E | F | G | AB | BC | CD,
    A | F | E | D | FA | DE,
    A | B | C | D | E | F | AB | CD,
    A | F | G | E | D,
    A | F | G | E,
];

/// `digits.bin`: the table as little endian u16 values.
pub fn digit_table_bytes() -> Vec<u8> {
    DIGIT_TABLE.iter().flat_map(|d| d.to_le_bytes()).collect()
}

/// Decoded view of one table entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Digit(u16);

impl Digit {
    /// Entry for the low nibble of `v`.
    pub fn get(v: u8) -> Self {
        Self(DIGIT_TABLE[(v & 0xF) as usize])
    }

    /// Entry for an ASCII hex digit; anything else maps to zero.
    pub fn from_ascii(ch: char) -> Self {
        Self::get(ch.to_digit(16).map_or(0, |d| d as u8))
    }

    pub fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    pub fn bits(self) -> u16 {
        self.0
    }

    fn has(self, mask: u16) -> bool {
        self.0 & mask != 0
    }

    pub fn draw_a(self) -> bool {
        self.has(A)
    }

    pub fn draw_b(self) -> bool {
        self.has(B)
    }

    pub fn draw_c(self) -> bool {
        self.has(C)
    }

    pub fn draw_d(self) -> bool {
        self.has(D)
    }

    pub fn draw_e(self) -> bool {
        self.has(E)
    }

    pub fn draw_f(self) -> bool {
        self.has(F)
    }

    pub fn draw_g(self) -> bool {
        self.has(G)
    }

    pub fn curve_ab(self) -> bool {
        self.has(AB)
    }

    pub fn curve_bc(self) -> bool {
        self.has(BC)
    }

    pub fn curve_cd(self) -> bool {
        self.has(CD)
    }

    pub fn curve_de(self) -> bool {
        self.has(DE)
    }

    pub fn curve_ef(self) -> bool {
        self.has(EF)
    }

    pub fn curve_fa(self) -> bool {
        self.has(FA)
    }

    /// The 1 gets a serif that the table does not describe.
    pub fn is_one(self) -> bool {
        self.0 == B | C
    }
}
