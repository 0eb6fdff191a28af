// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Row/column tracking as a plain value carried next to the scan cursor.

/// 1-based line and column of a byte. The newline byte itself belongs to
/// the line it ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Default for Position {
    fn default() -> Self {
        Self::start()
    }
}

impl Position {
    pub const fn start() -> Self {
        Self { row: 1, column: 1 }
    }

    /// Position of the byte after `byte`.
    #[inline]
    pub fn advance(self, byte: u8) -> Self {
        if byte == b'\n' {
            Self {
                row: self.row + 1,
                column: 1,
            }
        } else {
            Self {
                row: self.row,
                column: self.column + 1,
            }
        }
    }

    /// Position after every byte of `bytes`.
    pub fn advance_over(self, bytes: &[u8]) -> Self {
        match bytes.iter().rposition(|&b| b == b'\n') {
            Some(last) => Self {
                row: self.row + bytes.iter().filter(|&&b| b == b'\n').count(),
                column: bytes.len() - last,
            },
            None => Self {
                row: self.row,
                column: self.column + bytes.len(),
            },
        }
    }

    /// Position of `buffer[offset]`.
    pub fn at(buffer: &[u8], offset: usize) -> Self {
        Self::start().advance_over(&buffer[..offset.min(buffer.len())])
    }
}
