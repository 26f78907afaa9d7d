//! Fixed binary save format.
//!
//! Layout, all fields little-endian 32-bit integers:
//!
//! ```text
//! seed, board_size,
//! piece_count, piece_count x { team, x, y },
//! host_count,  host_count  x { team, x, y }
//! ```
//!
//! Loading decodes and validates the entire stream before touching the
//! board, so a malformed or truncated save leaves the board cleared,
//! never partially populated.

use crate::board::Board;
use crate::core::{BoardSize, Position, Team};
use rustc_hash::FxHashSet;
use std::io::{self, Read, Write};
use thiserror::Error;

/// Decoding failure for a board save stream.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("save stream i/o failed: {0}")]
    Io(#[from] io::Error),

    #[error("unrecognized board size {0}")]
    BadBoardSize(i32),

    #[error("unrecognized team code {0}")]
    BadTeam(i32),

    #[error("element count {0} is impossible for the board")]
    BadCount(i32),

    #[error("element at {0} is outside a {1}x{1} board")]
    OutOfRange(Position, i32),

    #[error("two elements share the cell {0} on one layer")]
    DuplicateCell(Position),
}

fn write_i32(writer: &mut impl Write, value: i32) -> io::Result<()> {
    writer.write_all(&value.to_le_bytes())
}

fn read_i32(reader: &mut impl Read) -> io::Result<i32> {
    let mut buf = [0u8; 4];
    reader.read_exact(&mut buf)?;
    Ok(i32::from_le_bytes(buf))
}

/// Fully-decoded, validated save contents.
struct SaveData {
    seed: i32,
    size: BoardSize,
    pieces: Vec<(Team, Position)>,
    hosts: Vec<(Team, Position)>,
}

impl SaveData {
    fn decode(reader: &mut impl Read) -> Result<Self, SaveError> {
        let seed = read_i32(reader)?;
        let raw_size = read_i32(reader)?;
        let size = BoardSize::try_from(raw_size).map_err(SaveError::BadBoardSize)?;

        let pieces = Self::decode_layer(reader, size)?;
        let hosts = Self::decode_layer(reader, size)?;

        Ok(Self { seed, size, pieces, hosts })
    }

    fn decode_layer(
        reader: &mut impl Read,
        size: BoardSize,
    ) -> Result<Vec<(Team, Position)>, SaveError> {
        // A layer holds at most one element per cell; reject a hostile
        // count before trusting it as an allocation size.
        let count = read_i32(reader)?;
        if count < 0 || count > size.side() * size.side() {
            return Err(SaveError::BadCount(count));
        }

        let mut elements = Vec::with_capacity(count as usize);
        let mut occupied: FxHashSet<Position> = FxHashSet::default();
        for _ in 0..count {
            let team = read_i32(reader)?;
            let team = Team::from_code(team).ok_or(SaveError::BadTeam(team))?;
            let pos = Position::new(read_i32(reader)?, read_i32(reader)?);
            if pos.x < 0 || pos.y < 0 || pos.x >= size.side() || pos.y >= size.side() {
                return Err(SaveError::OutOfRange(pos, size.side()));
            }
            if !occupied.insert(pos) {
                return Err(SaveError::DuplicateCell(pos));
            }
            elements.push((team, pos));
        }
        Ok(elements)
    }
}

impl Board {
    /// Serialize the board in the fixed binary layout.
    ///
    /// Elements are written in board scan order.
    pub fn to_stream(&self, writer: &mut impl Write) -> io::Result<()> {
        write_i32(writer, self.seed)?;
        write_i32(writer, self.size.side())?;

        let pieces: Vec<_> = self.all_pieces().collect();
        write_i32(writer, pieces.len() as i32)?;
        for (pos, team) in pieces {
            write_i32(writer, team.code())?;
            write_i32(writer, pos.x)?;
            write_i32(writer, pos.y)?;
        }

        let hosts: Vec<_> = self.all_hosts().collect();
        write_i32(writer, hosts.len() as i32)?;
        for (pos, team) in hosts {
            write_i32(writer, team.code())?;
            write_i32(writer, pos.x)?;
            write_i32(writer, pos.y)?;
        }

        Ok(())
    }

    /// Replace this board's contents with a serialized save.
    ///
    /// The board is cleared first. On any decoding error it stays cleared.
    pub fn from_stream(&mut self, reader: &mut impl Read) -> Result<(), SaveError> {
        self.clear();

        let data = SaveData::decode(reader)?;

        self.seed = data.seed;
        if self.size != data.size {
            self.reallocate(data.size);
        }
        for (team, pos) in data.pieces {
            self.add_element(false, pos, team);
        }
        for (team, pos) in data.hosts {
            self.add_element(true, pos, team);
        }
        Ok(())
    }
}
