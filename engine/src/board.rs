use serde::Deserialize;

use crate::error::LayoutError;
use crate::piece::{Color, Piece, PieceKind};
use crate::square::{Square, COLS, ROWS};

/// 양 진영 맨 끝줄 배치 (왼쪽부터)
pub const BACK_RANK: [PieceKind; COLS] = [
    PieceKind::Rook,
    PieceKind::Jack,
    PieceKind::Guardian,
    PieceKind::Harpy,
    PieceKind::Sage,
    PieceKind::Wizard,
    PieceKind::Lion,
    PieceKind::Throne,
    PieceKind::King,
    PieceKind::Lion,
    PieceKind::Wizard,
    PieceKind::Sage,
    PieceKind::Harpy,
    PieceKind::Guardian,
    PieceKind::Jack,
    PieceKind::Rook,
];

/// 12x16 보드. 칸마다 기물이 최대 하나
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Piece>; ROWS * COLS],
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl Board {
    pub fn empty() -> Self {
        Self {
            cells: [None; ROWS * COLS],
        }
    }

    /// 초기 배치: 흑은 0~1행, 백은 10~11행
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for (col, kind) in BACK_RANK.iter().enumerate() {
            let col = col as i32;
            board.put(0, col, Piece::new(Color::Black, *kind));
            board.put(1, col, Piece::new(Color::Black, PieceKind::Pawn));
            board.put(10, col, Piece::new(Color::White, PieceKind::Pawn));
            board.put(11, col, Piece::new(Color::White, *kind));
        }
        board
    }

    fn put(&mut self, row: i32, col: i32, piece: Piece) {
        if let Some(sq) = Square::new(row, col) {
            self.set(sq, Some(piece));
        }
    }

    /// 기물 코드 배치에서 보드 생성
    pub fn from_layout(layout: &Layout) -> Result<Self, LayoutError> {
        let rows = &layout.0;
        if rows.len() != ROWS {
            return Err(LayoutError::RowCount {
                expected: ROWS,
                found: rows.len(),
            });
        }

        let mut board = Self::empty();
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != COLS {
                return Err(LayoutError::RowLength {
                    row,
                    expected: COLS,
                    found: cells.len(),
                });
            }
            for (col, code) in cells.iter().enumerate() {
                let code = code.trim();
                if code.is_empty() {
                    continue;
                }
                let piece = code
                    .parse::<Piece>()
                    .map_err(|source| LayoutError::Piece { row, col, source })?;
                board.put(row as i32, col as i32, piece);
            }
        }
        Ok(board)
    }

    pub fn get(&self, square: Square) -> Option<Piece> {
        self.cells[square.index()]
    }

    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.cells[square.index()] = piece;
    }

    pub fn is_empty_at(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// 해당 칸에 주어진 진영의 기물이 있는지
    pub fn is_color_at(&self, square: Square, color: Color) -> bool {
        self.get(square).map_or(false, |p| p.color == color)
    }

    /// 기물을 옮기고 원래 자리에 있던 기물을 돌려준다
    pub fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        let moving = self.cells[from.index()].take();
        std::mem::replace(&mut self.cells[to.index()], moving)
    }

    /// 보드 위의 모든 기물
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|p| (sq, p)))
    }

    /// 현재 배치를 코드 배치로
    pub fn to_layout(&self) -> Layout {
        let rows = (0..ROWS as i32)
            .map(|row| {
                (0..COLS as i32)
                    .map(|col| {
                        Square::new(row, col)
                            .and_then(|sq| self.get(sq))
                            .map(|p| p.to_string())
                            .unwrap_or_default()
                    })
                    .collect()
            })
            .collect();
        Layout(rows)
    }
}

/// 기물 코드 배치 ("" = 빈 칸). 0행이 맨 위
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Layout(pub Vec<Vec<String>>);

impl Default for Layout {
    fn default() -> Self {
        Board::standard().to_layout()
    }
}
