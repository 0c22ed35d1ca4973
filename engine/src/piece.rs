use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::ParsePieceError;

/// 진영 (백이 먼저 둔다)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opponent(&self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// 전진 방향의 row 증분 (백은 위로, 흑은 아래로)
    pub fn forward(&self) -> i32 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    pub fn letter(&self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }

    pub fn from_letter(c: char) -> Option<Color> {
        match c {
            'w' => Some(Color::White),
            'b' => Some(Color::Black),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Black => "Black",
        }
    }
}

/// 기물 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PieceKind {
    Pawn,
    Jack,
    Guardian,
    Harpy,
    Sage,
    Wizard,
    Lion,
    Throne,
    King,
    Rook,
    Castle,
}

impl PieceKind {
    pub const ALL: [PieceKind; 11] = [
        PieceKind::Pawn,
        PieceKind::Jack,
        PieceKind::Guardian,
        PieceKind::Harpy,
        PieceKind::Sage,
        PieceKind::Wizard,
        PieceKind::Lion,
        PieceKind::Throne,
        PieceKind::King,
        PieceKind::Rook,
        PieceKind::Castle,
    ];

    pub fn letter(&self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Jack => 'J',
            PieceKind::Guardian => 'G',
            PieceKind::Harpy => 'H',
            PieceKind::Sage => 'S',
            PieceKind::Wizard => 'W',
            PieceKind::Lion => 'L',
            PieceKind::Throne => 'T',
            PieceKind::King => 'K',
            PieceKind::Rook => 'R',
            PieceKind::Castle => 'C',
        }
    }

    pub fn from_letter(c: char) -> Option<PieceKind> {
        PieceKind::ALL.iter().copied().find(|k| k.letter() == c)
    }

    /// 행마법이 정의된 기물인지. 나머지는 아직 이동 규칙이 없다.
    pub fn has_movement_rules(&self) -> bool {
        matches!(self, PieceKind::Pawn | PieceKind::Jack | PieceKind::Wizard)
    }
}

/// 보드 위의 기물 (진영 + 종류)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// 화면 표시용 문자
    pub fn glyph(&self) -> &'static str {
        match (self.color, self.kind) {
            (Color::White, PieceKind::Pawn) => "♙",
            (Color::White, PieceKind::Jack) => "♘",
            (Color::White, PieceKind::Guardian) => "♗",
            (Color::White, PieceKind::Rook) => "♖",
            // 성(Castle)은 룩과 반대 색 문자를 쓴다
            (Color::White, PieceKind::Castle) => "♜",
            (Color::White, PieceKind::King) => "♔",
            (Color::Black, PieceKind::Pawn) => "♟",
            (Color::Black, PieceKind::Jack) => "♞",
            (Color::Black, PieceKind::Guardian) => "♝",
            (Color::Black, PieceKind::Rook) => "♜",
            (Color::Black, PieceKind::Castle) => "♖",
            (Color::Black, PieceKind::King) => "♚",
            (_, PieceKind::Harpy) => "🦅",
            (_, PieceKind::Sage) => "🦉",
            (_, PieceKind::Wizard) => "🔮",
            (_, PieceKind::Lion) => "🦁",
            (_, PieceKind::Throne) => "👸",
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.color.letter(), self.kind.letter())
    }
}

impl FromStr for Piece {
    type Err = ParsePieceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (c, k) = match (chars.next(), chars.next(), chars.next()) {
            (Some(c), Some(k), None) => (c, k),
            _ => return Err(ParsePieceError::InvalidLength(s.to_string())),
        };
        let color = Color::from_letter(c).ok_or(ParsePieceError::InvalidColor(c))?;
        let kind = PieceKind::from_letter(k).ok_or(ParsePieceError::InvalidKind(k))?;
        Ok(Piece::new(color, kind))
    }
}

/// JS 쪽에서는 "wP" 같은 코드 문자열로 주고받는다
impl Serialize for Piece {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
