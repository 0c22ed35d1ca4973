use serde::Serialize;

use crate::board::{Board, Layout};
use crate::error::LayoutError;
use crate::log_debug;
use crate::piece::{Color, Piece};
use crate::rules;
use crate::square::Square;

/// 상단 제목에 쓰이는 게임 이름
pub const TITLE: &str = "Clash of Mythic Titans";

/// 선택된 기물과 그 기물의 합법 이동 칸
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub from: Square,
    pub destinations: Vec<Square>,
}

impl Selection {
    pub fn allows(&self, to: Square) -> bool {
        self.destinations.contains(&to)
    }
}

/// 클릭 한 번의 처리 결과
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum ClickOutcome {
    /// 상태 변화 없음 (빈 칸, 상대 기물, 보드 밖)
    Ignored,
    /// 기물 선택
    Selected {
        from: Square,
        destinations: Vec<Square>,
    },
    /// 선택 해제 (합법 이동 칸이 아닌 곳 클릭)
    Deselected,
    /// 이동 실행. captured는 알림용이며 따로 보관하지 않는다
    Moved {
        from: Square,
        to: Square,
        piece: Piece,
        captured: Option<Piece>,
    },
}

/// 렌더러가 칸 하나를 그릴 때 필요한 정보
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellView {
    pub square: Square,
    pub piece: Option<Piece>,
    pub glyph: Option<&'static str>,
    pub highlighted: bool,
    pub light: bool,
}

/// 게임 상태 (보드 + 차례 + 선택)
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    initial: Board,
    turn: Color,
    selection: Option<Selection>,
    pub debug_mode: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// 기본 배치, 백 선
    pub fn new() -> Self {
        Self::with_board(Board::standard())
    }

    pub fn with_board(board: Board) -> Self {
        Self {
            initial: board.clone(),
            board,
            turn: Color::White,
            selection: None,
            debug_mode: false,
        }
    }

    /// 기물 코드 배치로 시작
    pub fn with_layout(layout: &Layout) -> Result<Self, LayoutError> {
        Ok(Self::with_board(Board::from_layout(layout)?))
    }

    /// 시작 배치로 되돌리기
    pub fn reset(&mut self) {
        self.board = self.initial.clone();
        self.turn = Color::White;
        self.selection = None;
        self.debug(|| "reset to initial position".to_string());
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Color {
        self.turn
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.get(square)
    }

    /// 선택된 칸 또는 그 기물의 이동 가능 칸이면 true
    pub fn is_highlighted(&self, square: Square) -> bool {
        self.selection
            .as_ref()
            .map_or(false, |s| s.from == square || s.allows(square))
    }

    /// 특정 칸 기물의 합법 이동 칸 (차례와 무관)
    pub fn legal_moves_at(&self, square: Square) -> Vec<Square> {
        match self.board.get(square) {
            Some(piece) => rules::legal_moves(piece, square, &self.board),
            None => Vec::new(),
        }
    }

    pub fn status_text(&self) -> String {
        format!("{} - {} to move", TITLE, self.turn.name())
    }

    /// 모든 칸의 표시 정보 (행 우선)
    pub fn cells(&self) -> impl Iterator<Item = CellView> + '_ {
        Square::all().map(move |square| {
            let piece = self.board.get(square);
            CellView {
                square,
                piece,
                glyph: piece.map(|p| p.glyph()),
                highlighted: self.is_highlighted(square),
                light: square.is_light(),
            }
        })
    }

    /// 칸 클릭 처리. 보드 밖 좌표는 무시하고 선택도 유지한다
    pub fn click(&mut self, row: i32, col: i32) -> ClickOutcome {
        match Square::new(row, col) {
            Some(square) => self.click_square(square),
            None => ClickOutcome::Ignored,
        }
    }

    pub fn click_square(&mut self, square: Square) -> ClickOutcome {
        match self.selection.take() {
            None => self.select(square),
            Some(selection) if selection.allows(square) => self.execute(selection.from, square),
            // 다른 아군 기물을 눌러도 새로 선택하지 않고 해제만 한다
            Some(_) => {
                self.debug(|| format!("selection cleared by ({}, {})", square.row(), square.col()));
                ClickOutcome::Deselected
            }
        }
    }

    fn select(&mut self, square: Square) -> ClickOutcome {
        let piece = match self.board.get(square) {
            Some(p) if p.color == self.turn => p,
            _ => return ClickOutcome::Ignored,
        };

        let destinations = rules::legal_moves(piece, square, &self.board);
        self.debug(|| {
            format!(
                "selected {} at ({}, {}): {} moves",
                piece,
                square.row(),
                square.col(),
                destinations.len()
            )
        });
        self.selection = Some(Selection {
            from: square,
            destinations: destinations.clone(),
        });
        ClickOutcome::Selected {
            from: square,
            destinations,
        }
    }

    fn execute(&mut self, from: Square, to: Square) -> ClickOutcome {
        let piece = match self.board.get(from) {
            Some(p) => p,
            None => return ClickOutcome::Deselected,
        };
        let captured = self.board.relocate(from, to);
        self.turn = self.turn.opponent();

        self.debug(|| {
            format!(
                "{} ({}, {}) -> ({}, {}){}; {} to move",
                piece,
                from.row(),
                from.col(),
                to.row(),
                to.col(),
                captured.map(|c| format!(" x {}", c)).unwrap_or_default(),
                self.turn.name()
            )
        });

        ClickOutcome::Moved {
            from,
            to,
            piece,
            captured,
        }
    }

    fn debug(&self, msg: impl FnOnce() -> String) {
        if self.debug_mode {
            log_debug(&msg());
        }
    }
}
