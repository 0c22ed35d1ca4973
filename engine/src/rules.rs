//! 기물별 행마법과 아군 칸 필터

use crate::board::Board;
use crate::piece::{Piece, PieceKind};
use crate::square::Square;

/// 위저드: 모든 방향 1칸 (dr, dc)
pub const WIZARD_STEPS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// 잭: 나이트와 같은 L자 도약 (dr, dc)
pub const JACK_JUMPS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// 행마 기하만 따진 후보 칸 (아군 칸 포함)
///
/// 보드 밖 칸은 절대 포함되지 않는다. 행마법이 없는 기물은 빈 목록.
pub fn candidate_moves(piece: Piece, from: Square, board: &Board) -> Vec<Square> {
    match piece.kind {
        PieceKind::Wizard => leaps(from, &WIZARD_STEPS),
        PieceKind::Jack => leaps(from, &JACK_JUMPS),
        PieceKind::Pawn => pawn_moves(piece, from, board),
        PieceKind::Guardian
        | PieceKind::Harpy
        | PieceKind::Sage
        | PieceKind::Lion
        | PieceKind::Throne
        | PieceKind::King
        | PieceKind::Rook
        | PieceKind::Castle => Vec::new(),
    }
}

fn leaps(from: Square, offsets: &[(i32, i32)]) -> Vec<Square> {
    offsets
        .iter()
        .filter_map(|&(dr, dc)| from.offset(dr, dc))
        .collect()
}

/// 폰: 앞 칸이 비었으면 전진, 앞 대각선은 적이 있을 때만 잡기
fn pawn_moves(piece: Piece, from: Square, board: &Board) -> Vec<Square> {
    let dir = piece.color.forward();
    let mut moves = Vec::new();

    // 앞 줄이 보드 밖이면 대각선도 없다
    let Some(ahead) = from.offset(dir, 0) else {
        return moves;
    };
    if board.is_empty_at(ahead) {
        moves.push(ahead);
    }

    let enemy = piece.color.opponent();
    for dc in [-1, 1] {
        if let Some(diag) = from.offset(dir, dc) {
            if board.is_color_at(diag, enemy) {
                moves.push(diag);
            }
        }
    }

    moves
}

/// 후보 칸에서 아군 기물이 있는 칸을 제거
pub fn filter_own_pieces(piece: Piece, candidates: Vec<Square>, board: &Board) -> Vec<Square> {
    candidates
        .into_iter()
        .filter(|&sq| !board.is_color_at(sq, piece.color))
        .collect()
}

/// 합법 이동 칸 = 후보 칸 - 아군 칸
pub fn legal_moves(piece: Piece, from: Square, board: &Board) -> Vec<Square> {
    filter_own_pieces(piece, candidate_moves(piece, from, board), board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::Color;
    use crate::square::{COLS, ROWS};
    use proptest::prelude::*;

    fn sq(row: i32, col: i32) -> Square {
        Square::new(row, col).unwrap()
    }

    fn piece(code: &str) -> Piece {
        code.parse().unwrap()
    }

    fn board_with(pieces: &[(i32, i32, &str)]) -> Board {
        let mut board = Board::empty();
        for &(row, col, code) in pieces {
            board.set(sq(row, col), Some(piece(code)));
        }
        board
    }

    #[test]
    fn test_wizard_interior_and_corner() {
        let board = Board::empty();
        let wizard = piece("wW");

        assert_eq!(candidate_moves(wizard, sq(5, 7), &board).len(), 8);
        assert_eq!(candidate_moves(wizard, sq(0, 0), &board).len(), 3);
        assert_eq!(candidate_moves(wizard, sq(11, 15), &board).len(), 3);
        // 가장자리
        assert_eq!(candidate_moves(wizard, sq(0, 7), &board).len(), 5);
    }

    #[test]
    fn test_jack_interior_and_edges() {
        let board = Board::empty();
        let jack = piece("bJ");

        let moves = candidate_moves(jack, sq(5, 7), &board);
        assert_eq!(moves.len(), 8);
        assert!(moves.contains(&sq(3, 6)));
        assert!(moves.contains(&sq(7, 8)));

        assert_eq!(candidate_moves(jack, sq(0, 0), &board).len(), 2);
        assert_eq!(candidate_moves(jack, sq(1, 1), &board).len(), 4);
        assert_eq!(candidate_moves(jack, sq(11, 15), &board).len(), 2);
    }

    #[test]
    fn test_pawn_forward_only_when_empty() {
        let board = Board::empty();
        assert_eq!(candidate_moves(piece("wP"), sq(5, 5), &board), vec![sq(4, 5)]);
        assert_eq!(candidate_moves(piece("bP"), sq(5, 5), &board), vec![sq(6, 5)]);

        // 앞이 막히면 (적이든 아군이든) 전진 불가
        let blocked = board_with(&[(4, 5, "bP")]);
        assert!(candidate_moves(piece("wP"), sq(5, 5), &blocked).is_empty());
        let own_blocked = board_with(&[(4, 5, "wJ")]);
        assert!(candidate_moves(piece("wP"), sq(5, 5), &own_blocked).is_empty());
    }

    #[test]
    fn test_pawn_diagonal_capture_only() {
        let board = board_with(&[(4, 4, "bJ"), (4, 6, "wJ")]);
        let moves = candidate_moves(piece("wP"), sq(5, 5), &board);
        assert_eq!(moves, vec![sq(4, 5), sq(4, 4)]);

        let board = board_with(&[(6, 4, "wW"), (6, 6, "wP")]);
        let moves = candidate_moves(piece("bP"), sq(5, 5), &board);
        assert_eq!(moves, vec![sq(6, 5), sq(6, 4), sq(6, 6)]);
    }

    #[test]
    fn test_pawn_at_far_edge_has_no_moves() {
        let board = board_with(&[(0, 1, "bR")]);
        assert!(candidate_moves(piece("wP"), sq(0, 0), &board).is_empty());
        assert!(candidate_moves(piece("bP"), sq(11, 3), &Board::empty()).is_empty());
    }

    #[test]
    fn test_white_pawn_corner_scenario() {
        let board = Board::standard();
        assert_eq!(legal_moves(piece("wP"), sq(10, 0), &board), vec![sq(9, 0)]);
    }

    #[test]
    fn test_unimplemented_kinds_have_no_moves() {
        let board = Board::empty();
        for kind in PieceKind::ALL {
            if kind.has_movement_rules() {
                continue;
            }
            let p = Piece::new(Color::White, kind);
            assert!(candidate_moves(p, sq(6, 8), &board).is_empty(), "{:?}", kind);
        }
    }

    #[test]
    fn test_filter_removes_own_pieces_keeps_enemies() {
        let board = board_with(&[(4, 7, "wP"), (6, 7, "bP")]);
        let moves = legal_moves(piece("wW"), sq(5, 7), &board);
        assert_eq!(moves.len(), 7);
        assert!(!moves.contains(&sq(4, 7)));
        assert!(moves.contains(&sq(6, 7)));
    }

    #[test]
    fn test_standard_setup_back_rank() {
        let board = Board::standard();
        // 백 잭 (11,1): (9,0), (9,2)만 가능 (10,3)은 아군 폰
        let mut moves = legal_moves(piece("wJ"), sq(11, 1), &board);
        moves.sort();
        assert_eq!(moves, vec![sq(9, 0), sq(9, 2)]);
        // 백 위저드는 아군에 둘러싸여 있다
        assert!(legal_moves(piece("wW"), sq(11, 5), &board).is_empty());
    }

    fn arb_piece() -> impl Strategy<Value = Piece> {
        (
            prop_oneof![Just(Color::White), Just(Color::Black)],
            prop::sample::select(PieceKind::ALL.to_vec()),
        )
            .prop_map(|(color, kind)| Piece::new(color, kind))
    }

    fn arb_square() -> impl Strategy<Value = Square> {
        (0..ROWS as i32, 0..COLS as i32).prop_map(|(r, c)| sq(r, c))
    }

    fn arb_board() -> impl Strategy<Value = Board> {
        prop::collection::vec((arb_square(), arb_piece()), 0..48).prop_map(|placed| {
            let mut board = Board::empty();
            for (s, p) in placed {
                board.set(s, Some(p));
            }
            board
        })
    }

    proptest! {
        #[test]
        fn candidates_stay_on_board(p in arb_piece(), from in arb_square(), board in arb_board()) {
            for to in candidate_moves(p, from, &board) {
                prop_assert!(Square::in_bounds(to.row(), to.col()));
                prop_assert_ne!(to, from);
            }
        }

        #[test]
        fn legal_moves_never_land_on_own_piece(p in arb_piece(), from in arb_square(), board in arb_board()) {
            for to in legal_moves(p, from, &board) {
                prop_assert!(!board.is_color_at(to, p.color));
            }
        }

        #[test]
        fn pawn_forward_iff_empty(color in prop_oneof![Just(Color::White), Just(Color::Black)],
                                  from in arb_square(), board in arb_board()) {
            let pawn = Piece::new(color, PieceKind::Pawn);
            let moves = candidate_moves(pawn, from, &board);
            if let Some(ahead) = from.offset(color.forward(), 0) {
                prop_assert_eq!(moves.contains(&ahead), board.is_empty_at(ahead));
                for dc in [-1, 1] {
                    if let Some(diag) = from.offset(color.forward(), dc) {
                        prop_assert_eq!(moves.contains(&diag), board.is_color_at(diag, color.opponent()));
                    }
                }
            } else {
                prop_assert!(moves.is_empty());
            }
        }
    }
}
