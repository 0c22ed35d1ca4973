//! 12x16 신화 체스 (Clash of Mythic Titans) 규칙 엔진
//!
//! 보드 상태, 기물별 행마법, 클릭 기반 턴 진행을 담당한다.
//! 렌더링은 wasm 크레이트 쪽 JS가 맡는다.

pub mod board;
pub mod error;
pub mod game;
pub mod piece;
pub mod rules;
pub mod square;

pub use board::{Board, Layout};
pub use error::{LayoutError, ParsePieceError};
pub use game::{CellView, ClickOutcome, GameState, Selection};
pub use piece::{Color, Piece, PieceKind};
pub use square::{Square, COLS, ROWS};

// 디버그 로그 출력 (WASM 환경에서는 JS console.log로 전달)
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn log_debug(msg: &str) {
    log(&format!("[engine] {}", msg));
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn log_debug(msg: &str) {
    println!("DEBUG: {}", msg);
}
