use wasm_bindgen::prelude::*;
use serde::Serialize;
use engine::{CellView, ClickOutcome, Color, GameState, Layout, Square};

/// JS에서 사용할 게임 래퍼
#[wasm_bindgen]
pub struct Game {
    state: GameState,
}

/// JS로 전달할 게임 상태
#[derive(Serialize)]
pub struct JsGameState {
    pub cells: Vec<CellView>,
    pub current_player: String,
    pub status: String,
}

#[wasm_bindgen]
impl Game {
    /// 기본 배치로 새 게임 생성
    #[wasm_bindgen(constructor)]
    pub fn new() -> Game {
        Game {
            state: GameState::new(),
        }
    }

    /// 기물 코드 배열(12x16, 빈 칸은 "")로 게임 생성
    #[wasm_bindgen]
    pub fn from_layout(layout: JsValue) -> Result<Game, JsValue> {
        let layout: Layout = serde_wasm_bindgen::from_value(layout)?;
        let state = GameState::with_layout(&layout).map_err(to_js_error)?;
        Ok(Game { state })
    }

    /// 시작 배치로 되돌리기
    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// 디버그 모드 설정 (선택/이동 로그)
    #[wasm_bindgen]
    pub fn set_debug(&mut self, enabled: bool) {
        self.state.debug_mode = enabled;
        web_sys::console::log_1(&format!("debug mode: {}", enabled).into());
    }

    /// 칸 클릭 처리. 결과({type: "Moved", ...} 등)를 반환
    #[wasm_bindgen]
    pub fn click(&mut self, row: i32, col: i32) -> Result<JsValue, JsValue> {
        let outcome: ClickOutcome = self.state.click(row, col);
        Ok(serde_wasm_bindgen::to_value(&outcome)?)
    }

    /// 현재 게임 상태 (모든 칸 + 차례 + 상태 문구)
    #[wasm_bindgen]
    pub fn get_state(&self) -> Result<JsValue, JsValue> {
        let js_state = JsGameState {
            cells: self.state.cells().collect(),
            current_player: color_letter(self.state.current_player()),
            status: self.state.status_text(),
        };
        Ok(serde_wasm_bindgen::to_value(&js_state)?)
    }

    /// 해당 칸의 기물 코드 ("wP" 등), 비어 있거나 보드 밖이면 undefined
    #[wasm_bindgen]
    pub fn piece_at(&self, row: i32, col: i32) -> Option<String> {
        Square::new(row, col)
            .and_then(|sq| self.state.piece_at(sq))
            .map(|p| p.to_string())
    }

    /// 해당 칸의 표시 문자
    #[wasm_bindgen]
    pub fn glyph_at(&self, row: i32, col: i32) -> Option<String> {
        Square::new(row, col)
            .and_then(|sq| self.state.piece_at(sq))
            .map(|p| p.glyph().to_string())
    }

    #[wasm_bindgen]
    pub fn is_highlighted(&self, row: i32, col: i32) -> bool {
        Square::new(row, col).map_or(false, |sq| self.state.is_highlighted(sq))
    }

    /// 현재 차례 ("w" 또는 "b")
    #[wasm_bindgen]
    pub fn current_player(&self) -> String {
        color_letter(self.state.current_player())
    }

    #[wasm_bindgen]
    pub fn status_text(&self) -> String {
        self.state.status_text()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

fn color_letter(color: Color) -> String {
    color.letter().to_string()
}

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen(start)]
pub fn main() {
    web_sys::console::log_1(&"Clash of Mythic Titans WASM initialized!".into());
}
