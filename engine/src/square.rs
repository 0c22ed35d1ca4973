use serde::Serialize;

/// 보드 세로 칸 수 (row 0 = 흑 진영 맨 윗줄)
pub const ROWS: usize = 12;
/// 보드 가로 칸 수
pub const COLS: usize = 16;

/// 보드 좌표 (0-indexed: row=0~11, col=0~15)
///
/// 검사된 생성자로만 만들 수 있으므로 보드 밖 좌표는 존재하지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// 범위를 벗어나면 None
    pub fn new(row: i32, col: i32) -> Option<Self> {
        if Self::in_bounds(row, col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    pub fn in_bounds(row: i32, col: i32) -> bool {
        row >= 0 && row < ROWS as i32 && col >= 0 && col < COLS as i32
    }

    pub fn row(&self) -> i32 {
        self.row as i32
    }

    pub fn col(&self) -> i32 {
        self.col as i32
    }

    /// (dr, dc)만큼 떨어진 칸. 보드 밖이면 None
    pub fn offset(&self, dr: i32, dc: i32) -> Option<Self> {
        Self::new(self.row() + dr, self.col() + dc)
    }

    /// 밝은 칸 여부 ((row + col) 짝수)
    pub fn is_light(&self) -> bool {
        (self.row + self.col) % 2 == 0
    }

    pub(crate) fn index(&self) -> usize {
        self.row as usize * COLS + self.col as usize
    }

    /// 모든 칸을 행 우선 순서로
    pub fn all() -> impl Iterator<Item = Square> {
        (0..ROWS as u8).flat_map(|row| (0..COLS as u8).map(move |col| Square { row, col }))
    }
}
