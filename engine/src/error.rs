use thiserror::Error;

/// 기물 코드("wP" 등) 파싱 실패
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParsePieceError {
    #[error("piece code must be two characters, got {0:?}")]
    InvalidLength(String),
    #[error("unknown color letter {0:?}")]
    InvalidColor(char),
    #[error("unknown piece letter {0:?}")]
    InvalidKind(char),
}

/// 시작 배치 검증 실패
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("layout must have {expected} rows, got {found}")]
    RowCount { expected: usize, found: usize },
    #[error("row {row} must have {expected} cells, got {found}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("invalid piece at ({row}, {col}): {source}")]
    Piece {
        row: usize,
        col: usize,
        #[source]
        source: ParsePieceError,
    },
}
