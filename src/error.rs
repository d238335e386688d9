use thiserror::Error;

#[derive(Error, Debug)]
pub enum KarutaError {
    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("{row}行目: 列 '{column}' がありません")]
    MissingColumn { row: usize, column: String },

    #[error("{row}行目: 列 '{column}' の値 '{value}' を{expected}に変換できません")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
        expected: &'static str,
    },

    #[error("フィールド '{field}' は{defined}として定義されています（{requested}として読み出し）")]
    CoercionMismatch {
        field: &'static str,
        defined: &'static str,
        requested: &'static str,
    },

    #[error("CSV解析エラー: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, KarutaError>;
