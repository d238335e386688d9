//! 列マッピングモジュール
//!
//! CSVの列名とJSONのフィールド名の対応、および型変換を一か所で定義する。
//! CSV側の列名には表記揺れがあるため（`yomi_hira`、スペース入りの `photo_ 2`）、
//! 行の組み立てでは必ずJSON側のフィールド名で参照する。

use crate::error::{KarutaError, Result};
use csv::StringRecord;

/// 値の変換方法
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coercion {
    Integer,
    Float,
    Text,
}

impl Coercion {
    fn label(self) -> &'static str {
        match self {
            Coercion::Integer => "整数",
            Coercion::Float => "数値",
            Coercion::Text => "文字列",
        }
    }
}

/// CSV列 → JSONフィールドの対応
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMapping {
    pub source: &'static str,
    pub target: &'static str,
    pub coercion: Coercion,
}

impl FieldMapping {
    const fn new(source: &'static str, target: &'static str, coercion: Coercion) -> Self {
        Self { source, target, coercion }
    }
}

/// 全フィールドの対応表（JSONの出力順）
pub const FIELD_MAPPINGS: &[FieldMapping] = &[
    FieldMapping::new("id", "id", Coercion::Integer),
    FieldMapping::new("kashira", "kashira", Coercion::Text),
    FieldMapping::new("name", "name", Coercion::Text),
    FieldMapping::new("furikana", "furikana", Coercion::Text),
    FieldMapping::new("saka_no", "saka_no", Coercion::Text),
    FieldMapping::new("yomi_kanji", "yomi_kanji", Coercion::Text),
    FieldMapping::new("yomi_hira", "yomi_hiragana", Coercion::Text),
    FieldMapping::new("img_yomi", "img_yomi", Coercion::Text),
    FieldMapping::new("img_tori", "img_tori", Coercion::Text),
    FieldMapping::new("photo_1", "photo_1", Coercion::Text),
    FieldMapping::new("photo_ 2", "photo_2", Coercion::Text),
    FieldMapping::new("history", "history", Coercion::Text),
    FieldMapping::new("lat", "lat", Coercion::Float),
    FieldMapping::new("lon", "lon", Coercion::Float),
];

/// JSONフィールド名から対応を引く
#[cfg(test)]
fn mapping_for(target: &str) -> Option<&'static FieldMapping> {
    FIELD_MAPPINGS.iter().find(|m| m.target == target)
}

/// ヘッダー行から求めた各フィールドの列位置
///
/// ヘッダーに無い列は `None` のまま保持し、行を読む時点でエラーにする。
/// データ行が0件なら列不足でも変換は成功する。
#[derive(Debug, Clone)]
pub struct ColumnIndex {
    positions: Vec<Option<usize>>,
}

impl ColumnIndex {
    pub fn from_headers(headers: &StringRecord) -> Self {
        let positions = FIELD_MAPPINGS
            .iter()
            .map(|m| headers.iter().position(|h| h == m.source))
            .collect();
        Self { positions }
    }

    /// ヘッダーに存在しないCSV列名
    pub fn missing_columns(&self) -> Vec<&'static str> {
        FIELD_MAPPINGS
            .iter()
            .zip(&self.positions)
            .filter(|(_, pos)| pos.is_none())
            .map(|(m, _)| m.source)
            .collect()
    }

    pub fn row<'a>(&'a self, record: &'a StringRecord, row: usize) -> Row<'a> {
        Row { index: self, record, row }
    }

    fn position(&self, target: &str) -> Option<(usize, &'static FieldMapping)> {
        let slot = FIELD_MAPPINGS.iter().position(|m| m.target == target)?;
        Some((slot, &FIELD_MAPPINGS[slot]))
    }
}

/// 1データ行の参照（`row` はヘッダーを除いた1始まりの行番号）
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    index: &'a ColumnIndex,
    record: &'a StringRecord,
    row: usize,
}

impl<'a> Row<'a> {
    pub fn number(&self) -> usize {
        self.row
    }

    /// 文字列フィールド（加工なし）
    pub fn text(&self, target: &str) -> Result<String> {
        let (_, raw) = self.lookup(target, Coercion::Text)?;
        Ok(raw.to_string())
    }

    pub fn integer(&self, target: &str) -> Result<i64> {
        let (mapping, raw) = self.lookup(target, Coercion::Integer)?;
        raw.trim()
            .parse::<i64>()
            .map_err(|_| self.invalid(mapping, raw))
    }

    /// 浮動小数点フィールド（NaN・無限大はJSONで表せないため不可）
    pub fn float(&self, target: &str) -> Result<f64> {
        let (mapping, raw) = self.lookup(target, Coercion::Float)?;
        match raw.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            _ => Err(self.invalid(mapping, raw)),
        }
    }

    /// 対応表で定義された型と読み出し方が食い違う場合もエラー
    fn lookup(&self, target: &str, coercion: Coercion) -> Result<(&'static FieldMapping, &'a str)> {
        let (slot, mapping) = self
            .index
            .position(target)
            .ok_or_else(|| KarutaError::MissingColumn {
                row: self.row,
                column: target.to_string(),
            })?;

        if mapping.coercion != coercion {
            return Err(KarutaError::CoercionMismatch {
                field: mapping.target,
                defined: mapping.coercion.label(),
                requested: coercion.label(),
            });
        }

        self.index.positions[slot]
            .and_then(|pos| self.record.get(pos))
            .map(|raw| (mapping, raw))
            .ok_or_else(|| KarutaError::MissingColumn {
                row: self.row,
                column: mapping.source.to_string(),
            })
    }

    fn invalid(&self, mapping: &FieldMapping, raw: &str) -> KarutaError {
        KarutaError::InvalidNumber {
            row: self.row,
            column: mapping.source.to_string(),
            value: raw.to_string(),
            expected: mapping.coercion.label(),
        }
    }
}
