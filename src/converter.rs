//! CSV → JSON 変換モジュール
//!
//! 1パスで全行を読み込み、全件をJSON配列として書き出す。
//! 1行でも失敗すれば変換全体を中断する（行のスキップはしない）。

use crate::config::Config;
use crate::error::{KarutaError, Result};
use crate::mapping::ColumnIndex;
use crate::record::KarutaRecord;
use csv::ReaderBuilder;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::PathBuf;

/// 変換結果
#[derive(Debug, Clone)]
pub struct ConversionReport {
    /// 変換した件数
    pub count: usize,
    pub output_path: PathBuf,
    /// 最初の項目（0件なら None）
    pub first: Option<RecordSummary>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordSummary {
    pub id: i64,
    pub name: String,
}

impl From<&KarutaRecord> for RecordSummary {
    fn from(record: &KarutaRecord) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
        }
    }
}

/// CSVを読み込んでJSONファイルに書き出す
pub fn convert(config: &Config) -> Result<ConversionReport> {
    if !config.input.exists() {
        return Err(KarutaError::FileNotFound(config.input.display().to_string()));
    }

    let records = {
        let file = File::open(&config.input)?;
        read_records(BufReader::new(file))?
    };
    log::info!("{}件のレコードを読み込み: {}", records.len(), config.input.display());

    // 書き込み前に全体を組み立てておき、失敗時に出力ファイルへ触れない
    let json = render_json(&records)?;
    std::fs::write(&config.output, json)?;
    log::info!("JSONを書き込み: {}", config.output.display());

    Ok(ConversionReport {
        count: records.len(),
        output_path: config.output.clone(),
        first: records.first().map(RecordSummary::from),
    })
}

/// CSVの全データ行をレコードに変換（入力順を保持）
pub fn read_records<R: Read>(reader: R) -> Result<Vec<KarutaRecord>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let index = ColumnIndex::from_headers(rdr.headers()?);
    let missing = index.missing_columns();
    if !missing.is_empty() {
        log::debug!("ヘッダーに無い列: {:?}", missing);
    }

    let mut records = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let record = result?;
        let row = index.row(&record, i + 1);
        let karuta = KarutaRecord::from_row(&row)?;
        log::trace!("{}行目: id={}", row.number(), karuta.id);
        records.push(karuta);
    }

    Ok(records)
}

/// 2スペースインデント・非ASCII文字はエスケープせず出力
pub fn render_json(records: &[KarutaRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}
