//! 画面表示
//!
//! 変換処理の結果をステータス行として表示し、成否を bool で返す。

use crate::config::Config;
use crate::converter::{self, ConversionReport};
use crate::error::{KarutaError, Result};
use std::io::Write;
use std::path::{Path, PathBuf};

/// 作業ディレクトリと入出力の絶対パスを表示
pub fn print_paths(config: &Config) {
    match std::env::current_dir() {
        Ok(dir) => println!("現在のディレクトリ: {}", dir.display()),
        Err(e) => println!("現在のディレクトリ: 取得失敗 ({})", e),
    }
    let input = display_absolute(config.input_absolute(), &config.input);
    let output = display_absolute(config.output_absolute(), &config.output);
    println!("CSVファイルのパス: {}", input);
    println!("JSONファイルのパス: {}", output);
}

/// 変換を実行して結果を表示（成功時のみ true）
pub fn convert_and_report(config: &Config) -> bool {
    convert_and_report_to(config, &mut std::io::stderr().lock())
}

/// 失敗時の表示先を指定して変換
pub fn convert_and_report_to<W: Write>(config: &Config, err_out: &mut W) -> bool {
    match converter::convert(config) {
        Ok(report) => {
            print_report(&report);
            true
        }
        Err(e) => {
            // 表示先への書き込み失敗は無視（変換の失敗はそのまま返す）
            let _ = report_failure(err_out, e);
            false
        }
    }
}

/// エラー行と診断情報（エラーの詳細と原因の連鎖）を出力
///
/// ログレベルに関係なく常に出力する。
pub fn report_failure<W: Write>(out: &mut W, err: KarutaError) -> std::io::Result<()> {
    writeln!(out, "✗ エラー: {}", err)?;
    writeln!(out, "  詳細: {:?}", err)?;

    let err = anyhow::Error::from(err);
    for cause in err.chain().skip(1) {
        writeln!(out, "  原因: {}", cause)?;
    }
    log::debug!("変換失敗: {:?}", err);
    Ok(())
}

pub fn print_report(report: &ConversionReport) {
    println!(
        "✓ 変換完了: {}件のデータを{}に保存しました。",
        report.count,
        report.output_path.display()
    );
    if let Some(first) = &report.first {
        println!("  最初の項目: ID={}, 名前={}", first.id, first.name);
    }
}

fn display_absolute(resolved: Result<PathBuf>, fallback: &Path) -> String {
    resolved
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| fallback.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_failure_prints_diagnostics() {
        let dir = tempdir().expect("Failed to create temp dir");
        let input = dir.path().join("karuta.csv");
        std::fs::write(
            &input,
            "id,kashira,name,furikana,saka_no,yomi_kanji,yomi_hira,img_yomi,img_tori,\
             photo_1,photo_ 2,history,lat,lon\n\
             x,A,Sample,さんぷる,1,読み,よみ,y.jpg,t.jpg,p1.jpg,p2.jpg,history text,35.0,135.0\n",
        )
        .unwrap();
        let config = Config::new(input, dir.path().join("karuta.json"));

        let mut out = Vec::new();
        assert!(!convert_and_report_to(&config, &mut out));

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("✗ エラー: 1行目: 列 'id' の値 'x' を整数に変換できません"));
        assert!(text.contains("詳細: InvalidNumber"));
        assert!(text.contains("column: \"id\""));
        assert!(!config.output.exists());
    }

    #[test]
    fn test_failure_prints_cause_chain() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let mut out = Vec::new();
        report_failure(&mut out, KarutaError::Io(io_err)).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("✗ エラー: IOエラー: access denied\n"));
        assert!(text.contains("  詳細: Io("));
        assert!(text.contains("  原因: access denied"));
    }
}
