//! かるたデータ参照モジュール
//!
//! 変換後のJSONを読み込み、ID指定の取得や名前・読み札・頭文字での検索を行う。

use crate::error::{KarutaError, Result};
use crate::record::KarutaRecord;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct KarutaCatalog {
    records: Vec<KarutaRecord>,
}

impl KarutaCatalog {
    /// JSONファイルから読み込み
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(KarutaError::FileNotFound(path.display().to_string()));
        }

        let file = File::open(path)?;
        let records: Vec<KarutaRecord> = serde_json::from_reader(BufReader::new(file))?;
        Ok(Self::from_records(records))
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let records: Vec<KarutaRecord> = serde_json::from_str(content)?;
        Ok(Self::from_records(records))
    }

    pub fn from_records(records: Vec<KarutaRecord>) -> Self {
        Self { records }
    }

    pub fn all(&self) -> &[KarutaRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get_by_id(&self, id: i64) -> Option<&KarutaRecord> {
        self.records.iter().find(|k| k.id == id)
    }

    /// 複数IDで取得（カタログ内の順序）
    pub fn get_by_ids(&self, ids: &[i64]) -> Vec<&KarutaRecord> {
        self.records.iter().filter(|k| ids.contains(&k.id)).collect()
    }

    /// 頭文字の一覧（重複なし・ソート済み）
    pub fn kashira_list(&self) -> Vec<&str> {
        self.records
            .iter()
            .map(|k| k.kashira.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// 複合検索
    ///
    /// 名前・ふりがな・読み札（漢字/ひらがな）・頭文字のいずれかに、
    /// 小文字化したクエリが部分一致するものを返す。頭文字側は小文字化しない。
    pub fn search(&self, query: &str) -> Vec<&KarutaRecord> {
        let q = query.to_lowercase();
        self.records
            .iter()
            .filter(|k| {
                k.name.to_lowercase().contains(&q)
                    || k.furikana.to_lowercase().contains(&q)
                    || k.yomi_kanji.to_lowercase().contains(&q)
                    || k.yomi_hiragana.to_lowercase().contains(&q)
                    || k.kashira.contains(&q)
            })
            .collect()
    }

    pub fn search_by_name(&self, query: &str) -> Vec<&KarutaRecord> {
        self.records
            .iter()
            .filter(|k| k.name.contains(query) || k.furikana.contains(query))
            .collect()
    }

    pub fn search_by_yomi(&self, query: &str) -> Vec<&KarutaRecord> {
        self.records
            .iter()
            .filter(|k| k.yomi_kanji.contains(query) || k.yomi_hiragana.contains(query))
            .collect()
    }

    /// 頭文字の完全一致
    pub fn search_by_kashira(&self, kashira: &str) -> Vec<&KarutaRecord> {
        self.records.iter().filter(|k| k.kashira == kashira).collect()
    }
}
