use crate::error::Result;
use crate::mapping::Row;
use serde::{Deserialize, Serialize};

/// かるた1枚分のデータ（フィールド順がJSONの出力順）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KarutaRecord {
    pub id: i64,
    pub kashira: String,        // 頭文字
    pub name: String,           // 坂の名前
    pub furikana: String,
    pub saka_no: String,        // 坂番号（数字でも文字列のまま）
    pub yomi_kanji: String,     // 読み札
    pub yomi_hiragana: String,
    pub img_yomi: String,
    pub img_tori: String,
    pub photo_1: String,
    pub photo_2: String,
    pub history: String,
    pub lat: f64,
    pub lon: f64,
}

impl KarutaRecord {
    pub fn from_row(row: &Row<'_>) -> Result<Self> {
        Ok(Self {
            id: row.integer("id")?,
            kashira: row.text("kashira")?,
            name: row.text("name")?,
            furikana: row.text("furikana")?,
            saka_no: row.text("saka_no")?,
            yomi_kanji: row.text("yomi_kanji")?,
            yomi_hiragana: row.text("yomi_hiragana")?,
            img_yomi: row.text("img_yomi")?,
            img_tori: row.text("img_tori")?,
            photo_1: row.text("photo_1")?,
            photo_2: row.text("photo_2")?,
            history: row.text("history")?,
            lat: row.float("lat")?,
            lon: row.float("lon")?,
        })
    }

    /// 地図に表示できる座標を持つか
    pub fn has_location(&self) -> bool {
        self.lat != 0.0 && self.lon != 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::{ColumnIndex, FIELD_MAPPINGS};
    use csv::StringRecord;

    #[test]
    fn test_from_row_renames_fields() {
        let headers =
            StringRecord::from(FIELD_MAPPINGS.iter().map(|m| m.source).collect::<Vec<_>>());
        let record = StringRecord::from(vec![
            "3", "ま", "祈念坂", "きねんざか", "12", "祈り", "いのり", "y3.jpg", "t3.jpg",
            "a.jpg", "b.jpg", "由来", "32.73", "129.87",
        ]);
        let index = ColumnIndex::from_headers(&headers);

        let karuta = KarutaRecord::from_row(&index.row(&record, 1)).unwrap();
        assert_eq!(karuta.id, 3);
        assert_eq!(karuta.yomi_hiragana, "いのり");
        assert_eq!(karuta.photo_2, "b.jpg");
        assert_eq!(karuta.saka_no, "12");
        assert!(karuta.has_location());
    }

    #[test]
    fn test_has_location_zero() {
        let karuta = KarutaRecord {
            id: 1,
            kashira: String::new(),
            name: String::new(),
            furikana: String::new(),
            saka_no: String::new(),
            yomi_kanji: String::new(),
            yomi_hiragana: String::new(),
            img_yomi: String::new(),
            img_tori: String::new(),
            photo_1: String::new(),
            photo_2: String::new(),
            history: String::new(),
            lat: 0.0,
            lon: 129.87,
        };
        assert!(!karuta.has_location());
    }
}
