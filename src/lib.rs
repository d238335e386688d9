//! かるたCSV → JSON 変換
//!
//! `data/karuta.csv` を読み込み、列名と型を整えて `data/karuta.json` に書き出す。

pub mod catalog;
pub mod config;
pub mod console;
pub mod converter;
pub mod error;
pub mod mapping;
pub mod record;

pub use catalog::KarutaCatalog;
pub use config::Config;
pub use converter::{convert, ConversionReport};
pub use error::{KarutaError, Result};
pub use record::KarutaRecord;
