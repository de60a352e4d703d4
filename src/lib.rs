//! i18n-table
//!
//! 識別子 → 言語 → 翻訳文字列の二段マッピングを提供する軽量な
//! インメモリ・ローカライゼーションテーブル

pub mod error;
pub mod loader;
pub mod report;
pub mod table;
pub mod translation_set;

#[cfg(test)]
mod test_utils;

// 主要型を再エクスポート
pub use error::{
    LoadError,
    LookupError,
};
pub use report::{
    NullReport,
    Report,
    TracingReport,
};
pub use table::{
    LoaderFn,
    LocalizationTable,
};
pub use translation_set::TranslationSet;
