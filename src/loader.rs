//! 翻訳ファイルの読み込み関数
//!
//! コアはローダーの実装を強制しません。ここでは最も一般的な形式
//! （識別子 → 言語コード → 文字列の JSON オブジェクト）向けの
//! 既成ローダーを提供します。

use std::collections::HashMap;
use std::path::Path;

use crate::table::LocalizationTable;

/// Returns a loader that reads a JSON translation file.
///
/// The expected file shape is an object keyed by identifier, each value an
/// object keyed by language code with string values:
///
/// ```json
/// {
///     "hello": { "en": "hello", "ru": "привет" },
///     "bye": { "en": "goodbye", "ru": "до свидания" }
/// }
/// ```
///
/// The whole file is parsed before anything is inserted, so a parse error
/// never leaves the table half-populated. Read and parse failures are logged
/// with `tracing::warn!` and answered with `false`, which makes
/// [`LocalizationTable::load`] report the load failure.
pub fn json_file() -> impl FnMut(&mut LocalizationTable, &Path) -> bool {
    |table, path| {
        tracing::debug!("Loading translations from: {:?}", path);

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read translation file {:?}: {err}", path);
                return false;
            }
        };

        let parsed: HashMap<String, HashMap<String, String>> =
            match serde_json::from_str(&content) {
                Ok(parsed) => parsed,
                Err(err) => {
                    tracing::warn!("Failed to parse translation file {:?}: {err}", path);
                    return false;
                }
            };

        for (id, translations) in parsed {
            for (lang, value) in translations {
                table.add(id.clone(), lang, value);
            }
        }

        true
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::fs;

    use googletest::prelude::*;
    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;
    use crate::test_utils::recording_reporter;

    const DATA: &str = r#"{
        "hello": { "en": "hello", "ru": "привет", "jp": "こんにちわ" },
        "bye": { "en": "goodbye", "ru": "до свидания", "jp": "さよなら" },
        "what": { "en": "what", "ru": "что", "jp": "何" }
    }"#;

    /// 正常な翻訳ファイルを読み込む
    #[rstest]
    fn loads_a_valid_translation_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.json");
        fs::write(&path, DATA).unwrap();

        let mut table = LocalizationTable::new();
        table.set_loader(json_file());
        let result = table.load(&path);

        assert_that!(result, ok(anything()));
        assert_that!(table.len(), eq(3));
        assert_that!(table.get("hello", "ru").as_str(), eq("привет"));
        assert_that!(table.get("bye", "jp").as_str(), eq("さよなら"));
        assert_that!(table.get("what", "en").as_str(), eq("what"));
    }

    /// ファイルが存在しない場合はロード失敗として通知される
    #[rstest]
    fn missing_file_fails_the_load() {
        let temp_dir = TempDir::new().unwrap();
        let (messages, reporter) = recording_reporter();

        let mut table = LocalizationTable::with_reporter(reporter);
        table.set_loader(json_file());
        let result = table.load(temp_dir.path().join("absent.json"));

        assert_that!(result, err(anything()));
        assert_that!(table.is_empty(), eq(true));
        let messages = messages.lock().unwrap();
        assert_that!(*messages, len(eq(1)));
        assert_that!(messages[0], eq("Failed to load localization data"));
    }

    /// JSON パースエラー
    #[rstest]
    fn invalid_json_fails_the_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        fs::write(&path, "not json").unwrap();
        let (messages, reporter) = recording_reporter();

        let mut table = LocalizationTable::with_reporter(reporter);
        table.set_loader(json_file());
        let result = table.load(&path);

        assert_that!(result, err(anything()));
        assert_that!(table.is_empty(), eq(true));
        assert_that!(*messages.lock().unwrap(), len(eq(1)));
    }

    /// 値がオブジェクトでない場合もパースエラー扱い
    #[rstest]
    fn wrong_shape_fails_the_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("flat.json");
        fs::write(&path, r#"{ "hello": "no languages here" }"#).unwrap();

        let mut table = LocalizationTable::new();
        table.set_loader(json_file());
        let result = table.load(&path);

        assert_that!(result, err(anything()));
        assert_that!(table.is_empty(), eq(true));
    }

    /// 再ロードしても既存の値が優先される（first write wins）
    #[rstest]
    fn reload_keeps_existing_entries() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.json");
        fs::write(&path, r#"{ "hello": { "en": "hello" } }"#).unwrap();

        let mut table = LocalizationTable::new();
        table.add("hello".to_string(), "en".to_string(), "already here".to_string());
        table.set_loader(json_file());
        let result = table.load(&path);

        assert_that!(result, ok(anything()));
        assert_that!(table.get("hello", "en").as_str(), eq("already here"));
    }
}
