//! テスト用ユーティリティ関数
//!
//! 複数のテストモジュールで使用される共通のヘルパー関数を提供します。
#![cfg(test)]
#![allow(clippy::unwrap_used)]

use std::sync::{
    Arc,
    Mutex,
};

use crate::report::Report;

/// 通知されたメッセージを記録するレポーターを作成する
///
/// # Returns
/// 記録先のバッファと、注入用のレポーターハンドル
pub(crate) fn recording_reporter() -> (Arc<Mutex<Vec<String>>>, Arc<dyn Report>) {
    let messages = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&messages);
    let reporter: Arc<dyn Report> = Arc::new(move |message: &str| {
        sink.lock().unwrap().push(message.to_string());
    });
    (messages, reporter)
}
