//! エラー通知フック
//!
//! 失敗したルックアップやロードは、例外ではなくここを経由して通知されます。
//! コンテナ生成時に注入され、プロセス全体の可変状態は持ちません。

use std::sync::Arc;

/// Receives out-of-band failure messages from the containers.
///
/// Every failed lookup and every failed load funnels through a single
/// `report` call; the containers themselves never panic and never print.
pub trait Report {
    /// Called with a human-readable description of the failure.
    fn report(&self, message: &str);
}

/// Any plain closure can serve as a reporter.
impl<F> Report for F
where
    F: Fn(&str),
{
    fn report(&self, message: &str) {
        self(message);
    }
}

/// The default reporter: discards every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReport;

impl Report for NullReport {
    fn report(&self, _message: &str) {}
}

/// Forwards every message to `tracing::warn!`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReport;

impl Report for TracingReport {
    fn report(&self, message: &str) {
        tracing::warn!("{message}");
    }
}

/// Shorthand for the injected reporter handle.
pub(crate) fn null_reporter() -> Arc<dyn Report> {
    Arc::new(NullReport)
}
