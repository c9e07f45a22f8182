//! Tracing layer and background poster.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::mpsc;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::Layer;

use super::{parse_optional, Dsn, TelemetryError};

/// Reports queued before new ones are dropped.
pub const DEFAULT_BUFFER_SIZE: usize = 64;

#[cfg(target_arch = "wasm32")]
const PLATFORM: &str = "javascript";
#[cfg(not(target_arch = "wasm32"))]
const PLATFORM: &str = "other";

/// One captured ERROR event, in the collector's store format.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ErrorReport {
    pub message: String,
    pub level: &'static str,
    pub logger: String,
    pub platform: &'static str,
    pub release: &'static str,
    pub timestamp: String,
}

#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: Vec<String>,
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields.push(format!("{}={}", field.name(), value));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else {
            self.fields.push(format!("{}={:?}", field.name(), value));
        }
    }
}

impl MessageVisitor {
    fn finish(self) -> String {
        if self.fields.is_empty() {
            self.message
        } else {
            format!("{} {}", self.message, self.fields.join(" "))
        }
    }
}

/// Copies ERROR events into the reporter channel.
pub struct ErrorReportLayer {
    sender: mpsc::Sender<ErrorReport>,
    dropped: Arc<AtomicU64>,
}

impl ErrorReportLayer {
    pub fn dropped(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }
}

impl<S: Subscriber> Layer<S> for ErrorReportLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        // The poster's own HTTP stack must not feed back into the channel.
        if *meta.level() != Level::ERROR
            || meta.target().starts_with("reqwest")
            || meta.target().starts_with("hyper")
        {
            return;
        }
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        let report = ErrorReport {
            message: visitor.finish(),
            level: "error",
            logger: meta.target().to_string(),
            platform: PLATFORM,
            release: env!("AIDRA_VERSION"),
            timestamp: chrono::Utc::now().to_rfc3339(),
        };
        if self.sender.try_send(report).is_err() {
            self.dropped.fetch_add(1, Ordering::Relaxed);
        }
    }
}

/// Receiving half; posts every report to the collector.
pub struct Reporter {
    dsn: Dsn,
    receiver: mpsc::Receiver<ErrorReport>,
}

impl Reporter {
    /// Run until every layer handle is gone.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn spawn(self) {
        tokio::spawn(self.run());
    }

    /// Run on the page's event loop for as long as the page lives.
    #[cfg(target_arch = "wasm32")]
    pub fn spawn(self) {
        wasm_bindgen_futures::spawn_local(self.run());
    }

    async fn run(mut self) {
        let client = reqwest::Client::new();
        let url = self.dsn.store_url();
        let auth = self.dsn.auth_header();
        while let Some(report) = self.receiver.recv().await {
            let result = client
                .post(&url)
                .header("X-Sentry-Auth", &auth)
                .json(&report)
                .send()
                .await
                .and_then(|resp| resp.error_for_status());
            if let Err(e) = result {
                tracing::warn!("Failed to deliver error report: {}", e);
            }
        }
        tracing::debug!("Error reporter stopped");
    }
}

fn channel(dsn: Dsn, size: usize) -> (ErrorReportLayer, Reporter) {
    let (sender, receiver) = mpsc::channel(size);
    (
        ErrorReportLayer {
            sender,
            dropped: Arc::new(AtomicU64::new(0)),
        },
        Reporter { dsn, receiver },
    )
}

/// Build the layer and its reporter when a DSN is configured.
pub fn init(dsn: Option<&str>) -> Result<Option<(ErrorReportLayer, Reporter)>, TelemetryError> {
    Ok(parse_optional(dsn)?.map(|dsn| channel(dsn, DEFAULT_BUFFER_SIZE)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::layer::SubscriberExt;

    fn dsn() -> Dsn {
        Dsn::parse("https://key@collector.invalid/1").unwrap()
    }

    #[test]
    fn test_only_error_events_are_captured() {
        let (layer, mut reporter) = channel(dsn(), 8);
        let subscriber = tracing_subscriber::registry().with(layer);
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("hello");
            tracing::warn!("careful");
            tracing::error!(status = 503, "upstream failed");
        });

        let report = reporter.receiver.try_recv().unwrap();
        assert_eq!(report.message, "upstream failed status=503");
        assert_eq!(report.level, "error");
        assert!(reporter.receiver.try_recv().is_err());
    }

    #[test]
    fn test_full_buffer_drops_instead_of_blocking() {
        let (layer, _reporter) = channel(dsn(), 2);
        let dropped = layer.dropped.clone();
        let subscriber = tracing_subscriber::registry().with(layer);
        tracing::subscriber::with_default(subscriber, || {
            for i in 0..5 {
                tracing::error!("failure {}", i);
            }
        });
        assert_eq!(dropped.load(Ordering::Relaxed), 3);
    }

    #[test]
    fn test_page_failures_keep_their_origin() {
        let (layer, mut reporter) = channel(dsn(), 8);
        let subscriber = tracing_subscriber::registry().with(layer);
        tracing::subscriber::with_default(subscriber, || {
            tracing::error!(
                target: "aidra_landing::app::sections::hero",
                "Error preloading hero images: {}",
                "failed to load slide-2.jpg"
            );
        });

        let report = reporter.receiver.try_recv().unwrap();
        assert_eq!(report.logger, "aidra_landing::app::sections::hero");
        assert_eq!(
            report.message,
            "Error preloading hero images: failed to load slide-2.jpg"
        );
        assert_eq!(report.platform, PLATFORM);
    }

    #[test]
    fn test_init_without_dsn_installs_nothing() {
        assert!(init(None).unwrap().is_none());
        assert!(init(Some("bad dsn")).is_err());
    }
}
