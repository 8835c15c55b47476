use std::io::Write;
use std::sync::{Arc, Mutex};

use messenger_domain::{Config, GraphConfig, HttpConfig};
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::MakeWriter;

/// Build a configuration pointing at a mock Graph server.
pub fn graph_config(base_url: &str, app_secret: Option<&str>) -> Config {
    let mut graph = GraphConfig::new("page-token");
    graph.base_url = base_url.to_string();
    graph.app_secret = app_secret.map(str::to_string);

    Config { graph, http: HttpConfig { timeout_secs: 5, ..HttpConfig::default() } }
}

/// Handle for inspecting captured log output during tests.
///
/// Keep the handle alive for the duration of the test; dropping it restores
/// the previous default subscriber.
pub struct LogHandle {
    buffer: Arc<Mutex<Vec<u8>>>,
    _guard: DefaultGuard,
}

impl LogHandle {
    /// Return everything logged so far.
    pub fn output(&self) -> String {
        let guard = self.buffer.lock().expect("log mutex poisoned");
        String::from_utf8_lossy(&guard).into_owned()
    }

    /// Check whether the captured output contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.output().contains(needle)
    }
}

#[derive(Clone)]
struct CaptureWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.lock().expect("log mutex poisoned").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CaptureWriter {
    type Writer = CaptureWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Install a thread-local subscriber that records every event at DEBUG level.
pub fn capture_logs() -> LogHandle {
    let buffer = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(CaptureWriter { buffer: Arc::clone(&buffer) })
        .finish();

    LogHandle { buffer, _guard: tracing::subscriber::set_default(subscriber) }
}
