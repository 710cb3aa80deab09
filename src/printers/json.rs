//! JSON line printer for machine consumers

use crate::core::printer::Sink;
use crate::core::{DefaultPresenter, Fields, Level, OutputLock, Presenter, Printer};
use chrono::{Local, SecondsFormat};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::io::Write;
use std::sync::Arc;

/// Writes each call as one compact JSON object followed by a newline:
/// `{"ts":"<RFC3339>","level":"INFO","msg":"...","<key>":"<value>",...}`
///
/// Field values are always strings. Fields keep their order, duplicates
/// included. No colors.
///
/// The header keys `ts`, `level` and `msg` are always written first. A
/// field with one of those keys is still emitted after them, so a consumer
/// that collapses duplicate keys last-wins will see the field's value in
/// place of the header's.
pub struct JsonPrinter {
    writer: Sink,
    presenter: Option<Arc<dyn Presenter>>,
    lock: OutputLock,
}

impl JsonPrinter {
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Sink::new(writer),
            presenter: None,
            lock: OutputLock::process(),
        }
    }

    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }

    /// Only visibility is consulted; JSON has no prefix position.
    #[must_use]
    pub fn with_presenter(mut self, presenter: Arc<dyn Presenter>) -> Self {
        self.presenter = Some(presenter);
        self
    }

    #[must_use]
    pub fn with_lock(mut self, lock: OutputLock) -> Self {
        self.lock = lock;
        self
    }

    /// Render one line, newline included, for the given timestamp text.
    pub fn format_line(
        &self,
        timestamp: &str,
        level: Level,
        message: &str,
        fields: &Fields,
    ) -> String {
        let record = JsonRecord {
            ts: timestamp,
            level,
            msg: message,
            fields,
            presenter: match self.presenter.as_deref() {
                Some(p) => p,
                None => &DefaultPresenter,
            },
        };
        // every value is a string, so serialization cannot fail
        let mut line = serde_json::to_string(&record).unwrap_or_default();
        line.push('\n');
        line
    }
}

impl Printer for JsonPrinter {
    fn print(&self, level: Level, message: &str, fields: &Fields) {
        let now = Local::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        let line = self.format_line(&now, level, message, fields);

        let _guard = self.lock.lock();
        self.writer.write_line(self.name(), line.as_bytes());
    }

    fn name(&self) -> &str {
        "json"
    }
}

/// Serialized entry by entry so field order and duplicates survive.
struct JsonRecord<'a> {
    ts: &'a str,
    level: Level,
    msg: &'a str,
    fields: &'a Fields,
    presenter: &'a dyn Presenter,
}

impl Serialize for JsonRecord<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("ts", self.ts)?;
        map.serialize_entry("level", self.level.to_str())?;
        map.serialize_entry("msg", self.msg)?;
        for field in self.fields {
            if self.presenter.is_visible(field) {
                map.serialize_entry(field.key(), field.value())?;
            }
        }
        map.end()
    }
}
