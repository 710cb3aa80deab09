//! Human-readable text printer with optional ANSI colors

use crate::core::printer::Sink;
use crate::core::{
    terminal, DefaultPresenter, FieldPresenter, Fields, Level, OutputLock, Presenter, Printer,
};
use chrono::Local;
use std::fmt::Write as _;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Local-time timestamp layout used at the start of every text line
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// SGR parameters
const NO_COLOR: &str = "0";
const RED: &str = "31";
const GREEN: &str = "38;5;48";
const YELLOW: &str = "33";
const GRAY: &str = "38;5;251";
const LIGHT_GRAY: &str = "38;5;243";
const CYAN: &str = "1;36";

/// Text printer.
///
/// Lines look like `<ts> <LEVEL > [prefix] <message> [k=v ...]`. With
/// colors on, each segment is wrapped in an SGR sequence picked by level.
/// With colors off, fields the plain presenter hides (by default
/// [`AGENT_NAME_FIELD`](crate::AGENT_NAME_FIELD)) are dropped as well.
pub struct TextPrinter {
    colors: AtomicBool,
    writer: Sink,
    presenter: Option<Arc<dyn Presenter>>,
    plain_presenter: Option<Arc<dyn Presenter>>,
    lock: OutputLock,
}

impl TextPrinter {
    /// Printer for an arbitrary writer. Colors start disabled.
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            colors: AtomicBool::new(false),
            writer: Sink::new(writer),
            presenter: None,
            plain_presenter: Some(Arc::new(FieldPresenter::plain())),
            lock: OutputLock::process(),
        }
    }

    /// Printer for stdout, colored when stdout is a capable terminal
    pub fn stdout() -> Self {
        Self::new(std::io::stdout()).with_colors(terminal::stdout_colors_supported())
    }

    /// Printer for stderr, colored when stderr is a capable terminal
    pub fn stderr() -> Self {
        Self::new(std::io::stderr()).with_colors(terminal::stderr_colors_supported())
    }

    #[must_use]
    pub fn with_colors(self, colors: bool) -> Self {
        self.colors.store(colors, Ordering::Relaxed);
        self
    }

    #[must_use]
    pub fn with_presenter(mut self, presenter: Arc<dyn Presenter>) -> Self {
        self.presenter = Some(presenter);
        self
    }

    /// Extra visibility filter applied only while colors are off.
    ///
    /// `None` shows in plain output everything the main presenter shows.
    #[must_use]
    pub fn with_plain_presenter(mut self, presenter: Option<Arc<dyn Presenter>>) -> Self {
        self.plain_presenter = presenter;
        self
    }

    #[must_use]
    pub fn with_lock(mut self, lock: OutputLock) -> Self {
        self.lock = lock;
        self
    }

    pub fn colors(&self) -> bool {
        self.colors.load(Ordering::Relaxed)
    }

    /// Toggle colors on a printer already shared by loggers
    pub fn set_colors(&self, colors: bool) {
        self.colors.store(colors, Ordering::Relaxed);
    }

    fn presenter(&self) -> &dyn Presenter {
        match self.presenter.as_deref() {
            Some(p) => p,
            None => &DefaultPresenter,
        }
    }

    /// Render one line, newline included, for the given timestamp text.
    pub fn format_line(
        &self,
        timestamp: &str,
        level: Level,
        message: &str,
        fields: &Fields,
    ) -> String {
        let colors = self.colors();
        let presenter = self.presenter();
        let plain = if colors {
            None
        } else {
            self.plain_presenter.as_deref()
        };
        let message = sanitize(message);

        let mut prefix = Vec::new();
        let mut trailing = Vec::new();
        for field in fields {
            if !presenter.is_visible(field) || plain.is_some_and(|p| !p.is_visible(field)) {
                continue;
            }
            if presenter.is_prefix(field) {
                prefix.push(field);
            } else {
                trailing.push(field);
            }
        }
        let prefix = prefix
            .iter()
            .map(|f| sanitize(f.value()))
            .collect::<Vec<_>>()
            .join(" ");

        let mut line = String::with_capacity(64 + message.len());
        if colors {
            let (level_color, message_color) = level_colors(level);
            paint(&mut line, level_color, &format!("{} {:<6}", timestamp, level));
            if !prefix.is_empty() {
                line.push(' ');
                paint(&mut line, LIGHT_GRAY, &prefix);
            }
            line.push(' ');
            paint(&mut line, message_color, &message);
            for field in trailing {
                line.push(' ');
                paint(&mut line, LIGHT_GRAY, &format!("{}=", sanitize(field.key())));
                paint(&mut line, message_color, &sanitize(field.value()));
            }
        } else {
            let _ = write!(line, "{} {:<6}", timestamp, level);
            if !prefix.is_empty() {
                line.push(' ');
                line.push_str(&prefix);
            }
            line.push(' ');
            line.push_str(&message);
            for field in trailing {
                let _ = write!(line, " {}={}", sanitize(field.key()), sanitize(field.value()));
            }
        }
        line.push('\n');
        line
    }
}

impl Printer for TextPrinter {
    fn print(&self, level: Level, message: &str, fields: &Fields) {
        let now = Local::now().format(DATE_FORMAT).to_string();
        let line = self.format_line(&now, level, message, fields);

        let _guard = self.lock.lock();
        self.writer.write_line(self.name(), line.as_bytes());
    }

    fn name(&self) -> &str {
        "text"
    }
}

/// (timestamp+level color, message color)
fn level_colors(level: Level) -> (&'static str, &'static str) {
    match level {
        Level::Debug => (GRAY, GRAY),
        Level::Info => (GREEN, NO_COLOR),
        Level::Notice => (CYAN, NO_COLOR),
        Level::Warn => (YELLOW, NO_COLOR),
        Level::Error => (RED, NO_COLOR),
        Level::Fatal => (RED, RED),
    }
}

fn paint(out: &mut String, code: &str, text: &str) {
    let _ = write!(out, "\x1b[{}m{}\x1b[0m", code, text);
}

/// Escape line breaks and tabs so one call always renders as one line
fn sanitize(text: &str) -> std::borrow::Cow<'_, str> {
    if text.contains(['\n', '\r', '\t']) {
        text
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
            .into()
    } else {
        text.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Field, AGENT_NAME_FIELD};

    const TS: &str = "2024-05-01 10:20:30";

    fn fields(pairs: &[(&str, &str)]) -> Fields {
        pairs
            .iter()
            .map(|(k, v)| Field::new(*k, *v).unwrap())
            .collect()
    }

    #[test]
    fn test_plain_line() {
        let printer = TextPrinter::new(std::io::sink());
        let line = printer.format_line(TS, Level::Info, "hello world", &Fields::new());
        assert_eq!(line, "2024-05-01 10:20:30 INFO   hello world\n");
    }

    #[test]
    fn test_plain_fields_in_order() {
        let printer = TextPrinter::new(std::io::sink());
        let line = printer.format_line(
            TS,
            Level::Warn,
            "disk low",
            &fields(&[("a", "1"), ("b", "2")]),
        );
        assert_eq!(line, "2024-05-01 10:20:30 WARN   disk low a=1 b=2\n");
    }

    #[test]
    fn test_plain_hides_agent_name() {
        let printer = TextPrinter::new(std::io::sink());
        let line = printer.format_line(
            TS,
            Level::Info,
            "started",
            &fields(&[(AGENT_NAME_FIELD, "agent-1")]),
        );
        assert_eq!(line, "2024-05-01 10:20:30 INFO   started\n");

        let printer = TextPrinter::new(std::io::sink()).with_plain_presenter(None);
        let line = printer.format_line(
            TS,
            Level::Info,
            "started",
            &fields(&[(AGENT_NAME_FIELD, "agent-1")]),
        );
        assert_eq!(line, "2024-05-01 10:20:30 INFO   started agent_name=agent-1\n");
    }

    #[test]
    fn test_colored_keeps_agent_name() {
        let printer = TextPrinter::new(std::io::sink()).with_colors(true);
        let line = printer.format_line(
            TS,
            Level::Info,
            "started",
            &fields(&[(AGENT_NAME_FIELD, "agent-1")]),
        );
        assert_eq!(
            line,
            "\x1b[38;5;48m2024-05-01 10:20:30 INFO  \x1b[0m \x1b[0mstarted\x1b[0m \
             \x1b[38;5;243magent_name=\x1b[0m\x1b[0magent-1\x1b[0m\n"
        );
    }

    #[test]
    fn test_colored_fatal_message_is_red() {
        let printer = TextPrinter::new(std::io::sink()).with_colors(true);
        let line = printer.format_line(TS, Level::Fatal, "oops", &Fields::new());
        assert_eq!(
            line,
            "\x1b[31m2024-05-01 10:20:30 FATAL \x1b[0m \x1b[31moops\x1b[0m\n"
        );
    }

    #[test]
    fn test_colored_level_codes() {
        let printer = TextPrinter::new(std::io::sink()).with_colors(true);
        for (level, code) in [
            (Level::Debug, GRAY),
            (Level::Notice, CYAN),
            (Level::Warn, YELLOW),
            (Level::Error, RED),
        ] {
            let line = printer.format_line(TS, level, "m", &Fields::new());
            assert!(line.starts_with(&format!("\x1b[{}m{}", code, TS)), "{line:?}");
        }
    }

    #[test]
    fn test_colored_prefix_segment() {
        let presenter = Arc::new(FieldPresenter::new().prefix("job"));
        let printer = TextPrinter::new(std::io::sink())
            .with_colors(true)
            .with_presenter(presenter);
        let line = printer.format_line(TS, Level::Warn, "m", &fields(&[("job", "42")]));
        assert_eq!(
            line,
            "\x1b[33m2024-05-01 10:20:30 WARN  \x1b[0m \x1b[38;5;243m42\x1b[0m \x1b[0mm\x1b[0m\n"
        );
    }

    #[test]
    fn test_prefix_fields() {
        let presenter = Arc::new(FieldPresenter::new().prefix("job").hide("secret"));
        let printer = TextPrinter::new(std::io::sink()).with_presenter(presenter);
        let line = printer.format_line(
            TS,
            Level::Info,
            "running",
            &fields(&[("step", "build"), ("job", "42"), ("secret", "x")]),
        );
        assert_eq!(line, "2024-05-01 10:20:30 INFO   42 running step=build\n");
    }

    #[test]
    fn test_message_newlines_escaped() {
        let printer = TextPrinter::new(std::io::sink());
        let line = printer.format_line(TS, Level::Info, "a\nERROR fake\tx", &Fields::new());
        assert_eq!(line, "2024-05-01 10:20:30 INFO   a\\nERROR fake\\tx\n");
        assert_eq!(line.matches('\n').count(), 1);
    }

    #[test]
    fn test_field_newlines_escaped() {
        let forged = "echo hi\n2024-01-01 00:00:00 ERROR  forged";
        let printer = TextPrinter::new(std::io::sink());
        let line = printer.format_line(TS, Level::Info, "ran", &fields(&[("cmd", forged)]));
        assert_eq!(line.matches('\n').count(), 1);
        assert!(line.ends_with("ran cmd=echo hi\\n2024-01-01 00:00:00 ERROR  forged\n"));

        let colored = TextPrinter::new(std::io::sink()).with_colors(true);
        let line = colored.format_line(TS, Level::Info, "ran", &fields(&[("a\rb", forged)]));
        assert_eq!(line.matches('\n').count(), 1);
        assert!(line.contains("a\\rb="));

        let tagged = TextPrinter::new(std::io::sink())
            .with_presenter(Arc::new(FieldPresenter::new().prefix("cmd")));
        let line = tagged.format_line(TS, Level::Info, "ran", &fields(&[("cmd", forged)]));
        assert_eq!(line.matches('\n').count(), 1);
    }

    #[test]
    fn test_set_colors_toggles() {
        let printer = TextPrinter::new(std::io::sink()).with_colors(true);
        printer.set_colors(false);
        assert!(!printer.colors());
        let line = printer.format_line(TS, Level::Error, "boom", &Fields::new());
        assert!(!line.contains('\x1b'));
    }
}
