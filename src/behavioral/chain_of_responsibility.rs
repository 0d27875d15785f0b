// Pattern: Chain of Responsibility
// A request travels along a chain until some handler takes it.

use crate::transcript::Transcript;

pub trait Logger {
    /// Returns the name of the handler that took the message, if any.
    fn log(&self, message: &str, out: &mut Transcript) -> Option<&'static str>;
}

type Next = Option<Box<dyn Logger>>;

fn pass(next: &Next, message: &str, out: &mut Transcript) -> Option<&'static str> {
    next.as_ref().and_then(|logger| logger.log(message, out))
}

#[derive(Default)]
pub struct ConsoleLogger {
    next: Next,
}

impl ConsoleLogger {
    pub fn new(next: impl Logger + 'static) -> Self {
        Self {
            next: Some(Box::new(next)),
        }
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, message: &str, out: &mut Transcript) -> Option<&'static str> {
        if message.contains("INFO") {
            out.line(format!("Console: {message}"));
            Some("console")
        } else {
            pass(&self.next, message, out)
        }
    }
}

#[derive(Default)]
pub struct FileLogger {
    next: Next,
}

impl FileLogger {
    pub fn new(next: impl Logger + 'static) -> Self {
        Self {
            next: Some(Box::new(next)),
        }
    }
}

impl Logger for FileLogger {
    fn log(&self, message: &str, out: &mut Transcript) -> Option<&'static str> {
        if message.contains("DEBUG") {
            out.line(format!("File: {message}"));
            Some("file")
        } else {
            pass(&self.next, message, out)
        }
    }
}

/// End of the chain; takes everything that reaches it.
pub struct EmailLogger;

impl Logger for EmailLogger {
    fn log(&self, message: &str, out: &mut Transcript) -> Option<&'static str> {
        out.line(format!("Email: {message}"));
        Some("email")
    }
}

pub fn default_chain() -> ConsoleLogger {
    ConsoleLogger::new(FileLogger::new(EmailLogger))
}

pub fn demo(out: &mut Transcript) {
    let chain = default_chain();
    for message in [
        "INFO: All good",
        "DEBUG: Something to watch",
        "Debug: matching is case-sensitive",
        "ERROR: Something went wrong",
    ] {
        chain.log(message, out);
    }
}
