use std::sync::mpsc::Sender;

/// Destination for the human-readable audit log of a pass.
pub trait LogSink {
    fn log(&mut self, line: String);
}

impl LogSink for Vec<String> {
    fn log(&mut self, line: String) {
        self.push(line);
    }
}

/// Streams lines to another thread. A hung-up receiver just drops them.
impl LogSink for Sender<String> {
    fn log(&mut self, line: String) {
        let _ = self.send(line);
    }
}
