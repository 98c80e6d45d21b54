use agenda::{LogLevel, Logger};
use std::io;
use std::sync::{Arc, Mutex};

/// Shared buffer standing in for stdout.
#[derive(Clone, Default)]
pub struct CapturedOutput(Arc<Mutex<Vec<u8>>>);

impl CapturedOutput {
    pub fn lines(&self) -> Vec<String> {
        String::from_utf8(self.0.lock().unwrap().clone())
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }
}

impl io::Write for CapturedOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub fn captured_logger(min_level: LogLevel) -> (Logger, CapturedOutput) {
    let output = CapturedOutput::default();
    let writer = output.clone();

    (
        Logger::with_writer(min_level, move || writer.clone()),
        output,
    )
}
