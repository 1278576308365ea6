use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::capture::CaptureError;

#[derive(Debug, Error)]
pub enum ConsoleError {
    /// The user closed input (end of file) while a prompt was waiting.
    #[error("input cancelled")]
    Cancelled,
    #[error(transparent)]
    Capture(#[from] CaptureError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Line-oriented terminal collaborator used by every prompt and operation.
pub trait LineIo {
    /// Show `prompt` without a newline and block until one line is read.
    /// The returned text has its line terminator removed.
    fn read_line(&mut self, prompt: &str) -> Result<String, ConsoleError>;

    fn write_line(&mut self, line: &str) -> Result<(), ConsoleError>;
}

/// [`LineIo`] over any buffered reader and writer; stdin/stdout in the binary.
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> LineIo for Console<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut raw = Vec::new();
        if self.reader.read_until(b'\n', &mut raw)? == 0 {
            tracing::debug!("end of input while waiting for a line");
            return Err(ConsoleError::Cancelled);
        }
        if raw.ends_with(b"\n") {
            raw.pop();
            if raw.ends_with(b"\r") {
                raw.pop();
            }
        }
        // Invalid UTF-8 is replaced rather than failing the session.
        Ok(String::from_utf8_lossy(&raw).into_owned())
    }

    fn write_line(&mut self, line: &str) -> Result<(), ConsoleError> {
        writeln!(self.writer, "{}", line)?;
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn read_line_strips_terminators_and_echoes_prompt() {
        let mut console = Console::new(Cursor::new(b"first\r\nsecond\n".to_vec()), Vec::new());

        assert_eq!(console.read_line("> ").unwrap(), "first");
        assert_eq!(console.read_line("> ").unwrap(), "second");
        assert_eq!(String::from_utf8(console.into_writer()).unwrap(), "> > ");
    }

    #[test]
    fn last_line_without_newline_is_still_read() {
        let mut console = Console::new(Cursor::new(b"tail".to_vec()), Vec::new());
        assert_eq!(console.read_line("").unwrap(), "tail");
    }

    #[test]
    fn invalid_utf8_is_decoded_lossily() {
        let mut console = Console::new(Cursor::new(b"Caf\xe9\nok\n".to_vec()), Vec::new());

        assert_eq!(console.read_line("").unwrap(), "Caf\u{FFFD}");
        assert_eq!(console.read_line("").unwrap(), "ok");
    }

    #[test]
    fn end_of_input_is_cancellation() {
        let mut console = Console::new(Cursor::new(Vec::new()), Vec::new());
        assert!(matches!(
            console.read_line("Title: "),
            Err(ConsoleError::Cancelled)
        ));
    }

    #[test]
    fn write_line_appends_newline() {
        let mut console = Console::new(Cursor::new(Vec::new()), Vec::new());
        console.write_line("hello").unwrap();
        assert_eq!(console.writer().as_slice(), b"hello\n");
    }
}
