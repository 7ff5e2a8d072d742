use std::io::{self, BufRead};

use crate::{Error, Generator, Sink};

/// Generator over the lines of a buffered reader.
///
/// Lines end at `\n`, `\r\n` or a lone `\r`; the terminator is not part of
/// the produced string. A final line without terminator is produced as
/// well, an empty remainder is not.
///
/// The reader is consumed while driving, so a second run continues where
/// the first one stopped. A read failure or a line that is not valid UTF-8
/// ends the run; the cause is kept and can be fetched with
/// [`take_error`](#method.take_error).
#[derive(Debug)]
pub struct Lines<R> {
    reader: R,
    line: usize,
    skip_lf: bool,
    error: Option<Error>,
}

/// Read `reader` line by line.
pub fn read_lines<R>(reader: R) -> Lines<R>
where
    R: BufRead,
{
    Lines {
        reader,
        line: 0,
        skip_lf: false,
        error: None,
    }
}

impl<R> Lines<R>
where
    R: BufRead,
{
    /// Number of lines produced so far.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Return the error that ended the last run, if any.
    pub fn take_error(&mut self) -> Option<Error> {
        self.error.take()
    }

    pub fn into_inner(self) -> R {
        self.reader
    }

    fn read_line(&mut self, buf: &mut Vec<u8>) -> io::Result<bool> {
        loop {
            let (used, done) = {
                let available = match self.reader.fill_buf() {
                    Ok(available) => available,
                    Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                    Err(err) => return Err(err),
                };

                if available.is_empty() {
                    return Ok(!buf.is_empty());
                }

                let mut start = 0;
                if self.skip_lf {
                    self.skip_lf = false;

                    if available[0] == b'\n' {
                        start = 1;
                    }
                }

                let rest = &available[start..];
                match rest.iter().position(|b| *b == b'\n' || *b == b'\r') {
                    Some(pos) => {
                        buf.extend_from_slice(&rest[..pos]);
                        self.skip_lf = rest[pos] == b'\r';

                        (start + pos + 1, true)
                    }
                    None => {
                        buf.extend_from_slice(rest);

                        (available.len(), false)
                    }
                }
            };

            self.reader.consume(used);

            if done {
                return Ok(true);
            }
        }
    }
}

impl<R> Generator for Lines<R>
where
    R: BufRead,
{
    type Item = String;

    fn drive(&mut self, sink: &mut dyn Sink<String>) {
        loop {
            let mut buf = Vec::new();

            match self.read_line(&mut buf) {
                Ok(true) => (),
                Ok(false) => break,
                Err(source) => {
                    let line = self.line + 1;
                    log_warn!(line, error = %source, "failed to read line");

                    self.error = Some(Error::Io { line, source });

                    break;
                }
            }

            self.line += 1;

            let text = match String::from_utf8(buf) {
                Ok(text) => text,
                Err(source) => {
                    let line = self.line;
                    log_warn!(line, "line is not valid UTF-8");

                    self.error = Some(Error::InvalidUtf8 { line, source });

                    break;
                }
            };

            if sink.accept(text).is_stop() {
                break;
            }
        }
    }
}
