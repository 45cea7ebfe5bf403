use std::io::{self, BufRead};

/// A sequence of lines read one at a time, without lookahead.
///
/// `advance` moves to the next line and returns `false` once the input is exhausted. `current`
/// is the line most recently advanced to, or an empty slice before the first `advance`.
pub trait LineSource {
    fn advance(&mut self) -> io::Result<bool>;
    fn current(&self) -> &[u8];
}

impl<S: LineSource + ?Sized> LineSource for &mut S {
    fn advance(&mut self) -> io::Result<bool> {
        (**self).advance()
    }

    fn current(&self) -> &[u8] {
        (**self).current()
    }
}

/// Splits a byte stream into lines on `\n`, dropping a trailing `\r`.
///
/// The last line counts even without a terminating newline. The buffer is reused between lines,
/// so skipping a line costs no allocation.
pub struct ReaderSource<R> {
    reader: R,
    buffer: Vec<u8>,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> ReaderSource<R> {
        ReaderSource {
            reader,
            buffer: Vec::new(),
        }
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn advance(&mut self) -> io::Result<bool> {
        self.buffer.clear();

        if self.reader.read_until(b'\n', &mut self.buffer)? == 0 {
            return Ok(false);
        }

        if self.buffer.last() == Some(&b'\n') {
            self.buffer.pop();
        }
        if self.buffer.last() == Some(&b'\r') {
            self.buffer.pop();
        }

        Ok(true)
    }

    fn current(&self) -> &[u8] {
        &self.buffer
    }
}

/// Lines from an in-memory iterator, e.g. `["a", "b"].into_iter()`.
pub struct IterSource<I: Iterator> {
    lines: I,
    current: Option<I::Item>,
}

impl<I> IterSource<I>
where
    I: Iterator,
    I::Item: AsRef<[u8]>,
{
    pub fn new<T: IntoIterator<IntoIter = I>>(lines: T) -> IterSource<I> {
        IterSource {
            lines: lines.into_iter(),
            current: None,
        }
    }
}

impl<I> LineSource for IterSource<I>
where
    I: Iterator,
    I::Item: AsRef<[u8]>,
{
    fn advance(&mut self) -> io::Result<bool> {
        self.current = self.lines.next();
        Ok(self.current.is_some())
    }

    fn current(&self) -> &[u8] {
        self.current.as_ref().map_or(&[], |line| line.as_ref())
    }
}
