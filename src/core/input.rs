//! Line reader that survives arbitrary bytes.
//!
//! Logs are not always valid UTF-8; invalid sequences become U+FFFD instead
//! of ending the run.

use std::io::{self, BufRead};

/// Call `f` with every line of `src`, terminator (`\n` or `\r\n`) removed.
pub fn for_each_line<R, F>(mut src: R, mut f: F) -> io::Result<()>
where
    R: BufRead,
    F: FnMut(&str) -> io::Result<()>,
{
    let mut buf = Vec::<u8>::with_capacity(256);
    loop {
        buf.clear();
        if src.read_until(b'\n', &mut buf)? == 0 {
            return Ok(());
        }
        if buf.ends_with(b"\n") {
            buf.pop();
        }
        if buf.ends_with(b"\r") {
            buf.pop();
        }
        f(&String::from_utf8_lossy(&buf))?;
    }
}
