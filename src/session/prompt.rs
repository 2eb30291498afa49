use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Ask `question` until the answer parses as `T`, printing `retry` after each rejected answer.
///
/// Lines that are not valid UTF-8 are decoded lossily and rejected like any other bad answer.
/// Returns `Ok(None)` if the input is exhausted before a valid answer arrives.
pub fn prompt<T, R, W>(input: &mut R, out: &mut W, question: &str, retry: &str) -> io::Result<Option<T>>
where
    T: FromStr,
    R: BufRead,
    W: Write,
{
    write!(out, "{question}")?;
    out.flush()?;
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        match line.parse::<T>() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => {
                log::debug!("rejected answer {:?}", line.trim_end());
                write!(out, "{retry}")?;
                out.flush()?;
            }
        }
    }
}
