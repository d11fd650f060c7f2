use std::{
    io::{self, Read, Write},
    process::ChildStderr,
    thread,
};

use crate::append_desktop_log;

// Byte-for-byte copy; the stream may carry non-UTF-8 bytes.
pub(crate) fn forward_diagnostics<R, W>(source: R, sink: W) -> io::Result<u64>
where
    R: Read,
    W: Write,
{
    let mut source = source;
    let mut sink = sink;
    let forwarded = io::copy(&mut source, &mut sink)?;
    sink.flush()?;
    Ok(forwarded)
}

pub(crate) fn spawn_stderr_pump(stderr: ChildStderr) {
    thread::spawn(move || {
        if let Err(error) = forward_diagnostics(stderr, io::stdout()) {
            append_desktop_log(&format!("backend diagnostics forwarding stopped: {error}"));
        }
    });
}

#[cfg(test)]
mod tests {
    use super::forward_diagnostics;

    #[test]
    fn forward_diagnostics_copies_bytes_exactly() {
        let source: &[u8] = b"Traceback (most recent call last):\n  boom\n";
        let mut sink = Vec::new();

        let forwarded =
            forward_diagnostics(source, &mut sink).expect("forwarding should succeed");

        assert_eq!(forwarded, source.len() as u64);
        assert_eq!(sink, source);
    }

    #[test]
    fn forward_diagnostics_preserves_non_utf8_bytes() {
        let source: &[u8] = &[0xff, 0xfe, b'\n', 0x00, 0x80];
        let mut sink = Vec::new();

        forward_diagnostics(source, &mut sink).expect("forwarding should succeed");

        assert_eq!(sink, source);
    }

    #[test]
    fn forward_diagnostics_handles_empty_stream() {
        let source: &[u8] = b"";
        let mut sink = Vec::new();

        let forwarded =
            forward_diagnostics(source, &mut sink).expect("forwarding should succeed");

        assert_eq!(forwarded, 0);
        assert!(sink.is_empty());
    }
}
