//! Hex/ASCII dump of raw datagrams

use std::fmt::Write as _;

const BYTES_PER_LINE: usize = 16;

/// Render `buf` as a canonical hex dump
///
/// ```text
/// 00000000  2f 74 65 73 74 2f 73 74  72 69 6e 67 00 00 00 00  |/test/string....|
/// 00000010  2c 69 00 00 00 00 00 01                           |,i......        |
/// 00000018
/// ```
///
/// Runs of identical 16-byte lines collapse into a single `*`. The last
/// line is the total length.
#[must_use]
pub fn hexdump(buf: &[u8]) -> String {
    let mut out = String::new();
    let mut previous: Option<&[u8]> = None;
    let mut collapsed = false;

    for (line, chunk) in buf.chunks(BYTES_PER_LINE).enumerate() {
        if previous == Some(chunk) {
            if !collapsed {
                out.push_str("*\n");
                collapsed = true;
            }
            continue;
        }
        previous = Some(chunk);
        collapsed = false;

        let (left, right) = chunk.split_at(chunk.len().min(BYTES_PER_LINE / 2));
        let _ = writeln!(
            out,
            "{:08x}  {:<23}  {:<23}  |{:<16}|",
            line * BYTES_PER_LINE,
            hex_group(left),
            hex_group(right),
            printable(chunk),
        );
    }

    let _ = write!(out, "{:08x}", buf.len());
    out
}

fn hex_group(bytes: &[u8]) -> String {
    let mut group = String::with_capacity(bytes.len() * 3);
    for (i, byte) in bytes.iter().enumerate() {
        if i > 0 {
            group.push(' ');
        }
        let _ = write!(group, "{byte:02x}");
    }
    group
}

fn printable(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| {
            if (0x20..0x7F).contains(&b) {
                char::from(b)
            } else {
                '.'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(hexdump(&[]), "00000000");
    }

    #[test]
    fn test_partial_line() {
        let dump = hexdump(b"/a\0\0,\0\0\0");
        assert_eq!(
            dump,
            "00000000  2f 61 00 00 2c 00 00 00                           |/a..,...        |\n00000008"
        );
    }

    #[test]
    fn test_two_groups() {
        let dump = hexdump(b"/test/string\0\0\0\0,i\0\0\0\0\0\x01");
        let lines: Vec<&str> = dump.lines().collect();

        assert_eq!(
            lines[0],
            "00000000  2f 74 65 73 74 2f 73 74  72 69 6e 67 00 00 00 00  |/test/string....|"
        );
        assert!(lines[1].starts_with("00000010  2c 69 00 00 00 00 00 01  "));
        assert_eq!(lines[2], "00000018");
    }

    #[test]
    fn test_repeated_lines_collapse() {
        let mut buf = vec![0u8; 64];
        buf.extend_from_slice(b"/end");
        let dump = hexdump(&buf);
        let lines: Vec<&str> = dump.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("00000000  00 00"));
        assert_eq!(lines[1], "*");
        assert!(lines[2].starts_with("00000040  2f 65 6e 64"));
        assert_eq!(lines[3], "00000044");
    }
}
