//! Point-file reader and writer.
//!
//! One point per line, `"<x> <y>"`: an optionally negative integer, a
//! single space, another integer, optional trailing whitespace. Lines that
//! do not match are skipped silently, as are coordinates outside the i32
//! range. Reading tries a fixed list of encodings and fails only when none
//! of them decodes the bytes; writing always emits UTF-8.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

use anglehull::geometry::Point;

/// Supported encodings, in the order they are tried.
#[derive(Clone, Copy, Debug)]
enum Encoding {
    Utf8,
    Latin1,
    Ascii,
    Utf16, // BOM decides; big-endian without one
    Utf16Be,
    Utf16Le,
}

const ENCODINGS: [Encoding; 6] = [
    Encoding::Utf8,
    Encoding::Latin1,
    Encoding::Ascii,
    Encoding::Utf16,
    Encoding::Utf16Be,
    Encoding::Utf16Le,
];

/// Read and parse a point file.
pub fn read_points(path: &Path) -> Result<Vec<Point>> {
    let bytes =
        fs::read(path).with_context(|| format!("cannot read {}", path.display()))?;
    for encoding in ENCODINGS {
        if let Some(text) = decode(encoding, &bytes) {
            return Ok(parse_lines(&text));
        }
    }
    bail!("{}: no supported encoding decodes this file", path.display());
}

/// Write points as UTF-8, one `"<x> <y>"` line each, creating parent
/// directories and replacing an existing file.
pub fn write_points(path: &Path, points: &[Point]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("cannot create {}", parent.display()))?;
        }
    }
    let mut body = String::new();
    for p in points {
        let _ = writeln!(body, "{} {}", p.x, p.y);
    }
    fs::write(path, body).with_context(|| format!("cannot write {}", path.display()))
}

fn decode(encoding: Encoding, bytes: &[u8]) -> Option<String> {
    match encoding {
        Encoding::Utf8 => std::str::from_utf8(bytes).ok().map(str::to_owned),
        // Every byte is a valid Latin-1 scalar, mapped 1:1 into Unicode.
        Encoding::Latin1 => Some(bytes.iter().map(|&b| char::from(b)).collect()),
        Encoding::Ascii => bytes
            .is_ascii()
            .then(|| bytes.iter().map(|&b| char::from(b)).collect()),
        Encoding::Utf16 => match bytes {
            [0xFE, 0xFF, rest @ ..] => decode_utf16(rest, u16::from_be_bytes),
            [0xFF, 0xFE, rest @ ..] => decode_utf16(rest, u16::from_le_bytes),
            _ => decode_utf16(bytes, u16::from_be_bytes),
        },
        Encoding::Utf16Be => decode_utf16(bytes, u16::from_be_bytes),
        Encoding::Utf16Le => decode_utf16(bytes, u16::from_le_bytes),
    }
}

fn decode_utf16(bytes: &[u8], read: fn([u8; 2]) -> u16) -> Option<String> {
    if bytes.len() % 2 != 0 {
        return None;
    }
    let units: Vec<u16> = bytes.chunks_exact(2).map(|c| read([c[0], c[1]])).collect();
    String::from_utf16(&units).ok()
}

fn parse_lines(text: &str) -> Vec<Point> {
    text.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<Point> {
    let (x, y) = line.trim_end().split_once(' ')?;
    Some(Point::new(parse_coordinate(x)?, parse_coordinate(y)?))
}

/// `-?\d+` only: no plus sign, no inner whitespace, and it must fit i32.
fn parse_coordinate(s: &str) -> Option<i32> {
    let digits = s.strip_prefix('-').unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn parses_matching_lines_and_skips_the_rest() {
        let text = "1 2\n-3 4\n5 -6  \nnot a point\n7\n8 9 10\n+1 2\n1  2\n\n11 12\n";
        assert_eq!(
            parse_lines(text),
            vec![p(1, 2), p(-3, 4), p(5, -6), p(11, 12)]
        );
    }

    #[test]
    fn skips_coordinates_outside_i32() {
        assert_eq!(parse_lines("2147483647 0\n2147483648 0\n"), vec![p(i32::MAX, 0)]);
        assert_eq!(parse_lines("-2147483648 0\n-2147483649 0\n"), vec![p(i32::MIN, 0)]);
    }

    #[test]
    fn decodes_utf8_and_latin1() {
        assert_eq!(decode(Encoding::Utf8, b"1 2\n").as_deref(), Some("1 2\n"));
        // Invalid UTF-8 still decodes as Latin-1.
        let bytes = [b'1', b' ', b'2', 0xFF, b'\n'];
        assert!(decode(Encoding::Utf8, &bytes).is_none());
        assert!(decode(Encoding::Latin1, &bytes).is_some());
    }

    #[test]
    fn ascii_rejects_high_bytes() {
        assert!(decode(Encoding::Ascii, b"12 34\n").is_some());
        assert!(decode(Encoding::Ascii, &[0xC3, 0xA4]).is_none());
    }

    #[test]
    fn decodes_utf16_with_and_without_bom() {
        let text = "1 2\n";
        let be: Vec<u8> = text.encode_utf16().flat_map(|u| u.to_be_bytes()).collect();
        let le: Vec<u8> = text.encode_utf16().flat_map(|u| u.to_le_bytes()).collect();
        assert_eq!(decode(Encoding::Utf16Be, &be).as_deref(), Some(text));
        assert_eq!(decode(Encoding::Utf16Le, &le).as_deref(), Some(text));

        let mut with_bom = vec![0xFF, 0xFE];
        with_bom.extend(&le);
        assert_eq!(decode(Encoding::Utf16, &with_bom).as_deref(), Some(text));
        assert_eq!(decode(Encoding::Utf16, &be).as_deref(), Some(text));
        assert!(decode(Encoding::Utf16, &be[..3]).is_none());
    }

    #[test]
    fn write_then_read_roundtrip() {
        let dir = std::env::temp_dir().join("anglehull-io-test");
        let path = dir.join("points.txt");
        let points = vec![p(0, 0), p(-17, 42), p(2_000_000, -9)];
        write_points(&path, &points).unwrap();
        assert_eq!(read_points(&path).unwrap(), points);
        std::fs::remove_file(&path).ok();
    }
}
