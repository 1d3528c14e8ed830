use eyre::Result;
use serde::Serialize;
use serde_json::ser::Formatter;
use std::io::{self, Write};

/// Single-line JSON with a space after each separator and ASCII-only strings:
/// `["A", "Caf\u00e9"]`. Characters outside the BMP become surrogate pairs.
#[derive(Debug, Default, Clone, Copy)]
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        let mut start = 0;
        for (i, c) in fragment.char_indices() {
            if c.is_ascii() {
                continue;
            }
            writer.write_all(fragment[start..i].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units).iter() {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = i + c.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}

/// Outputs serializable data as one line of JSON on stdout
pub fn output<T: Serialize>(data: &T) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    output_to_writer(data, &mut handle)?;
    handle.flush()?;

    Ok(())
}

/// Write one line of JSON to a custom writer
pub fn output_to_writer<T: Serialize, W: Write>(data: &T, writer: &mut W) -> Result<()> {
    let mut serializer = serde_json::Serializer::with_formatter(&mut *writer, SpacedFormatter);
    data.serialize(&mut serializer)?;
    writeln!(writer)?;

    Ok(())
}
