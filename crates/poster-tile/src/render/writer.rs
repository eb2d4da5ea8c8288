use std::io::{self, Write};

/// Line oriented PostScript output
pub struct PsWriter<W: Write> {
    inner: W,
}

impl<W: Write> From<W> for PsWriter<W> {
    fn from(inner: W) -> Self {
        Self { inner }
    }
}

impl<W: Write> PsWriter<W> {
    pub fn write_magic(&mut self) -> io::Result<()> {
        writeln!(self.inner, "%!PS-Adobe-3.0")
    }

    pub fn write_meta_field(&mut self, key: &str, value: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.inner, "%%{}: {}", key, value)
    }

    pub fn write_meta(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.inner, "%%{}", text)
    }

    pub fn write_comment(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.inner, "% {}", text)
    }

    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.inner, "{}", line)
    }

    pub fn blank_line(&mut self) -> io::Result<()> {
        writeln!(self.inner)
    }

    /// Write a block of procedure text as is
    pub fn write_code(&mut self, code: &str) -> io::Result<()> {
        self.inner.write_all(code.as_bytes())
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.inner.write_all(bytes)
    }

    /// `/name value def` for a number
    pub fn def_number(&mut self, name: &str, value: f64) -> io::Result<()> {
        writeln!(self.inner, "/{} {} def", name, ps_number(value))
    }

    pub fn def_bool(&mut self, name: &str, value: bool) -> io::Result<()> {
        writeln!(self.inner, "/{} {} def", name, value)
    }

    /// `/name (text) def` with the text escaped
    pub fn def_string(&mut self, name: &str, text: &str) -> io::Result<()> {
        writeln!(self.inner, "/{} {} def", name, ps_string(text))
    }

    pub fn inner_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

/// A PostScript string literal, parentheses included.
///
/// Backslashes and parentheses are escaped, anything outside printable
/// ASCII is written as an octal escape.
pub fn ps_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('(');
    for byte in text.bytes() {
        match byte {
            b'(' | b')' | b'\\' => {
                out.push('\\');
                out.push(byte as char);
            }
            b' '..=b'~' => out.push(byte as char),
            _ => out.push_str(&format!("\\{:03o}", byte)),
        }
    }
    out.push(')');
    out
}

/// A number with at most four decimals and no trailing zeros
pub fn ps_number(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let text = format!("{:.4}", value);
    let text = if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text.as_str()
    };
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}
