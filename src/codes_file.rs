//! Text rendering of a code table
//!
//! Symbols are written with `char::escape_debug`, so control characters
//! such as a newline stay on their entry's line.
//!
//! ```text
//! {
//! a=1,
//! b=0,
//! }
//! ```

use std::io::Write;

use crate::error::{CompressError, Result};
use crate::huffman::CodeTable;

pub fn write_codes<W: Write>(writer: &mut W, codes: &CodeTable) -> Result<()> {
    writeln!(writer, "{{")?;
    for (symbol, code) in codes.iter() {
        let ch = char::from_u32(symbol).ok_or(CompressError::InvalidSymbol(symbol))?;
        writeln!(writer, "{}={code}, ", ch.escape_debug())?;
    }
    writeln!(writer, "}}")?;
    Ok(())
}

pub fn codes_to_string(codes: &CodeTable) -> Result<String> {
    let mut buf = Vec::new();
    write_codes(&mut buf, codes)?;
    String::from_utf8(buf).map_err(|e| CompressError::SerializationError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::huffman::{build_codes, encode, symbols_from_text, Node};

    #[test]
    fn test_render_table() {
        let coding = encode(&symbols_from_text("aab")).unwrap();
        assert_eq!(codes_to_string(&coding.codes).unwrap(), "{\na=1, \nb=0, \n}\n");
    }

    #[test]
    fn test_control_characters_stay_on_one_line() {
        let coding = encode(&symbols_from_text("ab\n\n\t==")).unwrap();
        let rendered = codes_to_string(&coding.codes).unwrap();
        assert_eq!(rendered.lines().count(), coding.codes.len() + 2);
        assert!(rendered.lines().any(|line| line.starts_with("\\n=")));
        assert!(rendered.lines().any(|line| line.starts_with("\\t=")));
        assert!(rendered.lines().any(|line| line.starts_with("==")));
    }

    #[test]
    fn test_render_empty_table() {
        assert_eq!(codes_to_string(&CodeTable::default()).unwrap(), "{\n}\n");
    }

    #[test]
    fn test_surrogate_symbol_rejected() {
        let codes = build_codes(&Node::Leaf {
            symbol: 0xD800,
            weight: 1,
        });
        assert!(matches!(
            codes_to_string(&codes),
            Err(CompressError::InvalidSymbol(0xD800))
        ));
    }
}
