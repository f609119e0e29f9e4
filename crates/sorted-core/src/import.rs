//! Whitespace-separated number import
//!
//! Every token is parsed on its own. Tokens that are not a finite decimal
//! number (including `inf` and `NaN`) are skipped without failing the batch;
//! the number of values actually inserted is the only feedback.

use crate::buffer::OrderedNumericBuffer;
use crate::error::Result;
use std::io::BufRead;
use tracing::debug;

/// Parse a single token, accepting only finite numbers
pub fn parse_token(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|x| x.is_finite())
}

/// Iterate the finite numbers in `text`, skipping tokens that fail to parse
pub fn parse_tokens(text: &str) -> impl Iterator<Item = f64> + '_ {
    text.split_whitespace().filter_map(|token| {
        let parsed = parse_token(token);
        if parsed.is_none() {
            debug!(token, "skipping unparseable token");
        }
        parsed
    })
}

impl OrderedNumericBuffer {
    /// Insert every finite number in `text`; returns how many were inserted
    pub fn insert_tokens(&mut self, text: &str) -> usize {
        let mut inserted = 0;
        for x in parse_tokens(text) {
            self.insert(x);
            inserted += 1;
        }
        inserted
    }

    /// Insert every finite number read from `reader`, line by line
    pub fn insert_from_reader<R: BufRead>(&mut self, reader: R) -> Result<usize> {
        let mut inserted = 0;
        for line in reader.lines() {
            inserted += self.insert_tokens(&line?);
        }
        debug!(inserted, len = self.len(), "imported values");
        Ok(inserted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_token() {
        assert_eq!(parse_token("3.5"), Some(3.5));
        assert_eq!(parse_token("-2"), Some(-2.0));
        assert_eq!(parse_token("1e3"), Some(1000.0));
        assert_eq!(parse_token("abc"), None);
        assert_eq!(parse_token("1.2.3"), None);
        assert_eq!(parse_token("inf"), None);
        assert_eq!(parse_token("NaN"), None);
    }

    #[test]
    fn test_parse_tokens_skips_bad_tokens() {
        let values: Vec<f64> = parse_tokens("1 two 3\t4.5\n\nx -6").collect();
        assert_eq!(values, vec![1.0, 3.0, 4.5, -6.0]);
    }

    #[test]
    fn test_insert_tokens() {
        let mut buffer = OrderedNumericBuffer::new();
        let inserted = buffer.insert_tokens("9 1 oops 5");
        assert_eq!(inserted, 3);
        assert_eq!(buffer.as_slice(), &[1.0, 5.0, 9.0]);

        assert_eq!(buffer.insert_tokens("   "), 0);
        assert_eq!(buffer.len(), 3);
    }

    #[test]
    fn test_insert_from_reader() {
        let mut buffer = OrderedNumericBuffer::new();
        let input = Cursor::new("13 51\n98 bad\n\n-1.5\n");
        let inserted = buffer.insert_from_reader(input).unwrap();
        assert_eq!(inserted, 4);
        assert_eq!(buffer.as_slice(), &[-1.5, 13.0, 51.0, 98.0]);
    }
}
