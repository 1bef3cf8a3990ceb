use super::operator::Operator;
use crate::error::ErrorKind;
use crate::lexer::Cursor;
use crate::runtime::ErrorChannel;
use std::marker::PhantomData;

/// Recursive-descent rules for prefix arithmetic, evaluated as they parse
///
/// ```text
/// expression := '(' expression ')'
///             | digit+
///             | operator expression expression
/// operator   := '+' | '-' | '*' | '/'
/// ```
///
/// Every rule reports failure through the channel `C`; the rules themselves
/// are identical for every channel.
pub struct Grammar<'a, C: ErrorChannel> {
    cursor: Cursor<'a>,
    channel: PhantomData<C>,
}

impl<'a, C: ErrorChannel> Grammar<'a, C> {
    /// Creates a grammar reading `source` from its first byte
    pub fn new(source: &'a str) -> Self {
        Grammar {
            cursor: Cursor::new(source),
            channel: PhantomData,
        }
    }

    /// Byte offset reached so far
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Parses and evaluates one expression
    pub fn expression(&mut self) -> Result<i64, C::Error> {
        self.cursor.skip_whitespace();
        match self.cursor.peek() {
            b'(' => {
                self.advance()?;
                self.cursor.skip_whitespace();
                let value = self.expression()?;
                self.cursor.skip_whitespace();
                self.expect(b')')?;
                Ok(value)
            }
            b'0'..=b'9' => self.number(),
            _ => self.inner_expression(),
        }
    }

    /// Prefix form: operator, left operand, right operand
    fn inner_expression(&mut self) -> Result<i64, C::Error> {
        let op = self.operation()?;
        let left = self.expression()?;
        let right = self.expression()?;
        Ok(op.apply(left, right))
    }

    fn operation(&mut self) -> Result<Operator, C::Error> {
        let c = self.advance()?;
        Operator::from_byte(c).ok_or_else(|| C::raise(ErrorKind::InvalidOperator))
    }

    /// Folds a run of decimal digits; an empty run is 0
    fn number(&mut self) -> Result<i64, C::Error> {
        let mut result: i64 = 0;
        while self.cursor.peek().is_ascii_digit() {
            let c = self.advance()?;
            result = result.wrapping_mul(10).wrapping_add(i64::from(c - b'0'));
        }
        Ok(result)
    }

    /// Consumes one byte that must equal `expected`.
    ///
    /// End of input stays `UnexpectedEof`; only a mismatched byte is
    /// `InvalidCharacter`.
    fn expect(&mut self, expected: u8) -> Result<u8, C::Error> {
        let c = self.advance()?;
        if c != expected {
            return Err(C::raise(ErrorKind::InvalidCharacter));
        }
        Ok(c)
    }

    fn advance(&mut self) -> Result<u8, C::Error> {
        self.cursor.advance().map_err(C::raise)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::{Propagate, Unwind};

    fn grammar(source: &str) -> Grammar<'_, Propagate> {
        Grammar::new(source)
    }

    #[test]
    fn test_number() {
        let mut g = grammar("1234 5");
        assert_eq!(g.number(), Ok(1234));
        assert_eq!(g.position(), 4);
    }

    #[test]
    fn test_number_with_no_digits() {
        let mut g = grammar("x");
        assert_eq!(g.number(), Ok(0));
        assert_eq!(g.position(), 0);

        let mut g = grammar("");
        assert_eq!(g.number(), Ok(0));
    }

    #[test]
    fn test_number_leading_zeros() {
        assert_eq!(grammar("007").number(), Ok(7));
    }

    #[test]
    fn test_number_wraps_on_overflow() {
        // i64::MAX + 1
        assert_eq!(grammar("9223372036854775808").number(), Ok(i64::MIN));
    }

    #[test]
    fn test_operation() {
        assert_eq!(grammar("*").operation(), Ok(Operator::Mul));
        assert_eq!(grammar("&").operation(), Err(ErrorKind::InvalidOperator));
        assert_eq!(grammar("").operation(), Err(ErrorKind::UnexpectedEof));
    }

    #[test]
    fn test_operation_does_not_skip_whitespace() {
        assert_eq!(grammar(" +").operation(), Err(ErrorKind::InvalidOperator));
    }

    #[test]
    fn test_expect() {
        assert_eq!(grammar(")").expect(b')'), Ok(b')'));
        assert_eq!(grammar("x").expect(b')'), Err(ErrorKind::InvalidCharacter));
        assert_eq!(grammar("").expect(b')'), Err(ErrorKind::UnexpectedEof));
    }

    #[test]
    fn test_expression_forms() {
        assert_eq!(grammar("42").expression(), Ok(42));
        assert_eq!(grammar("  (42)").expression(), Ok(42));
        assert_eq!(grammar("((( 42 )))").expression(), Ok(42));
        assert_eq!(grammar("+ 3 4").expression(), Ok(7));
        assert_eq!(grammar("+3 4").expression(), Ok(7));
        assert_eq!(grammar("- 1 * 2 3").expression(), Ok(-5));
    }

    #[test]
    fn test_expression_stops_after_first_expression() {
        let mut g = grammar("+ 1 2 garbage");
        assert_eq!(g.expression(), Ok(3));
        assert_eq!(g.position(), 5);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(grammar("").expression(), Err(ErrorKind::UnexpectedEof));
        assert_eq!(grammar("   ").expression(), Err(ErrorKind::UnexpectedEof));
    }

    #[test]
    fn test_first_failure_wins() {
        // Operator is checked before operands are read
        assert_eq!(grammar("& (").expression(), Err(ErrorKind::InvalidOperator));
        // Left operand fails before the right one is attempted
        assert_eq!(grammar("+ & x").expression(), Err(ErrorKind::InvalidOperator));
        // Inner expression fails before the closing paren is checked
        assert_eq!(grammar("(+ 1 x").expression(), Err(ErrorKind::InvalidOperator));
    }

    #[test]
    fn test_unwinding_grammar_matches() {
        for source in ["* (+ 1 2) 5", "+ 3", "& 1 2", "(+ 1 2 x", "(+ 1 2 "] {
            let expected = Propagate::catch(|| Grammar::<Propagate>::new(source).expression());
            let actual = Unwind::catch(|| Grammar::<Unwind>::new(source).expression());
            assert_eq!(actual, expected, "source: {:?}", source);
        }
    }
}
