//! Calculator Tool
//!
//! Evaluates arithmetic expressions with a small recursive-descent parser.
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/') unary)*
//! unary   := ('-' | '+') unary | power
//! power   := primary ('^' unary)?
//! primary := number | '(' expr ')' | ident '(' expr ')' | ident
//! ```

use async_trait::async_trait;
use thiserror::Error;

use crate::error::Result;
use crate::tool::{ParameterSchema, Tool, ToolCall, ToolResult, ToolSchema};

/// Expression evaluation failure
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExprError {
    #[error("Unexpected end of expression")]
    UnexpectedEnd,

    #[error("Unexpected character '{0}' at position {1}")]
    UnexpectedChar(char, usize),

    #[error("Invalid number '{0}'")]
    InvalidNumber(String),

    #[error("Unknown identifier '{0}'")]
    UnknownIdentifier(String),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Result is not a finite number")]
    NotFinite,

    #[error("Expression nests deeper than {} levels", MAX_DEPTH)]
    TooDeep,
}

/// Nesting limit for parentheses, function calls and unary signs
const MAX_DEPTH: usize = 256;

/// Evaluate an arithmetic expression
pub fn evaluate(expr: &str) -> std::result::Result<f64, ExprError> {
    let mut parser = Parser {
        chars: expr.chars().collect(),
        pos: 0,
        depth: 0,
    };
    let value = parser.expr()?;
    parser.skip_ws();
    if let Some(&c) = parser.chars.get(parser.pos) {
        return Err(ExprError::UnexpectedChar(c, parser.pos));
    }
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ExprError::NotFinite)
    }
}

struct Parser {
    chars: Vec<char>,
    pos: usize,
    depth: usize,
}

impl Parser {
    fn skip_ws(&mut self) {
        while self.chars.get(self.pos).is_some_and(|c| c.is_whitespace()) {
            self.pos += 1;
        }
    }

    fn peek(&mut self) -> Option<char> {
        self.skip_ws();
        self.chars.get(self.pos).copied()
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: char) -> std::result::Result<(), ExprError> {
        match self.peek() {
            Some(c) if c == expected => {
                self.pos += 1;
                Ok(())
            }
            Some(c) => Err(ExprError::UnexpectedChar(c, self.pos)),
            None => Err(ExprError::UnexpectedEnd),
        }
    }

    fn expr(&mut self) -> std::result::Result<f64, ExprError> {
        let mut value = self.term()?;
        loop {
            if self.eat('+') {
                value += self.term()?;
            } else if self.eat('-') {
                value -= self.term()?;
            } else {
                return Ok(value);
            }
        }
    }

    fn term(&mut self) -> std::result::Result<f64, ExprError> {
        let mut value = self.unary()?;
        loop {
            if self.eat('*') {
                value *= self.unary()?;
            } else if self.eat('/') {
                let divisor = self.unary()?;
                if divisor == 0.0 {
                    return Err(ExprError::DivisionByZero);
                }
                value /= divisor;
            } else {
                return Ok(value);
            }
        }
    }

    /// Every nested construct passes through here, so this bounds recursion
    fn unary(&mut self) -> std::result::Result<f64, ExprError> {
        if self.depth >= MAX_DEPTH {
            return Err(ExprError::TooDeep);
        }
        self.depth += 1;
        let value = self.signed();
        self.depth -= 1;
        value
    }

    fn signed(&mut self) -> std::result::Result<f64, ExprError> {
        if self.eat('-') {
            return Ok(-self.unary()?);
        }
        if self.eat('+') {
            return self.unary();
        }
        self.power()
    }

    fn power(&mut self) -> std::result::Result<f64, ExprError> {
        let base = self.primary()?;
        if self.eat('^') {
            // right-associative: 2^3^2 == 2^9
            let exponent = self.unary()?;
            return Ok(base.powf(exponent));
        }
        Ok(base)
    }

    fn primary(&mut self) -> std::result::Result<f64, ExprError> {
        match self.peek() {
            None => Err(ExprError::UnexpectedEnd),
            Some('(') => {
                self.pos += 1;
                let value = self.expr()?;
                self.expect(')')?;
                Ok(value)
            }
            Some(c) if c.is_ascii_digit() || c == '.' => self.number(),
            Some(c) if c.is_ascii_alphabetic() => self.identifier(),
            Some(c) => Err(ExprError::UnexpectedChar(c, self.pos)),
        }
    }

    fn number(&mut self) -> std::result::Result<f64, ExprError> {
        let start = self.pos;
        while self
            .chars
            .get(self.pos)
            .is_some_and(|c| c.is_ascii_digit() || *c == '.')
        {
            self.pos += 1;
        }
        let text: String = self.chars[start..self.pos].iter().collect();
        text.parse::<f64>()
            .map_err(|_| ExprError::InvalidNumber(text))
    }

    fn identifier(&mut self) -> std::result::Result<f64, ExprError> {
        let start = self.pos;
        while self
            .chars
            .get(self.pos)
            .is_some_and(|c| c.is_ascii_alphanumeric() || *c == '_')
        {
            self.pos += 1;
        }
        let name: String = self.chars[start..self.pos].iter().collect::<String>().to_lowercase();

        if self.peek() == Some('(') {
            self.pos += 1;
            let arg = self.expr()?;
            self.expect(')')?;
            return match name.as_str() {
                "sqrt" => Ok(arg.sqrt()),
                "abs" => Ok(arg.abs()),
                "ln" => Ok(arg.ln()),
                "log10" | "log" => Ok(arg.log10()),
                "sin" => Ok(arg.sin()),
                "cos" => Ok(arg.cos()),
                "tan" => Ok(arg.tan()),
                _ => Err(ExprError::UnknownIdentifier(name)),
            };
        }

        match name.as_str() {
            "pi" => Ok(std::f64::consts::PI),
            "e" => Ok(std::f64::consts::E),
            _ => Err(ExprError::UnknownIdentifier(name)),
        }
    }
}

/// Render without a trailing ".0" for whole numbers
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Calculator tool - evaluates mathematical expressions
pub struct CalculatorTool;

#[async_trait]
impl Tool for CalculatorTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "calculator".into(),
            description: "Evaluate a mathematical expression. Supports + - * / ^, parentheses, \
                          sqrt, abs, ln, log10, sin, cos, tan, and the constants pi and e."
                .into(),
            parameters: vec![ParameterSchema::new(
                "expression",
                "string",
                "Expression to evaluate (e.g., 'sqrt(1764)', '50 * 50')",
            )
            .required()],
            category: Some("math".into()),
            has_side_effects: false,
        }
    }

    async fn execute(&self, call: &ToolCall) -> Result<ToolResult> {
        let expr = call.require_str("expression")?;

        match evaluate(expr) {
            Ok(value) => Ok(ToolResult::success(
                "calculator",
                format!("{} = {}", expr.trim(), format_number(value)),
            )
            .with_data(serde_json::json!({ "expression": expr, "result": value }))),
            Err(e) => Ok(ToolResult::failure("calculator", e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(expr: &str, expected: f64) {
        let value = evaluate(expr).unwrap();
        assert!((value - expected).abs() < 1e-9, "{expr} = {value}, expected {expected}");
    }

    #[test]
    fn test_precedence() {
        approx("2 + 2", 4.0);
        approx("10 * 5", 50.0);
        approx("(2 + 3) * 4", 20.0);
        approx("2 + 3 * 4", 14.0);
        approx("10 - 4 - 3", 3.0);
        approx("100 / 10 / 5", 2.0);
    }

    #[test]
    fn test_power_and_unary() {
        approx("2 ^ 8", 256.0);
        approx("2 ^ 3 ^ 2", 512.0);
        approx("-2 ^ 2", -4.0);
        approx("2 ^ -1", 0.5);
        approx("-(3 + 4)", -7.0);
        approx("3 - -2", 5.0);
    }

    #[test]
    fn test_functions_and_constants() {
        approx("sqrt(1764)", 42.0);
        approx("abs(-3.5)", 3.5);
        approx("log10(1000)", 3.0);
        approx("cos(0)", 1.0);
        approx("2 * pi", std::f64::consts::TAU);
        approx("ln(e)", 1.0);
    }

    #[test]
    fn test_errors() {
        assert_eq!(evaluate("1 / 0"), Err(ExprError::DivisionByZero));
        assert_eq!(evaluate("2 +"), Err(ExprError::UnexpectedEnd));
        assert_eq!(evaluate("(1 + 2"), Err(ExprError::UnexpectedEnd));
        assert_eq!(evaluate("2 2"), Err(ExprError::UnexpectedChar('2', 2)));
        assert_eq!(evaluate("foo(2)"), Err(ExprError::UnknownIdentifier("foo".into())));
        assert_eq!(evaluate("1.2.3"), Err(ExprError::InvalidNumber("1.2.3".into())));
        assert_eq!(evaluate("sqrt(-1)"), Err(ExprError::NotFinite));
    }

    #[test]
    fn test_nesting_limit() {
        let nested = |n: usize| format!("{}1{}", "(".repeat(n), ")".repeat(n));
        approx(&nested(100), 1.0);
        assert_eq!(evaluate(&nested(200_000)), Err(ExprError::TooDeep));
        assert_eq!(evaluate(&"-".repeat(200_000)), Err(ExprError::TooDeep));
        assert_eq!(
            evaluate(&format!("{}4{}", "sqrt(".repeat(5_000), ")".repeat(5_000))),
            Err(ExprError::TooDeep)
        );
    }

    #[tokio::test]
    async fn test_deep_nesting_is_tool_failure() {
        let expr = format!("{}1{}", "(".repeat(200_000), ")".repeat(200_000));
        let call = ToolCall::new("calculator").with_arg("expression", expr);
        let result = CalculatorTool.execute(&call).await.unwrap();
        assert!(!result.success);
        assert_eq!(result.output, "Expression nests deeper than 256 levels");
    }

    #[tokio::test]
    async fn test_tool_output() {
        let call = ToolCall::new("calculator").with_arg("expression", "sqrt(1764)");
        let result = CalculatorTool.execute(&call).await.unwrap();
        assert!(result.success);
        assert_eq!(result.output, "sqrt(1764) = 42");

        let call = ToolCall::new("calculator").with_arg("expression", "50 * 50");
        let result = CalculatorTool.execute(&call).await.unwrap();
        assert_eq!(result.output, "50 * 50 = 2500");
    }

    #[tokio::test]
    async fn test_tool_reports_failure_as_result() {
        let call = ToolCall::new("calculator").with_arg("expression", "1 / 0");
        let result = CalculatorTool.execute(&call).await.unwrap();
        assert!(!result.success);
        assert_eq!(result.output, "Division by zero");
    }
}
