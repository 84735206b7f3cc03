//! CSS rule-sheet parsing.
//!
//! # Motivation
//!
//! Rule lists in YAML are explicit but verbose. CSS is the natural notation
//! for "selector plus declarations", so formatting rules can also be declared
//! as a small stylesheet and parsed into the same [`CellRule`] list.
//!
//! The parser is built on `cssparser` (the tokenizer used by Firefox), which
//! handles comments, escapes, and string syntax for free.
//!
//! # Grammar
//!
//! A selector is an optional row-parity ident (`any`, `odd`, `even`, or `*`)
//! followed by an optional `.field` class naming a column. Comma lists are
//! allowed. Declarations are kept verbatim as `property: value` pairs — no
//! property whitelist, since the output medium is inline HTML styles.
//!
//! ```css
//! .price       { text-align: right; }          /* any row, column `price`  */
//! odd          { background-color: #F3F6FB; }  /* odd rows, every column   */
//! even .status { color: #1B7F3A; }             /* even rows, one column    */
//! *            { font-size: 9pt; }             /* every cell               */
//! ```
//!
//! An unknown parity ident is a configuration error and fails the whole
//! parse; a malformed declaration inside a block is dropped silently, the
//! same degradation rendering applies to unmatched rules.

use cssparser::{
    AtRuleParser, CowRcStr, DeclarationParser, ParseError, Parser, ParserInput, ParserState,
    QualifiedRuleParser, RuleBodyItemParser, RuleBodyParser, Token,
};

use super::rule::CellRule;
use super::selector::{ColumnSelector, RowSelector};
use crate::error::MarkupError;

/// Parses a CSS rule sheet into an ordered rule list.
///
/// # Example
///
/// ```rust
/// use markout::{parse_css, CellRule};
///
/// let rules = parse_css("odd { background-color: #F3F6FB; }").unwrap();
/// assert_eq!(rules, vec![CellRule::odd("background-color", "#F3F6FB")]);
/// ```
pub fn parse_css(css: &str) -> Result<Vec<CellRule>, MarkupError> {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);

    let mut sheet_parser = RuleSheetParser { rules: Vec::new() };

    let rule_list_parser = cssparser::StyleSheetParser::new(&mut parser, &mut sheet_parser);

    for result in rule_list_parser {
        if let Err(e) = result {
            return Err(MarkupError::StylesheetError(format!(
                "CSS parse error: {:?}",
                e
            )));
        }
    }

    Ok(sheet_parser.rules)
}

struct RuleSheetParser {
    rules: Vec<CellRule>,
}

impl<'i> QualifiedRuleParser<'i> for RuleSheetParser {
    type Prelude = Vec<(RowSelector, ColumnSelector)>;
    type QualifiedRule = ();
    type Error = ();

    fn parse_prelude<'t>(
        &mut self,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Prelude, ParseError<'i, Self::Error>> {
        let mut selectors = Vec::new();
        let mut row = RowSelector::Any;
        let mut column = ColumnSelector::Any;
        let mut seen = false;

        loop {
            let token = match input.next() {
                Ok(t) => t,
                Err(_) => break, // End of prelude
            };
            match token {
                Token::Ident(name) => {
                    let ident = name.as_ref().to_string();
                    match ident.parse::<RowSelector>() {
                        Ok(parity) => row = parity,
                        Err(_) => return Err(input.new_custom_error::<(), ()>(())),
                    }
                    seen = true;
                }
                Token::Delim('*') => {
                    seen = true;
                }
                Token::Delim('.') => {
                    let name = input.expect_ident()?;
                    column = ColumnSelector::Field(name.as_ref().to_string());
                    seen = true;
                }
                Token::Comma => {
                    if !seen {
                        return Err(input.new_custom_error::<(), ()>(()));
                    }
                    selectors.push((row, column.clone()));
                    row = RowSelector::Any;
                    column = ColumnSelector::Any;
                    seen = false;
                }
                Token::WhiteSpace(_) | Token::Comment(_) => continue,
                _ => {
                    // Ignore other tokens
                }
            }
        }

        if !seen {
            return Err(input.new_custom_error::<(), ()>(()));
        }
        selectors.push((row, column));
        Ok(selectors)
    }

    fn parse_block<'t>(
        &mut self,
        prelude: Self::Prelude,
        _start: &ParserState,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::QualifiedRule, ParseError<'i, Self::Error>> {
        let mut decl_parser = RuleDeclarationParser;
        let body_parser = RuleBodyParser::new(input, &mut decl_parser);

        // Invalid declarations are skipped, valid ones kept in source order.
        let declarations: Vec<(String, String)> = body_parser.flatten().collect();

        for (row, column) in prelude {
            for (property, value) in &declarations {
                self.rules.push(CellRule {
                    row,
                    column: column.clone(),
                    property: property.clone(),
                    value: value.clone(),
                });
            }
        }
        Ok(())
    }
}

// At-rules are not part of the grammar; the default trait impls reject them.
impl<'i> AtRuleParser<'i> for RuleSheetParser {
    type Prelude = ();
    type AtRule = ();
    type Error = ();
}

struct RuleDeclarationParser;

impl<'i> DeclarationParser<'i> for RuleDeclarationParser {
    type Declaration = (String, String);
    type Error = ();

    fn parse_value<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Declaration, ParseError<'i, Self::Error>> {
        // Keep the raw value text; it is emitted verbatim into inline styles.
        let start = input.position();
        while input.next().is_ok() {}
        let value = input.slice_from(start).trim().to_string();

        if value.is_empty() {
            return Err(input.new_custom_error::<(), ()>(()));
        }
        Ok((name.as_ref().to_string(), value))
    }
}

impl<'i> AtRuleParser<'i> for RuleDeclarationParser {
    type Prelude = ();
    type AtRule = (String, String);
    type Error = ();
}

impl<'i> QualifiedRuleParser<'i> for RuleDeclarationParser {
    type Prelude = ();
    type QualifiedRule = (String, String);
    type Error = ();
}

impl<'i> RuleBodyItemParser<'i, (String, String), ()> for RuleDeclarationParser {
    fn parse_declarations(&self) -> bool {
        true
    }
    fn parse_qualified(&self) -> bool {
        false
    }
}
