use log::{debug, trace};

use super::*;

pub(super) fn parse_document<I>(parser: &mut Parser<I>) -> Result<Vec<Property>, ParseError>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    let forest = parse_properties(parser, None, 0)?;
    debug!("parsed {} top-level properties", forest.len());
    Ok(forest)
}

/// Collect sibling properties at `depth`.
///
/// At the top level (`open_line` is `None`) this runs to end of input.
/// Inside a block it stops at the matching `}`; running out of input first
/// is reported against the line of the opening brace.
fn parse_properties<I>(
    parser: &mut Parser<I>,
    open_line: Option<usize>,
    depth: usize,
) -> Result<Vec<Property>, ParseError>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    let mut props = Vec::new();

    loop {
        let (token, line) = parser.bump()?;
        match token {
            Token::Text(name) => {
                props.push(parse_property(parser, name, line, depth)?);
            }
            Token::BlockClose => {
                return match open_line {
                    Some(_) => Ok(props),
                    None => Err(ParseError::UnexpectedBlockClose { line }),
                };
            }
            Token::BlockOpen => {
                return Err(ParseError::UnexpectedBlockOpen { line });
            }
            Token::Eof => {
                return match open_line {
                    Some(open) => Err(ParseError::UnterminatedBlock { line: open }),
                    None => Ok(props),
                };
            }
        }
    }
}

/// Parse whatever follows a name: a value, or a block of children.
fn parse_property<I>(
    parser: &mut Parser<I>,
    name: String,
    name_line: usize,
    depth: usize,
) -> Result<Property, ParseError>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    let (token, line) = parser.bump()?;
    match token {
        Token::Text(value) => Ok(Property::leaf(name, value)),
        Token::BlockOpen => {
            let max_depth = parser.max_depth();
            if depth + 1 > max_depth {
                debug!("rejecting block '{}' at line {}: depth limit {}", name, line, max_depth);
                return Err(ParseError::TooDeep { line, max_depth });
            }
            trace!("block '{}' opened at line {} (depth {})", name, line, depth + 1);
            let children = parse_properties(parser, Some(line), depth + 1)?;
            Ok(Property::block(name, children))
        }
        Token::BlockClose => Err(ParseError::UnexpectedBlockClose { line }),
        Token::Eof => Err(ParseError::MissingValue {
            name,
            line: name_line,
        }),
    }
}
