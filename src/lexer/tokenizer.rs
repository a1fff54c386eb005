use super::*;
use super::scanner::{at_comment, bump, skip_whitespace_and_comments};

pub(super) fn tokenize(cursor: &mut Cursor) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();

    while skip_whitespace_and_comments(cursor) {
        let token = match cursor.peek {
            Some('{') => tokenize_symbol(cursor, Token::BlockOpen),
            Some('}') => tokenize_symbol(cursor, Token::BlockClose),
            Some('"') => tokenize_string(cursor)?,
            Some(_) => tokenize_bare(cursor),
            None => break,
        };
        tokens.push(token);
    }

    Ok(tokens)
}

fn tokenize_symbol(cursor: &mut Cursor, token: Token) -> Token {
    bump(cursor);
    token
}

fn tokenize_string(cursor: &mut Cursor) -> Result<Token, ParseError> {
    bump(cursor); // consume opening quote
    let mut content = String::new();

    while let Some(ch) = bump(cursor) {
        match ch {
            '"' => return Ok(Token::Text(content)),
            '\\' if cursor.allow_escapes => {
                let Some(next_ch) = bump(cursor) else {
                    break;
                };
                match next_ch {
                    '"' => content.push('"'),
                    '\\' => content.push('\\'),
                    'n' => content.push('\n'),
                    't' => content.push('\t'),
                    other => {
                        // unknown escapes are kept as written
                        content.push('\\');
                        content.push(other);
                    }
                }
            }
            _ => content.push(ch),
        }
    }

    Err(ParseError::UnterminatedString { line: cursor.line })
}

/// A bare token runs until whitespace, a brace, a quote or a comment.
fn tokenize_bare(cursor: &mut Cursor) -> Token {
    let mut text = String::new();

    while let Some(ch) = cursor.peek {
        if ch.is_whitespace() || matches!(ch, '{' | '}' | '"') || at_comment(cursor) {
            break;
        }
        text.push(ch);
        bump(cursor);
    }

    Token::Text(text)
}
