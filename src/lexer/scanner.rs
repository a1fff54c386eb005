use super::*;

/// Advance the cursor by one character
pub(super) fn bump(cursor: &mut Cursor) -> Option<char> {
    let curr = cursor.peek;
    cursor.peek = cursor.input.next();
    curr
}

/// True if the cursor sits on a `//` comment opener
pub(super) fn at_comment(cursor: &Cursor) -> bool {
    cursor.peek == Some('/') && cursor.input.clone().next() == Some('/')
}

/// Skip whitespace and comments. Returns false once the line is exhausted.
pub(super) fn skip_whitespace_and_comments(cursor: &mut Cursor) -> bool {
    while let Some(c) = cursor.peek {
        if c.is_whitespace() {
            bump(cursor);
        } else if at_comment(cursor) {
            // rest of the line is a comment
            cursor.peek = None;
        } else {
            return true;
        }
    }
    false
}
