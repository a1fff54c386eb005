//! Locate nodes by a sequence of nested names.
//!
//! A path is a list of segments. At every level *all* siblings whose name
//! matches the segment (case-insensitively, see [`Property::name_matches`])
//! are followed, so repeated names fan out. Only blocks are descended into.
//!
//! Paths may also be written as one string with segments separated by `"`,
//! e.g. `Item"Exporting"ConnectionPoints"Point`. Inside a segment `\"` is a
//! literal quote and `\\` a literal backslash.

use log::trace;

use crate::ast::{fold, Property};

/// Segment separator in a path expression.
pub const PATH_DELIMITER: char = '"';

/// Every node reached by following `path` from `forest`, in document order.
///
/// An empty path matches nothing.
pub fn find_all<'a, S>(forest: &'a [Property], path: &[S]) -> Vec<&'a Property>
where
    S: AsRef<str>,
{
    let Some((last, parents)) = path.split_last() else {
        return Vec::new();
    };

    // Sibling lists still in play, in document order.
    let mut level: Vec<&'a [Property]> = vec![forest];
    for segment in parents {
        let key = fold(segment.as_ref());
        level = level
            .into_iter()
            .flatten()
            .filter(|p| p.name_matches_folded(&key))
            .filter_map(Property::children)
            .collect();
        if level.is_empty() {
            break;
        }
    }

    let key = fold(last.as_ref());
    let found: Vec<&'a Property> = level
        .into_iter()
        .flatten()
        .filter(|p| p.name_matches_folded(&key))
        .collect();

    trace!("find_all matched {} node(s) for {} segment(s)", found.len(), path.len());
    found
}

/// Mutable counterpart of [`find_all`]. The tree cannot change shape while
/// the returned borrows are alive.
pub fn find_all_mut<'a, S>(forest: &'a mut [Property], path: &[S]) -> Vec<&'a mut Property>
where
    S: AsRef<str>,
{
    fn collect<'a>(siblings: &'a mut [Property], keys: &[String], out: &mut Vec<&'a mut Property>) {
        let Some((key, rest)) = keys.split_first() else {
            return;
        };
        for prop in siblings.iter_mut() {
            if !prop.name_matches_folded(key) {
                continue;
            }
            if rest.is_empty() {
                out.push(prop);
            } else if let Some(children) = prop.children_mut() {
                collect(children, rest, out);
            }
        }
    }

    let keys: Vec<String> = path.iter().map(|s| fold(s.as_ref())).collect();
    let mut out = Vec::new();
    collect(forest, &keys, &mut out);
    out
}

/// The last match of `path`, which is the effective one when a name repeats.
pub fn find_last<'a, S>(forest: &'a [Property], path: &[S]) -> Option<&'a Property>
where
    S: AsRef<str>,
{
    find_all(forest, path).pop()
}

/// [`find_all`] with the path written as a single expression.
///
/// # Examples
/// ```
/// use kvtree::{parse, query::find_all_expr};
///
/// let forest = parse([
///     "Item { Exporting { ConnectionPoints { Point a  Point b } } }",
/// ]).unwrap();
/// let points = find_all_expr(&forest, "Item\"Exporting\"ConnectionPoints\"Point");
/// assert_eq!(points.len(), 2);
/// ```
pub fn find_all_expr<'a>(forest: &'a [Property], expr: &str) -> Vec<&'a Property> {
    find_all(forest, &parse_path(expr))
}

/// Split a path expression into segments.
///
/// The empty expression is the empty path. Empty segments elsewhere are
/// kept; they match properties with an empty name.
pub fn parse_path(expr: &str) -> Vec<String> {
    if expr.is_empty() {
        return Vec::new();
    }

    let mut segments = Vec::new();
    let mut current = String::new();
    let mut chars = expr.chars();

    while let Some(ch) = chars.next() {
        match ch {
            '\\' => match chars.next() {
                Some(next @ (PATH_DELIMITER | '\\')) => current.push(next),
                Some(other) => {
                    current.push('\\');
                    current.push(other);
                }
                None => current.push('\\'),
            },
            PATH_DELIMITER => segments.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    segments.push(current);
    segments
}

/// Join segments into a path expression that [`parse_path`] splits back
/// into the same segments.
///
/// Returns `None` for a path made of one empty segment: its expression
/// would be `""`, which is the empty path. Use [`find_all`] with the
/// segment list to reach a top-level property with an empty name.
pub fn format_path<S>(segments: &[S]) -> Option<String>
where
    S: AsRef<str>,
{
    if let [only] = segments {
        if only.as_ref().is_empty() {
            return None;
        }
    }

    let delimiter = PATH_DELIMITER.to_string();
    let expr = segments
        .iter()
        .map(|s| {
            let mut escaped = String::new();
            for ch in s.as_ref().chars() {
                if ch == PATH_DELIMITER || ch == '\\' {
                    escaped.push('\\');
                }
                escaped.push(ch);
            }
            escaped
        })
        .collect::<Vec<_>>()
        .join(delimiter.as_str());
    Some(expr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    fn item_forest() -> Vec<Property> {
        parse([
            "Item",
            "{",
            "  Exporting { ConnectionPoints { Point \"1\" Point \"2\" } }",
            "  exporting { connectionpoints { POINT \"3\" } }",
            "  Exporting \"flat value\"",
            "}",
            "Item { Exporting { ConnectionPoints { Point \"4\" } } }",
        ])
        .unwrap()
    }

    fn values(found: &[&Property]) -> Vec<String> {
        found.iter().filter_map(|p| p.value()).map(String::from).collect()
    }

    #[test]
    fn test_find_all_follows_every_match() {
        let forest = item_forest();
        let found = find_all(&forest, &["Item", "Exporting", "ConnectionPoints", "Point"]);
        assert_eq!(values(&found), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_find_all_sibling_blocks_same_name() {
        let forest = parse(["A { B one }", "A { B two }"]).unwrap();
        let found = find_all(&forest, &["A", "B"]);
        assert_eq!(values(&found), vec!["one", "two"]);
    }

    #[test]
    fn test_leaf_in_middle_of_path_is_a_dead_end() {
        let forest = item_forest();
        // "Exporting" also names a leaf; it contributes nothing below.
        let found = find_all(&forest, &["item", "exporting", "anything"]);
        assert!(found.is_empty());
        assert_eq!(find_all(&forest, &["item", "exporting"]).len(), 4);
    }

    #[test]
    fn test_empty_path_matches_nothing() {
        let forest = item_forest();
        assert!(find_all::<&str>(&forest, &[]).is_empty());
        assert!(find_all_expr(&forest, "").is_empty());
    }

    #[test]
    fn test_find_last_is_effective_value() {
        let forest = parse(["speed 1", "Speed 2"]).unwrap();
        assert_eq!(find_last(&forest, &["SPEED"]).and_then(Property::value), Some("2"));
        assert!(find_last(&forest, &["missing"]).is_none());
    }

    #[test]
    fn test_find_all_mut_edits_in_place() {
        let mut forest = item_forest();
        for point in find_all_mut(&mut forest, &["item", "exporting", "connectionpoints", "point"]) {
            point.set_value("x");
        }
        let found = find_all(&forest, &["Item", "Exporting", "ConnectionPoints", "Point"]);
        assert_eq!(values(&found), vec!["x", "x", "x", "x"]);
        assert!(find_all_mut::<&str>(&mut forest, &[]).is_empty());
    }

    #[test]
    fn test_find_all_expr_matches_segment_list() {
        let forest = item_forest();
        let by_expr = find_all_expr(&forest, "Item\"Exporting\"ConnectionPoints\"Point");
        let by_list = find_all(&forest, &["Item", "Exporting", "ConnectionPoints", "Point"]);
        assert_eq!(by_expr, by_list);
    }

    #[test]
    fn test_parse_path_escapes() {
        assert!(parse_path("").is_empty());
        assert_eq!(parse_path("a"), vec!["a"]);
        assert_eq!(parse_path("a\"b\"c"), vec!["a", "b", "c"]);
        assert_eq!(parse_path("a\"\"b"), vec!["a", "", "b"]);
        assert_eq!(parse_path(r#"say\"hi"x"#), vec!["say\"hi", "x"]);
        assert_eq!(parse_path(r"C:\\maps\sp"), vec![r"C:\maps\sp"]);
    }

    #[test]
    fn test_format_path_inverts_parse_path() {
        let segments = vec!["Item", "with \"quotes\"", "back\\slash", ""];
        let expr = format_path(&segments).unwrap();
        assert_eq!(parse_path(&expr), segments);

        let empty: Vec<&str> = Vec::new();
        assert_eq!(format_path(&empty), Some(String::new()));
        assert!(parse_path("").is_empty());
    }

    #[test]
    fn test_single_empty_segment_has_no_expression() {
        assert_eq!(format_path(&[""]), None);

        // Other paths with empty segments still round-trip.
        for segments in [vec!["", ""], vec!["", "child"], vec!["parent", ""]] {
            let expr = format_path(&segments).unwrap();
            assert_eq!(parse_path(&expr), segments);
        }

        let forest = parse(["\"\" { child 1 }"]).unwrap();
        assert_eq!(find_all(&forest, &[""]).len(), 1);
        assert_eq!(values(&find_all_expr(&forest, "\"child")), vec!["1"]);
    }

    #[test]
    fn test_quoted_name_matches_path_segment() {
        let forest = parse([r#""odd \"name\"" { child 1 }"#]).unwrap();
        let found = find_all_expr(&forest, r#"odd \"NAME\""child"#);
        assert_eq!(values(&found), vec!["1"]);
    }
}
