//! Splits a normalized document into text, tags and comments.

use crate::error::{MarkupError, MarkupResult};
use once_cell::sync::Lazy;
use regex::Regex;

static COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^<!--(?s:.*?)-->").expect("comment pattern is valid"));
static DECLARATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^<[!?][^>]*>").expect("declaration pattern is valid"));
static START_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^<([A-Za-z][A-Za-z0-9:_-]*)((?:[^>"']|"[^"]*"|'[^']*')*)>"#)
        .expect("start tag pattern is valid")
});
static END_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^</([A-Za-z][A-Za-z0-9:_-]*)\s*>").expect("end tag pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token<'a> {
    Text(&'a str),
    Start {
        name: &'a str,
        attributes: &'a str,
        self_closing: bool,
        offset: usize,
    },
    End {
        name: &'a str,
    },
    Comment,
}

pub(crate) struct Scanner<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn markup(&mut self, rest: &'a str) -> MarkupResult<Token<'a>> {
        let offset = self.pos;

        if let Some(m) = COMMENT.find(rest).or_else(|| {
            if rest.starts_with("<!--") {
                None
            } else {
                DECLARATION.find(rest)
            }
        }) {
            self.pos += m.end();
            return Ok(Token::Comment);
        }

        if let Some(cap) = END_TAG.captures(rest) {
            self.pos += cap[0].len();
            let name = cap.get(1).map_or("", |m| m.as_str());
            return Ok(Token::End { name });
        }

        if let Some(cap) = START_TAG.captures(rest) {
            self.pos += cap[0].len();
            let name = cap.get(1).map_or("", |m| m.as_str());
            let body = cap.get(2).map_or("", |m| m.as_str());
            let trimmed = body.trim_end();
            let (attributes, self_closing) = match trimmed.strip_suffix('/') {
                Some(attrs) => (attrs, true),
                None => (body, false),
            };
            return Ok(Token::Start {
                name,
                attributes,
                self_closing,
                offset,
            });
        }

        Err(MarkupError::UnterminatedTag { offset })
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = MarkupResult<Token<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.src.len() {
            return None;
        }
        let rest = &self.src[self.pos..];

        if starts_markup(rest) {
            let token = self.markup(rest);
            if token.is_err() {
                self.pos = self.src.len();
            }
            return Some(token);
        }

        // A '<' that does not open markup is literal text.
        let from = usize::from(rest.starts_with('<'));
        let end = next_markup(rest, from).unwrap_or(rest.len());
        self.pos += end;
        Some(Ok(Token::Text(&rest[..end])))
    }
}

fn starts_markup(s: &str) -> bool {
    let mut chars = s.chars();
    if chars.next() != Some('<') {
        return false;
    }
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '!' || c == '?' => true,
        Some('/') => chars.next().is_some_and(|c| c.is_ascii_alphabetic()),
        _ => false,
    }
}

fn next_markup(rest: &str, from: usize) -> Option<usize> {
    rest[from..]
        .match_indices('<')
        .map(|(i, _)| i + from)
        .find(|&i| starts_markup(&rest[i..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(src: &str) -> Vec<Token<'_>> {
        Scanner::new(src).collect::<MarkupResult<Vec<_>>>().unwrap()
    }

    #[test]
    fn splits_text_and_tags() {
        assert_eq!(
            tokens(r#"a<rich style="b">x</rich>"#),
            vec![
                Token::Text("a"),
                Token::Start {
                    name: "rich",
                    attributes: r#" style="b""#,
                    self_closing: false,
                    offset: 1,
                },
                Token::Text("x"),
                Token::End { name: "rich" },
            ]
        );
    }

    #[test]
    fn self_closing_tags() {
        assert_eq!(
            tokens("<br/><br />"),
            vec![
                Token::Start {
                    name: "br",
                    attributes: "",
                    self_closing: true,
                    offset: 0,
                },
                Token::Start {
                    name: "br",
                    attributes: " ",
                    self_closing: true,
                    offset: 5,
                },
            ]
        );
    }

    #[test]
    fn lone_angle_brackets_are_text() {
        assert_eq!(tokens("1 < 2 <3"), vec![Token::Text("1 < 2 <3")]);
        assert_eq!(tokens("< b"), vec![Token::Text("< b")]);
    }

    #[test]
    fn quoted_gt_stays_inside_tag() {
        assert_eq!(
            tokens(r#"<a href="x>y">"#),
            vec![Token::Start {
                name: "a",
                attributes: r#" href="x>y""#,
                self_closing: false,
                offset: 0,
            }]
        );
    }

    #[test]
    fn comments_and_declarations_are_skipped_as_comments() {
        assert_eq!(
            tokens("<!DOCTYPE html><!-- a > b -->t"),
            vec![Token::Comment, Token::Comment, Token::Text("t")]
        );
    }

    #[test]
    fn unterminated_tag_is_an_error() {
        let result: MarkupResult<Vec<_>> = Scanner::new(r##"ok<rich color="#fff""##).collect();
        assert_eq!(result, Err(MarkupError::UnterminatedTag { offset: 2 }));
    }

    #[test]
    fn unterminated_comment_is_an_error() {
        let result: MarkupResult<Vec<_>> = Scanner::new("<!-- open").collect();
        assert_eq!(result, Err(MarkupError::UnterminatedTag { offset: 0 }));
    }

    #[test]
    fn multibyte_text_before_tags() {
        assert_eq!(
            tokens("héllo<b>"),
            vec![
                Token::Text("héllo"),
                Token::Start {
                    name: "b",
                    attributes: "",
                    self_closing: false,
                    offset: 6,
                },
            ]
        );
    }
}
