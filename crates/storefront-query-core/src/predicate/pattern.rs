/// Escape `\`, `%` and `_` so `text` matches literally inside a `LIKE`
/// pattern.
#[must_use]
pub fn escape_like(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Token {
    Literal(char),
    AnyOne,
    AnyMany,
}

///
/// LikePattern
///
/// Compiled case-insensitive `LIKE` pattern: `%` matches any run of
/// characters, `_` exactly one, and `\` makes the next character literal.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LikePattern {
    tokens: Vec<Token>,
}

impl LikePattern {
    #[must_use]
    pub fn new(pattern: &str) -> Self {
        let mut tokens = Vec::new();
        let mut chars = pattern.chars();

        while let Some(c) = chars.next() {
            match c {
                '%' => {
                    // consecutive `%` collapse
                    if tokens.last() != Some(&Token::AnyMany) {
                        tokens.push(Token::AnyMany);
                    }
                }
                '_' => tokens.push(Token::AnyOne),
                '\\' => {
                    let literal = chars.next().unwrap_or('\\');
                    tokens.extend(literal.to_lowercase().map(Token::Literal));
                }
                other => tokens.extend(other.to_lowercase().map(Token::Literal)),
            }
        }

        Self { tokens }
    }

    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        let text: Vec<char> = text.chars().flat_map(char::to_lowercase).collect();

        let (mut t, mut p) = (0, 0);
        // last `%` seen: (token index, text index it currently absorbs up to)
        let mut backtrack: Option<(usize, usize)> = None;

        while t < text.len() {
            match self.tokens.get(p) {
                Some(Token::AnyMany) => {
                    backtrack = Some((p, t));
                    p += 1;
                }
                Some(Token::AnyOne) => {
                    t += 1;
                    p += 1;
                }
                Some(Token::Literal(c)) if *c == text[t] => {
                    t += 1;
                    p += 1;
                }
                _ => match backtrack {
                    Some((star, absorbed)) => {
                        backtrack = Some((star, absorbed + 1));
                        p = star + 1;
                        t = absorbed + 1;
                    }
                    None => return false,
                },
            }
        }

        self.tokens[p..].iter().all(|token| *token == Token::AnyMany)
    }
}
