//! Version ordering for Maven-style version strings

use std::cmp::Ordering;

/// Total order over version strings
pub trait VersionComparator: Send + Sync {
    fn compare(&self, a: &str, b: &str) -> Ordering;

    /// Sorts versions ascending
    fn sort(&self, versions: &mut [String]) {
        versions.sort_by(|a, b| self.compare(a, b));
    }

    /// Newest version, or `None` for an empty list
    fn latest<'a>(&self, versions: &'a [String]) -> Option<&'a String> {
        versions.iter().reduce(|latest, version| {
            if self.compare(version, latest) == Ordering::Greater {
                version
            } else {
                latest
            }
        })
    }
}

/// Numeric-aware comparator following Maven's ordering rules
///
/// Versions are split on `.`, `-`, `_`, `+` and on digit/letter boundaries,
/// then compared token by token. A shorter version is padded with zeros, and
/// release markers (`ga`, `final`, `release`) are themselves zero, so
/// `1.0 == 1.0.0 == 1.0-final`.
///
/// Every token falls into one rank band:
///
/// ```text
/// alpha < beta < milestone < rc < snapshot < 0 < sp < other qualifiers < 1 < 2 < ...
/// ```
///
/// Because the padding is an ordinary token with a fixed place in that
/// sequence, the comparison is a total order: `1.0-rc1 < 1.0 < 1.0-jre < 1.0.1`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MavenVersionComparator;

impl VersionComparator for MavenVersionComparator {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        let left = tokenize(a);
        let right = tokenize(b);
        let zero = Token::ZERO;

        for i in 0..left.len().max(right.len()) {
            let l = left.get(i).unwrap_or(&zero);
            let r = right.get(i).unwrap_or(&zero);
            let ordering = l.cmp(r);
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Qualifier(u8, String),
    /// Decimal digits with leading zeros stripped; empty is zero
    Number(String),
}

/// Qualifiers ranked below this sort before zero
const PRE_RELEASE_LIMIT: u8 = 5;
const OTHER_RANK: u8 = 7;

impl Token {
    const ZERO: Token = Token::Number(String::new());

    fn number(digits: &str) -> Self {
        Token::Number(digits.trim_start_matches('0').to_string())
    }

    fn qualifier(text: &str) -> Self {
        let lower = text.to_ascii_lowercase();
        let rank = match lower.as_str() {
            "alpha" | "a" => 0,
            "beta" | "b" => 1,
            "milestone" | "m" => 2,
            "rc" | "cr" => 3,
            "snapshot" => 4,
            "ga" | "final" | "release" => return Token::ZERO,
            "sp" => 6,
            _ => OTHER_RANK,
        };
        let label = if rank == OTHER_RANK { lower } else { String::new() };
        Token::Qualifier(rank, label)
    }

    fn band(&self) -> u8 {
        match self {
            Token::Qualifier(rank, _) if *rank < PRE_RELEASE_LIMIT => 0,
            Token::Number(digits) if digits.is_empty() => 1,
            Token::Qualifier(..) => 2,
            Token::Number(_) => 3,
        }
    }
}

impl Ord for Token {
    fn cmp(&self, other: &Self) -> Ordering {
        self.band()
            .cmp(&other.band())
            .then_with(|| match (self, other) {
                // Leading zeros are stripped, so a longer digit run is a larger number.
                (Token::Number(a), Token::Number(b)) => {
                    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
                }
                (Token::Qualifier(ra, la), Token::Qualifier(rb, lb)) => {
                    ra.cmp(rb).then_with(|| la.cmp(lb))
                }
                _ => Ordering::Equal,
            })
    }
}

impl PartialOrd for Token {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn tokenize(version: &str) -> Vec<Token> {
    fn flush(current: &mut String, in_digits: bool, tokens: &mut Vec<Token>) {
        if !current.is_empty() {
            tokens.push(if in_digits {
                Token::number(current)
            } else {
                Token::qualifier(current)
            });
            current.clear();
        }
    }

    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_digits = false;

    for c in version.trim().chars() {
        if matches!(c, '.' | '-' | '_' | '+') {
            flush(&mut current, in_digits, &mut tokens);
            continue;
        }
        let is_digit = c.is_ascii_digit();
        if !current.is_empty() && is_digit != in_digits {
            flush(&mut current, in_digits, &mut tokens);
        }
        in_digits = is_digit;
        current.push(c);
    }
    flush(&mut current, in_digits, &mut tokens);

    // Trailing zeros compare equal to the padding.
    while tokens.last() == Some(&Token::ZERO) {
        tokens.pop();
    }
    tokens
}
