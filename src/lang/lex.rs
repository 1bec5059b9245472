use super::Address;

/// Scanned number literal. Integers are kept wide so the caller
/// decides how to saturate them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Integer(i128),
    Real(f64),
}

fn is_mk52_whitespace(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Scans a whole-line number literal: optional sign, digits,
/// optional fraction, optional exponent. Anything left over after
/// the literal means the text is not a number.
pub fn number(s: &str) -> Option<Number> {
    let s = s.trim_matches(is_mk52_whitespace);
    let mut chars = s.chars().peekable();
    let mut digits = 0;
    let mut decimal = false;
    let mut exp = false;
    let mut exp_digits = 0;
    if let Some('+') | Some('-') = chars.peek() {
        chars.next();
    }
    while let Some(ch) = chars.next() {
        match ch {
            '0'..='9' => {
                if exp {
                    exp_digits += 1;
                } else {
                    digits += 1;
                }
            }
            '.' if !decimal && !exp => decimal = true,
            'e' | 'E' if !exp && digits > 0 => {
                exp = true;
                if let Some('+') | Some('-') = chars.peek() {
                    chars.next();
                }
            }
            _ => return None,
        }
    }
    if digits == 0 || (exp && exp_digits == 0) {
        return None;
    }
    if !decimal && !exp {
        if let Ok(n) = s.parse::<i128>() {
            return Some(Number::Integer(n));
        }
    }
    match s.parse::<f64>() {
        Ok(r) if r.is_finite() => Some(Number::Real(r)),
        _ => None,
    }
}

/// A line address operand is nothing but decimal digits.
pub fn address(s: &str) -> Option<Address> {
    let s = s.trim();
    if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    s.parse::<Address>().ok()
}

/// Register names follow the keyboard: `0`-`9` then `A`-`E`.
/// A decimal index is accepted as well; range checking is left
/// to the register store.
pub fn register(s: &str) -> Option<usize> {
    let s = s.trim();
    let mut chars = s.chars();
    if let (Some(ch), None) = (chars.next(), chars.next()) {
        return match ch.to_ascii_uppercase() {
            c @ '0'..='9' => Some(c as usize - '0' as usize),
            c @ 'A'..='Z' => Some(c as usize - 'A' as usize + 10),
            _ => None,
        };
    }
    address(s)
}

pub fn register_name(index: usize) -> String {
    match index {
        0..=9 => index.to_string(),
        10..=35 => ((b'A' + (index - 10) as u8) as char).to_string(),
        _ => format!("{:02}", index),
    }
}

pub fn format_address(address: Address) -> String {
    format!("{:04}", address)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers() {
        assert_eq!(number("12"), Some(Number::Integer(12)));
        assert_eq!(number(" -3 "), Some(Number::Integer(-3)));
        assert_eq!(number("+7"), Some(Number::Integer(7)));
    }

    #[test]
    fn test_reals() {
        assert_eq!(number("2.5"), Some(Number::Real(2.5)));
        assert_eq!(number("1E3"), Some(Number::Real(1000.0)));
        assert_eq!(number("1.5e-1"), Some(Number::Real(0.15)));
        assert_eq!(number(".5"), Some(Number::Real(0.5)));
    }

    #[test]
    fn test_not_numbers() {
        assert_eq!(number(""), None);
        assert_eq!(number("-"), None);
        assert_eq!(number("E5"), None);
        assert_eq!(number("1E"), None);
        assert_eq!(number("1/X"), None);
        assert_eq!(number("10^X"), None);
        assert_eq!(number("1.2.3"), None);
    }

    #[test]
    fn test_huge_integer_stays_wide() {
        assert_eq!(
            number("99999999999999999999"),
            Some(Number::Integer(99_999_999_999_999_999_999))
        );
    }

    #[test]
    fn test_address() {
        assert_eq!(address("0005"), Some(5));
        assert_eq!(address("LOOP"), None);
        assert_eq!(address(""), None);
        assert_eq!(address("-1"), None);
    }

    #[test]
    fn test_register() {
        assert_eq!(register("7"), Some(7));
        assert_eq!(register("a"), Some(10));
        assert_eq!(register("E"), Some(14));
        assert_eq!(register("F"), Some(15));
        assert_eq!(register("12"), Some(12));
        assert_eq!(register("?"), None);
        assert_eq!(register_name(14), "E");
    }
}
