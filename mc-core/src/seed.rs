//! Seed parsing: a region request accepts either a base-10 signed 64-bit
//! integer or a free-form string, the latter mapped through the reference
//! platform's string hash.

/// `h <- 0; for each character c: h <- (31*h + codepoint(c)) mod 2^32`,
/// computed with wrapping 32-bit signed arithmetic (matches `String.hashCode`
/// on the reference platform).
pub fn string_hash(s: &str) -> i32 {
    let mut h: i32 = 0;
    for c in s.chars() {
        h = h.wrapping_mul(31).wrapping_add(c as i32);
    }
    h
}

/// Parses a world seed from user input: a base-10 `i64` if it parses as one,
/// otherwise the sign-extended string hash of the raw input.
pub fn parse_seed(input: &str) -> i64 {
    match input.trim().parse::<i64>() {
        Ok(seed) => seed,
        Err(_) => string_hash(input) as i64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_hash_golden_vectors() {
        assert_eq!(string_hash(""), 0);
        assert_eq!(string_hash("a"), 97);
        assert_eq!(string_hash("ab"), 3105);
    }

    #[test]
    fn parse_seed_prefers_integer_literal() {
        assert_eq!(parse_seed("42"), 42);
        assert_eq!(parse_seed("-42"), -42);
    }

    #[test]
    fn parse_seed_falls_back_to_string_hash() {
        assert_eq!(parse_seed("a"), 97);
        assert_eq!(parse_seed(""), 0);
    }
}
