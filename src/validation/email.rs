use once_cell::sync::Lazy;
use regex::Regex;

// Something, an @, something, a dot, something. Does not check the TLD or
// the domain's structure.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should compile")
});

pub fn is_valid(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid("a@b.com"));
        assert!(is_valid("a.b@c.com"));
        assert!(is_valid("bookings@example.com.ng"));
    }

    #[test]
    fn rejects_missing_parts() {
        assert!(!is_valid("a@b"));
        assert!(!is_valid("x@y"));
        assert!(!is_valid("@b.com"));
        assert!(!is_valid("a@.com"));
        assert!(!is_valid("ab.com"));
        assert!(!is_valid(""));
    }

    #[test]
    fn rejects_whitespace_and_extra_at() {
        assert!(!is_valid("a b@c.com"));
        assert!(!is_valid(" a@b.com"));
        assert!(!is_valid("a@@b.com"));
        assert!(!is_valid("a@b@c.com"));
    }

    #[test]
    fn stays_permissive_about_domains() {
        assert!(is_valid("a@b.c"));
        assert!(is_valid("a@b..com"));
    }
}
