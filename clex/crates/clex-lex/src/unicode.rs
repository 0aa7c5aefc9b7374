//! Character classification for the clex lexer.
//!
//! Letters are the Unicode `L*` general categories and digits are `Nd`
//! (decimal numbers). Letter numbers such as `Ⅷ` and other numbers such as
//! `²` are neither, so they never start or continue a literal or identifier.

use unicode_properties::{GeneralCategory, GeneralCategoryGroup, UnicodeGeneralCategory};

/// Checks if a character is skipped between tokens.
///
/// # Example
///
/// ```
/// use clex_lex::unicode::is_whitespace;
///
/// assert!(is_whitespace(' '));
/// assert!(is_whitespace('\t'));
/// assert!(is_whitespace('\n'));
/// assert!(is_whitespace('\u{00A0}')); // no-break space
/// assert!(!is_whitespace('_'));
/// ```
#[inline]
pub fn is_whitespace(c: char) -> bool {
    c.is_whitespace()
}

/// Checks if a character starts (and continues) a number literal.
///
/// Any decimal digit counts, not only ASCII ones.
///
/// # Example
///
/// ```
/// use clex_lex::unicode::is_digit;
///
/// assert!(is_digit('0'));
/// assert!(is_digit('9'));
/// assert!(is_digit('٣')); // Arabic-Indic three
/// assert!(!is_digit('a'));
/// assert!(!is_digit('²'));
/// ```
#[inline]
pub fn is_digit(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_digit();
    }
    c.general_category() == GeneralCategory::DecimalNumber
}

/// Checks if a character is a letter in any of the `L*` categories.
#[inline]
fn is_letter(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_alphabetic();
    }
    c.general_category_group() == GeneralCategoryGroup::Letter
}

/// Checks if a character is valid as the start of an identifier.
///
/// Valid start characters are Unicode letters and the underscore.
///
/// # Example
///
/// ```
/// use clex_lex::unicode::is_ident_start;
///
/// assert!(is_ident_start('a'));
/// assert!(is_ident_start('_'));
/// assert!(is_ident_start('α'));
/// assert!(!is_ident_start('1'));
/// assert!(!is_ident_start('+'));
/// assert!(!is_ident_start('Ⅷ'));
/// ```
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c == '_' || is_letter(c)
}

/// Checks if a character is valid as a continuation of an identifier.
///
/// # Example
///
/// ```
/// use clex_lex::unicode::is_ident_continue;
///
/// assert!(is_ident_continue('a'));
/// assert!(is_ident_continue('_'));
/// assert!(is_ident_continue('1'));
/// assert!(!is_ident_continue('+'));
/// assert!(!is_ident_continue(' '));
/// assert!(!is_ident_continue('²'));
/// ```
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c == '_' || is_letter(c) || is_digit(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_is_not_ident_start() {
        for c in '0'..='9' {
            assert!(is_digit(c));
            assert!(!is_ident_start(c));
            assert!(is_ident_continue(c));
        }
    }

    #[test]
    fn test_operators_are_unclassified() {
        for c in "+-*/%=!<>&|;{}(),.\"".chars() {
            assert!(!is_whitespace(c), "{c:?}");
            assert!(!is_digit(c), "{c:?}");
            assert!(!is_ident_start(c), "{c:?}");
        }
    }

    #[test]
    fn test_nul_is_unclassified() {
        assert!(!is_whitespace('\0'));
        assert!(!is_digit('\0'));
        assert!(!is_ident_continue('\0'));
    }

    #[test]
    fn test_unicode_letters() {
        assert!(is_ident_start('ж'));
        assert!(is_ident_continue('ж'));
        assert!(is_ident_start('名'));
        assert!(is_ident_start('ǅ')); // titlecase
        assert!(is_ident_start('ʰ')); // modifier letter
    }

    #[test]
    fn test_unicode_decimal_digits() {
        for c in ['٣', '٤', '۷', '४', '０'] {
            assert!(is_digit(c), "{c:?}");
            assert!(!is_ident_start(c), "{c:?}");
            assert!(is_ident_continue(c), "{c:?}");
        }
    }

    #[test]
    fn test_other_numbers_are_unclassified() {
        // Nl and No categories
        for c in ['Ⅷ', 'ⅷ', '²', '½', '①'] {
            assert!(!is_digit(c), "{c:?}");
            assert!(!is_ident_start(c), "{c:?}");
            assert!(!is_ident_continue(c), "{c:?}");
        }
    }

    #[test]
    fn test_combining_marks_are_unclassified() {
        assert!(!is_ident_continue('\u{0301}'));
    }
}
