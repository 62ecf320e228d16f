//! Printable-ASCII rotation used by version 1 envelopes.
//!
//! Version 1 rotated every character in `[32, 126]` by 13 positions
//! within that 95-character alphabet before base64 encoding. Only the
//! inverse direction is needed to open old envelopes; no new version 1
//! envelopes are produced.

const FIRST_PRINTABLE: u32 = 32;
const LAST_PRINTABLE: u32 = 126;
const PERIOD: u32 = LAST_PRINTABLE - FIRST_PRINTABLE + 1;

/// Shift applied when version 1 envelopes were written.
pub const FORWARD_SHIFT: u32 = 13;
/// Shift that undoes [`FORWARD_SHIFT`].
pub const INVERSE_SHIFT: u32 = PERIOD - FORWARD_SHIFT;

/// Rotates each printable ASCII character of `text` by `k` positions.
/// Characters outside `[32, 126]` pass through unchanged.
pub fn shift_printable(text: &str, k: u32) -> String {
    text.chars().map(|ch| shift_char(ch, k)).collect()
}

fn shift_char(ch: char, k: u32) -> char {
    let code = u32::from(ch);
    if !(FIRST_PRINTABLE..=LAST_PRINTABLE).contains(&code) {
        return ch;
    }
    let shifted = (code - FIRST_PRINTABLE + k % PERIOD) % PERIOD + FIRST_PRINTABLE;
    char::from_u32(shifted).unwrap_or(ch)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{FORWARD_SHIFT, INVERSE_SHIFT, shift_printable};

    #[rstest(
        input,
        expected,
        case("", ""),
        case(" ", "-"),
        case("~", ","),
        case(r#"{"id":1}"#, ")/vq/G>+"),
        case("Dobrovolnictví", "Q|o |$|y{vp\"$í"),
        // non-ASCII and control characters keep their place
        case("řádek\n", "řáqrx\n")
    )]
    fn test_forward_shift(input: &str, expected: &str) {
        assert_eq!(expected, shift_printable(input, FORWARD_SHIFT));
    }

    #[rstest(
        input,
        case(""),
        case(r#"{"metadata":{"totalActivities":1},"activities":[]}"#),
        case("Soutěž ~ 100 % 🎉")
    )]
    fn test_inverse_shift_restores_text(input: &str) {
        let manipulated = shift_printable(input, FORWARD_SHIFT);
        assert_eq!(input, shift_printable(&manipulated, INVERSE_SHIFT));
    }

    #[test]
    fn test_inverse_shift_constant() {
        assert_eq!(82, INVERSE_SHIFT);
    }
}
