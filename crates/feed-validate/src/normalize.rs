//! Id and price normalization.
//!
//! Both rules reproduce the shapes produced by spreadsheet exports:
//! numeric ids arrive with a `.0` suffix, and prices arrive either as bare
//! integers or with a comma decimal separator.

use unicode_normalization::UnicodeNormalization;

/// Currency marker every normalized price ends with.
pub const CURRENCY_SUFFIX: &str = "BRL";

/// Placeholder inserted into prices that carry no decimal separator.
const MISSING_CENTS: &str = ".00";

/// Strips the trailing two characters of a raw id.
///
/// This is a blind truncation, not a numeric parse: `"2.0"` becomes `"2"`,
/// `"12345.0"` becomes `"12345"`, and ids shorter than two characters become
/// empty.
pub fn format_id(raw: &str) -> String {
    let keep = raw.chars().count().saturating_sub(2);
    raw.chars().take(keep).collect()
}

/// Returns true if the value carries at least one ASCII digit.
pub fn has_digit(value: &str) -> bool {
    value.chars().any(|ch| ch.is_ascii_digit())
}

/// Normalizes a price that already passed [`has_digit`].
///
/// 1. Append `" BRL"` unless the value already ends with `BRL`.
/// 2. Without any decimal separator, insert `.00` three characters before
///    the first space (at the start when fewer precede it).
/// 3. Otherwise, with a comma present, fold to ASCII, drop every period and
///    turn every comma into a period.
pub fn format_price(raw: &str) -> String {
    let mut price = raw.to_string();
    if !price.ends_with(CURRENCY_SUFFIX) {
        price.push(' ');
        price.push_str(CURRENCY_SUFFIX);
    }

    if !price.contains(['.', ',']) {
        return insert_missing_cents(&price);
    }
    if price.contains(',') {
        return fold_decimal_comma(&price);
    }
    price
}

fn insert_missing_cents(price: &str) -> String {
    let Some(space) = price.find(' ') else {
        return price.to_string();
    };
    // Step back three characters from the space, not three bytes.
    let at = price[..space]
        .char_indices()
        .rev()
        .nth(2)
        .map_or(0, |(idx, _)| idx);
    let mut formatted = String::with_capacity(price.len() + MISSING_CENTS.len());
    formatted.push_str(&price[..at]);
    formatted.push_str(MISSING_CENTS);
    formatted.push_str(&price[at..]);
    formatted
}

fn fold_decimal_comma(price: &str) -> String {
    price
        .nfkd()
        .filter(char::is_ascii)
        .filter(|ch| *ch != '.')
        .map(|ch| if ch == ',' { '.' } else { ch })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_drops_spreadsheet_suffix() {
        assert_eq!(format_id("2.0"), "2");
        assert_eq!(format_id("12345.0"), "12345");
    }

    #[test]
    fn id_truncation_is_blind() {
        assert_eq!(format_id("SKU-9"), "SKU");
        assert_eq!(format_id("ab"), "");
        assert_eq!(format_id("a"), "");
        assert_eq!(format_id(""), "");
    }

    #[test]
    fn id_truncation_counts_characters() {
        assert_eq!(format_id("café.0"), "café");
    }

    #[test]
    fn cents_go_three_characters_before_the_space() {
        assert_eq!(format_price("100 BRL"), ".00100 BRL");
        assert_eq!(format_price("1000"), "1.00000 BRL");
        assert_eq!(format_price("25"), ".0025 BRL");
    }

    #[test]
    fn price_without_space_is_left_alone() {
        assert_eq!(format_price("100BRL"), "100BRL");
    }

    #[test]
    fn comma_price_uses_period_decimal() {
        assert_eq!(format_price("10,50"), "10.50 BRL");
        assert_eq!(format_price("1.234,56"), "1234.56 BRL");
        assert_eq!(format_price("1.234,56 BRL"), "1234.56 BRL");
    }

    #[test]
    fn comma_price_is_folded_to_ascii() {
        assert_eq!(format_price("R$\u{a0}10,50"), "R$ 10.50 BRL");
        assert_eq!(format_price("R$\u{a0}１0,50"), "R$ 10.50 BRL");
    }

    #[test]
    fn period_price_only_gains_currency() {
        assert_eq!(format_price("10.50"), "10.50 BRL");
        assert_eq!(format_price("10.50 BRL"), "10.50 BRL");
    }

    #[test]
    fn digit_detection() {
        assert!(has_digit("R$ 9"));
        assert!(!has_digit("free"));
        assert!(!has_digit(""));
    }
}
