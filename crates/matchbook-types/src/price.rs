//! Decimal price parsing and rendering.
//!
//! Prices are exact [`Decimal`] values. The wire format allows at most four
//! fractional digits, and equality is numeric: "46" and "46.00" are the same
//! price. Output uses the minimal representation that round-trips the value
//! ("46", "45.95" — never "45.9500").

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::{constants::MAX_PRICE_SCALE, MatchbookError, Result};

/// Parse a wire-format price.
///
/// Accepts a strictly positive decimal with at most [`MAX_PRICE_SCALE`]
/// digits after the point. The scale check runs against the textual form, so
/// "2.14275" is rejected even though it rounds to a representable value.
pub fn parse_price(raw: &str) -> Result<Decimal> {
    let price = Decimal::from_str(raw).map_err(|_| MatchbookError::InvalidPrice {
        raw: raw.to_string(),
    })?;

    if price.scale() > MAX_PRICE_SCALE || price <= Decimal::ZERO {
        return Err(MatchbookError::InvalidPrice {
            raw: raw.to_string(),
        });
    }

    Ok(price)
}

/// Render a price in its minimal decimal form.
///
/// `normalize` strips trailing fractional zeros, so an integral price prints
/// without a decimal point ("46") and a fractional one prints exactly its
/// significant digits ("45.95", "0.3854").
#[must_use]
pub fn format_price(price: Decimal) -> String {
    price.normalize().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(raw: &str) -> Decimal {
        Decimal::from_str(raw).unwrap()
    }

    #[test]
    fn parse_integer_and_fractional_forms() {
        assert_eq!(parse_price("46").unwrap(), dec("46"));
        assert_eq!(parse_price("45.95").unwrap(), dec("45.95"));
        assert_eq!(parse_price("0.3854").unwrap(), dec("0.3854"));
    }

    #[test]
    fn equality_is_numeric() {
        assert_eq!(parse_price("46").unwrap(), parse_price("46.00").unwrap());
        assert_eq!(parse_price("23.4").unwrap(), parse_price("23.4000").unwrap());
    }

    #[test]
    fn rejects_more_than_four_fractional_digits() {
        assert!(parse_price("2.14275").is_err());
        assert!(parse_price("0.00001").is_err());
        // Exactly four is fine.
        assert!(parse_price("2.1427").is_ok());
    }

    #[test]
    fn rejects_non_positive_and_garbage() {
        assert!(parse_price("0").is_err());
        assert!(parse_price("-1.5").is_err());
        assert!(parse_price("").is_err());
        assert!(parse_price("abc").is_err());
        assert!(parse_price("1.2.3").is_err());
    }

    #[test]
    fn format_trims_trailing_zeros() {
        assert_eq!(format_price(dec("46.00")), "46");
        assert_eq!(format_price(dec("45.9500")), "45.95");
        assert_eq!(format_price(dec("12.1")), "12.1");
        assert_eq!(format_price(dec("0.3854")), "0.3854");
    }

    #[test]
    fn format_round_trips_through_parse() {
        for raw in ["46", "45.95", "0.3854", "14.235", "12.1"] {
            let price = parse_price(raw).unwrap();
            assert_eq!(format_price(price), raw);
        }
    }
}
