//! Currency conversion and display.

use comanda_common::{Currency, Language};
use num_format::{CustomFormat, Grouping, ToFormattedString};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::table::RateTable;

/// Separators and symbol placement for one display language.
#[derive(Debug, Clone, Copy)]
struct NumberStyle {
    decimal: char,
    group: &'static str,
    /// Smallest integer part that gets group separators.
    group_from: u128,
    symbol_first: bool,
}

impl NumberStyle {
    fn for_language(language: Language) -> Self {
        match language {
            // es-ES only groups from five integer digits on
            Language::Es => Self {
                decimal: ',',
                group: ".",
                group_from: 10_000,
                symbol_first: false,
            },
            Language::En => Self {
                decimal: '.',
                group: ",",
                group_from: 1_000,
                symbol_first: true,
            },
            Language::De => Self {
                decimal: ',',
                group: ".",
                group_from: 1_000,
                symbol_first: false,
            },
        }
    }

    fn group_integer(&self, value: u128) -> String {
        if value < self.group_from {
            return value.to_string();
        }

        match CustomFormat::builder()
            .grouping(Grouping::Standard)
            .separator(self.group)
            .build()
        {
            Ok(format) => value.to_formatted_string(&format),
            Err(_) => value.to_string(),
        }
    }
}

fn symbol(currency: Currency, language: Language) -> &'static str {
    match (currency, language) {
        (Currency::Eur, _) => "€",
        (Currency::Usd, Language::Es) => "US$",
        (Currency::Usd, _) => "$",
        (Currency::Cop, _) => "COP",
    }
}

/// Convert a USD amount into `currency` using `rates`.
///
/// When the table has no rate for the currency the amount is returned
/// unconverted.
pub fn convert_from_usd(amount_usd: Decimal, currency: Currency, rates: &RateTable) -> Decimal {
    match rates.rate_for(currency) {
        Some(rate) => amount_usd.checked_mul(rate).unwrap_or(amount_usd),
        None => amount_usd,
    }
}

/// Format an amount already expressed in `currency`.
///
/// Rounds half away from zero to the currency's fraction digits, then applies
/// the separators and symbol placement of `language`.
pub fn format_amount(amount: Decimal, currency: Currency, language: Language) -> String {
    let style = NumberStyle::for_language(language);
    let digits = currency.fraction_digits();

    let mut rounded = amount.round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(digits);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();

    let plain = rounded.abs().to_string();
    let (integer, fraction) = match plain.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (plain.as_str(), None),
    };

    let mut number = match integer.parse::<u128>() {
        Ok(value) => style.group_integer(value),
        Err(_) => integer.to_string(),
    };
    if let Some(fraction) = fraction {
        number.push(style.decimal);
        number.push_str(fraction);
    }

    let sign = if negative { "-" } else { "" };
    let symbol = symbol(currency, language);

    if style.symbol_first {
        if symbol.chars().all(|c| c.is_ascii_alphabetic()) {
            format!("{sign}{symbol} {number}")
        } else {
            format!("{sign}{symbol}{number}")
        }
    } else {
        format!("{sign}{number} {symbol}")
    }
}

/// Convert a USD amount and format it for display.
pub fn format_currency(
    amount_usd: Decimal,
    currency: Currency,
    rates: &RateTable,
    language: Language,
) -> String {
    format_amount(convert_from_usd(amount_usd, currency, rates), currency, language)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    /// Reads a formatted amount back, keeping only digits and the decimal mark.
    fn parse_back(text: &str, language: Language) -> Decimal {
        let decimal = NumberStyle::for_language(language).decimal;
        let digits: String = text
            .chars()
            .filter_map(|c| {
                if c.is_ascii_digit() || c == '-' {
                    Some(c)
                } else if c == decimal {
                    Some('.')
                } else {
                    None
                }
            })
            .collect();
        digits.parse().unwrap()
    }

    #[test]
    fn test_format_per_language() {
        assert_eq!(format_amount(dec!(1234.5), Currency::Eur, Language::En), "€1,234.50");
        assert_eq!(format_amount(dec!(1234.5), Currency::Eur, Language::De), "1.234,50 €");
        assert_eq!(format_amount(dec!(1234.5), Currency::Eur, Language::Es), "1234,50 €");
        assert_eq!(format_amount(dec!(12345.678), Currency::Eur, Language::Es), "12.345,68 €");
    }

    #[test]
    fn test_format_symbols() {
        assert_eq!(format_amount(dec!(9.99), Currency::Usd, Language::En), "$9.99");
        assert_eq!(format_amount(dec!(9.99), Currency::Usd, Language::Es), "9,99 US$");
        assert_eq!(format_amount(dec!(9.99), Currency::Usd, Language::De), "9,99 $");
        assert_eq!(format_amount(dec!(420000), Currency::Cop, Language::En), "COP 420,000");
        assert_eq!(format_amount(dec!(420000), Currency::Cop, Language::De), "420.000 COP");
    }

    #[test]
    fn test_cop_has_no_fraction_digits() {
        assert_eq!(format_amount(dec!(4200.5), Currency::Cop, Language::Es), "4201 COP");
        assert_eq!(format_amount(dec!(4200.49), Currency::Cop, Language::Es), "4200 COP");
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        assert_eq!(format_amount(dec!(0.005), Currency::Usd, Language::En), "$0.01");
        assert_eq!(format_amount(dec!(-12.5), Currency::Usd, Language::En), "-$12.50");
        assert_eq!(format_amount(dec!(-0.001), Currency::Eur, Language::De), "0,00 €");
    }

    #[test]
    fn test_format_currency_converts() {
        let rates = RateTable::fallback();

        assert_eq!(
            format_currency(dec!(100), Currency::Eur, &rates, Language::Es),
            "85,00 €"
        );
        assert_eq!(
            format_currency(dec!(100), Currency::Cop, &rates, Language::De),
            "420.000 COP"
        );
    }

    #[test]
    fn test_missing_rate_is_not_converted() {
        let rates = RateTable::empty();

        assert_eq!(convert_from_usd(dec!(50), Currency::Usd, &rates), dec!(50));
        assert_eq!(format_currency(dec!(50), Currency::Usd, &rates, Language::En), "$50.00");
        assert_eq!(format_currency(dec!(50), Currency::Eur, &rates, Language::En), "€50.00");
    }

    proptest! {
        #[test]
        fn prop_formatted_amount_parses_back(
            cents in 0u64..10_000_000_000,
            currency_idx in 0usize..3,
            language_idx in 0usize..3,
        ) {
            let currency = Currency::ALL[currency_idx];
            let language = Language::ALL[language_idx];
            let rates = RateTable::fallback();
            let amount = Decimal::new(cents as i64, 2);

            let text = format_currency(amount, currency, &rates, language);
            let expected = (amount * rates.rate_for(currency).unwrap()).round_dp_with_strategy(
                currency.fraction_digits(),
                RoundingStrategy::MidpointAwayFromZero,
            );

            prop_assert_eq!(parse_back(&text, language), expected);
        }
    }
}
