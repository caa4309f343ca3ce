use crate::model::locale::{CurrencyFormat, SymbolPosition};

/// Renders an amount with the locale's symbol, separators, and fraction
/// digits. Rounds half away from zero at the locale's smallest unit.
pub fn format_currency(amount: f64, format: &CurrencyFormat) -> String {
    let scale = 10i64.pow(format.fraction_digits);
    let minor = (amount * scale as f64).round() as i64;
    let negative = minor < 0;
    let minor = minor.unsigned_abs();
    let scale = scale.unsigned_abs();

    let major = minor / scale;
    let fraction = minor % scale;

    let mut digits = group_digits(&major.to_string(), format.grouping_separator);
    if format.fraction_digits > 0 {
        digits.push(format.decimal_separator);
        digits.push_str(&format!(
            "{fraction:0width$}",
            width = format.fraction_digits as usize
        ));
    }

    let rendered = match format.symbol_position {
        SymbolPosition::Prefix => format!("{}{}", format.symbol, digits),
        SymbolPosition::Suffix => format!("{} {}", digits, format.symbol),
    };

    if negative {
        format!("-{rendered}")
    } else {
        rendered
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }

    grouped
}
