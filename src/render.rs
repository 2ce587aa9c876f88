use analytics::ComparisonRow;
use core_types::ValueFormat;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const TRILLION: Decimal = dec!(1_000_000_000_000);
const BILLION: Decimal = dec!(1_000_000_000);
const MILLION: Decimal = dec!(1_000_000);

/// Formats a percentage with an explicit sign for positive values,
/// e.g. `+3.4%` / `-1.2%`.
pub fn format_percentage(value: Decimal, precision: u32) -> String {
    let rounded = value.round_dp(precision);
    let sign = if rounded.is_sign_positive() && !rounded.is_zero() {
        "+"
    } else {
        ""
    };
    format!("{sign}{rounded:.prec$}%", prec = precision as usize)
}

/// Formats a currency amount with a magnitude suffix, e.g. `$1.9T`, `$409.0B`.
pub fn format_currency(value: Decimal) -> String {
    let abs = value.abs();
    let sign = if value.is_sign_negative() { "-" } else { "" };
    if abs >= TRILLION {
        format!("{sign}${:.1}T", abs / TRILLION)
    } else if abs >= BILLION {
        format!("{sign}${:.1}B", abs / BILLION)
    } else if abs >= MILLION {
        format!("{sign}${:.1}M", abs / MILLION)
    } else {
        format!("{sign}${abs}")
    }
}

/// Formats a raw metric value per its presentation category.
pub fn format_value(value: Decimal, format: ValueFormat, precision: u32) -> String {
    match format {
        ValueFormat::Percentage => {
            format!("{:.prec$}%", value.round_dp(precision), prec = precision as usize)
        }
        ValueFormat::Currency => format_currency(value),
        ValueFormat::Plain => format!("{:.prec$}", value.round_dp(precision), prec = precision as usize),
    }
}

/// Formats a comparison row's diff column: the best row gets the "Best"
/// label, everything else a signed difference.
pub fn format_diff(row: &ComparisonRow, precision: u32) -> String {
    if row.is_best {
        return "Best".to_string();
    }
    match row.format {
        ValueFormat::Percentage => format_percentage(row.diff, precision),
        ValueFormat::Currency => {
            let sign = if row.diff.is_sign_positive() { "+" } else { "" };
            format!("{sign}{}", format_currency(row.diff))
        }
        ValueFormat::Plain => {
            let rounded = row.diff.round_dp(precision);
            let sign = if rounded.is_sign_positive() { "+" } else { "" };
            format!("{sign}{rounded:.prec$}", prec = precision as usize)
        }
    }
}
