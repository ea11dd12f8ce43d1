//! Date formatting

use crate::date::HijriDate;
use crate::options::FormatOptions;
use crate::pattern::{Field, FormatPart, Pattern};

/// Format a date using the given pattern.
pub fn format_date(date: &HijriDate, pattern: &Pattern, opts: &FormatOptions) -> String {
    let mut result = String::new();

    for part in pattern.parts() {
        match part {
            FormatPart::Field(field) => {
                let formatted = format_field(*field, date, opts);
                result.push_str(&formatted);
            }
            FormatPart::Literal(s) => {
                result.push_str(s);
            }
        }
    }

    result
}

/// Format a single date field.
fn format_field(field: Field, date: &HijriDate, opts: &FormatOptions) -> String {
    let locale = opts.locale;
    let digits = opts.digits;

    match field {
        // Year formatting
        Field::Year4 => digits.apply(&format!("{:04}", date.year())),
        Field::Year2 => digits.apply(&format!("{:02}", date.year().rem_euclid(100))),

        // Month formatting
        Field::MonthName => locale.month_name(date.month()).unwrap_or_default().to_string(),
        Field::Month2 => digits.apply(&format!("{:02}", date.month())),
        Field::Month => digits.apply(&date.month().to_string()),

        // Day formatting
        Field::Day2 => digits.apply(&format!("{:02}", date.day())),
        Field::Day => digits.apply(&date.day().to_string()),
        Field::WeekdayName => locale
            .weekday_name(date.weekday())
            .unwrap_or_default()
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;
    use crate::options::Digits;

    fn date(year: i32, month: u32, day: u32) -> HijriDate {
        HijriDate::new(year, month, day).unwrap()
    }

    #[test]
    fn test_padding() {
        let opts = FormatOptions::default();
        let pattern = Pattern::parse("YYYY-MM-DD YY");
        assert_eq!(format_date(&date(5, 3, 7), &pattern, &opts), "0005-03-07 05");
    }

    #[test]
    fn test_arabic_indic_digits_leave_names_alone() {
        let opts = FormatOptions {
            locale: Locale::Ar,
            digits: Digits::ArabicIndic,
        };
        let pattern = Pattern::parse("D MONTH YYYY");
        assert_eq!(format_date(&date(1445, 9, 1), &pattern, &opts), "١ رمضان ١٤٤٥");
    }
}
