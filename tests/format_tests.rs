use hijri_cal::{Digits, FormatOptions, HijriDate, Locale};

fn date(year: i32, month: u32, day: u32) -> HijriDate {
    HijriDate::new(year, month, day).unwrap()
}

#[test]
fn test_format_day_month_year_en() {
    assert_eq!(date(1445, 1, 1).format("D MONTH YYYY", Locale::En), "1 Muharram 1445");
}

#[test]
fn test_format_day_month_year_ar() {
    assert_eq!(date(1445, 1, 1).format("D MONTH YYYY", Locale::Ar), "1 محرم 1445");
}

#[test]
fn test_format_order_is_preserved() {
    assert_eq!(date(1445, 9, 1).format("YYYY MONTH D", Locale::En), "1445 Ramadan 1");
    assert_eq!(date(1445, 9, 1).format("MONTH/D", Locale::En), "Ramadan/1");
}

#[test]
fn test_numeric_fields() {
    let d = date(1445, 9, 7);
    assert_eq!(d.format("YYYY-MM-DD", Locale::En), "1445-09-07");
    assert_eq!(d.format("D/M/YY", Locale::En), "7/9/45");
}

#[test]
fn test_unrecognized_text_passes_through() {
    let d = date(1445, 9, 7);
    assert_eq!(d.format("x, D! ~ Y", Locale::En), "x, 7! ~ Y");
    assert_eq!(d.format("", Locale::En), "");
    assert_eq!(d.format("هـ", Locale::Ar), "هـ");
}

#[test]
fn test_bracketed_text_is_literal() {
    let d = date(1445, 9, 7);
    assert_eq!(d.format("[Day] D [of] MONTH", Locale::En), "Day 7 of Ramadan");
    assert_eq!(d.format("[D", Locale::En), "[7");
}

#[test]
fn test_uppercase_words_need_brackets() {
    let d = date(1445, 9, 7);
    assert_eq!(d.format("DATE: D", Locale::En), "7ATE: 7");
    assert_eq!(d.format("[DATE]: D", Locale::En), "DATE: 7");
}

#[test]
fn test_weekday_name() {
    // 11 March 2024 was a Monday
    let d = date(1445, 9, 1);
    assert_eq!(d.format("WEEKDAY, D MONTH", Locale::En), "Monday, 1 Ramadan");
    assert_eq!(d.weekday_name(Locale::Ar), "الاثنين");
}

#[test]
fn test_month_names() {
    let d = date(1445, 12, 1);
    assert_eq!(d.month_name(Locale::En), "Dhu al-Hijjah");
    assert_eq!(d.month_name(Locale::Ar), "ذو الحجة");
    for month in 1..=12 {
        let d = date(1445, month, 1);
        assert!(!d.month_name(Locale::En).is_empty());
        assert!(!d.month_name(Locale::Ar).is_empty());
    }
}

#[test]
fn test_unsupported_locale_falls_back_to_english() {
    let d = date(1445, 1, 1);
    assert_eq!(d.format("MONTH", Locale::resolve("fr")), "Muharram");
    assert!("fr".parse::<Locale>().is_err());
}

#[test]
fn test_native_digits() {
    let d = date(1445, 1, 1);
    let opts = FormatOptions::for_locale(Locale::Ar);
    assert_eq!(d.format_with("D MONTH YYYY", &opts), "١ محرم ١٤٤٥");

    let opts = FormatOptions {
        locale: Locale::En,
        digits: Digits::ArabicIndic,
    };
    assert_eq!(d.format_with("DD/MM", &opts), "٠١/٠١");
}

#[test]
fn test_repeated_formatting_is_stable() {
    let d = date(1446, 6, 15);
    let first = d.format("D MONTH YYYY", Locale::En);
    for _ in 0..10 {
        assert_eq!(d.format("D MONTH YYYY", Locale::En), first);
    }
}
