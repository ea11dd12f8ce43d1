use hijri_cal::{Digits, FormatOptions, Locale};

#[test]
fn test_default_options() {
    let opts = FormatOptions::default();
    assert_eq!(opts.locale, Locale::En);
    assert_eq!(opts.digits, Digits::Latin);
}

#[test]
fn test_for_locale_uses_native_digits() {
    assert_eq!(FormatOptions::for_locale(Locale::En).digits, Digits::Latin);
    assert_eq!(FormatOptions::for_locale(Locale::Ar).digits, Digits::ArabicIndic);
    assert_eq!(FormatOptions::with_locale(Locale::Ar).digits, Digits::Latin);
}

#[test]
fn test_locale_codes() {
    assert_eq!(Locale::En.code(), "en");
    assert_eq!(Locale::Ar.to_string(), "ar");
    assert!(Locale::Ar.is_rtl());
    assert!(!Locale::En.is_rtl());
}
