//! Built-in locale data.

/// Month names, Muharram first.
pub(crate) const MONTH_NAMES_EN: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabi' al-Awwal",
    "Rabi' al-Thani",
    "Jumada al-Ula",
    "Jumada al-Akhirah",
    "Rajab",
    "Sha'ban",
    "Ramadan",
    "Shawwal",
    "Dhu al-Qi'dah",
    "Dhu al-Hijjah",
];

pub(crate) const MONTH_NAMES_AR: [&str; 12] = [
    "محرم",
    "صفر",
    "ربيع الأول",
    "ربيع الآخر",
    "جمادى الأولى",
    "جمادى الآخرة",
    "رجب",
    "شعبان",
    "رمضان",
    "شوال",
    "ذو القعدة",
    "ذو الحجة",
];

/// Weekday names, Sunday first.
pub(crate) const DAY_NAMES_EN: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

pub(crate) const DAY_NAMES_SHORT_EN: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub(crate) const DAY_NAMES_AR: [&str; 7] = [
    "الأحد",
    "الاثنين",
    "الثلاثاء",
    "الأربعاء",
    "الخميس",
    "الجمعة",
    "السبت",
];

// Arabic has no conventional abbreviations; headers use the initial letter.
pub(crate) const DAY_NAMES_SHORT_AR: [&str; 7] = ["ح", "ن", "ث", "ر", "خ", "ج", "س"];

/// Arabic-Indic digits (U+0660..U+0669).
pub(crate) const ARABIC_INDIC_DIGITS: [char; 10] =
    ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'];
