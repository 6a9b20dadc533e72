use time::{format_description::well_known::Rfc3339, macros::format_description, Date, OffsetDateTime};

pub(crate) fn format_offset(value: OffsetDateTime) -> String {
    value.format(&Rfc3339).unwrap_or_else(|_| value.to_string())
}

/// Parse a birth date in the form's `DD-MM-YYYY` textual format.
pub(crate) fn parse_date_of_birth(value: &str) -> Option<Date> {
    let format = format_description!("[day]-[month]-[year]");
    Date::parse(value, format).ok()
}

/// Whole years between `birth` and `today`, counting a year only once the
/// birthday has passed. A plain year difference would overcount anyone who
/// has not had their birthday yet this year.
pub(crate) fn age_on(birth: Date, today: Date) -> i32 {
    let mut age = today.year() - birth.year();
    if (u8::from(today.month()), today.day()) < (u8::from(birth.month()), birth.day()) {
        age -= 1;
    }
    age
}
