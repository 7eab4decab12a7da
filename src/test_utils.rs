use crate::{CivilDate, DatePeriod};

pub fn civil(year: u16, month: u8, day: u8) -> CivilDate {
    CivilDate::from_ymd(year, month, day).expect("invalid test date")
}

pub fn civil_hms(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> CivilDate {
    CivilDate::from_ymd_hms(year, month, day, hour, minute, second).expect("invalid test date")
}

pub fn period(start: &str, end: &str) -> DatePeriod {
    DatePeriod::parse(start, end).expect("invalid test period")
}
