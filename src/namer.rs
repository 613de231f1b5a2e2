use chrono::{Datelike, NaiveDate};

pub const FILE_SUFFIX: &str = "_covid19QC.csv";

/// `{day}-{month}-{year}_covid19QC.csv`, day and month unpadded.
///
/// Day comes first, so `9-3-2020` is the 9th of March. Easy to misread as
/// month-first; kept that way so existing archives stay consistent.
pub fn file_name_for(date: NaiveDate) -> String {
    format!(
        "{}-{}-{}{}",
        date.day(),
        date.month(),
        date.year(),
        FILE_SUFFIX
    )
}
