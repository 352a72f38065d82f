use chrono::Local;

/// Record timestamp format used across every sheet.
pub const STAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn now_stamp() -> String {
    Local::now().format(STAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[test]
    fn stamp_parses_back() {
        let stamp = now_stamp();
        assert!(NaiveDateTime::parse_from_str(&stamp, STAMP_FORMAT).is_ok());
        assert_eq!(stamp.len(), 19);
    }
}
