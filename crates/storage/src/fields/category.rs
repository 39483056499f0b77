use chrono::{Datelike, NaiveDate};

/// Age brackets used to group athletes, scanned in order; the first bracket
/// whose upper bound is >= the age wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryTable {
    pub name: &'static str,
    brackets: &'static [(i32, &'static str)],
    fallback: &'static str,
}

/// Table used by the admin screens, the public form and the spreadsheet import.
pub const REGISTRATION: CategoryTable = CategoryTable {
    name: "registration",
    brackets: &[
        (7, "Sub-7"),
        (9, "Sub-9"),
        (11, "Sub-11"),
        (13, "Sub-13"),
        (15, "Sub-15"),
        (17, "Sub-17"),
        (20, "Sub-20"),
    ],
    fallback: "Adulto",
};

/// Coarser table used for athletes arriving through the form webhook.
pub const WEBHOOK: CategoryTable = CategoryTable {
    name: "webhook",
    brackets: &[(12, "Sub-12"), (15, "Sub-15"), (17, "Sub-17"), (20, "Sub-20")],
    fallback: "Adulto",
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub age: i32,
    pub category: &'static str,
}

impl CategoryTable {
    pub fn category_for_age(&self, age: i32) -> &'static str {
        self.brackets
            .iter()
            .find(|(max_age, _)| age <= *max_age)
            .map(|(_, label)| *label)
            .unwrap_or(self.fallback)
    }

    /// Age is the difference between calendar years; month and day are ignored.
    pub fn classify(&self, birth_date: NaiveDate, reference: NaiveDate) -> Classification {
        let age = reference.year() - birth_date.year();
        Classification {
            age,
            category: self.category_for_age(age),
        }
    }

    /// Same as [`CategoryTable::classify`] for a `YYYY-MM-DD` string.
    pub fn classify_iso(&self, birth_date: &str, reference: NaiveDate) -> Option<Classification> {
        NaiveDate::parse_from_str(birth_date, "%Y-%m-%d")
            .ok()
            .map(|date| self.classify(date, reference))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_classify_reference_example() {
        let reference = date(2024, 1, 10);
        let birth = date(2010, 5, 15);

        let form = REGISTRATION.classify(birth, reference);
        assert_eq!(form.age, 14);
        assert_eq!(form.category, "Sub-15");

        let hook = WEBHOOK.classify(birth, reference);
        assert_eq!(hook.age, 14);
        assert_eq!(hook.category, "Sub-15");
    }

    #[test]
    fn test_age_ignores_month_and_day() {
        let reference = date(2024, 1, 1);
        assert_eq!(REGISTRATION.classify(date(2010, 12, 31), reference).age, 14);
    }

    #[test]
    fn test_registration_boundaries() {
        let cases = [
            (7, "Sub-7"),
            (8, "Sub-9"),
            (9, "Sub-9"),
            (10, "Sub-11"),
            (11, "Sub-11"),
            (12, "Sub-13"),
            (13, "Sub-13"),
            (14, "Sub-15"),
            (15, "Sub-15"),
            (16, "Sub-17"),
            (17, "Sub-17"),
            (18, "Sub-20"),
            (20, "Sub-20"),
            (21, "Adulto"),
        ];
        for (age, expected) in cases {
            assert_eq!(REGISTRATION.category_for_age(age), expected, "age {age}");
        }
    }

    #[test]
    fn test_webhook_boundaries() {
        let cases = [
            (5, "Sub-12"),
            (12, "Sub-12"),
            (13, "Sub-15"),
            (15, "Sub-15"),
            (16, "Sub-17"),
            (17, "Sub-17"),
            (18, "Sub-20"),
            (20, "Sub-20"),
            (21, "Adulto"),
        ];
        for (age, expected) in cases {
            assert_eq!(WEBHOOK.category_for_age(age), expected, "age {age}");
        }
    }

    #[test]
    fn test_tables_diverge_at_twelve() {
        assert_eq!(REGISTRATION.category_for_age(12), "Sub-13");
        assert_eq!(WEBHOOK.category_for_age(12), "Sub-12");
    }

    #[test]
    fn test_classify_iso_rejects_bad_dates() {
        assert!(REGISTRATION.classify_iso("2010-02-30", date(2024, 1, 1)).is_none());
        assert_eq!(
            REGISTRATION
                .classify_iso("2016-03-01", date(2024, 1, 1))
                .map(|c| c.category),
            Some("Sub-9")
        );
    }
}
