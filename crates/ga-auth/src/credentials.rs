//! Expected client-credential derivation.
//!
//! A genuine client proves freshness by computing its username and
//! password from the current date and a self-chosen 8-digit seed. The
//! server recomputes both on every verification attempt; nothing here is
//! cached, so a request straddling midnight is judged against the new day.

use super::AuthError;
use chrono::Datelike;
use chrono::NaiveDate;

/// Derives the expected username for a given date.
///
/// Interleaves the lowercase full weekday and month names character by
/// character, weekday first, stopping once the shorter name is exhausted.
/// Remaining characters of the longer name are not appended.
pub fn expected_username(today: NaiveDate) -> String {
    let day = today.format("%A").to_string().to_lowercase();
    let month = today.format("%B").to_string().to_lowercase();
    day.chars()
        .zip(month.chars())
        .flat_map(|(d, m)| [d, m])
        .collect()
}

/// Derives the expected password for a given date and 8-digit seed.
///
/// Each output digit is the seed digit plus a positional digit of the
/// date (day, month, and year spread across the eight positions), mod 10.
/// The result is always exactly 8 ASCII digits.
///
/// Fails with [`AuthError::InvalidSeed`] unless `random` is exactly 8
/// ASCII decimal digits. Leading zeros are significant, which is why the
/// seed travels as a string rather than a number.
pub fn expected_password(today: NaiveDate, random: &str) -> Result<String, AuthError> {
    if random.len() != 8 || !random.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AuthError::InvalidSeed);
    }
    let day = today.day();
    let month = today.month();
    let year = today.year() as u32;
    // seed[i] pairs with: day/10, month/10, millennium, day%10, month%10,
    // century, decade, year%10
    let reference = [
        day / 10,
        month / 10,
        year / 1000,
        day % 10,
        month % 10,
        (year / 100) % 10,
        (year / 10) % 10,
        year % 10,
    ];
    Ok(random
        .bytes()
        .map(|b| (b - b'0') as u32)
        .zip(reference)
        .map(|(seed, reference)| (seed + reference) % 10)
        .map(|digit| (b'0' + digit as u8) as char)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Independent index-walking rendition of the interleave, to check the
    /// iterator implementation against rather than trusting prose.
    fn interleave(day: &str, month: &str) -> String {
        let day = day.chars().collect::<Vec<_>>();
        let month = month.chars().collect::<Vec<_>>();
        let mut out = String::new();
        for i in 0..day.len().min(month.len()) {
            out.push(day[i]);
            out.push(month[i]);
        }
        out
    }

    #[test]
    fn username_on_a_wednesday_in_october() {
        // 2024-10-02 was a Wednesday: "wednesday" x "october"
        assert_eq!(expected_username(date(2024, 10, 2)), "woecdtnoebsedr");
        assert_eq!(
            expected_username(date(2024, 10, 2)),
            interleave("wednesday", "october")
        );
    }

    #[test]
    fn username_length_is_twice_the_shorter_name() {
        let mut day = date(2024, 1, 1);
        for _ in 0..366 {
            let weekday = day.format("%A").to_string();
            let month = day.format("%B").to_string();
            assert_eq!(
                expected_username(day).len(),
                2 * weekday.len().min(month.len()),
                "on {}",
                day,
            );
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn username_matches_independent_simulation() {
        let mut day = date(2023, 6, 15);
        for _ in 0..400 {
            let weekday = day.format("%A").to_string().to_lowercase();
            let month = day.format("%B").to_string().to_lowercase();
            assert_eq!(expected_username(day), interleave(&weekday, &month));
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn password_worked_example() {
        // day2 = "05", month2 = "03", year4 = "2024"
        assert_eq!(
            expected_password(date(2024, 3, 5), "12345678").unwrap(),
            "12598692"
        );
    }

    #[test]
    fn password_zero_seed_reads_off_the_date() {
        assert_eq!(
            expected_password(date(2024, 3, 5), "00000000").unwrap(),
            "00253024"
        );
    }

    #[test]
    fn password_is_always_eight_ascii_digits() {
        for seed in ["00000000", "99999999", "12345678", "07070707"] {
            for day in [date(2024, 1, 1), date(2024, 12, 31), date(1999, 2, 28)] {
                let out = expected_password(day, seed).unwrap();
                assert_eq!(out.len(), 8);
                assert!(out.bytes().all(|b| b.is_ascii_digit()));
            }
        }
    }

    #[test]
    fn password_rejects_bad_seeds() {
        for seed in ["", "1234567", "123456789", "1234567a", "1234 678", "١٢٣٤٥٦٧٨"] {
            assert!(matches!(
                expected_password(date(2024, 3, 5), seed),
                Err(AuthError::InvalidSeed)
            ));
        }
    }
}
