//! Read-only sample data for the booking screens.
//!
//! Built once at startup and handed to the app; nothing here is mutated.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// A movie currently showing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    pub title: String,
    pub genre: String,
    pub duration: String,
    pub rating: String,
    pub language: String,
    pub certificate: String,
    pub show_times: Vec<String>,
}

impl Movie {
    /// Showtime at `index`, or "N/A" when there is none
    pub fn show_time(&self, index: usize) -> &str {
        self.show_times
            .get(index)
            .map(String::as_str)
            .unwrap_or("N/A")
    }
}

/// One entry in the date strip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowDate {
    pub date: NaiveDate,
    /// "Today", "Tomorrow", or the weekday
    pub label: String,
    /// e.g. "Tue 04"
    pub day: String,
}

/// A past or upcoming ticket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRecord {
    pub movie_title: String,
    pub starts_at: NaiveDateTime,
    pub seats: Vec<String>,
}

/// Sample user shown on the profile tab
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub city: String,
}

/// Everything the booking screens display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixtures {
    pub dates: Vec<ShowDate>,
    pub movies: Vec<Movie>,
    pub bookings: Vec<BookingRecord>,
    pub profile: Profile,
}

/// Number of days shown in the date strip
pub const DATE_STRIP_DAYS: i64 = 5;

impl Fixtures {
    /// Sample fixtures anchored on `today`
    pub fn sample(today: NaiveDate) -> Self {
        Self {
            dates: date_strip(today, DATE_STRIP_DAYS),
            movies: sample_movies(),
            bookings: sample_bookings(today),
            profile: Profile {
                name: "FlicksNow User".to_string(),
                email: "user@example.com".to_string(),
                city: "Chennai".to_string(),
            },
        }
    }
}

/// Consecutive dates starting at `today`
pub fn date_strip(today: NaiveDate, days: i64) -> Vec<ShowDate> {
    (0..days)
        .map(|offset| {
            let date = today + Duration::days(offset);
            let weekday = date.format("%a").to_string();
            let label = match offset {
                0 => "Today".to_string(),
                1 => "Tomorrow".to_string(),
                _ => weekday.clone(),
            };
            ShowDate {
                date,
                label,
                day: format!("{} {:02}", weekday, date.day()),
            }
        })
        .collect()
}

fn movie(
    title: &str,
    genre: &str,
    duration: &str,
    rating: &str,
    certificate: &str,
    show_times: &[&str],
) -> Movie {
    Movie {
        title: title.to_string(),
        genre: genre.to_string(),
        duration: duration.to_string(),
        rating: rating.to_string(),
        language: "English".to_string(),
        certificate: certificate.to_string(),
        show_times: show_times.iter().map(|s| s.to_string()).collect(),
    }
}

fn sample_movies() -> Vec<Movie> {
    vec![
        movie(
            "The Last Stand",
            "Action • Thriller",
            "2h 15m",
            "4.5",
            "U/A",
            &["10:30", "13:15", "16:00", "20:30"],
        ),
        movie(
            "Love in Paris",
            "Romance • Drama",
            "2h 02m",
            "4.2",
            "U",
            &["11:00", "14:30", "18:15"],
        ),
        movie(
            "Galaxy Quest",
            "Sci-Fi • Adventure",
            "2h 20m",
            "4.7",
            "U/A",
            &["09:45", "13:00", "17:40", "21:10"],
        ),
    ]
}

fn sample_bookings(today: NaiveDate) -> Vec<BookingRecord> {
    let at = |days: i64, h: u32, m: u32| {
        let time = NaiveTime::from_hms_opt(h, m, 0).unwrap_or_default();
        (today + Duration::days(days)).and_time(time)
    };
    vec![
        BookingRecord {
            movie_title: "Galaxy Quest".to_string(),
            starts_at: at(2, 17, 40),
            seats: vec!["F7".to_string(), "F8".to_string()],
        },
        BookingRecord {
            movie_title: "Love in Paris".to_string(),
            starts_at: at(-6, 18, 15),
            seats: vec!["C3".to_string()],
        },
    ]
}
