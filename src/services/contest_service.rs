//! Contest browsing service
//!
//! The public listing is served from a fixed catalog of sample contests.
//! Countdown strings are computed against the request time.

use chrono::{DateTime, Duration, Utc};

use crate::{
    error::{AppError, AppResult},
    models::ContestCard,
    utils::countdown_label,
};

/// Sample catalog entry; offsets are relative to the time of the request
struct SampleContest {
    id: &'static str,
    title: &'static str,
    image: &'static str,
    starts_in_minutes: i64,
    length_minutes: i64,
    is_featured: bool,
    registration_open: bool,
}

const SAMPLE_CONTESTS: &[SampleContest] = &[
    SampleContest {
        id: "weekly-round-42",
        title: "Weekly Round #42",
        image: "/images/contests/weekly.png",
        starts_in_minutes: -45,
        length_minutes: 120,
        is_featured: true,
        registration_open: false,
    },
    SampleContest {
        id: "graph-theory-sprint",
        title: "Graph Theory Sprint",
        image: "/images/contests/graphs.png",
        starts_in_minutes: 2 * 60 + 30,
        length_minutes: 90,
        is_featured: true,
        registration_open: true,
    },
    SampleContest {
        id: "dynamic-programming-marathon",
        title: "Dynamic Programming Marathon",
        image: "/images/contests/dp.png",
        starts_in_minutes: 3 * 24 * 60,
        length_minutes: 5 * 60,
        is_featured: false,
        registration_open: true,
    },
    SampleContest {
        id: "beginner-cup-7",
        title: "Beginner Cup #7",
        image: "/images/contests/beginner.png",
        starts_in_minutes: -3 * 24 * 60,
        length_minutes: 150,
        is_featured: false,
        registration_open: false,
    },
];

impl SampleContest {
    fn to_card(&self, now: DateTime<Utc>) -> ContestCard {
        let start = now + Duration::minutes(self.starts_in_minutes);
        let end = start + Duration::minutes(self.length_minutes);

        ContestCard {
            id: self.id.to_string(),
            title: self.title.to_string(),
            image: self.image.to_string(),
            countdown: countdown_label(start, end, now),
            is_live: now >= start && now < end,
            is_featured: self.is_featured,
            registration_open: self.registration_open,
        }
    }
}

/// Contest service for the public listing
pub struct ContestService;

impl ContestService {
    /// All listing cards as of `now`
    pub fn list_cards(now: DateTime<Utc>) -> Vec<ContestCard> {
        SAMPLE_CONTESTS.iter().map(|c| c.to_card(now)).collect()
    }

    /// One listing card by id
    pub fn get_card(id: &str, now: DateTime<Utc>) -> AppResult<ContestCard> {
        SAMPLE_CONTESTS
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.to_card(now))
            .ok_or_else(|| AppError::NotFound("Contest not found".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_flags() {
        let cards = ContestService::list_cards(Utc::now());

        assert_eq!(cards.len(), SAMPLE_CONTESTS.len());

        let live: Vec<_> = cards.iter().filter(|c| c.is_live).collect();
        assert_eq!(live.len(), 1);
        assert!(live[0].countdown.starts_with("Ends in"));
    }

    #[test]
    fn test_countdowns() {
        let now = Utc::now();

        let upcoming = ContestService::get_card("graph-theory-sprint", now).unwrap();
        assert_eq!(upcoming.countdown, "Starts in 2h 30m");
        assert!(!upcoming.is_live);

        let ended = ContestService::get_card("beginner-cup-7", now).unwrap();
        assert_eq!(ended.countdown, "Ended");
    }

    #[test]
    fn test_unknown_contest() {
        let err = ContestService::get_card("no-such-contest", Utc::now()).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
