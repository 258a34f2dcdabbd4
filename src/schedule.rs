use time::{
	macros::{format_description, time},
	Duration, Time,
};

use crate::{Error, Result};

const MINUTES_PER_DAY: i64 = 24 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrayerKind {
	Canonical,
	/// Listed with the prayers but never counted down to.
	Sunrise,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrayerEntry {
	pub name: &'static str,
	pub time: Time,
	pub kind: PrayerKind,
}

impl PrayerEntry {
	const fn new(name: &'static str, time: Time, kind: PrayerKind) -> Self {
		PrayerEntry { name, time, kind }
	}

	pub fn is_sunrise(&self) -> bool {
		self.kind == PrayerKind::Sunrise
	}
}

/// One representative day, in display order.
pub static SCHEDULE: [PrayerEntry; 6] = [
	PrayerEntry::new("Fajr", time!(5:47), PrayerKind::Canonical),
	PrayerEntry::new("Shuruk", time!(7:32), PrayerKind::Sunrise),
	PrayerEntry::new("Dhuhr", time!(12:36), PrayerKind::Canonical),
	PrayerEntry::new("Asr", time!(14:58), PrayerKind::Canonical),
	PrayerEntry::new("Maghrib", time!(17:23), PrayerKind::Canonical),
	PrayerEntry::new("Isha", time!(18:53), PrayerKind::Canonical),
];

/// Which entries may become the next prayer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
	All,
	Canonical,
}

impl Filter {
	fn accepts(&self, entry: &PrayerEntry) -> bool {
		match self {
			Filter::All => true,
			Filter::Canonical => !entry.is_sunrise(),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextPrayer {
	/// Position in the schedule the entry was taken from.
	pub index: usize,
	pub entry: PrayerEntry,
	pub remaining: Duration,
	/// Set when every entry of today has passed and the first one of
	/// tomorrow was picked.
	pub wrapped: bool,
}

fn minute_of_day(time: Time) -> i64 {
	time.hour() as i64 * 60 + time.minute() as i64
}

/// Find the first accepted entry strictly later than `now`. After the last
/// one of the day this wraps around to the first accepted entry of the next
/// day. `None` only if the filter accepts nothing.
pub fn next_prayer(schedule: &[PrayerEntry], now: Time, filter: Filter) -> Option<NextPrayer> {
	let now = minute_of_day(now);
	let mut eligible = schedule.iter().enumerate().filter(|(_, entry)| filter.accepts(entry));
	let first = eligible.clone().next()?;
	let (index, entry, wrapped) = match eligible.find(|(_, entry)| minute_of_day(entry.time) > now) {
		Some((index, entry)) => (index, entry, false),
		None => (first.0, first.1, true),
	};
	let mut diff = minute_of_day(entry.time) - now;
	if wrapped {
		diff += MINUTES_PER_DAY;
	}
	Some(NextPrayer {
		index,
		entry: *entry,
		remaining: Duration::minutes(diff),
		wrapped,
	})
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStatus {
	Next,
	Passed,
	Upcoming,
}

pub fn classify(index: usize, entry: &PrayerEntry, now: Time, next: Option<usize>) -> RowStatus {
	if next == Some(index) {
		RowStatus::Next
	} else if minute_of_day(entry.time) <= minute_of_day(now) {
		RowStatus::Passed
	} else {
		RowStatus::Upcoming
	}
}

pub fn parse_time(input: &str) -> Result<Time> {
	Time::parse(input, format_description!("[hour]:[minute]")).map_err(|source| Error::Time {
		input: input.to_owned(),
		source,
	})
}

/// `14:30`
pub fn format_clock(time: Time) -> String {
	format!("{:02}:{:02}", time.hour(), time.minute())
}

/// `0:28`
pub fn format_hours_minutes(remaining: Duration) -> String {
	format!("{}:{:02}", remaining.whole_hours(), remaining.whole_minutes() % 60)
}

/// `0h28`
pub fn format_short(remaining: Duration) -> String {
	format!("{}h{:02}", remaining.whole_hours(), remaining.whole_minutes() % 60)
}

/// `0:28:30`, the seconds are simulated
pub fn format_countdown(remaining: Duration, seconds: u8) -> String {
	format!("{}:{:02}", format_hours_minutes(remaining), seconds)
}
