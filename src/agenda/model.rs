use super::time::{SimpleDate, SimpleTime};
use super::weekday::Weekday;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

const DATA_CONTENT_PREFIX: &str = "events/event-";

/// An activity in the agenda, e.g. a lesson.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Event {
    /// Full display name
    pub name: String,
    /// Shorthand name (Wiskunde B -> wisb, Nederlands -> nl)
    pub short: String,
    pub location: String,
    pub start: SimpleTime,
    pub end: SimpleTime,
}

impl Event {
    pub fn new(
        name: String,
        short: String,
        location: String,
        start: SimpleTime,
        end: SimpleTime,
    ) -> Self {
        Self {
            name,
            short,
            location,
            start,
            end,
        }
    }

    /// Lowercased name with spaces turned into hyphens. Other characters are kept.
    pub fn slug(&self) -> String {
        self.name.to_lowercase().replace(' ', "-")
    }

    /// Key used by the rendering layer to look up the event's assets.
    pub fn data_content_id(&self) -> String {
        format!("{}{}", DATA_CONTENT_PREFIX, self.slug())
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Event(name={}, short={}, location={}, start={}, end={})",
            self.name, self.short, self.location, self.start, self.end
        )
    }
}

/// A day's schedule: its weekday, its date and the events in the order they were given.
///
/// Equality and hashing compare the events element by element, so order matters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Day {
    name: Weekday,
    date: SimpleDate,
    events: Vec<Event>,
}

impl Day {
    pub fn new(name: Weekday, date: SimpleDate, events: Vec<Event>) -> Self {
        Self { name, date, events }
    }

    pub fn name(&self) -> Weekday {
        self.name
    }

    pub fn date(&self) -> SimpleDate {
        self.date
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl Display for Day {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Day ({} {}: [{}])",
            self.name.dayname(),
            self.date,
            self.events.iter().join(", ")
        )
    }
}

/// Seven days, Monday through Sunday, and the week number.
///
/// Days are kept by position only, a day's own [`Weekday`] isn't checked against its slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Week {
    number: u32,
    days: [Day; 7],
}

impl Week {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        number: u32,
        mon: Day,
        tue: Day,
        wed: Day,
        thu: Day,
        fri: Day,
        sat: Day,
        sun: Day,
    ) -> Self {
        Self {
            number,
            days: [mon, tue, wed, thu, fri, sat, sun],
        }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn days(&self) -> &[Day; 7] {
        &self.days
    }

    /// The day in `weekday`'s slot.
    pub fn day(&self, weekday: Weekday) -> &Day {
        &self.days[weekday.index()]
    }

    pub fn mon(&self) -> &Day {
        self.day(Weekday::Monday)
    }

    pub fn tue(&self) -> &Day {
        self.day(Weekday::Tuesday)
    }

    pub fn wed(&self) -> &Day {
        self.day(Weekday::Wednesday)
    }

    pub fn thu(&self) -> &Day {
        self.day(Weekday::Thursday)
    }

    pub fn fri(&self) -> &Day {
        self.day(Weekday::Friday)
    }

    pub fn sat(&self) -> &Day {
        self.day(Weekday::Saturday)
    }

    pub fn sun(&self) -> &Day {
        self.day(Weekday::Sunday)
    }

    /// Every event of the week, Monday first, each day in its own order.
    pub fn events(&self) -> impl Iterator<Item = &Event> {
        self.days.iter().flat_map(|day| day.events.iter())
    }
}
