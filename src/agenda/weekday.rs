use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

const DUTCH_DAY_NAMES: [&str; 7] = [
    "Maandag",
    "Dinsdag",
    "Woensdag",
    "Donderdag",
    "Vrijdag",
    "Zaterdag",
    "Zondag",
];

/// A day of the week, Monday first.
///
/// The short code (`mon`, `tue`, ...) is what `FromStr`, `Into<&'static str>` and serde use,
/// while `Display` prints the Dutch day name.
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
pub enum Weekday {
    #[strum(serialize = "mon")]
    #[serde(rename = "mon")]
    Monday,
    #[strum(serialize = "tue")]
    #[serde(rename = "tue")]
    Tuesday,
    #[strum(serialize = "wed")]
    #[serde(rename = "wed")]
    Wednesday,
    #[strum(serialize = "thu")]
    #[serde(rename = "thu")]
    Thursday,
    #[strum(serialize = "fri")]
    #[serde(rename = "fri")]
    Friday,
    #[strum(serialize = "sat")]
    #[serde(rename = "sat")]
    Saturday,
    #[strum(serialize = "sun")]
    #[serde(rename = "sun")]
    Sunday,
}

impl Weekday {
    /// Position in the week, Monday being 0.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn dayname(self) -> &'static str {
        DUTCH_DAY_NAMES[self.index()]
    }

    pub fn short(self) -> &'static str {
        self.into()
    }
}

impl Display for Weekday {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.dayname())
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(weekday: chrono::Weekday) -> Self {
        match weekday {
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
            chrono::Weekday::Sun => Weekday::Sunday,
        }
    }
}
