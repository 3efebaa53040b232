use chrono::{DateTime, Local, TimeZone, Utc};

use crate::Workout;

const PLACEHOLDER_LABEL: &str = "Start";

/// Labels and data points of the progress chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub data: Vec<f64>,
}

impl ChartSeries {
    /// Single point series shown when there is nothing to chart. It does not represent a workout.
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            labels: vec![PLACEHOLDER_LABEL.to_string()],
            data: vec![0.0],
        }
    }

    #[must_use]
    pub fn has_data(&self) -> bool {
        self.data.iter().any(|v| *v > 0.0)
    }

    /// Keep showing `previous` unless this series contains at least one positive data point.
    #[must_use]
    pub fn or(self, previous: ChartSeries) -> ChartSeries {
        if self.has_data() { self } else { previous }
    }
}

impl Default for ChartSeries {
    fn default() -> Self {
        Self::placeholder()
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// `1/15/2024`
    #[default]
    MonthDayYear,
    /// `15.1.2024`
    DayMonthYear,
    /// `2024-01-15`
    Iso,
}

impl DateFormat {
    fn pattern(self) -> &'static str {
        match self {
            DateFormat::MonthDayYear => "%-m/%-d/%Y",
            DateFormat::DayMonthYear => "%-d.%-m.%Y",
            DateFormat::Iso => "%Y-%m-%d",
        }
    }
}

/// Render the calendar date of `date` in the given timezone.
#[must_use]
pub fn format_date<Tz: TimeZone>(date: &DateTime<Utc>, tz: &Tz, format: DateFormat) -> String {
    date.with_timezone(tz)
        .date_naive()
        .format(format.pattern())
        .to_string()
}

/// Total volume per workout, labeled with the local calendar date of each workout.
#[must_use]
pub fn progress(workouts: &[Workout], format: DateFormat) -> ChartSeries {
    progress_in(workouts, &Local, format)
}

/// Total volume per workout in the order of `workouts`, labeled with dates in timezone `tz`.
#[must_use]
pub fn progress_in<Tz: TimeZone>(workouts: &[Workout], tz: &Tz, format: DateFormat) -> ChartSeries {
    if workouts.is_empty() {
        return ChartSeries::placeholder();
    }

    ChartSeries {
        labels: workouts
            .iter()
            .map(|w| format_date(&w.date, tz, format))
            .collect(),
        data: workouts.iter().map(Workout::total_volume).collect(),
    }
}
