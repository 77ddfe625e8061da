//! Canonical size buckets and time windows.

use crate::types::{FilterOption, ParameterSize, ReleaseMonth};
use chrono::NaiveDate;

/// Coarse grouping of models by parameter count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeBucket {
    /// [0, 5) billion parameters
    Small,
    /// [5, inf) billion parameters
    Large,
}

impl SizeBucket {
    pub const ALL: [SizeBucket; 2] = [SizeBucket::Small, SizeBucket::Large];

    const BOUNDARY_B: f64 = 5.0;

    pub fn name(&self) -> &'static str {
        match self {
            SizeBucket::Small => "Small < 5B",
            SizeBucket::Large => "Large > 5B",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.name() == name)
    }

    pub fn option(&self) -> FilterOption {
        FilterOption::new(self.name())
    }

    pub fn contains(&self, size: ParameterSize) -> bool {
        let billions = size.billions();
        match self {
            SizeBucket::Small => (0.0..Self::BOUNDARY_B).contains(&billions),
            SizeBucket::Large => billions >= Self::BOUNDARY_B,
        }
    }
}

/// Trailing release window measured back from the current month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeWindow {
    Last6Months,
    PreviousYear,
    Past2Years,
}

impl TimeWindow {
    pub const ALL: [TimeWindow; 3] = [
        TimeWindow::Last6Months,
        TimeWindow::PreviousYear,
        TimeWindow::Past2Years,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TimeWindow::Last6Months => "Last 6 Months",
            TimeWindow::PreviousYear => "Previous Year",
            TimeWindow::Past2Years => "Past 2 Years",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|w| w.name() == name)
    }

    pub fn option(&self) -> FilterOption {
        FilterOption::new(self.name())
    }

    pub fn months(&self) -> u32 {
        match self {
            TimeWindow::Last6Months => 6,
            TimeWindow::PreviousYear => 12,
            TimeWindow::Past2Years => 24,
        }
    }

    /// Oldest release month still inside the window.
    pub fn cutoff(&self, today: NaiveDate) -> ReleaseMonth {
        ReleaseMonth::of(today).minus_months(self.months())
    }

    /// Month-granular and inclusive: a release exactly `months()` back matches.
    pub fn contains(&self, released: ReleaseMonth, today: NaiveDate) -> bool {
        released >= self.cutoff(today)
    }
}
