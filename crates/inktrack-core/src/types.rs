use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    NotStarted,
    InProgress,
    Revision,
    Completed,
}

impl Status {
    /// The full lifecycle in order. Progress indicators index into this.
    pub fn all() -> &'static [Status] {
        &[
            Status::NotStarted,
            Status::InProgress,
            Status::Revision,
            Status::Completed,
        ]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Next state in the lifecycle; `Completed` stays put.
    pub fn advance(self) -> Status {
        let all = Status::all();
        all.get(self.index() + 1).copied().unwrap_or(self)
    }

    /// Previous state in the lifecycle; `NotStarted` stays put.
    pub fn revert(self) -> Status {
        match self.index().checked_sub(1) {
            Some(i) => Status::all()[i],
            None => self,
        }
    }

    /// Position in the lifecycle as a ratio: 0.0 at `NotStarted`,
    /// 1.0 at `Completed`.
    pub fn progress(self) -> f64 {
        self.index() as f64 / (Status::all().len() - 1) as f64
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Status::NotStarted => "not_started",
            Status::InProgress => "in_progress",
            Status::Revision => "revision",
            Status::Completed => "completed",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Status {
    type Err = crate::error::InktrackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "not_started" => Ok(Status::NotStarted),
            "in_progress" => Ok(Status::InProgress),
            "revision" => Ok(Status::Revision),
            "completed" => Ok(Status::Completed),
            _ => Err(crate::error::InktrackError::InvalidStatus(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// StatusFilter
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Only(Status),
}

impl StatusFilter {
    pub fn matches(self, status: Status) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(s) => s == status,
        }
    }
}

impl std::str::FromStr for StatusFilter {
    type Err = crate::error::InktrackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" | "All" => Ok(StatusFilter::All),
            other => Ok(StatusFilter::Only(other.parse()?)),
        }
    }
}

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Surprise,
    Standard,
    StreamOfConsciousness,
    Adult,
    Borderline,
}

impl Category {
    pub fn all() -> &'static [Category] {
        &[
            Category::Surprise,
            Category::Standard,
            Category::StreamOfConsciousness,
            Category::Adult,
            Category::Borderline,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Surprise => "surprise",
            Category::Standard => "standard",
            Category::StreamOfConsciousness => "stream_of_consciousness",
            Category::Adult => "adult",
            Category::Borderline => "borderline",
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::Standard
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = crate::error::InktrackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "surprise" => Ok(Category::Surprise),
            "standard" => Ok(Category::Standard),
            "stream_of_consciousness" => Ok(Category::StreamOfConsciousness),
            "adult" => Ok(Category::Adult),
            "borderline" => Ok(Category::Borderline),
            _ => Err(crate::error::InktrackError::InvalidCategory(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Client,
    Owner,
}

impl Role {
    /// The two-value view-mode flip. Independent of authentication.
    pub fn toggle(self) -> Role {
        match self {
            Role::Client => Role::Owner,
            Role::Owner => Role::Client,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Role::Client => "client",
            Role::Owner => "owner",
        };
        f.write_str(s)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
