use serde::{Deserialize, Serialize};

/// Intensity band for a whole workout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntensityLevel {
  Low,
  Moderate,
  High,
}

impl IntensityLevel {
  pub fn as_str(&self) -> &'static str {
    match self {
      IntensityLevel::Low => "low",
      IntensityLevel::Moderate => "moderate",
      IntensityLevel::High => "high",
    }
  }
}

/// A single exercise within a workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
  pub name: String,
  pub sets: i64,
  pub reps: i64,
  pub rest_seconds: Option<i64>,
  pub muscle_groups: Vec<String>,
}

/// A planned workout for a single day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
  pub name: String,
  pub duration_minutes: i64,
  pub intensity: IntensityLevel,
  /// Target effort as a percentage of normal working intensity
  pub intensity_percentage: Option<i64>,
  pub muscle_groups: Vec<String>,
  pub exercises: Vec<Exercise>,
}

impl Workout {
  /// A rest-day placeholder with no exercises
  pub fn rest_day() -> Self {
    Self {
      name: "Rest Day".to_string(),
      duration_minutes: 0,
      intensity: IntensityLevel::Low,
      intensity_percentage: None,
      muscle_groups: Vec::new(),
      exercises: Vec::new(),
    }
  }
}
