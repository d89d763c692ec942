//! Patient self-care records: medications, health metrics, meal plans.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::record::{merge, Draft, Patch, Record};

// ── Medications ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MedicationStatus {
    Active,
    Completed,
}

impl MedicationStatus {
    pub fn toggled(self) -> Self {
        match self {
            MedicationStatus::Active => MedicationStatus::Completed,
            MedicationStatus::Completed => MedicationStatus::Active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Medication {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub instructions: String,
    pub status: MedicationStatus,
    pub created_at: DateTime<Utc>,
}

impl Record for Medication {
    const PREFIX: &'static str = "med";
    const COLLECTION: &'static str = "medication";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone)]
pub struct NewMedication {
    pub user_id: String,
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub instructions: String,
}

impl Draft for NewMedication {
    type Output = Medication;

    fn into_record(self, id: String, created_at: DateTime<Utc>) -> Medication {
        Medication {
            id,
            user_id: self.user_id,
            name: self.name,
            dosage: self.dosage,
            frequency: self.frequency,
            start_date: self.start_date,
            end_date: self.end_date,
            instructions: self.instructions,
            status: MedicationStatus::Active,
            created_at,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MedicationPatch {
    pub status: Option<MedicationStatus>,
}

impl Patch<Medication> for MedicationPatch {
    fn apply(self, medication: &mut Medication) {
        merge(&mut medication.status, self.status);
    }
}

// ── Health metrics ───────────────────────────────────────────────────────────

/// The metric kinds the portal knows how to label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricType {
    BloodPressure,
    BloodSugar,
    Weight,
    HeartRate,
    Temperature,
}

impl MetricType {
    pub const ALL: [MetricType; 5] = [
        MetricType::BloodPressure,
        MetricType::BloodSugar,
        MetricType::Weight,
        MetricType::HeartRate,
        MetricType::Temperature,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MetricType::BloodPressure => "blood_pressure",
            MetricType::BloodSugar => "blood_sugar",
            MetricType::Weight => "weight",
            MetricType::HeartRate => "heart_rate",
            MetricType::Temperature => "temperature",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MetricType::BloodPressure => "Blood Pressure",
            MetricType::BloodSugar => "Blood Sugar",
            MetricType::Weight => "Weight",
            MetricType::HeartRate => "Heart Rate",
            MetricType::Temperature => "Temperature",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            MetricType::BloodPressure => "mmHg",
            MetricType::BloodSugar => "mg/dL",
            MetricType::Weight => "kg",
            MetricType::HeartRate => "bpm",
            MetricType::Temperature => "°F",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthMetric {
    pub id: String,
    pub user_id: String,
    pub metric_type: MetricType,
    /// Free-form reading, e.g. "120/80" for blood pressure.
    pub value: String,
    pub unit: String,
    pub label: String,
    pub notes: String,
    pub created_at: DateTime<Utc>,
}

impl Record for HealthMetric {
    const PREFIX: &'static str = "hm";
    const COLLECTION: &'static str = "health metric";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone)]
pub struct NewHealthMetric {
    pub user_id: String,
    pub metric_type: MetricType,
    pub value: String,
    pub notes: String,
}

impl Draft for NewHealthMetric {
    type Output = HealthMetric;

    fn into_record(self, id: String, created_at: DateTime<Utc>) -> HealthMetric {
        HealthMetric {
            id,
            user_id: self.user_id,
            metric_type: self.metric_type,
            value: self.value,
            unit: self.metric_type.unit().to_string(),
            label: self.metric_type.label().to_string(),
            notes: self.notes,
            created_at,
        }
    }
}

// ── Meal plans ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MealPreferences {
    pub goal: String,
    pub diet_type: String,
    pub calories: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealDay {
    pub day: String,
    pub breakfast: String,
    pub lunch: String,
    pub dinner: String,
    pub snacks: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlan {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub duration: String,
    pub calories: u32,
    pub meals: Vec<MealDay>,
    pub preferences: MealPreferences,
    pub created_at: DateTime<Utc>,
}

impl Record for MealPlan {
    const PREFIX: &'static str = "mp";
    const COLLECTION: &'static str = "meal plan";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewMealPlan {
    pub user_id: String,
    pub name: String,
    pub duration: String,
    pub calories: u32,
    pub meals: Vec<MealDay>,
    pub preferences: MealPreferences,
}

impl Draft for NewMealPlan {
    type Output = MealPlan;

    fn into_record(self, id: String, created_at: DateTime<Utc>) -> MealPlan {
        MealPlan {
            id,
            user_id: self.user_id,
            name: self.name,
            duration: self.duration,
            calories: self.calories,
            meals: self.meals,
            preferences: self.preferences,
            created_at,
        }
    }
}
