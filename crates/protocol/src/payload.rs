use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Treats an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Writes whole capacities as JSON integers so `57000.0` goes out as `57000`.
fn mwh_as_integer<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(v) if v.fract() == 0.0 && *v >= 0.0 && *v <= u64::MAX as f64 => {
            serializer.serialize_some(&(*v as u64))
        }
        Some(v) => serializer.serialize_some(v),
        None => serializer.serialize_none(),
    }
}

/// Descriptive fields about the machine the report came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SystemInfo {
    pub product: Option<String>,
    pub bios: Option<String>,
    pub os_build: Option<String>,
    pub report_time: Option<String>,
}

/// Current state of the installed battery.
///
/// Capacities accept any JSON number; only non-numeric values fail to decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BatteryInfo {
    pub name: Option<String>,
    pub manufacturer: Option<String>,
    pub chemistry: Option<String>,
    /// Nominal capacity when new, in mWh.
    #[serde(serialize_with = "mwh_as_integer")]
    pub design_capacity_mwh: Option<f64>,
    /// Maximum capacity the battery can currently be charged to, in mWh.
    #[serde(serialize_with = "mwh_as_integer")]
    pub full_charge_capacity_mwh: Option<f64>,
    pub cycle_count: Option<u32>,
}

/// Health figures precomputed by the report agent.
///
/// Carried through to presentation untouched; the insight engine derives its
/// own numbers from [`BatteryInfo`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HealthSummary {
    pub health_percentage: Option<f64>,
    pub degradation_percentage: Option<f64>,
    pub cycle_penalty: Option<u32>,
    pub estimated_remaining_life: Option<String>,
}

/// One row of the battery capacity history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CapacityHistoryEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(serialize_with = "mwh_as_integer")]
    pub full_charge_capacity_mwh: Option<f64>,
    #[serde(serialize_with = "mwh_as_integer")]
    pub design_capacity_mwh: Option<f64>,
}

impl CapacityHistoryEntry {
    pub fn new(date: impl Into<String>, full_charge_capacity_mwh: Option<f64>) -> Self {
        Self {
            date: date.into(),
            full_charge_capacity_mwh,
            design_capacity_mwh: None,
        }
    }
}

/// A point-in-time battery snapshot plus its capacity history.
///
/// `history` is ordered oldest to newest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BatteryPayload {
    pub system: Option<SystemInfo>,
    #[serde(deserialize_with = "null_as_default")]
    pub battery: BatteryInfo,
    pub health: Option<HealthSummary>,
    #[serde(deserialize_with = "null_as_default")]
    pub history: Vec<CapacityHistoryEntry>,
    pub generated_at: Option<String>,
}

impl BatteryPayload {
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Most recent history entry, if any.
    pub fn latest_history(&self) -> Option<&CapacityHistoryEntry> {
        self.history.last()
    }
}
