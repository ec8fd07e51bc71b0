/// A typed UI preference persisted in durable key-value storage.
///
/// Stored values are plain strings. Anything missing or unparseable reads
/// as [`Preference::default_value`]; encoding to `None` removes the key.
pub trait Preference: 'static {
    /// Fixed storage key.
    const KEY: &'static str;

    type Value: Clone + PartialEq + 'static;

    fn default_value() -> Self::Value;

    fn decode(raw: &str) -> Option<Self::Value>;

    fn encode(value: &Self::Value) -> Option<String>;

    /// Decode a raw stored value, falling back to the default.
    fn read(raw: Option<&str>) -> Self::Value {
        raw.and_then(Self::decode)
            .unwrap_or_else(Self::default_value)
    }
}

/// Whether the sidebar is collapsed to its icon rail.
pub struct SidebarCollapsed;

impl Preference for SidebarCollapsed {
    const KEY: &'static str = "sidebarCollapsed";
    type Value = bool;

    fn default_value() -> bool {
        false
    }

    fn decode(raw: &str) -> Option<bool> {
        match raw.trim() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        }
    }

    fn encode(value: &bool) -> Option<String> {
        Some(value.to_string())
    }
}

/// Department used to filter the doctor and patient lists. `None` means no filter.
pub struct SelectedDepartment;

impl Preference for SelectedDepartment {
    const KEY: &'static str = "selectedDepartment";
    type Value = Option<String>;

    fn default_value() -> Option<String> {
        None
    }

    // Blank strings count as "no filter", like an absent key.
    fn decode(raw: &str) -> Option<Option<String>> {
        if raw.trim().is_empty() {
            Some(None)
        } else {
            Some(Some(raw.to_string()))
        }
    }

    fn encode(value: &Option<String>) -> Option<String> {
        value
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .map(str::to_string)
    }
}
