use serde::ser::{Serialize, Serializer};

/// One extracurricular offering and its current roster.
///
/// `name` is the registry key; it is emitted as the map key by
/// [`ActivityMap`] and never inside the record itself.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ActivityRow {
    #[serde(skip)]
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl ActivityRow {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
        participants: &[&str],
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        }
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants as usize
    }
}

/// Snapshot of the registry, serialized as `{ name: record }` in seed order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityMap(pub Vec<ActivityRow>);

impl ActivityMap {
    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&ActivityRow> {
        self.0.iter().find(|a| a.name == name)
    }

    #[cfg(test)]
    pub fn names(&self) -> Vec<&str> {
        self.0.iter().map(|a| a.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for ActivityMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|a| (a.name.as_str(), a)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_serializes_name_as_key_in_order() {
        let map = ActivityMap(vec![
            ActivityRow::new("Zebra Club", "z", "Mondays", 3, &["a@x.edu"]),
            ActivityRow::new("Alpha Club", "a", "Tuesdays", 5, &[]),
        ]);

        let json = serde_json::to_string(&map).unwrap();
        assert!(json.find("Zebra Club").unwrap() < json.find("Alpha Club").unwrap());

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let zebra = &value["Zebra Club"];
        assert_eq!(zebra["description"], "z");
        assert_eq!(zebra["schedule"], "Mondays");
        assert_eq!(zebra["max_participants"], 3);
        assert_eq!(zebra["participants"], serde_json::json!(["a@x.edu"]));
        assert!(zebra.get("name").is_none());
    }

    #[test]
    fn test_is_full() {
        let mut row = ActivityRow::new("Tiny", "t", "Fridays", 1, &[]);
        assert!(!row.is_full());
        row.participants.push("one@x.edu".to_string());
        assert!(row.is_full());
    }
}
