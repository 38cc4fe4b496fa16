use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkItemType {
    Story,
    Bug,
    Other(String),
}

impl WorkItemType {
    pub fn parse(name: &str) -> Self {
        match name {
            "User Story" => WorkItemType::Story,
            "Bug" => WorkItemType::Bug,
            other => WorkItemType::Other(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            WorkItemType::Story => "User Story",
            WorkItemType::Bug => "Bug",
            WorkItemType::Other(name) => name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItemRecord {
    pub closed_date: NaiveDate,
    pub closed_by: String,
    pub work_item_type: WorkItemType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_recognizes_story_and_bug() {
        assert_eq!(WorkItemType::parse("User Story"), WorkItemType::Story);
        assert_eq!(WorkItemType::parse("Bug"), WorkItemType::Bug);
    }

    #[test]
    fn parse_keeps_unknown_type_names() {
        let parsed = WorkItemType::parse("Epic");
        assert_eq!(parsed, WorkItemType::Other("Epic".to_string()));
        assert_eq!(parsed.name(), "Epic");
    }

    #[test]
    fn name_round_trips_through_parse() {
        for name in ["User Story", "Bug", "Task"] {
            assert_eq!(WorkItemType::parse(name).name(), name);
        }
    }
}
