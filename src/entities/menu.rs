use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuCategory {
    RawFishSeafood,
    Meat,
    Korean,
}

impl MenuCategory {
    pub const ALL: [MenuCategory; 3] = [Self::RawFishSeafood, Self::Meat, Self::Korean];

    pub fn name(&self) -> String {
        match self {
            Self::RawFishSeafood => "raw_fish_seafood".into(),
            Self::Meat => "meat".into(),
            Self::Korean => "korean".into(),
        }
    }
}

#[test]
fn menu_category_serializes_as_snake_case_test() {
    for category in MenuCategory::ALL {
        let value = serde_json::to_value(category).unwrap();
        assert_eq!(value, serde_json::json!(category.name()));
    }

    let parsed: MenuCategory = serde_json::from_str("\"raw_fish_seafood\"").unwrap();
    assert_eq!(parsed, MenuCategory::RawFishSeafood);
}
