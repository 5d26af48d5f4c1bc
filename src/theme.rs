use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub font_family: String,
    pub center_value_size: f32,
    pub center_label_size: f32,
    pub center_value_color: String,
    pub center_label_color: String,
    pub background: String,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            font_family: "Inter, Segoe UI, system-ui, -apple-system, sans-serif".to_string(),
            center_value_size: 36.0,
            center_label_size: 14.0,
            center_value_color: "#1C2430".to_string(),
            center_label_color: "#7A8AA6".to_string(),
            background: "#FFFFFF".to_string(),
        }
    }

    pub fn dark() -> Self {
        Self {
            font_family: "Inter, Segoe UI, system-ui, -apple-system, sans-serif".to_string(),
            center_value_size: 36.0,
            center_label_size: 14.0,
            center_value_color: "#F2F5FA".to_string(),
            center_label_color: "#9AA8BF".to_string(),
            background: "#10151C".to_string(),
        }
    }
}
