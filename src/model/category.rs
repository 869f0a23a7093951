use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Identified;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryKind {
    Income,
    Expense,
}

impl CategoryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub color: String,
    pub kind: CategoryKind,
}

impl Category {
    pub fn new(name: String, color: String, kind: CategoryKind) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            color,
            kind,
        }
    }

    /// Fixed starter set for a fresh record.
    pub fn default_set() -> Vec<Category> {
        [
            ("Salary", "#2e7d32", CategoryKind::Income),
            ("Extras", "#558b2f", CategoryKind::Income),
            ("Housing", "#c62828", CategoryKind::Expense),
            ("Food", "#ef6c00", CategoryKind::Expense),
            ("Transport", "#6a1b9a", CategoryKind::Expense),
            ("Leisure", "#1565c0", CategoryKind::Expense),
        ]
        .into_iter()
        .map(|(name, color, kind)| Category::new(name.into(), color.into(), kind))
        .collect()
    }
}

impl Identified for Category {
    fn id(&self) -> &str {
        &self.id
    }
}
