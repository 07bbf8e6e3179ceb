use serde::{Deserialize, Serialize};

/// Visibility of a UI modal tracked in the application store.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ModalVisibility {
    #[default]
    Hidden,
    Visible,
}

impl ModalVisibility {
    pub fn is_visible(self) -> bool {
        self == Self::Visible
    }
}
