use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DialogKind {
    #[default]
    Info,
    Warning,
    Danger,
}

impl DialogKind {
    pub fn icon(&self) -> &'static str {
        match self {
            DialogKind::Info => "info",
            DialogKind::Warning => "warning",
            DialogKind::Danger => "delete",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmDialogData {
    pub title: String,
    pub message: String,
    pub confirm_text: String,
    pub cancel_text: String,
    pub kind: DialogKind,
}

impl ConfirmDialogData {
    /// Confirmation for deleting the named hero.
    pub fn delete_hero(name: &str) -> Self {
        Self {
            title: "Delete hero".to_string(),
            message: format!(
                "Are you sure you want to delete {name}? This action cannot be undone."
            ),
            confirm_text: "Delete".to_string(),
            cancel_text: "Cancel".to_string(),
            kind: DialogKind::Danger,
        }
    }
}

/// Asks the user to confirm an action; resolves to `true` on confirmation.
#[async_trait::async_trait]
pub trait Confirmer: Send + Sync {
    async fn confirm(&self, data: ConfirmDialogData) -> bool;
}
