//! Status classification for registry labels.
//!
//! The service returns free-text labels for `estado` and `condicion`. They are
//! classified here, and only here, by case-insensitive substring match:
//! `estado` containing `"activo"` is active, `condicion` containing
//! `"habido"` is in good standing. Note that `"NO HABIDO"` therefore counts
//! as habido; the rule is kept as the service's consumers have always
//! applied it.

const ACTIVE_MARKER: &str = "activo";
const HABIDO_MARKER: &str = "habido";

/// Badge style for a status label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    Default,
    Destructive,
}

impl BadgeVariant {
    fn from_flag(ok: bool) -> Self {
        if ok {
            BadgeVariant::Default
        } else {
            BadgeVariant::Destructive
        }
    }
}

/// Overall standing of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Standing {
    Normal,
    /// Neither active nor habido. Shown highlighted, never filtered out.
    Flagged,
}

fn contains_ci(label: Option<&str>, marker: &str) -> bool {
    label
        .map(|l| l.to_lowercase().contains(marker))
        .unwrap_or(false)
}

pub fn is_active(estado: Option<&str>) -> bool {
    contains_ci(estado, ACTIVE_MARKER)
}

pub fn is_habido(condicion: Option<&str>) -> bool {
    contains_ci(condicion, HABIDO_MARKER)
}

pub fn estado_badge(estado: Option<&str>) -> BadgeVariant {
    BadgeVariant::from_flag(is_active(estado))
}

pub fn condicion_badge(condicion: Option<&str>) -> BadgeVariant {
    BadgeVariant::from_flag(is_habido(condicion))
}

pub fn standing(estado: Option<&str>, condicion: Option<&str>) -> Standing {
    if !is_active(estado) && !is_habido(condicion) {
        Standing::Flagged
    } else {
        Standing::Normal
    }
}
