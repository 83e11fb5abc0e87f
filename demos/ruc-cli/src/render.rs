use std::fmt;

use ruc_sdk::status::{BadgeVariant, Standing};
use ruc_sdk::views::{ListPage, RowAction};

pub const EMPTY_DETAIL: &str = "El RUC no está en la lista guardada.";

fn badge(label: Option<&str>, variant: BadgeVariant) -> String {
    let label = label.unwrap_or("-");
    match variant {
        BadgeVariant::Default => label.to_string(),
        BadgeVariant::Destructive => format!("!{label}"),
    }
}

/// Plain-text table for one list page.
pub struct PageTable<'a>(pub &'a ListPage);

impl fmt::Display for PageTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let page = self.0;
        writeln!(f, "{}", page.caption)?;
        writeln!(
            f,
            "{:<11}  {:<40}  {:<12}  {:<12}  {}",
            "RUC", "Razón Social", "Estado", "Condición", "Acción"
        )?;

        if let Some(placeholder) = page.placeholder {
            writeln!(f, "{placeholder}")?;
        }
        for row in &page.rows {
            let marker = match row.standing {
                Standing::Flagged => "*",
                Standing::Normal => " ",
            };
            let action = match row.action {
                RowAction::Delete => "borrar",
                RowAction::Restore => "restaurar",
            };
            writeln!(
                f,
                "{:<11}{} {:<40}  {:<12}  {:<12}  {}",
                row.ruc,
                marker,
                row.razon_social,
                badge(row.estado.as_deref(), row.estado_badge),
                badge(row.condicion.as_deref(), row.condicion_badge),
                action
            )?;
        }

        if page.show_pagination {
            writeln!(f, "Página {} de {}", page.current_page, page.total_pages)?;
        }
        Ok(())
    }
}
