//! Output formatting utilities.
//!
//! Plain-text renderers for console pages, and an alert sink that prints.

use std::fmt::Write as _;

use crate::app::navigation::RouteTable;
use crate::domain::alert::{Alert, AlertLevel};
use crate::domain::email_template::EmailTemplateType;
use crate::domain::identity_provider::IdentityProvider;
use crate::error::Result;
use crate::eventing::AlertSink;
use crate::features::email_templates::TemplatePreview;
use crate::states::PaginatedView;

/// Prints alerts to stdout (success/info) or stderr (warning/error)
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleAlertSink;

impl AlertSink for ConsoleAlertSink {
    fn add_alert(&self, alert: Alert) {
        let line = render_alert(&alert);
        match alert.level {
            AlertLevel::Success | AlertLevel::Info => println!("{line}"),
            AlertLevel::Warning | AlertLevel::Error => eprintln!("{line}"),
        }
    }
}

pub fn render_alert(alert: &Alert) -> String {
    let marker = match alert.level {
        AlertLevel::Success => "✓",
        AlertLevel::Error => "✗",
        AlertLevel::Warning => "⚠",
        AlertLevel::Info => "ℹ",
    };
    if alert.description.is_empty() {
        format!("{marker} {}", alert.message)
    } else {
        format!("{marker} {}: {}", alert.message, alert.description)
    }
}

/// One page of the template type list followed by a pagination footer
pub fn render_template_type_page(view: &PaginatedView<EmailTemplateType>) -> Result<String> {
    let mut out = String::new();
    let rows = view.visible_slice();

    if rows.is_empty() {
        out.push_str("No template types found.\n");
    } else {
        let name_width = rows
            .iter()
            .map(|t| t.display_name.len())
            .max()
            .unwrap_or(0)
            .max("NAME".len());
        let _ = writeln!(out, "{:<name_width$}  {:>9}  ID", "NAME", "TEMPLATES");
        for row in rows {
            let _ = writeln!(
                out,
                "{:<name_width$}  {:>9}  {}",
                row.display_name,
                row.template_count(),
                row.id
            );
        }
    }

    let _ = writeln!(
        out,
        "{} items · page {} / {} · {} per page",
        view.len(),
        view.current_page(),
        view.total_pages()?,
        view.limit()
    );
    Ok(out)
}

pub fn render_routes(table: &RouteTable) -> String {
    let mut out = String::new();
    for route in table.routes() {
        let _ = writeln!(
            out,
            "{:<22} {:<20} {:<18} {}",
            route.path.unwrap_or("*"),
            route.name,
            route.icon.unwrap_or("-"),
            if route.show_on_side_panel { "side-panel" } else { "" }
        );
    }
    out
}

pub fn render_preview(preview: &TemplatePreview) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Subject: {}", preview.subject());
    let _ = writeln!(out, "Locale:  {}", preview.locale());
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", preview.body());
    if let Some(footer) = preview.footer() {
        let _ = writeln!(out, "{footer}");
    }
    out
}

pub fn render_identity_provider(idp: &IdentityProvider, deletable: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Name:        {}", idp.name);
    let _ = writeln!(out, "ID:          {}", idp.id.as_deref().unwrap_or("-"));
    let _ = writeln!(
        out,
        "Description: {}",
        idp.description.as_deref().unwrap_or("-")
    );
    let _ = writeln!(out, "Enabled:     {}", idp.is_enabled);
    if let Some(authenticator) = idp.default_authenticator() {
        let _ = writeln!(out, "Default authenticator: {}", authenticator.name);
    }
    if !deletable {
        let _ = writeln!(out, "(protected: cannot be deleted from the console)");
    }
    out
}
