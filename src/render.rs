//! Page rendering
//!
//! Maps route names to Jinja-dialect templates compiled into the binary.
//! Handlers build a context (language slice of the catalog, current year,
//! raw query parameters) and hand it here.

use crate::error::AppError;
use axum::response::Html;
use minijinja::Environment;
use serde::Serialize;

/// Templates embedded at compile time, keyed by the name handlers use
const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../templates/base.html")),
    ("index.html", include_str!("../templates/index.html")),
    ("menu.html", include_str!("../templates/menu.html")),
    ("about.html", include_str!("../templates/about.html")),
    ("contact.html", include_str!("../templates/contact.html")),
    ("gallery.html", include_str!("../templates/gallery.html")),
    (
        "admin_reservations.html",
        include_str!("../templates/admin_reservations.html"),
    ),
    (
        "admin_edit_reservation.html",
        include_str!("../templates/admin_edit_reservation.html"),
    ),
];

/// Template environment shared by all handlers
pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    /// Build the environment, parsing every embedded template
    pub fn new() -> Result<Self, AppError> {
        let mut env = Environment::new();
        for (name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    /// Render a template to an HTML response
    pub fn render(&self, name: &str, ctx: impl Serialize) -> Result<Html<String>, AppError> {
        let template = self.env.get_template(name)?;
        Ok(Html(template.render(ctx)?))
    }
}
