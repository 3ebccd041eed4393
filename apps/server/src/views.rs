//! HTML view rendering.
//!
//! Templates are registered once at startup. Handlebars escapes every
//! interpolated value by default, so task text is always HTML-safe.

use handlebars::Handlebars;
use serde_json::json;
use task_store::Task;

const INDEX_TEMPLATE: &str = include_str!("../templates/index.html");
const EDIT_TEMPLATE: &str = include_str!("../templates/edit.html");

/// Body served when template rendering itself fails.
const FALLBACK_HTML: &str =
    "<!doctype html><html><body><p>Tasklist is unavailable. <a href=\"/\">Back to the list</a></p></body></html>";

/// Registered HTML views for the application.
#[derive(Debug)]
pub struct Views {
    engine: Handlebars<'static>,
}

impl Views {
    /// Registers the list and edit templates.
    pub fn new() -> anyhow::Result<Self> {
        let mut engine = Handlebars::new();
        engine.register_template_string("index", INDEX_TEMPLATE)?;
        engine.register_template_string("edit", EDIT_TEMPLATE)?;
        Ok(Self { engine })
    }

    /// Renders the task list view.
    pub fn index(&self, tasks: &[Task]) -> String {
        self.render("index", &json!({ "tasks": tasks }))
    }

    /// Renders the edit view for one task, or a notice when the task is
    /// absent.
    pub fn edit(&self, task: Option<&Task>) -> String {
        self.render("edit", &json!({ "task": task }))
    }

    fn render(&self, name: &str, data: &serde_json::Value) -> String {
        match self.engine.render(name, data) {
            Ok(html) => html,
            Err(error) => {
                tracing::error!(template = name, %error, "Template rendering failed");
                FALLBACK_HTML.to_string()
            }
        }
    }
}
