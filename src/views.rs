//! Page rendering
//!
//! Handlers build a [`View`] (template name, view-model, status) and hand it to
//! the [`ViewRenderer`] held in the application state. The shipped renderer
//! loads Jinja-syntax templates from the configured views directory.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use minijinja::{path_loader, Environment};
use serde_json::Value;

use crate::error::AppResult;

/// Something able to turn a template name and a view-model into HTML
pub trait ViewRenderer: Send + Sync {
    fn render(&self, template: &str, context: &Value) -> AppResult<String>;
}

/// A page ready to be rendered
#[derive(Debug, Clone)]
pub struct View {
    pub template: &'static str,
    pub context: Value,
    pub status: StatusCode,
}

impl View {
    pub fn new(template: &'static str, context: Value) -> Self {
        Self {
            template,
            context,
            status: StatusCode::OK,
        }
    }

    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    /// Render through `renderer` into an HTML response
    pub fn into_response_with(self, renderer: &dyn ViewRenderer) -> AppResult<Response> {
        let body = renderer.render(self.template, &self.context)?;
        Ok((self.status, Html(body)).into_response())
    }
}

/// minijinja-backed renderer reading templates from a directory
pub struct TemplateRenderer {
    env: Environment<'static>,
}

impl TemplateRenderer {
    pub fn new(dir: &str) -> Self {
        let mut env = Environment::new();
        env.set_loader(path_loader(dir));
        env.add_global("govukRebrand", true);
        Self { env }
    }
}

impl ViewRenderer for TemplateRenderer {
    fn render(&self, template: &str, context: &Value) -> AppResult<String> {
        let tmpl = self.env.get_template(template)?;
        Ok(tmpl.render(context)?)
    }
}
