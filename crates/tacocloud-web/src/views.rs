//! Server-side view rendering.

use minijinja::{AutoEscape, Environment};
use serde::Serialize;

/// View name of the taco design form.
pub const DESIGN_VIEW: &str = "design";

/// Compiled templates, looked up by view name.
pub struct Views {
    env: Environment<'static>,
}

impl Views {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::Html);
        env.add_template(DESIGN_VIEW, include_str!("../templates/design.html"))?;
        Ok(Self { env })
    }

    /// Render the view `name` with `model` as its context.
    pub fn render<S: Serialize>(&self, name: &str, model: &S) -> Result<String, minijinja::Error> {
        self.env.get_template(name)?.render(model)
    }
}
