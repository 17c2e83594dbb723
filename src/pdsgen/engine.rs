//! Template rendering.
//!
//! One [`TemplateEngine`] wraps one template plus an environment rooted at
//! the config directory, so `{% include %}` and `{% import %}` resolve
//! against that directory. Undefined variables are strict errors, never
//! silent blanks in the rendered document.

use std::fs;
use std::path::Path;

use chrono::Utc;
use minijinja::{path_loader, Environment, UndefinedBehavior};
use serde_json::{Map, Value};

use crate::error::Result;
use crate::label::Mappings;
use crate::tool;

/// Names injected into every render context, reserved in lower case so
/// they never collide with upper-case label keywords.
const LABEL_VAR: &str = "label";
const DATA_FILE_VAR: &str = "data_file";
const TOOL_VERSION_VAR: &str = "tool_version";
const GENERATION_TIME_VAR: &str = "generation_time";

/// Renders one template against a label-derived context.
pub struct TemplateEngine {
    env: Environment<'static>,
    template_name: String,
}

impl TemplateEngine {
    /// Load the template at `template_path` and prepare an environment
    /// rooted at `config_dir`.
    pub fn new(template_path: &Path, config_dir: &Path) -> Result<Self> {
        let source = fs::read_to_string(template_path)?;
        let template_name = template_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "template".to_string());

        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_loader(path_loader(config_dir));
        env.add_template_owned(template_name.clone(), source)?;

        Ok(Self { env, template_name })
    }

    /// Expand the template against the label mappings plus the reserved
    /// context entries.
    pub fn render(&self, mappings: &Mappings, data_file: Option<&str>) -> Result<String> {
        let context = build_context(mappings, data_file);
        let template = self.env.get_template(&self.template_name)?;
        let rendered = template.render(Value::Object(context))?;
        Ok(rendered)
    }
}

/// Label fields are addressable both bare (`{{ TARGET_NAME }}`) and through
/// the full map (`{{ label.TARGET_NAME }}`, `{{ label["^IMAGE"] }}` for
/// keys that are not identifiers).
fn build_context(mappings: &Mappings, data_file: Option<&str>) -> Map<String, Value> {
    let mut context = mappings.clone();
    context.insert(LABEL_VAR.to_string(), Value::Object(mappings.clone()));
    context.insert(
        DATA_FILE_VAR.to_string(),
        data_file
            .map(|p| Value::String(p.to_string()))
            .unwrap_or(Value::Null),
    );
    context.insert(
        TOOL_VERSION_VAR.to_string(),
        Value::String(tool::version().to_string()),
    );
    context.insert(
        GENERATION_TIME_VAR.to_string(),
        Value::String(Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()),
    );
    context
}
