//! The generation orchestrator: one render pass per request.

use std::fs;
use std::io::Write;

use crate::engine::TemplateEngine;
use crate::error::Result;
use crate::request::{GenerationRequest, OutputTarget};

/// Executes the rendering pass for one request.
pub struct Generator {
    request: GenerationRequest,
}

impl Generator {
    pub fn new(request: GenerationRequest) -> Self {
        Self { request }
    }

    /// Render the template once and write the result to the requested
    /// destination. `std_out` mirrors whether the request targets standard
    /// output; engine and label errors propagate unwrapped.
    pub fn generate(&self, std_out: bool) -> Result<()> {
        let engine = TemplateEngine::new(self.request.template_path(), self.request.config_dir())?;
        let rendered = engine.render(self.request.label().mappings(), self.request.data_file())?;

        match self.request.output() {
            OutputTarget::File(path) if !std_out => fs::write(path, &rendered)?,
            _ => {
                let stdout = std::io::stdout();
                let mut handle = stdout.lock();
                handle.write_all(rendered.as_bytes())?;
                handle.flush()?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::Pds3Label;
    use std::path::Path;

    fn make_request(dir: &Path, template_source: &str, output: Option<&Path>) -> GenerationRequest {
        let label_path = dir.join("source.lbl");
        fs::write(&label_path, "TARGET_NAME = MARS\nLINES = 42\nEND\n").unwrap();
        let template_path = dir.join("product.vm");
        fs::write(&template_path, template_source).unwrap();

        let mut builder = GenerationRequest::builder()
            .label(Pds3Label::from_file(&label_path).unwrap())
            .template_path(&template_path)
            .config_dir(dir);
        if let Some(path) = output {
            builder = builder.output(path);
        }
        builder
            .build(&crate::tool::ToolPaths::new(dir, None))
            .unwrap()
    }

    #[test]
    fn test_generate_writes_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.xml");
        let request = make_request(
            dir.path(),
            "<t>{{ TARGET_NAME }}</t><l>{{ LINES }}</l>",
            Some(&out),
        );

        Generator::new(request).generate(false).unwrap();
        assert_eq!(fs::read_to_string(&out).unwrap(), "<t>MARS</t><l>42</l>");
    }

    #[test]
    fn test_generate_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.xml");
        fs::write(&out, "stale content").unwrap();
        let request = make_request(dir.path(), "{{ TARGET_NAME }}", Some(&out));

        Generator::new(request).generate(false).unwrap();
        assert_eq!(fs::read_to_string(&out).unwrap(), "MARS");
    }

    #[test]
    fn test_engine_failure_propagates() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.xml");
        let request = make_request(dir.path(), "{{ NOT_A_FIELD }}", Some(&out));

        let err = Generator::new(request).generate(false).unwrap_err();
        assert!(matches!(err, crate::error::GenError::Template(_)));
        assert!(!out.exists(), "no output should be written on failure");
    }
}
