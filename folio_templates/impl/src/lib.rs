use std::sync::Arc;

use folio_templates_contracts::{Template, TemplateService, TEMPLATES};
use tera::Tera;

/// Renders the embedded templates with tera.
#[derive(Debug, Clone)]
pub struct TemplateServiceImpl {
    tera: Arc<Tera>,
}

impl Default for TemplateServiceImpl {
    fn default() -> Self {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES.iter().copied())
            .expect("embedded templates are valid");

        Self { tera: tera.into() }
    }
}

impl TemplateService for TemplateServiceImpl {
    fn render<T: Template + 'static>(&self, template: &T) -> anyhow::Result<String> {
        let context = tera::Context::from_serialize(template)?;
        self.tera.render(T::NAME, &context).map_err(Into::into)
    }
}
