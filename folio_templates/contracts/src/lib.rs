use serde::Serialize;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait TemplateService: Send + Sync + 'static {
    /// Render `template` with its own fields as the context.
    fn render<T: Template + 'static>(&self, template: &T) -> anyhow::Result<String>;
}

#[cfg(feature = "mock")]
impl MockTemplateService {
    pub fn with_render<T: Template + Send + PartialEq + std::fmt::Debug + 'static>(
        mut self,
        template: T,
        result: String,
    ) -> Self {
        self.expect_render()
            .once()
            .with(mockall::predicate::eq(template))
            .return_once(|_| Ok(result));
        self
    }
}

/// Context for one of the files in [`TEMPLATES`].
///
/// Values are HTML escaped if `NAME` ends in `.html`.
pub trait Template: Serialize {
    const NAME: &'static str;
}

/// Every embedded template as `(name, source)`, including layouts that are
/// only used through `{% extends %}`.
pub const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../templates/base.html")),
    (
        ContactMessageTemplate::NAME,
        include_str!("../templates/contact_message.html"),
    ),
];

/// Notification about a new contact form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessageTemplate {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl Template for ContactMessageTemplate {
    const NAME: &'static str = "contact_message.html";
}
