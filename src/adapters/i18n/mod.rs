//! Message translation adapters.

mod template_translator;

pub use template_translator::TemplateTranslator;
