//! ListOperationDefinitionsHandler - Registered handler and checker definitions.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::foundation::RequestContext;
use crate::domain::operation::{ArgumentDef, OperationKind, OperationRegistry};

/// Client-facing view of an operation definition.
///
/// The description is passed through the request's translator, so a
/// catalogue can localise it by using the description as its key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperationDefinitionView {
    pub code: String,
    pub description: String,
    pub args: Vec<ArgumentDef>,
}

/// Projects the registry for admin forms.
pub struct ListOperationDefinitionsHandler {
    registry: Arc<OperationRegistry>,
}

impl ListOperationDefinitionsHandler {
    pub fn new(registry: Arc<OperationRegistry>) -> Self {
        Self { registry }
    }

    /// All payment handler definitions, in registration order.
    pub fn handlers(&self, ctx: &RequestContext) -> Vec<OperationDefinitionView> {
        self.project(ctx, OperationKind::Handler)
    }

    /// All eligibility checker definitions, in registration order.
    pub fn checkers(&self, ctx: &RequestContext) -> Vec<OperationDefinitionView> {
        self.project(ctx, OperationKind::Checker)
    }

    fn project(&self, ctx: &RequestContext, kind: OperationKind) -> Vec<OperationDefinitionView> {
        self.registry
            .definitions(kind)
            .into_iter()
            .map(|definition| OperationDefinitionView {
                code: definition.code().to_string(),
                description: ctx.translate(definition.description(), &[]),
                args: definition.args().to_vec(),
            })
            .collect()
    }
}
