//! Query compiler: turns feature definitions plus a bounding box into
//! Overpass QL.
//!
//! See <https://wiki.openstreetmap.org/wiki/Overpass_API/Overpass_QL>.

use crate::escape::escape;
use crate::types::{BoundingBox, CompiledQuery, ElementType, FeatureDefinition, TagValue};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CompileError {
    #[error("cannot compile a query without any feature definitions")]
    EmptyRequest,
}

/// Element types for `definition`, flattened across its geometry kinds and
/// deduplicated in first-seen order.
pub fn element_types(definition: &FeatureDefinition) -> Vec<ElementType> {
    let mut types = Vec::with_capacity(3);
    for ty in definition
        .geometry
        .iter()
        .flat_map(|kind| kind.element_types().iter().copied())
    {
        if !types.contains(&ty) {
            types.push(ty);
        }
    }
    types
}

/// Concatenated `["key"="value"]` filters, in tag order.
pub fn tag_filters(definition: &FeatureDefinition) -> String {
    let mut out = String::new();
    for tag in &definition.tags {
        let filter = match &tag.value {
            TagValue::Any => format!(r#"["{}"]"#, escape(&tag.key)),
            TagValue::Exact(value) => format!(r#"["{}"="{}"]"#, escape(&tag.key), escape(value)),
        };
        out.push_str(&filter);
    }
    out
}

/// One statement per element type, newline separated.
pub fn compile_one(definition: &FeatureDefinition) -> String {
    let filters = tag_filters(definition);
    element_types(definition)
        .iter()
        .map(|ty| format!("{ty}{filters};"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Wrap the statements of every definition in a bbox-scoped union.
///
/// Returns [`CompileError::EmptyRequest`] when `definitions` is empty.
pub fn compile_many<'a, I>(definitions: I, bbox: &BoundingBox) -> Result<CompiledQuery, CompileError>
where
    I: IntoIterator<Item = &'a FeatureDefinition>,
{
    let definitions: Vec<&FeatureDefinition> = definitions.into_iter().collect();
    if definitions.is_empty() {
        return Err(CompileError::EmptyRequest);
    }
    Ok(render(&definitions, bbox))
}

/// Callers guarantee `definitions` is non-empty.
pub(crate) fn render(definitions: &[&FeatureDefinition], bbox: &BoundingBox) -> CompiledQuery {
    let body = definitions
        .iter()
        .map(|definition| compile_one(definition))
        .collect::<Vec<_>>()
        .join("\n");

    CompiledQuery::new(format!(
        "[bbox:{bbox}][out:json];\n(\n{body}\n);\nout geom;"
    ))
}
