//! Context elements as they appear in query and update responses
//!
//! Layout rules:
//! - attributes are a JSON array of `{"name","type","value"}` objects, or,
//!   when requested with `attrsFormat=object`, an object keyed by name
//! - V1 carries every value as a string; V2 uses native JSON numbers and
//!   booleans

use ctxbroker_core::{ApiVersion, ErrorCode, HttpStatus};
use ctxbroker_wire::{encode_float, JsonObjectBuilder};

use crate::render::add_error_code;

/// Value of a context attribute
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    Text(String),
    Number(f64),
    Boolean(bool),
}

/// A named, typed attribute of an entity
#[derive(Debug, Clone, PartialEq)]
pub struct ContextAttribute {
    pub name: String,
    pub attr_type: String,
    pub value: AttributeValue,
}

impl ContextAttribute {
    pub fn new(name: impl Into<String>, attr_type: impl Into<String>, value: AttributeValue) -> Self {
        Self {
            name: name.into(),
            attr_type: attr_type.into(),
            value,
        }
    }

    fn add_value(&self, obj: &mut JsonObjectBuilder, api_version: ApiVersion) {
        match (&self.value, api_version) {
            (AttributeValue::Text(s), _) => {
                obj.add_string("value", s);
            }
            (AttributeValue::Number(n), ApiVersion::V1) => {
                obj.add_string("value", &encode_float(*n));
            }
            (AttributeValue::Number(n), ApiVersion::V2) => {
                obj.add_float("value", *n);
            }
            (AttributeValue::Boolean(b), ApiVersion::V1) => {
                obj.add_string("value", if *b { "true" } else { "false" });
            }
            (AttributeValue::Boolean(b), ApiVersion::V2) => {
                obj.add_bool("value", *b);
            }
        }
    }

    fn render_in_array(&self, api_version: ApiVersion) -> String {
        let mut obj = JsonObjectBuilder::new();
        obj.add_string("name", &self.name);
        obj.add_string("type", &self.attr_type);
        self.add_value(&mut obj, api_version);
        obj.finalize()
    }

    fn render_in_object(&self, api_version: ApiVersion) -> String {
        let mut obj = JsonObjectBuilder::new();
        obj.add_string("type", &self.attr_type);
        self.add_value(&mut obj, api_version);
        obj.finalize()
    }
}

/// An entity with its attributes
#[derive(Debug, Clone, PartialEq)]
pub struct ContextElement {
    pub id: String,
    pub entity_type: String,
    pub attributes: Vec<ContextAttribute>,
}

impl ContextElement {
    pub fn new(id: impl Into<String>, entity_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            entity_type: entity_type.into(),
            attributes: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, attribute: ContextAttribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    fn render_attributes(&self, api_version: ApiVersion, attrs_as_object: bool) -> String {
        if attrs_as_object {
            let mut obj = JsonObjectBuilder::new();
            for attr in &self.attributes {
                obj.add_raw(&attr.name, &attr.render_in_object(api_version));
            }
            obj.finalize()
        } else {
            let items: Vec<String> = self
                .attributes
                .iter()
                .map(|a| a.render_in_array(api_version))
                .collect();
            format!("[{}]", items.join(","))
        }
    }

    /// Render as the `contextElement` object
    pub fn render(&self, api_version: ApiVersion, attrs_as_object: bool) -> String {
        let mut obj = JsonObjectBuilder::new();
        obj.add_string("type", &self.entity_type);
        obj.add_string("isPattern", "false");
        obj.add_string("id", &self.id);
        if !self.attributes.is_empty() {
            obj.add_raw(
                "attributes",
                &self.render_attributes(api_version, attrs_as_object),
            );
        }
        obj.finalize()
    }
}

/// Body shared by queryContext and updateContext responses
///
/// With no elements the response is just its error code; otherwise each
/// element is wrapped with a `200 OK` status.
pub(crate) fn render_context_responses(
    elements: &[ContextElement],
    error_code: &ErrorCode,
    api_version: ApiVersion,
    attrs_as_object: bool,
) -> String {
    let mut obj = JsonObjectBuilder::new();

    if elements.is_empty() {
        add_error_code(&mut obj, error_code);
        return obj.finalize();
    }

    let ok = ErrorCode::new(HttpStatus::OK, "").with_key_name("statusCode");
    let responses: Vec<String> = elements
        .iter()
        .map(|element| {
            let mut response = JsonObjectBuilder::new();
            response.add_raw("contextElement", &element.render(api_version, attrs_as_object));
            add_error_code(&mut response, &ok);
            response.finalize()
        })
        .collect();
    obj.add_raw("contextResponses", &format!("[{}]", responses.join(",")));
    obj.finalize()
}
