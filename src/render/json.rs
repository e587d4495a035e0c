//! JSON renderer: structured output for tooling integration.
//!
//! Mirrors the XML grammar key for key: same section names, same order, same
//! omission rules. Lists become arrays, presence flags become `true`, and
//! booleans and counts keep their JSON types.

use crate::category::Category;
use crate::error::Result;
use crate::model::*;
use crate::render::RenderOptions;
use crate::traversal::{DocumentationWriter, PropertyServices};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{json, Map, Value};
use std::io::Write;

pub struct JsonRenderer<W: Write> {
    sink: W,
    indent: Option<usize>,
    doc: Map<String, Value>,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(sink: W, options: &RenderOptions) -> Self {
        Self {
            sink,
            indent: options.indent,
            doc: Map::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.sink
    }

    fn put(&mut self, key: &str, value: Value) -> Result<()> {
        self.doc.insert(key.to_string(), value);
        Ok(())
    }

    fn flag(&mut self, key: &str, present: bool) -> Result<()> {
        if present {
            self.put(key, Value::Bool(true))?;
        }
        Ok(())
    }
}

fn strings<'a, I>(values: I) -> Value
where
    I: IntoIterator<Item = &'a str>,
{
    Value::Array(values.into_iter().map(|v| Value::String(v.to_string())).collect())
}

fn service_api(api: &ServiceApi) -> Value {
    json!({
        "className": api.class_name,
        "groupId": api.group_id,
        "artifactId": api.artifact_id,
        "version": api.version,
    })
}

fn property(property: &PropertyDescriptor, services: &PropertyServices) -> Value {
    let mut obj = Map::new();
    obj.insert("name".into(), json!(property.name));
    obj.insert("displayName".into(), json!(property.display_name()));
    obj.insert("description".into(), json!(property.description));
    if let Some(ref default_value) = property.default_value {
        obj.insert("defaultValue".into(), json!(default_value));
    }
    if let Some(ref api_class) = property.controller_service_definition {
        let definition = match services.get(&property.name) {
            Some(api) => service_api(api),
            None => service_api(&ServiceApi::new(api_class.as_str(), "unknown", "unknown", "unknown")),
        };
        obj.insert("controllerServiceDefinition".into(), definition);
    }
    if !property.allowable_values.is_empty() {
        let values = property
            .allowable_values
            .iter()
            .map(|v| {
                json!({
                    "displayName": v.display_name,
                    "value": v.value,
                    "description": v.description,
                })
            })
            .collect();
        obj.insert("allowableValues".into(), Value::Array(values));
    }
    obj.insert("required".into(), json!(property.required));
    obj.insert("sensitive".into(), json!(property.sensitive));
    obj.insert(
        "expressionLanguageSupported".into(),
        json!(property.expression_language_supported),
    );
    if let Some(scope) = property.expression_language_scope {
        obj.insert("expressionLanguageScope".into(), json!(scope.name()));
    }
    obj.insert(
        "dynamicallyModifiesClasspath".into(),
        json!(property.dynamically_modifies_classpath),
    );
    obj.insert("dynamic".into(), json!(property.dynamic));
    if let Some((resource, cardinality)) = property
        .resource_definition
        .as_ref()
        .and_then(|r| r.cardinality.map(|c| (r, c)))
    {
        obj.insert(
            "resourceDefinition".into(),
            json!({
                "cardinality": cardinality.name(),
                "resourceTypes": strings(resource.resource_types.iter().map(ResourceType::name)),
            }),
        );
    }
    if !property.dependencies.is_empty() {
        let dependencies = property
            .dependencies
            .iter()
            .map(|d| {
                let mut dep = Map::new();
                dep.insert("propertyName".into(), json!(d.property_name));
                dep.insert("propertyDisplayName".into(), json!(d.property_display_name));
                if let Some(ref values) = d.dependent_values {
                    dep.insert(
                        "dependentValues".into(),
                        strings(values.iter().map(String::as_str)),
                    );
                }
                Value::Object(dep)
            })
            .collect();
        obj.insert("dependencies".into(), Value::Array(dependencies));
    }
    Value::Object(obj)
}

fn attributes(attributes: &[AttributeDescriptor]) -> Value {
    attributes
        .iter()
        .map(|a| json!({ "name": a.name, "description": a.description }))
        .collect()
}

impl<W: Write> DocumentationWriter for JsonRenderer<W> {
    fn write_header(&mut self, _component: &ExtensionComponent) -> Result<()> {
        self.doc.clear();
        Ok(())
    }

    fn write_extension_name(&mut self, name: &str) -> Result<()> {
        self.put("name", json!(name))
    }

    fn write_extension_type(&mut self, category: Category) -> Result<()> {
        self.put("type", json!(category.name()))
    }

    fn write_deprecation_notice(&mut self, notice: Option<&DeprecationNotice>) -> Result<()> {
        let Some(notice) = notice else {
            return Ok(());
        };
        self.put(
            "deprecationNotice",
            json!({
                "reason": notice.reason,
                "alternatives": strings(notice.merged_alternatives()),
            }),
        )
    }

    fn write_description(&mut self, description: Option<&str>) -> Result<()> {
        match description {
            Some(text) => self.put("description", json!(text)),
            None => Ok(()),
        }
    }

    fn write_tags(&mut self, tags: &[String]) -> Result<()> {
        self.put("tags", strings(tags.iter().map(String::as_str)))
    }

    fn write_properties(
        &mut self,
        properties: &[PropertyDescriptor],
        property_services: &PropertyServices,
    ) -> Result<()> {
        if properties.is_empty() {
            return Ok(());
        }
        let rendered = properties
            .iter()
            .map(|p| property(p, property_services))
            .collect();
        self.put("properties", Value::Array(rendered))
    }

    fn write_dynamic_properties(&mut self, properties: &[DynamicProperty]) -> Result<()> {
        if properties.is_empty() {
            return Ok(());
        }
        let rendered = properties
            .iter()
            .map(|p| {
                json!({
                    "name": p.name,
                    "value": p.value,
                    "description": p.description,
                    "expressionLanguageScope": p.expression_language_scope.name(),
                })
            })
            .collect();
        self.put("dynamicProperties", Value::Array(rendered))
    }

    fn write_supports_sensitive_dynamic_properties(&mut self, supported: bool) -> Result<()> {
        self.flag("supportsSensitiveDynamicProperties", supported)
    }

    fn write_relationships(&mut self, relationships: &RelationshipSet) -> Result<()> {
        if relationships.is_empty() {
            return Ok(());
        }
        let rendered = relationships
            .iter()
            .map(|r| {
                json!({
                    "name": r.name,
                    "description": r.description,
                    "autoTerminated": r.auto_terminated,
                })
            })
            .collect();
        self.put("relationships", Value::Array(rendered))
    }

    fn write_dynamic_relationship(
        &mut self,
        relationship: Option<&DynamicRelationship>,
    ) -> Result<()> {
        match relationship {
            Some(r) => self.put(
                "dynamicRelationship",
                json!({ "name": r.name, "description": r.description }),
            ),
            None => Ok(()),
        }
    }

    fn write_reads_attributes(&mut self, attrs: &[AttributeDescriptor]) -> Result<()> {
        if attrs.is_empty() {
            return Ok(());
        }
        self.put("readsAttributes", attributes(attrs))
    }

    fn write_writes_attributes(&mut self, attrs: &[AttributeDescriptor]) -> Result<()> {
        if attrs.is_empty() {
            return Ok(());
        }
        self.put("writesAttributes", attributes(attrs))
    }

    fn write_trigger_serially(&mut self, present: bool) -> Result<()> {
        self.flag("triggerSerially", present)
    }

    fn write_trigger_when_empty(&mut self, present: bool) -> Result<()> {
        self.flag("triggerWhenEmpty", present)
    }

    fn write_trigger_when_any_destination_available(&mut self, present: bool) -> Result<()> {
        self.flag("triggerWhenAnyDestinationAvailable", present)
    }

    fn write_supports_batching(&mut self, present: bool) -> Result<()> {
        self.flag("supportsBatching", present)
    }

    fn write_primary_node_only(&mut self, present: bool) -> Result<()> {
        self.flag("primaryNodeOnly", present)
    }

    fn write_side_effect_free(&mut self, present: bool) -> Result<()> {
        self.flag("sideEffectFree", present)
    }

    fn write_default_settings(&mut self, settings: Option<&DefaultSettings>) -> Result<()> {
        match settings {
            Some(s) => self.put(
                "defaultSettings",
                json!({
                    "yieldDuration": s.yield_duration,
                    "penaltyDuration": s.penalty_duration,
                    "bulletinLevel": s.bulletin_level.name(),
                }),
            ),
            None => Ok(()),
        }
    }

    fn write_stateful_info(&mut self, stateful: Option<&Stateful>) -> Result<()> {
        match stateful {
            Some(s) => self.put(
                "stateful",
                json!({
                    "description": s.description,
                    "scopes": strings(s.scopes.iter().map(Scope::name)),
                }),
            ),
            None => Ok(()),
        }
    }

    fn write_restricted_info(&mut self, restricted: Option<&Restricted>) -> Result<()> {
        let Some(restricted) = restricted else {
            return Ok(());
        };
        let mut obj = Map::new();
        if let Some(explanation) = restricted
            .general_restriction_explanation
            .as_deref()
            .filter(|e| !e.is_empty())
        {
            obj.insert("generalRestrictionExplanation".into(), json!(explanation));
        }
        let restrictions = restricted
            .restrictions
            .iter()
            .map(|r| {
                json!({
                    "requiredPermission": r.required_permission.map(|p| p.label()),
                    "explanation": r.explanation,
                })
            })
            .collect();
        obj.insert("restrictions".into(), Value::Array(restrictions));
        self.put("restricted", Value::Object(obj))
    }

    fn write_input_requirement(&mut self, requirement: Option<InputRequirement>) -> Result<()> {
        match requirement {
            Some(r) => self.put("inputRequirement", json!(r.name())),
            None => Ok(()),
        }
    }

    fn write_system_resource_considerations(
        &mut self,
        considerations: &[SystemResourceConsideration],
    ) -> Result<()> {
        let rendered: Vec<Value> = considerations
            .iter()
            .filter_map(|c| {
                c.resource
                    .map(|r| json!({ "resource": r.name(), "description": c.description }))
            })
            .collect();
        if rendered.is_empty() {
            return Ok(());
        }
        self.put("systemResourceConsiderations", Value::Array(rendered))
    }

    fn write_use_cases(&mut self, use_cases: &[UseCase]) -> Result<()> {
        if use_cases.is_empty() {
            return Ok(());
        }
        let rendered = use_cases
            .iter()
            .map(|u| {
                json!({
                    "description": u.description,
                    "notes": u.notes,
                    "keywords": strings(u.keywords.iter().map(String::as_str)),
                    "inputRequirement": u.input_requirement.name(),
                    "configuration": u.configuration,
                })
            })
            .collect();
        self.put("useCases", Value::Array(rendered))
    }

    fn write_multi_processor_use_cases(
        &mut self,
        use_cases: &[MultiProcessorUseCase],
    ) -> Result<()> {
        if use_cases.is_empty() {
            return Ok(());
        }
        let rendered = use_cases
            .iter()
            .map(|u| {
                let configurations: Value = u
                    .configurations
                    .iter()
                    .map(|c| {
                        json!({
                            "processorClassName": c.resolved_class_name(),
                            "configuration": c.configuration,
                        })
                    })
                    .collect();
                json!({
                    "description": u.description,
                    "notes": u.notes,
                    "keywords": strings(u.keywords.iter().map(String::as_str)),
                    "processorConfigurations": configurations,
                })
            })
            .collect();
        self.put("multiProcessorUseCases", Value::Array(rendered))
    }

    fn write_see_also(&mut self, see_also: Option<&SeeAlso>) -> Result<()> {
        let merged = see_also.map(SeeAlso::merged).unwrap_or_default();
        if merged.is_empty() {
            return Ok(());
        }
        self.put("seeAlso", strings(merged))
    }

    fn write_default_schedule(&mut self, schedule: Option<&DefaultSchedule>) -> Result<()> {
        match schedule {
            Some(s) => self.put(
                "defaultSchedule",
                json!({
                    "strategy": s.strategy.name(),
                    "period": s.period,
                    "concurrentTasks": s.concurrent_tasks,
                }),
            ),
            None => Ok(()),
        }
    }

    fn write_provided_service_apis(&mut self, apis: &[ServiceApi]) -> Result<()> {
        if apis.is_empty() {
            return Ok(());
        }
        self.put("providedServiceAPIs", apis.iter().map(service_api).collect())
    }

    fn write_footer(&mut self, _component: &ExtensionComponent) -> Result<()> {
        let doc = Value::Object(std::mem::take(&mut self.doc));
        match self.indent {
            Some(width) => {
                let indent = vec![b' '; width];
                let mut ser = serde_json::Serializer::with_formatter(
                    &mut self.sink,
                    PrettyFormatter::with_indent(&indent),
                );
                doc.serialize(&mut ser)?;
            }
            None => serde_json::to_writer(&mut self.sink, &doc)?,
        }
        self.sink.write_all(b"\n")?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.sink.flush()?;
        Ok(())
    }
}
