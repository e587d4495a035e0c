//! Canonical traversal of a component's metadata.
//!
//! [`DocumentationWriter`] has one hook per metadata section. [`write_document`]
//! owns the order in which the hooks are called and which hooks apply to which
//! category; renderers only decide how (and whether) each section is written.
//! Every renderer therefore produces sections in the same order.
//!
//! Hooks receive the raw snapshot values, absent or empty included. Skipping
//! absent sections is the renderer's job.

use crate::category::{classify, Category};
use crate::error::Result;
use crate::model::*;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Property name → service API its controller-service reference resolves to.
pub type PropertyServices = HashMap<String, ServiceApi>;

/// Everything needed to document one component.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRequest {
    pub component: ExtensionComponent,
    #[serde(default)]
    pub provided_service_apis: Vec<ServiceApi>,
    #[serde(default)]
    pub property_services: PropertyServices,
}

impl DocumentRequest {
    pub fn new(component: ExtensionComponent) -> Self {
        Self {
            component,
            provided_service_apis: Vec::new(),
            property_services: PropertyServices::new(),
        }
    }
}

/// Per-section render hooks.
pub trait DocumentationWriter {
    fn write_header(&mut self, component: &ExtensionComponent) -> Result<()>;
    fn write_extension_name(&mut self, name: &str) -> Result<()>;
    fn write_extension_type(&mut self, category: Category) -> Result<()>;
    fn write_deprecation_notice(&mut self, notice: Option<&DeprecationNotice>) -> Result<()>;
    fn write_description(&mut self, description: Option<&str>) -> Result<()>;
    fn write_tags(&mut self, tags: &[String]) -> Result<()>;
    fn write_properties(
        &mut self,
        properties: &[PropertyDescriptor],
        property_services: &PropertyServices,
    ) -> Result<()>;
    fn write_dynamic_properties(&mut self, properties: &[DynamicProperty]) -> Result<()>;
    fn write_supports_sensitive_dynamic_properties(&mut self, supported: bool) -> Result<()>;

    // Processor only
    fn write_relationships(&mut self, relationships: &RelationshipSet) -> Result<()>;
    fn write_dynamic_relationship(&mut self, relationship: Option<&DynamicRelationship>)
        -> Result<()>;
    fn write_reads_attributes(&mut self, attributes: &[AttributeDescriptor]) -> Result<()>;
    fn write_writes_attributes(&mut self, attributes: &[AttributeDescriptor]) -> Result<()>;
    fn write_trigger_serially(&mut self, present: bool) -> Result<()>;
    fn write_trigger_when_empty(&mut self, present: bool) -> Result<()>;
    fn write_trigger_when_any_destination_available(&mut self, present: bool) -> Result<()>;
    fn write_supports_batching(&mut self, present: bool) -> Result<()>;
    fn write_primary_node_only(&mut self, present: bool) -> Result<()>;
    fn write_side_effect_free(&mut self, present: bool) -> Result<()>;
    fn write_default_settings(&mut self, settings: Option<&DefaultSettings>) -> Result<()>;

    fn write_stateful_info(&mut self, stateful: Option<&Stateful>) -> Result<()>;
    fn write_restricted_info(&mut self, restricted: Option<&Restricted>) -> Result<()>;
    fn write_input_requirement(&mut self, requirement: Option<InputRequirement>) -> Result<()>;
    fn write_system_resource_considerations(
        &mut self,
        considerations: &[SystemResourceConsideration],
    ) -> Result<()>;
    fn write_use_cases(&mut self, use_cases: &[UseCase]) -> Result<()>;
    fn write_multi_processor_use_cases(&mut self, use_cases: &[MultiProcessorUseCase])
        -> Result<()>;
    fn write_see_also(&mut self, see_also: Option<&SeeAlso>) -> Result<()>;
    fn write_default_schedule(&mut self, schedule: Option<&DefaultSchedule>) -> Result<()>;

    // Controller service only
    fn write_provided_service_apis(&mut self, apis: &[ServiceApi]) -> Result<()>;

    fn write_footer(&mut self, component: &ExtensionComponent) -> Result<()>;

    /// Push buffered output to the sink. Called once per document, on success
    /// and on failure.
    fn flush(&mut self) -> Result<()>;
}

/// Write one complete document for `component`.
///
/// `provided_service_apis` is only used for controller services; when empty,
/// the APIs declared on the snapshot are used instead. `property_services`
/// resolves controller-service references for display.
pub fn write_document<W>(
    writer: &mut W,
    component: &ExtensionComponent,
    provided_service_apis: &[ServiceApi],
    property_services: &PropertyServices,
) -> Result<()>
where
    W: DocumentationWriter + ?Sized,
{
    let category = classify(component);
    debug!(class = %component.class_name, %category, "writing extension document");

    let result = walk(writer, component, category, provided_service_apis, property_services);

    match result {
        Ok(()) => {
            writer.flush()?;
            debug!(class = %component.class_name, "extension document complete");
            Ok(())
        }
        Err(err) => {
            if let Err(flush_err) = writer.flush() {
                warn!(class = %component.class_name, error = %flush_err, "flush failed after write error");
            }
            Err(err)
        }
    }
}

/// Convenience wrapper over [`write_document`] for a deserialized request.
pub fn write_request<W>(writer: &mut W, request: &DocumentRequest) -> Result<()>
where
    W: DocumentationWriter + ?Sized,
{
    write_document(
        writer,
        &request.component,
        &request.provided_service_apis,
        &request.property_services,
    )
}

fn walk<W>(
    writer: &mut W,
    component: &ExtensionComponent,
    category: Category,
    provided_service_apis: &[ServiceApi],
    property_services: &PropertyServices,
) -> Result<()>
where
    W: DocumentationWriter + ?Sized,
{
    writer.write_header(component)?;

    writer.write_extension_name(&component.class_name)?;
    writer.write_extension_type(category)?;
    writer.write_deprecation_notice(component.deprecation_notice.as_ref())?;
    writer.write_description(component.description.as_deref())?;
    writer.write_tags(&component.tags)?;
    writer.write_properties(&component.properties, property_services)?;
    writer.write_dynamic_properties(&component.dynamic_properties)?;
    writer.write_supports_sensitive_dynamic_properties(
        component.supports_sensitive_dynamic_properties,
    )?;

    if let Some(processor) = component.processor_metadata() {
        writer.write_relationships(&processor.relationships)?;
        writer.write_dynamic_relationship(processor.dynamic_relationship.as_ref())?;
        writer.write_reads_attributes(&processor.reads_attributes)?;
        writer.write_writes_attributes(&processor.writes_attributes)?;
        writer.write_trigger_serially(processor.trigger_serially)?;
        writer.write_trigger_when_empty(processor.trigger_when_empty)?;
        writer.write_trigger_when_any_destination_available(
            processor.trigger_when_any_destination_available,
        )?;
        writer.write_supports_batching(processor.supports_batching)?;
        writer.write_primary_node_only(processor.primary_node_only)?;
        writer.write_side_effect_free(processor.side_effect_free)?;
        writer.write_default_settings(processor.default_settings.as_ref())?;
    }

    writer.write_stateful_info(component.stateful.as_ref())?;
    writer.write_restricted_info(component.restricted.as_ref())?;
    writer.write_input_requirement(component.input_requirement)?;
    writer.write_system_resource_considerations(&component.system_resource_considerations)?;
    writer.write_use_cases(&component.use_cases)?;
    writer.write_multi_processor_use_cases(&component.multi_processor_use_cases)?;
    writer.write_see_also(component.see_also.as_ref())?;
    writer.write_default_schedule(component.default_schedule.as_ref())?;

    if category == Category::ControllerService {
        let apis = match component.controller_service_metadata() {
            Some(declared) if provided_service_apis.is_empty() => {
                declared.provided_service_apis.as_slice()
            }
            _ => provided_service_apis,
        };
        writer.write_provided_service_apis(apis)?;
    }

    writer.write_footer(component)
}
