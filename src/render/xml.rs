//! XML renderer: the canonical document format consumed by documentation tooling.
//!
//! Writes the nested element grammar rooted at `<extension>`. Only `<`, `>`
//! and `&` are escaped in text; quotes and control characters pass through.
//! Absent sections are omitted, boolean presence flags render as `true` only
//! when set, and text elements without a value render as an empty start/end
//! pair.

use crate::category::Category;
use crate::error::Result;
use crate::model::*;
use crate::render::RenderOptions;
use crate::traversal::{DocumentationWriter, PropertyServices};
use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Write;
use tracing::{debug, trace};

/// Placeholder coordinates for an unresolved controller service reference.
const UNKNOWN: &str = "unknown";

pub struct XmlRenderer<W: Write> {
    writer: Writer<W>,
    open: Vec<&'static str>,
    xml_declaration: bool,
}

impl<W: Write> XmlRenderer<W> {
    pub fn new(sink: W, options: &RenderOptions) -> Self {
        let writer = match options.indent {
            Some(width) => Writer::new_with_indent(sink, b' ', width),
            None => Writer::new(sink),
        };
        Self {
            writer,
            open: Vec::new(),
            xml_declaration: options.xml_declaration,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    // -- element primitives ---------------------------------------------------

    fn start(&mut self, name: &'static str) -> Result<()> {
        self.writer.write_event(Event::Start(BytesStart::new(name)))?;
        self.open.push(name);
        Ok(())
    }

    fn end(&mut self) -> Result<()> {
        if let Some(name) = self.open.pop() {
            self.writer.write_event(Event::End(BytesEnd::new(name)))?;
        }
        Ok(())
    }

    fn text(&mut self, text: &str) -> Result<()> {
        let escaped = partial_escape(text);
        self.writer
            .write_event(Event::Text(BytesText::from_escaped(escaped)))?;
        Ok(())
    }

    /// `<name>text</name>`, or `<name></name>` when there is no text.
    fn text_element(&mut self, name: &'static str, text: Option<&str>) -> Result<()> {
        self.start(name)?;
        self.text(text.unwrap_or(""))?;
        self.end()
    }

    fn bool_element(&mut self, name: &'static str, value: bool) -> Result<()> {
        self.text_element(name, Some(if value { "true" } else { "false" }))
    }

    /// Presence flag: written as `true` when set, omitted otherwise.
    fn flag(&mut self, name: &'static str, present: bool) -> Result<()> {
        if present {
            self.bool_element(name, true)?;
        }
        Ok(())
    }

    fn array<T, I, F>(&mut self, name: &'static str, items: I, mut write_item: F) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        F: FnMut(&mut Self, T) -> Result<()>,
    {
        self.start(name)?;
        let mut empty = true;
        for item in items {
            write_item(self, item)?;
            empty = false;
        }
        if empty {
            self.text("")?;
        }
        self.end()
    }

    fn text_array<'a, I>(&mut self, outer: &'static str, inner: &'static str, values: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.array(outer, values, |w, value| w.text_element(inner, Some(value)))
    }

    // -- nested writers -------------------------------------------------------

    fn property(&mut self, property: &PropertyDescriptor, services: &PropertyServices) -> Result<()> {
        self.start("property")?;

        self.text_element("name", Some(&property.name))?;
        self.text_element("displayName", Some(property.display_name()))?;
        self.text_element("description", property.description.as_deref())?;
        if let Some(ref default_value) = property.default_value {
            self.text_element("defaultValue", Some(default_value))?;
        }

        if let Some(ref api_class) = property.controller_service_definition {
            self.start("controllerServiceDefinition")?;
            match services.get(&property.name) {
                Some(api) => self.service_api_fields(api)?,
                None => {
                    debug!(property = %property.name, "no service API resolved, using placeholder coordinates");
                    self.text_element("className", Some(api_class))?;
                    self.text_element("groupId", Some(UNKNOWN))?;
                    self.text_element("artifactId", Some(UNKNOWN))?;
                    self.text_element("version", Some(UNKNOWN))?;
                }
            }
            self.end()?;
        }

        if !property.allowable_values.is_empty() {
            self.array("allowableValues", &property.allowable_values, |w, value| {
                w.start("allowableValue")?;
                w.text_element("displayName", Some(&value.display_name))?;
                w.text_element("value", Some(&value.value))?;
                w.text_element("description", value.description.as_deref())?;
                w.end()
            })?;
        }

        self.bool_element("required", property.required)?;
        self.bool_element("sensitive", property.sensitive)?;
        self.bool_element("expressionLanguageSupported", property.expression_language_supported)?;
        if let Some(scope) = property.expression_language_scope {
            self.text_element("expressionLanguageScope", Some(scope.name()))?;
        }
        self.bool_element("dynamicallyModifiesClasspath", property.dynamically_modifies_classpath)?;
        self.bool_element("dynamic", property.dynamic)?;

        if let Some((resource, cardinality)) = property
            .resource_definition
            .as_ref()
            .and_then(|r| r.cardinality.map(|c| (r, c)))
        {
            self.start("resourceDefinition")?;
            self.text_element("cardinality", Some(cardinality.name()))?;
            self.text_array(
                "resourceTypes",
                "resourceType",
                resource.resource_types.iter().map(ResourceType::name),
            )?;
            self.end()?;
        }

        if !property.dependencies.is_empty() {
            self.array("dependencies", &property.dependencies, |w, dependency| {
                w.start("dependency")?;
                w.text_element("propertyName", Some(&dependency.property_name))?;
                w.text_element("propertyDisplayName", Some(&dependency.property_display_name))?;
                if let Some(ref values) = dependency.dependent_values {
                    w.text_array("dependentValues", "dependentValue", values.iter().map(String::as_str))?;
                }
                w.end()
            })?;
        }

        self.end()
    }

    fn service_api_fields(&mut self, api: &ServiceApi) -> Result<()> {
        self.text_element("className", Some(&api.class_name))?;
        self.text_element("groupId", Some(&api.group_id))?;
        self.text_element("artifactId", Some(&api.artifact_id))?;
        self.text_element("version", Some(&api.version))
    }

    fn attributes(
        &mut self,
        outer: &'static str,
        inner: &'static str,
        attributes: &[AttributeDescriptor],
    ) -> Result<()> {
        if attributes.is_empty() {
            return Ok(());
        }
        self.array(outer, attributes, |w, attribute| {
            w.start(inner)?;
            w.text_element("name", Some(&attribute.name))?;
            w.text_element("description", Some(&attribute.description))?;
            w.end()
        })
    }
}

impl<W: Write> DocumentationWriter for XmlRenderer<W> {
    fn write_header(&mut self, _component: &ExtensionComponent) -> Result<()> {
        if self.xml_declaration {
            self.writer
                .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        }
        self.start("extension")
    }

    fn write_extension_name(&mut self, name: &str) -> Result<()> {
        self.text_element("name", Some(name))
    }

    fn write_extension_type(&mut self, category: Category) -> Result<()> {
        self.text_element("type", Some(category.name()))
    }

    fn write_deprecation_notice(&mut self, notice: Option<&DeprecationNotice>) -> Result<()> {
        let Some(notice) = notice else {
            return Ok(());
        };
        self.start("deprecationNotice")?;
        self.text_element("reason", Some(&notice.reason))?;
        self.text_array("alternatives", "alternative", notice.merged_alternatives())?;
        self.end()
    }

    fn write_description(&mut self, description: Option<&str>) -> Result<()> {
        match description {
            Some(text) => self.text_element("description", Some(text)),
            None => Ok(()),
        }
    }

    fn write_tags(&mut self, tags: &[String]) -> Result<()> {
        self.text_array("tags", "tag", tags.iter().map(String::as_str))
    }

    fn write_properties(
        &mut self,
        properties: &[PropertyDescriptor],
        property_services: &PropertyServices,
    ) -> Result<()> {
        if properties.is_empty() {
            return Ok(());
        }
        trace!(count = properties.len(), "writing properties");
        self.array("properties", properties, |w, property| {
            w.property(property, property_services)
        })
    }

    fn write_dynamic_properties(&mut self, properties: &[DynamicProperty]) -> Result<()> {
        if properties.is_empty() {
            return Ok(());
        }
        self.array("dynamicProperties", properties, |w, property| {
            w.start("dynamicProperty")?;
            w.text_element("name", Some(&property.name))?;
            w.text_element("value", Some(&property.value))?;
            w.text_element("description", Some(&property.description))?;
            w.text_element(
                "expressionLanguageScope",
                Some(property.expression_language_scope.name()),
            )?;
            w.end()
        })
    }

    fn write_supports_sensitive_dynamic_properties(&mut self, supported: bool) -> Result<()> {
        self.flag("supportsSensitiveDynamicProperties", supported)
    }

    fn write_relationships(&mut self, relationships: &RelationshipSet) -> Result<()> {
        if relationships.is_empty() {
            return Ok(());
        }
        self.array("relationships", relationships, |w, relationship| {
            w.start("relationship")?;
            w.text_element("name", Some(&relationship.name))?;
            w.text_element("description", Some(&relationship.description))?;
            w.bool_element("autoTerminated", relationship.auto_terminated)?;
            w.end()
        })
    }

    fn write_dynamic_relationship(
        &mut self,
        relationship: Option<&DynamicRelationship>,
    ) -> Result<()> {
        let Some(relationship) = relationship else {
            return Ok(());
        };
        self.start("dynamicRelationship")?;
        self.text_element("name", Some(&relationship.name))?;
        self.text_element("description", Some(&relationship.description))?;
        self.end()
    }

    fn write_reads_attributes(&mut self, attributes: &[AttributeDescriptor]) -> Result<()> {
        self.attributes("readsAttributes", "readsAttribute", attributes)
    }

    fn write_writes_attributes(&mut self, attributes: &[AttributeDescriptor]) -> Result<()> {
        self.attributes("writesAttributes", "writesAttribute", attributes)
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
        let Some(settings) = settings else {
            return Ok(());
        };
        self.start("defaultSettings")?;
        self.text_element("yieldDuration", Some(&settings.yield_duration))?;
        self.text_element("penaltyDuration", Some(&settings.penalty_duration))?;
        self.text_element("bulletinLevel", Some(settings.bulletin_level.name()))?;
        self.end()
    }

    fn write_stateful_info(&mut self, stateful: Option<&Stateful>) -> Result<()> {
        let Some(stateful) = stateful else {
            return Ok(());
        };
        self.start("stateful")?;
        self.text_element("description", Some(&stateful.description))?;
        self.text_array("scopes", "scope", stateful.scopes.iter().map(Scope::name))?;
        self.end()
    }

    fn write_restricted_info(&mut self, restricted: Option<&Restricted>) -> Result<()> {
        let Some(restricted) = restricted else {
            return Ok(());
        };
        self.start("restricted")?;

        if let Some(explanation) = restricted
            .general_restriction_explanation
            .as_deref()
            .filter(|e| !e.is_empty())
        {
            self.text_element("generalRestrictionExplanation", Some(explanation))?;
        }

        self.array("restrictions", &restricted.restrictions, |w, restriction| {
            w.start("restriction")?;
            w.text_element(
                "requiredPermission",
                restriction.required_permission.map(|p| p.label()),
            )?;
            w.text_element("explanation", Some(&restriction.explanation))?;
            w.end()
        })?;

        self.end()
    }

    fn write_input_requirement(&mut self, requirement: Option<InputRequirement>) -> Result<()> {
        match requirement {
            Some(requirement) => self.text_element("inputRequirement", Some(requirement.name())),
            None => Ok(()),
        }
    }

    fn write_system_resource_considerations(
        &mut self,
        considerations: &[SystemResourceConsideration],
    ) -> Result<()> {
        let known: Vec<(SystemResource, &str)> = considerations
            .iter()
            .filter_map(|c| c.resource.map(|r| (r, c.description.as_str())))
            .collect();
        if known.is_empty() {
            return Ok(());
        }
        self.array("systemResourceConsiderations", known, |w, (resource, description)| {
            w.start("systemResourceConsideration")?;
            w.text_element("resource", Some(resource.name()))?;
            w.text_element("description", Some(description))?;
            w.end()
        })
    }

    fn write_use_cases(&mut self, use_cases: &[UseCase]) -> Result<()> {
        if use_cases.is_empty() {
            return Ok(());
        }
        self.array("useCases", use_cases, |w, use_case| {
            w.start("useCase")?;
            w.text_element("description", Some(&use_case.description))?;
            w.text_element("notes", Some(&use_case.notes))?;
            w.text_array("keywords", "keyword", use_case.keywords.iter().map(String::as_str))?;
            w.text_element("inputRequirement", Some(use_case.input_requirement.name()))?;
            w.text_element("configuration", Some(&use_case.configuration))?;
            w.end()
        })
    }

    fn write_multi_processor_use_cases(
        &mut self,
        use_cases: &[MultiProcessorUseCase],
    ) -> Result<()> {
        if use_cases.is_empty() {
            return Ok(());
        }
        self.array("multiProcessorUseCases", use_cases, |w, use_case| {
            w.start("multiProcessorUseCase")?;
            w.text_element("description", Some(&use_case.description))?;
            w.text_element("notes", Some(&use_case.notes))?;
            w.text_array("keywords", "keyword", use_case.keywords.iter().map(String::as_str))?;
            w.array("processorConfigurations", &use_case.configurations, |w, config| {
                w.start("processorConfiguration")?;
                w.text_element("processorClassName", Some(config.resolved_class_name()))?;
                w.text_element("configuration", Some(&config.configuration))?;
                w.end()
            })?;
            w.end()
        })
    }

    fn write_see_also(&mut self, see_also: Option<&SeeAlso>) -> Result<()> {
        let merged = see_also.map(SeeAlso::merged).unwrap_or_default();
        if merged.is_empty() {
            return Ok(());
        }
        self.text_array("seeAlso", "see", merged)
    }

    fn write_default_schedule(&mut self, schedule: Option<&DefaultSchedule>) -> Result<()> {
        let Some(schedule) = schedule else {
            return Ok(());
        };
        self.start("defaultSchedule")?;
        self.text_element("strategy", Some(schedule.strategy.name()))?;
        self.text_element("period", Some(&schedule.period))?;
        self.text_element("concurrentTasks", Some(&schedule.concurrent_tasks.to_string()))?;
        self.end()
    }

    fn write_provided_service_apis(&mut self, apis: &[ServiceApi]) -> Result<()> {
        if apis.is_empty() {
            return Ok(());
        }
        self.array("providedServiceAPIs", apis, |w, api| {
            w.start("providedServiceAPI")?;
            w.service_api_fields(api)?;
            w.end()
        })
    }

    fn write_footer(&mut self, _component: &ExtensionComponent) -> Result<()> {
        self.end()
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.get_mut().flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traversal::write_document;

    fn render(component: &ExtensionComponent) -> String {
        render_with(component, &[], &PropertyServices::new(), &RenderOptions::default())
    }

    fn render_with(
        component: &ExtensionComponent,
        provided: &[ServiceApi],
        services: &PropertyServices,
        options: &RenderOptions,
    ) -> String {
        let mut renderer = XmlRenderer::new(Vec::new(), options);
        write_document(&mut renderer, component, provided, services).unwrap();
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn minimal_reporting_task() {
        let component = ExtensionComponent::new("org.x.Report", ComponentKind::ReportingTask);
        assert_eq!(
            render(&component),
            "<extension><name>org.x.Report</name><type>REPORTING_TASK</type><tags></tags></extension>"
        );
    }

    #[test]
    fn property_with_reference_fallback() {
        let mut component = ExtensionComponent::processor("org.x.P");
        let mut prop = PropertyDescriptor::new("Client");
        prop.controller_service_definition = Some("org.x.ClientService".to_string());
        component.properties.push(prop);

        let xml = render(&component);
        assert!(xml.contains(
            "<controllerServiceDefinition><className>org.x.ClientService</className>\
             <groupId>unknown</groupId><artifactId>unknown</artifactId>\
             <version>unknown</version></controllerServiceDefinition>"
        ));
        assert!(xml.contains("<description></description>"));
    }

    #[test]
    fn property_with_resolved_reference() {
        let mut component = ExtensionComponent::processor("org.x.P");
        let mut prop = PropertyDescriptor::new("Client");
        prop.controller_service_definition = Some("org.x.ClientService".to_string());
        component.properties.push(prop);

        let mut services = PropertyServices::new();
        services.insert(
            "Client".to_string(),
            ServiceApi::new("org.x.ClientService", "org.x", "x-api", "2.1"),
        );
        let xml = render_with(&component, &[], &services, &RenderOptions::default());
        assert!(xml.contains(
            "<className>org.x.ClientService</className><groupId>org.x</groupId>\
             <artifactId>x-api</artifactId><version>2.1</version>"
        ));
    }

    #[test]
    fn property_element_order() {
        let mut component = ExtensionComponent::processor("org.x.P");
        component.properties.push(PropertyDescriptor {
            name: "Mode".to_string(),
            description: Some("How".to_string()),
            default_value: Some("fast".to_string()),
            allowable_values: vec![AllowableValue {
                display_name: "Fast".to_string(),
                value: "fast".to_string(),
                description: None,
            }],
            expression_language_supported: true,
            expression_language_scope: Some(ExpressionLanguageScope::Environment),
            resource_definition: Some(ResourceDefinition {
                cardinality: Some(ResourceCardinality::Single),
                resource_types: vec![ResourceType::File, ResourceType::Url],
            }),
            dependencies: vec![PropertyDependency {
                property_name: "Strategy".to_string(),
                property_display_name: "Strategy".to_string(),
                dependent_values: Some(vec!["a".to_string()]),
            }],
            ..Default::default()
        });

        let xml = render(&component);
        let expected = "<property><name>Mode</name><displayName>Mode</displayName>\
            <description>How</description><defaultValue>fast</defaultValue>\
            <allowableValues><allowableValue><displayName>Fast</displayName><value>fast</value>\
            <description></description></allowableValue></allowableValues>\
            <required>false</required><sensitive>false</sensitive>\
            <expressionLanguageSupported>true</expressionLanguageSupported>\
            <expressionLanguageScope>ENVIRONMENT</expressionLanguageScope>\
            <dynamicallyModifiesClasspath>false</dynamicallyModifiesClasspath><dynamic>false</dynamic>\
            <resourceDefinition><cardinality>SINGLE</cardinality><resourceTypes>\
            <resourceType>FILE</resourceType><resourceType>URL</resourceType></resourceTypes>\
            </resourceDefinition><dependencies><dependency><propertyName>Strategy</propertyName>\
            <propertyDisplayName>Strategy</propertyDisplayName><dependentValues>\
            <dependentValue>a</dependentValue></dependentValues></dependency></dependencies></property>";
        assert!(xml.contains(expected), "got: {xml}");
    }

    #[test]
    fn dependency_without_value_set_omits_dependent_values() {
        let mut component = ExtensionComponent::processor("org.x.P");
        let mut prop = PropertyDescriptor::new("B");
        prop.dependencies.push(PropertyDependency {
            property_name: "A".to_string(),
            property_display_name: "A".to_string(),
            dependent_values: None,
        });
        component.properties.push(prop);

        let xml = render(&component);
        assert!(xml.contains("<dependency><propertyName>A</propertyName><propertyDisplayName>A</propertyDisplayName></dependency>"));
        assert!(!xml.contains("dependentValues"));
    }

    #[test]
    fn presence_flags_only_when_set() {
        let mut component = ExtensionComponent::processor("org.x.P");
        component.supports_sensitive_dynamic_properties = true;
        if let Some(meta) = component.processor_metadata_mut() {
            meta.trigger_serially = true;
            meta.side_effect_free = true;
        }

        let xml = render(&component);
        assert!(xml.contains("<supportsSensitiveDynamicProperties>true</supportsSensitiveDynamicProperties>"));
        assert!(xml.contains("<triggerSerially>true</triggerSerially>"));
        assert!(xml.contains("<sideEffectFree>true</sideEffectFree>"));
        assert!(!xml.contains("triggerWhenEmpty"));
        assert!(!xml.contains("supportsBatching"));
        assert!(!xml.contains("false</triggerSerially>"));
    }

    #[test]
    fn restricted_without_general_explanation() {
        let mut component = ExtensionComponent::new("org.x.R", ComponentKind::ReportingTask);
        component.restricted = Some(Restricted {
            general_restriction_explanation: Some(String::new()),
            restrictions: vec![
                Restriction {
                    required_permission: Some(RequiredPermission::ReadFilesystem),
                    explanation: "reads files".to_string(),
                },
                Restriction {
                    required_permission: None,
                    explanation: "other".to_string(),
                },
            ],
        });

        let xml = render(&component);
        assert!(xml.contains(
            "<restricted><restrictions><restriction><requiredPermission>read filesystem</requiredPermission>\
             <explanation>reads files</explanation></restriction><restriction>\
             <requiredPermission></requiredPermission><explanation>other</explanation>\
             </restriction></restrictions></restricted>"
        ));
    }

    #[test]
    fn see_also_merges_without_duplicates() {
        let mut component = ExtensionComponent::new("org.x.F", ComponentKind::FlowAnalysisRule);
        component.see_also = Some(SeeAlso {
            classes: vec!["org.x.A".to_string(), "org.x.B".to_string()],
            class_names: vec!["org.x.B".to_string(), "org.x.C".to_string()],
        });
        let xml = render(&component);
        assert!(xml.contains(
            "<seeAlso><see>org.x.A</see><see>org.x.B</see><see>org.x.C</see></seeAlso>"
        ));
    }

    #[test]
    fn empty_see_also_is_omitted() {
        let mut component = ExtensionComponent::processor("org.x.P");
        component.see_also = Some(SeeAlso::default());
        let xml = render(&component);
        assert!(!xml.contains("seeAlso"), "got: {xml}");
        assert!(xml.ends_with("<type>PROCESSOR</type><tags></tags></extension>"));
    }

    #[test]
    fn text_escapes_markup_but_not_quotes() {
        let mut component = ExtensionComponent::new("org.x.R", ComponentKind::ReportingTask);
        component.description = Some(r#"say "hi" it's <b> & more"#.to_string());
        let xml = render(&component);
        assert!(xml.contains(
            r#"<description>say "hi" it's &lt;b&gt; &amp; more</description>"#
        ));
    }

    #[test]
    fn resource_definition_without_cardinality_is_omitted() {
        let mut component = ExtensionComponent::processor("org.x.P");
        let mut prop = PropertyDescriptor::new("Path");
        prop.resource_definition = Some(ResourceDefinition {
            cardinality: None,
            resource_types: vec![ResourceType::File],
        });
        component.properties.push(prop);
        let xml = render(&component);
        assert!(!xml.contains("resourceDefinition"));
        assert!(xml.contains("<dynamic>false</dynamic></property>"));
    }

    #[test]
    fn system_resources_without_resource_are_skipped() {
        let mut component = ExtensionComponent::processor("org.x.P");
        component
            .system_resource_considerations
            .push(SystemResourceConsideration {
                resource: None,
                description: "unnamed".to_string(),
            });
        assert!(!render(&component).contains("systemResourceConsiderations"));

        component
            .system_resource_considerations
            .push(SystemResourceConsideration {
                resource: Some(SystemResource::Disk),
                description: "spills".to_string(),
            });
        assert!(render(&component).contains(
            "<systemResourceConsiderations><systemResourceConsideration>\
             <resource>DISK</resource><description>spills</description>\
             </systemResourceConsideration></systemResourceConsiderations>"
        ));
    }

    #[test]
    fn use_cases_and_schedule() {
        let mut component = ExtensionComponent::processor("org.x.P");
        component.use_cases.push(UseCase {
            description: "Fetch".to_string(),
            keywords: vec!["get".to_string()],
            configuration: "Set URL".to_string(),
            ..Default::default()
        });
        component.multi_processor_use_cases.push(MultiProcessorUseCase {
            description: "Pipeline".to_string(),
            configurations: vec![ProcessorConfiguration {
                processor_class_name: String::new(),
                processor_class: Some("org.x.Q".to_string()),
                configuration: "wire".to_string(),
            }],
            ..Default::default()
        });
        component.default_schedule = Some(DefaultSchedule {
            strategy: SchedulingStrategy::CronDriven,
            period: "0 0 * * * ?".to_string(),
            concurrent_tasks: 4,
        });

        let xml = render(&component);
        assert!(xml.contains(
            "<useCases><useCase><description>Fetch</description><notes></notes>\
             <keywords><keyword>get</keyword></keywords><inputRequirement>INPUT_ALLOWED</inputRequirement>\
             <configuration>Set URL</configuration></useCase></useCases>"
        ));
        assert!(xml.contains(
            "<multiProcessorUseCases><multiProcessorUseCase><description>Pipeline</description>\
             <notes></notes><keywords></keywords><processorConfigurations><processorConfiguration>\
             <processorClassName>org.x.Q</processorClassName><configuration>wire</configuration>\
             </processorConfiguration></processorConfigurations></multiProcessorUseCase></multiProcessorUseCases>"
        ));
        assert!(xml.contains(
            "<defaultSchedule><strategy>CRON_DRIVEN</strategy><period>0 0 * * * ?</period>\
             <concurrentTasks>4</concurrentTasks></defaultSchedule>"
        ));
    }

    #[test]
    fn markup_in_text_is_escaped_by_writer() {
        let mut component = ExtensionComponent::new("org.x.P", ComponentKind::ParameterProvider);
        component.description = Some("a < b & c".to_string());
        let xml = render(&component);
        assert!(xml.contains("<description>a &lt; b &amp; c</description>"));
    }

    #[test]
    fn declaration_and_indent() {
        let component = ExtensionComponent::new("org.x.Report", ComponentKind::ReportingTask);
        let options = RenderOptions {
            indent: Some(2),
            xml_declaration: true,
        };
        let xml = render_with(&component, &[], &PropertyServices::new(), &options);
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("\n  <name>org.x.Report</name>"));
        assert!(xml.contains("<tags></tags>"));
    }
}
