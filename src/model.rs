//! Data model for extension component metadata, independent of output format.
//!
//! An [`ExtensionComponent`] is a read-only snapshot of everything a component
//! declares about itself. Hosts build one per documentation request (or hand it
//! over as JSON) and the writers only ever borrow it.
//!
//! Lists keep the caller's order. Nothing here sorts or deduplicates, except
//! [`RelationshipSet`], which keeps relationship names unique.

use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;

macro_rules! canonical_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident { $($(#[$vmeta:meta])* $variant:ident => $text:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
        pub enum $name {
            $($(#[$vmeta])* #[serde(rename = $text)] $variant),+
        }

        impl $name {
            /// Canonical upper-case name used in rendered documents.
            pub fn name(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

canonical_enum! {
    /// Where expression language is evaluated for a property value.
    #[derive(Default)]
    pub enum ExpressionLanguageScope {
        #[default]
        None => "NONE",
        Environment => "ENVIRONMENT",
        FlowFileAttributes => "FLOWFILE_ATTRIBUTES",
    }
}

canonical_enum! {
    /// How many resources a property may reference.
    pub enum ResourceCardinality {
        Single => "SINGLE",
        Multiple => "MULTIPLE",
    }
}

canonical_enum! {
    pub enum ResourceType {
        File => "FILE",
        Directory => "DIRECTORY",
        Text => "TEXT",
        Url => "URL",
    }
}

canonical_enum! {
    /// State scope for stateful components.
    pub enum Scope {
        Cluster => "CLUSTER",
        Local => "LOCAL",
    }
}

canonical_enum! {
    /// Whether a component needs incoming data.
    #[derive(Default)]
    pub enum InputRequirement {
        InputRequired => "INPUT_REQUIRED",
        #[default]
        InputAllowed => "INPUT_ALLOWED",
        InputForbidden => "INPUT_FORBIDDEN",
    }
}

canonical_enum! {
    pub enum SystemResource {
        Cpu => "CPU",
        Disk => "DISK",
        Memory => "MEMORY",
        Network => "NETWORK",
    }
}

canonical_enum! {
    #[derive(Default)]
    pub enum SchedulingStrategy {
        #[default]
        TimerDriven => "TIMER_DRIVEN",
        CronDriven => "CRON_DRIVEN",
    }
}

canonical_enum! {
    #[derive(Default)]
    pub enum BulletinLevel {
        Debug => "DEBUG",
        Info => "INFO",
        #[default]
        Warn => "WARN",
        Error => "ERROR",
        None => "NONE",
    }
}

/// Permission a user must hold before configuring a restricted component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RequiredPermission {
    ReadFilesystem,
    WriteFilesystem,
    ReadDistributedFilesystem,
    WriteDistributedFilesystem,
    ExecuteCode,
    AccessKeytab,
    AccessTicketCache,
    AccessEnvironmentCredentials,
    ExportNifiDetails,
    ReferenceRemoteResources,
}

impl RequiredPermission {
    pub const ALL: [RequiredPermission; 10] = [
        RequiredPermission::ReadFilesystem,
        RequiredPermission::WriteFilesystem,
        RequiredPermission::ReadDistributedFilesystem,
        RequiredPermission::WriteDistributedFilesystem,
        RequiredPermission::ExecuteCode,
        RequiredPermission::AccessKeytab,
        RequiredPermission::AccessTicketCache,
        RequiredPermission::AccessEnvironmentCredentials,
        RequiredPermission::ExportNifiDetails,
        RequiredPermission::ReferenceRemoteResources,
    ];

    /// Stable identifier, e.g. `read-filesystem`.
    pub fn identifier(&self) -> &'static str {
        match self {
            RequiredPermission::ReadFilesystem => "read-filesystem",
            RequiredPermission::WriteFilesystem => "write-filesystem",
            RequiredPermission::ReadDistributedFilesystem => "read-distributed-filesystem",
            RequiredPermission::WriteDistributedFilesystem => "write-distributed-filesystem",
            RequiredPermission::ExecuteCode => "execute-code",
            RequiredPermission::AccessKeytab => "access-keytab",
            RequiredPermission::AccessTicketCache => "access-ticket-cache",
            RequiredPermission::AccessEnvironmentCredentials => "access-environment-credentials",
            RequiredPermission::ExportNifiDetails => "export-nifi-details",
            RequiredPermission::ReferenceRemoteResources => "reference-remote-resources",
        }
    }

    /// Human-readable label, e.g. `read filesystem`. This is what documents show.
    pub fn label(&self) -> &'static str {
        match self {
            RequiredPermission::ReadFilesystem => "read filesystem",
            RequiredPermission::WriteFilesystem => "write filesystem",
            RequiredPermission::ReadDistributedFilesystem => "read distributed filesystem",
            RequiredPermission::WriteDistributedFilesystem => "write distributed filesystem",
            RequiredPermission::ExecuteCode => "execute code",
            RequiredPermission::AccessKeytab => "access keytab",
            RequiredPermission::AccessTicketCache => "access ticket cache",
            RequiredPermission::AccessEnvironmentCredentials => "access environment credentials",
            RequiredPermission::ExportNifiDetails => "export nifi details",
            RequiredPermission::ReferenceRemoteResources => "reference remote resources",
        }
    }

    pub fn from_identifier(identifier: &str) -> Option<RequiredPermission> {
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.identifier() == identifier)
    }
}

/// Coordinates of a published controller service interface.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceApi {
    pub class_name: String,
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
}

impl ServiceApi {
    pub fn new(
        class_name: impl Into<String>,
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            class_name: class_name.into(),
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AllowableValue {
    pub display_name: String,
    pub value: String,
    pub description: Option<String>,
}

/// Files, directories or URLs a property may reference. Not rendered while
/// `cardinality` is unknown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResourceDefinition {
    pub cardinality: Option<ResourceCardinality>,
    pub resource_types: Vec<ResourceType>,
}

/// A property is only relevant when another property is set (optionally to
/// one of a set of values).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PropertyDependency {
    pub property_name: String,
    pub property_display_name: String,
    /// `None` means "any value"; `Some(vec![])` is an explicitly empty set.
    pub dependent_values: Option<Vec<String>>,
}

/// Declarative description of one configurable field of a component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PropertyDescriptor {
    pub name: String,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub default_value: Option<String>,
    pub allowable_values: Vec<AllowableValue>,
    pub required: bool,
    pub sensitive: bool,
    pub dynamic: bool,
    pub expression_language_supported: bool,
    pub expression_language_scope: Option<ExpressionLanguageScope>,
    pub dynamically_modifies_classpath: bool,
    /// Class name of the controller service API this property references.
    pub controller_service_definition: Option<String>,
    pub resource_definition: Option<ResourceDefinition>,
    pub dependencies: Vec<PropertyDependency>,
}

impl PropertyDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Display name, falling back to the property name.
    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }
}

/// Template for user-defined properties a component accepts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DynamicProperty {
    pub name: String,
    pub value: String,
    pub description: String,
    pub expression_language_scope: ExpressionLanguageScope,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeprecationNotice {
    pub reason: String,
    /// Replacement components referenced by class.
    pub alternatives: Vec<String>,
    /// Replacement components referenced by name only.
    pub class_names: Vec<String>,
}

impl DeprecationNotice {
    /// Class refs then names, deduplicated, first occurrence wins.
    pub fn merged_alternatives(&self) -> Vec<&str> {
        ordered_unique(self.alternatives.iter().chain(self.class_names.iter()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeeAlso {
    pub classes: Vec<String>,
    pub class_names: Vec<String>,
}

impl SeeAlso {
    /// Class refs then names, deduplicated, first occurrence wins.
    pub fn merged(&self) -> Vec<&str> {
        ordered_unique(self.classes.iter().chain(self.class_names.iter()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Stateful {
    pub description: String,
    pub scopes: Vec<Scope>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Restriction {
    pub required_permission: Option<RequiredPermission>,
    pub explanation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Restricted {
    pub general_restriction_explanation: Option<String>,
    pub restrictions: Vec<Restriction>,
}

/// Entries without a `resource` are skipped when rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SystemResourceConsideration {
    pub resource: Option<SystemResource>,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UseCase {
    pub description: String,
    pub notes: String,
    pub keywords: Vec<String>,
    pub input_requirement: InputRequirement,
    pub configuration: String,
}

/// One step of a multi-component use case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProcessorConfiguration {
    pub processor_class_name: String,
    /// Class reference, used when `processor_class_name` is empty.
    pub processor_class: Option<String>,
    pub configuration: String,
}

impl ProcessorConfiguration {
    pub fn resolved_class_name(&self) -> &str {
        if self.processor_class_name.is_empty() {
            self.processor_class.as_deref().unwrap_or("")
        } else {
            &self.processor_class_name
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MultiProcessorUseCase {
    pub description: String,
    pub notes: String,
    pub keywords: Vec<String>,
    pub configurations: Vec<ProcessorConfiguration>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DefaultSchedule {
    pub strategy: SchedulingStrategy,
    pub period: String,
    pub concurrent_tasks: u32,
}

impl Default for DefaultSchedule {
    fn default() -> Self {
        Self {
            strategy: SchedulingStrategy::TimerDriven,
            period: "0 sec".to_string(),
            concurrent_tasks: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DefaultSettings {
    pub yield_duration: String,
    pub penalty_duration: String,
    pub bulletin_level: BulletinLevel,
}

impl Default for DefaultSettings {
    fn default() -> Self {
        Self {
            yield_duration: "1 sec".to_string(),
            penalty_duration: "30 sec".to_string(),
            bulletin_level: BulletinLevel::Warn,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Relationship {
    pub name: String,
    pub description: String,
    pub auto_terminated: bool,
}

impl Relationship {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            auto_terminated: false,
        }
    }
}

/// Relationships keyed by name, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Vec<Relationship>")]
pub struct RelationshipSet {
    entries: Vec<Relationship>,
}

impl RelationshipSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a relationship. Returns false (and keeps the existing entry) if
    /// the name is already taken.
    pub fn insert(&mut self, relationship: Relationship) -> bool {
        if self.entries.iter().any(|r| r.name == relationship.name) {
            return false;
        }
        self.entries.push(relationship);
        true
    }

    pub fn get(&self, name: &str) -> Option<&Relationship> {
        self.entries.iter().find(|r| r.name == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Relationship> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<Relationship>> for RelationshipSet {
    fn from(relationships: Vec<Relationship>) -> Self {
        relationships.into_iter().collect()
    }
}

impl FromIterator<Relationship> for RelationshipSet {
    fn from_iter<I: IntoIterator<Item = Relationship>>(iter: I) -> Self {
        let mut set = RelationshipSet::new();
        for relationship in iter {
            set.insert(relationship);
        }
        set
    }
}

impl<'a> IntoIterator for &'a RelationshipSet {
    type Item = &'a Relationship;
    type IntoIter = std::slice::Iter<'a, Relationship>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DynamicRelationship {
    pub name: String,
    pub description: String,
}

/// A flow file attribute a processor reads or writes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AttributeDescriptor {
    pub name: String,
    pub description: String,
}

impl AttributeDescriptor {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Metadata only processors carry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProcessorMetadata {
    pub relationships: RelationshipSet,
    pub dynamic_relationship: Option<DynamicRelationship>,
    pub reads_attributes: Vec<AttributeDescriptor>,
    pub writes_attributes: Vec<AttributeDescriptor>,
    pub trigger_serially: bool,
    pub trigger_when_empty: bool,
    pub trigger_when_any_destination_available: bool,
    pub supports_batching: bool,
    pub primary_node_only: bool,
    pub side_effect_free: bool,
    pub default_settings: Option<DefaultSettings>,
}

/// Metadata only controller services carry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ControllerServiceMetadata {
    pub provided_service_apis: Vec<ServiceApi>,
}

/// The five kinds of extension component, with their kind-specific metadata.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComponentKind {
    Processor(ProcessorMetadata),
    ControllerService(ControllerServiceMetadata),
    ReportingTask,
    FlowAnalysisRule,
    ParameterProvider,
}

/// Read-only snapshot of one extension component's declared metadata.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionComponent {
    pub class_name: String,
    #[serde(flatten)]
    pub kind: ComponentKind,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub properties: Vec<PropertyDescriptor>,
    #[serde(default)]
    pub dynamic_properties: Vec<DynamicProperty>,
    #[serde(default)]
    pub supports_sensitive_dynamic_properties: bool,
    #[serde(default)]
    pub deprecation_notice: Option<DeprecationNotice>,
    #[serde(default)]
    pub stateful: Option<Stateful>,
    #[serde(default)]
    pub restricted: Option<Restricted>,
    #[serde(default)]
    pub input_requirement: Option<InputRequirement>,
    #[serde(default)]
    pub system_resource_considerations: Vec<SystemResourceConsideration>,
    #[serde(default)]
    pub use_cases: Vec<UseCase>,
    #[serde(default)]
    pub multi_processor_use_cases: Vec<MultiProcessorUseCase>,
    #[serde(default)]
    pub see_also: Option<SeeAlso>,
    #[serde(default)]
    pub default_schedule: Option<DefaultSchedule>,
}

impl ExtensionComponent {
    /// A component with only a class name and kind; every optional section absent.
    pub fn new(class_name: impl Into<String>, kind: ComponentKind) -> Self {
        Self {
            class_name: class_name.into(),
            kind,
            description: None,
            tags: Vec::new(),
            properties: Vec::new(),
            dynamic_properties: Vec::new(),
            supports_sensitive_dynamic_properties: false,
            deprecation_notice: None,
            stateful: None,
            restricted: None,
            input_requirement: None,
            system_resource_considerations: Vec::new(),
            use_cases: Vec::new(),
            multi_processor_use_cases: Vec::new(),
            see_also: None,
            default_schedule: None,
        }
    }

    pub fn processor(class_name: impl Into<String>) -> Self {
        Self::new(class_name, ComponentKind::Processor(ProcessorMetadata::default()))
    }

    pub fn controller_service(class_name: impl Into<String>) -> Self {
        Self::new(
            class_name,
            ComponentKind::ControllerService(ControllerServiceMetadata::default()),
        )
    }

    pub fn processor_metadata(&self) -> Option<&ProcessorMetadata> {
        match &self.kind {
            ComponentKind::Processor(meta) => Some(meta),
            _ => None,
        }
    }

    pub fn processor_metadata_mut(&mut self) -> Option<&mut ProcessorMetadata> {
        match &mut self.kind {
            ComponentKind::Processor(meta) => Some(meta),
            _ => None,
        }
    }

    pub fn controller_service_metadata(&self) -> Option<&ControllerServiceMetadata> {
        match &self.kind {
            ComponentKind::ControllerService(meta) => Some(meta),
            _ => None,
        }
    }
}

/// Insertion-ordered dedup.
fn ordered_unique<'a, I>(values: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a String>,
{
    let mut seen = HashSet::new();
    values
        .into_iter()
        .map(String::as_str)
        .filter(|v| seen.insert(*v))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relationship_names_stay_unique() {
        let mut set = RelationshipSet::new();
        assert!(set.insert(Relationship::new("success", "ok")));
        assert!(!set.insert(Relationship::new("success", "again")));
        assert!(set.insert(Relationship::new("failure", "bad")));

        let names: Vec<_> = set.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["success", "failure"]);
        assert_eq!(set.get("success").map(|r| r.description.as_str()), Some("ok"));
    }

    #[test]
    fn deprecation_alternatives_dedup() {
        let notice = DeprecationNotice {
            reason: "legacy".to_string(),
            alternatives: vec!["org.x.NewThing".to_string(), "org.x.Other".to_string()],
            class_names: vec!["org.x.NewThing".to_string(), "org.x.Third".to_string()],
        };
        assert_eq!(
            notice.merged_alternatives(),
            ["org.x.NewThing", "org.x.Other", "org.x.Third"]
        );
    }

    #[test]
    fn processor_configuration_falls_back_to_class() {
        let config = ProcessorConfiguration {
            processor_class_name: String::new(),
            processor_class: Some("org.x.Fetch".to_string()),
            configuration: String::new(),
        };
        assert_eq!(config.resolved_class_name(), "org.x.Fetch");

        let named = ProcessorConfiguration {
            processor_class_name: "org.x.Put".to_string(),
            ..config
        };
        assert_eq!(named.resolved_class_name(), "org.x.Put");
    }

    #[test]
    fn permission_identifier_lookup() {
        assert_eq!(
            RequiredPermission::from_identifier("execute-code"),
            Some(RequiredPermission::ExecuteCode)
        );
        assert_eq!(RequiredPermission::ExecuteCode.label(), "execute code");
        assert_eq!(RequiredPermission::from_identifier("fly"), None);
    }

    #[test]
    fn display_name_falls_back_to_name() {
        let mut prop = PropertyDescriptor::new("Endpoint");
        assert_eq!(prop.display_name(), "Endpoint");
        prop.display_name = Some("Remote Endpoint".to_string());
        assert_eq!(prop.display_name(), "Remote Endpoint");
    }

    #[test]
    fn deserialize_processor_snapshot() {
        let json = r#"{
            "className": "org.x.Fetch",
            "type": "PROCESSOR",
            "tags": ["http"],
            "relationships": [
                {"name": "success", "description": "ok"},
                {"name": "success", "description": "dup"}
            ],
            "triggerSerially": true,
            "restricted": {
                "restrictions": [{"requiredPermission": "read-filesystem", "explanation": "reads"}]
            }
        }"#;
        let component: ExtensionComponent = serde_json::from_str(json).unwrap();
        let meta = component.processor_metadata().unwrap();
        assert_eq!(meta.relationships.len(), 1);
        assert!(meta.trigger_serially);
        assert_eq!(component.tags, ["http"]);
        let restricted = component.restricted.unwrap();
        assert_eq!(
            restricted.restrictions[0].required_permission,
            Some(RequiredPermission::ReadFilesystem)
        );
    }

    #[test]
    fn deserialize_tolerates_partial_sections() {
        let json = r#"{
            "className": "org.x.Partial",
            "type": "PROCESSOR",
            "properties": [{"name": "Path", "resourceDefinition": {"resourceTypes": ["FILE"]}}],
            "systemResourceConsiderations": [{"description": "no resource named"}]
        }"#;
        let component: ExtensionComponent = serde_json::from_str(json).unwrap();
        let resource = component.properties[0].resource_definition.as_ref().unwrap();
        assert_eq!(resource.cardinality, None);
        assert_eq!(resource.resource_types, [ResourceType::File]);
        assert_eq!(component.system_resource_considerations[0].resource, None);
    }

    #[test]
    fn enum_defaults() {
        assert_eq!(ExpressionLanguageScope::default(), ExpressionLanguageScope::None);
        assert_eq!(InputRequirement::default(), InputRequirement::InputAllowed);
        assert_eq!(SchedulingStrategy::default(), SchedulingStrategy::TimerDriven);
        assert_eq!(BulletinLevel::default(), BulletinLevel::Warn);
    }

    #[test]
    fn deserialize_rejects_unknown_type() {
        let json = r#"{"className": "org.x.Thing", "type": "WIDGET"}"#;
        assert!(serde_json::from_str::<ExtensionComponent>(json).is_err());
    }
}
