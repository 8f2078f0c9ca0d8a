use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

/// A declared input of a component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub prop_type: String,
    pub required: bool,
    pub default_value: Option<String>,
    pub description: Option<String>,
}

impl PropEntry {
    /// A prop whose type could not be resolved (destructuring-only source).
    pub fn untyped(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prop_type: "unknown".to_string(),
            required: true,
            default_value: None,
            description: None,
        }
    }
}

/// Classification of a binding call (`use*` naming convention).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BindingKind {
    State,
    Effect,
    Context,
    Ref,
    Memoized,
    DerivedCallback,
    Other,
}

impl fmt::Display for BindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindingKind::State => write!(f, "state"),
            BindingKind::Effect => write!(f, "effect"),
            BindingKind::Context => write!(f, "context"),
            BindingKind::Ref => write!(f, "ref"),
            BindingKind::Memoized => write!(f, "memoized"),
            BindingKind::DerivedCallback => write!(f, "derived-callback"),
            BindingKind::Other => write!(f, "other"),
        }
    }
}

/// A state/effect/context binding associated with a component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Binding {
    pub name: String,
    pub kind: BindingKind,
    pub dependencies: Option<Vec<String>>,
    pub initial_value: Option<String>,
}

/// Method visibility, derived from a leading underscore in the name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Private,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodParam {
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: String,
    pub optional: bool,
}

/// A method of a class-style component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodInfo {
    pub name: String,
    pub parameters: Vec<MethodParam>,
    pub return_type: String,
    pub is_async: bool,
    pub visibility: Visibility,
}

/// Which lifecycle callbacks a class-style component declares.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifecycleHooks {
    pub construction: bool,
    pub mount: bool,
    pub update: bool,
    pub unmount: bool,
    pub derived_state: bool,
    pub error_capture: bool,
}

/// Composition relationships: child elements, render props, higher-order wrapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Composition {
    pub child_components: BTreeSet<String>,
    pub render_prop_names: Vec<String>,
    pub wrapper_names: Vec<String>,
    pub is_ref_forwarding: bool,
    pub is_memoized: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportSurface {
    pub has_default: bool,
    pub named: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSurface {
    pub external: Vec<String>,
    pub internal: Vec<String>,
    pub type_only: Vec<String>,
}

/// The normalized semantic model of one component source file.
///
/// Every list/set field defaults to empty; the structure is fully populated
/// even when individual extractors fault.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentStructure {
    pub props: Vec<PropEntry>,
    pub bindings: Vec<Binding>,
    pub methods: Vec<MethodInfo>,
    pub lifecycle: LifecycleHooks,
    pub composition: Composition,
    pub exports: ExportSurface,
    pub imports: ImportSurface,
}

/// Quantitative complexity metrics derived purely from the syntax tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplexityMetrics {
    pub cyclomatic: u32,
    pub cognitive: u32,
    pub maintainability_index: u32,
}

impl Default for ComplexityMetrics {
    /// The empty-program values: one linear path, nothing to read, MI at the
    /// formula's zero-volume ceiling.
    fn default() -> Self {
        Self {
            cyclomatic: 1,
            cognitive: 0,
            maintainability_index: 171,
        }
    }
}

/// Fault taxonomy for a single file's analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FaultKind {
    FileTooLarge,
    FileUnreadable,
    ParseFailure,
    ExtractionFault,
}

impl fmt::Display for FaultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FaultKind::FileTooLarge => write!(f, "file-too-large"),
            FaultKind::FileUnreadable => write!(f, "file-unreadable"),
            FaultKind::ParseFailure => write!(f, "parse-failure"),
            FaultKind::ExtractionFault => write!(f, "extraction-fault"),
        }
    }
}

/// A caught fault, reduced to serializable data (no backtraces).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fault {
    pub kind: FaultKind,
    pub message: String,
}

impl Fault {
    pub fn new(kind: FaultKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn parse_failure(message: impl Into<String>) -> Self {
        Self::new(FaultKind::ParseFailure, message)
    }

    pub fn extraction(message: impl Into<String>) -> Self {
        Self::new(FaultKind::ExtractionFault, message)
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

/// Analysis outcome for one source file, independent of all other files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub success: bool,
    pub structure: Option<ComponentStructure>,
    pub metrics: ComplexityMetrics,
    pub errors: Vec<Fault>,
    pub warnings: Vec<Fault>,
}

impl AnalysisResult {
    /// A hard failure: no structure, default metrics, one error entry.
    pub fn failed(fault: Fault) -> Self {
        Self {
            success: false,
            structure: None,
            metrics: ComplexityMetrics::default(),
            errors: vec![fault],
            warnings: Vec::new(),
        }
    }
}

/// Outcome of a batch run, keyed by the caller-supplied path strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchResult {
    pub results: BTreeMap<String, AnalysisResult>,
    pub succeeded: usize,
    pub total: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structure_default_is_fully_populated() {
        let s = ComponentStructure::default();
        assert!(s.props.is_empty());
        assert!(s.bindings.is_empty());
        assert!(s.methods.is_empty());
        assert!(s.composition.child_components.is_empty());
        assert!(!s.exports.has_default);
        assert!(s.imports.external.is_empty());
    }

    #[test]
    fn test_metrics_default_values() {
        let m = ComplexityMetrics::default();
        assert_eq!(m.cyclomatic, 1);
        assert_eq!(m.cognitive, 0);
        assert_eq!(m.maintainability_index, 171);
    }

    #[test]
    fn test_binding_kind_serializes_kebab_case() {
        let json = serde_json::to_string(&BindingKind::DerivedCallback).unwrap();
        assert_eq!(json, "\"derived-callback\"");
        let json = serde_json::to_string(&BindingKind::State).unwrap();
        assert_eq!(json, "\"state\"");
    }

    #[test]
    fn test_fault_kind_serializes_kebab_case() {
        let json = serde_json::to_string(&FaultKind::FileTooLarge).unwrap();
        assert_eq!(json, "\"file-too-large\"");
        assert_eq!(FaultKind::ParseFailure.to_string(), "parse-failure");
    }

    #[test]
    fn test_structure_serializes_camel_case() {
        let mut s = ComponentStructure::default();
        s.exports.has_default = true;
        s.composition.child_components.insert("Badge".to_string());
        let value = serde_json::to_value(&s).unwrap();
        assert_eq!(value["exports"]["hasDefault"], true);
        assert_eq!(value["composition"]["childComponents"][0], "Badge");
        // Fixed shape: absent optionals serialize as null, keys are never omitted
        let prop = PropEntry::untyped("title");
        let value = serde_json::to_value(&prop).unwrap();
        assert!(value.get("defaultValue").is_some());
        assert!(value["defaultValue"].is_null());
    }

    #[test]
    fn test_result_round_trips_through_json() {
        let result = AnalysisResult {
            success: true,
            structure: Some(ComponentStructure::default()),
            metrics: ComplexityMetrics::default(),
            errors: vec![],
            warnings: vec![Fault::extraction("stray node")],
        };
        let json = serde_json::to_string(&result).unwrap();
        let back: AnalysisResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn test_failed_result_shape() {
        let r = AnalysisResult::failed(Fault::parse_failure("syntax error at 3:1"));
        assert!(!r.success);
        assert!(r.structure.is_none());
        assert_eq!(r.errors.len(), 1);
        assert_eq!(r.errors[0].kind, FaultKind::ParseFailure);
        assert_eq!(r.metrics, ComplexityMetrics::default());
    }

    #[test]
    fn test_child_components_order_is_deterministic() {
        let mut c = Composition::default();
        c.child_components.insert("Zeta".to_string());
        c.child_components.insert("Alpha".to_string());
        c.child_components.insert("Alpha".to_string());
        let names: Vec<_> = c.child_components.iter().cloned().collect();
        assert_eq!(names, vec!["Alpha", "Zeta"]);
    }
}
