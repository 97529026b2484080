//! Index Builder (§4.5): a single top-level walk over the root document
//! that resolves every reference it meets, categorizes every entity,
//! classifies schema cycles, and collects descriptions/summaries plus the
//! three error streams.
//!
//! Unlike the Walker (generic, version-agnostic structural iteration) the
//! Index Builder needs extra state the Walker doesn't carry — a document
//! stack for cross-file descent, reference resolution, and circular-schema
//! tracking — so it drives its own recursive descent over `ObjectElement`
//! content directly rather than wrapping a `Walker`. It reuses the
//! Walker's `classify` so both layers agree on entity kinds.

use std::collections::{HashMap, HashSet};

use oastree_ast::minim_model::{Element, ObjectElement};

use crate::classifier::{CircularReferenceClassifier, CycleRecord, EnterOutcome, PathSegment, SegmentKind};
use crate::config::IndexOptions;
use crate::dispatcher::EntityKind;
use crate::document::{Document, DocumentCache};
use crate::error::{ResolveError, ValidationIssue};
use crate::location::Location;
use crate::referenceable::Referenceable;
use crate::resolver::ReferenceResolver;
use crate::walker::classify;

/// One node placed into a per-kind, per-category list (§4.5 rule 1).
#[derive(Debug, Clone)]
pub struct IndexEntry {
    pub location: Location,
    pub document: String,
}

#[derive(Debug, Clone, Default)]
pub struct CategorizedEntities {
    pub inline: Vec<IndexEntry>,
    pub main_components: Vec<IndexEntry>,
    pub external_top_level: Vec<IndexEntry>,
    pub reference: Vec<IndexEntry>,
}

/// The accumulated result of one index build (§3 "Index").
#[derive(Debug, Default)]
pub struct Index {
    entities: HashMap<EntityKind, CategorizedEntities>,
    descriptions: Vec<(Location, String)>,
    summaries: Vec<(Location, String)>,
    validation_warnings: Vec<ValidationIssue>,
    resolution_errors: Vec<ResolveError>,
    circular_errors: Vec<CycleRecord>,
    node_to_operations: Option<HashMap<String, HashSet<String>>>,
    /// Every reference resolved during the walk, carrying the parent/
    /// top-level-parent chain that reached it (§3 `Referenceable`). Kept as
    /// a flat, un-deduplicated list rather than keyed by target: two
    /// distinct referrers resolving to the same shared target produce two
    /// distinct wrappers with different chains, and both matter.
    resolved_references: Vec<Referenceable<Element>>,
}

impl Index {
    pub fn entities_of(&self, kind: EntityKind) -> CategorizedEntities {
        self.entities.get(&kind).cloned().unwrap_or_default()
    }

    pub fn descriptions(&self) -> &[(Location, String)] {
        &self.descriptions
    }

    pub fn summaries(&self) -> &[(Location, String)] {
        &self.summaries
    }

    pub fn validation_warnings(&self) -> &[ValidationIssue] {
        &self.validation_warnings
    }

    pub fn resolution_errors(&self) -> &[ResolveError] {
        &self.resolution_errors
    }

    pub fn circular_errors(&self) -> &[CycleRecord] {
        &self.circular_errors
    }

    /// The reverse node-to-operations map (§4.5 step 4), if
    /// [`IndexOptions::build_node_to_operations_map`] was set.
    pub fn operations_reaching(&self, node_pointer: &str) -> Option<&HashSet<String>> {
        self.node_to_operations.as_ref().and_then(|map| map.get(node_pointer))
    }

    /// Every resolved reference encountered during the walk, in visit order.
    pub fn resolved_references(&self) -> &[Referenceable<Element>] {
        &self.resolved_references
    }
}

fn is_nullable(obj: &ObjectElement) -> bool {
    if matches!(obj.get("nullable").and_then(Element::as_boolean), Some(b) if b.content) {
        return true;
    }
    match obj.get("type") {
        Some(Element::Array(arr)) => arr.content.iter().any(|e| matches!(e.as_string(), Some(s) if s.content == "null")),
        Some(Element::String(s)) => s.content == "null",
        _ => false,
    }
}

fn number_field(obj: &ObjectElement, name: &str) -> Option<u64> {
    obj.get(name).and_then(Element::as_number).map(|n| n.content as u64)
}

fn ref_string(obj: &ObjectElement) -> Option<String> {
    obj.get("$ref").and_then(Element::as_string).map(|s| s.content.clone())
}

/// Every recursion within one [`IndexBuilder::build`] call tracks which
/// document it's currently in and how deep it is *within that document*
/// (reset to 0 on crossing into a newly-resolved external document) so the
/// "root of a non-main document" categorization rule (§4.5 rule 1) can be
/// evaluated independent of the node's location as written in the main
/// document.
pub struct IndexBuilder<'a> {
    root: &'a Document,
    cache: &'a DocumentCache,
    options: &'a IndexOptions,
    classifier: CircularReferenceClassifier,
    index: Index,
    /// Reference targets already indexed at least once, per the §4.5
    /// de-duplication rule (identified here by absolute reference string,
    /// a practical stand-in for pointer identity since two wrappers
    /// pointing at the same absolute reference do share a resolved target).
    seen_references: HashSet<String>,
    /// Absolute references currently on the path from the root to the node
    /// being visited, outermost first — distinct from the resolver's own
    /// per-call chase stack, which only covers one `$ref`-to-`$ref` chain.
    /// Feeds `parent`/`top_level_parent` on each `Referenceable` produced.
    reference_chain: Vec<String>,
    /// The json pointer of the innermost Operation entity enclosing the
    /// node currently being visited, if any.
    current_operation: Option<String>,
    /// While `Some`, every node visited is appended here; used to capture
    /// "all nodes touched by this reference's subtree" for replay caching.
    recording: Option<Vec<String>>,
    /// Per-absolute-reference cache of node pointers touched the first time
    /// a non-Schema reference's target was walked, so a later encounter of
    /// the same target (e.g. the same shared `Parameter` reused by several
    /// operations) attributes it to the new operation without re-walking
    /// its subtree. Scoped to non-Schema references only — Schema
    /// references keep the classifier's existing full-revisit behavior,
    /// since that cycle-detection logic is unrelated to this caching.
    reference_touch_cache: HashMap<String, Vec<String>>,
}

impl<'a> IndexBuilder<'a> {
    pub fn new(root: &'a Document, cache: &'a DocumentCache, options: &'a IndexOptions) -> Self {
        Self {
            root,
            cache,
            options,
            classifier: CircularReferenceClassifier::new(),
            index: Index::default(),
            seen_references: HashSet::new(),
            reference_chain: Vec::new(),
            current_operation: None,
            recording: None,
            reference_touch_cache: HashMap::new(),
        }
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub fn build(mut self) -> Result<Index, ResolveError> {
        let root_path = self.root.location.as_str().to_string();
        let root_element = (*self.root.root).clone();
        self.visit(&root_element, Location::root(), &root_path, 0)?;

        for record in self.classifier.resolve_pending() {
            if record.classification == crate::classifier::Classification::Invalid {
                self.index.circular_errors.push(record);
            }
        }
        for record in &self.index.circular_errors {
            self.index
                .validation_warnings
                .push(ValidationIssue::error("non-terminating-cycle", format!("circular reference does not terminate: {}", record.chain_string()), record.location.clone()));
        }

        Ok(self.index)
    }

    fn record_entity(&mut self, kind: EntityKind, location: Location, document: &str, category: fn(&mut CategorizedEntities) -> &mut Vec<IndexEntry>) {
        let entry = IndexEntry { location, document: document.to_string() };
        let bucket = self.index.entities.entry(kind).or_default();
        category(bucket).push(entry);
    }

    /// Records that `pointer` was visited: into the active recording
    /// session (if any) and, when the node-to-operations map is enabled and
    /// an operation is currently active, into that map.
    fn touch_node(&mut self, pointer: String) {
        if let Some(recording) = &mut self.recording {
            recording.push(pointer.clone());
        }
        if self.options.build_node_to_operations_map {
            if let Some(op) = self.current_operation.clone() {
                self.index.node_to_operations.get_or_insert_with(HashMap::new).entry(pointer).or_default().insert(op);
            }
        }
    }

    fn collect_description_and_summary(&mut self, obj: &ObjectElement, location: &Location) {
        if let Some(description) = obj.get("description").and_then(Element::as_string) {
            self.index.descriptions.push((location.clone(), description.content.clone()));
        }
        if let Some(summary) = obj.get("summary").and_then(Element::as_string) {
            self.index.summaries.push((location.clone(), summary.content.clone()));
        }
    }

    /// Visits one node, already known to live at `location` within
    /// `document` (the absolute path of the document it's declared in),
    /// `depth_in_document` levels below that document's own root.
    fn visit(&mut self, element: &Element, location: Location, document: &str, depth_in_document: usize) -> Result<(), ResolveError> {
        let obj = match element.as_object() {
            Some(obj) => obj,
            None => return Ok(()),
        };

        let pointer = location.to_json_pointer();
        self.touch_node(pointer.clone());

        self.collect_description_and_summary(obj, &location);

        if let Some(reference) = ref_string(obj) {
            return self.visit_reference(&reference, location, document);
        }

        let kind = classify(obj);
        let is_main_document = document == self.root.location.as_str();
        let is_main_component = is_main_document && pointer.starts_with("/components/") && pointer.matches('/').count() == 3;
        let is_external_top_level = !is_main_document && depth_in_document == 0;

        if is_main_component {
            self.record_entity(kind, location.clone(), document, |c| &mut c.main_components);
        } else if is_external_top_level {
            self.record_entity(kind, location.clone(), document, |c| &mut c.external_top_level);
        } else {
            self.record_entity(kind, location.clone(), document, |c| &mut c.inline);
        }

        let previous_operation = if kind == EntityKind::Operation { self.current_operation.replace(pointer) } else { None };

        let result = self.visit_children(obj, kind, &location, document, depth_in_document);

        if kind == EntityKind::Operation {
            self.current_operation = previous_operation;
        }

        result
    }

    fn visit_children(&mut self, obj: &ObjectElement, kind: EntityKind, location: &Location, document: &str, depth_in_document: usize) -> Result<(), ResolveError> {
        for member in &obj.content {
            let Some(key) = member.key_str() else { continue };
            if kind == EntityKind::Schema {
                self.visit_schema_field(obj, key, &member.value, location, document, depth_in_document)?;
                continue;
            }
            match member.value.as_ref() {
                Element::Array(arr) => {
                    for (index, item) in arr.content.iter().enumerate() {
                        self.visit(item, location.array_index(key, index), document, depth_in_document + 1)?;
                    }
                }
                _ => self.visit(&member.value, location.field(key), document, depth_in_document + 1)?,
            }
        }
        Ok(())
    }

    /// Schema children get extra treatment: structural fields that matter
    /// to cycle classification (`properties`, `items`, `additionalProperties`,
    /// `oneOf`/`anyOf`/`allOf`) push a [`PathSegment`] onto the classifier
    /// before descending, per §4.4.
    fn visit_schema_field(&mut self, parent: &ObjectElement, key: &str, value: &Element, location: &Location, document: &str, depth_in_document: usize) -> Result<(), ResolveError> {
        let nullable = is_nullable(parent);
        match key {
            "properties" => {
                if let Some(props) = value.as_object() {
                    let required: HashSet<&str> = parent
                        .get("required")
                        .and_then(Element::as_array)
                        .map(|a| a.content.iter().filter_map(|e| e.as_string()).map(|s| s.content.as_str()).collect())
                        .unwrap_or_default();
                    for member in &props.content {
                        let Some(name) = member.key_str() else { continue };
                        self.classifier.descend(PathSegment {
                            kind: SegmentKind::Properties,
                            property_name: Some(name.to_string()),
                            required: Some(required.contains(name)),
                            min_items: None,
                            min_properties: None,
                            branch_index: None,
                            parent_nullable: nullable,
                        });
                        self.visit(&member.value, location.field("properties").field(name), document, depth_in_document + 2)?;
                    }
                }
            }
            "items" => {
                self.classifier.descend(PathSegment {
                    kind: SegmentKind::Items,
                    property_name: None,
                    required: None,
                    min_items: number_field(parent, "minItems"),
                    min_properties: None,
                    branch_index: None,
                    parent_nullable: nullable,
                });
                self.visit(value, location.field("items"), document, depth_in_document + 1)?;
            }
            "additionalProperties" => {
                if value.as_object().is_some() {
                    self.classifier.descend(PathSegment {
                        kind: SegmentKind::AdditionalProperties,
                        property_name: None,
                        required: None,
                        min_items: None,
                        min_properties: number_field(parent, "minProperties"),
                        branch_index: None,
                        parent_nullable: nullable,
                    });
                    self.visit(value, location.field("additionalProperties"), document, depth_in_document + 1)?;
                }
            }
            "oneOf" | "anyOf" | "allOf" => {
                let segment_kind = match key {
                    "oneOf" => SegmentKind::OneOf,
                    "anyOf" => SegmentKind::AnyOf,
                    _ => SegmentKind::AllOf,
                };
                if let Some(arr) = value.as_array() {
                    let active_target = self.active_classifier_target();
                    for (index, branch) in arr.content.iter().enumerate() {
                        self.classifier.descend(PathSegment {
                            kind: segment_kind,
                            property_name: None,
                            required: None,
                            min_items: None,
                            min_properties: None,
                            branch_index: Some(index),
                            parent_nullable: nullable,
                        });
                        let before = self.index.circular_errors.len();
                        self.visit(branch, location.array_index(key, index), document, depth_in_document + 1)?;
                        if before == self.index.circular_errors.len() {
                            if let Some(target) = &active_target {
                                self.classifier.note_branch_terminates(target);
                            }
                        }
                    }
                }
            }
            _ => match value {
                Element::Array(arr) => {
                    for (index, item) in arr.content.iter().enumerate() {
                        self.visit(item, location.array_index(key, index), document, depth_in_document + 1)?;
                    }
                }
                _ => self.visit(value, location.field(key), document, depth_in_document + 1)?,
            },
        }
        Ok(())
    }

    fn active_classifier_target(&self) -> Option<String> {
        self.classifier.active_target().map(str::to_string)
    }

    fn visit_reference(&mut self, reference: &str, location: Location, document: &str) -> Result<(), ResolveError> {
        let cache = self.cache;
        let resolve_options = &self.options.resolve;
        let root = self.root;
        let resolver = ReferenceResolver::new(root, cache, resolve_options);
        let parent = self.reference_chain.last().cloned();
        let top_level_parent = self.reference_chain.first().cloned();
        let (referenceable, warnings) = match resolver.resolve_referenceable(reference, document, parent, top_level_parent) {
            Ok(result) => result,
            Err(err) => {
                if err == ResolveError::Cancelled {
                    return Err(err);
                }
                self.index.resolution_errors.push(err);
                return Ok(());
            }
        };
        self.index.validation_warnings.extend(warnings);

        let (absolute_reference, absolute_document_path, node) = match &referenceable {
            Referenceable::Resolved { info, target, .. } => (info.absolute_reference.clone(), info.absolute_document_path.clone(), (**target).clone()),
            _ => unreachable!("resolve_referenceable always produces a Resolved wrapper"),
        };
        self.index.resolved_references.push(referenceable);

        let target_kind = node.as_object().map(classify).unwrap_or(EntityKind::Other);
        if self.seen_references.insert(absolute_reference.clone()) {
            self.record_entity(target_kind, location.clone(), document, |c| &mut c.reference);
        }

        // The target's own canonical pointer (its fragment) is touched
        // directly, in addition to whatever pointers the recursive visit
        // below records under the referrer's location — it's what lets
        // `operations_reaching` be queried by a component's own pointer
        // (e.g. `/components/parameters/Limit`) rather than by every call
        // site that happens to reference it.
        let target_pointer = absolute_reference.split_once('#').map(|(_, frag)| frag.to_string()).unwrap_or_else(|| absolute_reference.clone());
        self.touch_node(target_pointer);

        if target_kind != EntityKind::Schema {
            if let Some(cached_pointers) = self.reference_touch_cache.get(&absolute_reference).cloned() {
                if self.options.build_node_to_operations_map {
                    if let Some(op) = self.current_operation.clone() {
                        for pointer in cached_pointers {
                            self.index.node_to_operations.get_or_insert_with(HashMap::new).entry(pointer).or_default().insert(op.clone());
                        }
                    }
                }
                return Ok(());
            }

            let previous_recording = self.recording.replace(Vec::new());
            self.reference_chain.push(absolute_reference.clone());
            let result = self.visit(&node, location, &absolute_document_path, 0);
            self.reference_chain.pop();
            let touched = self.recording.take().unwrap_or_default();
            self.recording = previous_recording;
            self.reference_touch_cache.insert(absolute_reference, touched);
            return result;
        }

        self.reference_chain.push(absolute_reference.clone());
        let result = match self.classifier.enter(&absolute_reference, location.clone()) {
            EnterOutcome::Proceed => {
                let result = self.visit(&node, location, &absolute_document_path, 0);
                self.classifier.exit(&absolute_reference);
                result
            }
            EnterOutcome::Cycle(record) => {
                if record.classification == crate::classifier::Classification::Invalid {
                    self.index.circular_errors.push(record);
                }
                Ok(())
            }
        };
        self.reference_chain.pop();
        result
    }
}
