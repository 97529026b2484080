//! Circular-Reference Classifier (§4.4): detects cycles in the schema
//! reference graph as the Index Builder walks it, and decides whether each
//! cycle terminates (valid), never terminates (invalid), or depends on a
//! polymorphic branch resolved only after the full walk (pending).
//!
//! Grounded on the teacher's `reference_resolver.rs` per-call resolution
//! stack (same "re-entry on an active key is a cycle" shape), generalized
//! here from "detect and fail" into "detect, trace, and classify" since
//! only schema cycles get walked past detection (§4.4 scope note).

use crate::error::ValidationIssue;
use crate::location::Location;

/// The field that led from a schema into the segment that follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Properties,
    Items,
    AdditionalProperties,
    OneOf,
    AnyOf,
    AllOf,
}

/// One hop on a cycle's path, carrying the constraint fields the
/// classification rules read. `parent_nullable` describes the schema the
/// segment is leaving *from*.
#[derive(Debug, Clone)]
pub struct PathSegment {
    pub kind: SegmentKind,
    pub property_name: Option<String>,
    pub required: Option<bool>,
    pub min_items: Option<u64>,
    pub min_properties: Option<u64>,
    pub branch_index: Option<usize>,
    pub parent_nullable: bool,
}

impl PathSegment {
    /// A segment satisfies a termination rule on its own, independent of
    /// the rest of the chain.
    fn terminates(&self) -> bool {
        if self.parent_nullable {
            return true;
        }
        match self.kind {
            SegmentKind::Properties => self.required == Some(false) || self.required.is_none(),
            SegmentKind::Items => self.min_items.unwrap_or(0) == 0,
            SegmentKind::AdditionalProperties => self.min_properties.unwrap_or(0) == 0,
            SegmentKind::OneOf | SegmentKind::AnyOf | SegmentKind::AllOf => false,
        }
    }

    fn is_polymorphic(&self) -> bool {
        matches!(self.kind, SegmentKind::OneOf | SegmentKind::AnyOf)
    }
}

/// Outcome of classifying one detected cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Valid,
    Invalid,
    /// Deferred: the cycle crossed a `oneOf`/`anyOf` branch and needs the
    /// post-pass once every branch of that polymorphic site has been seen.
    Pending,
}

#[derive(Debug, Clone)]
pub struct CycleRecord {
    pub target: String,
    pub chain: Vec<String>,
    pub path: Vec<PathSegment>,
    pub classification: Classification,
    pub location: Location,
}

impl CycleRecord {
    /// The chain rendered `a -> b -> c`, per §4.4 "an error naming the
    /// full chain joined with `->`".
    pub fn chain_string(&self) -> String {
        self.chain.join("->")
    }
}

/// One entry in the active reference stack: the target being walked, the
/// location at push time, and the accumulated path segments since.
struct StackEntry {
    target: String,
    location: Location,
    path: Vec<PathSegment>,
}

/// Tracks the active reference stack, the fully-walked set, and pending
/// polymorphic sites while the Index Builder walks schema references.
/// Not itself a walker — the Index Builder calls `enter`/`exit` as it
/// descends and ascends `$ref`s inside schema positions.
#[derive(Default)]
pub struct CircularReferenceClassifier {
    stack: Vec<StackEntry>,
    visited: std::collections::HashSet<String>,
    pending: Vec<CycleRecord>,
    /// Targets for which some sibling branch of a polymorphic site has been
    /// observed to terminate normally (reach the end of its walk without
    /// ever recursing back into the target) — set by the caller driving
    /// the walk, via [`note_branch_terminates`](Self::note_branch_terminates),
    /// since a non-recursive branch never triggers `enter` at all and so
    /// never produces its own path segments to inspect.
    site_terminated: std::collections::HashSet<String>,
    valid_count: usize,
    invalid_count: usize,
}

pub enum EnterOutcome {
    /// No cycle: push succeeded, keep walking.
    Proceed,
    /// Re-entry detected; the cycle has already been classified and must
    /// not be walked further.
    Cycle(CycleRecord),
}

impl CircularReferenceClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a path segment to every active stack frame's running path
    /// (the segment taken on the way to the reference about to be
    /// entered). Call before `enter`.
    pub fn descend(&mut self, segment: PathSegment) {
        if let Some(top) = self.stack.last_mut() {
            top.path.push(segment);
        }
    }

    /// Attempts to enter `target` at `location`. If `target` is already on
    /// the active stack, classifies the cycle from that occurrence to here
    /// and returns it without pushing again. Otherwise pushes a fresh frame.
    pub fn enter(&mut self, target: &str, location: Location) -> EnterOutcome {
        if let Some(start) = self.stack.iter().position(|entry| entry.target == target) {
            let chain: Vec<String> = self.stack[start..].iter().map(|e| e.target.clone()).chain(std::iter::once(target.to_string())).collect();
            let path: Vec<PathSegment> = self.stack[start..].iter().flat_map(|e| e.path.clone()).collect();
            let classification = self.classify(&path);
            match classification {
                Classification::Valid => self.valid_count += 1,
                Classification::Invalid => self.invalid_count += 1,
                Classification::Pending => {}
            }
            let record = CycleRecord { target: target.to_string(), chain, path, classification: classification.clone(), location };
            if classification == Classification::Pending {
                self.pending.push(record.clone());
            }
            return EnterOutcome::Cycle(record);
        }
        self.stack.push(StackEntry { target: target.to_string(), location, path: Vec::new() });
        EnterOutcome::Proceed
    }

    /// Pops the active frame for `target` on the way back out. Marks the
    /// target as fully visited.
    pub fn exit(&mut self, target: &str) {
        if let Some(pos) = self.stack.iter().rposition(|e| e.target == target) {
            self.stack.remove(pos);
        }
        self.visited.insert(target.to_string());
    }

    fn classify(&self, path: &[PathSegment]) -> Classification {
        if path.iter().any(PathSegment::terminates) {
            return Classification::Valid;
        }
        if path.iter().any(PathSegment::is_polymorphic) {
            return Classification::Pending;
        }
        // allOf is a conjunction: valid only if the remainder of the path
        // after the recursive allOf branch itself allows termination.
        if let Some(allof_pos) = path.iter().position(|s| matches!(s.kind, SegmentKind::AllOf)) {
            if path[allof_pos + 1..].iter().any(PathSegment::terminates) {
                return Classification::Valid;
            }
        }
        Classification::Invalid
    }

    /// The target currently being walked (the innermost active stack
    /// frame), if any. Used by callers that need to attribute a
    /// non-recursive sibling branch to the right polymorphic site.
    pub fn active_target(&self) -> Option<&str> {
        self.stack.last().map(|entry| entry.target.as_str())
    }

    /// Records that one member of a polymorphic (`oneOf`/`anyOf`) site
    /// finished its walk without recursing back into `target` — e.g. a
    /// concrete, non-recursive sibling schema. The Index Builder calls this
    /// for every branch it walks, cyclic or not; only the cyclic branches
    /// ever reach `enter`/`pending`, so this is how a terminating sibling
    /// that never itself formed a cycle still counts toward "any branch
    /// terminates" in the post-pass.
    pub fn note_branch_terminates(&mut self, target: &str) {
        self.site_terminated.insert(target.to_string());
    }

    /// Post-pass (§4.4): group pending entries by parent schema (the
    /// cycle target, here — each polymorphic site's pending records share
    /// the same target) and resolve: valid if any branch terminates,
    /// invalid if every branch recurses without termination.
    pub fn resolve_pending(&mut self) -> Vec<CycleRecord> {
        let mut by_target: std::collections::HashMap<String, Vec<CycleRecord>> = std::collections::HashMap::new();
        for record in self.pending.drain(..) {
            by_target.entry(record.target.clone()).or_default().push(record);
        }
        let mut resolved = Vec::new();
        for (target, mut records) in by_target {
            let any_valid =
                self.site_terminated.contains(&target) || records.iter().any(|r| r.path.iter().any(PathSegment::terminates));
            let outcome = if any_valid { Classification::Valid } else { Classification::Invalid };
            match outcome {
                Classification::Valid => self.valid_count += 1,
                Classification::Invalid => self.invalid_count += 1,
                Classification::Pending => unreachable!(),
            }
            for record in records.iter_mut() {
                record.classification = outcome.clone();
            }
            resolved.extend(records);
        }
        resolved
    }

    pub fn valid_count(&self) -> usize {
        self.valid_count
    }

    pub fn invalid_count(&self) -> usize {
        self.invalid_count
    }

    /// Renders invalid cycles as validation issues, per §4.4 "invalid
    /// cycles produce an error naming the full chain".
    pub fn invalid_issues(&self, records: &[CycleRecord]) -> Vec<ValidationIssue> {
        records
            .iter()
            .filter(|r| r.classification == Classification::Invalid)
            .map(|r| {
                ValidationIssue::error(
                    "non-terminating-cycle",
                    format!("circular reference does not terminate: {}", r.chain_string()),
                    r.location.clone(),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nullable_segment(kind: SegmentKind) -> PathSegment {
        PathSegment { kind, property_name: None, required: None, min_items: None, min_properties: None, branch_index: None, parent_nullable: true }
    }

    fn plain_segment(kind: SegmentKind) -> PathSegment {
        PathSegment { kind, property_name: None, required: Some(true), min_items: Some(1), min_properties: Some(1), branch_index: None, parent_nullable: false }
    }

    #[test]
    fn direct_self_reference_is_detected() {
        let mut classifier = CircularReferenceClassifier::new();
        assert!(matches!(classifier.enter("#/components/schemas/Node", Location::root()), EnterOutcome::Proceed));
        classifier.descend(plain_segment(SegmentKind::Properties));
        match classifier.enter("#/components/schemas/Node", Location::root()) {
            EnterOutcome::Cycle(record) => assert_eq!(record.chain_string(), "#/components/schemas/Node->#/components/schemas/Node"),
            EnterOutcome::Proceed => panic!("expected a cycle"),
        }
    }

    #[test]
    fn nullable_property_makes_cycle_valid() {
        let mut classifier = CircularReferenceClassifier::new();
        classifier.enter("#/A", Location::root());
        classifier.descend(nullable_segment(SegmentKind::Properties));
        let EnterOutcome::Cycle(record) = classifier.enter("#/A", Location::root()) else { panic!("expected cycle") };
        assert_eq!(record.classification, Classification::Valid);
        assert_eq!(classifier.valid_count(), 1);
    }

    #[test]
    fn non_nullable_required_property_cycle_is_invalid() {
        let mut classifier = CircularReferenceClassifier::new();
        classifier.enter("#/A", Location::root());
        classifier.descend(plain_segment(SegmentKind::Properties));
        let EnterOutcome::Cycle(record) = classifier.enter("#/A", Location::root()) else { panic!("expected cycle") };
        assert_eq!(record.classification, Classification::Invalid);
        assert_eq!(classifier.invalid_count(), 1);
    }

    #[test]
    fn one_of_branch_is_pending_until_post_pass() {
        let mut classifier = CircularReferenceClassifier::new();
        classifier.enter("#/A", Location::root());
        classifier.descend(plain_segment(SegmentKind::OneOf));
        let EnterOutcome::Cycle(record) = classifier.enter("#/A", Location::root()) else { panic!("expected cycle") };
        assert_eq!(record.classification, Classification::Pending);
        assert_eq!(classifier.valid_count(), 0);
        assert_eq!(classifier.invalid_count(), 0);

        let resolved = classifier.resolve_pending();
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].classification, Classification::Invalid);
        assert_eq!(classifier.invalid_count(), 1);
    }

    #[test]
    fn one_of_with_one_terminating_branch_is_valid_site_wide() {
        let mut classifier = CircularReferenceClassifier::new();
        // Branch 1: recurses back into #/A without terminating anywhere.
        classifier.enter("#/A", Location::root());
        classifier.descend(plain_segment(SegmentKind::OneOf));
        let EnterOutcome::Cycle(record) = classifier.enter("#/A", Location::root()) else { panic!("expected cycle") };
        assert_eq!(record.classification, Classification::Pending);

        // Branch 2: a concrete sibling schema that never recurses at all.
        classifier.note_branch_terminates("#/A");

        let resolved = classifier.resolve_pending();
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].classification, Classification::Valid);
        assert_eq!(classifier.valid_count(), 1);
    }

    #[test]
    fn all_of_is_valid_only_if_remainder_terminates() {
        let mut classifier = CircularReferenceClassifier::new();
        classifier.enter("#/A", Location::root());
        classifier.descend(plain_segment(SegmentKind::AllOf));
        classifier.descend(nullable_segment(SegmentKind::Properties));
        let EnterOutcome::Cycle(record) = classifier.enter("#/A", Location::root()) else { panic!("expected cycle") };
        assert_eq!(record.classification, Classification::Valid);
    }

    #[test]
    fn exit_clears_the_active_frame_and_marks_visited() {
        let mut classifier = CircularReferenceClassifier::new();
        classifier.enter("#/A", Location::root());
        classifier.exit("#/A");
        assert!(classifier.visited.contains("#/A"));
        assert!(matches!(classifier.enter("#/A", Location::root()), EnterOutcome::Proceed));
    }
}
