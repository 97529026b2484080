//! Conservative `Default`-able options bundles (§10.3). No config-file
//! format — the CLI that would read one is an external collaborator (§1) —
//! these are plain structs passed by the embedding application.

use std::path::PathBuf;
use std::sync::Arc;

use crate::cancel::CancellationToken;
use crate::http::HttpClient;
use crate::vfs::VirtualFileSystem;

/// Options for [`crate::resolver::ReferenceResolver::resolve`] (§4.1).
#[derive(Clone)]
pub struct ResolveOptions {
    /// Virtual filesystem used for `file:`/relative document fetches.
    /// Defaults to the host filesystem.
    pub vfs: Arc<dyn VirtualFileSystem>,
    /// HTTP client used for `http(s):` document fetches. Defaults to the
    /// host HTTP stack.
    pub http: Arc<dyn HttpClient>,
    /// When set, any reference whose document part is non-empty fails
    /// with `external-references-disabled` instead of being fetched.
    pub disable_external_refs: bool,
    pub cancellation: CancellationToken,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            vfs: Arc::new(crate::vfs::HostFilesystem),
            http: Arc::new(crate::http::ReqwestHttpClient::default()),
            disable_external_refs: false,
            cancellation: CancellationToken::default(),
        }
    }
}

/// Options for [`crate::walker::Walker`] (§4.3). Walking itself has no
/// knobs beyond cancellation; options exist mainly so callers have one
/// stable type to extend.
#[derive(Clone, Default)]
pub struct WalkOptions {
    pub cancellation: CancellationToken,
}

/// Options for [`crate::index::IndexBuilder`] (§4.5).
#[derive(Clone)]
pub struct IndexOptions {
    pub resolve: ResolveOptions,
    /// Maintain the reverse node-to-operations map (§4.5 step 4). Off by
    /// default — it's an O(tree_size) amortized cost most callers
    /// (simple reads, validation) don't need.
    pub build_node_to_operations_map: bool,
    pub cancellation: CancellationToken,
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self {
            resolve: ResolveOptions::default(),
            build_node_to_operations_map: false,
            cancellation: CancellationToken::default(),
        }
    }
}

/// How [`crate::transform::bundle`]/[`crate::transform::localize`]/
/// [`crate::transform::join`] rename components that collide.
#[derive(Clone)]
pub enum ConflictResolution {
    /// `Name`, `Name_1`, `Name_2`, ...
    CounterSuffix,
    /// `path_to_file_yaml~Name`.
    PathPrefixed,
    /// Caller-supplied renaming function.
    Custom(Arc<dyn Fn(&str, &str) -> String + Send + Sync>),
}

impl Default for ConflictResolution {
    fn default() -> Self {
        ConflictResolution::CounterSuffix
    }
}

#[derive(Clone)]
pub struct InlineOptions {
    pub remove_unused_components: bool,
    pub cancellation: CancellationToken,
}

impl Default for InlineOptions {
    fn default() -> Self {
        Self { remove_unused_components: false, cancellation: CancellationToken::default() }
    }
}

#[derive(Clone, Default)]
pub struct BundleOptions {
    pub conflict_resolution: ConflictResolution,
    pub cancellation: CancellationToken,
}

#[derive(Clone, Default)]
pub struct LocalizeOptions {
    pub output_directory: Option<PathBuf>,
    pub conflict_resolution: ConflictResolution,
    pub cancellation: CancellationToken,
}

#[derive(Clone, Default)]
pub struct JoinOptions {
    pub conflict_resolution: ConflictResolution,
    pub cancellation: CancellationToken,
}

#[derive(Clone, Default)]
pub struct SnipOptions {
    pub cancellation: CancellationToken,
}

#[derive(Clone, Default)]
pub struct CleanOptions {
    pub cancellation: CancellationToken,
}

#[derive(Clone, Default)]
pub struct UpgradeOptions {
    pub target_version: Option<String>,
    pub cancellation: CancellationToken,
}
