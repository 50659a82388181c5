//! The front-end interfaces the translator consumes: the package loader and
//! the proto import resolver.

use std::path::Path;
use std::rc::Rc;

use crate::ast::Package;
use crate::google::protobuf::FileDescriptorProto;

/// Loads declaration packages from a workspace.
///
/// The loader parses source files, resolves imports and types across the
/// workspace, decodes option annotations, and reports per-package
/// diagnostics through [`Package::errors`].
pub trait Loader {
    /// Loads the packages matched by `patterns`, rooted at `dir`. Transitive
    /// imports are delivered through [`Package::imports`], already loaded.
    fn load(&mut self, dir: &Path, patterns: &[String]) -> anyhow::Result<Vec<Rc<Package>>>;
}

/// Locates and parses `.proto` files referenced as dependencies, such as the
/// well-known types or the HTTP annotation protos.
pub trait ProtoResolver {
    /// Points the resolver at the protoc binary used to parse proto files.
    fn set_protoc(&mut self, path: &Path);

    /// Loads the named proto files and returns their descriptors, keyed by
    /// their canonical `name`. An empty input yields an empty output.
    fn load_protos(&mut self, paths: &[String]) -> anyhow::Result<Vec<FileDescriptorProto>>;
}
