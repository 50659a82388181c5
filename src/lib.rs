//! `protogen` translates declaration-language packages into Protocol Buffers
//! descriptors and drives protobuf code generators over them.
//!
//! The input is a restricted subset of a host language used only to declare
//! message structs, service interfaces, and enums. A front-end loader (out of
//! scope here, consumed through the [`loader::Loader`] trait) parses and
//! type-checks the packages; this crate walks the typed syntax trees and
//! emits one synthetic `<import-path>/all.proto` file descriptor per package,
//! complete with options, HTTP and OpenAPI extensions, map-entry messages,
//! streaming methods, and doc comments. The resulting descriptor set is then
//! fed to `protoc` or `protoc-gen-*` plugins, whose output files are written
//! next to or under the source package directories.
//!
//! ```ignore
//! let mut gen = protogen::Generator::new(".", loader, configs, downloader, resolver);
//! gen.run(&["./...".to_string()])?;
//! ```
//!
//! Translation is sequential and deterministic: repeated runs over identical
//! input produce byte-identical request marshalings.

pub mod ast;
pub mod config;
pub mod error;
pub mod google;
pub mod loader;
pub mod openapiv2;
pub mod options;

mod file_graph;
mod generate;
mod translate;

use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{bail, Context as _};
use log::{debug, error};

use crate::ast::{Package, PackageMap};
use crate::config::{ConfigLoader, Downloader};
use crate::error::Error;
use crate::google::protobuf::{FileDescriptorProto, FileDescriptorSet};
use crate::loader::{Loader, ProtoResolver};
use crate::translate::Translator;

/// The import path the loader reports for ad-hoc file arguments.
const COMMAND_LINE_PACKAGE: &str = "command-line-arguments";

/// The synthetic prefix that makes the command-line pseudo-package look like
/// an import path to downstream tooling. It is stripped back off when output
/// paths are resolved.
const COMMAND_LINE_PREFIX: &str = "fake-path.com/command-line-arguments/";

/// The name of the synthetic descriptor file all of a package's declarations
/// are merged into.
pub(crate) fn unified_proto_file(import_path: &str) -> String {
    format!("{import_path}/all.proto")
}

pub(crate) fn go_package_path(import_path: &str) -> String {
    if import_path == COMMAND_LINE_PACKAGE {
        format!("fake-path.com/{COMMAND_LINE_PACKAGE}")
    } else {
        import_path.to_string()
    }
}

pub(crate) fn strip_command_line_prefix(path: &str) -> &str {
    path.strip_prefix(COMMAND_LINE_PREFIX).unwrap_or(path)
}

/// Translates loaded packages to protobuf descriptors and runs code
/// generators over them.
pub struct Generator {
    pub(crate) dir: PathBuf,
    pub(crate) loader: Box<dyn Loader>,
    pub(crate) config_loader: Box<dyn ConfigLoader>,
    pub(crate) downloader: Box<dyn Downloader>,
    pub(crate) resolver: Box<dyn ProtoResolver>,
    /// Every known package, keyed by import path.
    pub(crate) pkgs: PackageMap,
    /// Every known descriptor file, keyed by proto file name. A package's
    /// presence here marks its translation as complete.
    pub(crate) all_proto: BTreeMap<String, FileDescriptorProto>,
}

impl Generator {
    pub fn new(
        dir: impl Into<PathBuf>,
        loader: Box<dyn Loader>,
        config_loader: Box<dyn ConfigLoader>,
        downloader: Box<dyn Downloader>,
        resolver: Box<dyn ProtoResolver>,
    ) -> Generator {
        Generator {
            dir: dir.into(),
            loader,
            config_loader,
            downloader,
            resolver,
            pkgs: PackageMap::new(),
            all_proto: BTreeMap::new(),
        }
    }

    /// Generates the packages matched by `patterns` via protobuf generators,
    /// writing the output files next to or under the package directories.
    pub fn run(&mut self, patterns: &[String]) -> anyhow::Result<()> {
        let dir = self.dir.clone();
        let pkgs = self
            .loader
            .load(&dir, patterns)
            .context("error loading packages")?;
        if pkgs.is_empty() {
            bail!("no schema packages to generate");
        }
        if log_errors(&pkgs) > 0 {
            bail!("encountered package loading errors");
        }
        self.record_pkgs(&pkgs);
        // Translate every requested package up front, caching its config.
        let mut configs = Vec::with_capacity(pkgs.len());
        for pkg in &pkgs {
            let cfg = self
                .config_loader
                .load(&pkg.dir)
                .context("unable to load config")?;
            self.translate_pkg(&pkg.import_path)
                .context("unable to translate pkg")?;
            configs.push(cfg);
        }
        // The proto resolver parses non-schema proto dependencies with the
        // first package's protoc.
        let protoc = self
            .downloader
            .protoc(
                configs[0].protoc_path.as_deref(),
                configs[0].protoc_version.as_deref(),
            )
            .context("unable to check or download protoc")?;
        self.resolver.set_protoc(&protoc);
        self.load_proto_deps().context("unable to load protodeps")?;
        // Finally, run the code generators.
        for (pkg, cfg) in pkgs.iter().zip(&configs) {
            let protoc = self
                .downloader
                .protoc(cfg.protoc_path.as_deref(), cfg.protoc_version.as_deref())
                .context("unable to check or download protoc")?;
            self.generate_pkg(&pkg.import_path, &cfg.generators, &protoc)
                .with_context(|| format!("unable to generate pkg {}", pkg.import_path))?;
            debug!("generated {}", pkg.import_path);
        }
        Ok(())
    }

    /// Loads a single package and returns its descriptor set: the package's
    /// synthetic descriptor plus every transitive dependency, topologically
    /// sorted.
    pub fn file_descriptor_set(
        &mut self,
        patterns: &[String],
    ) -> anyhow::Result<FileDescriptorSet> {
        let dir = self.dir.clone();
        let pkgs = self
            .loader
            .load(&dir, patterns)
            .context("error loading packages")?;
        if pkgs.len() != 1 {
            bail!("can only build a file descriptor set for a single package");
        }
        if log_errors(&pkgs) > 0 {
            bail!("encountered package loading errors");
        }
        self.record_pkgs(&pkgs);
        self.translate_pkg(&pkgs[0].import_path)
            .context("unable to translate pkg")?;
        self.load_proto_deps().context("unable to load protodeps")?;
        let req = self.request_for_pkg(&pkgs[0].import_path)?;
        Ok(FileDescriptorSet {
            file: req.proto_file,
        })
    }

    /// Indexes the loaded packages and their transitive imports by import
    /// path.
    fn record_pkgs(&mut self, pkgs: &[Rc<Package>]) {
        for pkg in pkgs {
            if self
                .pkgs
                .insert(pkg.import_path.clone(), pkg.clone())
                .is_none()
            {
                self.record_pkgs(&pkg.imports);
            }
        }
    }

    /// Resolves a package by import path. Some generators rewrite dots in
    /// package paths (Python does not allow them), so a dots-for-slashes
    /// alias is accepted.
    pub(crate) fn find_pkg(&self, path: &str) -> Option<&Rc<Package>> {
        if let Some(pkg) = self.pkgs.get(path) {
            return Some(pkg);
        }
        self.pkgs
            .iter()
            .find_map(|(key, pkg)| (key.replace('.', "/") == path).then_some(pkg))
    }

    /// Translates a package and, afterwards, the schema imports it used.
    /// Idempotent: a package whose descriptor is already present is skipped.
    pub(crate) fn translate_pkg(&mut self, import_path: &str) -> Result<(), Error> {
        let pfilename = unified_proto_file(import_path);
        if self.all_proto.contains_key(&pfilename) {
            // Already translated, e.g. as a dependency.
            return Ok(());
        }
        let pkg = self
            .pkgs
            .get(import_path)
            .cloned()
            .ok_or_else(|| Error::UnknownPackage {
                path: import_path.to_string(),
                action: "translate",
            })?;
        let translated = Translator::translate(&self.pkgs, &pkg)?;
        self.all_proto.insert(pfilename, translated.file);
        // Recursion happens only after the current file is committed, so a
        // dependency chain never observes a half-written table.
        for dep in translated.schema_deps {
            if !self.all_proto.contains_key(&unified_proto_file(&dep)) {
                self.translate_pkg(&dep)?;
            }
        }
        Ok(())
    }

    /// Loads every descriptor dependency that is not itself a translated
    /// package, e.g. the well-known types or the annotation protos, through
    /// the proto resolver.
    fn load_proto_deps(&mut self) -> anyhow::Result<()> {
        let mut seen = BTreeSet::new();
        let mut missing = Vec::new();
        for file in self.all_proto.values() {
            for dep in &file.dependency {
                if !self.all_proto.contains_key(dep) && seen.insert(dep.clone()) {
                    missing.push(dep.clone());
                }
            }
        }
        for file in self.resolver.load_protos(&missing)? {
            self.all_proto.insert(file.name().to_string(), file);
        }
        Ok(())
    }
}

/// Logs every loader diagnostic and returns how many there were.
fn log_errors(pkgs: &[Rc<Package>]) -> usize {
    let mut count = 0;
    for pkg in pkgs {
        for err in &pkg.errors {
            error!("{}: {}", pkg.import_path, err);
            count += 1;
        }
        count += log_errors(&pkg.imports);
    }
    count
}

#[cfg(test)]
pub(crate) mod testutil {
    use std::path::{Path, PathBuf};
    use std::rc::Rc;

    use crate::ast::Package;
    use crate::config::{Config, ConfigLoader, Downloader};
    use crate::google::protobuf::FileDescriptorProto;
    use crate::loader::{Loader, ProtoResolver};
    use crate::Generator;

    pub struct StubLoader(pub Vec<Rc<Package>>);

    impl Loader for StubLoader {
        fn load(&mut self, _dir: &Path, _patterns: &[String]) -> anyhow::Result<Vec<Rc<Package>>> {
            Ok(self.0.clone())
        }
    }

    pub struct StubConfigLoader(pub Config);

    impl ConfigLoader for StubConfigLoader {
        fn load(&self, _dir: &Path) -> anyhow::Result<Config> {
            Ok(self.0.clone())
        }
    }

    pub struct StubDownloader;

    impl Downloader for StubDownloader {
        fn protoc(
            &self,
            configured: Option<&Path>,
            _version: Option<&str>,
        ) -> anyhow::Result<PathBuf> {
            Ok(configured.unwrap_or(Path::new("protoc")).to_path_buf())
        }

        fn supports(&self, _plugin: &str) -> bool {
            false
        }

        fn download(&self, plugin: &str, _version: &str) -> anyhow::Result<PathBuf> {
            anyhow::bail!("no downloads in tests: {plugin}")
        }
    }

    /// Answers every requested proto import with a bare descriptor carrying
    /// its canonical name.
    pub struct StubResolver;

    impl ProtoResolver for StubResolver {
        fn set_protoc(&mut self, _path: &Path) {}

        fn load_protos(&mut self, paths: &[String]) -> anyhow::Result<Vec<FileDescriptorProto>> {
            Ok(paths
                .iter()
                .map(|path| FileDescriptorProto {
                    name: Some(path.clone()),
                    ..Default::default()
                })
                .collect())
        }
    }

    pub fn stub_generator(pkgs: Vec<Rc<Package>>) -> Generator {
        Generator::new(
            ".",
            Box::new(StubLoader(pkgs)),
            Box::new(StubConfigLoader(Config::default())),
            Box::new(StubDownloader),
            Box::new(StubResolver),
        )
    }
}
