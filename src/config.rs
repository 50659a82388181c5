//! Per-package generator configuration and the collaborator interfaces the
//! driver consumes.

use std::fmt;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::ast::PackageMap;

/// The configuration loaded for one package directory.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// The code generators to run over the package, in order.
    pub generators: Vec<GeneratorConfig>,
    /// An explicitly configured protoc binary, if any.
    pub protoc_path: Option<PathBuf>,
    /// The protoc version to download when no binary is configured.
    pub protoc_version: Option<String>,
}

/// One configured code generator: either `protoc` itself or a `protoc-gen-*`
/// plugin.
#[derive(Clone)]
pub struct GeneratorConfig {
    /// The command to run, e.g. `protoc` or `protoc-gen-go`.
    pub command: String,
    /// The keyword selecting protoc's output language, as in `--<kw>_out=`.
    pub protoc_gen: String,
    /// Generator parameters, each already formatted as `key=value`.
    pub params: Vec<String>,
    /// An output directory relative to the package directory; generated files
    /// land next to the sources when unset.
    pub out: Option<PathBuf>,
    /// A pinned plugin version, resolved through the downloader. Not allowed
    /// for protoc.
    pub plugin_version: Option<String>,
    /// The post-processor to run over every generated file, if any.
    pub postproc: Option<Rc<dyn PostProcess>>,
}

impl GeneratorConfig {
    pub fn is_protoc(&self) -> bool {
        self.command == "protoc"
    }

    /// The plugin identifier used by the downloader, e.g. `go` for
    /// `protoc-gen-go`.
    pub fn code(&self) -> &str {
        self.command
            .strip_prefix("protoc-gen-")
            .unwrap_or(&self.command)
    }

    /// The parameter string passed to a plugin over the request.
    pub fn param_string(&self) -> String {
        self.params.join(",")
    }

    /// The parameter string for a protoc `--<kw>_out=` flag, with the output
    /// directory appended the way protoc expects it.
    pub fn param_string_with_out(&self, out_dir: &Path) -> String {
        if self.params.is_empty() {
            out_dir.display().to_string()
        } else {
            format!("{}:{}", self.param_string(), out_dir.display())
        }
    }

    /// Resolves the generator-specific output directory for a package
    /// directory.
    pub fn out_path(&self, pkg_dir: &Path) -> PathBuf {
        match &self.out {
            Some(out) => pkg_dir.join(out),
            None => pkg_dir.to_path_buf(),
        }
    }

    pub fn has_postproc(&self) -> bool {
        self.postproc.is_some()
    }
}

impl fmt::Debug for GeneratorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratorConfig")
            .field("command", &self.command)
            .field("protoc_gen", &self.protoc_gen)
            .field("params", &self.params)
            .field("out", &self.out)
            .field("plugin_version", &self.plugin_version)
            .field("postproc", &self.postproc.is_some())
            .finish()
    }
}

/// Loads the generator configuration for a package directory.
pub trait ConfigLoader {
    fn load(&self, dir: &Path) -> anyhow::Result<Config>;
}

/// Resolves pinned tool versions to on-disk executables.
pub trait Downloader {
    /// Returns the protoc binary to use, downloading the requested version
    /// when no binary is configured.
    fn protoc(&self, configured: Option<&Path>, version: Option<&str>) -> anyhow::Result<PathBuf>;

    /// Whether the plugin supports pinned versions at all.
    fn supports(&self, plugin: &str) -> bool;

    /// Downloads the pinned version of a plugin and returns its path.
    fn download(&self, plugin: &str, version: &str) -> anyhow::Result<PathBuf>;
}

/// Rewrites the bytes of a generated file before it lands on disk.
pub trait PostProcess {
    fn process(
        &self,
        data: &[u8],
        gen: &GeneratorConfig,
        main_import_path: &str,
        pkgs: &PackageMap,
    ) -> anyhow::Result<Vec<u8>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gen(params: &[&str], out: Option<&str>) -> GeneratorConfig {
        GeneratorConfig {
            command: "protoc-gen-go".into(),
            protoc_gen: "go".into(),
            params: params.iter().map(|p| p.to_string()).collect(),
            out: out.map(PathBuf::from),
            plugin_version: None,
            postproc: None,
        }
    }

    #[test]
    fn param_strings() {
        let g = gen(&["paths=source_relative", "plugins=grpc"], None);
        assert_eq!(g.param_string(), "paths=source_relative,plugins=grpc");
        assert_eq!(
            g.param_string_with_out(Path::new("out")),
            "paths=source_relative,plugins=grpc:out"
        );
        assert_eq!(gen(&[], None).param_string_with_out(Path::new("out")), "out");
    }

    #[test]
    fn out_path_is_relative_to_the_package() {
        let g = gen(&[], Some("gen/go"));
        assert_eq!(g.out_path(Path::new("api/v1")), PathBuf::from("api/v1/gen/go"));
        assert_eq!(gen(&[], None).out_path(Path::new("api/v1")), PathBuf::from("api/v1"));
    }

    #[test]
    fn plugin_code_strips_the_prefix() {
        assert_eq!(gen(&[], None).code(), "go");
        let protoc = GeneratorConfig {
            command: "protoc".into(),
            protoc_gen: "js".into(),
            params: vec![],
            out: None,
            plugin_version: None,
            postproc: None,
        };
        assert!(protoc.is_protoc());
        assert_eq!(protoc.code(), "protoc");
    }
}
