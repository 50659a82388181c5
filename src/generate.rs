//! The code generation driver.
//!
//! For every package, one `CodeGeneratorRequest` is built over the full
//! descriptor table and handed to each configured generator: `protoc` itself
//! gets a descriptor set over stdin and writes files directly, while
//! `protoc-gen-*` plugins answer with a `CodeGeneratorResponse` whose files
//! are routed to their on-disk destinations here.

use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use std::sync::mpsc::Receiver;

use anyhow::Context as _;
use bytes::Bytes;
use log::debug;
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher as _};
use prost::Message as _;

use crate::ast::Package;
use crate::config::GeneratorConfig;
use crate::error::Error;
use crate::file_graph::topological_sort;
use crate::google::protobuf::compiler::{CodeGeneratorRequest, CodeGeneratorResponse};
use crate::google::protobuf::FileDescriptorSet;
use crate::{strip_command_line_prefix, unified_proto_file, Generator};

impl Generator {
    /// Builds the code generator request for a translated package: the
    /// package's synthetic proto file to generate, over every known
    /// descriptor in topological order.
    pub(crate) fn request_for_pkg(
        &self,
        import_path: &str,
    ) -> Result<CodeGeneratorRequest, Error> {
        Ok(CodeGeneratorRequest {
            file_to_generate: vec![unified_proto_file(import_path)],
            proto_file: topological_sort(self.all_proto.values().cloned().collect())?,
            ..Default::default()
        })
    }

    /// Runs every configured generator over a translated package.
    ///
    /// The same request is handed to every generator unaltered; that is what
    /// protoc does when calling out to plugins, and generators already handle
    /// the case where they have nothing to do.
    pub(crate) fn generate_pkg(
        &self,
        import_path: &str,
        gens: &[GeneratorConfig],
        protoc_path: &Path,
    ) -> anyhow::Result<()> {
        let req = self.request_for_pkg(import_path)?;
        for gen in gens {
            if gen.is_protoc() {
                if gen.plugin_version.is_some() {
                    return Err(Error::PinnedProtoc.into());
                }
                self.generate_protoc(req.clone(), gen, protoc_path)
                    .context("unable to generate protoc")?;
            } else {
                let binary = match &gen.plugin_version {
                    Some(version) => {
                        if !self.downloader.supports(gen.code()) {
                            return Err(Error::PinnedUnsupported(gen.code().to_string()).into());
                        }
                        Some(self.downloader.download(gen.code(), version)?)
                    }
                    None => None,
                };
                self.generate_plugin(req.clone(), gen, binary.as_deref())
                    .context("unable to generate plugin")?;
            }
        }
        Ok(())
    }

    /// Invokes protoc over a descriptor set fed through stdin.
    fn generate_protoc(
        &self,
        req: CodeGeneratorRequest,
        gen: &GeneratorConfig,
        protoc_path: &Path,
    ) -> anyhow::Result<()> {
        if req.file_to_generate.len() != 1 {
            return Err(Error::FileToGenerate(req.file_to_generate.len()).into());
        }
        let ftg = req.file_to_generate[0].clone();
        let (pkg_path, basename) = split_clean(&ftg);
        let mut fds = FileDescriptorSet {
            file: req.proto_file,
        };
        // protoc writes output files using the descriptor's own name, so the
        // one generated file is renamed to its basename and emitted into the
        // package directory.
        for pf in &mut fds.file {
            if pf.name() == ftg {
                pf.name = Some(basename.clone());
            }
        }
        let gpkg = self
            .find_pkg(&pkg_path)
            .ok_or_else(|| Error::UnknownPackage {
                path: pkg_path.clone(),
                action: "protoc generate",
            })?
            .clone();
        let out_dir = gpkg.dir.clone();
        let bytes = fds.encode_to_vec();
        let args = vec![
            format!(
                "--{}_out={}",
                gen.protoc_gen,
                gen.param_string_with_out(&out_dir)
            ),
            "--descriptor_set_in=/dev/stdin".to_string(),
            basename,
        ];
        // protoc gives no hint of which files it generated; when
        // post-processing is configured, a watch scoped to this invocation
        // finds them through filesystem events.
        let watch = if gen.has_postproc() {
            Some(OutputWatch::arm(&out_dir)?)
        } else {
            None
        };
        exec_with_stdin("protoc", protoc_path.as_os_str(), &args, &bytes)?;
        if let Some(watch) = watch {
            for path in watch.into_changed() {
                if path.is_dir() {
                    continue;
                }
                let data = fs::read(&path)?;
                let data = self
                    .post_process(&data, gen, &pkg_path)
                    .context("failed to execute post processing")?;
                fs::write(&path, data).context("failed to write to file")?;
            }
        }
        Ok(())
    }

    /// Invokes a protoc-gen-* plugin over stdin/stdout and writes the files
    /// it answers with.
    pub(crate) fn generate_plugin(
        &self,
        mut req: CodeGeneratorRequest,
        gen: &GeneratorConfig,
        binary: Option<&Path>,
    ) -> anyhow::Result<()> {
        // Some generators (grpc-gateway) mishandle an empty parameter, so it
        // is only set when non-empty.
        let params = gen.param_string();
        if !params.is_empty() {
            req.parameter = Some(params);
        }
        if req.file_to_generate.len() != 1 {
            return Err(Error::FileToGenerate(req.file_to_generate.len()).into());
        }
        let ftg = req.file_to_generate[0].clone();
        let bytes = req.encode_to_vec();
        let program = binary
            .map(Path::as_os_str)
            .unwrap_or_else(|| OsStr::new(&gen.command));
        let output = exec_with_stdin(&gen.command, program, &[], &bytes)?;
        let resp = CodeGeneratorResponse::decode(Bytes::from(output.stdout)).map_err(Error::from)?;
        if !resp.error().is_empty() {
            return Err(Error::GeneratorFailed {
                name: gen.command.clone(),
                message: resp.error().to_string(),
            }
            .into());
        }
        let (main_pkg_path, _) = split_clean(&ftg);
        let main_pkg = self
            .pkgs
            .get(&main_pkg_path)
            .ok_or_else(|| Error::UnknownPackage {
                path: main_pkg_path.clone(),
                action: "use as the main package",
            })?
            .clone();
        for rf in &resp.file {
            let out_path = self.resolve_output_path(rf.name(), gen, &main_pkg);
            let mut data = rf.content().as_bytes().to_vec();
            if gen.has_postproc() {
                data = self
                    .post_process(&data, gen, &main_pkg_path)
                    .context("failed to execute post processing")?;
            }
            if let Some(parent) = out_path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)
                        .with_context(|| format!("unable to create directory {parent:?}"))?;
                }
            }
            fs::write(&out_path, data)
                .with_context(|| format!("unable to write to file {out_path:?}"))?;
        }
        Ok(())
    }

    /// Resolves where a plugin-returned file lands on disk.
    ///
    /// Generators differ in how they name files: some return the full package
    /// path, some a path relative to the generated package. An exact package
    /// match wins, then the longest package prefix with the remainder kept as
    /// a subdirectory, and everything else is taken as relative to the
    /// calling package.
    fn resolve_output_path(
        &self,
        file_name: &str,
        gen: &GeneratorConfig,
        main_pkg: &Package,
    ) -> PathBuf {
        let (pkg_path, basename) = split_clean(file_name);
        let joined = if let Some(pkg) = self.pkgs.get(&pkg_path) {
            gen.out_path(&pkg.dir).join(&basename)
        } else {
            let mut matched: Option<(&str, PathBuf)> = None;
            for (path, pkg) in &self.pkgs {
                if pkg_path.starts_with(path.as_str())
                    && matched.as_ref().map_or(true, |(m, _)| path.len() > m.len())
                {
                    let subdir = &pkg_path[path.len()..];
                    let dir = format!("{}{}", gen.out_path(&pkg.dir).display(), subdir);
                    matched = Some((path, PathBuf::from(dir)));
                }
            }
            match matched {
                Some((_, dir)) => dir.join(&basename),
                // A local relative path: the whole name is kept under the
                // calling package's output directory.
                None => gen.out_path(&main_pkg.dir).join(file_name),
            }
        };
        let joined = joined.to_string_lossy();
        let joined = joined.strip_prefix("./").unwrap_or(&joined);
        PathBuf::from(strip_command_line_prefix(joined))
    }

    fn post_process(
        &self,
        data: &[u8],
        gen: &GeneratorConfig,
        main_import_path: &str,
    ) -> anyhow::Result<Vec<u8>> {
        match &gen.postproc {
            Some(postproc) => postproc.process(data, gen, main_import_path, &self.pkgs),
            None => Ok(data.to_vec()),
        }
    }
}

/// Splits a slash-separated file name into its cleaned directory part and
/// basename.
fn split_clean(name: &str) -> (String, String) {
    match name.rsplit_once('/') {
        Some((dir, base)) => {
            let dir = dir.trim_end_matches('/');
            let dir = if dir.is_empty() { "." } else { dir };
            (dir.to_string(), base.to_string())
        }
        None => (".".to_string(), name.to_string()),
    }
}

/// Runs a child process with the given bytes as stdin, capturing stdout and
/// stderr. A non-zero exit surfaces the captured stderr in the error.
fn exec_with_stdin(
    name: &str,
    program: &OsStr,
    args: &[String],
    input: &[u8],
) -> Result<Output, Error> {
    debug!("exec: {} {}", program.to_string_lossy(), args.join(" "));
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;
    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(input)?;
        // Dropping the handle closes the pipe so the child sees EOF.
    }
    let output = child.wait_with_output()?;
    if !output.status.success() {
        return Err(exec_error(name, &output));
    }
    Ok(output)
}

fn exec_error(name: &str, output: &Output) -> Error {
    let stderr = String::from_utf8_lossy(&output.stderr);
    Error::Exec {
        name: name.to_string(),
        detail: format!("{}: {}", output.status, stderr.trim()),
    }
}

/// A filesystem watch scoped to one protoc invocation: armed before the
/// subprocess starts, drained after it exits, and released on every exit
/// path when dropped.
struct OutputWatch {
    rx: Receiver<notify::Result<notify::Event>>,
    _watcher: RecommendedWatcher,
}

impl OutputWatch {
    fn arm(dir: &Path) -> anyhow::Result<OutputWatch> {
        let (tx, rx) = std::sync::mpsc::channel();
        let mut watcher = notify::recommended_watcher(tx)?;
        watcher.watch(dir, RecursiveMode::Recursive)?;
        Ok(OutputWatch {
            rx,
            _watcher: watcher,
        })
    }

    /// Consumes the watch, returning the paths created or written while it
    /// was armed.
    fn into_changed(self) -> Vec<PathBuf> {
        let mut changed = BTreeSet::new();
        while let Ok(event) = self.rx.try_recv() {
            let event = match event {
                Ok(event) => event,
                Err(err) => {
                    debug!("watch error: {err}");
                    continue;
                }
            };
            // Modify covers writes, moves, and renames.
            if matches!(event.kind, EventKind::Create(_) | EventKind::Modify(_)) {
                changed.extend(event.paths);
            }
        }
        changed.into_iter().collect()
    }
}
