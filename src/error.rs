use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

use crate::ast::Pos;

/// Errors produced while translating packages or driving code generators.
///
/// Orchestration layers wrap these with a phase tag (`anyhow::Context`), so
/// the user-visible output is a single string with nested causes.
#[derive(Debug, Error)]
pub enum Error {
    /// A translation error annotated with the position of the offending token.
    #[error("{}:{}: {}", .file.display(), .pos, .source)]
    Pos {
        file: PathBuf,
        pos: Pos,
        #[source]
        source: Box<Error>,
    },

    /// An inner error tagged with the step that produced it.
    #[error("{msg}: {source}")]
    Context {
        msg: &'static str,
        #[source]
        source: Box<Error>,
    },

    #[error("unsupported field type: {0}")]
    UnsupportedType(String),

    #[error("unsupported parameter type: {0}")]
    UnsupportedParameterType(String),

    #[error("parameter type should not be repeated")]
    RepeatedParameter,

    #[error("multiple parameters are not supported")]
    MultipleParameters,

    #[error("need all fields to have one name")]
    FieldNames,

    #[error("need all methods to have one name")]
    MethodNames,

    #[error("need all value specs to define one name")]
    ValueNames,

    #[error("missing required pb tag on {0}")]
    MissingTag(String),

    #[error("unable to convert tag to number on {field}: {source}")]
    BadTagNumber {
        field: String,
        #[source]
        source: ParseIntError,
    },

    #[error("option {0} not supported")]
    UnsupportedOption(String),

    #[error("unknown method type: {0:?}")]
    UnknownHttpMethod(String),

    #[error("failed to get package {path} to {action}")]
    UnknownPackage {
        path: String,
        action: &'static str,
    },

    #[error("could not sort proto files by dependencies: cycle involving {0}")]
    DependencyCycle(String),

    #[error("unexpected length of file_to_generate: {0}")]
    FileToGenerate(usize),

    #[error("cannot use pinned version with protoc option")]
    PinnedProtoc,

    #[error("plugin {0} does not support pinned versions")]
    PinnedUnsupported(String),

    #[error("error from generator {name}: {message}")]
    GeneratorFailed { name: String, message: String },

    #[error("error executing {name}: {detail}")]
    Exec { name: String, detail: String },

    #[error(transparent)]
    Decode(#[from] prost::DecodeError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Tags an error with the step that produced it, mirroring the wrapped
    /// error chains of the orchestration layer at translation granularity.
    pub(crate) fn context(msg: &'static str) -> impl FnOnce(Error) -> Error {
        move |source| Error::Context {
            msg,
            source: Box::new(source),
        }
    }

    /// Annotates an error with a source position.
    pub(crate) fn at(file: PathBuf, pos: Pos) -> impl FnOnce(Error) -> Error {
        move |source| Error::Pos {
            file,
            pos,
            source: Box::new(source),
        }
    }
}
