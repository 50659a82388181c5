//! Translation of
//! [plugin.proto](https://github.com/protocolbuffers/protobuf/blob/main/src/google/protobuf/compiler/plugin.proto)
//! to Rust.

use super::FileDescriptorProto;

/// The version number of protocol compiler.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Version {
    #[prost(int32, optional, tag = "1")]
    pub major: Option<i32>,
    #[prost(int32, optional, tag = "2")]
    pub minor: Option<i32>,
    #[prost(int32, optional, tag = "3")]
    pub patch: Option<i32>,
    /// A suffix for alpha, beta or rc release, e.g., "alpha-1", "rc2".
    #[prost(string, optional, tag = "4")]
    pub suffix: Option<String>,
}

/// An encoded CodeGeneratorRequest is written to the plugin's stdin.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CodeGeneratorRequest {
    /// The .proto files that were explicitly listed on the command-line.  The
    /// code generator should generate code only for these files.  Each file's
    /// descriptor will be included in proto_file, below.
    #[prost(string, repeated, tag = "1")]
    pub file_to_generate: Vec<String>,
    /// The generator parameter passed on the command-line.
    #[prost(string, optional, tag = "2")]
    pub parameter: Option<String>,
    /// FileDescriptorProtos for all files in files_to_generate and everything
    /// they import.  The files will appear in topological order, so each file
    /// appears before any file that imports it.
    #[prost(message, repeated, tag = "15")]
    pub proto_file: Vec<FileDescriptorProto>,
    /// The version number of protocol compiler.
    #[prost(message, optional, tag = "3")]
    pub compiler_version: Option<Version>,
}

/// The plugin writes an encoded CodeGeneratorResponse to stdout.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CodeGeneratorResponse {
    /// Error message.  If non-empty, code generation failed.  The plugin
    /// process should exit with status code zero even if it reports an error
    /// in this way.
    #[prost(string, optional, tag = "1")]
    pub error: Option<String>,
    /// A bitmask of supported features that the code generator supports.
    #[prost(uint64, optional, tag = "2")]
    pub supported_features: Option<u64>,
    #[prost(message, repeated, tag = "15")]
    pub file: Vec<code_generator_response::File>,
}

pub mod code_generator_response {
    /// Represents a single generated file.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct File {
        /// The file name, relative to the output directory.  The name must not
        /// contain "." or ".." components and must be relative, not be absolute.
        #[prost(string, optional, tag = "1")]
        pub name: Option<String>,
        /// If non-empty, indicates that the named file should already exist,
        /// and the content here is to be inserted into that file at a defined
        /// insertion point.
        #[prost(string, optional, tag = "2")]
        pub insertion_point: Option<String>,
        /// The file contents.
        #[prost(string, optional, tag = "15")]
        pub content: Option<String>,
    }

}
