//! Translation of the parts of
//! [descriptor.proto](https://github.com/protocolbuffers/protobuf/blob/main/src/google/protobuf/descriptor.proto)
//! populated by the translator.
//!
//! The option messages additionally declare the `google.api.http` extension
//! (field 72295728 on `MethodOptions`) and the grpc-gateway OpenAPI v2
//! extensions (field 1042 on file, message, field, and method options) as
//! plain fields, which encode identically to the real extensions.

pub mod compiler;

/// The protocol compiler can output a FileDescriptorSet containing the .proto
/// files it parses.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FileDescriptorSet {
    #[prost(message, repeated, tag = "1")]
    pub file: Vec<FileDescriptorProto>,
}

/// Describes a complete .proto file.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FileDescriptorProto {
    /// file name, relative to root of source tree
    #[prost(string, optional, tag = "1")]
    pub name: Option<String>,
    /// e.g. "foo", "foo.bar", etc.
    #[prost(string, optional, tag = "2")]
    pub package: Option<String>,
    /// Names of files imported by this file.
    #[prost(string, repeated, tag = "3")]
    pub dependency: Vec<String>,
    /// All top-level definitions in this file.
    #[prost(message, repeated, tag = "4")]
    pub message_type: Vec<DescriptorProto>,
    #[prost(message, repeated, tag = "5")]
    pub enum_type: Vec<EnumDescriptorProto>,
    #[prost(message, repeated, tag = "6")]
    pub service: Vec<ServiceDescriptorProto>,
    #[prost(message, optional, tag = "8")]
    pub options: Option<FileOptions>,
    /// This field contains optional information about the original source code.
    #[prost(message, optional, tag = "9")]
    pub source_code_info: Option<SourceCodeInfo>,
    /// The syntax of the proto file; "proto2" or "proto3".
    #[prost(string, optional, tag = "12")]
    pub syntax: Option<String>,
}

/// Describes a message type.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DescriptorProto {
    #[prost(string, optional, tag = "1")]
    pub name: Option<String>,
    #[prost(message, repeated, tag = "2")]
    pub field: Vec<FieldDescriptorProto>,
    #[prost(message, repeated, tag = "3")]
    pub nested_type: Vec<DescriptorProto>,
    #[prost(message, repeated, tag = "4")]
    pub enum_type: Vec<EnumDescriptorProto>,
    #[prost(message, optional, tag = "7")]
    pub options: Option<MessageOptions>,
}

/// Describes a field within a message.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FieldDescriptorProto {
    #[prost(string, optional, tag = "1")]
    pub name: Option<String>,
    #[prost(int32, optional, tag = "3")]
    pub number: Option<i32>,
    #[prost(enumeration = "field_descriptor_proto::Label", optional, tag = "4")]
    pub label: Option<i32>,
    /// If type_name is set, this need not be set.  If both this and type_name
    /// are set, this must be one of TYPE_ENUM, TYPE_MESSAGE or TYPE_GROUP.
    #[prost(enumeration = "field_descriptor_proto::Type", optional, tag = "5")]
    pub r#type: Option<i32>,
    /// For message and enum types, this is the name of the type.  If the name
    /// starts with a '.', it is fully-qualified.
    #[prost(string, optional, tag = "6")]
    pub type_name: Option<String>,
    #[prost(message, optional, tag = "8")]
    pub options: Option<FieldOptions>,
    /// JSON name of this field.
    #[prost(string, optional, tag = "10")]
    pub json_name: Option<String>,
}

pub mod field_descriptor_proto {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum Type {
        /// 0 is reserved for errors.
        /// Order is weird for historical reasons.
        Double = 1,
        Float = 2,
        /// Not ZigZag encoded.  Negative numbers take 10 bytes.
        Int64 = 3,
        Uint64 = 4,
        /// Not ZigZag encoded.  Negative numbers take 10 bytes.
        Int32 = 5,
        Fixed64 = 6,
        Fixed32 = 7,
        Bool = 8,
        String = 9,
        /// Tag-delimited aggregate.
        Group = 10,
        /// Length-delimited aggregate.
        Message = 11,
        Bytes = 12,
        Uint32 = 13,
        Enum = 14,
        Sfixed32 = 15,
        Sfixed64 = 16,
        /// Uses ZigZag encoding.
        Sint32 = 17,
        /// Uses ZigZag encoding.
        Sint64 = 18,
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum Label {
        /// 0 is reserved for errors.
        Optional = 1,
        Required = 2,
        Repeated = 3,
    }
}

/// Describes an enum type.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EnumDescriptorProto {
    #[prost(string, optional, tag = "1")]
    pub name: Option<String>,
    #[prost(message, repeated, tag = "2")]
    pub value: Vec<EnumValueDescriptorProto>,
    #[prost(message, optional, tag = "3")]
    pub options: Option<EnumOptions>,
}

/// Describes a value within an enum.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EnumValueDescriptorProto {
    #[prost(string, optional, tag = "1")]
    pub name: Option<String>,
    #[prost(int32, optional, tag = "2")]
    pub number: Option<i32>,
    #[prost(message, optional, tag = "3")]
    pub options: Option<EnumValueOptions>,
}

/// Describes a service.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ServiceDescriptorProto {
    #[prost(string, optional, tag = "1")]
    pub name: Option<String>,
    #[prost(message, repeated, tag = "2")]
    pub method: Vec<MethodDescriptorProto>,
    #[prost(message, optional, tag = "3")]
    pub options: Option<ServiceOptions>,
}

/// Describes a method of a service.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MethodDescriptorProto {
    #[prost(string, optional, tag = "1")]
    pub name: Option<String>,
    /// Input and output type names.  These are resolved in the same way as
    /// FieldDescriptorProto.type_name, but must refer to a message type.
    #[prost(string, optional, tag = "2")]
    pub input_type: Option<String>,
    #[prost(string, optional, tag = "3")]
    pub output_type: Option<String>,
    #[prost(message, optional, tag = "4")]
    pub options: Option<MethodOptions>,
    /// Identifies if client streams multiple client messages
    #[prost(bool, optional, tag = "5")]
    pub client_streaming: Option<bool>,
    /// Identifies if server streams multiple server messages
    #[prost(bool, optional, tag = "6")]
    pub server_streaming: Option<bool>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FileOptions {
    /// Sets the Java package where classes generated from this .proto will be
    /// placed.
    #[prost(string, optional, tag = "1")]
    pub java_package: Option<String>,
    /// If set, all the classes from the .proto file are wrapped in a single
    /// outer class with the given name.
    #[prost(string, optional, tag = "8")]
    pub java_outer_classname: Option<String>,
    #[prost(enumeration = "file_options::OptimizeMode", optional, tag = "9")]
    pub optimize_for: Option<i32>,
    /// If set true, then the Java code generator will generate a separate .java
    /// file for each top-level message, enum, and service defined in the .proto
    /// file.
    #[prost(bool, optional, tag = "10")]
    pub java_multiple_files: Option<bool>,
    /// Sets the Go package where structs generated from this .proto will be
    /// placed.
    #[prost(string, optional, tag = "11")]
    pub go_package: Option<String>,
    #[prost(bool, optional, tag = "17")]
    pub java_generic_services: Option<bool>,
    /// Is this file deprecated?
    #[prost(bool, optional, tag = "23")]
    pub deprecated: Option<bool>,
    /// If set true, then the Java2 code generator will generate code that
    /// throws an exception whenever an attempt is made to assign a non-UTF-8
    /// byte sequence to a string field.
    #[prost(bool, optional, tag = "27")]
    pub java_string_check_utf8: Option<bool>,
    /// Sets the objective c class prefix which is prepended to all objective c
    /// generated classes from this .proto.
    #[prost(string, optional, tag = "36")]
    pub objc_class_prefix: Option<String>,
    /// Namespace for generated classes; defaults to the package.
    #[prost(string, optional, tag = "37")]
    pub csharp_namespace: Option<String>,
    /// By default Swift generators will take the proto package and CamelCase it
    /// replacing '.' with underscore and use that to prefix the types/symbols
    /// defined.
    #[prost(string, optional, tag = "39")]
    pub swift_prefix: Option<String>,
    /// Sets the php class prefix which is prepended to all php generated
    /// classes from this .proto.
    #[prost(string, optional, tag = "40")]
    pub php_class_prefix: Option<String>,
    /// Use this option to change the namespace of php generated classes.
    #[prost(string, optional, tag = "41")]
    pub php_namespace: Option<String>,
    #[prost(bool, optional, tag = "42")]
    pub php_generic_services: Option<bool>,
    /// Extension field `grpc.gateway.protoc_gen_openapiv2.options.openapiv2_swagger`.
    #[prost(message, optional, tag = "1042")]
    pub openapiv2_swagger: Option<crate::openapiv2::Swagger>,
}

pub mod file_options {
    /// Generated classes can be optimized for speed or code size.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum OptimizeMode {
        /// Generate complete code for parsing, serialization,
        Speed = 1,
        /// etc.
        ///
        /// Use ReflectionOps to implement these methods.
        CodeSize = 2,
        /// Generate code using MessageLite and the lite runtime.
        LiteRuntime = 3,
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MessageOptions {
    /// Set true to use the old proto1 MessageSet wire format for extensions.
    #[prost(bool, optional, tag = "1")]
    pub message_set_wire_format: Option<bool>,
    /// Disables the generation of the standard "descriptor()" accessor.
    #[prost(bool, optional, tag = "2")]
    pub no_standard_descriptor_accessor: Option<bool>,
    /// Is this message deprecated?
    #[prost(bool, optional, tag = "3")]
    pub deprecated: Option<bool>,
    /// Whether the message is an automatically generated map entry type for
    /// the maps field.
    #[prost(bool, optional, tag = "7")]
    pub map_entry: Option<bool>,
    /// Extension field `grpc.gateway.protoc_gen_openapiv2.options.openapiv2_schema`.
    #[prost(message, optional, tag = "1042")]
    pub openapiv2_schema: Option<crate::openapiv2::Schema>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FieldOptions {
    /// The ctype option instructs the C++ code generator to use a different
    /// representation of the field than it normally would.
    #[prost(enumeration = "field_options::CType", optional, tag = "1")]
    pub ctype: Option<i32>,
    /// The packed option can be enabled for repeated primitive fields.
    #[prost(bool, optional, tag = "2")]
    pub packed: Option<bool>,
    /// Is this field deprecated?
    #[prost(bool, optional, tag = "3")]
    pub deprecated: Option<bool>,
    /// Should this field be parsed lazily?
    #[prost(bool, optional, tag = "5")]
    pub lazy: Option<bool>,
    /// The jstype option determines the JavaScript type used for values of the
    /// field.
    #[prost(enumeration = "field_options::JsType", optional, tag = "6")]
    pub jstype: Option<i32>,
    /// Extension field `grpc.gateway.protoc_gen_openapiv2.options.openapiv2_field`.
    #[prost(message, optional, tag = "1042")]
    pub openapiv2_field: Option<crate::openapiv2::JsonSchema>,
}

pub mod field_options {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum CType {
        /// Default mode.
        String = 0,
        Cord = 1,
        StringPiece = 2,
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum JsType {
        /// Use the default type.
        JsNormal = 0,
        /// Use JavaScript strings.
        JsString = 1,
        /// Use JavaScript numbers.
        JsNumber = 2,
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ServiceOptions {
    /// Is this service deprecated?
    #[prost(bool, optional, tag = "33")]
    pub deprecated: Option<bool>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MethodOptions {
    /// Is this method deprecated?
    #[prost(bool, optional, tag = "33")]
    pub deprecated: Option<bool>,
    #[prost(
        enumeration = "method_options::IdempotencyLevel",
        optional,
        tag = "34"
    )]
    pub idempotency_level: Option<i32>,
    /// Extension field `google.api.http`.
    #[prost(message, optional, tag = "72295728")]
    pub http: Option<crate::google::api::HttpRule>,
    /// Extension field `grpc.gateway.protoc_gen_openapiv2.options.openapiv2_operation`.
    #[prost(message, optional, tag = "1042")]
    pub openapiv2_operation: Option<crate::openapiv2::Operation>,
}

pub mod method_options {
    /// Is this method side-effect-free (or safe in HTTP parlance), or
    /// idempotent, or neither?
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum IdempotencyLevel {
        IdempotencyUnknown = 0,
        /// implies idempotent
        NoSideEffects = 1,
        /// idempotent, but may have side effects
        Idempotent = 2,
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EnumOptions {
    /// Set this option to true to allow mapping different tag names to the
    /// same value.
    #[prost(bool, optional, tag = "2")]
    pub allow_alias: Option<bool>,
    /// Is this enum deprecated?
    #[prost(bool, optional, tag = "3")]
    pub deprecated: Option<bool>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EnumValueOptions {
    /// Is this enum value deprecated?
    #[prost(bool, optional, tag = "1")]
    pub deprecated: Option<bool>,
}

/// Encapsulates information about the original source file from which a
/// FileDescriptorProto was generated.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SourceCodeInfo {
    /// A Location identifies a piece of source code in a .proto file which
    /// corresponds to a particular definition.
    #[prost(message, repeated, tag = "1")]
    pub location: Vec<source_code_info::Location>,
}

pub mod source_code_info {
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Location {
        /// Identifies which part of the FileDescriptorProto was defined at this
        /// location.
        #[prost(int32, repeated, tag = "1")]
        pub path: Vec<i32>,
        /// Always has exactly three or four elements: start line, start column,
        /// end line (optional, otherwise assumed same as start line), end column.
        #[prost(int32, repeated, tag = "2")]
        pub span: Vec<i32>,
        #[prost(string, optional, tag = "3")]
        pub leading_comments: Option<String>,
        #[prost(string, optional, tag = "4")]
        pub trailing_comments: Option<String>,
        #[prost(string, repeated, tag = "6")]
        pub leading_detached_comments: Vec<String>,
    }
}
