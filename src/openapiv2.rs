//! Translation of the parts of grpc-gateway's
//! [openapiv2.proto](https://github.com/grpc-ecosystem/grpc-gateway/blob/main/protoc-gen-openapiv2/options/openapiv2.proto)
//! the option readers populate.

/// `Swagger` is a representation of OpenAPI v2 specification's Swagger object.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Swagger {
    /// Specifies the OpenAPI Specification version being used.
    #[prost(string, tag = "1")]
    pub swagger: String,
    /// Provides metadata about the API.
    #[prost(message, optional, tag = "2")]
    pub info: Option<Info>,
    /// The host (name or ip) serving the API.
    #[prost(string, tag = "3")]
    pub host: String,
    /// The base path on which the API is served, which is relative to the host.
    #[prost(string, tag = "4")]
    pub base_path: String,
    /// The transfer protocol of the API.
    #[prost(enumeration = "Scheme", repeated, tag = "5")]
    pub schemes: Vec<i32>,
    /// A list of MIME types the APIs can consume.
    #[prost(string, repeated, tag = "6")]
    pub consumes: Vec<String>,
    /// A list of MIME types the APIs can produce.
    #[prost(string, repeated, tag = "7")]
    pub produces: Vec<String>,
    /// Additional external documentation.
    #[prost(message, optional, tag = "14")]
    pub external_docs: Option<ExternalDocumentation>,
}

/// `Info` provides metadata about the API.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Info {
    /// The title of the application.
    #[prost(string, tag = "1")]
    pub title: String,
    /// A short description of the application.
    #[prost(string, tag = "2")]
    pub description: String,
    /// The Terms of Service for the API.
    #[prost(string, tag = "3")]
    pub terms_of_service: String,
    /// The contact information for the exposed API.
    #[prost(message, optional, tag = "4")]
    pub contact: Option<Contact>,
    /// The license information for the exposed API.
    #[prost(message, optional, tag = "5")]
    pub license: Option<License>,
    /// Provides the version of the application API.
    #[prost(string, tag = "6")]
    pub version: String,
}

/// `Contact` is a representation of OpenAPI v2 specification's Contact object.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Contact {
    /// The identifying name of the contact person/organization.
    #[prost(string, tag = "1")]
    pub name: String,
    /// The URL pointing to the contact information.
    #[prost(string, tag = "2")]
    pub url: String,
    /// The email address of the contact person/organization.
    #[prost(string, tag = "3")]
    pub email: String,
}

/// `License` is a representation of OpenAPI v2 specification's License object.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct License {
    /// The license name used for the API.
    #[prost(string, tag = "1")]
    pub name: String,
    /// A URL to the license used for the API.
    #[prost(string, tag = "2")]
    pub url: String,
}

/// `ExternalDocumentation` allows referencing an external resource for
/// extended documentation.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ExternalDocumentation {
    /// A short description of the target documentation.
    #[prost(string, tag = "1")]
    pub description: String,
    /// The URL for the target documentation.
    #[prost(string, tag = "2")]
    pub url: String,
}

/// `Operation` describes a single API operation on a path.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Operation {
    /// A list of tags for API documentation control.
    #[prost(string, repeated, tag = "1")]
    pub tags: Vec<String>,
    /// A short summary of what the operation does.
    #[prost(string, tag = "2")]
    pub summary: String,
    /// A verbose explanation of the operation behavior.
    #[prost(string, tag = "3")]
    pub description: String,
    /// Additional external documentation for this operation.
    #[prost(message, optional, tag = "4")]
    pub external_docs: Option<ExternalDocumentation>,
    /// Unique string used to identify the operation.
    #[prost(string, tag = "5")]
    pub operation_id: String,
    /// A list of MIME types the operation can consume.
    #[prost(string, repeated, tag = "6")]
    pub consumes: Vec<String>,
    /// A list of MIME types the operation can produce.
    #[prost(string, repeated, tag = "7")]
    pub produces: Vec<String>,
    /// The transfer protocol for the operation.
    #[prost(enumeration = "Scheme", repeated, tag = "10")]
    pub schemes: Vec<i32>,
    /// Declares this operation to be deprecated.
    #[prost(bool, tag = "11")]
    pub deprecated: bool,
}

/// `Schema` is a representation of OpenAPI v2 specification's Schema object.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Schema {
    #[prost(message, optional, tag = "1")]
    pub json_schema: Option<JsonSchema>,
    /// Adds support for polymorphism.
    #[prost(string, tag = "2")]
    pub discriminator: String,
    /// Relevant only for Schema "properties" definitions.  Declares the
    /// property as "read only".
    #[prost(bool, tag = "3")]
    pub read_only: bool,
    /// Additional external documentation.
    #[prost(message, optional, tag = "5")]
    pub external_docs: Option<ExternalDocumentation>,
    /// A free-form property to include an example of an instance for this
    /// schema in JSON.
    #[prost(string, tag = "6")]
    pub example: String,
}

/// `JSONSchema` represents properties from JSON Schema taken, and as used, in
/// the OpenAPI v2 spec.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct JsonSchema {
    /// Ref is used to define an external reference to include in the message.
    #[prost(string, tag = "3")]
    pub r#ref: String,
    /// The title of the schema.
    #[prost(string, tag = "5")]
    pub title: String,
    /// A short description of the schema.
    #[prost(string, tag = "6")]
    pub description: String,
    #[prost(string, tag = "7")]
    pub default: String,
    #[prost(bool, tag = "8")]
    pub read_only: bool,
    /// A free-form property to include a JSON example of this field.
    #[prost(string, tag = "9")]
    pub example: String,
    #[prost(double, tag = "10")]
    pub multiple_of: f64,
    /// Maximum represents an inclusive upper limit for a numeric instance.
    #[prost(double, tag = "11")]
    pub maximum: f64,
    #[prost(bool, tag = "12")]
    pub exclusive_maximum: bool,
    /// Minimum represents an inclusive lower limit for a numeric instance.
    #[prost(double, tag = "13")]
    pub minimum: f64,
    #[prost(bool, tag = "14")]
    pub exclusive_minimum: bool,
    #[prost(uint64, tag = "15")]
    pub max_length: u64,
    #[prost(uint64, tag = "16")]
    pub min_length: u64,
    #[prost(string, tag = "17")]
    pub pattern: String,
    #[prost(uint64, tag = "20")]
    pub max_items: u64,
    #[prost(uint64, tag = "21")]
    pub min_items: u64,
    #[prost(bool, tag = "22")]
    pub unique_items: bool,
    #[prost(uint64, tag = "24")]
    pub max_properties: u64,
    #[prost(uint64, tag = "25")]
    pub min_properties: u64,
    #[prost(string, repeated, tag = "26")]
    pub required: Vec<String>,
    /// Items in 'array' must be unique.
    #[prost(string, repeated, tag = "34")]
    pub array: Vec<String>,
    #[prost(enumeration = "json_schema::JsonSchemaSimpleTypes", repeated, tag = "35")]
    pub r#type: Vec<i32>,
    /// `Format`
    #[prost(string, tag = "36")]
    pub format: String,
    /// Items in `enum` must be unique.
    #[prost(string, repeated, tag = "46")]
    pub r#enum: Vec<String>,
}

pub mod json_schema {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum JsonSchemaSimpleTypes {
        Unknown = 0,
        Array = 1,
        Boolean = 2,
        Integer = 3,
        Null = 4,
        Number = 5,
        Object = 6,
        String = 7,
    }
}

/// The transfer protocol of the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum Scheme {
    Unknown = 0,
    Http = 1,
    Https = 2,
    Ws = 3,
    Wss = 4,
}
