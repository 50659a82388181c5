//! Translation of
//! [google/api/http.proto](https://github.com/googleapis/googleapis/blob/master/google/api/http.proto)
//! to Rust.

/// gRPC Transcoding.
///
/// `HttpRule` defines the schema of the gRPC/REST mapping.  The mapping
/// specifies how different portions of the gRPC request message are mapped to
/// the URL path, URL query parameters, and HTTP request body.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HttpRule {
    /// Selects a method to which this rule applies.
    #[prost(string, tag = "1")]
    pub selector: String,
    /// The name of the request field whose value is mapped to the HTTP request
    /// body, or `*` for mapping all request fields not captured by the path
    /// pattern to the HTTP body, or omitted for not having any HTTP request
    /// body.
    #[prost(string, tag = "7")]
    pub body: String,
    /// Optional. The name of the response field whose value is mapped to the
    /// HTTP response body.
    #[prost(string, tag = "12")]
    pub response_body: String,
    /// Additional HTTP bindings for the selector. Nested bindings must
    /// not contain an `additional_bindings` field themselves (that is,
    /// the nesting may only be one level deep).
    #[prost(message, repeated, tag = "11")]
    pub additional_bindings: Vec<HttpRule>,
    /// Determines the URL pattern is matched by this rules. This pattern can be
    /// used with any of the {get|put|post|delete|patch} methods. A custom
    /// method can be defined using the 'custom' field.
    #[prost(oneof = "http_rule::Pattern", tags = "2, 3, 4, 5, 6, 8")]
    pub pattern: Option<http_rule::Pattern>,
}

pub mod http_rule {
    /// Determines the URL pattern is matched by this rules.
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Pattern {
        /// Maps to HTTP GET. Used for listing and getting information about
        /// resources.
        #[prost(string, tag = "2")]
        Get(String),
        /// Maps to HTTP PUT. Used for replacing a resource.
        #[prost(string, tag = "3")]
        Put(String),
        /// Maps to HTTP POST. Used for creating a resource or performing an
        /// action.
        #[prost(string, tag = "4")]
        Post(String),
        /// Maps to HTTP DELETE. Used for deleting a resource.
        #[prost(string, tag = "5")]
        Delete(String),
        /// Maps to HTTP PATCH. Used for updating a resource.
        #[prost(string, tag = "6")]
        Patch(String),
        /// The custom pattern is used for specifying an HTTP method that is not
        /// included in the `pattern` field, such as HEAD.
        #[prost(message, tag = "8")]
        Custom(super::CustomHttpPattern),
    }
}

/// A custom pattern is used for defining custom HTTP verb.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CustomHttpPattern {
    /// The name of this custom HTTP verb.
    #[prost(string, tag = "1")]
    pub kind: String,
    /// The path matched by this custom verb.
    #[prost(string, tag = "2")]
    pub path: String,
}
