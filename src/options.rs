//! Option annotations and the readers that fold them into descriptor options.
//!
//! Every annotation the loader recognizes is one variant of [`OptionTag`];
//! each descriptor context accepts its own subset and rejects everything else
//! as unsupported. After population, a defaulting pass fills every unset
//! scalar option field with its protobuf default.

use crate::ast::Package;
use crate::error::Error;
use crate::google::api::{http_rule, HttpRule};
use crate::google::protobuf::{
    field_options, file_options, method_options, EnumOptions, EnumValueOptions, FieldOptions,
    FileOptions, MessageOptions, MethodOptions, ServiceOptions,
};
use crate::openapiv2;

/// A declaration-level option annotation, already decoded by the loader.
#[derive(Clone, Debug)]
pub enum OptionTag {
    // File options.
    OptimizeFor(file_options::OptimizeMode),
    JavaPackage(String),
    JavaOuterClassname(String),
    JavaMultipleFiles(bool),
    JavaStringCheckUtf8(bool),
    JavaGenericServices(bool),
    SwiftPrefix(String),
    RubyPackage(String),
    CsharpNamespace(String),
    ObjcClassPrefix(String),
    PhpNamespace(String),
    PhpClassPrefix(String),
    PhpMetadataNamespace(String),
    PhpGenericServices(bool),
    Swagger(openapiv2::Swagger),
    // Valid on files, messages, fields, services, methods, enums, and enum
    // values alike.
    Deprecated(bool),
    // Message options. `Schema` also applies to fields, where its JSON schema
    // is folded into the field options.
    MessageSetWireFormat(bool),
    NoStandardDescriptorAccessor(bool),
    Schema(openapiv2::Schema),
    // Field options.
    Packed(bool),
    Lazy(bool),
    CType(field_options::CType),
    JsType(field_options::JsType),
    // Method options.
    IdempotencyLevel(method_options::IdempotencyLevel),
    Match(HttpMatch),
    Operation(openapiv2::Operation),
    // Enum options.
    AllowAlias(bool),
}

impl OptionTag {
    /// The annotation name used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            OptionTag::OptimizeFor(_) => "file.OptimizeFor",
            OptionTag::JavaPackage(_) => "java.Package",
            OptionTag::JavaOuterClassname(_) => "java.OuterClassname",
            OptionTag::JavaMultipleFiles(_) => "java.MultipleFiles",
            OptionTag::JavaStringCheckUtf8(_) => "java.StringCheckUtf8",
            OptionTag::JavaGenericServices(_) => "java.GenericServices",
            OptionTag::SwiftPrefix(_) => "swift.Prefix",
            OptionTag::RubyPackage(_) => "ruby.Package",
            OptionTag::CsharpNamespace(_) => "csharp.Namespace",
            OptionTag::ObjcClassPrefix(_) => "objc.ClassPrefix",
            OptionTag::PhpNamespace(_) => "php.Namespace",
            OptionTag::PhpClassPrefix(_) => "php.ClassPrefix",
            OptionTag::PhpMetadataNamespace(_) => "php.MetadataNamespace",
            OptionTag::PhpGenericServices(_) => "php.GenericServices",
            OptionTag::Swagger(_) => "openapiv2.Swagger",
            OptionTag::Deprecated(_) => "Deprecated",
            OptionTag::MessageSetWireFormat(_) => "message.MessageSetWireFormat",
            OptionTag::NoStandardDescriptorAccessor(_) => "message.NoStandardDescriptorAccessor",
            OptionTag::Schema(_) => "openapiv2.Schema",
            OptionTag::Packed(_) => "field.Packed",
            OptionTag::Lazy(_) => "field.Lazy",
            OptionTag::CType(_) => "cc.Type",
            OptionTag::JsType(_) => "js.Type",
            OptionTag::IdempotencyLevel(_) => "method.IdempotencyLevel",
            OptionTag::Match(_) => "http.Match",
            OptionTag::Operation(_) => "openapiv2.Operation",
            OptionTag::AllowAlias(_) => "enum.AllowAlias",
        }
    }
}

/// An HTTP routing annotation on a method. The verb defaults to GET.
#[derive(Clone, Debug, Default)]
pub struct HttpMatch {
    pub method: Option<String>,
    pub path: String,
    pub body: String,
}

fn unsupported(tag: &OptionTag) -> Error {
    Error::UnsupportedOption(tag.name().to_string())
}

/// Reads the file options set across all of a package's source files.
pub(crate) fn file_options(pkg: &Package) -> Result<FileOptions, Error> {
    let mut o = FileOptions::default();
    for file in &pkg.files {
        for tag in &file.tags {
            match tag {
                OptionTag::OptimizeFor(mode) => o.optimize_for = Some(*mode as i32),
                OptionTag::Deprecated(v) => o.deprecated = Some(*v),
                OptionTag::JavaPackage(v) => o.java_package = Some(v.clone()),
                OptionTag::JavaOuterClassname(v) => o.java_outer_classname = Some(v.clone()),
                OptionTag::JavaMultipleFiles(v) => o.java_multiple_files = Some(*v),
                OptionTag::JavaStringCheckUtf8(v) => o.java_string_check_utf8 = Some(*v),
                OptionTag::JavaGenericServices(v) => o.java_generic_services = Some(*v),
                OptionTag::SwiftPrefix(v) => o.swift_prefix = Some(v.clone()),
                // The descriptor subset carries no field for these; they are
                // accepted and dropped.
                OptionTag::RubyPackage(_) | OptionTag::PhpMetadataNamespace(_) => {}
                OptionTag::CsharpNamespace(v) => o.csharp_namespace = Some(v.clone()),
                OptionTag::ObjcClassPrefix(v) => o.objc_class_prefix = Some(v.clone()),
                OptionTag::PhpNamespace(v) => o.php_namespace = Some(v.clone()),
                OptionTag::PhpClassPrefix(v) => o.php_class_prefix = Some(v.clone()),
                OptionTag::PhpGenericServices(v) => o.php_generic_services = Some(*v),
                OptionTag::Swagger(v) => o.openapiv2_swagger = Some(v.clone()),
                other => return Err(unsupported(other)),
            }
        }
    }
    o.fill_defaults();
    Ok(o)
}

pub(crate) fn message_options(tags: &[OptionTag]) -> Result<MessageOptions, Error> {
    let mut o = MessageOptions::default();
    for tag in tags {
        match tag {
            OptionTag::MessageSetWireFormat(v) => o.message_set_wire_format = Some(*v),
            OptionTag::NoStandardDescriptorAccessor(v) => {
                o.no_standard_descriptor_accessor = Some(*v)
            }
            OptionTag::Deprecated(v) => o.deprecated = Some(*v),
            OptionTag::Schema(v) => o.openapiv2_schema = Some(v.clone()),
            other => return Err(unsupported(other)),
        }
    }
    o.fill_defaults();
    Ok(o)
}

pub(crate) fn field_options(tags: &[OptionTag]) -> Result<FieldOptions, Error> {
    let mut o = FieldOptions::default();
    for tag in tags {
        match tag {
            OptionTag::Packed(v) => o.packed = Some(*v),
            OptionTag::Lazy(v) => o.lazy = Some(*v),
            OptionTag::Deprecated(v) => o.deprecated = Some(*v),
            OptionTag::CType(v) => o.ctype = Some(*v as i32),
            OptionTag::JsType(v) => o.jstype = Some(*v as i32),
            // On a field, only the JSON schema part of the OpenAPI schema
            // annotation applies.
            OptionTag::Schema(v) => o.openapiv2_field = v.json_schema.clone(),
            other => return Err(unsupported(other)),
        }
    }
    o.fill_defaults();
    Ok(o)
}

pub(crate) fn service_options(tags: &[OptionTag]) -> Result<ServiceOptions, Error> {
    let mut o = ServiceOptions::default();
    for tag in tags {
        match tag {
            OptionTag::Deprecated(v) => o.deprecated = Some(*v),
            other => return Err(unsupported(other)),
        }
    }
    o.fill_defaults();
    Ok(o)
}

pub(crate) fn method_options(tags: &[OptionTag]) -> Result<MethodOptions, Error> {
    let mut o = MethodOptions::default();
    let mut http: Option<HttpRule> = None;
    for tag in tags {
        match tag {
            OptionTag::Deprecated(v) => o.deprecated = Some(*v),
            OptionTag::IdempotencyLevel(v) => o.idempotency_level = Some(*v as i32),
            OptionTag::Match(m) => {
                let path = m.path.clone();
                let pattern = match m.method.as_deref().unwrap_or("GET") {
                    "GET" => http_rule::Pattern::Get(path),
                    "POST" => http_rule::Pattern::Post(path),
                    "DELETE" => http_rule::Pattern::Delete(path),
                    "PUT" => http_rule::Pattern::Put(path),
                    "PATCH" => http_rule::Pattern::Patch(path),
                    other => return Err(Error::UnknownHttpMethod(other.to_string())),
                };
                let rule = HttpRule {
                    body: m.body.clone(),
                    pattern: Some(pattern),
                    ..Default::default()
                };
                // The first match initializes the rule; later ones become
                // additional bindings.
                match &mut http {
                    None => http = Some(rule),
                    Some(first) => first.additional_bindings.push(rule),
                }
            }
            OptionTag::Operation(v) => o.openapiv2_operation = Some(v.clone()),
            other => return Err(unsupported(other)),
        }
    }
    o.http = http;
    o.fill_defaults();
    Ok(o)
}

pub(crate) fn enum_options(tags: &[OptionTag]) -> Result<EnumOptions, Error> {
    let mut o = EnumOptions::default();
    for tag in tags {
        match tag {
            OptionTag::AllowAlias(v) => o.allow_alias = Some(*v),
            OptionTag::Deprecated(v) => o.deprecated = Some(*v),
            other => return Err(unsupported(other)),
        }
    }
    o.fill_defaults();
    Ok(o)
}

pub(crate) fn enum_value_options(tags: &[OptionTag]) -> Result<EnumValueOptions, Error> {
    let mut o = EnumValueOptions::default();
    for tag in tags {
        match tag {
            OptionTag::Deprecated(v) => o.deprecated = Some(*v),
            other => return Err(unsupported(other)),
        }
    }
    o.fill_defaults();
    Ok(o)
}

/// Fills unset scalar option fields with their protobuf defaults, so that
/// options always carry a complete, explicit record.
pub(crate) trait FillDefaults {
    fn fill_defaults(&mut self);
}

impl FillDefaults for FileOptions {
    fn fill_defaults(&mut self) {
        self.java_package.get_or_insert_with(String::new);
        self.java_outer_classname.get_or_insert_with(String::new);
        self.optimize_for
            .get_or_insert(file_options::OptimizeMode::Speed as i32);
        self.java_multiple_files.get_or_insert(false);
        self.go_package.get_or_insert_with(String::new);
        self.java_generic_services.get_or_insert(false);
        self.deprecated.get_or_insert(false);
        self.java_string_check_utf8.get_or_insert(false);
        self.objc_class_prefix.get_or_insert_with(String::new);
        self.csharp_namespace.get_or_insert_with(String::new);
        self.swift_prefix.get_or_insert_with(String::new);
        self.php_class_prefix.get_or_insert_with(String::new);
        self.php_namespace.get_or_insert_with(String::new);
        self.php_generic_services.get_or_insert(false);
    }
}

impl FillDefaults for MessageOptions {
    fn fill_defaults(&mut self) {
        self.message_set_wire_format.get_or_insert(false);
        self.no_standard_descriptor_accessor.get_or_insert(false);
        self.deprecated.get_or_insert(false);
        self.map_entry.get_or_insert(false);
    }
}

impl FillDefaults for FieldOptions {
    fn fill_defaults(&mut self) {
        self.ctype.get_or_insert(field_options::CType::String as i32);
        self.packed.get_or_insert(false);
        self.deprecated.get_or_insert(false);
        self.lazy.get_or_insert(false);
        self.jstype
            .get_or_insert(field_options::JsType::JsNormal as i32);
    }
}

impl FillDefaults for ServiceOptions {
    fn fill_defaults(&mut self) {
        self.deprecated.get_or_insert(false);
    }
}

impl FillDefaults for MethodOptions {
    fn fill_defaults(&mut self) {
        self.deprecated.get_or_insert(false);
        self.idempotency_level
            .get_or_insert(method_options::IdempotencyLevel::IdempotencyUnknown as i32);
    }
}

impl FillDefaults for EnumOptions {
    fn fill_defaults(&mut self) {
        self.allow_alias.get_or_insert(false);
        self.deprecated.get_or_insert(false);
    }
}

impl FillDefaults for EnumValueOptions {
    fn fill_defaults(&mut self) {
        self.deprecated.get_or_insert(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_match_defaults_to_get() {
        let o = method_options(&[OptionTag::Match(HttpMatch {
            method: None,
            path: "/ping".into(),
            body: String::new(),
        })])
        .unwrap();
        let rule = o.http.expect("http rule");
        assert_eq!(rule.pattern, Some(http_rule::Pattern::Get("/ping".into())));
        assert!(rule.additional_bindings.is_empty());
    }

    #[test]
    fn http_match_additional_bindings() {
        let o = method_options(&[
            OptionTag::Match(HttpMatch {
                method: Some("POST".into()),
                path: "/v1/echo".into(),
                body: "*".into(),
            }),
            OptionTag::Match(HttpMatch {
                method: Some("PUT".into()),
                path: "/v2/echo".into(),
                body: String::new(),
            }),
        ])
        .unwrap();
        let rule = o.http.expect("http rule");
        assert_eq!(
            rule.pattern,
            Some(http_rule::Pattern::Post("/v1/echo".into()))
        );
        assert_eq!(rule.body, "*");
        assert_eq!(rule.additional_bindings.len(), 1);
        assert_eq!(
            rule.additional_bindings[0].pattern,
            Some(http_rule::Pattern::Put("/v2/echo".into()))
        );
    }

    #[test]
    fn http_match_rejects_unknown_verb() {
        let err = method_options(&[OptionTag::Match(HttpMatch {
            method: Some("OPTIONS".into()),
            path: "/ping".into(),
            body: String::new(),
        })])
        .unwrap_err();
        assert!(err.to_string().contains("unknown method type"));
    }

    #[test]
    fn unsupported_option_is_fatal() {
        let err = service_options(&[OptionTag::AllowAlias(true)]).unwrap_err();
        assert_eq!(err.to_string(), "option enum.AllowAlias not supported");

        let err = enum_options(&[OptionTag::Packed(true)]).unwrap_err();
        assert_eq!(err.to_string(), "option field.Packed not supported");
    }

    #[test]
    fn defaults_are_filled() {
        let o = message_options(&[]).unwrap();
        assert_eq!(o.map_entry, Some(false));
        assert_eq!(o.deprecated, Some(false));

        let o = field_options(&[]).unwrap();
        assert_eq!(o.ctype, Some(field_options::CType::String as i32));
        assert_eq!(o.jstype, Some(field_options::JsType::JsNormal as i32));

        let o = method_options(&[]).unwrap();
        assert_eq!(
            o.idempotency_level,
            Some(method_options::IdempotencyLevel::IdempotencyUnknown as i32)
        );
        assert!(o.http.is_none());
    }

    #[test]
    fn field_schema_keeps_only_json_schema() {
        let schema = openapiv2::Schema {
            json_schema: Some(openapiv2::JsonSchema {
                title: "token".into(),
                ..Default::default()
            }),
            discriminator: "kind".into(),
            ..Default::default()
        };
        let o = field_options(&[OptionTag::Schema(schema)]).unwrap();
        assert_eq!(o.openapiv2_field.unwrap().title, "token");
    }
}
