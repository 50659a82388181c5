//! Translation of declaration packages into protobuf file descriptors.
//!
//! One [`Translator`] is built per package and walks the package's files
//! bottom-up: declarations become message, service, or enum descriptors, and
//! the type converter classifies every field and parameter type along the way.
//! All per-package state (the descriptor under construction, the used-imports
//! set, the doc-comment indices) lives on the translator, so a package
//! translation is a pure function of the loaded package graph.

use std::collections::BTreeSet;

use itertools::Itertools;

use crate::ast::{
    Basic, ConstDecl, Decl, Field, Method, Package, PackageMap, Pos, SourceFile, Type, TypeDecl,
    TypeDef, Underlying,
};
use crate::error::Error;
use crate::google::protobuf::{
    field_descriptor_proto::{Label, Type as FieldType},
    source_code_info::Location,
    DescriptorProto, EnumDescriptorProto, EnumValueDescriptorProto, FieldDescriptorProto,
    FileDescriptorProto, MessageOptions, MethodDescriptorProto, ServiceDescriptorProto,
};
use crate::options;
use crate::{go_package_path, unified_proto_file};

// Field numbers within FileDescriptorProto and its nested descriptors, used
// as source-code-info paths for doc comments.
const PACKAGE_PATH: i32 = 2;
const MESSAGE_PATH: i32 = 4;
const MESSAGE_FIELD_PATH: i32 = 2;
const SERVICE_PATH: i32 = 6;
const SERVICE_METHOD_PATH: i32 = 2;
const ENUM_PATH: i32 = 5;
const ENUM_VALUE_PATH: i32 = 2;

/// The translation of one package: its synthetic descriptor file plus the
/// import paths of the schema packages it depends on, in file order.
#[derive(Debug)]
pub(crate) struct Translated {
    pub file: FileDescriptorProto,
    pub schema_deps: Vec<String>,
}

pub(crate) struct Translator<'a> {
    pkgs: &'a PackageMap,
    pkg: &'a Package,
    file: FileDescriptorProto,
    /// Import paths consumed by the type converter. Only used imports become
    /// file dependencies.
    used_imports: BTreeSet<String>,
    message_index: i32,
    service_index: i32,
    enum_index: i32,
    cur_pos: Pos,
}

impl<'a> Translator<'a> {
    /// Translates `pkg` into its `<import-path>/all.proto` descriptor.
    pub(crate) fn translate(pkgs: &'a PackageMap, pkg: &'a Package) -> Result<Translated, Error> {
        let mut options =
            options::file_options(pkg).map_err(Error::context("unable to get file options"))?;
        // The go_package option records the import path, not the proto name;
        // package names are allowed to differ from their paths.
        options.go_package = Some(format!(
            "{};{}",
            go_package_path(&pkg.import_path),
            pkg.name
        ));
        let mut t = Translator {
            pkgs,
            pkg,
            file: FileDescriptorProto {
                syntax: Some("proto3".into()),
                name: Some(unified_proto_file(&pkg.import_path)),
                package: Some(pkg.proto_name.clone()),
                options: Some(options),
                ..Default::default()
            },
            used_imports: BTreeSet::new(),
            message_index: 0,
            service_index: 0,
            enum_index: 0,
            cur_pos: Pos::default(),
        };
        for file in &pkg.files {
            if let Err(e) = t.append_file(file) {
                return Err(Error::at(file.path.clone(), t.cur_pos)(e));
            }
        }
        // Schema imports that the converter used become dependencies on the
        // imported packages' synthetic descriptors.
        let mut schema_deps = Vec::new();
        for file in &pkg.files {
            for imp in &file.imports {
                if imp.is_blank() {
                    continue;
                }
                let Some(ipkg) = pkgs.get(&imp.path) else {
                    continue;
                };
                if !ipkg.has_schema() || !t.used_imports.contains(&imp.path) {
                    continue;
                }
                t.add_proto_dep(&unified_proto_file(&imp.path));
                schema_deps.push(imp.path.clone());
            }
        }
        Ok(Translated {
            file: t.file,
            schema_deps,
        })
    }

    fn append_file(&mut self, file: &SourceFile) -> Result<(), Error> {
        self.add_doc(&file.doc, &[PACKAGE_PATH]);
        for decl in &file.decls {
            match decl {
                Decl::Type(td) => self.translate_type_decl(file, td)?,
                // Constants are consumed during enum translation.
                Decl::Const(_) => {}
            }
        }
        Ok(())
    }

    fn translate_type_decl(&mut self, file: &SourceFile, td: &TypeDecl) -> Result<(), Error> {
        self.cur_pos = td.pos;
        match &td.def {
            TypeDef::Struct { fields } => {
                let msg = self.convert_message(td, fields)?;
                self.file.message_type.push(msg);
            }
            TypeDef::Interface { methods } => {
                let srv = self.convert_service(td, methods)?;
                self.file.service.push(srv);
            }
            TypeDef::Enum => {
                // The enum may have no values, in which case it is omitted.
                if let Some(enum_) = self.convert_enum(file, td)? {
                    self.file.enum_type.push(enum_);
                }
            }
        }
        Ok(())
    }

    /// Records a leading comment under the given source-code-info path.
    ///
    /// The loader strips the leading space of every comment line; protobuf
    /// consumers expect it back, so it is re-prepended here.
    fn add_doc(&mut self, text: &str, path: &[i32]) {
        if text.is_empty() {
            return;
        }
        let text = format!(" {}", text.lines().join("\n "));
        let text = text.trim_end_matches([' ', '\n']);
        self.file
            .source_code_info
            .get_or_insert_with(Default::default)
            .location
            .push(Location {
                path: path.to_vec(),
                // A placeholder span, so consumers that require one accept
                // the location.
                span: vec![1, 2, 3],
                leading_comments: Some(text.to_string()),
                ..Default::default()
            });
    }

    fn convert_message(
        &mut self,
        td: &TypeDecl,
        fields: &[Field],
    ) -> Result<DescriptorProto, Error> {
        self.add_doc(&td.doc, &[MESSAGE_PATH, self.message_index]);
        let mut msg = DescriptorProto {
            name: Some(td.name.clone()),
            options: Some(
                options::message_options(&td.tags)
                    .map_err(Error::context("error getting message options"))?,
            ),
            ..Default::default()
        };
        for (i, field) in fields.iter().enumerate() {
            if field.names.len() != 1 {
                return Err(Error::FieldNames);
            }
            let field_name = &field.names[0];
            self.add_doc(
                &field.doc,
                &[
                    MESSAGE_PATH,
                    self.message_index,
                    MESSAGE_FIELD_PATH,
                    i as i32,
                ],
            );
            self.cur_pos = field.pos;
            let (ptype, plabel, tname) = match &field.ty {
                // Maps become a repeated nested message holding key and value.
                Type::Map { key, value } => {
                    let (tname, nested) = self.convert_map(&td.name, field_name, key, value)?;
                    msg.nested_type.push(nested);
                    (FieldType::Message, Label::Repeated, tname)
                }
                ty => self
                    .convert_type(ty)?
                    .ok_or_else(|| Error::UnsupportedType(ty.to_string()))?,
            };
            // The struct tag assigns the wire number; it is required.
            let pb = field
                .tag
                .as_ref()
                .and_then(|tag| tag.pb.as_deref())
                .ok_or_else(|| Error::MissingTag(field_name.clone()))?;
            let number: i32 = pb.parse().map_err(|source| Error::BadTagNumber {
                field: field_name.clone(),
                source,
            })?;
            let field_options = options::field_options(&field.tags)
                .map_err(Error::context("error getting field options"))?;
            msg.field.push(FieldDescriptorProto {
                name: Some(field_name.clone()),
                number: Some(number),
                type_name: string_or_none(tname),
                r#type: Some(ptype as i32),
                label: Some(plabel as i32),
                json_name: field.tag.as_ref().and_then(|tag| tag.json.clone()),
                options: Some(field_options),
            });
        }
        self.message_index += 1;
        Ok(msg)
    }

    fn convert_service(
        &mut self,
        td: &TypeDecl,
        methods: &[Method],
    ) -> Result<ServiceDescriptorProto, Error> {
        let mut srv = ServiceDescriptorProto {
            name: Some(td.name.clone()),
            options: Some(
                options::service_options(&td.tags)
                    .map_err(Error::context("error getting service options"))?,
            ),
            ..Default::default()
        };
        for (i, method) in methods.iter().enumerate() {
            if method.names.len() != 1 {
                return Err(Error::MethodNames);
            }
            self.add_doc(
                &method.doc,
                &[
                    SERVICE_PATH,
                    self.service_index,
                    SERVICE_METHOD_PATH,
                    i as i32,
                ],
            );
            self.cur_pos = method.pos;
            let options = options::method_options(&method.tags)
                .map_err(Error::context("error getting method options"))?;
            if options.openapiv2_operation.is_some() {
                self.add_proto_dep("protoc-gen-openapiv2/options/annotations.proto");
            }
            if options.http.is_some() {
                self.add_proto_dep("google/api/annotations.proto");
            }
            let (input_type, client_streaming) = self.convert_parameter(&method.params)?;
            let (output_type, server_streaming) = self.convert_parameter(&method.results)?;
            srv.method.push(MethodDescriptorProto {
                name: Some(method.names[0].clone()),
                input_type,
                output_type,
                options: Some(options),
                client_streaming,
                server_streaming,
            });
        }
        self.service_index += 1;
        Ok(srv)
    }

    /// Converts a parameter or result list to a method input or output type.
    /// An empty list maps to `google.protobuf.Empty`; a channel marks the
    /// direction as streaming.
    fn convert_parameter(
        &mut self,
        tuple: &[Type],
    ) -> Result<(Option<String>, Option<bool>), Error> {
        let param = match tuple {
            [] => {
                self.add_proto_dep("google/protobuf/empty.proto");
                return Ok((Some(".google.protobuf.Empty".into()), None));
            }
            [param] => param,
            _ => return Err(Error::MultipleParameters),
        };
        let (label, tname) = match self.convert_type(param)? {
            Some((_, label, tname)) if !tname.is_empty() => (label, tname),
            _ => return Err(Error::UnsupportedParameterType(param.to_string())),
        };
        if label == Label::Repeated {
            return Err(Error::RepeatedParameter);
        }
        let is_stream = matches!(param, Type::Chan(_));
        Ok((Some(tname), Some(is_stream)))
    }

    /// Translates a map type to its protobuf representation: a nested message
    /// named `<FieldName>Entry` with `map_entry` set, holding the key at
    /// number 1 and the value at number 2.
    fn convert_map(
        &mut self,
        parent_name: &str,
        field_name: &str,
        key: &Type,
        value: &Type,
    ) -> Result<(String, DescriptorProto), Error> {
        let map_name = format!("{field_name}Entry");
        let type_name = self.qualified_type_name(&format!("{parent_name}.{map_name}"), None)?;
        let (key_type, _, key_type_name) = self
            .convert_type(key)?
            .ok_or_else(|| Error::UnsupportedType(key.to_string()))?;
        let (value_type, _, value_type_name) = self
            .convert_type(value)?
            .ok_or_else(|| Error::UnsupportedType(value.to_string()))?;
        let nested = DescriptorProto {
            name: Some(map_name),
            options: Some(MessageOptions {
                map_entry: Some(true),
                ..Default::default()
            }),
            field: vec![
                FieldDescriptorProto {
                    name: Some("key".into()),
                    number: Some(1),
                    label: Some(Label::Optional as i32),
                    r#type: Some(key_type as i32),
                    type_name: string_or_none(key_type_name),
                    ..Default::default()
                },
                FieldDescriptorProto {
                    name: Some("value".into()),
                    number: Some(2),
                    label: Some(Label::Optional as i32),
                    r#type: Some(value_type as i32),
                    type_name: string_or_none(value_type_name),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        Ok((type_name, nested))
    }

    fn convert_enum(
        &mut self,
        file: &SourceFile,
        td: &TypeDecl,
    ) -> Result<Option<EnumDescriptorProto>, Error> {
        self.add_doc(&td.doc, &[ENUM_PATH, self.enum_index]);
        let mut enum_ = EnumDescriptorProto {
            name: Some(td.name.clone()),
            options: Some(
                options::enum_options(&td.tags)
                    .map_err(Error::context("error getting enum options"))?,
            ),
            ..Default::default()
        };
        // Enum values are the same-file constants whose type resolves to the
        // enum type.
        for decl in &file.decls {
            let Decl::Const(ConstDecl { specs, .. }) = decl else {
                continue;
            };
            for (i, vs) in specs.iter().enumerate() {
                if vs.names.len() != 1 {
                    return Err(Error::ValueNames);
                }
                let name = &vs.names[0];
                if vs.decl_type.as_deref() != Some(td.name.as_str()) {
                    continue;
                }
                self.cur_pos = vs.pos;
                if !vs.doc.is_empty() {
                    // A value doc starting with the value name mirrors the
                    // downstream EnumType_EnumValue naming.
                    let doc = if vs.doc.starts_with(name.as_str()) {
                        format!("{}_{}", td.name, vs.doc)
                    } else {
                        vs.doc.clone()
                    };
                    self.add_doc(
                        &doc,
                        &[ENUM_PATH, self.enum_index, ENUM_VALUE_PATH, i as i32],
                    );
                }
                let options = options::enum_value_options(&vs.tags)
                    .map_err(Error::context("error getting enum value options"))?;
                enum_.value.push(EnumValueDescriptorProto {
                    name: Some(name.clone()),
                    number: Some(vs.value as i32),
                    options: Some(options),
                });
            }
        }
        self.enum_index += 1;
        if enum_.value.is_empty() {
            return Ok(None);
        }
        Ok(Some(enum_))
    }

    /// Formats a type name as `.<proto-package>.<TypeName>` for the owning
    /// package, or the package under translation when `import_path` is None.
    fn qualified_type_name(
        &self,
        type_name: &str,
        import_path: Option<&str>,
    ) -> Result<String, Error> {
        let proto_name = match import_path {
            None => &self.pkg.proto_name,
            Some(path) => {
                let pkg = self.pkgs.get(path).ok_or_else(|| Error::UnknownPackage {
                    path: path.to_string(),
                    action: "get qualified type name",
                })?;
                &pkg.proto_name
            }
        };
        Ok(format!(".{proto_name}.{type_name}"))
    }

    /// Classifies a schema type as a protobuf field type, label, and type
    /// name. Returns `None` for types with no protobuf representation.
    fn convert_type(
        &mut self,
        ty: &Type,
    ) -> Result<Option<(FieldType, Label, String)>, Error> {
        match ty {
            Type::Chan(elem) => self.convert_type(elem),
            Type::Basic(basic) => Ok(scalar_type(*basic)
                .map(|ptype| (ptype, Label::Optional, String::new()))),
            Type::Named(named) => {
                // The two well-known time types map to their protobuf
                // counterparts and pull in the corresponding imports.
                if named.import_path.as_deref() == Some("time") {
                    match named.name.as_str() {
                        "Time" => {
                            self.add_proto_dep("google/protobuf/timestamp.proto");
                            return Ok(Some((
                                FieldType::Message,
                                Label::Optional,
                                ".google.protobuf.Timestamp".into(),
                            )));
                        }
                        "Duration" => {
                            self.add_proto_dep("google/protobuf/duration.proto");
                            return Ok(Some((
                                FieldType::Message,
                                Label::Optional,
                                ".google.protobuf.Duration".into(),
                            )));
                        }
                        _ => {}
                    }
                }
                let full_name =
                    self.qualified_type_name(&named.name, named.import_path.as_deref())?;
                if let Some(path) = &named.import_path {
                    self.used_imports.insert(path.clone());
                }
                Ok(match named.underlying {
                    Underlying::Int | Underlying::Int32 => {
                        Some((FieldType::Enum, Label::Optional, full_name))
                    }
                    Underlying::Struct => Some((FieldType::Message, Label::Optional, full_name)),
                    Underlying::Other => None,
                })
            }
            Type::Slice(elem) => {
                if matches!(**elem, Type::Basic(Basic::Byte)) {
                    return Ok(Some((FieldType::Bytes, Label::Optional, String::new())));
                }
                Ok(self
                    .convert_type(elem)?
                    .map(|(ptype, _, name)| (ptype, Label::Repeated, name)))
            }
            // Maps are handled by the message converter; anywhere else they
            // have no representation.
            Type::Map { .. } => Ok(None),
        }
    }

    /// Adds a proto file to the current file's dependencies, once.
    fn add_proto_dep(&mut self, proto_path: &str) {
        if self.file.dependency.iter().any(|dep| dep == proto_path) {
            return;
        }
        self.file.dependency.push(proto_path.to_string());
    }
}

fn scalar_type(basic: Basic) -> Option<FieldType> {
    match basic {
        Basic::String => Some(FieldType::String),
        Basic::Int | Basic::Int32 => Some(FieldType::Int32),
        Basic::Uint | Basic::Uint32 => Some(FieldType::Uint32),
        Basic::Int64 => Some(FieldType::Int64),
        Basic::Uint64 => Some(FieldType::Uint64),
        Basic::Float32 => Some(FieldType::Float),
        Basic::Float64 => Some(FieldType::Double),
        Basic::Bool => Some(FieldType::Bool),
        // A bare byte has no protobuf representation; only []byte does.
        Basic::Byte => None,
    }
}

fn string_or_none(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use prost::Message as _;

    use super::*;
    use crate::ast::{ImportSpec, Named, StructTag, ValueSpec};
    use crate::options::{HttpMatch, OptionTag};

    fn pkg(import_path: &str, name: &str, files: Vec<SourceFile>) -> Package {
        Package {
            import_path: import_path.into(),
            name: name.into(),
            proto_name: name.into(),
            dir: import_path.into(),
            files,
            ..Default::default()
        }
    }

    fn pkg_map(pkgs: Vec<Package>) -> PackageMap {
        pkgs.into_iter()
            .map(|p| (p.import_path.clone(), Rc::new(p)))
            .collect()
    }

    fn source_file(decls: Vec<Decl>) -> SourceFile {
        SourceFile {
            path: "types.gk".into(),
            decls,
            ..Default::default()
        }
    }

    fn field(name: &str, ty: Type, pb: &str, json: Option<&str>) -> Field {
        Field {
            names: vec![name.into()],
            doc: String::new(),
            pos: Pos { line: 4, column: 2 },
            tags: vec![],
            ty,
            tag: Some(StructTag {
                pb: Some(pb.into()),
                json: json.map(str::to_owned),
            }),
        }
    }

    fn struct_decl(name: &str, fields: Vec<Field>) -> Decl {
        Decl::Type(TypeDecl {
            name: name.into(),
            doc: String::new(),
            pos: Pos { line: 3, column: 1 },
            tags: vec![],
            def: TypeDef::Struct { fields },
        })
    }

    fn named(name: &str, underlying: Underlying) -> Type {
        Type::Named(Named {
            import_path: None,
            name: name.into(),
            underlying,
        })
    }

    fn translate_one(p: Package) -> Translated {
        let pkgs = pkg_map(vec![p]);
        let p = pkgs.values().next().unwrap().clone();
        Translator::translate(&pkgs, &p).unwrap()
    }

    #[test]
    fn scalar_message() {
        let p = pkg(
            "example.com/echo",
            "echo",
            vec![source_file(vec![struct_decl(
                "Echo",
                vec![field("Msg", Type::Basic(Basic::String), "1", Some("msg"))],
            )])],
        );
        let translated = translate_one(p);
        let file = &translated.file;
        assert_eq!(file.name(), "example.com/echo/all.proto");
        assert_eq!(file.syntax.as_deref(), Some("proto3"));
        assert_eq!(file.package.as_deref(), Some("echo"));
        assert_eq!(
            file.options.as_ref().unwrap().go_package.as_deref(),
            Some("example.com/echo;echo")
        );

        assert_eq!(file.message_type.len(), 1);
        let msg = &file.message_type[0];
        assert_eq!(msg.name(), "Echo");
        assert_eq!(msg.field.len(), 1);
        let f = &msg.field[0];
        assert_eq!(f.name(), "Msg");
        assert_eq!(f.number(), 1);
        assert_eq!(f.r#type(), FieldType::String);
        assert_eq!(f.label(), Label::Optional);
        assert_eq!(f.json_name.as_deref(), Some("msg"));
        assert!(f.type_name.is_none());
    }

    #[test]
    fn map_field_expands_to_nested_entry() {
        let p = pkg(
            "example.com/dict",
            "dict",
            vec![source_file(vec![struct_decl(
                "Dict",
                vec![field(
                    "Items",
                    Type::Map {
                        key: Box::new(Type::Basic(Basic::String)),
                        value: Box::new(Type::Basic(Basic::Int32)),
                    },
                    "1",
                    None,
                )],
            )])],
        );
        let translated = translate_one(p);
        let msg = &translated.file.message_type[0];

        let f = &msg.field[0];
        assert_eq!(f.r#type(), FieldType::Message);
        assert_eq!(f.label(), Label::Repeated);
        assert_eq!(f.type_name(), ".dict.Dict.ItemsEntry");

        assert_eq!(msg.nested_type.len(), 1);
        let entry = &msg.nested_type[0];
        assert_eq!(entry.name(), "ItemsEntry");
        assert!(entry.options.as_ref().unwrap().map_entry());
        assert_eq!(entry.field.len(), 2);
        assert_eq!(entry.field[0].name(), "key");
        assert_eq!(entry.field[0].number(), 1);
        assert_eq!(entry.field[0].r#type(), FieldType::String);
        assert_eq!(entry.field[0].label(), Label::Optional);
        assert_eq!(entry.field[1].name(), "value");
        assert_eq!(entry.field[1].number(), 2);
        assert_eq!(entry.field[1].r#type(), FieldType::Int32);
        assert_eq!(entry.field[1].label(), Label::Optional);
    }

    #[test]
    fn streaming_service() {
        let p = pkg(
            "example.com/tail",
            "tail",
            vec![source_file(vec![
                struct_decl("Req", vec![]),
                struct_decl("Resp", vec![]),
                Decl::Type(TypeDecl {
                    name: "S".into(),
                    doc: String::new(),
                    pos: Pos::default(),
                    tags: vec![],
                    def: TypeDef::Interface {
                        methods: vec![Method {
                            names: vec!["Tail".into()],
                            doc: String::new(),
                            pos: Pos::default(),
                            tags: vec![],
                            params: vec![Type::Chan(Box::new(named("Req", Underlying::Struct)))],
                            results: vec![Type::Chan(Box::new(named("Resp", Underlying::Struct)))],
                        }],
                    },
                }),
            ])],
        );
        let translated = translate_one(p);
        let srv = &translated.file.service[0];
        assert_eq!(srv.name.as_deref(), Some("S"));
        let method = &srv.method[0];
        assert_eq!(method.input_type(), ".tail.Req");
        assert_eq!(method.output_type(), ".tail.Resp");
        assert!(method.client_streaming());
        assert!(method.server_streaming());
    }

    #[test]
    fn empty_parameters_substitute_empty_and_http_rule_adds_dep() {
        let p = pkg(
            "example.com/ping",
            "ping",
            vec![source_file(vec![Decl::Type(TypeDecl {
                name: "Pinger".into(),
                doc: String::new(),
                pos: Pos::default(),
                tags: vec![],
                def: TypeDef::Interface {
                    methods: vec![Method {
                        names: vec!["Ping".into()],
                        doc: String::new(),
                        pos: Pos::default(),
                        tags: vec![OptionTag::Match(HttpMatch {
                            method: None,
                            path: "/ping".into(),
                            body: String::new(),
                        })],
                        params: vec![],
                        results: vec![],
                    }],
                },
            })])],
        );
        let translated = translate_one(p);
        let file = &translated.file;
        let method = &file.service[0].method[0];
        assert_eq!(method.input_type(), ".google.protobuf.Empty");
        assert_eq!(method.output_type(), ".google.protobuf.Empty");
        assert_eq!(method.client_streaming, None);
        assert_eq!(method.server_streaming, None);

        let rule = method.options.as_ref().unwrap().http.as_ref().unwrap();
        assert_eq!(
            rule.pattern,
            Some(crate::google::api::http_rule::Pattern::Get("/ping".into()))
        );
        assert!(file
            .dependency
            .contains(&"google/protobuf/empty.proto".to_string()));
        assert!(file
            .dependency
            .contains(&"google/api/annotations.proto".to_string()));
    }

    #[test]
    fn enum_values_from_same_file_constants() {
        let p = pkg(
            "example.com/color",
            "color",
            vec![source_file(vec![
                Decl::Type(TypeDecl {
                    name: "Color".into(),
                    doc: String::new(),
                    pos: Pos::default(),
                    tags: vec![],
                    def: TypeDef::Enum,
                }),
                Decl::Const(ConstDecl {
                    pos: Pos::default(),
                    specs: vec![
                        ValueSpec {
                            names: vec!["Red".into()],
                            doc: "Red is the default.\n".into(),
                            pos: Pos::default(),
                            tags: vec![],
                            decl_type: Some("Color".into()),
                            value: 0,
                        },
                        ValueSpec {
                            names: vec!["Blue".into()],
                            doc: String::new(),
                            pos: Pos::default(),
                            tags: vec![],
                            decl_type: Some("Color".into()),
                            value: 3,
                        },
                        ValueSpec {
                            names: vec!["Unrelated".into()],
                            doc: String::new(),
                            pos: Pos::default(),
                            tags: vec![],
                            decl_type: Some("Other".into()),
                            value: 9,
                        },
                    ],
                }),
            ])],
        );
        let translated = translate_one(p);
        let file = &translated.file;
        assert_eq!(file.enum_type.len(), 1);
        let enum_ = &file.enum_type[0];
        assert_eq!(enum_.name.as_deref(), Some("Color"));
        assert_eq!(enum_.value.len(), 2);
        assert_eq!(enum_.value[0].name.as_deref(), Some("Red"));
        assert_eq!(enum_.value[0].number, Some(0));
        assert_eq!(enum_.value[1].name.as_deref(), Some("Blue"));
        assert_eq!(enum_.value[1].number, Some(3));

        // The value doc starts with the value name, so the enum name is
        // prepended to match the generated identifier.
        let info = file.source_code_info.as_ref().unwrap();
        let value_doc = info
            .location
            .iter()
            .find(|loc| loc.path == vec![ENUM_PATH, 0, ENUM_VALUE_PATH, 0])
            .unwrap();
        assert_eq!(
            value_doc.leading_comments.as_deref(),
            Some(" Color_Red is the default.")
        );
        assert_eq!(value_doc.span, vec![1, 2, 3]);
    }

    #[test]
    fn enum_without_values_is_omitted() {
        let p = pkg(
            "example.com/empty",
            "empty",
            vec![source_file(vec![Decl::Type(TypeDecl {
                name: "Unused".into(),
                doc: String::new(),
                pos: Pos::default(),
                tags: vec![],
                def: TypeDef::Enum,
            })])],
        );
        let translated = translate_one(p);
        assert!(translated.file.enum_type.is_empty());
    }

    #[test]
    fn missing_pb_tag_names_the_field() {
        let mut f = field("Msg", Type::Basic(Basic::String), "1", None);
        f.tag = None;
        let p = pkg(
            "example.com/echo",
            "echo",
            vec![source_file(vec![struct_decl("Echo", vec![f])])],
        );
        let pkgs = pkg_map(vec![p]);
        let p = pkgs.values().next().unwrap().clone();
        let err = Translator::translate(&pkgs, &p).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("missing required pb tag on Msg"), "{msg}");
        // The error is annotated with the field's source position.
        assert!(msg.starts_with("types.gk:4:2"), "{msg}");
    }

    #[test]
    fn unsupported_field_type_is_rejected() {
        let p = pkg(
            "example.com/bad",
            "bad",
            vec![source_file(vec![struct_decl(
                "Bad",
                vec![field("F", named("Alias", Underlying::Other), "1", None)],
            )])],
        );
        let pkgs = pkg_map(vec![p]);
        let p = pkgs.values().next().unwrap().clone();
        let err = Translator::translate(&pkgs, &p).unwrap_err();
        assert!(err.to_string().contains("unsupported field type: Alias"));
    }

    #[test]
    fn multiple_parameters_are_rejected() {
        let p = pkg(
            "example.com/multi",
            "multi",
            vec![source_file(vec![Decl::Type(TypeDecl {
                name: "S".into(),
                doc: String::new(),
                pos: Pos::default(),
                tags: vec![],
                def: TypeDef::Interface {
                    methods: vec![Method {
                        names: vec!["M".into()],
                        doc: String::new(),
                        pos: Pos::default(),
                        tags: vec![],
                        params: vec![
                            named("Req", Underlying::Struct),
                            named("Req", Underlying::Struct),
                        ],
                        results: vec![],
                    }],
                },
            })])],
        );
        let pkgs = pkg_map(vec![p]);
        let p = pkgs.values().next().unwrap().clone();
        let err = Translator::translate(&pkgs, &p).unwrap_err();
        assert!(err
            .to_string()
            .contains("multiple parameters are not supported"));
    }

    #[test]
    fn time_types_map_to_well_known_messages() {
        let time_field = |name: &str, tyname: &str, pb: &str| {
            field(
                name,
                Type::Named(Named {
                    import_path: Some("time".into()),
                    name: tyname.into(),
                    underlying: Underlying::Struct,
                }),
                pb,
                None,
            )
        };
        let p = pkg(
            "example.com/when",
            "when",
            vec![source_file(vec![struct_decl(
                "When",
                vec![
                    time_field("At", "Time", "1"),
                    time_field("For", "Duration", "2"),
                ],
            )])],
        );
        let translated = translate_one(p);
        let file = &translated.file;
        let msg = &file.message_type[0];
        assert_eq!(msg.field[0].type_name(), ".google.protobuf.Timestamp");
        assert_eq!(msg.field[1].type_name(), ".google.protobuf.Duration");
        assert_eq!(
            file.dependency,
            vec![
                "google/protobuf/timestamp.proto".to_string(),
                "google/protobuf/duration.proto".to_string(),
            ]
        );
    }

    #[test]
    fn only_used_imports_become_dependencies() {
        let dep_used = pkg(
            "example.com/kinds",
            "kinds",
            vec![source_file(vec![struct_decl("Kind", vec![])])],
        );
        let dep_unused = pkg(
            "example.com/unused",
            "unused",
            vec![source_file(vec![struct_decl("Nope", vec![])])],
        );
        let mut main_file = source_file(vec![struct_decl(
            "Item",
            vec![field(
                "Kind",
                Type::Named(Named {
                    import_path: Some("example.com/kinds".into()),
                    name: "Kind".into(),
                    underlying: Underlying::Struct,
                }),
                "1",
                None,
            )],
        )]);
        main_file.imports = vec![
            ImportSpec {
                name: None,
                path: "example.com/kinds".into(),
            },
            ImportSpec {
                name: None,
                path: "example.com/unused".into(),
            },
        ];
        let main = pkg("example.com/items", "items", vec![main_file]);
        let pkgs = pkg_map(vec![dep_used, dep_unused, main]);
        let main = pkgs.get("example.com/items").unwrap().clone();
        let translated = Translator::translate(&pkgs, &main).unwrap();

        assert_eq!(
            translated.file.dependency,
            vec!["example.com/kinds/all.proto".to_string()]
        );
        assert_eq!(translated.schema_deps, vec!["example.com/kinds".to_string()]);
        assert_eq!(
            translated.file.message_type[0].field[0].type_name(),
            ".kinds.Kind"
        );
    }

    #[test]
    fn package_doc_and_message_doc_are_recorded() {
        let mut file = source_file(vec![Decl::Type(TypeDecl {
            name: "Echo".into(),
            doc: "Echo repeats a message.\nIt is stateless.\n".into(),
            pos: Pos::default(),
            tags: vec![],
            def: TypeDef::Struct { fields: vec![] },
        })]);
        file.doc = "Package echo is an echo service.\n".into();
        let p = pkg("example.com/echo", "echo", vec![file]);
        let translated = translate_one(p);
        let info = translated.file.source_code_info.as_ref().unwrap();

        let pkg_doc = info
            .location
            .iter()
            .find(|loc| loc.path == vec![PACKAGE_PATH])
            .unwrap();
        assert_eq!(
            pkg_doc.leading_comments.as_deref(),
            Some(" Package echo is an echo service.")
        );

        let msg_doc = info
            .location
            .iter()
            .find(|loc| loc.path == vec![MESSAGE_PATH, 0])
            .unwrap();
        assert_eq!(
            msg_doc.leading_comments.as_deref(),
            Some(" Echo repeats a message.\n It is stateless.")
        );
    }

    #[test]
    fn translation_is_deterministic() {
        let build = || {
            pkg(
                "example.com/echo",
                "echo",
                vec![source_file(vec![
                    struct_decl(
                        "Echo",
                        vec![
                            field("Msg", Type::Basic(Basic::String), "1", Some("msg")),
                            field(
                                "Tags",
                                Type::Map {
                                    key: Box::new(Type::Basic(Basic::String)),
                                    value: Box::new(Type::Basic(Basic::String)),
                                },
                                "2",
                                None,
                            ),
                        ],
                    ),
                    struct_decl("Empty", vec![]),
                ])],
            )
        };
        let first = translate_one(build()).file.encode_to_vec();
        let second = translate_one(build()).file.encode_to_vec();
        assert_eq!(first, second);
    }
}
