//! Resolves a parsed SDL document into the frozen [`Schema`] model.
//!
//! Resolution enforces the model invariants up front so the generator can trust
//! the schema: every type reference resolves, names are unique per scope,
//! object-valued fields (outside the root type) carry `@relation` and leaf
//! fields do not, root fields return entity types, and declared defaults fit
//! their argument types.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use super::errors::GraphSchemaError;
use super::graph_schema::{
    ArgumentDecl, Direction, EnumType, Field, ObjectType, RelationInfo, ScalarKind, Schema,
    ValueKind,
};
use super::sdl_parser::{
    parse_sdl, Directive, FieldDefinition, ObjectDefinition, SdlDefinition, SdlDocument,
};
use crate::cypher_generator::value::compile_value;
use crate::graphql_parser::ast::{TypeRef, Value};

const DEFAULT_ROOT_TYPE: &str = "Query";
const RELATION_DIRECTIVE: &str = "relation";

impl Schema {
    /// Parse and resolve SDL text.
    pub fn from_sdl(sdl: &str) -> Result<Schema, GraphSchemaError> {
        build_schema(sdl)
    }

    /// Load a schema from an SDL file on disk.
    pub fn from_sdl_file<P: AsRef<Path>>(path: P) -> Result<Schema, GraphSchemaError> {
        let path = path.as_ref();
        let sdl = std::fs::read_to_string(path).map_err(|e| GraphSchemaError::SchemaReadError {
            error: format!("{}: {}", path.display(), e),
        })?;
        log::info!("Loading schema from {}", path.display());
        build_schema(&sdl)
    }
}

pub fn build_schema(sdl: &str) -> Result<Schema, GraphSchemaError> {
    let document = parse_sdl(sdl).map_err(|e| GraphSchemaError::SdlParse {
        message: e.to_string().trim_end().to_string(),
    })?;
    let schema = resolve_document(&document)?;
    validate_defaults(&schema)?;

    log::info!(
        "Schema loaded: root type `{}` with {} entry points, {} entity types",
        schema.query_type().name,
        schema.query_type().fields.len(),
        schema.type_names().len()
    );
    Ok(schema)
}

/// Type names visible to field and argument declarations.
struct TypeResolver<'a> {
    objects: HashSet<&'a str>,
    enums: HashSet<&'a str>,
    scalars: HashSet<&'a str>,
    root: &'a str,
}

impl TypeResolver<'_> {
    fn resolve(
        &self,
        type_ref: &TypeRef<'_>,
        location: &str,
    ) -> Result<ValueKind, GraphSchemaError> {
        match type_ref {
            TypeRef::NonNull(inner) => self.resolve(inner, location),
            TypeRef::List(inner) => Ok(ValueKind::List(Box::new(self.resolve(inner, location)?))),
            TypeRef::Named(name) => {
                if let Some(scalar) = ScalarKind::builtin(name) {
                    Ok(ValueKind::Scalar(scalar))
                } else if self.scalars.contains(name) {
                    Ok(ValueKind::Scalar(ScalarKind::Custom(name.to_string())))
                } else if self.enums.contains(name) {
                    Ok(ValueKind::Enum(name.to_string()))
                } else if self.objects.contains(name) {
                    Ok(ValueKind::Object(name.to_string()))
                } else {
                    Err(GraphSchemaError::unknown_type_with_context(*name, location))
                }
            }
        }
    }
}

fn resolve_document(document: &SdlDocument<'_>) -> Result<Schema, GraphSchemaError> {
    let mut declared: HashSet<&str> = HashSet::new();
    let mut objects: Vec<&ObjectDefinition<'_>> = Vec::new();
    let mut enums: HashMap<String, EnumType> = HashMap::new();
    let mut scalars: HashSet<&str> = HashSet::new();
    let mut root: Option<&str> = None;
    let mut seen_schema_block = false;

    for definition in &document.definitions {
        match definition {
            SdlDefinition::Object(object) => {
                declare(&mut declared, object.name)?;
                objects.push(object);
            }
            SdlDefinition::Enum(enum_def) => {
                declare(&mut declared, enum_def.name)?;
                let mut values: Vec<String> = Vec::with_capacity(enum_def.values.len());
                for value in &enum_def.values {
                    if values.iter().any(|v| v == value) {
                        return Err(GraphSchemaError::Duplicate {
                            kind: "enum value",
                            name: format!("{}.{}", enum_def.name, value),
                        });
                    }
                    values.push(value.to_string());
                }
                enums.insert(
                    enum_def.name.to_string(),
                    EnumType {
                        name: enum_def.name.to_string(),
                        values,
                    },
                );
            }
            SdlDefinition::Scalar(name) => {
                declare(&mut declared, *name)?;
                scalars.insert(*name);
            }
            SdlDefinition::Schema(schema_def) => {
                if seen_schema_block {
                    return Err(GraphSchemaError::Duplicate {
                        kind: "schema definition",
                        name: "schema".to_string(),
                    });
                }
                seen_schema_block = true;
                for (operation, type_name) in &schema_def.operations {
                    if *operation != "query" {
                        log::warn!(
                            "Ignoring `{}: {}` in schema block; only read queries are translated",
                            operation,
                            type_name
                        );
                    }
                }
                root = schema_def.query_type();
            }
        }
    }

    let root = root.unwrap_or(DEFAULT_ROOT_TYPE);
    let resolver = TypeResolver {
        objects: objects.iter().map(|o| o.name).collect(),
        enums: enums.keys().map(String::as_str).collect(),
        scalars,
        root,
    };

    let mut query: Option<ObjectType> = None;
    let mut types: HashMap<String, ObjectType> = HashMap::new();
    for object in objects {
        let object_type = resolve_object(object, &resolver)?;
        if object.name == root {
            query = Some(object_type);
        } else {
            types.insert(object_type.name.clone(), object_type);
        }
    }

    let query = query.ok_or_else(|| GraphSchemaError::MissingRootType {
        type_name: root.to_string(),
    })?;
    Ok(Schema::new(query, types, enums))
}

fn declare<'a>(declared: &mut HashSet<&'a str>, name: &'a str) -> Result<(), GraphSchemaError> {
    if ScalarKind::builtin(name).is_some() || !declared.insert(name) {
        return Err(GraphSchemaError::Duplicate {
            kind: "type",
            name: name.to_string(),
        });
    }
    Ok(())
}

fn resolve_object(
    object: &ObjectDefinition<'_>,
    resolver: &TypeResolver<'_>,
) -> Result<ObjectType, GraphSchemaError> {
    let is_root = object.name == resolver.root;
    let mut fields: Vec<Field> = Vec::with_capacity(object.fields.len());

    for field_def in &object.fields {
        if fields.iter().any(|f| f.name == field_def.name) {
            return Err(GraphSchemaError::Duplicate {
                kind: "field",
                name: format!("{}.{}", object.name, field_def.name),
            });
        }
        fields.push(resolve_field(object.name, field_def, resolver, is_root)?);
    }

    Ok(ObjectType {
        name: object.name.to_string(),
        fields,
    })
}

fn resolve_field(
    type_name: &str,
    field_def: &FieldDefinition<'_>,
    resolver: &TypeResolver<'_>,
    is_root: bool,
) -> Result<Field, GraphSchemaError> {
    let location = format!("{}.{}", type_name, field_def.name);
    let kind = resolver.resolve(&field_def.field_type, &location)?;

    let mut relation: Option<RelationInfo> = None;
    for directive in &field_def.directives {
        if directive.name != RELATION_DIRECTIVE {
            return Err(GraphSchemaError::UnsupportedDirective {
                type_name: type_name.to_string(),
                field: field_def.name.to_string(),
                directive: directive.name.to_string(),
            });
        }
        if relation.is_some() {
            return Err(GraphSchemaError::invalid_relation(
                type_name,
                field_def.name,
                "`@relation` declared more than once",
            ));
        }
        relation = Some(resolve_relation(type_name, field_def.name, directive)?);
    }

    match (is_root, kind.object_type(), &relation) {
        (true, None, _) => {
            return Err(GraphSchemaError::InvalidRootField {
                field: field_def.name.to_string(),
                found: kind.to_string(),
            })
        }
        (true, Some(_), Some(_)) => {
            return Err(GraphSchemaError::invalid_relation(
                type_name,
                field_def.name,
                "root fields select entities directly and cannot declare `@relation`",
            ))
        }
        (false, Some(_), None) => {
            return Err(GraphSchemaError::invalid_relation(
                type_name,
                field_def.name,
                format!("object-valued field of type `{}` requires `@relation`", kind),
            ))
        }
        (false, None, Some(_)) => {
            return Err(GraphSchemaError::invalid_relation(
                type_name,
                field_def.name,
                format!("`@relation` is only valid on object-valued fields, found `{}`", kind),
            ))
        }
        _ => {}
    }

    if kind.object_type() == Some(resolver.root) {
        return Err(GraphSchemaError::invalid_relation(
            type_name,
            field_def.name,
            "the root query type cannot be selected as an entity",
        ));
    }

    let mut arguments: Vec<ArgumentDecl> = Vec::with_capacity(field_def.arguments.len());
    for arg_def in &field_def.arguments {
        if arguments.iter().any(|a| a.name == arg_def.name) {
            return Err(GraphSchemaError::Duplicate {
                kind: "argument",
                name: format!("{}({})", location, arg_def.name),
            });
        }
        let arg_kind = resolver.resolve(&arg_def.value_type, &location)?;
        if !arg_kind.is_leaf() {
            return Err(GraphSchemaError::InvalidArgumentType {
                type_name: type_name.to_string(),
                field: field_def.name.to_string(),
                argument: arg_def.name.to_string(),
                found: arg_kind.to_string(),
            });
        }
        arguments.push(ArgumentDecl {
            name: arg_def.name.to_string(),
            kind: arg_kind,
            default_value: arg_def.default_value.clone().map(Value::into_owned),
        });
    }

    Ok(Field {
        name: field_def.name.to_string(),
        kind,
        relation,
        arguments,
    })
}

/// `@relation(name: "REL", direction: "OUT" | "IN")`; direction defaults to OUT.
fn resolve_relation(
    type_name: &str,
    field: &str,
    directive: &Directive<'_>,
) -> Result<RelationInfo, GraphSchemaError> {
    if let Some(unexpected) = directive
        .arguments
        .iter()
        .find(|arg| arg.name != "name" && arg.name != "direction")
    {
        return Err(GraphSchemaError::invalid_relation(
            type_name,
            field,
            format!("unexpected argument `{}`", unexpected.name),
        ));
    }

    let relationship_type = match directive.argument("name") {
        Some(Value::String(name)) if !name.is_empty() => name.to_string(),
        _ => {
            return Err(GraphSchemaError::invalid_relation(
                type_name,
                field,
                "`name` must be a non-empty string",
            ))
        }
    };

    let direction = match directive.argument("direction") {
        None => Direction::Outgoing,
        Some(Value::String(text)) | Some(Value::Enum(text)) => {
            Direction::parse(text).ok_or_else(|| {
                GraphSchemaError::invalid_relation(
                    type_name,
                    field,
                    format!("`direction` must be OUT or IN, found `{}`", text),
                )
            })?
        }
        Some(other) => {
            return Err(GraphSchemaError::invalid_relation(
                type_name,
                field,
                format!("`direction` must be OUT or IN, found `{}`", other),
            ))
        }
    };

    Ok(RelationInfo {
        relationship_type,
        direction,
    })
}

/// Defaults are checked by compiling them, so a schema that loads never fails later on a default.
fn validate_defaults(schema: &Schema) -> Result<(), GraphSchemaError> {
    let mut owners: Vec<&ObjectType> = vec![schema.query_type()];
    owners.extend(
        schema
            .type_names()
            .into_iter()
            .filter_map(|name| schema.object_type(name)),
    );

    for owner in owners {
        for field in &owner.fields {
            for arg in &field.arguments {
                if let Some(default) = &arg.default_value {
                    compile_value(schema, &arg.kind, default).map_err(|e| {
                        GraphSchemaError::InvalidDefault {
                            type_name: owner.name.clone(),
                            field: field.name.clone(),
                            argument: arg.name.clone(),
                            message: e.to_string(),
                        }
                    })?;
                }
            }
        }
    }
    Ok(())
}
