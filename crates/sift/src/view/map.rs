use super::{Field, FieldRemap, FieldTy, Property, Record, ViewDescriptor, ViewKind};
use sift_core::{
    err,
    stmt::{Value, ValueRecord},
    Error, Result,
};

/// Resolves the fields of `descriptor` against `record`.
///
/// Returns one value per field, in field order. Nested views become
/// `Value::Record`s and sequences `Value::List`s, ready for
/// [`View::load`](super::View::load).
pub fn map_record(record: &Record, descriptor: &ViewDescriptor) -> Result<ValueRecord> {
    let ViewKind::Struct { fields, remap } = &descriptor.kind else {
        return Err(Error::unsupported_target_type(descriptor.name));
    };

    let mut values = Vec::with_capacity(fields.len());

    for field in fields {
        let value = match lookup(record, field, remap.as_ref()) {
            Some(property) => convert(property, &field.ty).map_err(|err| {
                err.context(err!("mapping field `{}` of `{}`", field.name, descriptor.name))
            })?,
            None if field.optional => {
                tracing::trace!(view = descriptor.name, field = field.name, "optional field left empty");
                Value::Null
            }
            None => {
                return Err(Error::missing_required_field(descriptor.name, field.name));
            }
        };

        values.push(value);
    }

    Ok(ValueRecord::from_vec(values))
}

/// Finds the source property for `field`: the same-named property first,
/// then the remapped one. Null properties count as missing.
fn lookup<'a>(record: &'a Record, field: &Field, remap: Option<&FieldRemap>) -> Option<&'a Property> {
    let present = |name: &str| record.get(name).filter(|property| !property.is_null());

    if let Some(property) = present(field.name) {
        return Some(property);
    }

    let source = remap?.source_for(field.name)?;
    let property = present(source)?;
    tracing::trace!(field = field.name, source, "field read from remapped property");
    Some(property)
}

fn convert(property: &Property, ty: &FieldTy) -> Result<Value> {
    match (property, ty) {
        (Property::Value(value), FieldTy::Value) => Ok(unwrap_id(value.clone())),
        (Property::Value(value), FieldTy::List(item)) => match value {
            Value::List(items) => items
                .iter()
                .map(|item_value| convert(&Property::Value(item_value.clone()), item))
                .collect::<Result<Vec<_>>>()
                .map(Value::List),
            _ => Err(Error::type_conversion(value.clone(), "sequence")),
        },
        (Property::Value(value), FieldTy::View(descriptor)) => Err(err!(
            "expected a record to map into `{}`, found {}",
            descriptor().name,
            value.variant_name()
        )),
        (Property::Record(record), FieldTy::View(descriptor)) => {
            map_record(record, descriptor()).map(Value::Record)
        }
        (Property::Record(_), _) => Err(err!("expected a value, found a nested record")),
        (Property::Collection(collection), FieldTy::List(item)) => {
            let mut values = vec![];

            for element in collection.items()? {
                values.push(convert(element, item)?);
            }

            Ok(Value::List(values))
        }
        (Property::Collection(_), _) => Err(err!("expected a value, found a collection")),
    }
}

fn unwrap_id(value: Value) -> Value {
    match value {
        Value::Id(id) => unwrap_id(id.into_value()),
        value => value,
    }
}
