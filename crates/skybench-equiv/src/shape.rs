use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// A value that can expose its structure to the comparator.
pub trait Inspect {
    fn shape(&self) -> Shape<'_>;
}

/// A value that can key a map shape.
pub trait InspectKey {
    fn map_key(&self) -> MapKey;
}

/// One level of a value's structure. Children of sequences, maps and
/// indirections stay behind `&dyn Inspect` and are only expanded when the
/// walk reaches them.
#[derive(Clone)]
pub enum Shape<'a> {
    /// An unset optional value.
    Absent,
    /// A present optional or boxed value.
    Indirect(&'a dyn Inspect),
    Seq(Vec<&'a dyn Inspect>),
    Map(Vec<(MapKey, &'a dyn Inspect)>),
    Record(Record<'a>),
    Int(i64),
    Uint(u64),
    Float(f64),
    Str(&'a str),
    Bool(bool),
    /// A value the comparator has no way to look into.
    Opaque(&'static str),
}

impl Shape<'_> {
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Absent => "absent",
            Self::Indirect(_) => "indirect",
            Self::Seq(_) => "sequence",
            Self::Map(_) => "map",
            Self::Record(_) => "record",
            Self::Int(_) => "int",
            Self::Uint(_) => "uint",
            Self::Float(_) => "float",
            Self::Str(_) => "string",
            Self::Bool(_) => "bool",
            Self::Opaque(_) => "opaque",
        }
    }

    #[must_use]
    pub fn as_record(&self) -> Option<&Record<'_>> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }
}

impl fmt::Debug for Shape<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Seq(items) => write!(f, "Seq(len={})", items.len()),
            Self::Map(entries) => write!(f, "Map(len={})", entries.len()),
            Self::Record(record) => f
                .debug_struct("Record")
                .field("type_name", &record.type_name)
                .field("fields", &record.fields.len())
                .finish(),
            Self::Int(value) => write!(f, "Int({value})"),
            Self::Uint(value) => write!(f, "Uint({value})"),
            Self::Float(value) => write!(f, "Float({value})"),
            Self::Str(value) => write!(f, "Str({value:?})"),
            Self::Bool(value) => write!(f, "Bool({value})"),
            Self::Opaque(name) => write!(f, "Opaque({name})"),
            Self::Absent | Self::Indirect(_) => f.write_str(self.kind()),
        }
    }
}

/// A struct-like value: a nominal type name plus its fields under their
/// external (serialized) names.
#[derive(Clone)]
pub struct Record<'a> {
    pub type_name: &'static str,
    pub fields: Vec<Field<'a>>,
}

impl<'a> Record<'a> {
    #[must_use]
    pub fn new(type_name: &'static str, fields: Vec<Field<'a>>) -> Self {
        Self { type_name, fields }
    }

    /// The only field of a wrapper record.
    #[must_use]
    pub fn single_field(&self) -> Option<&Field<'a>> {
        match self.fields.as_slice() {
            [field] => Some(field),
            _ => None,
        }
    }
}

#[derive(Clone)]
pub struct Field<'a> {
    pub name: &'static str,
    pub value: Shape<'a>,
}

/// Normalised map key. Integer keys that fit in `i64` always use `Int`, so
/// signed and unsigned keys of equal value compare equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MapKey {
    Int(i64),
    Uint(u64),
    Text(String),
}

impl MapKey {
    #[must_use]
    pub fn unsigned(value: u64) -> Self {
        i64::try_from(value).map_or(Self::Uint(value), Self::Int)
    }
}

impl fmt::Display for MapKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Uint(value) => write!(f, "{value}"),
            Self::Text(value) => write!(f, "{value:?}"),
        }
    }
}

impl<T: Inspect> Inspect for Option<T> {
    fn shape(&self) -> Shape<'_> {
        match self {
            Some(value) => Shape::Indirect(value),
            None => Shape::Absent,
        }
    }
}

impl<T: Inspect> Inspect for Box<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Indirect(&**self)
    }
}

impl<T: Inspect> Inspect for Vec<T> {
    fn shape(&self) -> Shape<'_> {
        self.as_slice().shape()
    }
}

impl<T: Inspect> Inspect for [T] {
    fn shape(&self) -> Shape<'_> {
        Shape::Seq(self.iter().map(|item| item as &dyn Inspect).collect())
    }
}

impl<K: InspectKey, V: Inspect, S> Inspect for HashMap<K, V, S> {
    fn shape(&self) -> Shape<'_> {
        Shape::Map(
            self.iter()
                .map(|(key, value)| (key.map_key(), value as &dyn Inspect))
                .collect(),
        )
    }
}

impl<K: InspectKey, V: Inspect> Inspect for BTreeMap<K, V> {
    fn shape(&self) -> Shape<'_> {
        Shape::Map(
            self.iter()
                .map(|(key, value)| (key.map_key(), value as &dyn Inspect))
                .collect(),
        )
    }
}

macro_rules! inspect_scalar {
    ($variant:ident: $($ty:ty),*) => {
        $(
            impl Inspect for $ty {
                fn shape(&self) -> Shape<'_> {
                    Shape::$variant((*self).into())
                }
            }
        )*
    };
}

inspect_scalar!(Int: i8, i16, i32, i64);
inspect_scalar!(Uint: u8, u16, u32, u64);
inspect_scalar!(Float: f32, f64);
inspect_scalar!(Bool: bool);

impl Inspect for str {
    fn shape(&self) -> Shape<'_> {
        Shape::Str(self)
    }
}

impl Inspect for String {
    fn shape(&self) -> Shape<'_> {
        Shape::Str(self)
    }
}

impl InspectKey for String {
    fn map_key(&self) -> MapKey {
        MapKey::Text(self.clone())
    }
}

macro_rules! inspect_key {
    ($($ty:ty => $conv:expr),* $(,)?) => {
        $(
            impl InspectKey for $ty {
                fn map_key(&self) -> MapKey {
                    $conv(*self)
                }
            }
        )*
    };
}

inspect_key!(
    i32 => |value: i32| MapKey::Int(i64::from(value)),
    i64 => MapKey::Int,
    u32 => |value: u32| MapKey::Int(i64::from(value)),
    u64 => MapKey::unsigned,
    bool => |value: bool| MapKey::Int(i64::from(value)),
);

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::{Inspect, MapKey, Shape};

    #[test]
    fn integer_keys_normalise_across_signedness() {
        assert_eq!(MapKey::unsigned(7), MapKey::Int(7));
        assert_eq!(MapKey::unsigned(u64::MAX), MapKey::Uint(u64::MAX));
    }

    #[test]
    fn options_are_absent_or_indirect() {
        assert!(matches!(None::<i32>.shape(), Shape::Absent));
        assert!(matches!(Some(3_i32).shape(), Shape::Indirect(_)));
    }

    #[test]
    fn maps_expose_every_entry() {
        let mut map = HashMap::new();
        map.insert("a".to_owned(), 1_u32);
        map.insert("b".to_owned(), 2_u32);
        match map.shape() {
            Shape::Map(entries) => assert_eq!(entries.len(), 2),
            other => panic!("unexpected shape {other:?}"),
        }
    }
}
