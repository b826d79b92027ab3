//! Conversion of host values into expression trees.
//!
//! Any type implementing [`serde::Serialize`] can be turned into an
//! [`Expression`] with [`to_expression`]. The serialized shape decides the
//! node:
//!
//! | Host value                         | Node                               |
//! |------------------------------------|------------------------------------|
//! | `None`, `()`, unit struct          | `null`                             |
//! | `bool`                             | Boolean                            |
//! | any integer or float               | Number                             |
//! | `char`, `str`, `String`            | String (never parsed as a number)  |
//! | sequence, tuple, bytes             | Array, every element converted     |
//! | map, struct                        | Object literal, fields in order    |
//! | unit enum variant                  | String holding the variant name    |
//! | newtype/tuple/struct enum variant  | `{Variant: ...}`                   |
//!
//! Field and map-key names that are valid identifiers (reserved words
//! included) become identifier keys; anything else becomes a string key.
//!
//! Nesting deeper than [`MAX_DEPTH`] fails with
//! [`ConvertError::DepthLimitExceeded`], which also stops self-referencing
//! values that would otherwise recurse forever.
//!
//! # Examples
//!
//! ```
//! use jsemit::convert::to_expression;
//! use jsemit::render::RenderConfig;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Person {
//!     name: &'static str,
//!     function: &'static str,
//! }
//!
//! let person = Person { name: "Dave", function: "Developer" };
//! let expr = to_expression(&person).unwrap();
//! assert_eq!(
//!     expr.render(&RenderConfig::default()).unwrap(),
//!     r#"{name:"Dave",function:"Developer"}"#
//! );
//! ```

use std::fmt;

use log::trace;
use rust_decimal::{Decimal, prelude::ToPrimitive};
use serde::Serialize;
use serde::ser;

use crate::ast::{Expression, Function, Identifier, ObjectLiteral};

/// Maximum nesting of sequences, maps, structs, and enum variants.
pub const MAX_DEPTH: usize = 128;

/// Errors that can occur while converting a value.
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// The value nests deeper than the limit
    DepthLimitExceeded(usize),

    /// A map key that cannot be an object-literal key
    UnsupportedKey(String),

    /// Error reported by the value's `Serialize` implementation
    Custom(String),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::DepthLimitExceeded(limit) => write!(
                f,
                "Depth limit exceeded: value nests deeper than {} levels (is it cyclic?)",
                limit
            ),
            ConvertError::UnsupportedKey(kind) => {
                write!(f, "Unsupported key: {} cannot be used as an object key", kind)
            }
            ConvertError::Custom(msg) => write!(f, "Conversion error: {}", msg),
        }
    }
}

impl std::error::Error for ConvertError {}

impl ser::Error for ConvertError {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        ConvertError::Custom(msg.to_string())
    }
}

/// Converts a host value into an expression tree.
pub fn to_expression<T: Serialize + ?Sized>(value: &T) -> Result<Expression, ConvertError> {
    trace!("converting {} to expression", std::any::type_name::<T>());
    value.serialize(ExpressionSerializer { depth: 0 })
}

/// Object-literal key for a property name: an identifier when the name is
/// one, a string otherwise.
pub fn object_key(name: &str) -> Expression {
    match Identifier::key(name) {
        Ok(identifier) => Expression::Identifier(identifier),
        Err(_) => Expression::String(name.to_string()),
    }
}

fn into_key(key: Expression) -> Result<Expression, ConvertError> {
    match key {
        Expression::String(name) => Ok(object_key(&name)),
        Expression::Number(_) => Ok(key),
        Expression::Boolean(b) => Ok(Expression::String(b.to_string())),
        Expression::Null => Err(ConvertError::UnsupportedKey("null".to_string())),
        Expression::Array(_) => Err(ConvertError::UnsupportedKey("a sequence".to_string())),
        Expression::Object(_) => Err(ConvertError::UnsupportedKey("a map".to_string())),
        other => Err(ConvertError::UnsupportedKey(format!("{:?}", other))),
    }
}

#[derive(Clone, Copy)]
struct ExpressionSerializer {
    depth: usize,
}

impl ExpressionSerializer {
    fn nested(self) -> Result<ExpressionSerializer, ConvertError> {
        let depth = self.depth + 1;
        if depth > MAX_DEPTH {
            return Err(ConvertError::DepthLimitExceeded(MAX_DEPTH));
        }
        Ok(ExpressionSerializer { depth })
    }

    fn array(self, len: Option<usize>) -> Result<SerializeArray, ConvertError> {
        Ok(SerializeArray {
            inner: self.nested()?,
            items: Vec::with_capacity(len.unwrap_or(0)),
        })
    }

    fn object(self) -> Result<SerializeObject, ConvertError> {
        Ok(SerializeObject {
            inner: self.nested()?,
            object: ObjectLiteral::new(),
            pending_key: None,
        })
    }
}

fn wrap_variant(variant: &'static str, value: Expression) -> Expression {
    let mut object = ObjectLiteral::new();
    object.insert(object_key(variant), Some(value));
    Expression::Object(object)
}

impl ser::Serializer for ExpressionSerializer {
    type Ok = Expression;
    type Error = ConvertError;

    type SerializeSeq = SerializeArray;
    type SerializeTuple = SerializeArray;
    type SerializeTupleStruct = SerializeArray;
    type SerializeTupleVariant = SerializeVariant<SerializeArray>;
    type SerializeMap = SerializeObject;
    type SerializeStruct = SerializeObject;
    type SerializeStructVariant = SerializeVariant<SerializeObject>;

    fn serialize_bool(self, v: bool) -> Result<Expression, ConvertError> {
        Ok(Expression::Boolean(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Expression, ConvertError> {
        Ok(Expression::Number(f64::from(v)))
    }

    fn serialize_i16(self, v: i16) -> Result<Expression, ConvertError> {
        Ok(Expression::Number(f64::from(v)))
    }

    fn serialize_i32(self, v: i32) -> Result<Expression, ConvertError> {
        Ok(Expression::Number(f64::from(v)))
    }

    fn serialize_i64(self, v: i64) -> Result<Expression, ConvertError> {
        Ok(Expression::Number(v as f64))
    }

    fn serialize_i128(self, v: i128) -> Result<Expression, ConvertError> {
        Ok(Expression::Number(v as f64))
    }

    fn serialize_u8(self, v: u8) -> Result<Expression, ConvertError> {
        Ok(Expression::Number(f64::from(v)))
    }

    fn serialize_u16(self, v: u16) -> Result<Expression, ConvertError> {
        Ok(Expression::Number(f64::from(v)))
    }

    fn serialize_u32(self, v: u32) -> Result<Expression, ConvertError> {
        Ok(Expression::Number(f64::from(v)))
    }

    fn serialize_u64(self, v: u64) -> Result<Expression, ConvertError> {
        Ok(Expression::Number(v as f64))
    }

    fn serialize_u128(self, v: u128) -> Result<Expression, ConvertError> {
        Ok(Expression::Number(v as f64))
    }

    fn serialize_f32(self, v: f32) -> Result<Expression, ConvertError> {
        Ok(Expression::Number(f64::from(v)))
    }

    fn serialize_f64(self, v: f64) -> Result<Expression, ConvertError> {
        Ok(Expression::Number(v))
    }

    fn serialize_char(self, v: char) -> Result<Expression, ConvertError> {
        Ok(Expression::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Expression, ConvertError> {
        Ok(Expression::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Expression, ConvertError> {
        Ok(Expression::Array(
            v.iter()
                .map(|b| Some(Expression::Number(f64::from(*b))))
                .collect(),
        ))
    }

    fn serialize_none(self) -> Result<Expression, ConvertError> {
        Ok(Expression::Null)
    }

    fn serialize_some<T: ?Sized + Serialize>(self, value: &T) -> Result<Expression, ConvertError> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Expression, ConvertError> {
        Ok(Expression::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Expression, ConvertError> {
        Ok(Expression::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Expression, ConvertError> {
        Ok(Expression::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<Expression, ConvertError> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Expression, ConvertError> {
        let inner = value.serialize(self.nested()?)?;
        Ok(wrap_variant(variant, inner))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeArray, ConvertError> {
        self.array(len)
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeArray, ConvertError> {
        self.array(Some(len))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<SerializeArray, ConvertError> {
        self.array(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeVariant<SerializeArray>, ConvertError> {
        Ok(SerializeVariant {
            variant,
            inner: self.nested()?.array(Some(len))?,
        })
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<SerializeObject, ConvertError> {
        self.object()
    }

    fn serialize_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<SerializeObject, ConvertError> {
        self.object()
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<SerializeVariant<SerializeObject>, ConvertError> {
        Ok(SerializeVariant {
            variant,
            inner: self.nested()?.object()?,
        })
    }
}

struct SerializeArray {
    inner: ExpressionSerializer,
    items: Vec<Option<Expression>>,
}

impl SerializeArray {
    fn push<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), ConvertError> {
        self.items.push(Some(value.serialize(self.inner)?));
        Ok(())
    }

    fn finish(self) -> Expression {
        Expression::Array(self.items)
    }
}

impl ser::SerializeSeq for SerializeArray {
    type Ok = Expression;
    type Error = ConvertError;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), ConvertError> {
        self.push(value)
    }

    fn end(self) -> Result<Expression, ConvertError> {
        Ok(self.finish())
    }
}

impl ser::SerializeTuple for SerializeArray {
    type Ok = Expression;
    type Error = ConvertError;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), ConvertError> {
        self.push(value)
    }

    fn end(self) -> Result<Expression, ConvertError> {
        Ok(self.finish())
    }
}

impl ser::SerializeTupleStruct for SerializeArray {
    type Ok = Expression;
    type Error = ConvertError;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), ConvertError> {
        self.push(value)
    }

    fn end(self) -> Result<Expression, ConvertError> {
        Ok(self.finish())
    }
}

struct SerializeObject {
    inner: ExpressionSerializer,
    object: ObjectLiteral,
    pending_key: Option<Expression>,
}

impl SerializeObject {
    fn field<T: ?Sized + Serialize>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), ConvertError> {
        let value = value.serialize(self.inner)?;
        self.object.insert(object_key(key), Some(value));
        Ok(())
    }

    fn finish(self) -> Expression {
        Expression::Object(self.object)
    }
}

impl ser::SerializeMap for SerializeObject {
    type Ok = Expression;
    type Error = ConvertError;

    fn serialize_key<T: ?Sized + Serialize>(&mut self, key: &T) -> Result<(), ConvertError> {
        self.pending_key = Some(into_key(key.serialize(self.inner)?)?);
        Ok(())
    }

    fn serialize_value<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), ConvertError> {
        let key = self
            .pending_key
            .take()
            .ok_or_else(|| ConvertError::Custom("map value without a key".to_string()))?;
        let value = value.serialize(self.inner)?;
        self.object.insert(key, Some(value));
        Ok(())
    }

    fn end(self) -> Result<Expression, ConvertError> {
        Ok(self.finish())
    }
}

impl ser::SerializeStruct for SerializeObject {
    type Ok = Expression;
    type Error = ConvertError;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), ConvertError> {
        self.field(key, value)
    }

    fn end(self) -> Result<Expression, ConvertError> {
        Ok(self.finish())
    }
}

/// Enum variant with fields, rendered as `{Variant: fields}`.
struct SerializeVariant<S> {
    variant: &'static str,
    inner: S,
}

impl ser::SerializeTupleVariant for SerializeVariant<SerializeArray> {
    type Ok = Expression;
    type Error = ConvertError;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), ConvertError> {
        self.inner.push(value)
    }

    fn end(self) -> Result<Expression, ConvertError> {
        Ok(wrap_variant(self.variant, self.inner.finish()))
    }
}

impl ser::SerializeStructVariant for SerializeVariant<SerializeObject> {
    type Ok = Expression;
    type Error = ConvertError;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), ConvertError> {
        self.inner.field(key, value)
    }

    fn end(self) -> Result<Expression, ConvertError> {
        Ok(wrap_variant(self.variant, self.inner.finish()))
    }
}

// Direct conversions. An `Expression` converts to itself through the
// standard reflexive `From` impl.

impl From<Identifier> for Expression {
    fn from(identifier: Identifier) -> Self {
        Expression::Identifier(identifier)
    }
}

impl From<f64> for Expression {
    fn from(value: f64) -> Self {
        Expression::Number(value)
    }
}

impl From<i32> for Expression {
    fn from(value: i32) -> Self {
        Expression::Number(f64::from(value))
    }
}

impl From<u32> for Expression {
    fn from(value: u32) -> Self {
        Expression::Number(f64::from(value))
    }
}

impl From<Decimal> for Expression {
    fn from(value: Decimal) -> Self {
        Expression::Number(value.to_f64().unwrap_or(f64::NAN))
    }
}

impl From<bool> for Expression {
    fn from(value: bool) -> Self {
        Expression::Boolean(value)
    }
}

impl From<&str> for Expression {
    fn from(value: &str) -> Self {
        Expression::String(value.to_string())
    }
}

impl From<String> for Expression {
    fn from(value: String) -> Self {
        Expression::String(value)
    }
}

impl From<ObjectLiteral> for Expression {
    fn from(object: ObjectLiteral) -> Self {
        Expression::Object(object)
    }
}

impl From<Function> for Expression {
    fn from(function: Function) -> Self {
        Expression::Function(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_key_falls_back_to_string() {
        assert_eq!(object_key("first-name"), Expression::String("first-name".into()));
        assert_eq!(
            object_key("default"),
            Expression::Identifier(Identifier::key("default").unwrap())
        );
    }

    #[test]
    fn test_numeric_and_boolean_keys() {
        assert_eq!(into_key(Expression::Number(1.0)), Ok(Expression::Number(1.0)));
        assert_eq!(
            into_key(Expression::Boolean(true)),
            Ok(Expression::String("true".into()))
        );
        assert!(matches!(
            into_key(Expression::Null),
            Err(ConvertError::UnsupportedKey(_))
        ));
    }

    #[test]
    fn test_depth_counts_only_containers() {
        let top = ExpressionSerializer { depth: MAX_DEPTH };
        assert!(top.nested().is_err());
        assert_eq!(
            ser::Serializer::serialize_i32(top, 5),
            Ok(Expression::Number(5.0))
        );
    }
}
