use std::collections::BTreeMap;

use jsemit::ast::{Expression, Identifier, ObjectLiteral};
use jsemit::convert::{ConvertError, MAX_DEPTH, to_expression};
use jsemit::render::RenderConfig;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::{Value, json};

fn render(expression: &Expression) -> String {
    expression.render(&RenderConfig::default()).unwrap()
}

fn convert<T: Serialize + ?Sized>(value: &T) -> String {
    render(&to_expression(value).unwrap())
}

#[derive(Serialize)]
struct Person {
    name: String,
    function: String,
}

#[derive(Serialize)]
struct Product {
    #[serde(rename = "product-id")]
    id: u32,
    #[serde(with = "rust_decimal::serde::float")]
    price: Decimal,
    tags: Vec<&'static str>,
    discontinued: Option<bool>,
}

#[derive(Serialize)]
enum Shape {
    Empty,
    Circle(f64),
    Rect { w: u8, h: u8 },
}

#[test]
fn test_struct_to_object_literal() {
    let person = Person {
        name: "Dave".to_string(),
        function: "Developer".to_string(),
    };
    assert_eq!(convert(&person), r#"{name:"Dave",function:"Developer"}"#);
}

#[test]
fn test_field_order_and_key_kinds() {
    let product = Product {
        id: 7,
        price: Decimal::new(25, 1),
        tags: vec!["new", "sale"],
        discontinued: None,
    };
    assert_eq!(
        convert(&product),
        r#"{"product-id":7,price:2.5,tags:["new","sale"],discontinued:null}"#
    );
}

#[test]
fn test_scalars() {
    assert_eq!(to_expression(&()).unwrap(), Expression::Null);
    assert_eq!(to_expression(&true).unwrap(), Expression::Boolean(true));
    assert_eq!(to_expression(&42u64).unwrap(), Expression::Number(42.0));
    assert_eq!(to_expression(&'x').unwrap(), Expression::String("x".to_string()));
    assert_eq!(to_expression("42").unwrap(), Expression::String("42".to_string()));
}

#[test]
fn test_sequences_keep_nulls() {
    let values = vec![Some(1), None, Some(3)];
    assert_eq!(convert(&values), "[1,null,3]");
    assert_eq!(convert(&(1, "a", false)), r#"[1,"a",false]"#);
}

#[test]
fn test_json_values_keep_insertion_order() {
    let value = json!({"b": 1, "a": [true, null], "c d": {"x": 1.5}});
    assert_eq!(convert(&value), r#"{b:1,a:[true,null],"c d":{x:1.5}}"#);
}

#[test]
fn test_enum_variants() {
    assert_eq!(convert(&Shape::Empty), r#""Empty""#);
    assert_eq!(convert(&Shape::Circle(1.5)), "{Circle:1.5}");
    assert_eq!(convert(&Shape::Rect { w: 2, h: 3 }), "{Rect:{w:2,h:3}}");
}

#[test]
fn test_map_keys() {
    let mut numbered = BTreeMap::new();
    numbered.insert(1, "one");
    numbered.insert(2, "two");
    assert_eq!(convert(&numbered), r#"{1:"one",2:"two"}"#);

    let mut pairs = BTreeMap::new();
    pairs.insert((1, 2), "pair");
    assert!(matches!(
        to_expression(&pairs),
        Err(ConvertError::UnsupportedKey(_))
    ));
}

#[test]
fn test_negative_and_non_finite_keys_are_quoted() {
    let negative = BTreeMap::from([(-1, "a"), (0, "b")]);
    assert_eq!(convert(&negative), r#"{"-1":"a",0:"b"}"#);

    let mut object = ObjectLiteral::new();
    object.insert(Expression::Number(f64::NEG_INFINITY), Some(Expression::Number(1.0)));
    object.insert(Expression::Number(f64::NAN), None);
    assert_eq!(
        render(&Expression::Object(object)),
        r#"{"-Infinity":1,"NaN":null}"#
    );
}

#[test]
fn test_reserved_field_names_are_identifier_keys() {
    let mut map = BTreeMap::new();
    map.insert("class", "x");
    let expected = ObjectLiteral::new().with(
        Expression::Identifier(Identifier::key("class").unwrap()),
        "x",
    );
    assert_eq!(to_expression(&map).unwrap(), Expression::Object(expected));
}

#[test]
fn test_conversion_is_deterministic() {
    let value = json!({"name": "Dave", "skills": ["rust", "js"], "age": 40});
    assert_eq!(to_expression(&value).unwrap(), to_expression(&value).unwrap());
}

#[test]
fn test_depth_limit() {
    let mut deep = Value::Null;
    for _ in 0..MAX_DEPTH + 1 {
        deep = Value::Array(vec![deep]);
    }
    assert_eq!(
        to_expression(&deep),
        Err(ConvertError::DepthLimitExceeded(MAX_DEPTH))
    );

    let mut shallow = Value::Null;
    for _ in 0..MAX_DEPTH {
        shallow = Value::Array(vec![shallow]);
    }
    assert!(to_expression(&shallow).is_ok());
}

#[test]
fn test_direct_conversions() {
    let tree = Expression::identifier("a").unwrap();
    assert_eq!(Expression::from(tree.clone()), tree);
    assert_eq!(Expression::from(Decimal::new(-125, 2)), Expression::Number(-1.25));
    assert_eq!(Expression::from("text"), Expression::String("text".to_string()));
}
