use jsemit::ast::{
    BinaryOperator, Block, Comment, CommentSpacing, CommentStyle, Conditional, ExceptionHandling,
    Expression, ForIn, Function, Identifier, Loop, ObjectLiteral, Statement, Switch,
    UnaryOperator,
};
use jsemit::render::{RenderConfig, RenderError, render};

fn id(name: &str) -> Expression {
    Expression::identifier(name).unwrap()
}

fn name(name: &str) -> Identifier {
    Identifier::new(name).unwrap()
}

fn call(callee: &str) -> Expression {
    id(callee).call(Vec::<Expression>::new())
}

fn to_text(statement: impl Into<Statement>) -> String {
    render(&statement.into(), &RenderConfig::default()).unwrap()
}

fn to_error(statement: impl Into<Statement>) -> RenderError {
    render(&statement.into(), &RenderConfig::default()).unwrap_err()
}

#[test]
fn test_if_else() {
    let statement = Conditional::new(id("a"))
        .then(Statement::Return(Some(id("a"))))
        .otherwise(Statement::Return(None));
    assert_eq!(to_text(statement), "if(a)return a; else return;");
}

#[test]
fn test_if_without_else() {
    let statement = Conditional::new(id("a").not()).then(call("f"));
    assert_eq!(to_text(statement), "if(!a)f();");
}

#[test]
fn test_else_if_chain() {
    let statement = Conditional::new(id("a"))
        .then(Statement::Return(Some(Expression::Number(1.0))))
        .else_if(id("b"))
        .then(Statement::Return(Some(Expression::Number(2.0))))
        .else_if(id("c"))
        .then(Statement::Return(Some(Expression::Number(3.0))))
        .otherwise(Statement::Return(None));
    assert_eq!(
        to_text(statement),
        "if(a)return 1; else if(b)return 2; else if(c)return 3; else return;"
    );
}

#[test]
fn test_else_if_chain_without_final_else() {
    let statement = Conditional::new(id("a"))
        .then(call("f"))
        .else_if(id("b"))
        .then(call("g"));
    assert_eq!(to_text(statement), "if(a)f(); else if(b)g();");
}

#[test]
fn test_dangling_else_binds_to_outer_if() {
    let inner = Conditional::new(id("b")).then(Statement::Return(None));
    let statement = Conditional::new(id("a"))
        .then(inner)
        .otherwise(Statement::Return(Some(id("c"))));
    assert_eq!(to_text(statement), "if(a){if(b)return;} else return c;");
}

#[test]
fn test_if_requires_condition_and_branch() {
    let missing_condition = Conditional {
        then: Some(Box::new(Statement::Empty)),
        ..Default::default()
    };
    assert_eq!(
        to_error(missing_condition),
        RenderError::MissingChild {
            node: "if",
            child: "condition"
        }
    );

    assert!(matches!(
        to_error(Conditional::new(id("a"))),
        RenderError::MissingChild { node: "if", .. }
    ));
}

#[test]
fn test_try_catch_finally() {
    let statement = ExceptionHandling::new(Statement::Return(None))
        .catch(name("e"), id("alert").call([id("e")]))
        .finally(id("alert").call(["done!"]));
    assert_eq!(
        to_text(statement),
        r#"try{return;}catch(e){alert(e);}finally{alert("done!");}"#
    );
}

#[test]
fn test_try_finally_only() {
    let statement = ExceptionHandling::new(call("f")).finally(call("g"));
    assert_eq!(to_text(statement), "try{f();}finally{g();}");
}

#[test]
fn test_try_requires_a_handler() {
    assert_eq!(
        to_error(ExceptionHandling::new(call("f"))),
        RenderError::MissingHandler
    );
}

#[test]
fn test_catch_block_requires_variable() {
    let statement = ExceptionHandling {
        body: Some(Block::from(call("f"))),
        catch_body: Some(Block::from(call("g"))),
        ..Default::default()
    };
    assert_eq!(
        to_error(statement),
        RenderError::MissingChild {
            node: "catch",
            child: "variable"
        }
    );
}

#[test]
fn test_try_requires_body() {
    let statement = ExceptionHandling {
        catch_variable: Some(name("e")),
        ..Default::default()
    };
    assert_eq!(
        to_error(statement),
        RenderError::MissingChild {
            node: "try",
            child: "body"
        }
    );
}

#[test]
fn test_switch() {
    let statement = Switch::new(id("x"))
        .case(1, [Statement::from(call("f")), Statement::Break(None)])
        .case("two", [Statement::Break(None)])
        .default_case([Statement::Return(None)]);
    assert_eq!(
        to_text(statement),
        r#"switch(x){case 1:f();break;case "two":break;default:return;}"#
    );
}

#[test]
fn test_switch_default_must_be_last() {
    let statement = Switch::new(id("x"))
        .default_case([Statement::Break(None)])
        .case(2, []);
    assert_eq!(to_error(statement), RenderError::DefaultCaseNotLast);
}

#[test]
fn test_for_loop() {
    let statement = Loop::new()
        .init(Expression::declare([id("i").assign(0)]))
        .condition(id("i").binary(BinaryOperator::LessThan, id("n")))
        .iteration(id("i").unary(UnaryOperator::PostIncrement))
        .body(Block::new().push(id("f").call([id("i")])));
    assert_eq!(to_text(statement), "for(var i=0;i<n;i++){f(i);}");
}

#[test]
fn test_empty_for_loop() {
    assert_eq!(to_text(Loop::new().body(Statement::Empty)), "for(;;);");
    assert_eq!(
        to_error(Loop::new()),
        RenderError::MissingChild {
            node: "for",
            child: "body"
        }
    );
}

#[test]
fn test_for_in() {
    let statement =
        ForIn::new(Expression::declare([id("k")]), id("o")).body(id("f").call([id("k")]));
    assert_eq!(to_text(statement), "for(var k in o)f(k);");
}

#[test]
fn test_while_and_do_while() {
    assert_eq!(to_text(Statement::while_loop(id("a"), Block::new())), "while(a){}");
    assert_eq!(
        to_text(Statement::do_while(Block::new().push(call("f")), id("a"))),
        "do{f();}while(a)"
    );
    assert_eq!(to_text(Statement::do_while(call("f"), id("a"))), "do f();while(a)");
}

#[test]
fn test_while_requires_body() {
    let statement = Statement::While {
        condition: Some(id("a")),
        body: None,
    };
    assert_eq!(
        to_error(statement),
        RenderError::MissingChild {
            node: "while",
            child: "body"
        }
    );
}

#[test]
fn test_label_and_continue() {
    let statement = Statement::labeled(
        name("outer"),
        Loop::new().body(Statement::Continue(Some(name("outer")))),
    );
    assert_eq!(to_text(statement), "outer:for(;;)continue outer;");
}

#[test]
fn test_with_and_throw() {
    assert_eq!(to_text(Statement::with(id("o"), call("f"))), "with(o)f();");
    assert_eq!(
        to_text(Statement::Throw(Expression::construct(id("Error"), ["x"]))),
        r#"throw new Error("x")"#
    );
}

#[test]
fn test_block_with_unset_statement() {
    let block = Block {
        statements: vec![Some(Statement::Expression(id("a"))), None],
    };
    assert_eq!(to_text(block), "{a;;}");
}

#[test]
fn test_ambiguous_statement_starts_are_parenthesized() {
    let object = Block::new().push(Expression::Object(ObjectLiteral::new().with_property("a", 1)));
    assert_eq!(to_text(object), "{({a:1});}");

    let anonymous =
        Block::new().push(Expression::Function(Function::new()).call(Vec::<Expression>::new()));
    assert_eq!(to_text(anonymous), "{(function(){}());}");

    let declaration = Block::new().push(Expression::Function(Function::named(name("f"))));
    assert_eq!(to_text(declaration), "{function f(){}}");
}

#[test]
fn test_comments() {
    assert_eq!(to_text(Comment::new("note")), "/*note*/");
    assert_eq!(
        to_text(Comment::new("note").spacing(CommentSpacing::Padded)),
        "/* note */"
    );
    assert_eq!(to_text(Comment::new("a\nb")), "//a\n//b\n");
    assert_eq!(
        to_text(Comment::new("a\nb").style(CommentStyle::Block)),
        "/*a\nb*/"
    );
    assert_eq!(to_text(Comment::new("a */ b")), "//a */ b\n");
    assert_eq!(to_text(Comment::new("a\rcode();")), "//a\n//code();\n");
    assert_eq!(to_text(Comment::new("a\r\nb")), "//a\n//b\n");
    assert_eq!(to_text(Comment::new("a\u{2028}b")), "//a\n//b\n");
    assert_eq!(
        to_text(Comment::new("a\u{2029}b").style(CommentStyle::SingleLine)),
        "//a\n//b\n"
    );
    assert_eq!(
        to_text(Comment::new("a */ b").style(CommentStyle::Block)),
        "/*a * / b*/"
    );
    assert_eq!(
        to_text(
            Comment::new("note")
                .style(CommentStyle::SingleLine)
                .spacing(CommentSpacing::Padded)
        ),
        "// note\n"
    );
}

#[test]
fn test_script_block_and_trailing_terminator() {
    let statement = Statement::Expression(id("a").assign(1));
    let config = RenderConfig {
        script_block: true,
        trailing_terminator: true,
        ..RenderConfig::default()
    };
    assert_eq!(
        render(&statement, &config).unwrap(),
        r#"<script type="text/javascript">a=1;</script>"#
    );

    let no_terminator = RenderConfig {
        trailing_terminator: true,
        ..RenderConfig::default()
    };
    let block = Statement::Block(Block::new().push(call("f")));
    assert_eq!(render(&block, &no_terminator).unwrap(), "{f();}");
}

#[test]
fn test_render_into_appends() {
    let mut out = String::from("x;");
    jsemit::render_into(&Statement::Expression(call("f")), &mut out, &RenderConfig::default())
        .unwrap();
    assert_eq!(out, "x;f()");
}

#[test]
fn test_requires_terminator() {
    assert!(Statement::Expression(id("a")).requires_terminator());
    assert!(Statement::Return(None).requires_terminator());
    assert!(!Statement::Block(Block::new()).requires_terminator());
    assert!(!Statement::from(Conditional::new(id("a"))).requires_terminator());
    let declaration = Statement::Expression(Expression::Function(Function::named(name("f"))));
    assert!(!declaration.requires_terminator());
}
