//! 式変換の統合テスト
//!
//! 演算子テーブル、結果型に応じたラップ、即値のエスケープ、
//! 組み込み命令の生スプライシングを検証する。

mod common;

use common::*;
use explang::error::{CodegenError, ExpError};
use explang::ir::*;
use pretty_assertions::assert_eq;
use test_case::test_case;

// ========== 二項演算: Int結果のラップ ==========

#[test_case("+", "((1 + 2)|0)"; "add")]
#[test_case("-", "((1 - 2)|0)"; "sub")]
#[test_case("*", "((1 * 2)|0)"; "mul")]
#[test_case("/", "((1 / 2)|0)"; "div")]
#[test_case("%", "((1 % 2)|0)"; "rem")]
#[test_case("|", "((1 | 2)|0)"; "bit_or")]
#[test_case("&", "((1 & 2)|0)"; "bit_and")]
#[test_case("**", "((Math.pow(1, 2))|0)"; "power")]
#[test_case("<=>", "(($ExpLang.icomp(1, 2))|0)"; "icomp")]
fn test_int_binary(op: &str, expected: &str) {
    let expr = binary(op, Type::Int, imm_int(1), imm_int(2));
    assert_eq!(lower_expr_text(&expr), expected);
}

// ========== 二項演算: Bool結果のラップ ==========

#[test_case("==", "!!(1 == 2)"; "eq")]
#[test_case("!=", "!!(1 != 2)"; "ne")]
#[test_case("<", "!!(1 < 2)"; "lt")]
#[test_case(">", "!!(1 > 2)"; "gt")]
#[test_case("<=", "!!(1 <= 2)"; "le")]
#[test_case(">=", "!!(1 >= 2)"; "ge")]
fn test_bool_binary(op: &str, expected: &str) {
    let expr = binary(op, Type::Bool, imm_int(1), imm_int(2));
    assert_eq!(lower_expr_text(&expr), expected);
}

#[test_case("+=", "((x += 2)|0)"; "add_assign")]
#[test_case("-=", "((x -= 2)|0)"; "sub_assign")]
#[test_case("=", "((x = 2)|0)"; "plain_assign")]
fn test_assigning_binary(op: &str, expected: &str) {
    let expr = binary(op, Type::Int, local("x"), imm_int(2));
    assert_eq!(lower_expr_text(&expr), expected);
}

#[test]
fn test_range_binary_is_not_wrapped() {
    let expr = binary(
        "...",
        Type::Iterable(Box::new(Type::Int)),
        imm_int(2),
        imm_int(5),
    );
    assert_eq!(lower_expr_text(&expr), "$ExpLang.range(2, 5)");
}

#[test]
fn test_class_typed_binary_is_not_wrapped() {
    let expr = binary(
        "+",
        Type::Class("Point".to_string()),
        local("a"),
        local("b"),
    );
    assert_eq!(lower_expr_text(&expr), "a + b");
}

#[test]
fn test_nested_binary_wraps_each_level() {
    let inner = binary("*", Type::Int, local("a"), local("b"));
    let expr = binary("+", Type::Int, inner, imm_int(1));
    assert_eq!(lower_expr_text(&expr), "((((a * b)|0) + 1)|0)");
}

#[test]
fn test_unknown_operator_is_rejected() {
    let expr = binary("^", Type::Int, imm_int(1), imm_int(2));
    let err = try_lower_expr(&expr).unwrap_err();
    assert!(matches!(
        err,
        ExpError::Codegen(CodegenError::UnknownOperator { op }) if op == "^"
    ));
}

#[test]
fn test_string_binary_result_is_rejected() {
    let expr = binary("+", Type::String, imm_str("a"), imm_str("b"));
    let err = try_lower_expr(&expr).unwrap_err();
    assert!(matches!(
        err,
        ExpError::Codegen(CodegenError::UnhandledBinaryType { .. })
    ));
}

// ========== 即値 ==========

#[test_case(42, "42"; "positive")]
#[test_case(0, "0"; "zero")]
#[test_case(-7, "-7"; "negative")]
fn test_int_immediate(value: i64, expected: &str) {
    assert_eq!(lower_expr_text(&imm_int(value)), expected);
}

#[test]
fn test_string_immediate_is_quoted() {
    assert_eq!(lower_expr_text(&imm_str("hello")), "\"hello\"");
}

#[test]
fn test_string_immediate_escapes_special_characters() {
    let expr = imm_str("say \"hi\"\n\t\\");
    assert_eq!(lower_expr_text(&expr), "\"say \\\"hi\\\"\\n\\t\\\\\"");
}

#[test]
fn test_string_immediate_passes_unicode_through() {
    assert_eq!(lower_expr_text(&imm_str("π≈3")), "\"π≈3\"");
}

#[test]
fn test_bool_immediate_is_rejected() {
    let expr = Expression::Immediate(Immediate {
        ty: Type::Bool,
        value: LiteralValue::Bool(true),
    });
    let err = try_lower_expr(&expr).unwrap_err();
    assert!(matches!(
        err,
        ExpError::Codegen(CodegenError::UnhandledImmediateType { .. })
    ));
}

#[test]
fn test_mismatched_immediate_is_rejected() {
    let expr = Expression::Immediate(Immediate {
        ty: Type::Int,
        value: LiteralValue::Str("42".to_string()),
    });
    let err = try_lower_expr(&expr).unwrap_err();
    assert!(matches!(
        err,
        ExpError::Codegen(CodegenError::UnhandledImmediateType { .. })
    ));
}

// ========== 参照とアクセス ==========

#[test]
fn test_this_expression() {
    assert_eq!(lower_expr_text(&Expression::This), "this");
}

#[test]
fn test_field_reference_goes_through_this() {
    let expr = Expression::Field(FieldRef {
        name: "count".to_string(),
    });
    assert_eq!(lower_expr_text(&expr), "this.count");
}

#[test]
fn test_argument_and_local_references() {
    assert_eq!(lower_expr_text(&argument("n")), "n");
    assert_eq!(lower_expr_text(&local("x1")), "x1");
}

#[test]
fn test_member_access() {
    let expr = Expression::Member(MemberAccess {
        object: Box::new(Expression::This),
        member: "size".to_string(),
    });
    assert_eq!(lower_expr_text(&expr), "this.size");
}

#[test]
fn test_index_access() {
    let expr = Expression::Index(IndexAccess {
        object: Box::new(local("xs")),
        index: Box::new(imm_int(0)),
    });
    assert_eq!(lower_expr_text(&expr), "xs[0]");
}

#[test]
fn test_assignment() {
    let expr = Expression::Assign(AssignExpr {
        target: Box::new(local("x")),
        value: Box::new(imm_int(3)),
    });
    assert_eq!(lower_expr_text(&expr), "x = 3");
}

#[test]
fn test_postfix_unary() {
    let expr = Expression::PostfixUnary(PostfixUnary {
        operand: Box::new(local("i")),
        op: "++".to_string(),
    });
    assert_eq!(lower_expr_text(&expr), "i++");
}

// ========== 呼び出しと生成 ==========

#[test]
fn test_call_with_arguments() {
    let callee = Expression::Member(MemberAccess {
        object: Box::new(Expression::This),
        member: "f".to_string(),
    });
    let expr = Expression::Call(CallExpr {
        callee: Box::new(callee),
        args: vec![imm_int(1), imm_int(2)],
    });
    assert_eq!(lower_expr_text(&expr), "this.f(1, 2)");
}

#[test]
fn test_call_without_arguments() {
    let expr = Expression::Call(CallExpr {
        callee: Box::new(local("f")),
        args: vec![],
    });
    assert_eq!(lower_expr_text(&expr), "f()");
}

#[test]
fn test_new_expression() {
    let expr = Expression::New(NewExpr {
        class_name: "Point".to_string(),
        args: vec![imm_int(1), imm_int(2)],
    });
    assert_eq!(lower_expr_text(&expr), "new Point(1, 2)");
}

#[test]
fn test_unknown_expression_lowers_to_sentinel() {
    assert_eq!(lower_expr_text(&Expression::Unknown), "$unknown$");
}

// ========== 組み込み命令 ==========

#[test]
fn test_raw_intrinsic_splices_literal_verbatim() {
    let expr = Expression::Intrinsic(IntrinsicCall {
        intrinsic: INTRINSIC_JS_RAW.to_string(),
        args: vec![imm_str("if (x) { weird(); }")],
    });
    // エスケープされずそのまま出力に入る
    assert_eq!(lower_expr_text(&expr), "if (x) { weird(); }");
}

#[test]
fn test_raw_intrinsic_rejects_non_literal_argument() {
    let expr = Expression::Intrinsic(IntrinsicCall {
        intrinsic: INTRINSIC_JS_RAW.to_string(),
        args: vec![local("code")],
    });
    let err = try_lower_expr(&expr).unwrap_err();
    assert!(matches!(
        err,
        ExpError::Codegen(CodegenError::InvalidIntrinsicArgument { .. })
    ));
}

#[test]
fn test_raw_intrinsic_rejects_missing_argument() {
    let expr = Expression::Intrinsic(IntrinsicCall {
        intrinsic: INTRINSIC_JS_RAW.to_string(),
        args: vec![],
    });
    let err = try_lower_expr(&expr).unwrap_err();
    assert!(matches!(
        err,
        ExpError::Codegen(CodegenError::InvalidIntrinsicArgument { .. })
    ));
}

#[test]
fn test_unknown_intrinsic_is_rejected() {
    let expr = Expression::Intrinsic(IntrinsicCall {
        intrinsic: "wasm_raw".to_string(),
        args: vec![imm_str("(nop)")],
    });
    let err = try_lower_expr(&expr).unwrap_err();
    assert!(matches!(
        err,
        ExpError::Codegen(CodegenError::UnknownIntrinsic { name }) if name == "wasm_raw"
    ));
}
