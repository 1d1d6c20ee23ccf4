//! コード生成テストの共通モジュール
//!
//! テストで使用するIR構築ヘルパーと変換ヘルパーを定義する。

#![allow(dead_code)]

use explang::codegen::{JsGenerator, MethodCtx};
use explang::error::ExpError;
use explang::ir::*;

/// Int即値
pub fn imm_int(value: i64) -> Expression {
    Expression::Immediate(Immediate {
        ty: Type::Int,
        value: LiteralValue::Int(value),
    })
}

/// String即値
pub fn imm_str(value: &str) -> Expression {
    Expression::Immediate(Immediate {
        ty: Type::String,
        value: LiteralValue::Str(value.to_string()),
    })
}

/// 二項演算式
pub fn binary(op: &str, ty: Type, left: Expression, right: Expression) -> Expression {
    Expression::Binary(BinaryExpr {
        op: op.to_string(),
        left: Box::new(left),
        right: Box::new(right),
        ty,
    })
}

/// ローカル変数参照
pub fn local(name: &str) -> Expression {
    Expression::Local(LocalRef {
        name: name.to_string(),
    })
}

/// パラメータ参照
pub fn argument(name: &str) -> Expression {
    Expression::Argument(ArgumentRef {
        name: name.to_string(),
    })
}

/// 式文
pub fn expr_stmt(expr: Expression) -> Statement {
    Statement::Expression(ExpressionStmt { expr })
}

/// 文の並び
pub fn block(statements: Vec<Statement>) -> Statement {
    Statement::Block(Block { statements })
}

/// 出力に現れたかどうかを確認するためのマーカー文
pub fn marker(name: &str) -> Statement {
    expr_stmt(local(name))
}

/// メソッド定義
pub fn method(
    name: &str,
    is_static: bool,
    params: Vec<Param>,
    locals: Vec<Local>,
    body: Vec<Statement>,
) -> Method {
    Method {
        name: name.to_string(),
        is_static,
        params,
        locals,
        body: Block { statements: body },
    }
}

/// パラメータ
pub fn param(name: &str, ty: Type) -> Param {
    Param {
        name: name.to_string(),
        ty,
    }
}

/// 初期化式のないローカル変数
pub fn local_decl(name: &str, ty: Type) -> Local {
    Local {
        name: name.to_string(),
        ty,
        alloc_name: name.to_string(),
        init: None,
    }
}

/// フィールドだけを持たないクラス
pub fn class_of(name: &str, methods: Vec<Method>) -> Class {
    Class {
        name: name.to_string(),
        fields: vec![],
        methods,
    }
}

/// 式1つを変換してテキストを得る
pub fn lower_expr_text(expr: &Expression) -> String {
    try_lower_expr(expr).expect("expression lowering should succeed")
}

/// 式1つを変換する（エラーを伝える版）
pub fn try_lower_expr(expr: &Expression) -> Result<String, ExpError> {
    JsGenerator::new().lower_expr(expr).map(|t| t.to_text())
}

/// 文1つを変換してテキストを得る
pub fn lower_stmt_text(stmt: &Statement) -> String {
    try_lower_stmt(stmt).expect("statement lowering should succeed")
}

/// 文1つを変換する（エラーを伝える版）
pub fn try_lower_stmt(stmt: &Statement) -> Result<String, ExpError> {
    let mut ctx = MethodCtx::new();
    JsGenerator::new()
        .lower_stmt(stmt, &mut ctx)
        .map(|t| t.to_text())
}
