//! 文の定義

use serde::{Deserialize, Serialize};

use super::{Expression, Span};

/// 文
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Statement {
    Block(Block),
    Return(ReturnStmt),
    Expression(ExpressionStmt),
    If(IfStmt),
    StaticIf(StaticIfStmt),
    StaticFail(StaticFailStmt),
    ConstCountLoop(ConstCountLoop),
    CountLoop(CountLoop),
    IteratorLoop(IteratorLoop),
    While(WhileStmt),
}

/// 文の並び
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub statements: Vec<Statement>,
}

/// return文
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnStmt {
    pub value: Option<Expression>,
}

/// 式文
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpressionStmt {
    pub expr: Expression,
}

/// if文
///
/// 両方の分岐が常に存在する。偽側は空のブロックであってもよい。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfStmt {
    pub cond: Expression,
    pub then_branch: Box<Statement>,
    pub else_branch: Box<Statement>,
}

/// コンパイル時分岐
///
/// バックエンド識別タグに基づいて生成時にどちらか一方の分岐だけが
/// 出力される。選ばれなかった分岐は出力に一切到達しない。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaticIfStmt {
    pub tag: String,
    pub then_branch: Box<Statement>,
    pub else_branch: Box<Statement>,
}

/// 無条件のコンパイル時中断
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaticFailStmt {
    pub message: String,
    pub file: String,
    pub span: Span,
}

/// リテラル境界のカウントループ
///
/// 境界がコンパイル時定数なので一時変数を介さずそのまま出力される。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstCountLoop {
    /// ループ変数の割り当て済み一意名
    pub local: String,
    pub min: i64,
    pub max: i64,
    pub body: Box<Statement>,
}

/// 計算された境界のカウントループ
///
/// 各境界式はループ開始前に一度だけ評価される。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountLoop {
    pub local: String,
    pub min: Expression,
    pub max: Expression,
    pub body: Box<Statement>,
}

/// 汎用列挙プロトコルによる反復ループ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IteratorLoop {
    pub local: String,
    pub source: Expression,
    pub body: Box<Statement>,
}

/// while文
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhileStmt {
    pub cond: Expression,
    pub body: Box<Statement>,
}
