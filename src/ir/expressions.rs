//! 式の定義

use serde::{Deserialize, Serialize};

use super::Type;

/// 生JavaScriptスプライシング組み込み命令の識別子
pub const INTRINSIC_JS_RAW: &str = "js_raw";

/// 式
///
/// 各ノードは上流の意味解析が割り当てた解決済みの型情報を持つ。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    Binary(BinaryExpr),
    Assign(AssignExpr),
    This,
    Member(MemberAccess),
    Index(IndexAccess),
    Immediate(Immediate),
    /// 暗黙のthis経由のフィールド読み出し
    Field(FieldRef),
    Argument(ArgumentRef),
    Local(LocalRef),
    PostfixUnary(PostfixUnary),
    Call(CallExpr),
    New(NewExpr),
    Intrinsic(IntrinsicCall),
    /// 未解決ノードのプレースホルダ（出荷される出力には決して現れない）
    Unknown,
}

/// 二項演算式
///
/// 演算子の語彙は上流の意味解析が決めるため文字列のまま保持する。
/// `ty` は演算結果の解決済みの型。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryExpr {
    pub op: String,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
    pub ty: Type,
}

/// 代入式
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignExpr {
    pub target: Box<Expression>,
    pub value: Box<Expression>,
}

/// メンバアクセス式
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberAccess {
    pub object: Box<Expression>,
    pub member: String,
}

/// 配列アクセス式
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexAccess {
    pub object: Box<Expression>,
    pub index: Box<Expression>,
}

/// 即値
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Immediate {
    pub ty: Type,
    pub value: LiteralValue,
}

/// 即値が保持するリテラル値
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LiteralValue {
    Int(i64),
    Str(String),
    Bool(bool),
}

/// 暗黙のthisのフィールド参照
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldRef {
    pub name: String,
}

/// パラメータ参照（宣言名）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArgumentRef {
    pub name: String,
}

/// ローカル変数参照（割り当て済みの一意名）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalRef {
    pub name: String,
}

/// 後置単項演算式
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostfixUnary {
    pub operand: Box<Expression>,
    pub op: String,
}

/// 呼び出し式
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallExpr {
    pub callee: Box<Expression>,
    pub args: Vec<Expression>,
}

/// インスタンス生成式
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewExpr {
    /// 完全修飾クラス名
    pub class_name: String,
    pub args: Vec<Expression>,
}

/// バックエンド固有フックの呼び出し
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntrinsicCall {
    pub intrinsic: String,
    pub args: Vec<Expression>,
}
