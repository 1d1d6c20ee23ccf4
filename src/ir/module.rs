//! モジュール構造

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{Block, Expression, Type};
use crate::error::IrError;

/// IRのルートノード（コンパイル単位全体を表す）
///
/// 不変条件: クラス名はモジュール内で一意。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub classes: Vec<Class>,
}

impl Module {
    /// モジュールの不変条件を検証する
    ///
    /// 生成自体は入力が既に検証済みであることを前提とするため、これは
    /// CLIの`check`のような外側の入口で使う。
    pub fn validate(&self) -> Result<(), IrError> {
        let mut seen = HashSet::new();
        for class in &self.classes {
            if !seen.insert(class.name.as_str()) {
                return Err(IrError::DuplicateClass {
                    name: class.name.clone(),
                });
            }
        }
        Ok(())
    }
}

/// クラス定義
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Class {
    pub name: String,
    pub fields: Vec<Field>,
    pub methods: Vec<Method>,
}

/// クラスのフィールド
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub ty: Type,
    pub init: Option<Expression>,
}

/// メソッド定義
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Method {
    pub name: String,
    pub is_static: bool,
    pub params: Vec<Param>,
    pub locals: Vec<Local>,
    pub body: Block,
}

/// メソッドのパラメータ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Param {
    pub name: String,
    pub ty: Type,
}

/// メソッドのローカル変数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Local {
    pub name: String,
    pub ty: Type,
    /// 上流が衝突回避のために割り当てた一意名
    pub alloc_name: String,
    pub init: Option<Expression>,
}
