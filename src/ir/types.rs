//! 型定義

use serde::{Deserialize, Serialize};
use std::fmt;

/// IRの型表現
///
/// 閉じたバリアント集合。ジェネレータは型を推論せず、上流が解決した型を
/// 読み取るだけである。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Type {
    Int,
    Bool,
    String,
    /// 要素型Tの反復可能型
    Iterable(Box<Type>),
    /// 解決済みクラスへの参照
    Class(String),
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Int => write!(f, "Int"),
            Type::Bool => write!(f, "Bool"),
            Type::String => write!(f, "String"),
            Type::Iterable(element) => write!(f, "Iterable<{}>", element),
            Type::Class(name) => write!(f, "{}", name),
        }
    }
}
