//! 統一的なエラーハンドリングモジュール
//!
//! このモジュールは、ExpLangバックエンド全体で使用される統一的な
//! エラー型を提供します。上流の診断（ユーザー向け・集約される）と
//! ジェネレータ内部の致命的エラー（最初の1件で即中断）は別系統です。

use crate::ir::Span;
use thiserror::Error;

/// バックエンドの統一エラー型
#[derive(Error, Debug, Clone)]
pub enum ExpError {
    /// コード生成の致命的エラー
    #[error("コード生成エラー: {0}")]
    Codegen(#[from] CodegenError),

    /// IRの不変条件違反
    #[error("IR検証エラー: {0}")]
    Ir(#[from] IrError),

    /// 上流（構文解析・意味解析）で蓄積された診断
    #[error("プログラムにエラーがあります [{}]", .0.join(","))]
    Diagnostics(Vec<String>),
}

/// コード生成エラーの詳細
///
/// いずれもIRの不変条件違反かアクティブなバックエンドで未対応の構文を
/// 示す。回復は試みず、最初の1件で生成全体を中断する。
#[derive(Error, Debug, Clone)]
pub enum CodegenError {
    #[error("未知の演算子: '{op}'")]
    UnknownOperator { op: String },

    #[error("二項演算の結果型 {ty} は扱えません（演算子 '{op}'）")]
    UnhandledBinaryType { ty: String, op: String },

    #[error("即値の型 {ty} は扱えません")]
    UnhandledImmediateType { ty: String },

    #[error("未知の組み込み命令: {name}")]
    UnknownIntrinsic { name: String },

    #[error("組み込み命令 {name} の引数は文字列リテラルでなければなりません")]
    InvalidIntrinsicArgument { name: String },

    #[error("デフォルト初期化できない型: {ty}")]
    UnhandledInitType { ty: String },

    #[error("{file}:{span} で生成を中断しました: {message}")]
    StaticFail {
        message: String,
        file: String,
        span: Span,
    },
}

/// IR不変条件違反の詳細
#[derive(Error, Debug, Clone)]
pub enum IrError {
    #[error("クラス {name} はモジュール内で重複しています")]
    DuplicateClass { name: String },
}

/// Result型のエイリアス
pub type ExpResult<T> = Result<T, ExpError>;
