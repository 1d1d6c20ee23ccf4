//! コンパイルパイプラインのパッケージング
//!
//! 意味解析ステージの出力（検証済みIRモジュールと蓄積された診断）を
//! 受け取り、ランタイムプレリュードと生成コードを連結して、実行時に
//! エントリポイントを呼び出す形に包む。

use serde::{Deserialize, Serialize};

use crate::codegen::{generate, generate_runtime};
use crate::error::{ExpError, ExpResult};
use crate::ir::{Module, Span};

/// 意味解析ステージの出力
///
/// 診断リストが空であることがコード生成の前提条件。1件でも残っていれば
/// 生成には入らず、全メッセージをまとめて報告する。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzedProgram {
    pub module: Module,
    #[serde(default)]
    pub diagnostics: Vec<Diagnostic>,
}

/// 上流（構文解析・意味解析）で蓄積された診断
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub message: String,
    #[serde(default)]
    pub span: Span,
}

/// モジュールを実行可能なJavaScriptプログラムへパッケージングする
///
/// 出力は `(function() { <ランタイム> <コード> return Main.main(); })()`
/// の形で、評価するとエントリポイントの結果を返す。`compact`が要求された
/// 場合は生成コードの連続する空白を単一のスペースに圧縮する。
pub fn package_program(
    module: &Module,
    diagnostics: &[Diagnostic],
    compact: bool,
) -> ExpResult<String> {
    if !diagnostics.is_empty() {
        return Err(ExpError::Diagnostics(
            diagnostics.iter().map(|d| d.message.clone()).collect(),
        ));
    }

    log::debug!("コード生成を開始: {} クラス", module.classes.len());
    let mut code = generate(module)?;
    if compact {
        code = compact_whitespace(&code);
    }

    Ok(format!(
        "(function() {{ {}{} return Main.main(); }})()",
        generate_runtime(),
        code
    ))
}

/// 連続する空白を単一のスペースに圧縮し、前後の空白を取り除く
pub fn compact_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
