//! クラス／メソッド出力レイヤー
//!
//! IRモジュールをクラス定義の列へ変換し、メソッド本体ごとに文変換
//! エンジンを駆動する。各クラスの出力は自己完結した単一の名前付き
//! ユニットで、独立に出力して連結できる。

use crate::error::{CodegenError, ExpResult};
use crate::ir::{Class, Expression, Method, Module, Type};

use super::names::NameAllocator;
use super::output::IndentedText;

/// このバックエンドが自身の識別として認識するタグ
const IDENTITY_TAGS: &[&str] = &["js"];

/// JavaScriptコードジェネレータ
///
/// 生成は単一パスの深さ優先木走査で、IRを一切変更しない。メソッド本体の
/// 変換中に必要な可変状態（名前アロケータ）はインスタンスに持たせず、
/// `MethodCtx`として明示的に引き回す。
pub struct JsGenerator {
    identity_tags: &'static [&'static str],
}

impl Default for JsGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsGenerator {
    pub fn new() -> Self {
        Self {
            identity_tags: IDENTITY_TAGS,
        }
    }

    /// コンパイル時分岐のタグがこのバックエンドを指すかどうか
    pub(crate) fn matches_identity(&self, tag: &str) -> bool {
        self.identity_tags.contains(&tag)
    }

    /// モジュール全体を変換する
    pub fn generate_module(&self, module: &Module) -> ExpResult<String> {
        let mut out = IndentedText::new();
        for class in &module.classes {
            out = out.with(self.generate_class(class)?);
        }
        Ok(out.to_text())
    }

    /// クラスを自己完結した即時実行関数として出力する
    fn generate_class(&self, class: &Class) -> ExpResult<IndentedText> {
        let name = &class.name;
        let mut inner = IndentedText::new().with(format!("function {}() {{\n", name));
        for field in &class.fields {
            inner = inner
                .with(format!("this.{} = ", field.name))
                .with(self.lower_init(field.init.as_ref(), &field.ty)?)
                .with(";");
        }
        inner = inner.with("}\n");
        for method in &class.methods {
            inner = inner.with(self.generate_method(name, method)?);
        }
        inner = inner.with(format!("return {};\n", name));

        Ok(IndentedText::new()
            .with(format!("var {} = (function () {{\n", name))
            .with(inner.indented())
            .with("})();"))
    }

    /// メソッドを出力する
    ///
    /// 修飾フラグに応じて静的／プロトタイプの束縛形式を選び、本体の前に
    /// ローカル変数の宣言を宣言順で出力する。
    fn generate_method(&self, class_name: &str, method: &Method) -> ExpResult<IndentedText> {
        let mut ctx = MethodCtx::for_method(method);
        let header = if method.is_static {
            format!("{}.{} = function(", class_name, method.name)
        } else {
            format!("{}.prototype.{} = function(", class_name, method.name)
        };
        let params = method
            .params
            .iter()
            .map(|p| p.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        let mut inner = IndentedText::new();
        for local in &method.locals {
            inner = inner
                .with(format!("var {} = ", local.alloc_name))
                .with(self.lower_init(local.init.as_ref(), &local.ty)?)
                .with(";\n");
        }
        inner = inner.with(self.lower_block(&method.body, &mut ctx)?);

        Ok(IndentedText::new()
            .with(header)
            .with(params)
            .with(") {\n")
            .with(inner.indented())
            .with("};\n"))
    }

    /// 明示的な初期化式、なければ型に応じたデフォルト値を変換する
    pub(crate) fn lower_init(
        &self,
        init: Option<&Expression>,
        ty: &Type,
    ) -> ExpResult<IndentedText> {
        match init {
            Some(expr) => self.lower_expr(expr),
            None => match ty {
                Type::Int => Ok(IndentedText::from("0")),
                Type::Iterable(_) | Type::Class(_) => Ok(IndentedText::from("null")),
                other => Err(CodegenError::UnhandledInitType {
                    ty: other.to_string(),
                }
                .into()),
            },
        }
    }
}

/// メソッド本体の変換中に明示的に引き回されるコンテキスト
///
/// ループ変換がメソッドスコープの一時名を確保するために使う。1つの
/// コンテキストは同時に1つのメソッド本体の走査にだけ使われる。
#[derive(Debug, Default)]
pub struct MethodCtx {
    pub names: NameAllocator,
}

impl MethodCtx {
    pub fn new() -> Self {
        Self::default()
    }

    /// パラメータ名とローカルの割り当て済み名でシードしたコンテキストを作る
    pub fn for_method(method: &Method) -> Self {
        let seed = method
            .params
            .iter()
            .map(|p| p.name.as_str())
            .chain(method.locals.iter().map(|l| l.alloc_name.as_str()));
        Self {
            names: NameAllocator::seeded(seed),
        }
    }
}

/// モジュール全体をJavaScriptソーステキストへ変換する
pub fn generate(module: &Module) -> ExpResult<String> {
    JsGenerator::new().generate_module(module)
}
