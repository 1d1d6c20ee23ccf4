//! 文のコード変換
//!
//! 文を再帰的にターゲットテキストへ変換する。ループ変換はメソッド
//! スコープの一時名を`MethodCtx`経由で確保する。

use crate::error::{CodegenError, ExpResult};
use crate::ir::{Block, Statement};

use super::generator::{JsGenerator, MethodCtx};
use super::output::IndentedText;

impl JsGenerator {
    /// ブロックを変換する（子の変換結果を順に連結）
    pub fn lower_block(&self, block: &Block, ctx: &mut MethodCtx) -> ExpResult<IndentedText> {
        let mut out = IndentedText::new();
        for stmt in &block.statements {
            out = out.with(self.lower_stmt(stmt, ctx)?);
        }
        Ok(out)
    }

    /// 文を変換する
    pub fn lower_stmt(&self, stmt: &Statement, ctx: &mut MethodCtx) -> ExpResult<IndentedText> {
        let out = IndentedText::new();
        match stmt {
            Statement::Block(block) => self.lower_block(block, ctx),
            Statement::Return(ret) => match &ret.value {
                Some(value) => Ok(out
                    .with("return ")
                    .with(self.lower_expr(value)?)
                    .with(";\n")),
                None => Ok(out.with("return;\n")),
            },
            Statement::Expression(stmt) => {
                Ok(out.with(self.lower_expr(&stmt.expr)?).with(";\n"))
            }
            // 偽側が空でも明示的な二分岐を保つ
            Statement::If(if_stmt) => Ok(out
                .with("if (")
                .with(self.lower_expr(&if_stmt.cond)?)
                .with(")")
                .with("{")
                .with(self.lower_stmt(&if_stmt.then_branch, ctx)?)
                .with("}")
                .with("else {")
                .with(self.lower_stmt(&if_stmt.else_branch, ctx)?)
                .with("}")),
            // 生成時の分岐選択。選ばれなかった枝は変換すらされない。
            Statement::StaticIf(static_if) => {
                if self.matches_identity(&static_if.tag) {
                    self.lower_stmt(&static_if.then_branch, ctx)
                } else {
                    self.lower_stmt(&static_if.else_branch, ctx)
                }
            }
            Statement::StaticFail(fail) => Err(CodegenError::StaticFail {
                message: fail.message.clone(),
                file: fail.file.clone(),
                span: fail.span,
            }
            .into()),
            // リテラル境界はそのまま出力できるので一時変数は不要
            Statement::ConstCountLoop(loop_stmt) => Ok(out
                .with(format!(
                    "for ({local} = {min}; {local} < {max}; {local}++) {{",
                    local = loop_stmt.local,
                    min = loop_stmt.min,
                    max = loop_stmt.max
                ))
                .with(self.lower_stmt(&loop_stmt.body, ctx)?)
                .with("}")),
            // 境界式の副作用を繰り返さないよう、ループ開始前に一度だけ評価する
            Statement::CountLoop(loop_stmt) => {
                let min_name = ctx.names.alloc("__min");
                let max_name = ctx.names.alloc("__max");
                Ok(out
                    .with(format!("var {} = ", min_name))
                    .with(self.lower_expr(&loop_stmt.min)?)
                    .with(";")
                    .with(format!("var {} = ", max_name))
                    .with(self.lower_expr(&loop_stmt.max)?)
                    .with(";")
                    .with(format!(
                        "for ({local} = {min}; {local} < {max}; {local}++) {{",
                        local = loop_stmt.local,
                        min = min_name,
                        max = max_name
                    ))
                    .with(self.lower_stmt(&loop_stmt.body, ctx)?)
                    .with("}"))
            }
            // 汎用の列挙プロトコル。任意のIterable値に使える唯一のループ形式。
            Statement::IteratorLoop(loop_stmt) => {
                let temp_name = ctx.names.alloc("__temp");
                Ok(out
                    .with(format!("var {} = ", temp_name))
                    .with(self.lower_expr(&loop_stmt.source)?)
                    .with(".iterator();")
                    .with(format!("while ({}.hasMore()) {{", temp_name))
                    .with(format!("{} = {}.next();", loop_stmt.local, temp_name))
                    .with(self.lower_stmt(&loop_stmt.body, ctx)?)
                    .with("}"))
            }
            Statement::While(while_stmt) => Ok(out
                .with("while (")
                .with(self.lower_expr(&while_stmt.cond)?)
                .with(")")
                .with("{")
                .with(self.lower_stmt(&while_stmt.body, ctx)?)
                .with("}")),
        }
    }
}
