//! 式のコード変換
//!
//! 式ツリーからターゲットテキストへの純粋な変換。名前アロケータは
//! 使わない（一時名を必要とするのはループ変換だけ）。

use crate::error::{CodegenError, ExpResult};
use crate::ir::{
    BinaryExpr, Expression, Immediate, IntrinsicCall, LiteralValue, Type, INTRINSIC_JS_RAW,
};

use super::generator::JsGenerator;
use super::output::IndentedText;

/// ネイティブの中置形式のまま出力する演算子
const INFIX_OPERATORS: &[&str] = &[
    "=", "+=", "-=", "==", "!=", "<", ">", "<=", ">=", "+", "-", "*", "/", "%", "|", "&",
];

impl JsGenerator {
    /// 式を変換する
    pub fn lower_expr(&self, expr: &Expression) -> ExpResult<IndentedText> {
        let out = IndentedText::new();
        match expr {
            Expression::Binary(binary) => self.lower_binary(binary),
            Expression::Assign(assign) => Ok(out
                .with(self.lower_expr(&assign.target)?)
                .with(" = ")
                .with(self.lower_expr(&assign.value)?)),
            Expression::This => Ok(out.with("this")),
            Expression::Member(member) => Ok(out
                .with(self.lower_expr(&member.object)?)
                .with(".")
                .with(member.member.as_str())),
            Expression::Index(index) => Ok(out
                .with(self.lower_expr(&index.object)?)
                .with("[")
                .with(self.lower_expr(&index.index)?)
                .with("]")),
            Expression::Immediate(imm) => self.lower_immediate(imm),
            Expression::Field(field) => Ok(out.with(format!("this.{}", field.name))),
            Expression::Argument(arg) => Ok(out.with(arg.name.as_str())),
            Expression::Local(local) => Ok(out.with(local.name.as_str())),
            Expression::PostfixUnary(postfix) => Ok(out
                .with(self.lower_expr(&postfix.operand)?)
                .with(postfix.op.as_str())),
            Expression::Call(call) => Ok(out
                .with(self.lower_expr(&call.callee)?)
                .with(self.call_args(&call.args)?)),
            Expression::New(new) => Ok(out
                .with("new ")
                .with(new.class_name.as_str())
                .with(self.call_args(&new.args)?)),
            Expression::Intrinsic(intrinsic) => self.lower_intrinsic(intrinsic),
            // 上流の解析の抜けを示す番兵。出荷される出力には現れない。
            Expression::Unknown => Ok(out.with("$unknown$")),
        }
    }

    /// 二項演算式を変換する
    ///
    /// 演算子の変換の後に、結果型に応じたラップを施す。Iterable／クラス型は
    /// 素通しで、ターゲット側の被演算子の強制変換に委ねる。
    fn lower_binary(&self, binary: &BinaryExpr) -> ExpResult<IndentedText> {
        let raw = self.binop_raw(binary)?;
        match &binary.ty {
            // 32ビット符号付き整数への切り詰め
            Type::Int => Ok(IndentedText::new().with("((").with(raw).with(")|0)")),
            // 二重否定で正準な真偽値に正規化する
            Type::Bool => Ok(IndentedText::new().with("!!(").with(raw).with(")")),
            Type::Iterable(_) | Type::Class(_) => Ok(raw),
            other => Err(CodegenError::UnhandledBinaryType {
                ty: other.to_string(),
                op: binary.op.clone(),
            }
            .into()),
        }
    }

    /// ラップ前の素の演算子変換
    fn binop_raw(&self, binary: &BinaryExpr) -> ExpResult<IndentedText> {
        let func = match binary.op.as_str() {
            "**" => Some("Math.pow"),
            "..." => Some("$ExpLang.range"),
            "<=>" => Some("$ExpLang.icomp"),
            op if INFIX_OPERATORS.contains(&op) => None,
            op => {
                return Err(CodegenError::UnknownOperator { op: op.to_string() }.into());
            }
        };
        let left = self.lower_expr(&binary.left)?;
        let right = self.lower_expr(&binary.right)?;
        Ok(match func {
            Some(func) => IndentedText::new()
                .with(func)
                .with("(")
                .with(left)
                .with(", ")
                .with(right)
                .with(")"),
            None => IndentedText::new()
                .with(left)
                .with(format!(" {} ", binary.op))
                .with(right),
        })
    }

    /// 即値を変換する
    fn lower_immediate(&self, imm: &Immediate) -> ExpResult<IndentedText> {
        match (&imm.ty, &imm.value) {
            (Type::Int, LiteralValue::Int(value)) => Ok(IndentedText::from(value.to_string())),
            // JSON文字列エスケープはJSの文字列リテラル文法をそのまま往復する
            (Type::String, LiteralValue::Str(value)) => Ok(IndentedText::from(
                serde_json::Value::String(value.clone()).to_string(),
            )),
            (ty, _) => Err(CodegenError::UnhandledImmediateType { ty: ty.to_string() }.into()),
        }
    }

    /// 組み込み命令の呼び出しを変換する
    ///
    /// 生スプライシングは唯一の脱出口で、文字列リテラルの内容を無加工・
    /// 無検査のまま出力に挿入する。
    fn lower_intrinsic(&self, intrinsic: &IntrinsicCall) -> ExpResult<IndentedText> {
        if intrinsic.intrinsic == INTRINSIC_JS_RAW {
            if let Some(Expression::Immediate(Immediate {
                value: LiteralValue::Str(raw),
                ..
            })) = intrinsic.args.first()
            {
                return Ok(IndentedText::from(raw.as_str()));
            }
            return Err(CodegenError::InvalidIntrinsicArgument {
                name: intrinsic.intrinsic.clone(),
            }
            .into());
        }
        Err(CodegenError::UnknownIntrinsic {
            name: intrinsic.intrinsic.clone(),
        }
        .into())
    }

    /// 引数リストをカンマ区切りで変換する
    fn call_args(&self, args: &[Expression]) -> ExpResult<IndentedText> {
        let mut out = IndentedText::new().with("(");
        for (n, arg) in args.iter().enumerate() {
            if n != 0 {
                out = out.with(", ");
            }
            out = out.with(self.lower_expr(arg)?);
        }
        Ok(out.with(")"))
    }
}
