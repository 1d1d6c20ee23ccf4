//! インデント追跡テキストビルダー
//!
//! ジェネレータが出力テキストを組み立てるための不変の値型。連結と
//! スコープ付きインデント変換だけをサポートし、最終テキストへの描画は
//! `to_text`で一度だけ行う。

/// 不変のインデント追跡テキストビルダー
#[derive(Debug, Clone, Default)]
pub enum IndentedText {
    #[default]
    Empty,
    Str(String),
    Concat(Box<IndentedText>, Box<IndentedText>),
    Indent(Box<IndentedText>),
}

/// 1段あたりのインデント
const INDENT_UNIT: &str = "    ";

impl IndentedText {
    pub fn new() -> Self {
        IndentedText::Empty
    }

    /// 末尾に別の断片を連結した新しいビルダーを返す
    pub fn with(self, part: impl Into<IndentedText>) -> Self {
        IndentedText::Concat(Box::new(self), Box::new(part.into()))
    }

    /// 全体を1段深いインデントスコープに包む
    pub fn indented(self) -> Self {
        IndentedText::Indent(Box::new(self))
    }

    /// 最終テキストへ描画する
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let mut at_line_start = true;
        self.render(0, &mut at_line_start, &mut out);
        out
    }

    fn render(&self, level: usize, at_line_start: &mut bool, out: &mut String) {
        match self {
            IndentedText::Empty => {}
            IndentedText::Str(text) => {
                for ch in text.chars() {
                    if *at_line_start && ch != '\n' {
                        for _ in 0..level {
                            out.push_str(INDENT_UNIT);
                        }
                    }
                    out.push(ch);
                    *at_line_start = ch == '\n';
                }
            }
            IndentedText::Concat(left, right) => {
                left.render(level, at_line_start, out);
                right.render(level, at_line_start, out);
            }
            IndentedText::Indent(inner) => {
                inner.render(level + 1, at_line_start, out);
            }
        }
    }
}

impl From<&str> for IndentedText {
    fn from(text: &str) -> Self {
        IndentedText::Str(text.to_string())
    }
}

impl From<String> for IndentedText {
    fn from(text: String) -> Self {
        IndentedText::Str(text)
    }
}
