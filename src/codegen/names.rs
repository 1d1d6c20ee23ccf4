//! メソッドスコープの一意名割り当て
//!
//! ループ変換が導入する一時変数（`__min`、`__temp`など）がユーザー由来の
//! 識別子と衝突しないよう、スコープ内で一意な名前を払い出す。

use std::collections::HashSet;

/// メソッドごとの名前アロケータ
///
/// スコープはメソッド1つ分。パラメータ名とローカルの割り当て済み名で
/// シードしてから使う。
#[derive(Debug, Default)]
pub struct NameAllocator {
    used: HashSet<String>,
}

impl NameAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 既存の識別子でシードしたアロケータを作る
    pub fn seeded<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            used: names.into_iter().map(str::to_string).collect(),
        }
    }

    /// ヒントを元にスコープ内で一意な名前を払い出す
    pub fn alloc(&mut self, hint: &str) -> String {
        if self.used.insert(hint.to_string()) {
            return hint.to_string();
        }
        let mut n = 1;
        loop {
            let candidate = format!("{}{}", hint, n);
            if self.used.insert(candidate.clone()) {
                return candidate;
            }
            n += 1;
        }
    }
}
