//! ランタイムプレリュード出力
//!
//! 変換後のコードが呼び出す反復・範囲・順序比較プリミティブを実装する、
//! プログラムに依存しない固定のサポートコード。使われるかどうかに
//! かかわらず、プログラムごとに無条件で一度だけ出力される。

const RUNTIME: &str = r#"
$ExpLang = {};
$ExpLang.RangeIterator = (function() {
    function RangeIterator(min, max) { this.current = min; this.max = max; }
    RangeIterator.prototype.hasMore = function() { return this.current < this.max; };
    RangeIterator.prototype.next = function() { return this.current++; };
    return RangeIterator;
})();
$ExpLang.Range = (function() {
    function Range(min, max) { this.min = min; this.max = max; }
    Range.prototype.iterator = function() { return new ($ExpLang.RangeIterator)(this.min, this.max); };
    return Range;
})();
$ExpLang.range = function(min, max) { return new ($ExpLang.Range)(min, max); };
$ExpLang.icomp = function(a, b) { if (a < b) return -1; else if (a > b) return +1; else return 0; };
"#;

/// 固定のランタイムプレリュードを返す
pub fn generate_runtime() -> String {
    RUNTIME.to_string()
}
